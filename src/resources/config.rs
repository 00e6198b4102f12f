use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::errors::{ConfigError, Result};

/// Top-level configuration for the simulation, loadable from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SimulationConfig {
    pub flight: FlightConfig,
    pub start: StartConfig,
    pub camera: CameraConfig,
    pub scene: SceneConfig,
}

impl SimulationConfig {
    pub fn load(path: &str) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.flight.timestep <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "timestep must be positive, got {}",
                self.flight.timestep
            )));
        }
        if self.flight.cobra.timeout <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "cobra timeout must be positive, got {}",
                self.flight.cobra.timeout
            )));
        }
        Ok(())
    }
}

/// Tunable parameters of the flight-control model.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct FlightConfig {
    /// Simulation timestep (s).
    pub timestep: f64,
    /// Base rotation rate for keyboard attitude changes (degrees/s).
    pub rotation_rate: f64,
    /// Throttle acceleration/deceleration rate (units/s²).
    pub acceleration_rate: f64,
    /// Multiplier on `rotation_rate` for airborne roll commands.
    pub airborne_roll_factor: f64,
    /// Scale applied to raw mouse deltas before they become degrees.
    pub mouse_sensitivity: f64,
    /// Gravitational acceleration (units/s²).
    pub gravity: f64,
    /// Fraction of `gravity` applied to altitude while under power.
    pub gravity_factor: f64,
    /// Altitude of the ground plane (world units).
    pub ground_level: f64,
    /// Height of the auto-level band above the ground (world units).
    pub level_band: f64,
    pub cobra: CobraConfig,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0 / 120.0,
            rotation_rate: 50.0,
            acceleration_rate: 10.0,
            airborne_roll_factor: 1.5,
            mouse_sensitivity: 0.1,
            gravity: 9.8,
            gravity_factor: 0.5,
            ground_level: 1.0,
            level_band: 0.5,
            cobra: CobraConfig::default(),
        }
    }
}

/// Thresholds of the cobra-maneuver state machine. All pitch values in
/// degrees, rates in degrees/s, times in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CobraConfig {
    /// Lower edge of the automatic entry pitch window (exclusive).
    pub entry_pitch_min: f64,
    /// Upper edge of the automatic entry pitch window (exclusive).
    pub entry_pitch_max: f64,
    /// Minimum pitch rate required for automatic entry.
    pub entry_pitch_rate: f64,
    /// Lower edge of the recovery pitch window (exclusive).
    pub exit_pitch_min: f64,
    /// Upper edge of the recovery pitch window (exclusive).
    pub exit_pitch_max: f64,
    /// Pitch beyond which the maneuver is abandoned (exclusive).
    pub exit_pitch_over: f64,
    /// Forced exit after this long in the maneuver.
    pub timeout: f64,
    /// Pitch substituted into the forward vector while the maneuver holds.
    pub pitch_hold: f64,
    /// Scale on translational speed while the maneuver holds.
    pub speed_scale: f64,
}

impl Default for CobraConfig {
    fn default() -> Self {
        Self {
            entry_pitch_min: 89.0,
            entry_pitch_max: 129.0,
            entry_pitch_rate: 40.0,
            exit_pitch_min: 10.0,
            exit_pitch_max: 89.0,
            exit_pitch_over: 130.0,
            timeout: 3.0,
            pitch_hold: 10.0,
            speed_scale: 0.05,
        }
    }
}

/// Where and how the airplane starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartConfig {
    /// Initial position (world units).
    pub position: Vector3<f64>,
    /// Initial heading (degrees).
    pub heading: f64,
    /// Initial cruise speed (units/s).
    pub speed: f64,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(-102.815, 1.0, -59.034),
            heading: 0.0,
            speed: 1.0,
        }
    }
}

/// Parameters of the follow camera.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Follow distance from the airplane (world units).
    pub distance: f64,
    /// Height offset above the airplane (world units).
    pub height: f64,
    /// Rate at which the orbit-adjust keys move the orbit angles (degrees/s).
    pub adjust_rate: f64,
    /// Initial orbit angles around the airplane (degrees).
    pub initial_orbit: [f64; 2],
    /// Start in chase mode instead of orbit mode.
    pub chase: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 10.0,
            height: 3.0,
            adjust_rate: 50.0,
            initial_orbit: [0.0, 8.0],
            chase: false,
        }
    }
}

/// Which scene dressing the demo uses. The flight model is identical in
/// both; only lighting and background differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneVariant {
    /// Flat-lit scene with a sky-blue background.
    Basic,
    /// PBR scene lit by an HDR environment map with a skybox background.
    PbrIbl,
}

/// Asset paths and scales for the demo scene.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub variant: SceneVariant,
    /// Airplane model, relative to the asset root.
    pub airplane_model: String,
    /// Ground/world model, relative to the asset root.
    pub ground_model: String,
    /// Uniform scale applied to the airplane model.
    pub airplane_scale: f32,
    /// Uniform scale applied to the ground model.
    pub ground_scale: f32,
    /// Pre-convolved diffuse irradiance cubemap (PbrIbl only).
    pub environment_diffuse: String,
    /// Pre-filtered specular cubemap (PbrIbl only).
    pub environment_specular: String,
    /// Background cubemap (PbrIbl only).
    pub skybox: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            variant: SceneVariant::PbrIbl,
            airplane_model: "models/airplane.glb".to_string(),
            ground_model: "models/carrier.glb".to_string(),
            airplane_scale: 0.15,
            ground_scale: 0.3,
            environment_diffuse: "environment_maps/loft_diffuse.ktx2".to_string(),
            environment_specular: "environment_maps/loft_specular.ktx2".to_string(),
            skybox: "environment_maps/loft_skybox.ktx2".to_string(),
        }
    }
}
