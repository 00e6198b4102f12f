use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::resources::StartConfig;

/// Represents the full orientation and motion state of the airplane.
///
/// There is exactly one instance per airplane, owned by the simulation
/// schedule: the flight-control step mutates the angles and speed, the
/// motion integrator mutates the position and grounded flag, and every
/// other system reads it.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct OrientationState {
    /// Position in world space (world units).
    pub position: Vector3<f64>,
    /// Rotation about the lateral axis (degrees), clamped to [-179, 179].
    pub pitch: f64,
    /// Rotation about the vertical axis (degrees). Normalized into
    /// (-360, 360) once per tick, not hard-clamped.
    pub yaw: f64,
    /// Rotation about the longitudinal axis (degrees). Normalized like yaw.
    pub roll: f64,
    /// Forward speed (units/s), never negative.
    pub speed: f64,
    /// True iff the airplane sits on the ground plane.
    pub grounded: bool,
    /// True while the nose-down control is held; suppresses auto-leveling.
    pub braking: bool,
    pub cobra: CobraTimer,
    pub pitch_rate: PitchRateTracker,
}

impl Default for OrientationState {
    fn default() -> Self {
        Self::from_config(&StartConfig::default())
    }
}

impl OrientationState {
    /// Creates the initial state from a start configuration.
    pub fn from_config(config: &StartConfig) -> Self {
        Self {
            position: config.position,
            pitch: 0.0,
            yaw: config.heading,
            roll: 0.0,
            speed: config.speed,
            grounded: false,
            braking: false,
            cobra: CobraTimer::default(),
            pitch_rate: PitchRateTracker::default(),
        }
    }

    /// The airplane's attitude as a unit quaternion, composed yaw-outermost
    /// and renormalized to keep repeated composition from drifting.
    pub fn attitude(&self) -> UnitQuaternion<f64> {
        compose_attitude(self.yaw, self.pitch, self.roll)
    }

    /// Unit vector along the airplane's nose.
    pub fn forward(&self) -> Vector3<f64> {
        self.attitude() * -Vector3::z()
    }
}

/// Composes yaw ∘ pitch ∘ roll (degrees) into a renormalized unit quaternion.
pub fn compose_attitude(yaw: f64, pitch: f64, roll: f64) -> UnitQuaternion<f64> {
    let yaw = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), yaw.to_radians());
    let pitch = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), pitch.to_radians());
    let roll = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), roll.to_radians());

    let mut attitude = yaw * pitch * roll;
    attitude.renormalize();
    attitude
}

/// Tracks whether the cobra maneuver is active and since when.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CobraTimer {
    pub active: bool,
    /// Simulation time at which the maneuver was entered (s).
    pub entered_at: f64,
}

/// Finite-difference pitch rate across ticks, used by the cobra entry check.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PitchRateTracker {
    /// Most recent pitch rate (degrees/s).
    pub rate: f64,
    last_pitch: f64,
    last_sample: f64,
}

impl PitchRateTracker {
    /// Records a pitch sample, updating the rate. A non-positive elapsed
    /// interval yields a rate of zero rather than a division blow-up.
    pub fn record(&mut self, pitch: f64, now: f64) {
        let elapsed = now - self.last_sample;
        self.rate = if elapsed > 0.0 {
            (pitch - self.last_pitch) / elapsed
        } else {
            0.0
        };
        self.last_pitch = pitch;
        self.last_sample = now;
    }
}
