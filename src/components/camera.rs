use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::resources::CameraConfig;

/// Follow behaviour attached to the demo camera.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct CameraRig {
    pub mode: FollowMode,
    /// Orbit angles around the airplane (degrees); adjusted by the
    /// camera-offset keys, used only in orbit mode.
    pub orbit: Vector2<f64>,
    /// Follow distance from the airplane (world units).
    pub distance: f64,
    /// Height offset above the airplane (world units).
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FollowMode {
    /// Spherical orbit around the airplane, parameterized by `orbit`.
    Orbit,
    /// Fixed offset behind the airplane, rotated by its yaw.
    Chase,
}

impl CameraRig {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            mode: if config.chase {
                FollowMode::Chase
            } else {
                FollowMode::Orbit
            },
            orbit: Vector2::new(config.initial_orbit[0], config.initial_orbit[1]),
            distance: config.distance,
            height: config.height,
        }
    }
}
