use bevy::prelude::*;
use nalgebra::Vector2;

/// How the per-frame control sample is produced.
///
/// `Keyboard` reads the window's keyboard and mouse each tick; `Scripted`
/// leaves `ControlInputs` untouched so tests (or an external driver) can
/// write it directly.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Keyboard,
    Scripted,
}

/// One merged control sample per simulation tick.
///
/// Keyboard state and mouse motion are folded into a single record so the
/// flight-control reducer applies each physical input exactly once per tick.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ControlInputs {
    /// Throttle up is held.
    pub throttle_up: bool,
    /// Throttle down is held.
    pub throttle_down: bool,
    /// Full-stop is held; zeroes speed regardless of throttle keys.
    pub stop: bool,
    /// Nose-up is held.
    pub nose_up: bool,
    /// Nose-down is held; also marks the braking state.
    pub nose_down: bool,
    /// Left steer: yaw on the ground, roll in the air.
    pub steer_left: bool,
    /// Right steer: yaw on the ground, roll in the air.
    pub steer_right: bool,
    /// Explicit cobra-maneuver trigger.
    pub cobra: bool,
    pub orbit_up: bool,
    pub orbit_down: bool,
    pub orbit_left: bool,
    pub orbit_right: bool,
    /// Raw mouse delta since the last sample (pixels).
    pub mouse_delta: Vector2<f64>,
}

impl Default for ControlInputs {
    fn default() -> Self {
        Self {
            throttle_up: false,
            throttle_down: false,
            stop: false,
            nose_up: false,
            nose_down: false,
            steer_left: false,
            steer_right: false,
            cobra: false,
            orbit_up: false,
            orbit_down: false,
            orbit_left: false,
            orbit_right: false,
            mouse_delta: Vector2::zeros(),
        }
    }
}
