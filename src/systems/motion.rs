use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{compose_attitude, OrientationState, PlayerController};
use crate::resources::{FlightConfig, SimClock};

/// System advancing the player airplane's position from its attitude.
pub fn motion_integrator_system(
    mut query: Query<&mut OrientationState, With<PlayerController>>,
    config: Res<FlightConfig>,
    clock: Res<SimClock>,
) {
    if let Ok(mut state) = query.get_single_mut() {
        integrate_motion(&mut state, &config, clock.timestep);
    }
}

/// One integration step: translate along the forward vector, sink under
/// gravity while under power, then clamp to the ground plane.
///
/// During the cobra maneuver the forward vector is built from a fixed
/// shallow pitch instead of the live one and translation is nearly frozen,
/// which produces the high-pitch, near-stationary hang.
pub fn integrate_motion(state: &mut OrientationState, config: &FlightConfig, dt: f64) {
    let forward = motion_forward(state, config);

    let speed_scale = if state.cobra.active {
        config.cobra.speed_scale
    } else {
        1.0
    };
    state.position += forward * (state.speed * speed_scale * dt);

    // No lift model: holding altitude takes thrust and nose input. A parked
    // airplane is not pulled through the ground plane.
    if state.speed > 0.0 {
        state.position.y -= config.gravity * config.gravity_factor * dt;
    }

    if state.position.y <= config.ground_level {
        state.position.y = config.ground_level;
        state.grounded = true;
    } else {
        state.grounded = false;
    }
}

/// The unit forward vector used for translation, with the cobra pitch hold
/// substituted while the maneuver is active.
pub fn motion_forward(state: &OrientationState, config: &FlightConfig) -> Vector3<f64> {
    let pitch = if state.cobra.active {
        config.cobra.pitch_hold
    } else {
        state.pitch
    };
    compose_attitude(state.yaw, pitch, state.roll) * -Vector3::z()
}
