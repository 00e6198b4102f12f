use bevy::prelude::*;

use crate::components::{OrientationState, PlayerController};
use crate::resources::{CobraConfig, ControlInputs, FlightConfig, SimClock};

/// Advances the simulation clock by one tick. Runs before the control step
/// so throttle and cobra timing see the current tick's time.
pub fn advance_sim_clock(mut clock: ResMut<SimClock>) {
    clock.tick();
}

/// System driving the flight-control step for the player airplane.
pub fn flight_control_system(
    mut query: Query<&mut OrientationState, With<PlayerController>>,
    inputs: Res<ControlInputs>,
    config: Res<FlightConfig>,
    clock: Res<SimClock>,
) {
    if let Ok(mut state) = query.get_single_mut() {
        control_step(
            &mut state,
            &inputs,
            &config,
            clock.timestep,
            clock.elapsed_seconds(),
        );
    }
}

/// Direction of the nose command on the pitch axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoseCommand {
    Up,
    Down,
    Neutral,
}

/// One application of the flight-control step: converts the merged input
/// sample into the next attitude and speed. Positions are only read here
/// (for the ground-level band); the motion integrator owns them.
pub fn control_step(
    state: &mut OrientationState,
    inputs: &ControlInputs,
    config: &FlightConfig,
    dt: f64,
    now: f64,
) {
    // Throttle. The full stop wins over both keys within the same tick.
    if inputs.throttle_up {
        state.speed += config.acceleration_rate * dt;
    }
    if inputs.throttle_down {
        state.speed = (state.speed - config.acceleration_rate * dt).max(0.0);
    }
    if inputs.stop {
        state.speed = 0.0;
    }

    // Nose-up wins when both pitch keys are held.
    let nose = if inputs.nose_up {
        NoseCommand::Up
    } else if inputs.nose_down {
        NoseCommand::Down
    } else {
        NoseCommand::Neutral
    };
    state.braking = nose == NoseCommand::Down;

    let keyboard_rate = config.rotation_rate * dt;
    apply_banking_pass(state, nose, keyboard_rate);

    // Mouse pass: vertical motion drives the same coupling with the delta
    // magnitude as the rate, horizontal motion adds roll directly.
    let dx = inputs.mouse_delta.x * config.mouse_sensitivity;
    let dy = inputs.mouse_delta.y * config.mouse_sensitivity;
    let mouse_nose = if dy > 0.0 {
        NoseCommand::Up
    } else if dy < 0.0 {
        NoseCommand::Down
    } else {
        NoseCommand::Neutral
    };
    apply_banking_pass(state, mouse_nose, dy.abs());
    state.roll += dx;

    update_cobra(state, inputs.cobra, now, &config.cobra);

    // Left/right is yaw on the ground and roll in the air.
    let roll_rate = keyboard_rate * config.airborne_roll_factor;
    if inputs.steer_right {
        if state.grounded {
            state.yaw -= keyboard_rate;
        } else {
            state.roll -= roll_rate;
        }
    }
    if inputs.steer_left {
        if state.grounded {
            state.yaw += keyboard_rate;
        } else {
            state.roll += roll_rate;
        }
    }

    // Auto-level just above the ground, unless actively braking.
    let altitude = state.position.y;
    if altitude > config.ground_level
        && altitude < config.ground_level + config.level_band
        && !state.braking
    {
        state.roll = 0.0;
        state.pitch = 0.0;
    }

    state.pitch_rate.record(state.pitch, now);
}

/// Applies one banking-turn coupling pass at the given rate (degrees this
/// tick) and commits the normalized, clamped angles.
///
/// Bank angle redirects the commanded pitch rate into yaw: at wings level
/// the full rate pitches, at 90° of roll it all becomes yaw. The coupling
/// applies whenever a nose command is active, independent of which roll
/// quadrant the airplane is in.
fn apply_banking_pass(state: &mut OrientationState, nose: NoseCommand, rate: f64) {
    let zroll = state.roll % 360.0;
    let mut zpitch = (state.pitch + 180.0) % 360.0 - 180.0;
    let mut zyaw = state.yaw % 360.0;

    let pitch_factor = rate * (1.0 - zroll.abs() / 90.0);
    let yaw_factor = rate * (zroll / 90.0);

    match nose {
        NoseCommand::Up => {
            zpitch -= pitch_factor;
            zyaw -= yaw_factor;
        }
        NoseCommand::Down => {
            zpitch += pitch_factor;
            zyaw += yaw_factor;
        }
        NoseCommand::Neutral => {}
    }

    state.pitch = zpitch.clamp(-179.0, 179.0);
    state.yaw = zyaw;
    state.roll = zroll;
}

/// Cobra-maneuver transitions: automatic entry on a fast pitch-up through
/// the entry window (or the explicit trigger), recovery when the pitch
/// leaves the maneuver range, and a forced exit on timeout.
fn update_cobra(state: &mut OrientationState, triggered: bool, now: f64, config: &CobraConfig) {
    let in_entry_window =
        state.pitch > config.entry_pitch_min && state.pitch < config.entry_pitch_max;
    let fast_pitch_up = state.pitch_rate.rate >= config.entry_pitch_rate;

    if !state.cobra.active && ((in_entry_window && fast_pitch_up) || triggered) {
        state.cobra.active = true;
        state.cobra.entered_at = now;
    } else if state.cobra.active
        && ((state.pitch < config.exit_pitch_max && state.pitch > config.exit_pitch_min)
            || state.pitch > config.exit_pitch_over)
    {
        state.cobra.active = false;
    }

    if state.cobra.active && now - state.cobra.entered_at >= config.timeout {
        info!("cobra timeout after {:.2}s", now - state.cobra.entered_at);
        state.cobra.active = false;
    }
}
