use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use nalgebra::Vector2;

use crate::resources::{ControlInputs, InputMode};

/// Samples the keyboard and accumulated mouse motion into one merged
/// `ControlInputs` record per tick.
///
/// Keeping a single sample point means each physical input event reaches
/// the flight-control reducer exactly once, regardless of how it arrived.
pub fn input_sampler_system(
    mode: Res<InputMode>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut inputs: ResMut<ControlInputs>,
) {
    if *mode == InputMode::Scripted {
        // A scripted driver owns `ControlInputs`; drop the window events.
        mouse_motion.clear();
        return;
    }

    let mut delta = Vector2::zeros();
    for motion in mouse_motion.read() {
        delta.x += f64::from(motion.delta.x);
        delta.y += f64::from(motion.delta.y);
    }

    *inputs = ControlInputs {
        throttle_up: keyboard.pressed(KeyCode::Equal) || keyboard.pressed(KeyCode::NumpadAdd),
        throttle_down: keyboard.pressed(KeyCode::Minus)
            || keyboard.pressed(KeyCode::NumpadSubtract),
        stop: keyboard.pressed(KeyCode::KeyF),
        nose_up: keyboard.pressed(KeyCode::KeyW),
        nose_down: keyboard.pressed(KeyCode::KeyS),
        steer_left: keyboard.pressed(KeyCode::KeyA),
        steer_right: keyboard.pressed(KeyCode::KeyD),
        cobra: keyboard.pressed(KeyCode::KeyC),
        orbit_up: keyboard.pressed(KeyCode::ArrowUp),
        orbit_down: keyboard.pressed(KeyCode::ArrowDown),
        orbit_left: keyboard.pressed(KeyCode::ArrowLeft),
        orbit_right: keyboard.pressed(KeyCode::ArrowRight),
        mouse_delta: delta,
    };
}
