use approx::assert_relative_eq;
use bevy::prelude::*;

use aerobat::resources::ControlInputs;
use aerobat::systems::camera::{chase_offset, orbit_offset};

use crate::common::{airborne_config, inputs_neutral, TestAppBuilder};

#[test]
fn test_orbit_camera_tracks_and_aims() {
    let config = airborne_config();
    let mut app = TestAppBuilder::new()
        .with_config(config)
        .with_camera()
        .build();

    app.set_inputs(inputs_neutral());
    app.run_steps(5);

    let state = app.state();
    let target = Vec3::new(
        state.position.x as f32,
        state.position.y as f32,
        state.position.z as f32,
    );
    let rig = app.camera_rig();
    let camera = app.camera_transform();

    let expected = target + orbit_offset(&rig);
    assert_relative_eq!(camera.translation.x, expected.x, epsilon = 1e-4);
    assert_relative_eq!(camera.translation.y, expected.y, epsilon = 1e-4);
    assert_relative_eq!(camera.translation.z, expected.z, epsilon = 1e-4);

    // The camera re-aims at the airplane every tick.
    let aim = (target - camera.translation).normalize();
    let forward = camera.forward();
    assert_relative_eq!(aim.dot(*forward), 1.0, epsilon = 1e-4);
}

#[test]
fn test_orbit_keys_move_the_orbit() {
    let config = airborne_config();
    let mut app = TestAppBuilder::new()
        .with_config(config.clone())
        .with_camera()
        .build();

    app.set_inputs(ControlInputs {
        orbit_up: true,
        ..Default::default()
    });
    app.run_steps(10);

    // 10 ticks at 50°/s and 0.1 s per tick on top of the initial 8°.
    let rig = app.camera_rig();
    assert_relative_eq!(rig.orbit.y, 58.0, epsilon = 1e-9);
    assert_relative_eq!(rig.orbit.x, 0.0, epsilon = 1e-9);
}

#[test]
fn test_chase_camera_sits_against_yaw() {
    let mut config = airborne_config();
    config.camera.chase = true;
    let mut app = TestAppBuilder::new()
        .with_config(config)
        .with_camera()
        .build();

    {
        let mut state = app.state_mut();
        state.yaw = 90.0;
    }
    app.set_inputs(inputs_neutral());
    app.run_frame();

    let state = app.state();
    let target = Vec3::new(
        state.position.x as f32,
        state.position.y as f32,
        state.position.z as f32,
    );
    let rig = app.camera_rig();
    let camera = app.camera_transform();

    let expected = target - chase_offset(&rig, state.yaw);
    assert_relative_eq!(camera.translation.x, expected.x, epsilon = 1e-4);
    assert_relative_eq!(camera.translation.y, expected.y, epsilon = 1e-4);
    assert_relative_eq!(camera.translation.z, expected.z, epsilon = 1e-4);
}
