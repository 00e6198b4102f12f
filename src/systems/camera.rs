use bevy::prelude::*;

use crate::components::{CameraRig, FollowMode, OrientationState, PlayerController};
use crate::resources::{CameraConfig, ControlInputs, SimClock};

/// Repositions the follow camera around the airplane and re-aims it every
/// tick. The orbit keys move the orbit angles; chase mode ignores them.
pub fn camera_follow_system(
    mut camera_query: Query<(&mut Transform, &mut CameraRig)>,
    target_query: Query<&OrientationState, With<PlayerController>>,
    config: Res<CameraConfig>,
    inputs: Res<ControlInputs>,
    clock: Res<SimClock>,
) {
    let (Ok((mut transform, mut rig)), Ok(state)) =
        (camera_query.get_single_mut(), target_query.get_single())
    else {
        return;
    };

    let adjust = config.adjust_rate * clock.timestep;
    if inputs.orbit_up {
        rig.orbit.y += adjust;
    }
    if inputs.orbit_down {
        rig.orbit.y -= adjust;
    }
    if inputs.orbit_left {
        rig.orbit.x -= adjust;
    }
    if inputs.orbit_right {
        rig.orbit.x += adjust;
    }

    let target = Vec3::new(
        state.position.x as f32,
        state.position.y as f32,
        state.position.z as f32,
    );

    transform.translation = match rig.mode {
        FollowMode::Orbit => target + orbit_offset(&rig),
        FollowMode::Chase => target - chase_offset(&rig, state.yaw),
    };
    transform.look_at(target, Vec3::Y);
}

/// Spherical offset from the airplane for orbit mode.
pub fn orbit_offset(rig: &CameraRig) -> Vec3 {
    let ax = rig.orbit.x.to_radians();
    let ay = rig.orbit.y.to_radians();
    Vec3::new(
        (rig.distance * ax.sin() * ay.cos()) as f32,
        (rig.distance * ay.sin() + rig.height) as f32,
        (rig.distance * ax.cos() * ay.cos()) as f32,
    )
}

/// Fixed offset behind the airplane, rotated by its yaw, for chase mode.
pub fn chase_offset(rig: &CameraRig, yaw_degrees: f64) -> Vec3 {
    let yaw = Quat::from_rotation_y(yaw_degrees.to_radians() as f32);
    yaw * Vec3::new(0.0, rig.height as f32, rig.distance as f32)
}
