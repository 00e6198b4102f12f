use bevy::prelude::*;
use glam::{Quat, Vec3};

use crate::components::{OrientationState, PlayerController};
use crate::resources::SceneConfig;

/// Pushes the airplane's simulation state into its render transform:
/// translate ∘ yaw ∘ pitch ∘ roll ∘ scale.
pub fn airplane_render_system(
    mut query: Query<(&OrientationState, &mut Transform), With<PlayerController>>,
    config: Res<SceneConfig>,
) {
    if let Ok((state, mut transform)) = query.get_single_mut() {
        transform.translation = Vec3::new(
            state.position.x as f32,
            state.position.y as f32,
            state.position.z as f32,
        );
        transform.rotation = render_rotation(state);
        transform.scale = Vec3::splat(config.airplane_scale);
    }
}

/// The airplane's attitude as a render-space quaternion, yaw outermost,
/// normalized against accumulated composition error.
pub fn render_rotation(state: &OrientationState) -> Quat {
    let rotation = Quat::from_rotation_y(state.yaw.to_radians() as f32)
        * Quat::from_rotation_x(state.pitch.to_radians() as f32)
        * Quat::from_rotation_z(state.roll.to_radians() as f32);
    rotation.normalize()
}
