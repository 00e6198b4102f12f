use bevy::prelude::*;

use crate::components::{CameraRig, OrientationState, PlayerController};
use crate::plugins::{FlightSet, StartupSet};
use crate::resources::CameraConfig;
use crate::systems::camera::{camera_follow_system, orbit_offset};

/// Spawns the follow camera and keeps it aimed at the airplane.
pub struct CameraPlugin {
    config: CameraConfig,
}

impl CameraPlugin {
    pub fn with_config(config: CameraConfig) -> Self {
        Self { config }
    }
}

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .add_systems(Startup, spawn_camera.in_set(StartupSet::SpawnCamera))
            .add_systems(FixedUpdate, camera_follow_system.after(FlightSet::Motion));
    }
}

fn spawn_camera(
    mut commands: Commands,
    config: Res<CameraConfig>,
    player_query: Query<&OrientationState, With<PlayerController>>,
) {
    let rig = CameraRig::from_config(&config);

    let transform = if let Ok(state) = player_query.get_single() {
        let target = Vec3::new(
            state.position.x as f32,
            state.position.y as f32,
            state.position.z as f32,
        );
        Transform::from_translation(target + orbit_offset(&rig)).looking_at(target, Vec3::Y)
    } else {
        warn!("No airplane found when spawning camera!");
        Transform::default()
    };

    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        transform,
        rig,
        Name::new("FollowCamera"),
    ));
}
