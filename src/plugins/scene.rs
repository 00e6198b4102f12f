use bevy::core_pipeline::Skybox;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::components::PlayerController;
use crate::plugins::{FlightSet, StartupSet};
use crate::resources::{SceneConfig, SceneVariant};
use crate::systems::airplane_render_system;

/// Spawns the demo scene (models, lights, background) and keeps the
/// airplane's render transform in sync with the simulation.
///
/// The simulation core never reads anything spawned here; both scene
/// variants run the identical flight model.
pub struct ScenePlugin {
    config: SceneConfig,
}

impl ScenePlugin {
    pub fn with_config(config: SceneConfig) -> Self {
        Self { config }
    }
}

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        let clear = match self.config.variant {
            SceneVariant::Basic => Color::srgb(0.5, 0.7, 1.0),
            SceneVariant::PbrIbl => Color::srgb(0.2, 0.3, 0.3),
        };

        app.insert_resource(self.config.clone())
            .insert_resource(ClearColor(clear))
            .add_systems(
                Startup,
                (
                    attach_airplane_model,
                    spawn_ground,
                    spawn_lights,
                    spawn_environment,
                )
                    .in_set(StartupSet::SpawnScene),
            )
            .add_systems(FixedUpdate, airplane_render_system.after(FlightSet::Motion));
    }
}

fn attach_airplane_model(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
    player_query: Query<Entity, With<PlayerController>>,
) {
    if let Ok(entity) = player_query.get_single() {
        commands.entity(entity).insert(SceneRoot(
            asset_server.load(GltfAssetLabel::Scene(0).from_asset(config.airplane_model.clone())),
        ));
    } else {
        warn!("No airplane entity found when attaching its model!");
    }
}

fn spawn_ground(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    // The ground model is authored upside down; flip it around y and z.
    let transform = Transform::from_translation(Vec3::ZERO)
        .with_rotation(
            Quat::from_rotation_y(180f32.to_radians()) * Quat::from_rotation_z(180f32.to_radians()),
        )
        .with_scale(Vec3::splat(config.ground_scale));

    commands.spawn((
        SceneRoot(asset_server.load(GltfAssetLabel::Scene(0).from_asset(config.ground_model.clone()))),
        transform,
        Name::new("Ground"),
    ));
}

fn spawn_lights(mut commands: Commands, config: Res<SceneConfig>) {
    match config.variant {
        SceneVariant::Basic => {
            commands.spawn((
                DirectionalLight {
                    illuminance: light_consts::lux::OVERCAST_DAY,
                    shadows_enabled: true,
                    ..default()
                },
                Transform::from_xyz(20.0, 40.0, 20.0).looking_at(Vec3::ZERO, Vec3::Y),
                Name::new("Sun"),
            ));
        }
        SceneVariant::PbrIbl => {
            // A quad of fill lights around the scene origin.
            for (i, position) in [
                Vec3::new(-10.0, 10.0, 10.0),
                Vec3::new(10.0, 10.0, 10.0),
                Vec3::new(-10.0, -10.0, 10.0),
                Vec3::new(10.0, -10.0, 10.0),
            ]
            .into_iter()
            .enumerate()
            {
                commands.spawn((
                    PointLight {
                        color: Color::WHITE,
                        intensity: 1_000_000.0,
                        range: 120.0,
                        ..default()
                    },
                    Transform::from_translation(position),
                    Name::new(format!("FillLight{i}")),
                ));
            }
        }
    }
}

/// Attaches the image-based-lighting rig to the camera in the PbrIbl
/// variant: a pre-convolved irradiance map, a pre-filtered specular map,
/// and the environment cubemap as the background.
fn spawn_environment(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
    camera_query: Query<Entity, With<Camera3d>>,
) {
    if config.variant != SceneVariant::PbrIbl {
        return;
    }

    if let Ok(camera) = camera_query.get_single() {
        commands.entity(camera).insert((
            EnvironmentMapLight {
                diffuse_map: asset_server.load(config.environment_diffuse.clone()),
                specular_map: asset_server.load(config.environment_specular.clone()),
                intensity: 900.0,
                rotation: Quat::IDENTITY,
            },
            Skybox {
                image: asset_server.load(config.skybox.clone()),
                brightness: 1000.0,
                rotation: Quat::IDENTITY,
            },
        ));
    } else {
        warn!("No camera found when attaching the environment map!");
    }
}
