use bevy::prelude::*;

use aerobat::plugins::{CameraPlugin, FlightControlPlugin, ScenePlugin, StartupSequencePlugin};
use aerobat::resources::{ConfigError, SimulationConfig};

fn main() -> Result<(), ConfigError> {
    // An optional YAML config path as the first argument overrides the
    // built-in defaults.
    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::load(&path)?,
        None => SimulationConfig::default(),
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "aerobat".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(StartupSequencePlugin)
        .add_plugins(FlightControlPlugin::new(config.clone()))
        .add_plugins(CameraPlugin::with_config(config.camera.clone()))
        .add_plugins(ScenePlugin::with_config(config.scene.clone()))
        .add_systems(Update, exit_on_escape)
        .run();

    Ok(())
}

fn exit_on_escape(keyboard: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keyboard.pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}
