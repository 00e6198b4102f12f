use bevy::prelude::*;

/// Startup ordering shared by all plugins: the airplane exists before the
/// camera, and the scene dressing attaches to both last.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupSet {
    SpawnPlayer,
    SpawnCamera,
    SpawnScene,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (
                StartupSet::SpawnPlayer,
                StartupSet::SpawnCamera,
                StartupSet::SpawnScene,
            )
                .chain(),
        );
    }
}
