use bevy::prelude::*;
use pretty_assertions::assert_eq;

use aerobat::components::{OrientationState, PlayerController};
use aerobat::plugins::{FlightControlPlugin, StartupSequencePlugin};
use aerobat::resources::{ControlInputs, SimClock, SimulationConfig};

/// The plugin wiring alone produces a runnable headless simulation: the
/// airplane entity, the merged input sample, and the clock all exist after
/// startup.
#[test]
fn test_flight_plugin_wires_the_core() {
    let config = SimulationConfig::default();
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(StartupSequencePlugin)
        .add_plugins(FlightControlPlugin::new(config.clone()));

    app.update();

    assert!(app.world().contains_resource::<ControlInputs>());
    assert!(app.world().contains_resource::<SimClock>());

    let world = app.world_mut();
    let mut query = world.query_filtered::<&OrientationState, With<PlayerController>>();
    let state = query.get_single(world).expect("airplane was not spawned");
    assert_eq!(state.position, config.start.position);
    assert_eq!(state.speed, config.start.speed);
}
