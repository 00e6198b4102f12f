use bevy::prelude::*;

use crate::components::{OrientationState, PlayerController};
use crate::plugins::StartupSet;
use crate::resources::{ControlInputs, InputMode, SimClock, SimulationConfig, StartConfig};
use crate::systems::{
    advance_sim_clock, flight_control_system, input_sampler_system, motion_integrator_system,
};

/// Per-tick ordering of the simulation core: sample input, run the
/// flight-control step, then integrate motion.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Control,
    Motion,
}

/// Wires the flight-control core into the app: the player airplane entity,
/// the merged input sample, and the fixed-rate control/motion schedule.
pub struct FlightControlPlugin {
    config: SimulationConfig,
}

impl FlightControlPlugin {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    fn spawn_airplane(mut commands: Commands, config: StartConfig) {
        info!("spawning airplane at {:?}", config.position);
        commands.spawn((
            OrientationState::from_config(&config),
            PlayerController,
            Transform::default(),
            Visibility::default(),
            Name::new("Airplane"),
        ));
    }
}

impl Plugin for FlightControlPlugin {
    fn build(&self, app: &mut App) {
        let start = self.config.start.clone();
        let timestep = self.config.flight.timestep;

        // Present under DefaultPlugins already; registered here so a
        // headless app (tests, scripted drivers) can run the same schedule.
        app.add_event::<bevy::input::mouse::MouseMotion>()
            .init_resource::<ButtonInput<KeyCode>>();

        app.insert_resource(self.config.flight.clone())
            .init_resource::<InputMode>()
            .init_resource::<ControlInputs>()
            .insert_resource(SimClock::new(timestep))
            .configure_sets(
                FixedUpdate,
                (FlightSet::Input, FlightSet::Control, FlightSet::Motion).chain(),
            )
            .add_systems(
                Startup,
                (move |commands: Commands| Self::spawn_airplane(commands, start.clone()))
                    .in_set(StartupSet::SpawnPlayer),
            )
            .add_systems(
                FixedUpdate,
                (
                    (advance_sim_clock, input_sampler_system)
                        .chain()
                        .in_set(FlightSet::Input),
                    flight_control_system.in_set(FlightSet::Control),
                    motion_integrator_system.in_set(FlightSet::Motion),
                ),
            );

        app.init_resource::<Time<Fixed>>()
            .insert_resource(Time::<Fixed>::from_seconds(timestep));
    }
}
