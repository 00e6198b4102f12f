use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use aerobat::components::{CameraRig, OrientationState, PlayerController};
use aerobat::resources::{ControlInputs, InputMode, SimClock, SimulationConfig};
use aerobat::systems::{
    advance_sim_clock, camera_follow_system, flight_control_system, input_sampler_system,
    motion_integrator_system,
};

/// Builder for a headless test application.
///
/// The simulation systems are driven from the `Update` schedule here, so
/// every `app.update()` advances exactly one tick of `flight.timestep`
/// regardless of wall-clock time, and `ControlInputs` is scripted by the
/// test instead of sampled from a window.
pub struct TestAppBuilder {
    config: SimulationConfig,
    with_camera: bool,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            with_camera: false,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_camera(mut self) -> Self {
        self.with_camera = true;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .add_event::<MouseMotion>()
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(InputMode::Scripted)
            .init_resource::<ControlInputs>()
            .insert_resource(self.config.flight.clone())
            .insert_resource(SimClock::new(self.config.flight.timestep));

        app.world_mut().spawn((
            OrientationState::from_config(&self.config.start),
            PlayerController,
            Transform::default(),
            Name::new("Airplane"),
        ));

        app.add_systems(
            Update,
            (
                advance_sim_clock,
                input_sampler_system,
                flight_control_system,
                motion_integrator_system,
            )
                .chain(),
        );

        if self.with_camera {
            app.insert_resource(self.config.camera.clone());
            app.world_mut().spawn((
                Transform::default(),
                CameraRig::from_config(&self.config.camera),
            ));
            app.add_systems(
                Update,
                camera_follow_system.after(motion_integrator_system),
            );
        }

        TestApp {
            app,
            timestep: self.config.flight.timestep,
        }
    }
}

/// Main test application wrapper.
pub struct TestApp {
    pub app: App,
    pub timestep: f64,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    /// Replaces the scripted control sample; it persists until replaced.
    pub fn set_inputs(&mut self, inputs: ControlInputs) {
        *self.app.world_mut().resource_mut::<ControlInputs>() = inputs;
    }

    pub fn state(&mut self) -> OrientationState {
        self.query_single::<OrientationState>()
            .expect("airplane state not found")
            .clone()
    }

    pub fn state_mut(&mut self) -> Mut<'_, OrientationState> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut OrientationState>();
        query
            .get_single_mut(world)
            .expect("airplane state not found")
    }

    pub fn camera_transform(&mut self) -> Transform {
        let world = self.app.world_mut();
        let mut query = world.query::<(&Transform, &CameraRig)>();
        let (transform, _) = query.get_single(world).expect("camera not found");
        *transform
    }

    pub fn camera_rig(&mut self) -> CameraRig {
        self.query_single::<CameraRig>()
            .expect("camera rig not found")
            .clone()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }
}
