use aerobat::resources::{ControlInputs, SimulationConfig};

/// Default configuration with a coarse 0.1 s timestep, which keeps the
/// arithmetic in scenario assertions readable.
pub fn test_config() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.flight.timestep = 0.1;
    config
}

/// Same, but starting well clear of the ground.
pub fn airborne_config() -> SimulationConfig {
    let mut config = test_config();
    config.start.position.y = 50.0;
    config
}

pub fn inputs_nose_up() -> ControlInputs {
    ControlInputs {
        nose_up: true,
        ..Default::default()
    }
}

pub fn inputs_nose_down() -> ControlInputs {
    ControlInputs {
        nose_down: true,
        ..Default::default()
    }
}

pub fn inputs_neutral() -> ControlInputs {
    ControlInputs::default()
}
