pub mod config;
pub mod errors;
pub mod input;
pub mod time;

pub use config::{
    CameraConfig, CobraConfig, FlightConfig, SceneConfig, SceneVariant, SimulationConfig,
    StartConfig,
};
pub use errors::ConfigError;
pub use input::{ControlInputs, InputMode};
pub use time::SimClock;
