mod camera;
mod flight;
mod scene;
mod staging;

pub use camera::CameraPlugin;
pub use flight::{FlightControlPlugin, FlightSet};
pub use scene::ScenePlugin;
pub use staging::{StartupSequencePlugin, StartupSet};
