pub mod camera;
pub mod controller;
pub mod orientation;

pub use camera::{CameraRig, FollowMode};
pub use controller::PlayerController;
pub use orientation::{compose_attitude, CobraTimer, OrientationState, PitchRateTracker};
