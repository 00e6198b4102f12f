pub mod camera;
pub mod flight_control;
pub mod input;
pub mod motion;
pub mod render;

pub use camera::camera_follow_system;
pub use flight_control::{advance_sim_clock, control_step, flight_control_system};
pub use input::input_sampler_system;
pub use motion::{integrate_motion, motion_forward, motion_integrator_system};
pub use render::airplane_render_system;
