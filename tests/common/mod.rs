mod assertions;
mod fixtures;
mod test_app;

// Re-export
pub use assertions::assert_orientation_valid;
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
