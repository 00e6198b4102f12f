use aerobat::components::OrientationState;
use aerobat::resources::FlightConfig;

/// Assert the state invariants that must hold after every tick.
#[track_caller]
pub fn assert_orientation_valid(state: &OrientationState, config: &FlightConfig) {
    assert!(state.position.x.is_finite(), "Position x is not finite");
    assert!(state.position.y.is_finite(), "Position y is not finite");
    assert!(state.position.z.is_finite(), "Position z is not finite");

    assert!(state.pitch.is_finite(), "Pitch is not finite");
    assert!(state.yaw.is_finite(), "Yaw is not finite");
    assert!(state.roll.is_finite(), "Roll is not finite");

    assert!(
        (-179.0..=179.0).contains(&state.pitch),
        "Pitch {} outside [-179, 179]",
        state.pitch
    );
    assert!(state.speed >= 0.0, "Speed {} is negative", state.speed);
    assert!(
        state.position.y >= config.ground_level,
        "Altitude {} below ground level {}",
        state.position.y,
        config.ground_level
    );
}
