use bevy::prelude::*;

/// Marks the airplane the player's controls act on.
#[derive(Component, Debug, Default)]
pub struct PlayerController;
