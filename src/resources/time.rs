use bevy::prelude::*;

/// Accumulated simulation time, advanced by one fixed step per tick.
///
/// The control and integration systems read elapsed time from here rather
/// than the wall clock, so a test can step the schedule deterministically.
#[derive(Resource, Debug, Clone)]
pub struct SimClock {
    /// Seconds per tick.
    pub timestep: f64,
    elapsed: f64,
    ticks: u64,
}

impl SimClock {
    pub fn new(timestep: f64) -> Self {
        Self {
            timestep,
            elapsed: 0.0,
            ticks: 0,
        }
    }

    pub fn tick(&mut self) {
        self.elapsed += self.timestep;
        self.ticks += 1;
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
