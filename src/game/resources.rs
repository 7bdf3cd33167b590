//! Game resources (singleton state).

use bevy::prelude::*;
use std::time::Duration;

/// Whether the snake is still alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Running,
    GameOver,
}

/// System sets ordering one frame: input, then simulation, then drawing.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Simulation,
    Render,
}

/// Accumulates frame time until the current tick interval has elapsed.
#[derive(Resource, Default, Debug)]
pub struct Ticker {
    elapsed: Duration,
}

impl Ticker {
    /// Adds `delta` and returns true once `interval` has been reached.
    ///
    /// Fires at most once per call; time past the interval is dropped.
    pub fn advance(&mut self, delta: Duration, interval: Duration) -> bool {
        self.elapsed += delta;
        if self.elapsed >= interval {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
