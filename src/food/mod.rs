//! Food - a single tile placed at random on the grid.

use rand::Rng;

use crate::game::{GameConfig, Position};

/// The food tile the snake is chasing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    position: Position,
}

impl Food {
    /// Create food at a random tile.
    pub fn spawn<R: Rng>(rng: &mut R, config: &GameConfig) -> Self {
        let mut food = Food {
            position: Position::default(),
        };
        food.relocate(rng, config);
        food
    }

    /// Create food at a specific position.
    pub fn at(position: Position) -> Self {
        Food { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves the food to a uniformly random tile.
    ///
    /// Tiles under the snake are not excluded.
    pub fn relocate<R: Rng>(&mut self, rng: &mut R, config: &GameConfig) {
        self.position = config.tile(
            rng.random_range(0..config.columns),
            rng.random_range(0..config.rows),
        );
    }
}
