//! Immutable game configuration, shared by the simulation and the window.

use bevy::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

use super::{
    COLUMNS, HIGHSCORE_FILE, INITIAL_TICK_INTERVAL, MIN_TICK_INTERVAL, Position, ROWS,
    START_TILE, TICK_DECAY_PER_POINT, TILE_SIZE,
};

/// Grid geometry, speed policy and storage location.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub columns: i32,
    pub rows: i32,
    pub tile_size: i32,
    pub initial_interval: Duration,
    pub min_interval: Duration,
    pub decay_per_point: Duration,
    /// Head position at start, in tiles.
    pub start_tile: Position,
    pub highscore_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            columns: COLUMNS,
            rows: ROWS,
            tile_size: TILE_SIZE,
            initial_interval: INITIAL_TICK_INTERVAL,
            min_interval: MIN_TICK_INTERVAL,
            decay_per_point: TICK_DECAY_PER_POINT,
            start_tile: START_TILE,
            highscore_path: PathBuf::from(HIGHSCORE_FILE),
        }
    }
}

impl GameConfig {
    /// Arena width in pixels.
    pub fn width(&self) -> i32 {
        self.columns * self.tile_size
    }

    /// Arena height in pixels.
    pub fn height(&self) -> i32 {
        self.rows * self.tile_size
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        (0..self.width()).contains(&position.x) && (0..self.height()).contains(&position.y)
    }

    /// Pixel position of the tile at `(column, row)`.
    pub fn tile(&self, column: i32, row: i32) -> Position {
        Position::new(column * self.tile_size, row * self.tile_size)
    }

    pub fn start_position(&self) -> Position {
        self.tile(self.start_tile.x, self.start_tile.y)
    }

    /// Tick interval for the given score, floored at `min_interval`.
    pub fn tick_interval(&self, score: u32) -> Duration {
        self.initial_interval
            .saturating_sub(self.decay_per_point.saturating_mul(score))
            .max(self.min_interval)
    }
}
