//! Game constants for grid size, timing, colors, and rendering layers.

use bevy::prelude::*;
use std::time::Duration;

use super::Position;

// Grid dimensions (in tiles)
pub const COLUMNS: i32 = 20;
pub const ROWS: i32 = 20;

// Side of one tile, in pixels
pub const TILE_SIZE: i32 = 20;

// Timing
pub const INITIAL_TICK_INTERVAL: Duration = Duration::from_millis(200);
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(30);
pub const TICK_DECAY_PER_POINT: Duration = Duration::from_millis(2);

// Initial positions (in tiles)
pub const START_TILE: Position = Position { x: 5, y: 5 };

// Persistence
pub const HIGHSCORE_FILE: &str = "highscore.txt";

// Colors
pub const SNAKE_COLOR: Color = Color::srgb(0.53, 0.81, 0.92);
pub const FOOD_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const PULSE_COLOR: Color = Color::srgba(1.0, 1.0, 0.3, 0.8);
pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const OVERLAY_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);
pub const BUTTON_COLOR: Color = Color::srgb(0.25, 0.25, 0.25);

// Z-index constants for rendering layers
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE: f32 = 2.0;
pub const Z_EFFECT: f32 = 3.0;
