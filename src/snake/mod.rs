//! Snake plugin - handles snake movement, growth, self-collision, and direction input.

use bevy::prelude::*;

use crate::game::{Direction, GameConfig, GameSet, Position};
use crate::session::GameSession;

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, snake_direction_input.in_set(GameSet::Input));
    }
}

/// Head, body and heading of the snake.
///
/// The body is ordered from neck to tail and never contains the head.
#[derive(Clone, Debug)]
pub struct Movement {
    head: Position,
    body: Vec<Position>,
    direction: Option<Direction>,
    tile_size: i32,
}

impl Movement {
    /// A head-only snake at rest on the configured start tile.
    pub fn new(config: &GameConfig) -> Self {
        Movement {
            head: config.start_position(),
            body: Vec::new(),
            direction: None,
            tile_size: config.tile_size,
        }
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Current velocity in tiles per tick, `(0, 0)` before the first input.
    pub fn velocity(&self) -> (i32, i32) {
        self.direction.map_or((0, 0), |direction| direction.velocity())
    }

    /// Turns towards `requested` unless that would reverse the snake.
    pub fn change_direction(&mut self, requested: Direction) {
        if self
            .direction
            .is_some_and(|current| current.opposite() == requested)
        {
            return;
        }
        self.direction = Some(requested);
    }

    /// Moves the head one tile along the velocity; the body follows one step behind.
    pub fn advance(&mut self) {
        if !self.body.is_empty() {
            self.body.pop();
            self.body.insert(0, self.head);
        }

        let (dx, dy) = self.velocity();
        self.head = self
            .head
            .translated(dx * self.tile_size, dy * self.tile_size);
    }

    /// Appends a segment under the head; it trails behind after the next move.
    pub fn grow(&mut self) {
        self.body.push(self.head);
    }

    pub fn self_collision(&self) -> bool {
        self.body.contains(&self.head)
    }
}

/// System to forward direction keys to the session.
fn snake_direction_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<GameSession>,
) {
    for direction in keyboard_input
        .get_just_pressed()
        .filter_map(|key| Direction::from_key(*key))
    {
        session.change_direction(direction);
    }
}
