//! Game events (messages).

use bevy::prelude::*;

use super::Position;

/// Message triggered when food is eaten (for visual effects).
#[derive(Message)]
pub struct FoodEaten {
    pub position: Position,
}
