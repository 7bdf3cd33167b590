//! Drawing interface the session paints into, and the retained frame the window consumes.

use bevy::prelude::*;

use crate::game::Position;

/// What occupies a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileKind {
    Food,
    Head,
    Body,
}

/// Text drawn over the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    /// Score and high score in the corner while playing.
    Hud { score: u32, highscore: u32 },
    /// Game over title, final score, high score and the restart button.
    GameOver { score: u32, highscore: u32 },
}

/// Something a game can be drawn onto.
pub trait DrawSurface {
    fn clear(&mut self);
    fn draw_tile(&mut self, position: Position, kind: TileKind);
    fn draw_overlay(&mut self, overlay: Overlay);
}

/// Draw calls of the most recent redraw.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct Frame {
    tiles: Vec<(Position, TileKind)>,
    overlay: Option<Overlay>,
}

impl Frame {
    pub fn tiles(&self) -> &[(Position, TileKind)] {
        &self.tiles
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }
}

impl DrawSurface for Frame {
    fn clear(&mut self) {
        self.tiles.clear();
        self.overlay = None;
    }

    fn draw_tile(&mut self, position: Position, kind: TileKind) {
        self.tiles.push((position, kind));
    }

    fn draw_overlay(&mut self, overlay: Overlay) {
        self.overlay = Some(overlay);
    }
}
