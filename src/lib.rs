//! Single-player Snake: a grid simulation stepped on a timer, drawn with Bevy.

pub mod food;
pub mod game;
pub mod rendering;
pub mod score;
pub mod session;
pub mod snake;
pub mod ui;
