//! Core game module containing shared types, configuration, resources, events, and constants.

mod components;
mod config;
mod constants;
mod events;
mod resources;

pub use components::*;
pub use config::*;
pub use constants::*;
pub use events::*;
pub use resources::*;
