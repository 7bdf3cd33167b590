//! Score manager - keeps the best score in memory and in a store.

mod store;

use bevy::log::{debug, info, warn};
use std::io;
use std::num::ParseIntError;
use thiserror::Error;

pub use store::{FileHighScoreStore, HighScoreStore};

#[cfg(test)]
pub(crate) use store::MemoryHighScoreStore;

/// High score persistence errors
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid high score {content:?}: {source}")]
    Parse {
        content: String,
        #[source]
        source: ParseIntError,
    },
}

/// Tracks the high score across games.
pub struct ScoreManager {
    store: Box<dyn HighScoreStore>,
    highscore: u32,
}

impl ScoreManager {
    /// Creates a manager and loads the stored high score.
    pub fn new(store: impl HighScoreStore + 'static) -> Self {
        let highscore = load_highscore(&store);
        ScoreManager {
            store: Box::new(store),
            highscore,
        }
    }

    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    /// Records `candidate` if it beats the current high score.
    ///
    /// Returns whether a new high score was set. The in-memory value is
    /// updated even when writing to the store fails.
    pub fn save_highscore(&mut self, candidate: u32) -> Result<bool, ScoreError> {
        if candidate <= self.highscore {
            return Ok(false);
        }

        self.highscore = candidate;
        self.store.save(candidate)?;
        info!("New high score: {}", candidate);
        Ok(true)
    }
}

/// Reads the stored high score, falling back to 0 on any failure.
pub fn load_highscore(store: &dyn HighScoreStore) -> u32 {
    match store.load() {
        Ok(highscore) => highscore,
        Err(ScoreError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            debug!("No stored high score yet");
            0
        }
        Err(err) => {
            warn!("Ignoring stored high score: {}", err);
            0
        }
    }
}
