//! Where the high score lives between runs.

use std::fs;
use std::path::{Path, PathBuf};

use super::ScoreError;

/// Persistent storage for a single high score.
pub trait HighScoreStore: Send + Sync {
    fn load(&self) -> Result<u32, ScoreError>;
    fn save(&mut self, highscore: u32) -> Result<(), ScoreError>;
}

/// Plain-text file holding one decimal integer.
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileHighScoreStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> Result<u32, ScoreError> {
        let content = fs::read_to_string(&self.path)?;
        parse_highscore(content)
    }

    fn save(&mut self, highscore: u32) -> Result<(), ScoreError> {
        fs::write(&self.path, highscore.to_string())?;
        Ok(())
    }
}

pub(crate) fn parse_highscore(content: String) -> Result<u32, ScoreError> {
    match content.trim().parse() {
        Ok(highscore) => Ok(highscore),
        Err(source) => Err(ScoreError::Parse { content, source }),
    }
}

#[cfg(test)]
pub(crate) use fake::MemoryHighScoreStore;
