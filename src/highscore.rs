//! High-score persistence: a single number in a text file.
//!
//! A missing or unreadable file means "no high score yet"; a failed save is
//! logged and otherwise ignored.

use std::fs;
use std::path::{Path, PathBuf};

pub fn default_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".galaxian_score")
}

pub struct HighScoreStore {
    path: PathBuf,
    saved: u32,
}

impl HighScoreStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            saved: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&mut self) -> u32 {
        self.saved = fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0);
        self.saved
    }

    /// Persist `score` if it beats what is on disk.  Returns true when a new
    /// value was written.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.saved {
            return false;
        }
        match fs::write(&self.path, score.to_string()) {
            Ok(()) => {
                log::info!("new high score {} saved to {}", score, self.path.display());
                self.saved = score;
                true
            }
            Err(e) => {
                log::warn!("could not save high score to {}: {}", self.path.display(), e);
                false
            }
        }
    }
}
