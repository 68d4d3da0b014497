//! Game configuration.
//!
//! Read from an optional JSON file; every field has a default so a partial
//! file (or none at all) is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::entities::DEFAULT_FIRE_ODDS;
use crate::scheduler::DEFAULT_TICK_RATE_HZ;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Simulation steps per second
    pub tick_rate_hz: f64,
    /// Each live alien fires when a draw from `[0, fire_odds)` is zero
    pub fire_odds: u32,
    /// Directory holding the `<name>.txt` sprites
    pub asset_dir: PathBuf,
    /// Where the best score is kept; `None` uses `$HOME/.galaxian_score`
    pub high_score_file: Option<PathBuf>,
    /// Log output (the terminal itself is taken by the game)
    pub log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            fire_odds: DEFAULT_FIRE_ODDS,
            asset_dir: PathBuf::from("assets"),
            high_score_file: None,
            log_file: PathBuf::from("galaxian.log"),
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.tick_rate_hz.is_finite() || self.tick_rate_hz <= 0.0 || self.tick_rate_hz > 1000.0 {
            bail!("tick_rate_hz must be in (0, 1000], got {}", self.tick_rate_hz);
        }
        if self.fire_odds == 0 {
            bail!("fire_odds must be at least 1");
        }
        Ok(())
    }
}
