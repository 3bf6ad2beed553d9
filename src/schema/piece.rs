//! Per-piece configuration file (`config.json` in a piece directory).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ConfigError, GraphicsConfig};

/// File name of the optional configuration inside a piece directory.
pub const PIECE_CONFIG_FILE: &str = "config.json";

/// Playback options keyed by state name.
///
/// ```json
/// { "idle": { "fps": 4.0 }, "move": { "loop": false, "fps": 12.0 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceConfig {
    pub states: BTreeMap<String, GraphicsConfig>,
}

impl PieceConfig {
    /// Parse a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `config.json` from a piece directory; a missing file means defaults.
    pub fn load_from_dir<P: AsRef<Path>>(piece_dir: P) -> Result<Self, ConfigError> {
        let path = piece_dir.as_ref().join(PIECE_CONFIG_FILE);
        if !path.is_file() {
            log::debug!("No {} in {}", PIECE_CONFIG_FILE, piece_dir.as_ref().display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Options for one state, if configured.
    pub fn state(&self, name: &str) -> Option<&GraphicsConfig> {
        self.states.get(name)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for graphics in self.states.values() {
            graphics.validate()?;
        }
        Ok(())
    }
}
