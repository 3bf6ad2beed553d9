//! Per-piece collection of state animations loaded from a piece directory.
//!
//! Expected layout:
//!
//! ```text
//! <piece_dir>/
//!   config.json              optional, see PieceConfig
//!   states/<state>/sprites/  one directory of frames per state
//!   sprites/                 used as "idle" when states/ is empty
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::{Graphics, GraphicsFactory};
use crate::schema::{CellSize, ConfigError, PieceConfig};

/// State name used when a piece has no `states/` directory.
pub const IDLE_STATE: &str = "idle";

/// All animations of one piece type, keyed by state name.
#[derive(Debug, Clone)]
pub struct PieceGraphics {
    name: String,
    states: BTreeMap<String, Graphics>,
}

impl PieceGraphics {
    /// Load every state under `piece_dir` with frames scaled to `cell_size`.
    pub fn load<P: AsRef<Path>>(piece_dir: P, cell_size: CellSize) -> Result<Self, ConfigError> {
        let piece_dir = piece_dir.as_ref();
        let config = PieceConfig::load_from_dir(piece_dir)?;
        let name = piece_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut states = BTreeMap::new();
        let states_dir = piece_dir.join("states");
        if states_dir.is_dir() {
            for entry in fs::read_dir(&states_dir)? {
                let state_dir = entry?.path();
                if !state_dir.is_dir() {
                    continue;
                }
                let state_name = state_dir
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let graphics = GraphicsFactory::create(
                    state_dir.join("sprites"),
                    config.state(&state_name),
                    cell_size,
                    state_name.clone(),
                )?;
                states.insert(state_name, graphics);
            }
        }

        if states.is_empty() {
            let graphics = GraphicsFactory::create(
                piece_dir.join("sprites"),
                config.state(IDLE_STATE),
                cell_size,
                IDLE_STATE,
            )?;
            states.insert(IDLE_STATE.to_string(), graphics);
        }

        log::debug!("Piece '{}' has {} states", name, states.len());
        Ok(Self { name, states })
    }

    /// Piece type name (the directory name).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self, name: &str) -> Option<&Graphics> {
        self.states.get(name)
    }

    /// States in name order.
    pub fn states(&self) -> impl Iterator<Item = (&str, &Graphics)> {
        self.states.iter().map(|(name, g)| (name.as_str(), g))
    }

    /// "idle" when present, otherwise the first state by name.
    pub fn initial_state(&self) -> Option<&Graphics> {
        self.states
            .get(IDLE_STATE)
            .or_else(|| self.states.values().next())
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
