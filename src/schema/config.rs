//! Configuration types for board geometry and sprite animation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default playback rate for a state animation.
pub const DEFAULT_FPS: f64 = 6.0;

/// Default edge length of a board cell and of a sprite frame, in pixels.
pub const DEFAULT_CELL_PIX: u32 = 64;

fn default_loop() -> bool {
    true
}

fn default_fps() -> f64 {
    DEFAULT_FPS
}

/// Playback options for one state's animation (the `cfg` mapping).
///
/// Both keys are optional in JSON; unknown keys are ignored so a state's
/// config block may carry settings meant for other subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphicsConfig {
    /// Restart from the first frame after the last one.
    #[serde(rename = "loop", default = "default_loop")]
    pub looping: bool,
    /// Frames per second.
    #[serde(default = "default_fps")]
    pub fps: f64,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            looping: default_loop(),
            fps: default_fps(),
        }
    }
}

impl GraphicsConfig {
    /// Validate playback parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(ConfigError::InvalidFps(self.fps));
        }
        Ok(())
    }

    /// Milliseconds each frame stays on screen, never less than one.
    #[inline]
    pub fn frame_duration_ms(&self) -> u64 {
        ((1000.0 / self.fps) as u64).max(1)
    }
}

/// Pixel size of one sprite frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CELL_PIX,
            height: DEFAULT_CELL_PIX,
        }
    }
}

impl CellSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size as a `(width, height)` pair in `usize`, the order raster loads take.
    #[inline]
    pub fn as_size(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidCellSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl From<(u32, u32)> for CellSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Everything needed to build one state's animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Directory holding the frame images.
    pub sprites_dir: PathBuf,
    /// Resolved playback options.
    #[serde(default)]
    pub graphics: GraphicsConfig,
    /// Frame size in pixels.
    #[serde(default)]
    pub cell_size: CellSize,
    /// Name of the game-state this animation belongs to (e.g. "idle").
    #[serde(default)]
    pub state_name: String,
}

impl AnimationConfig {
    pub fn new(sprites_dir: impl Into<PathBuf>) -> Self {
        Self {
            sprites_dir: sprites_dir.into(),
            graphics: GraphicsConfig::default(),
            cell_size: CellSize::default(),
            state_name: String::new(),
        }
    }

    /// Validate playback and frame-size parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.graphics.validate()?;
        self.cell_size.validate()?;
        Ok(())
    }
}

/// Board geometry: cell pixel size and grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Cell height in pixels.
    pub cell_h_pix: usize,
    /// Cell width in pixels.
    pub cell_w_pix: usize,
    /// Grid width in cells.
    pub w_cells: usize,
    /// Grid height in cells.
    pub h_cells: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cell_h_pix: DEFAULT_CELL_PIX as usize,
            cell_w_pix: DEFAULT_CELL_PIX as usize,
            w_cells: 8,
            h_cells: 8,
        }
    }
}

impl BoardConfig {
    /// Full board size in pixels as `(width, height)`, `None` on overflow.
    #[inline]
    pub fn pixel_size(&self) -> Option<(usize, usize)> {
        Some((
            self.w_cells.checked_mul(self.cell_w_pix)?,
            self.h_cells.checked_mul(self.cell_h_pix)?,
        ))
    }

    /// Sprite frame size matching one board cell.
    pub fn cell_size(&self) -> CellSize {
        CellSize::new(self.cell_w_pix as u32, self.cell_h_pix as u32)
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Frame rate must be positive and finite, got {0}")]
    InvalidFps(f64),
    #[error("Cell size must be non-zero, got {width}x{height}")]
    InvalidCellSize { width: u32, height: u32 },
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
