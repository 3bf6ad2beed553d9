//! Animation player for one game-state.

use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use super::sprites::load_frames;
use crate::raster::PixelBuffer;
use crate::schema::{AnimationConfig, CellSize, ConfigError};

/// Ordered frames plus playback state.
///
/// Usage:
/// ```ignore
/// let mut graphics = Graphics::load(AnimationConfig::new("sprites/idle"))?;
/// graphics.reset(now_ms);
/// // every tick:
/// graphics.update(now_ms);
/// graphics.current_img().draw_on(board.img_mut(), x, y);
/// ```
///
/// Frames are immutable once loaded, so clones share them and only the
/// playback position is per-instance.
#[derive(Debug, Clone)]
pub struct Graphics {
    config: AnimationConfig,
    frames: Arc<[PixelBuffer]>,
    frame_duration_ms: u64,
    current_frame: usize,
    /// Playback start, `None` until the first reset.
    start_ms: Option<u64>,
}

impl Graphics {
    /// Load the frames named by `config.sprites_dir`.
    pub fn load(config: AnimationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let frames = load_frames(&config.sprites_dir, config.cell_size);
        Ok(Self::build(config, frames))
    }

    /// Build from frames already in memory.
    pub fn with_frames(
        config: AnimationConfig,
        frames: Vec<PixelBuffer>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, frames))
    }

    fn build(config: AnimationConfig, frames: Vec<PixelBuffer>) -> Self {
        let frame_duration_ms = config.graphics.frame_duration_ms();
        Self {
            config,
            frames: frames.into(),
            frame_duration_ms,
            current_frame: 0,
            start_ms: None,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn sprites_dir(&self) -> &Path {
        &self.config.sprites_dir
    }

    pub fn cell_size(&self) -> CellSize {
        self.config.cell_size
    }

    pub fn looping(&self) -> bool {
        self.config.graphics.looping
    }

    pub fn fps(&self) -> f64 {
        self.config.graphics.fps
    }

    pub fn state_name(&self) -> &str {
        &self.config.state_name
    }

    pub fn frames(&self) -> &[PixelBuffer] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_duration_ms(&self) -> u64 {
        self.frame_duration_ms
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Restart playback from the first frame at `start_ms`.
    pub fn reset(&mut self, start_ms: u64) {
        self.start_ms = Some(start_ms);
        self.current_frame = 0;
    }

    /// Select the frame for game time `now_ms`.
    ///
    /// Does nothing before the first reset or when there are no frames.
    pub fn update(&mut self, now_ms: u64) {
        let Some(start_ms) = self.start_ms else {
            return;
        };
        if self.frames.is_empty() {
            return;
        }

        let index = now_ms.saturating_sub(start_ms) / self.frame_duration_ms;
        let count = self.frames.len() as u64;
        self.current_frame = if self.looping() {
            (index % count) as usize
        } else {
            index.min(count - 1) as usize
        };
    }

    /// True once a non-looping animation has shown its last frame in full.
    pub fn is_finished(&self, now_ms: u64) -> bool {
        match self.start_ms {
            Some(start_ms) if !self.looping() => {
                let total = self.frames.len() as u64 * self.frame_duration_ms;
                now_ms.saturating_sub(start_ms) >= total
            }
            _ => false,
        }
    }

    /// Current frame, or a transparent cell-sized buffer when there are none.
    pub fn current_img(&self) -> Cow<'_, PixelBuffer> {
        match self.frames.get(self.current_frame) {
            Some(frame) => Cow::Borrowed(frame),
            None => {
                let (width, height) = self.config.cell_size.as_size();
                Cow::Owned(PixelBuffer::blank(width, height))
            }
        }
    }
}
