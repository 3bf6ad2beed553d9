//! Board - Cell geometry paired with a live rendering surface and its snapshot.
//!
//! The live image (`img`) is what renderers draw into. The snapshot
//! (`original_img`) is captured once when the board is built and is only
//! ever handed out by shared reference, so [`Board::reset`] can always
//! restore the construction-time pixels.

use std::path::Path;

use rayon::prelude::*;

use crate::raster::PixelBuffer;
use crate::schema::BoardConfig;

/// Board construction errors.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error(
        "Board geometry must be non-zero and fit in memory: {cell_w_pix}x{cell_h_pix} px cells, {w_cells}x{h_cells} grid"
    )]
    InvalidGeometry {
        cell_h_pix: usize,
        cell_w_pix: usize,
        w_cells: usize,
        h_cells: usize,
    },
    #[error("Board image has no pixel data")]
    AbsentImage,
}

/// A chessboard surface.
#[derive(Debug)]
pub struct Board {
    config: BoardConfig,
    img: PixelBuffer,
    original_img: PixelBuffer,
}

impl Board {
    /// Build a board around an already loaded image.
    ///
    /// The image is adopted as the live surface and deep-copied into the
    /// snapshot.
    pub fn new(
        cell_h_pix: usize,
        cell_w_pix: usize,
        w_cells: usize,
        h_cells: usize,
        img: PixelBuffer,
    ) -> Result<Self, BoardError> {
        let config = BoardConfig {
            cell_h_pix,
            cell_w_pix,
            w_cells,
            h_cells,
        };
        Self::from_config(&config, img)
    }

    /// Build a board from a geometry config.
    pub fn from_config(config: &BoardConfig, img: PixelBuffer) -> Result<Self, BoardError> {
        check_geometry(config)?;
        if img.is_absent() {
            return Err(BoardError::AbsentImage);
        }
        Ok(Self::capture(*config, img))
    }

    /// Load the board image scaled to the full board size.
    ///
    /// A missing or unreadable file yields a blank board rather than an error.
    pub fn open<P: AsRef<Path>>(path: P, config: &BoardConfig) -> Result<Self, BoardError> {
        let size = check_geometry(config)?;
        let img = PixelBuffer::read_scaled(path, size);
        Self::from_config(config, img)
    }

    fn capture(config: BoardConfig, img: PixelBuffer) -> Self {
        let original_img = img.copy();
        Self {
            config,
            img,
            original_img,
        }
    }

    /// Restore the live image to the pixels supplied at construction.
    pub fn reset(&mut self) {
        self.img = self.original_img.copy();
    }

    /// `count` independent clones, built in parallel.
    pub fn fork(&self, count: usize) -> Vec<Board> {
        (0..count).into_par_iter().map(|_| self.clone()).collect()
    }

    #[inline]
    pub fn cell_h_pix(&self) -> usize {
        self.config.cell_h_pix
    }

    #[inline]
    pub fn cell_w_pix(&self) -> usize {
        self.config.cell_w_pix
    }

    #[inline]
    pub fn w_cells(&self) -> usize {
        self.config.w_cells
    }

    #[inline]
    pub fn h_cells(&self) -> usize {
        self.config.h_cells
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Live rendering surface.
    pub fn img(&self) -> &PixelBuffer {
        &self.img
    }

    pub fn img_mut(&mut self) -> &mut PixelBuffer {
        &mut self.img
    }

    /// Snapshot taken at construction.
    pub fn original_img(&self) -> &PixelBuffer {
        &self.original_img
    }

    /// Top-left pixel (x, y) of the cell at (row, col), saturating far off-board.
    #[inline]
    pub fn cell_to_pixel(&self, (row, col): (usize, usize)) -> (usize, usize) {
        (
            col.saturating_mul(self.config.cell_w_pix),
            row.saturating_mul(self.config.cell_h_pix),
        )
    }

    /// Cell (row, col) containing pixel (x, y), `None` outside the grid.
    pub fn pixel_to_cell(&self, (x, y): (usize, usize)) -> Option<(usize, usize)> {
        let row = y / self.config.cell_h_pix;
        let col = x / self.config.cell_w_pix;
        (row < self.config.h_cells && col < self.config.w_cells).then_some((row, col))
    }

    /// Paste a sprite into the live image at a cell's top-left corner.
    pub fn draw_sprite(&mut self, sprite: &PixelBuffer, cell: (usize, usize)) {
        let (x, y) = self.cell_to_pixel(cell);
        let x = i64::try_from(x).unwrap_or(i64::MAX);
        let y = i64::try_from(y).unwrap_or(i64::MAX);
        sprite.draw_on(&mut self.img, x, y);
    }
}

/// Reject zero dimensions and boards whose pixel size overflows.
/// Returns the board size in pixels as `(width, height)`.
fn check_geometry(config: &BoardConfig) -> Result<(usize, usize), BoardError> {
    let non_zero = config.cell_h_pix != 0
        && config.cell_w_pix != 0
        && config.w_cells != 0
        && config.h_cells != 0;
    match config.pixel_size() {
        Some(size) if non_zero => Ok(size),
        _ => Err(BoardError::InvalidGeometry {
            cell_h_pix: config.cell_h_pix,
            cell_w_pix: config.cell_w_pix,
            w_cells: config.w_cells,
            h_cells: config.h_cells,
        }),
    }
}

impl Clone for Board {
    /// Deep-copy the live image into a brand-new board.
    ///
    /// The clone's snapshot is captured from that copy, so resetting the
    /// clone restores the source's pixels as they were at clone time.
    fn clone(&self) -> Self {
        Self::capture(self.config, self.img.copy())
    }
}
