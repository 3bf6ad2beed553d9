//! Raster module - Owned pixel storage for the board surface and sprites.
//!
//! A [`PixelBuffer`] is either *absent* (nothing loaded yet, every dimension
//! is zero) or holds a row-major `height * width * channels` array of `u8`
//! channel values. Decoded images are always RGBA; single-channel buffers
//! are available through [`PixelBuffer::from_raw`] for masks and tests.

mod draw;
mod pixel_buffer;

pub use pixel_buffer::*;

/// Errors raised by the fallible raster constructors.
///
/// [`PixelBuffer::read`] never surfaces these; it substitutes a blank buffer.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("Pixel buffer dimensions (width, height, channels) must be non-zero")]
    EmptyShape,
    #[error("Pixel buffer shape {width}x{height}x{channels} is too large to address")]
    ShapeOverflow {
        width: usize,
        height: usize,
        channels: usize,
    },
    #[error("Pixel data has {actual} values but shape requires {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("Failed to load image: {0}")]
    Decode(#[from] image::ImageError),
}
