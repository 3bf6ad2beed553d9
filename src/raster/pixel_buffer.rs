//! Pixel buffer storage, loading and element access.

use std::path::Path;

use image::RgbaImage;
use image::imageops::{self, FilterType};

use super::RasterError;

/// Channel count of every decoded image and every fallback buffer.
pub const RGBA_CHANNELS: usize = 4;

/// Buffer dimensions, ordered like the underlying array: (height, width, channels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shape {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl Shape {
    pub fn new(height: usize, width: usize, channels: usize) -> Self {
        Self {
            height,
            width,
            channels,
        }
    }

    /// Number of channel values a buffer of this shape holds, `None` on overflow.
    #[inline]
    pub fn len(&self) -> Option<usize> {
        self.height
            .checked_mul(self.width)?
            .checked_mul(self.channels)
    }

    /// True when any dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0 || self.channels == 0
    }
}

/// Owned raster of `u8` channel values.
///
/// The shape always matches the stored data; an absent buffer reports a
/// zero shape. Cloning (or [`PixelBuffer::copy`]) duplicates every element,
/// so no two buffers ever share storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Option<Vec<u8>>,
    shape: Shape,
}

impl PixelBuffer {
    /// Create an absent buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt raw row-major channel data.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, RasterError> {
        let shape = Shape::new(height, width, channels);
        if shape.is_empty() {
            return Err(RasterError::EmptyShape);
        }
        let expected = shape.len().ok_or(RasterError::ShapeOverflow {
            width,
            height,
            channels,
        })?;
        if data.len() != expected {
            return Err(RasterError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            pixels: Some(data),
            shape,
        })
    }

    /// Buffer of the given shape with every channel set to `value`.
    ///
    /// A shape with any zero dimension, or too large to address, yields an
    /// absent buffer.
    pub fn filled(width: usize, height: usize, channels: usize, value: u8) -> Self {
        let shape = Shape::new(height, width, channels);
        match shape.len() {
            Some(len) if !shape.is_empty() => Self {
                pixels: Some(vec![value; len]),
                shape,
            },
            _ => Self::new(),
        }
    }

    /// Transparent RGBA buffer used whenever a load fails.
    pub fn blank(width: usize, height: usize) -> Self {
        Self::filled(width, height, RGBA_CHANNELS, 0)
    }

    fn from_rgba_image(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let shape = Shape::new(height as usize, width as usize, RGBA_CHANNELS);
        let data = img.into_raw();
        if shape.is_empty() {
            return Self::new();
        }
        Self {
            pixels: Some(data),
            shape,
        }
    }

    /// Decode an image file into an RGBA buffer at its natural resolution.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RasterError> {
        let img = image::open(path.as_ref())?.to_rgba8();
        Ok(Self::from_rgba_image(img))
    }

    /// Load an image, falling back to a blank `size = (width, height)` buffer.
    ///
    /// Never fails: a missing or undecodable file yields a zeroed RGBA buffer
    /// of shape `(height, width, 4)`.
    pub fn read<P: AsRef<Path>>(path: P, size: (usize, usize)) -> Self {
        let path = path.as_ref();
        match Self::open(path) {
            Ok(buffer) => {
                log::debug!(
                    "Loaded {} ({}x{})",
                    path.display(),
                    buffer.width(),
                    buffer.height()
                );
                buffer
            }
            Err(e) => {
                log::warn!(
                    "Using blank {}x{} image for {}: {}",
                    size.0,
                    size.1,
                    path.display(),
                    e
                );
                Self::blank(size.0, size.1)
            }
        }
    }

    /// Like [`PixelBuffer::read`], but a successful decode is resized to `size`.
    pub fn read_scaled<P: AsRef<Path>>(path: P, size: (usize, usize)) -> Self {
        let path = path.as_ref();
        let decoded = image::open(path).map(|img| img.to_rgba8());
        match decoded {
            Ok(img) => {
                let (Ok(width), Ok(height)) = (u32::try_from(size.0), u32::try_from(size.1))
                else {
                    log::warn!(
                        "Target size {}x{} for {} is too large to decode into",
                        size.0,
                        size.1,
                        path.display()
                    );
                    return Self::blank(size.0, size.1);
                };
                let img = if img.dimensions() == (width, height) || width == 0 || height == 0 {
                    img
                } else {
                    imageops::resize(&img, width, height, FilterType::Triangle)
                };
                log::debug!("Loaded {} scaled to {}x{}", path.display(), width, height);
                Self::from_rgba_image(img)
            }
            Err(e) => {
                log::warn!(
                    "Using blank {}x{} image for {}: {}",
                    size.0,
                    size.1,
                    path.display(),
                    e
                );
                Self::blank(size.0, size.1)
            }
        }
    }

    /// Independent duplicate; mutating either buffer never affects the other.
    pub fn copy(&self) -> Self {
        Self {
            pixels: self.pixels.as_ref().map(|p| p.to_vec()),
            shape: self.shape,
        }
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        self.pixels.is_none()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.shape.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.shape.height
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.shape.channels
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Raw channel data, `None` when absent.
    pub fn pixels(&self) -> Option<&[u8]> {
        self.pixels.as_deref()
    }

    /// Mutable channel data. The length is fixed so the shape stays valid.
    pub fn pixels_mut(&mut self) -> Option<&mut [u8]> {
        self.pixels.as_deref_mut()
    }

    /// Convert (x, y, channel) to a flat index, `None` when out of bounds.
    #[inline]
    pub fn idx(&self, x: usize, y: usize, channel: usize) -> Option<usize> {
        if x >= self.shape.width || y >= self.shape.height || channel >= self.shape.channels {
            return None;
        }
        Some((y * self.shape.width + x) * self.shape.channels + channel)
    }

    /// Channel value at (x, y), `None` when out of bounds or absent.
    pub fn get(&self, x: usize, y: usize, channel: usize) -> Option<u8> {
        let index = self.idx(x, y, channel)?;
        self.pixels.as_ref()?.get(index).copied()
    }

    /// Set a channel value at (x, y).
    /// Returns true if the value was written, false if out of bounds or absent.
    pub fn set(&mut self, x: usize, y: usize, channel: usize, value: u8) -> bool {
        let Some(index) = self.idx(x, y, channel) else {
            return false;
        };
        match self.pixels.as_mut().and_then(|p| p.get_mut(index)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Set every channel value to `value`.
    pub fn fill(&mut self, value: u8) {
        if let Some(pixels) = self.pixels.as_mut() {
            pixels.fill(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn test_new_is_absent() {
        let buffer = PixelBuffer::new();
        assert!(buffer.is_absent());
        assert_eq!(buffer.width(), 0);
        assert_eq!(buffer.height(), 0);
        assert_eq!(buffer.channels(), 0);
        assert!(buffer.pixels().is_none());
    }

    #[test]
    fn test_read_missing_file_falls_back() {
        let dir = tempdir().unwrap();
        let buffer = PixelBuffer::read(dir.path().join("missing.png"), (10, 20));

        assert_eq!(buffer.shape(), Shape::new(20, 10, 4));
        let pixels = buffer.pixels().unwrap();
        assert_eq!(pixels.len(), 20 * 10 * 4);
        assert!(pixels.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_read_corrupt_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corrupt.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let buffer = PixelBuffer::read(&path, (3, 5));
        assert_eq!(buffer.shape(), Shape::new(5, 3, 4));
        assert!(buffer.pixels().unwrap().iter().all(|&v| v == 0));
        assert!(PixelBuffer::open(&path).is_err());
    }

    #[test]
    fn test_read_keeps_natural_resolution() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("square.png");
        RgbaImage::from_pixel(7, 3, Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let buffer = PixelBuffer::read(&path, (64, 64));
        assert_eq!(buffer.shape(), Shape::new(3, 7, 4));
        assert_eq!(buffer.get(6, 2, 0), Some(10));
        assert_eq!(buffer.get(6, 2, 2), Some(30));
        assert_eq!(buffer.get(6, 2, 3), Some(255));
    }

    #[test]
    fn test_read_scaled_resizes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sprite.png");
        RgbaImage::from_pixel(16, 16, Rgba([200, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let buffer = PixelBuffer::read_scaled(&path, (8, 4));
        assert_eq!(buffer.shape(), Shape::new(4, 8, 4));
        let red = buffer.get(3, 2, 0).unwrap();
        assert!((199..=201).contains(&red), "red channel {red}");
    }

    #[test]
    fn test_copy_is_independent() {
        let original = PixelBuffer::filled(4, 4, 3, 200);
        let mut copy = original.copy();
        assert_eq!(copy, original);

        assert!(copy.set(1, 2, 0, 0));
        assert_eq!(copy.get(1, 2, 0), Some(0));
        assert_eq!(original.get(1, 2, 0), Some(200));
        assert!(original.pixels().unwrap().iter().all(|&v| v == 200));
    }

    #[test]
    fn test_copy_of_absent_is_absent() {
        assert!(PixelBuffer::new().copy().is_absent());
    }

    #[test]
    fn test_from_raw_validates_length() {
        assert!(PixelBuffer::from_raw(2, 2, 1, vec![0; 4]).is_ok());
        assert!(matches!(
            PixelBuffer::from_raw(2, 2, 1, vec![0; 5]),
            Err(RasterError::ShapeMismatch {
                expected: 4,
                actual: 5
            })
        ));
        assert!(matches!(
            PixelBuffer::from_raw(0, 2, 1, vec![]),
            Err(RasterError::EmptyShape)
        ));
    }

    #[test]
    fn test_filled_zero_dimension_is_absent() {
        assert!(PixelBuffer::filled(0, 8, 4, 1).is_absent());
    }

    #[test]
    fn test_oversized_shape_is_rejected() {
        assert_eq!(Shape::new(2, usize::MAX, 1).len(), None);
        assert!(matches!(
            PixelBuffer::from_raw(usize::MAX, 2, 1, vec![0; 4]),
            Err(RasterError::ShapeOverflow { .. })
        ));
        assert!(PixelBuffer::filled(usize::MAX, 2, 1, 0).is_absent());
        assert!(PixelBuffer::blank(usize::MAX / 2, usize::MAX / 2).is_absent());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_read_scaled_size_beyond_u32() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sprite.png");
        RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255]))
            .save(&path)
            .unwrap();

        // 2^32 would wrap to 0 and keep the 4x4 decode if truncated.
        let huge = u32::MAX as usize + 1;
        let buffer = PixelBuffer::read_scaled(&path, (huge, huge));
        assert!(buffer.is_absent());
        assert_eq!(buffer.width(), 0);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut buffer = PixelBuffer::filled(2, 2, 1, 0);
        assert!(!buffer.set(2, 0, 0, 9));
        assert!(!buffer.set(0, 0, 1, 9));
        assert_eq!(buffer.get(0, 2, 0), None);

        let mut absent = PixelBuffer::new();
        assert!(!absent.set(0, 0, 0, 1));
        assert_eq!(absent.get(0, 0, 0), None);
    }
}
