//! PixelBuffer - the RGBA image container
//!
//! A `PixelBuffer` owns `width * height` packed `0xRRGGBBAA` words in
//! row-major order. Unlike most image containers it accepts a zero width
//! or height, so callers that divide by the pixel count have to guard
//! against [`Error::DegenerateImage`].
//!
//! # Ownership model
//!
//! The buffer is a plain owned value. Conversions and equalization take
//! `&mut PixelBuffer` and rewrite it in place; a reload replaces it
//! wholesale.

mod access;
pub mod graphics;
mod gray;

pub use graphics::Color;
pub use gray::GrayscaleCheck;

use crate::color;
use crate::error::{Error, Result};

/// Owned RGBA image with 8 bits per channel.
///
/// # Examples
///
/// ```
/// use histeq_core::PixelBuffer;
///
/// let buf = PixelBuffer::new(640, 480);
/// assert_eq!(buf.width(), 640);
/// assert_eq!(buf.pixel_count(), 640 * 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl PixelBuffer {
    /// Create a buffer of transparent black pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Create a buffer with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: u32) -> Self {
        let len = width as usize * height as usize;
        PixelBuffer {
            width,
            height,
            data: vec![pixel; len],
        }
    }

    /// Wrap packed `0xRRGGBBAA` words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            data,
        })
    }

    /// Build a buffer from interleaved RGBA bytes (4 bytes per pixel).
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `bytes.len() != width * height * 4`.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let data = bytes
            .chunks_exact(4)
            .map(|p| color::compose_rgba(p[0], p[1], p[2], p[3]))
            .collect();
        Ok(PixelBuffer {
            width,
            height,
            data,
        })
    }

    /// Interleaved RGBA bytes, 4 per pixel, row-major.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 4);
        for &pixel in &self.data {
            let (r, g, b, a) = color::extract_rgba(pixel);
            out.extend_from_slice(&[r, g, b, a]);
        }
        out
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// True when the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get raw access to the packed pixel words.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Get mutable access to the packed pixel words.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Get the pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Get the pixels of row `y` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = y as usize * self.width as usize;
        let width = self.width as usize;
        &mut self.data[start..start + width]
    }

    /// Check if two buffers have the same width and height.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Fail with [`Error::DegenerateImage`] when the buffer has no pixels.
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::DegenerateImage {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
