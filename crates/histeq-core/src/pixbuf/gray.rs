//! Grayscale validation

use super::PixelBuffer;
use crate::color;

/// How strictly [`PixelBuffer::is_grayscale`] tests each pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GrayscaleCheck {
    /// Every pixel must have R == G == B
    #[default]
    Strict,
    /// A pixel is rejected only if `r != g && g != b`.
    ///
    /// Accepts some non-gray pixels such as `(10, 20, 20)`; kept for
    /// parity with images prepared for the older check.
    Lenient,
}

impl PixelBuffer {
    /// Check whether every pixel is gray under `check`.
    ///
    /// Stops at the first rejected pixel. An empty buffer is grayscale.
    pub fn is_grayscale(&self, check: GrayscaleCheck) -> bool {
        self.data.iter().all(|&pixel| {
            let (r, g, b, _) = color::extract_rgba(pixel);
            color::is_gray(r, g, b, check)
        })
    }
}
