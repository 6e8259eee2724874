//! histeq core - pixel buffer and histogram types
//!
//! This crate provides the data structures shared by every other histeq
//! crate:
//!
//! - [`PixelBuffer`] - Owned RGBA image (8 bits per channel)
//! - [`Histogram`] - 256-bucket intensity histogram
//! - [`GrayscaleCheck`] - How strictly an image must be gray
//! - [`Color`] - Opaque RGB color used by the drawing primitives
//!
//! # Pixel format
//!
//! Pixels are stored as packed `u32` words in `0xRRGGBBAA` order; see
//! [`color`] for the packing helpers.

pub mod error;
pub mod histogram;
pub mod pixbuf;

pub use error::{Error, Result};
pub use histogram::Histogram;
pub use pixbuf::{Color, GrayscaleCheck, PixelBuffer};

/// Bits per color channel of a [`PixelBuffer`] pixel.
pub const BITS_PER_CHANNEL: u32 = 8;

/// Number of discrete intensity levels per channel (`2^BITS_PER_CHANNEL`).
pub const INTENSITY_LEVELS: usize = 1 << BITS_PER_CHANNEL;

/// Channel packing helpers for 32-bit RGBA pixels.
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    use crate::pixbuf::GrayscaleCheck;

    const RED_SHIFT: u32 = 24;
    const GREEN_SHIFT: u32 = 16;
    const BLUE_SHIFT: u32 = 8;

    #[inline]
    pub fn red(pixel: u32) -> u8 {
        (pixel >> RED_SHIFT) as u8
    }

    #[inline]
    pub fn green(pixel: u32) -> u8 {
        (pixel >> GREEN_SHIFT) as u8
    }

    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        (pixel >> BLUE_SHIFT) as u8
    }

    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        pixel as u8
    }

    /// Pack four channels into one `0xRRGGBBAA` word.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        u32::from_be_bytes([r, g, b, a])
    }

    /// Compose an opaque 32-bit pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose a gray pixel (R = G = B = `value`) with the given alpha.
    #[inline]
    pub fn compose_gray(value: u8, a: u8) -> u32 {
        compose_rgba(value, value, value, a)
    }

    /// Split a pixel into `(r, g, b, a)`.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        let [r, g, b, a] = pixel.to_be_bytes();
        (r, g, b, a)
    }

    /// Whether a single pixel counts as gray under `check`.
    ///
    /// [`GrayscaleCheck::Lenient`] only rejects a pixel when both
    /// `r != g` and `g != b`, so `(10, 20, 20)` is accepted.
    #[inline]
    pub fn is_gray(r: u8, g: u8, b: u8, check: GrayscaleCheck) -> bool {
        match check {
            GrayscaleCheck::Strict => r == g && g == b,
            GrayscaleCheck::Lenient => !(r != g && g != b),
        }
    }

}
