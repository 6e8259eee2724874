//! histeq-filter - Histogram equalization
//!
//! Remaps the intensities of a grayscale [`PixelBuffer`] through the
//! normalized cumulative distribution of its histogram, spreading the
//! occupied levels over the full 0..=255 range.
//!
//! [`PixelBuffer`]: histeq_core::PixelBuffer

pub mod enhance;
mod error;

pub use error::{FilterError, FilterResult};

pub use enhance::{EqualizationTable, equalize, equalize_histogram};
