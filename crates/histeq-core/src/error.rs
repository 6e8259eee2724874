//! Error types for histeq-core
//!
//! Every pixel-level operation validates its input before touching the
//! buffer, so an `Err` always means the buffer was left unchanged.

use thiserror::Error;

/// histeq core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Operation needs every pixel to have R == G == B
    #[error("image must be grayscale")]
    GrayscaleRequired,

    /// Operation divides by the pixel count and the image has none
    #[error("degenerate image: {width}x{height} has no pixels")]
    DegenerateImage { width: u32, height: u32 },

    /// Pixel coordinates outside the buffer
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Raw data length does not match the dimensions
    #[error("buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
