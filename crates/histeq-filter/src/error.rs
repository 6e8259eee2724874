//! Error types for histeq-filter

use thiserror::Error;

/// Errors that can occur during equalization
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] histeq_core::Error),

    /// The histogram does not describe the buffer being remapped
    #[error("histogram mismatch: histogram counts {histogram_total} pixels, image has {pixel_count}")]
    HistogramMismatch {
        /// Sum of the histogram buckets
        histogram_total: u64,
        /// Pixels in the image
        pixel_count: u64,
    },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
