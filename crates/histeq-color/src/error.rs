//! Error types for histeq-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Unknown conversion name
    #[error("unknown gray conversion: {0}")]
    UnknownConversion(String),
}
