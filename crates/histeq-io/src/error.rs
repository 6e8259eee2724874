//! Error type for histeq-io
//!
//! Codec crate errors are flattened into message strings so callers
//! match on one enum regardless of the enabled formats.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    /// Opening, reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Format detected but not readable or writable here
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Input too short, or a buffer that cannot be encoded
    #[error("invalid image data: {0}")]
    InvalidData(String),

    #[error("decode error: {0}")]
    DecodeError(String),

    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded pixels did not fit the image dimensions
    #[error("core error: {0}")]
    Core(#[from] histeq_core::Error),
}

pub type IoResult<T> = Result<T, IoError>;
