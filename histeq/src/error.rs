//! Error types for the histeq session and binary

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`ImageSession`](crate::ImageSession) commands and
/// configuration loading.
///
/// A failed command leaves the session exactly as it was.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A command needs pixels but nothing has been loaded
    #[error("no image loaded")]
    NoImageLoaded,

    /// Reload requested on a session that was not opened from a file
    #[error("session has no source file to reload")]
    NoSourcePath,

    /// Command name or key not recognised
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] histeq_core::Error),

    /// Grayscale conversion error
    #[error("color error: {0}")]
    Color(#[from] histeq_color::ColorError),

    /// Equalization error
    #[error("filter error: {0}")]
    Filter(#[source] histeq_filter::FilterError),

    /// Image loading or writing error
    #[error("I/O error: {0}")]
    Io(#[from] histeq_io::IoError),

    /// Configuration file could not be read
    #[error("cannot read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`Config`](crate::Config)
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration value out of range
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

// Core errors raised inside the filter crate surface as `Core`.
impl From<histeq_filter::FilterError> for SessionError {
    fn from(err: histeq_filter::FilterError) -> Self {
        match err {
            histeq_filter::FilterError::Core(e) => SessionError::Core(e),
            other => SessionError::Filter(other),
        }
    }
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
