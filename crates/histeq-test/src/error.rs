//! Errors raised by the regression helpers themselves
//!
//! A failed comparison is not an error; it is recorded in
//! [`RegParams`](crate::RegParams) and reported by `cleanup`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestError {
    /// Output image could not be encoded or written
    #[error("cannot write {path}: {source}")]
    Write {
        path: String,
        source: histeq_io::IoError,
    },

    /// Golden file could not be created
    #[error("cannot create golden file {path}: {source}")]
    Golden {
        path: String,
        source: std::io::Error,
    },
}

pub type TestResult<T> = Result<T, TestError>;
