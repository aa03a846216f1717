//! Error type for file-backed matrix operations

use std::path::PathBuf;

use dokmat_core::{MatrixError, ParseError};
use thiserror::Error;

/// Result type using the dokmat [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from loading, saving or combining matrices
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid matrix, malformed text or incompatible operands
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// Underlying read or write failure
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Matrix(err.into())
    }
}
