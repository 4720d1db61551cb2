//! Error types for host document generation.

use thiserror::Error;

/// Host document generation errors.
#[derive(Debug, Error)]
pub enum HostDocError {
    /// Template rendering error.
    #[error("template error: {0}")]
    Template(String),

    /// IO error while writing the document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<askama::Error> for HostDocError {
    fn from(err: askama::Error) -> Self {
        HostDocError::Template(err.to_string())
    }
}

/// Result type for host document operations.
pub type Result<T> = std::result::Result<T, HostDocError>;
