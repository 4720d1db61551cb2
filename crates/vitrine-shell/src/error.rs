//! Error types for the gallery shell.

use thiserror::Error;

/// Errors raised while assembling the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Two loaders registered under the same app name.
    #[error("app '{0}' registered twice")]
    DuplicateApp(String),
}

/// Result type for shell assembly.
pub type Result<T> = std::result::Result<T, ShellError>;

/// Failure of one app's deferred loader.
///
/// Scoped to that app's render slot; the shell itself never fails
/// because a loader did.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct LoadError(pub String);

impl LoadError {
    /// Load error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
