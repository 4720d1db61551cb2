//! Error types for discovery and naming.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while discovering apps or resolving their names.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Apps root could not be read; the whole discovery pass aborts.
    #[error("apps directory unreadable: {path}: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two app names normalize to the same slug, so their artifacts
    /// would land in the same output directory.
    #[error("apps '{first}' and '{second}' both normalize to slug '{slug}'")]
    SlugCollision {
        slug: String,
        first: String,
        second: String,
    },

    /// Selector did not resolve to any discovered app.
    #[error("no app named '{selector}' (available: {})", .available.join(", "))]
    UnknownApp {
        selector: String,
        available: Vec<String>,
    },

    /// App name cannot form a valid global initializer identifier.
    #[error("invalid app name '{0}': expected a letter or '_' followed by alphanumerics or '_'")]
    InvalidName(String),

    /// IO error while scanning directory entries.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for manifest operations.
pub type Result<T> = std::result::Result<T, ManifestError>;
