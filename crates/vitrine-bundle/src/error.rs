//! Error types for the build orchestrator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building one app.
///
/// Every variant is fatal and is raised before the target directory
/// is mutated.
#[derive(Debug, Error)]
pub enum BundleError {
    /// The required "which app" selector was not provided at all.
    #[error("no app selected: set --app or the VITRINE_APP environment variable")]
    NoAppSelected,

    /// Selector resolution or discovery failed.
    #[error(transparent)]
    Manifest(#[from] vitrine_manifest::ManifestError),

    /// The app's entry module does not exist.
    #[error("entry module not found: {path}")]
    EntryMissing { path: PathBuf },

    /// The external bundler executable could not be started.
    #[error("failed to run bundler '{program}': {source}")]
    BundlerSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external bundler ran and reported failure.
    #[error("bundler exited with status {status}:\n{stderr}")]
    BundlerFailed { status: i32, stderr: String },

    /// IO error while reading bundler output or writing artifacts.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BundleError>;
