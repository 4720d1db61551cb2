//! The per-app naming value object.

use crate::error::{ManifestError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Naming and layout facts for one gallery app.
///
/// Produced by discovery and threaded unchanged through every step
/// that touches the app. The derived accessors below are the single
/// definition of the naming convention: bundle file, stylesheet file,
/// mount element id, and global initializer all come from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppManifest {
    /// App name, spelled exactly as its directory (e.g. "BQ").
    pub name: String,
    /// Lowercase-normalized name, used in paths and DOM ids.
    pub slug: String,
    /// Path to the app's entry module.
    pub entry_path: PathBuf,
    /// Directory the app's artifacts are written to (`dist/<slug>`).
    pub output_dir: PathBuf,
}

impl AppManifest {
    /// Create a manifest for a named app.
    ///
    /// The name must be usable as a JavaScript identifier suffix,
    /// since it becomes part of the global initializer name.
    pub fn new(name: &str, entry_path: PathBuf, dist_dir: &Path) -> Result<Self> {
        if !is_valid_app_name(name) {
            return Err(ManifestError::InvalidName(name.to_string()));
        }
        let slug = slugify(name);
        let output_dir = dist_dir.join(&slug);
        Ok(Self {
            name: name.to_string(),
            slug,
            entry_path,
            output_dir,
        })
    }

    /// File name of the built bundle (`<slug>.js`).
    pub fn bundle_file(&self) -> String {
        format!("{}.js", self.slug)
    }

    /// File name of the optional co-located stylesheet (`<slug>.css`).
    pub fn stylesheet_file(&self) -> String {
        format!("{}.css", self.slug)
    }

    /// DOM id of the mount container element (`<slug>-app`).
    pub fn mount_id(&self) -> String {
        format!("{}-app", self.slug)
    }

    /// Name of the global initializer function the app's bundle must
    /// expose (`initialize<Name>`).
    pub fn initializer(&self) -> String {
        format!("initialize{}", self.name)
    }
}

/// Lowercase-normalize an app name into its slug.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
}

fn is_valid_app_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
