//! Build target derivation.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use vitrine_manifest::{AppManifest, RUNTIME_LIBS};

/// Everything the bundler needs to compile one app.
///
/// Always derived from the app's manifest, never constructed by hand,
/// so the output layout and the initializer name stay on convention.
#[derive(Debug, Clone, Serialize)]
pub struct BuildTarget {
    /// Entry module to compile.
    pub entry: PathBuf,
    /// Directory artifacts are committed to.
    pub out_dir: PathBuf,
    /// Bundle file name within `out_dir`.
    pub bundle_file: String,
    /// Stylesheet file name within `out_dir`, when styles are emitted.
    pub stylesheet_file: String,
    /// Module specifier to host-page global, for every externalized
    /// runtime library.
    pub externals: BTreeMap<String, String>,
    /// Global initializer function the bundle must expose.
    pub initializer: String,
}

impl BuildTarget {
    /// Derive the build target for one app.
    pub fn from_manifest(manifest: &AppManifest) -> Self {
        let externals = RUNTIME_LIBS
            .iter()
            .map(|lib| (lib.module.to_string(), lib.global.to_string()))
            .collect();
        Self {
            entry: manifest.entry_path.clone(),
            out_dir: manifest.output_dir.clone(),
            bundle_file: manifest.bundle_file(),
            stylesheet_file: manifest.stylesheet_file(),
            externals,
            initializer: manifest.initializer(),
        }
    }

    /// Full path of the bundle artifact.
    pub fn bundle_path(&self) -> PathBuf {
        self.out_dir.join(&self.bundle_file)
    }

    /// Full path of the stylesheet artifact.
    pub fn stylesheet_path(&self) -> PathBuf {
        self.out_dir.join(&self.stylesheet_file)
    }
}
