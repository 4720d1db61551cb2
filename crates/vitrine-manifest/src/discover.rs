//! Filesystem discovery of gallery apps.

use crate::error::{ManifestError, Result};
use crate::manifest::AppManifest;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Where apps live and where their artifacts go.
#[derive(Debug, Clone)]
pub struct GalleryLayout {
    /// Directory whose immediate subdirectories are the apps.
    pub apps_dir: PathBuf,
    /// Root of the build output tree.
    pub dist_dir: PathBuf,
    /// Entry module file name inside each app directory.
    pub entry_file: String,
}

impl GalleryLayout {
    /// Layout with the default `index.tsx` entry convention.
    pub fn new(apps_dir: impl Into<PathBuf>, dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            apps_dir: apps_dir.into(),
            dist_dir: dist_dir.into(),
            entry_file: "index.tsx".to_string(),
        }
    }

    /// Override the entry module file name.
    pub fn with_entry_file(mut self, entry_file: &str) -> Self {
        self.entry_file = entry_file.to_string();
        self
    }
}

/// Scan the apps directory and produce one manifest per app.
///
/// Every immediate subdirectory is an app; non-directory entries are
/// ignored. Results are sorted by name so downstream artifacts are
/// reproducible regardless of filesystem enumeration order. An empty
/// root yields an empty set; an unreadable root aborts the pass. A
/// slug collision aborts the pass too, rather than letting two apps
/// fight over one output directory.
pub fn discover(layout: &GalleryLayout) -> Result<Vec<AppManifest>> {
    let entries =
        fs::read_dir(&layout.apps_dir).map_err(|source| ManifestError::RootUnreadable {
            path: layout.apps_dir.clone(),
            source,
        })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();

    let mut manifests = Vec::with_capacity(names.len());
    let mut seen: HashMap<String, String> = HashMap::new();
    for name in names {
        let entry_path = layout.apps_dir.join(&name).join(&layout.entry_file);
        let manifest = AppManifest::new(&name, entry_path, &layout.dist_dir)?;
        if let Some(first) = seen.insert(manifest.slug.clone(), name.clone()) {
            return Err(ManifestError::SlugCollision {
                slug: manifest.slug,
                first,
                second: name,
            });
        }
        manifests.push(manifest);
    }

    debug!(
        count = manifests.len(),
        root = %layout.apps_dir.display(),
        "Discovered apps"
    );

    Ok(manifests)
}

/// Resolve a "which app" selector against a discovery pass.
///
/// Matches the exact app name first, then the slug, so `BQ` and `bq`
/// select the same app. Slug uniqueness makes the fallback
/// unambiguous.
pub fn select<'a>(manifests: &'a [AppManifest], selector: &str) -> Result<&'a AppManifest> {
    if let Some(manifest) = manifests.iter().find(|m| m.name == selector) {
        return Ok(manifest);
    }
    if let Some(manifest) = manifests.iter().find(|m| m.slug == selector) {
        return Ok(manifest);
    }
    Err(ManifestError::UnknownApp {
        selector: selector.to_string(),
        available: manifests.iter().map(|m| m.name.clone()).collect(),
    })
}
