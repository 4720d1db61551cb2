//! Host document rendering and generation.

use crate::error::Result;
use askama::Template;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};
use vitrine_manifest::{AppManifest, RUNTIME_LIBS, STYLE_RUNTIME_URL};

/// The HTML shell that loads one built bundle.
///
/// Runtime script tags come from [`RUNTIME_LIBS`], so every generated
/// document pins exactly the versions the bundles were built against.
#[derive(Template)]
#[template(path = "host.html")]
struct HostDocTemplate<'a> {
    name: &'a str,
    mount_id: String,
    runtime_urls: Vec<&'static str>,
    style_runtime_url: &'static str,
    bundle_file: String,
    initializer: String,
}

/// Render the host document for one app.
pub fn render(manifest: &AppManifest) -> Result<String> {
    let template = HostDocTemplate {
        name: &manifest.name,
        mount_id: manifest.mount_id(),
        runtime_urls: RUNTIME_LIBS.iter().map(|lib| lib.url).collect(),
        style_runtime_url: STYLE_RUNTIME_URL,
        bundle_file: manifest.bundle_file(),
        initializer: manifest.initializer(),
    };
    Ok(template.render()?)
}

/// Write `index.html` into the app's output directory, creating the
/// directory if needed.
///
/// Regeneration overwrites the one file in place; nothing stale
/// accumulates, and repeated runs for the same manifest are
/// byte-identical.
pub fn write(manifest: &AppManifest) -> Result<PathBuf> {
    let html = render(manifest)?;
    fs::create_dir_all(&manifest.output_dir)?;
    let path = manifest.output_dir.join("index.html");
    fs::write(&path, html)?;
    debug!(app = %manifest.name, path = %path.display(), "Wrote host document");
    Ok(path)
}

/// Generate host documents for every app in a discovery pass.
pub fn write_all(manifests: &[AppManifest]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(manifests.len());
    for manifest in manifests {
        paths.push(write(manifest)?);
    }
    info!(count = paths.len(), "Generated host documents");
    Ok(paths)
}
