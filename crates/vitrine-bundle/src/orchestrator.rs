//! Build orchestration: validate, bundle, then commit artifacts.

use crate::bundler::{BundleOutput, Bundler};
use crate::error::{BundleError, Result};
use crate::target::BuildTarget;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};
use vitrine_manifest::AppManifest;

/// Artifacts written by one successful build.
#[derive(Debug, Clone)]
pub struct BuildArtifacts {
    /// Path of the committed bundle (`dist/<slug>/<slug>.js`).
    pub bundle: PathBuf,
    /// Path of the committed stylesheet, when one was emitted.
    pub stylesheet: Option<PathBuf>,
}

/// Resolve the "which app" selector and build that app.
///
/// The selector is required; `None` (an unset environment) is a
/// configuration error raised before anything is written, as is a
/// selector that matches no discovered app.
pub async fn build_selected(
    manifests: &[AppManifest],
    selector: Option<&str>,
    bundler: &dyn Bundler,
) -> Result<BuildArtifacts> {
    let selector = selector.ok_or(BundleError::NoAppSelected)?;
    let manifest = vitrine_manifest::select(manifests, selector)?;
    build_app(manifest, bundler).await
}

/// Build one app: derive its target, run the bundler, and write the
/// artifacts under the app's own output directory.
///
/// Sibling apps' previously built outputs are never deleted or
/// rewritten; each app owns `dist/<slug>/` exclusively. Concurrent
/// builds of different apps are safe for the same reason. Concurrent
/// builds of the same app are the caller's to serialize.
pub async fn build_app(manifest: &AppManifest, bundler: &dyn Bundler) -> Result<BuildArtifacts> {
    let target = BuildTarget::from_manifest(manifest);

    // Resolution check up front: a missing entry fails before the
    // output directory even exists.
    if !target.entry.is_file() {
        return Err(BundleError::EntryMissing {
            path: target.entry.clone(),
        });
    }

    info!(app = %manifest.name, entry = %target.entry.display(), "Building app");
    let output = bundler.bundle(&target).await?;
    commit(&target, &output).await
}

async fn commit(target: &BuildTarget, output: &BundleOutput) -> Result<BuildArtifacts> {
    fs::create_dir_all(&target.out_dir).await?;

    let bundle = target.bundle_path();
    fs::write(&bundle, &output.script).await?;
    debug!(path = %bundle.display(), bytes = output.script.len(), "Wrote bundle");

    let stylesheet = match &output.stylesheet {
        Some(css) => {
            let path = target.stylesheet_path();
            fs::write(&path, css).await?;
            debug!(path = %path.display(), bytes = css.len(), "Wrote stylesheet");
            Some(path)
        }
        None => None,
    };

    info!(bundle = %bundle.display(), "Build complete");
    Ok(BuildArtifacts { bundle, stylesheet })
}
