//! CLI command implementations.

use anyhow::Result;
use vitrine_bundle::{build_selected, CommandBundler};
use vitrine_manifest::{discover, select, GalleryLayout};

/// List the apps a discovery pass finds.
pub fn list(layout: &GalleryLayout, json: bool) -> Result<()> {
    let manifests = discover(layout)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&manifests)?);
        return Ok(());
    }

    if manifests.is_empty() {
        println!("No apps found in {}", layout.apps_dir.display());
        return Ok(());
    }
    for manifest in &manifests {
        println!(
            "{}  (slug: {}, entry: {})",
            manifest.name,
            manifest.slug,
            manifest.entry_path.display()
        );
    }
    Ok(())
}

/// Build one app's bundle.
pub async fn build(layout: &GalleryLayout, app: Option<&str>, bundler: &str) -> Result<()> {
    tracing::info!(app = ?app, bundler = %bundler, "Starting build");

    let manifests = discover(layout)?;
    let bundler = CommandBundler::new(bundler);

    let artifacts = build_selected(&manifests, app, &bundler).await?;

    println!("Built {}", artifacts.bundle.display());
    if let Some(stylesheet) = &artifacts.stylesheet {
        println!("Built {}", stylesheet.display());
    }
    Ok(())
}

/// Generate host documents for one app or every discovered app.
pub fn hostdoc(layout: &GalleryLayout, app: Option<&str>) -> Result<()> {
    tracing::info!(app = ?app, "Generating host documents");

    let manifests = discover(layout)?;

    let paths = match app {
        Some(selector) => vec![vitrine_hostdoc::write(select(&manifests, selector)?)?],
        None => vitrine_hostdoc::write_all(&manifests)?,
    };

    for path in &paths {
        println!("Generated {}", path.display());
    }
    Ok(())
}
