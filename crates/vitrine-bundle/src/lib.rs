//! Per-app build orchestration for the Vitrine gallery.
//!
//! Builds exactly one app per invocation: derive its [`BuildTarget`]
//! from the manifest, run a [`Bundler`] (the compilation step itself
//! is an external collaborator), and only then write artifacts under
//! the app's own `dist/<slug>/` directory. Validation and bundling
//! finish before the first write, so a failed build never leaves a
//! half-written output directory, and sibling apps' outputs are never
//! touched.
//!
//! ```no_run
//! use vitrine_bundle::{build_selected, CommandBundler};
//! use vitrine_manifest::{discover, GalleryLayout};
//!
//! async fn build() -> Result<(), Box<dyn std::error::Error>> {
//!     let layout = GalleryLayout::new("src/apps", "dist");
//!     let manifests = discover(&layout)?;
//!     let bundler = CommandBundler::esbuild();
//!     let artifacts = build_selected(&manifests, Some("BQ"), &bundler).await?;
//!     println!("built {}", artifacts.bundle.display());
//!     Ok(())
//! }
//! ```

mod bundler;
mod error;
mod orchestrator;
mod target;

pub use bundler::{BundleOutput, Bundler, CommandBundler};
pub use error::{BundleError, Result};
pub use orchestrator::{build_app, build_selected, BuildArtifacts};
pub use target::BuildTarget;
