//! Shared naming and discovery types for the Vitrine gallery.
//!
//! The directory name of an app decides its slug, its output paths,
//! its mount element id, and its global initializer name. Those facts
//! are derived exactly once, here, into an [`AppManifest`] that the
//! build orchestrator, the host document generator, and the runtime
//! shell all consume verbatim. None of them re-derive the convention,
//! so it cannot drift between independently-run steps.
//!
//! The crate also owns [`RUNTIME_LIBS`], the pinned set of shared
//! runtime libraries that bundles externalize and host documents load
//! as script tags. Both sides read the same table.

mod discover;
mod error;
mod manifest;
mod runtime;

pub use discover::{discover, select, GalleryLayout};
pub use error::{ManifestError, Result};
pub use manifest::{slugify, AppManifest};
pub use runtime::{RuntimeLib, RUNTIME_LIBS, STYLE_RUNTIME_URL};
