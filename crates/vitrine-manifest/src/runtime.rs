//! The externalized shared runtime libraries.
//!
//! Several independently built apps can be embedded on one host page,
//! so the rendering framework and its DOM-binding layer are never
//! bundled. Bundles declare them external and host documents load
//! them as plain script tags. Both sides read this one table, which
//! is what keeps the externalization list and the pinned script
//! versions from drifting apart.

use serde::Serialize;

/// One shared runtime library, pinned to an exact version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeLib {
    /// Module specifier apps import it by.
    pub module: &'static str,
    /// Global the host page exposes it as.
    pub global: &'static str,
    /// Exact pinned version, identical across every generated document.
    pub version: &'static str,
    /// CDN URL of the browser build for the pinned version.
    pub url: &'static str,
}

/// Libraries excluded from every bundle and expected as host globals.
pub const RUNTIME_LIBS: &[RuntimeLib] = &[
    RuntimeLib {
        module: "react",
        global: "React",
        version: "18.3.1",
        url: "https://unpkg.com/react@18.3.1/umd/react.production.min.js",
    },
    RuntimeLib {
        module: "react-dom",
        global: "ReactDOM",
        version: "18.3.1",
        url: "https://unpkg.com/react-dom@18.3.1/umd/react-dom.production.min.js",
    },
];

/// Utility style runtime loaded by host documents.
///
/// Not a bundling external: apps do not import it as a module, the
/// host page just loads it alongside the runtime libraries.
pub const STYLE_RUNTIME_URL: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";
