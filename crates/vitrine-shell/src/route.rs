//! Navigation-state resolution.

use crate::registry::AppRegistry;

/// The app selected by navigation state, or the index.
///
/// Derived purely from the current location hash. An unknown name is
/// not an error; it falls back to the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// No app selected; show the link index.
    Index,
    /// A registered app is selected.
    App(String),
}

impl Route {
    /// Resolve a raw location hash against the registry.
    ///
    /// Accepts the hash with or without its leading `#`.
    pub fn from_hash(hash: &str, registry: &AppRegistry) -> Self {
        let name = hash.strip_prefix('#').unwrap_or(hash);
        if !name.is_empty() && registry.contains(name) {
            Route::App(name.to_string())
        } else {
            Route::Index
        }
    }
}
