//! The start-up registry of lazily-loadable apps.

use crate::error::{LoadError, Result, ShellError};
use futures::future::BoxFuture;
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use vitrine_manifest::AppManifest;

/// A mountable app component.
///
/// The runtime counterpart of a bundle's global initializer: one well
/// known entry point that renders into the slot the shell owns. The
/// component owns that slot for as long as it is mounted; dropping it
/// is the unmount.
pub trait AppComponent: Send + Sync {
    /// Render the component into its mount slot.
    fn render(&self) -> String;
}

/// Deferred loader for one app's component.
///
/// Not executed at registration; the shell calls it the first time
/// navigation selects the app (and again on each later selection).
pub type AppLoader = Arc<
    dyn Fn() -> BoxFuture<'static, std::result::Result<Arc<dyn AppComponent>, LoadError>>
        + Send
        + Sync,
>;

/// Immutable mapping from app name to its deferred loader.
///
/// Built once at shell start-up from the statically enumerated app
/// modules. A new enumeration is a full replacement registry, never
/// an in-place update.
pub struct AppRegistry {
    entries: BTreeMap<String, AppLoader>,
}

impl AppRegistry {
    /// Start collecting registrations.
    pub fn builder() -> AppRegistryBuilder {
        AppRegistryBuilder {
            entries: BTreeMap::new(),
        }
    }

    /// Registered app names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Whether an app is registered under this exact name.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The deferred loader for an app.
    pub fn loader(&self, name: &str) -> Option<AppLoader> {
        self.entries.get(name).cloned()
    }

    /// Number of registered apps.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for AppRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppRegistry")
            .field("apps", &self.names())
            .finish()
    }
}

/// Builder collecting the static app-module enumeration.
pub struct AppRegistryBuilder {
    entries: BTreeMap<String, AppLoader>,
}

impl AppRegistryBuilder {
    /// Register an app under a name with its deferred loader.
    ///
    /// Names are unique; registering the same name twice is an error
    /// rather than a silent replacement.
    pub fn register<F, Fut>(mut self, name: &str, loader: F) -> Result<Self>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<Arc<dyn AppComponent>, LoadError>>
            + Send
            + 'static,
    {
        if self.entries.contains_key(name) {
            return Err(ShellError::DuplicateApp(name.to_string()));
        }
        let loader: AppLoader = Arc::new(move || Box::pin(loader()));
        self.entries.insert(name.to_string(), loader);
        Ok(self)
    }

    /// Register an app under its manifest name.
    ///
    /// Keeps the runtime registry keyed by the same names the build
    /// artifacts were produced under.
    pub fn register_manifest<F, Fut>(self, manifest: &AppManifest, loader: F) -> Result<Self>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<Arc<dyn AppComponent>, LoadError>>
            + Send
            + 'static,
    {
        self.register(&manifest.name, loader)
    }

    /// Finish the enumeration.
    pub fn build(self) -> AppRegistry {
        AppRegistry {
            entries: self.entries,
        }
    }
}
