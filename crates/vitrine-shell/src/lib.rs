//! Runtime gallery shell for Vitrine mini-apps.
//!
//! The shell owns a registry of lazily-loadable apps, listens to
//! navigation (hash) changes, and shows exactly one of: the index of
//! registered apps, a loading placeholder, a mounted app, or a
//! scoped load failure. Navigation may outrun a pending load; the
//! shell guarantees that only the most recent navigation's load can
//! reach the screen ("last navigation wins") by stamping every load
//! with a navigation sequence number and discarding results whose
//! stamp is stale.

mod error;
mod registry;
mod route;
mod shell;
mod view;

pub use error::{LoadError, Result, ShellError};
pub use registry::{AppComponent, AppLoader, AppRegistry, AppRegistryBuilder};
pub use route::Route;
pub use shell::{GalleryShell, ShellStats};
pub use view::View;
