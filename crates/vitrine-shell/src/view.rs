//! What the shell is currently showing.

use crate::registry::AppComponent;
use std::fmt;
use std::sync::Arc;

/// Current content of the shell's mount point.
///
/// Cheap to clone; observers receive it through a watch channel and
/// render it however their surface requires.
#[derive(Clone)]
pub enum View {
    /// Link index of every registered app.
    Index { apps: Vec<String> },
    /// A recognized app whose loader has not resolved yet.
    Loading { app: String },
    /// The resolved component; it owns the mount point until the next
    /// view replaces it.
    Mounted {
        app: String,
        component: Arc<dyn AppComponent>,
    },
    /// The app's loader rejected. Scoped to this app; every other app
    /// and the index stay reachable.
    Failed { app: String, message: String },
}

impl View {
    /// Name of the app this view is about, if any.
    pub fn app(&self) -> Option<&str> {
        match self {
            View::Index { .. } => None,
            View::Loading { app } | View::Failed { app, .. } | View::Mounted { app, .. } => {
                Some(app)
            }
        }
    }

    /// Render the view to markup, the way the browser shell does.
    pub fn render(&self) -> String {
        match self {
            View::Index { apps } => {
                let mut html = String::from("<h1>Available Applications</h1>\n<ul>\n");
                for app in apps {
                    html.push_str(&format!("  <li><a href=\"#{app}\">{app}</a></li>\n"));
                }
                html.push_str("</ul>");
                html
            }
            View::Loading { .. } => "<div>Loading...</div>".to_string(),
            View::Mounted { component, .. } => component.render(),
            View::Failed { app, message } => {
                format!("<div>Failed to load {app}: {message}</div>")
            }
        }
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Index { apps } => f.debug_struct("Index").field("apps", apps).finish(),
            View::Loading { app } => f.debug_struct("Loading").field("app", app).finish(),
            View::Mounted { app, .. } => f.debug_struct("Mounted").field("app", app).finish(),
            View::Failed { app, message } => f
                .debug_struct("Failed")
                .field("app", app)
                .field("message", message)
                .finish(),
        }
    }
}
