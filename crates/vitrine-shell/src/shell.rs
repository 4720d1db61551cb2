//! The gallery shell state machine.

use crate::registry::AppRegistry;
use crate::route::Route;
use crate::view::View;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, trace};

/// Counters describing shell activity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShellStats {
    /// Navigation events handled.
    pub navigations: u64,
    /// Loads whose component reached the screen.
    pub loads_committed: u64,
    /// Loads that resolved after a later navigation and were dropped.
    pub loads_discarded: u64,
    /// Loads that rejected and were reported in their render slot.
    pub load_failures: u64,
}

/// Hosts the registered apps: lazily loads whichever one navigation
/// selects and renders the index otherwise.
///
/// Navigation is the single writer of route state. A pending load is
/// never cancelled; instead every load is stamped with the navigation
/// sequence current at dispatch, and its result is committed only if
/// no later navigation has bumped the sequence. Of any navigations
/// fired while a load is in flight, only the most recent one can put
/// a component on screen.
#[derive(Clone)]
pub struct GalleryShell {
    inner: Arc<Inner>,
}

struct Inner {
    registry: AppRegistry,
    /// Bumped by every navigation; pending loads capture the value
    /// current at their dispatch.
    nav_seq: AtomicU64,
    view_tx: watch::Sender<View>,
    stats: RwLock<ShellStats>,
}

impl GalleryShell {
    /// Create a shell showing the index, plus the receiver observers
    /// use to watch the rendered view.
    pub fn new(registry: AppRegistry) -> (Self, watch::Receiver<View>) {
        let (view_tx, view_rx) = watch::channel(View::Index {
            apps: registry.names(),
        });
        let shell = Self {
            inner: Arc::new(Inner {
                registry,
                nav_seq: AtomicU64::new(0),
                view_tx,
                stats: RwLock::new(ShellStats::default()),
            }),
        };
        (shell, view_rx)
    }

    /// Handle one navigation (hash-change) event.
    ///
    /// A recognized name shows the loading placeholder and starts the
    /// app's deferred loader; anything else shows the index. Returns
    /// once the view reflects the navigation, not once the load
    /// completes; the load commits (or is discarded) asynchronously.
    pub fn navigate(&self, hash: &str) {
        let inner = &self.inner;
        let seq = inner.nav_seq.fetch_add(1, Ordering::SeqCst) + 1;
        inner.stats.write().navigations += 1;

        let name = match Route::from_hash(hash, &inner.registry) {
            Route::App(name) => name,
            Route::Index => {
                debug!(hash, seq, "Navigated to index");
                inner.view_tx.send_replace(View::Index {
                    apps: inner.registry.names(),
                });
                return;
            }
        };

        let Some(loader) = inner.registry.loader(&name) else {
            // Route resolution and the registry use the same names,
            // but fall back to the index rather than panic.
            inner.view_tx.send_replace(View::Index {
                apps: inner.registry.names(),
            });
            return;
        };

        debug!(app = %name, seq, "Navigated to app");
        inner.view_tx.send_replace(View::Loading { app: name.clone() });

        let inner = Arc::clone(inner);
        tokio::spawn(async move {
            let result = loader().await;
            inner.commit(seq, name, result);
        });
    }

    /// Drive the shell from a stream of navigation events.
    ///
    /// Reads the hash once on mount, then applies every hash-change
    /// event until the sender side closes.
    pub async fn run(self, initial_hash: &str, mut hashes: mpsc::UnboundedReceiver<String>) {
        self.navigate(initial_hash);
        while let Some(hash) = hashes.recv().await {
            self.navigate(&hash);
        }
    }

    /// Current view.
    pub fn view(&self) -> View {
        self.inner.view_tx.borrow().clone()
    }

    /// Activity counters.
    pub fn stats(&self) -> ShellStats {
        *self.inner.stats.read()
    }
}

impl Inner {
    /// Commit a resolved load, unless a later navigation superseded
    /// it, in which case the result is dropped without touching the
    /// view.
    fn commit(
        &self,
        seq: u64,
        app: String,
        result: Result<Arc<dyn crate::registry::AppComponent>, crate::error::LoadError>,
    ) {
        if self.nav_seq.load(Ordering::SeqCst) != seq {
            trace!(app = %app, seq, "Discarding superseded load");
            self.stats.write().loads_discarded += 1;
            return;
        }

        match result {
            Ok(component) => {
                debug!(app = %app, seq, "Mounting app");
                self.stats.write().loads_committed += 1;
                self.view_tx.send_replace(View::Mounted { app, component });
            }
            Err(err) => {
                debug!(app = %app, seq, error = %err, "App failed to load");
                self.stats.write().load_failures += 1;
                self.view_tx.send_replace(View::Failed {
                    app,
                    message: err.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::registry::AppComponent;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    struct Placeholder(&'static str);

    impl AppComponent for Placeholder {
        fn render(&self) -> String {
            format!("<main>{}</main>", self.0)
        }
    }

    fn component(label: &'static str) -> Arc<dyn AppComponent> {
        Arc::new(Placeholder(label))
    }

    /// A loader that blocks until its gate fires. The gate is consumed
    /// by the first invocation; later invocations resolve immediately.
    fn gated_loader(
        label: &'static str,
    ) -> (
        impl Fn() -> futures::future::BoxFuture<
                'static,
                Result<Arc<dyn AppComponent>, LoadError>,
            > + Send
            + Sync
            + 'static,
        oneshot::Sender<()>,
    ) {
        let (gate_tx, gate_rx) = oneshot::channel::<()>();
        let gate = Arc::new(Mutex::new(Some(gate_rx)));
        let loader = move || {
            let gate = Arc::clone(&gate);
            let fut: futures::future::BoxFuture<'static, _> = Box::pin(async move {
                let pending = gate.lock().unwrap().take();
                if let Some(rx) = pending {
                    let _ = rx.await;
                }
                Ok(component(label))
            });
            fut
        };
        (loader, gate_tx)
    }

    async fn wait_for(
        views: &mut watch::Receiver<View>,
        pred: impl Fn(&View) -> bool,
    ) -> View {
        loop {
            {
                let view = views.borrow_and_update();
                if pred(&view) {
                    return view.clone();
                }
            }
            views.changed().await.unwrap();
        }
    }

    fn is_mounted(view: &View, app: &str) -> bool {
        matches!(view, View::Mounted { app: a, .. } if a == app)
    }

    #[tokio::test]
    async fn test_initial_view_is_the_index() {
        let registry = AppRegistry::builder()
            .register("BQ", || async { Ok::<_, LoadError>(component("bq")) })
            .unwrap()
            .build();
        let (shell, _views) = GalleryShell::new(registry);

        match shell.view() {
            View::Index { apps } => assert_eq!(apps, ["BQ"]),
            other => panic!("expected index, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_navigation_mounts_the_selected_app() {
        let registry = AppRegistry::builder()
            .register("BQ", || async { Ok::<_, LoadError>(component("bq")) })
            .unwrap()
            .build();
        let (shell, mut views) = GalleryShell::new(registry);

        shell.navigate("#BQ");
        let view = wait_for(&mut views, |v| is_mounted(v, "BQ")).await;
        assert_eq!(view.render(), "<main>bq</main>");
        assert_eq!(shell.stats().loads_committed, 1);
    }

    #[tokio::test]
    async fn test_last_navigation_wins_when_the_first_load_is_slow() {
        let (bq_loader, bq_gate) = gated_loader("bq");
        let registry = AppRegistry::builder()
            .register("BQ", bq_loader)
            .unwrap()
            .register("GQ", || async { Ok::<_, LoadError>(component("gq")) })
            .unwrap()
            .build();
        let (shell, mut views) = GalleryShell::new(registry);

        // BQ starts loading but its loader is held open.
        shell.navigate("#BQ");
        wait_for(&mut views, |v| matches!(v, View::Loading { app } if app == "BQ")).await;

        // Navigating again supersedes the pending BQ load.
        shell.navigate("#GQ");
        wait_for(&mut views, |v| is_mounted(v, "GQ")).await;

        // BQ's loader now resolves, late. Its result must be dropped.
        bq_gate.send(()).unwrap();
        while shell.stats().loads_discarded == 0 {
            tokio::task::yield_now().await;
        }

        assert!(is_mounted(&shell.view(), "GQ"));
        assert!(!views.has_changed().unwrap());
        assert_eq!(shell.stats().loads_committed, 1);
        assert_eq!(shell.stats().loads_discarded, 1);
    }

    #[tokio::test]
    async fn test_navigating_to_index_supersedes_a_pending_load() {
        let (bq_loader, bq_gate) = gated_loader("bq");
        let registry = AppRegistry::builder()
            .register("BQ", bq_loader)
            .unwrap()
            .build();
        let (shell, mut views) = GalleryShell::new(registry);

        shell.navigate("#BQ");
        wait_for(&mut views, |v| matches!(v, View::Loading { .. })).await;

        // The loop stays responsive while the load is pending.
        shell.navigate("");
        wait_for(&mut views, |v| matches!(v, View::Index { .. })).await;

        bq_gate.send(()).unwrap();
        while shell.stats().loads_discarded == 0 {
            tokio::task::yield_now().await;
        }
        assert!(matches!(shell.view(), View::Index { .. }));
    }

    #[tokio::test]
    async fn test_unknown_hash_renders_the_index() {
        let registry = AppRegistry::builder()
            .register("BQ", || async { Ok::<_, LoadError>(component("bq")) })
            .unwrap()
            .register("GQ", || async { Ok::<_, LoadError>(component("gq")) })
            .unwrap()
            .build();
        let (shell, _views) = GalleryShell::new(registry);

        shell.navigate("#doesnotexist");
        match shell.view() {
            View::Index { apps } => assert_eq!(apps, ["BQ", "GQ"]),
            other => panic!("expected index, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_registry_renders_an_empty_index() {
        let (shell, _views) = GalleryShell::new(AppRegistry::builder().build());

        shell.navigate("#anything");
        match shell.view() {
            View::Index { apps } => assert!(apps.is_empty()),
            other => panic!("expected index, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_failure_is_scoped_to_the_failing_app() {
        let registry = AppRegistry::builder()
            .register("BQ", || async {
                Err::<Arc<dyn AppComponent>, _>(LoadError::new("fixture server down"))
            })
            .unwrap()
            .register("GQ", || async { Ok::<_, LoadError>(component("gq")) })
            .unwrap()
            .build();
        let (shell, mut views) = GalleryShell::new(registry);

        shell.navigate("#BQ");
        let view = wait_for(&mut views, |v| matches!(v, View::Failed { .. })).await;
        assert!(view.render().contains("fixture server down"));
        assert_eq!(shell.stats().load_failures, 1);

        // The failure did not take the rest of the gallery down.
        shell.navigate("#GQ");
        wait_for(&mut views, |v| is_mounted(v, "GQ")).await;
    }

    #[tokio::test]
    async fn test_run_applies_initial_hash_then_events() {
        let registry = AppRegistry::builder()
            .register("BQ", || async { Ok::<_, LoadError>(component("bq")) })
            .unwrap()
            .register("GQ", || async { Ok::<_, LoadError>(component("gq")) })
            .unwrap()
            .build();
        let (shell, mut views) = GalleryShell::new(registry);

        let (hash_tx, hash_rx) = mpsc::unbounded_channel();
        let driver = tokio::spawn(shell.clone().run("#BQ", hash_rx));

        wait_for(&mut views, |v| is_mounted(v, "BQ")).await;

        hash_tx.send("#GQ".to_string()).unwrap();
        wait_for(&mut views, |v| is_mounted(v, "GQ")).await;

        drop(hash_tx);
        driver.await.unwrap();
    }
}
