//! Configuration file watcher for hot reload of the filter policy.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::loader::load_config;
use crate::config::schema::LoggingConfig;
use crate::policy::FilterPolicy;

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<LoggingConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<LoggingConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file.
    ///
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let Self { path, update_tx } = self;
        let watched = path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                on_event(&watched, res, &update_tx);
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;
        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?path, "Logging config watcher started");
        Ok(watcher)
    }
}

/// Reload `path` after a write or create event and forward the result.
///
/// Returns whether a new config was sent. Invalid files leave the current
/// policy in place.
fn on_event(
    path: &Path,
    res: notify::Result<Event>,
    updates: &mpsc::UnboundedSender<LoggingConfig>,
) -> bool {
    let event = match res {
        Ok(event) => event,
        Err(e) => {
            tracing::error!(error = %e, "Logging config watch failed");
            return false;
        }
    };
    if !(event.kind.is_modify() || event.kind.is_create()) {
        return false;
    }

    match load_config(path) {
        Ok(config) => updates.send(config).is_ok(),
        Err(e) => {
            tracing::error!(
                path = ?path,
                error = %e,
                "Rejected logging config reload, keeping current policy"
            );
            false
        }
    }
}

/// Apply every received config to `policy` until the sender side closes.
pub fn spawn_policy_reloader(
    mut updates: mpsc::UnboundedReceiver<LoggingConfig>,
    policy: Arc<FilterPolicy>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(config) = updates.recv().await {
            let snapshot = config.policy_snapshot();
            tracing::info!(
                verbosity = snapshot.verbosity,
                loggers = ?snapshot.loggers,
                "Filter policy reloaded"
            );
            policy.replace(snapshot);
        }
    })
}
