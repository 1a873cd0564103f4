//! Shared filter policy state and the per-call decision.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, OnceLock};

use arc_swap::ArcSwap;

/// Immutable view of the policy at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicySnapshot {
    /// Highest verbosity level that is emitted.
    pub verbosity: u32,
    /// Logger names allowed to emit verbose records. Empty means all.
    pub loggers: BTreeSet<String>,
}

impl PolicySnapshot {
    /// Whether a verbose record at `level` from logger `name` is emitted.
    pub fn enabled(&self, name: &str, level: u32) -> bool {
        if level > self.verbosity {
            return false;
        }
        self.loggers.is_empty() || self.loggers.contains(name)
    }
}

/// Runtime-tunable verbosity threshold and logger allow-list.
///
/// Reads never block. Updates are serialised through a writer lock and
/// published as a whole new snapshot.
#[derive(Debug, Default)]
pub struct FilterPolicy {
    current: ArcSwap<PolicySnapshot>,
    writer: Mutex<()>,
}

impl FilterPolicy {
    /// Threshold 0, no allow-list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: PolicySnapshot) -> Self {
        Self {
            current: ArcSwap::from_pointee(snapshot),
            writer: Mutex::new(()),
        }
    }

    /// Process-wide instance for applications that want a single shared policy.
    pub fn global() -> Arc<FilterPolicy> {
        static GLOBAL: OnceLock<Arc<FilterPolicy>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(FilterPolicy::new())).clone()
    }

    /// Replace the verbosity threshold.
    pub fn set_verbosity(&self, verbosity: u32) {
        self.update(|snapshot| snapshot.verbosity = verbosity);
    }

    /// Append names to the allow-list. Repeated calls accumulate.
    pub fn limit_to_loggers<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        self.update(|snapshot| snapshot.loggers.extend(names));
    }

    /// Replace the whole policy.
    pub fn replace(&self, snapshot: PolicySnapshot) {
        let _guard = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        self.current.store(Arc::new(snapshot));
    }

    pub fn snapshot(&self) -> Arc<PolicySnapshot> {
        self.current.load_full()
    }

    pub fn verbosity(&self) -> u32 {
        self.current.load().verbosity
    }

    /// Whether a verbose record at `level` from logger `name` is emitted.
    pub fn enabled(&self, name: &str, level: u32) -> bool {
        self.current.load().enabled(name, level)
    }

    fn update(&self, apply: impl FnOnce(&mut PolicySnapshot)) {
        let _guard = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        let mut next = PolicySnapshot::clone(&self.current.load());
        apply(&mut next);
        tracing::debug!(
            verbosity = next.verbosity,
            loggers = ?next.loggers,
            "Filter policy updated"
        );
        self.current.store(Arc::new(next));
    }
}
