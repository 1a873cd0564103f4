//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::loader::ConfigError;
use crate::policy::PolicySnapshot;
use crate::sink::{DiscardSink, Sink, TextSink, TracingSink};

/// Root logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Highest verbosity level emitted by `v()` loggers.
    pub verbosity: u32,

    /// Logger names allowed to emit verbose records. Empty means all.
    pub loggers: Vec<String>,

    /// Backend receiving records.
    pub sink: SinkKind,

    /// Stream used by the text sink.
    pub output: OutputTarget,

    /// Settings for the crate's own diagnostics and the tracing backend.
    pub observability: ObservabilityConfig,
}

impl LoggingConfig {
    /// The filter policy described by this config.
    pub fn policy_snapshot(&self) -> PolicySnapshot {
        PolicySnapshot {
            verbosity: self.verbosity,
            loggers: self.loggers.iter().cloned().collect(),
        }
    }

    /// Construct the configured sink.
    pub fn build_sink(&self) -> Result<Arc<dyn Sink>, ConfigError> {
        let sink: Arc<dyn Sink> = match self.sink {
            SinkKind::Discard => Arc::new(DiscardSink),
            SinkKind::Tracing => Arc::new(TracingSink::new()),
            SinkKind::Text => match &self.output {
                OutputTarget::Stdout => Arc::new(TextSink::stdout()),
                OutputTarget::Stderr => Arc::new(TextSink::stderr()),
                OutputTarget::File(path) => {
                    let sink = TextSink::file(path).map_err(|source| ConfigError::Output {
                        path: path.clone(),
                        source,
                    })?;
                    Arc::new(sink)
                }
            },
        };
        Ok(sink)
    }
}

/// Which backend records go to.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Deterministic logfmt lines.
    #[default]
    Text,
    /// Events on the `tracing` dispatcher.
    Tracing,
    /// Nothing is written.
    Discard,
}

/// Stream for the text sink.
///
/// In TOML: `output = "stdout"`, `output = "stderr"` or
/// `output = { file = "/var/log/app.log" }`.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    Stdout,
    #[default]
    Stderr,
    File(PathBuf),
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `tracing` filter directive (e.g. "info", "kvlogr::record=info").
    ///
    /// Records from `TracingSink` use the `kvlogr::record` target; the
    /// crate's own diagnostics use their module paths under `kvlogr`.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
