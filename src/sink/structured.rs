//! Sink that forwards records to the `tracing` ecosystem.
//!
//! Field names of a `tracing` event are fixed at compile time, so the
//! record's key-value pairs travel as one pre-built JSON object in the `kvs`
//! field. Subscriber setup belongs to the application.

use crate::format::error_chain;
use crate::logger::{Level, Record};
use crate::sink::Sink;

/// Target of every event emitted by [`TracingSink`].
///
/// Distinct from the module targets of the crate's own diagnostics, so a
/// filter such as `kvlogr::record=info` selects records only.
pub const TARGET: &str = "kvlogr::record";

/// Emits one `tracing` event per record.
///
/// Event fields: `logger` (the logger name), `kvs` (JSON object of the
/// merged fields) and, for errors, `error` (the rendered cause chain).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for TracingSink {
    fn emit(&self, record: &Record<'_>) {
        let kvs = serde_json::to_string(record.fields).unwrap_or_else(|_| "{}".to_string());
        match record.level {
            Level::Info => {
                tracing::info!(
                    target: TARGET,
                    logger = %record.name,
                    kvs = %kvs,
                    "{}",
                    record.message
                );
            }
            Level::Error => {
                let error = record.error.map(error_chain).unwrap_or_default();
                tracing::error!(
                    target: TARGET,
                    logger = %record.name,
                    kvs = %kvs,
                    error = %error,
                    "{}",
                    record.message
                );
            }
        }
    }
}
