//! Record sinks.
//!
//! # Responsibilities
//! - Receive fully resolved records from enabled loggers
//! - Deliver them to a stream, to `tracing`, or nowhere
//!
//! # Design Decisions
//! - `emit` returns nothing; sinks absorb their own I/O failures
//! - Sinks are shared read-only by every logger derived from one root

pub mod discard;
pub mod structured;
pub mod text;

pub use discard::DiscardSink;
pub use structured::TracingSink;
pub use text::TextSink;

use crate::logger::Record;

/// Destination for resolved records.
pub trait Sink: Send + Sync {
    fn emit(&self, record: &Record<'_>);
}
