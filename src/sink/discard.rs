//! Sink that drops every record.

use crate::logger::Record;
use crate::sink::Sink;

/// Accepts and discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl Sink for DiscardSink {
    #[inline]
    fn emit(&self, _record: &Record<'_>) {}
}
