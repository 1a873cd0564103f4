//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use kvlogr::{Clock, Fields, FilterPolicy, FixedClock, Level, Logger, Record, Sink, TextSink};

/// In-memory writer whose contents can be inspected after logging.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A captured record, owned.
#[derive(Debug, Clone)]
pub struct Captured {
    pub level: Level,
    pub name: String,
    pub message: String,
    pub fields: Fields,
    pub error: Option<String>,
}

/// Sink that keeps every record it receives.
#[derive(Default)]
pub struct CaptureSink {
    records: Mutex<Vec<Captured>>,
}

impl CaptureSink {
    pub fn records(&self) -> Vec<Captured> {
        self.records.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

impl Sink for CaptureSink {
    fn emit(&self, record: &Record<'_>) {
        self.records.lock().unwrap().push(Captured {
            level: record.level,
            name: record.name.to_string(),
            message: record.message.to_string(),
            fields: record.fields.clone(),
            error: record.error.map(|e| e.to_string()),
        });
    }
}

/// 2015-12-15 00:00:00 UTC.
pub fn mock_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::from_ymd(2015, 12, 15).unwrap())
}

/// A text logger writing into a buffer, with its own policy and a fixed clock.
pub fn text_logger(name: &str) -> (Logger, SharedBuffer, Arc<FilterPolicy>) {
    let buffer = SharedBuffer::default();
    let policy = Arc::new(FilterPolicy::new());
    let logger = Logger::new(name, Arc::new(TextSink::new(buffer.clone())), policy.clone())
        .with_clock(mock_clock());
    (logger, buffer, policy)
}

/// A logger feeding a capture sink.
pub fn capture_logger(name: &str) -> (Logger, Arc<CaptureSink>, Arc<FilterPolicy>) {
    let sink = Arc::new(CaptureSink::default());
    let policy = Arc::new(FilterPolicy::new());
    let logger = Logger::new(name, sink.clone(), policy.clone());
    (logger, sink, policy)
}
