//! Stream sink writing deterministic logfmt lines.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::format;
use crate::logger::Record;
use crate::sink::Sink;

/// Writes each record as one logfmt line.
///
/// A line is handed to the writer with a single `write_all` while holding
/// the sink's lock, then flushed. Threads sharing one `TextSink` therefore
/// never interleave partial lines; separate sinks over the same file
/// descriptor may.
pub struct TextSink {
    writer: Mutex<Box<dyn Write + Send>>,
    failed: AtomicBool,
}

impl TextSink {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            failed: AtomicBool::new(false),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Append to the file at `path`, creating it if needed.
    pub fn file(path: &Path) -> io::Result<Self> {
        let file: File = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        writer.write_all(line.as_bytes())?;
        writer.flush()
    }
}

impl Sink for TextSink {
    fn emit(&self, record: &Record<'_>) {
        let line = format::render(record);
        if let Err(e) = self.write_line(&line) {
            // Reported once per sink.
            if !self.failed.swap(true, Ordering::Relaxed) {
                tracing::warn!(error = %e, logger = record.name, "Failed to write log line");
            }
        }
    }
}

impl fmt::Debug for TextSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextSink")
            .field("failed", &self.failed.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
