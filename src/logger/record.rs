//! Resolved log record passed to sinks.

use std::error::Error;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::fields::Fields;

/// Severity of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One log call, fully resolved. Lives only for the duration of the call.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub name: &'a str,
    pub message: &'a str,
    /// Logger context merged with call-site fields.
    pub fields: &'a Fields,
    /// Present only for `Level::Error`.
    pub error: Option<&'a (dyn Error + 'static)>,
}
