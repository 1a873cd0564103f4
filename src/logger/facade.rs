//! The caller-visible logger handle.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::fields::{Fields, Value};
use crate::logger::record::{Level, Record};
use crate::policy::FilterPolicy;
use crate::sink::Sink;

/// Name used when a root logger is created with an empty name.
pub const DEFAULT_NAME: &str = "root";

/// Context key carrying the verbosity level of a `v()` logger.
pub const VERBOSITY_KEY: &str = "v";

/// Immutable, chainable logger.
///
/// Every derived logger (`v`, `with_values`, `with_name`) is a new value
/// sharing the sink, policy and clock of its parent.
#[derive(Clone)]
pub struct Logger {
    state: State,
}

#[derive(Clone)]
enum State {
    Enabled(Active),
    Disabled,
}

#[derive(Clone)]
struct Active {
    name: String,
    context: Fields,
    sink: Arc<dyn Sink>,
    policy: Arc<FilterPolicy>,
    clock: Arc<dyn Clock>,
}

impl Logger {
    /// Create an enabled root logger.
    pub fn new(name: impl Into<String>, sink: Arc<dyn Sink>, policy: Arc<FilterPolicy>) -> Self {
        let mut name = name.into();
        if name.is_empty() {
            name = DEFAULT_NAME.to_string();
        }
        Self {
            state: State::Enabled(Active {
                name,
                context: Fields::new(),
                sink,
                policy,
                clock: Arc::new(SystemClock),
            }),
        }
    }

    /// A logger that discards everything.
    pub fn discard() -> Self {
        Self {
            state: State::Disabled,
        }
    }

    /// Replace the time source used to stamp records.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        if let State::Enabled(active) = &mut self.state {
            active.clock = clock;
        }
        self
    }

    pub fn enabled(&self) -> bool {
        matches!(self.state, State::Enabled(_))
    }

    /// Dot-joined hierarchical name. `None` when disabled.
    pub fn name(&self) -> Option<&str> {
        match &self.state {
            State::Enabled(active) => Some(&active.name),
            State::Disabled => None,
        }
    }

    /// Accumulated context. `None` when disabled.
    pub fn context(&self) -> Option<&Fields> {
        match &self.state {
            State::Enabled(active) => Some(&active.context),
            State::Disabled => None,
        }
    }

    pub fn info(&self, msg: &str, kvs: impl Into<Fields>) {
        if let State::Enabled(active) = &self.state {
            active.emit(Level::Info, msg, kvs.into(), None);
        }
    }

    pub fn error(&self, err: &(dyn Error + 'static), msg: &str, kvs: impl Into<Fields>) {
        if let State::Enabled(active) = &self.state {
            active.emit(Level::Error, msg, kvs.into(), Some(err));
        }
    }

    /// A logger for records at verbosity `level`.
    ///
    /// Enabled only if the policy admits this logger's name at `level`; the
    /// result then carries `v=<level>` in its context.
    pub fn v(&self, level: u32) -> Logger {
        match &self.state {
            State::Enabled(active) if active.policy.enabled(&active.name, level) => {
                let mut next = active.clone();
                next.context.insert(VERBOSITY_KEY, Value::U64(u64::from(level)));
                Logger {
                    state: State::Enabled(next),
                }
            }
            _ => Logger::discard(),
        }
    }

    pub fn with_values(&self, kvs: impl Into<Fields>) -> Logger {
        match &self.state {
            State::Enabled(active) => {
                let mut next = active.clone();
                next.context.merge(kvs.into());
                Logger {
                    state: State::Enabled(next),
                }
            }
            State::Disabled => Logger::discard(),
        }
    }

    /// Append `segment` to the name. An empty segment leaves the name as is.
    pub fn with_name(&self, segment: &str) -> Logger {
        match &self.state {
            State::Enabled(active) => {
                let mut next = active.clone();
                if !segment.is_empty() {
                    next.name = format!("{}.{}", active.name, segment);
                }
                Logger {
                    state: State::Enabled(next),
                }
            }
            State::Disabled => Logger::discard(),
        }
    }
}

impl Active {
    fn emit(&self, level: Level, message: &str, kvs: Fields, error: Option<&(dyn Error + 'static)>) {
        let fields = if kvs.is_empty() {
            self.context.clone()
        } else {
            self.context.merged(kvs)
        };
        let record = Record {
            timestamp: self.clock.now(),
            level,
            name: &self.name,
            message,
            fields: &fields,
            error,
        };
        self.sink.emit(&record);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Enabled(active) => f
                .debug_struct("Logger")
                .field("name", &active.name)
                .field("context", &active.context)
                .finish_non_exhaustive(),
            State::Disabled => f.write_str("Logger(disabled)"),
        }
    }
}
