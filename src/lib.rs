//! Leveled, named, key-value logger facade.
//!
//! # Architecture Overview
//!
//! ```text
//!   application code
//!        │  info / error / v(level) / with_name / with_values
//!        ▼
//!   ┌──────────┐   v(level)   ┌──────────────┐
//!   │  Logger  │─────────────▶│ FilterPolicy │  verbosity threshold + allow-list
//!   │ (facade) │◀─────────────│  (ArcSwap)   │  hot-reloaded from config
//!   └────┬─────┘  on / off    └──────────────┘
//!        │ merge context + call-site fields, stamp with Clock
//!        ▼
//!   ┌──────────┐
//!   │  Record  │
//!   └────┬─────┘
//!        ▼
//!   Sink: TextSink (logfmt line) | TracingSink (tracing event) | DiscardSink
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use kvlogr::{kvs, FilterPolicy, Logger, TextSink};
//!
//! let policy = Arc::new(FilterPolicy::new());
//! let log = Logger::new("app", Arc::new(TextSink::stderr()), policy.clone());
//!
//! log.info("started", kvs!("port" => 8080));
//!
//! policy.set_verbosity(1);
//! log.with_name("db").v(1).info("connected", kvs!("pool" => 4));
//! ```

pub mod clock;
pub mod config;
pub mod fields;
pub mod format;
pub mod logger;
pub mod observability;
pub mod policy;
pub mod sink;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::LoggingConfig;
pub use fields::{Fields, Value};
pub use logger::{Level, Logger, Record};
pub use policy::{FilterPolicy, PolicySnapshot};
pub use sink::{DiscardSink, Sink, TextSink, TracingSink};
