//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! TracingSink events and the crate's own diagnostics
//!     → tracing dispatcher
//!     → subscriber installed by logging.rs (or by the application)
//!     → stdout / aggregation
//! ```

pub mod logging;

pub use logging::init_tracing;
