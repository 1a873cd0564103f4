//! Logger facade.
//!
//! # Data Flow
//! ```text
//! Logger::new(name, sink, policy)          → enabled root
//!     .with_name("db") / .with_values(..)  → derived facades (shared sink)
//!     .v(level)                            → policy check → enabled or disabled
//!     .info(..) / .error(..)
//!         → merge context with call-site fields
//!         → stamp with clock
//!         → Record handed to Sink::emit
//! ```
//!
//! # Design Decisions
//! - One facade type with an enabled and a disabled state
//! - A disabled facade never reaches the sink, and everything derived from it is disabled
//! - Derived facades copy their context; parents are never mutated
//! - Base `info`/`error` calls are not gated by verbosity

pub mod facade;
pub mod record;

pub use facade::Logger;
pub use record::{Level, Record};
