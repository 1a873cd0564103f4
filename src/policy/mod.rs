//! Verbosity and name filtering.
//!
//! # Data Flow
//! ```text
//! set_verbosity / limit_to_loggers / config reload
//!     → writer lock (serialised updates)
//!     → new PolicySnapshot swapped in atomically
//!
//! Logger::v(level)
//!     → FilterPolicy::enabled(name, level)   (lock-free read)
//!     → enabled facade or disabled facade
//! ```
//!
//! # Design Decisions
//! - The policy is an explicit value shared by `Arc`, injected into every root logger
//! - Setting verbosity replaces the threshold; limiting loggers appends to the allow-list
//! - Name matching is exact; allowing `foo` does not allow `foo.bar`

pub mod filter;

pub use filter::{FilterPolicy, PolicySnapshot};
