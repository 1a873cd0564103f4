//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoggingConfig (validated, immutable)
//!     → policy snapshot + sink for root loggers
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → FilterPolicy::replace (atomic swap)
//!     → every logger sharing the policy observes it on its next v() call
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - A reload replaces the whole policy, including the allow-list
//! - Sink and output changes need a restart; only the policy is hot-reloaded

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LoggingConfig, ObservabilityConfig, OutputTarget, SinkKind};
pub use validation::{validate_config, ValidationError};
pub use watcher::{spawn_policy_reloader, ConfigWatcher};
