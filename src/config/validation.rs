//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject empty or duplicate logger names in the allow-list
//! - Check the output path and the tracing filter directive
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggingConfig → Result<(), Vec<ValidationError>>

use std::collections::HashSet;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::{LoggingConfig, OutputTarget};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("loggers[{0}] is empty")]
    EmptyLoggerName(usize),

    #[error("logger {0:?} listed more than once")]
    DuplicateLoggerName(String),

    #[error("output file path is empty")]
    EmptyOutputPath,

    #[error("invalid log_level {directive:?}: {reason}")]
    InvalidLogLevel { directive: String, reason: String },
}

pub fn validate_config(config: &LoggingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for (index, name) in config.loggers.iter().enumerate() {
        if name.is_empty() {
            errors.push(ValidationError::EmptyLoggerName(index));
        } else if !seen.insert(name.as_str()) {
            errors.push(ValidationError::DuplicateLoggerName(name.clone()));
        }
    }

    if let OutputTarget::File(path) = &config.output {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyOutputPath);
        }
    }

    if let Err(e) = EnvFilter::try_new(&config.observability.log_level) {
        errors.push(ValidationError::InvalidLogLevel {
            directive: config.observability.log_level.clone(),
            reason: e.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
