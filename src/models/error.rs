//! Error types for irisgen.
//!
//! The only runtime failure class is I/O: directory creation or the file
//! append fails. Nothing is retried in-process; errors propagate to the
//! external scheduler, which owns the retry policy.

use thiserror::Error;

/// Top-level error type for irisgen.
#[derive(Debug, Error)]
pub enum IrisgenError {
    #[error("Configuration error: {0}")]
    Config(#[from] super::ConfigError),

    #[error("Invalid logical timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl IrisgenError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias for irisgen.
pub type Result<T> = std::result::Result<T, IrisgenError>;
