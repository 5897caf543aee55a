//! Error types for brainy.
//!
//! The responder and the filter engine are total and never produce these.
//! Errors only arise at the edges: reading row files, loading config,
//! parsing filter labels and validating drafts.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, BrainyError>;

#[derive(Error, Debug)]
pub enum BrainyError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row file could not be decoded.
    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// Configuration could not be loaded or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// User-supplied data was rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A filter label that does not name any option.
    #[error("Unknown {kind} filter: {value:?}")]
    InvalidCriterion { kind: &'static str, value: String },
}

impl BrainyError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_criterion(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidCriterion {
            kind,
            value: value.into(),
        }
    }
}
