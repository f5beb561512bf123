//! Error types and error handling for worddist.
//!
//! This module defines the error types used throughout the
//! application. Query failures (`InvalidArgument`, `NotFound`) are
//! expected conditions, not defects: callers render them as a
//! one-line message.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for worddist operations
pub type Result<T> = std::result::Result<T, WordDistError>;

/// Main error type for worddist
#[derive(Error, Debug)]
pub enum WordDistError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Word '{0}' is not in the index")]
    NotFound(String),

    #[error("{}: {source}", path.display())]
    Acquisition {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl WordDistError {
    /// Wrap an I/O failure raised while acquiring `path`
    pub fn acquisition(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WordDistError::Acquisition {
            path: path.into(),
            source,
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, WordDistError::NotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, WordDistError::InvalidArgument(_))
    }

    /// Check if the source document could not be opened or read
    pub fn is_acquisition(&self) -> bool {
        matches!(
            self,
            WordDistError::Acquisition { .. } | WordDistError::IoError(_)
        )
    }
}
