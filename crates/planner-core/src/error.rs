//! Core error types for planner-core.
//!
//! The persisted store never surfaces these to its callers; they are returned
//! by the fallible edges only: storage backends, configuration loading and
//! date-key parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for planner-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage medium errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a [`StorageBackend`](crate::storage::StorageBackend).
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading, writing or removing the entry failed
    #[error("I/O failure for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The value could not be turned into JSON
    #[error("Failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Key contains characters the medium cannot address
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    /// The medium refused the operation (quota, read-only, etc.)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// No home or data directory could be resolved
    #[error("Could not determine data directory")]
    NoDataDir,
}

/// Validation errors.
///
/// Returned directly by [`DateKey::parse`](crate::model::DateKey::parse).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Not a `YYYY-MM-DD` calendar date
    #[error("Invalid date key '{0}'. Expected YYYY-MM-DD")]
    InvalidDateKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
