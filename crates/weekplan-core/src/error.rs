//! Core error types for weekplan-core.
//!
//! The planning engine itself never fails. [`CoreError`] covers the
//! configuration layer; input validation reports [`ValidationError`] values
//! directly so every problem can be listed at once.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for weekplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// No usable configuration directory
    #[error("Cannot determine configuration directory")]
    NoConfigDir,
}

/// Validation errors for planner input records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range for '{name}': end ({end}) must be after start ({start})")]
    InvalidTimeRange {
        name: String,
        start: chrono::NaiveTime,
        end: chrono::NaiveTime,
    },

    /// Value outside the accepted range
    #[error("Value for '{field}' out of range: {message}")]
    OutOfRange { field: String, message: String },

    /// Date in the past
    #[error("Due date {due} for '{title}' is before {today}")]
    PastDueDate {
        title: String,
        due: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
