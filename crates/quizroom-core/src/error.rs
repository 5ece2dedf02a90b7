//! Core error types for quizroom-core.
//!
//! Invalid quiz transitions are not errors (they are ignored by the state
//! machine). The types here cover malformed question data and the
//! configuration file.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for quizroom-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Question bank errors
    #[error("Question bank error: {0}")]
    Bank(#[from] BankError),

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

/// Question bank errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    /// Lookup outside `[0, len)`.
    #[error("Question index {index} out of range (length: {len})")]
    OutOfRange { index: usize, len: usize },

    /// A bank must hold at least one question.
    #[error("Question bank is empty")]
    Empty,

    /// A question must offer at least two options.
    #[error("Question '{prompt}' has {count} option(s), at least 2 required")]
    TooFewOptions { prompt: String, count: usize },

    /// The correct index must point into the options.
    #[error("Question '{prompt}' has correct index {index} but only {count} options")]
    InvalidCorrectIndex {
        prompt: String,
        index: usize,
        count: usize,
    },
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

    /// Unknown dot-separated key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Home/config directory could not be prepared
    #[error("Configuration directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
