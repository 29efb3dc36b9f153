//! Core error types for bedrest-core.
//!
//! Structured errors via thiserror. Everything that can go wrong inside
//! the library is one of these; the estimation boundary collapses them
//! into [`EstimationError`] with a fixed user-facing message.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bedrest-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Model-related errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Model artifact and inference errors.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Artifact file could not be read
    #[error("Failed to read model artifact at {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file is not a valid model description
    #[error("Failed to parse model artifact at {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// Artifact parsed but contains unusable values
    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),

    /// The model produced an unusable prediction
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
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
}

/// Validation errors for form inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Value outside its declared domain
    #[error("Invalid value for '{field}': {message}")]
    OutOfRange { field: String, message: String },

    /// Value inside the domain but not on the input control's step grid
    #[error("Invalid value for '{field}': {value} is not a multiple of {step}")]
    OffStep {
        field: String,
        value: f64,
        step: f64,
    },

    /// Unparseable time-of-day text
    #[error("Invalid time of day '{0}': expected HH:MM")]
    InvalidTimeOfDay(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
