//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Default confidence weight must be within 0.0 and 1.0, got {0}")]
    InvalidConfidenceWeight(f64),

    #[error("Minimum segment length must be at least 1")]
    InvalidSegmentLength,

    #[error("Log filter directive cannot be empty")]
    EmptyLogLevel,
}
