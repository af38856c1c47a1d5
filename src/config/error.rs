//! Configuration error types

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ConfigValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Invalid default business parameter: {0}")]
    InvalidDefaults(#[from] ValidationError),

    #[error("Log filter must not be empty")]
    EmptyLogFilter,

    #[error("Invalid log filter '{0}'")]
    InvalidLogFilter(String),
}
