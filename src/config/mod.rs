//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional
//! file and environment variables using the `config` and `dotenvy` crates.
//! Environment variables use the `FABRIC_FIT` prefix and nested values are
//! separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use fabric_fit::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.telemetry);
//! ```

mod defaults;
mod error;
mod telemetry;

pub use defaults::DefaultsConfig;
pub use error::{ConfigError, ConfigValidationError};
pub use telemetry::{init_tracing, TelemetryConfig, DEFAULT_LOG_LEVEL};

use std::path::Path;

use serde::Deserialize;

const ENV_PREFIX: &str = "FABRIC_FIT";

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads successfully.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Business parameter and comparison defaults
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Log filter and format
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FABRIC_FIT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `FABRIC_FIT__DEFAULTS__ORGANIZATION_SIZE=1200` -> `defaults.organization_size = 1200`
    /// - `FABRIC_FIT__TELEMETRY__JSON_LOGS=true` -> `telemetry.json_logs = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(None)
    }

    /// Load configuration from a file, with environment variables on top
    ///
    /// The format follows the file extension (`.toml`, `.json`, `.yaml`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(Some(path))
    }

    fn build(file: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path));
        }

        let config = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` for non-positive default parameters
    /// or an unusable log filter.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.defaults.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}
