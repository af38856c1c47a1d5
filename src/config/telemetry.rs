//! Logging configuration and subscriber setup

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ConfigValidationError;

pub const DEFAULT_LOG_LEVEL: &str = "info,fabric_fit=debug";

/// Log filter and output format
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive, e.g. `info,fabric_fit=debug`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigValidationError::EmptyLogFilter);
        }
        EnvFilter::try_new(&self.log_level)
            .map_err(|_| ConfigValidationError::InvalidLogFilter(self.log_level.clone()))?;
        Ok(())
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Installs the global fmt subscriber.
///
/// Returns `false` when a global subscriber is already set; the existing
/// one stays in place. An unparsable filter falls back to the default.
pub fn init_tracing(config: &TelemetryConfig) -> bool {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.is_ok()
}
