//! Default scoring inputs applied when a command leaves them out

use serde::Deserialize;

use super::error::ConfigValidationError;
use crate::domain::scoring::{Alternative, BusinessParameters};

/// Defaults for the value calculation and the competitor comparison
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    /// Employees in the organization
    #[serde(default = "default_organization_size")]
    pub organization_size: u32,

    /// Current yearly data platform spend
    #[serde(default = "default_current_annual_costs")]
    pub current_annual_costs: f64,

    /// Loaded hourly rate of a data worker
    #[serde(default = "default_average_hourly_rate")]
    pub average_hourly_rate: f64,

    /// Platform compared against when none is chosen
    #[serde(default)]
    pub alternative: Alternative,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            organization_size: default_organization_size(),
            current_annual_costs: default_current_annual_costs(),
            average_hourly_rate: default_average_hourly_rate(),
            alternative: Alternative::default(),
        }
    }
}

impl DefaultsConfig {
    pub fn business_parameters(&self) -> BusinessParameters {
        BusinessParameters {
            organization_size: self.organization_size,
            current_annual_costs: self.current_annual_costs,
            average_hourly_rate: self.average_hourly_rate,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.business_parameters().validate()?;
        Ok(())
    }
}

fn default_organization_size() -> u32 {
    BusinessParameters::default().organization_size
}

fn default_current_annual_costs() -> f64 {
    BusinessParameters::default().current_annual_costs
}

fn default_average_hourly_rate() -> f64 {
    BusinessParameters::default().average_hourly_rate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_questionnaire() {
        let defaults = DefaultsConfig::default();
        assert_eq!(defaults.organization_size, 500);
        assert_eq!(defaults.current_annual_costs, 500_000.0);
        assert_eq!(defaults.average_hourly_rate, 75.0);
        assert_eq!(defaults.alternative, Alternative::Aws);
        assert!(defaults.validate().is_ok());
    }

    #[test]
    fn test_defaults_deserialization() {
        let json = r#"{
            "organization_size": 1200,
            "average_hourly_rate": 90.5,
            "alternative": "Snowflake"
        }"#;

        let defaults: DefaultsConfig = serde_json::from_str(json).unwrap();
        assert_eq!(defaults.organization_size, 1200);
        assert_eq!(defaults.current_annual_costs, 500_000.0);
        assert_eq!(defaults.average_hourly_rate, 90.5);
        assert_eq!(defaults.alternative, Alternative::Snowflake);
    }

    #[test]
    fn test_zero_organization_size_rejected() {
        let defaults = DefaultsConfig {
            organization_size: 0,
            ..DefaultsConfig::default()
        };
        assert!(matches!(
            defaults.validate(),
            Err(ConfigValidationError::InvalidDefaults(_))
        ));
    }

    #[test]
    fn test_negative_hourly_rate_rejected() {
        let defaults = DefaultsConfig {
            average_hourly_rate: -10.0,
            ..DefaultsConfig::default()
        };
        assert!(defaults.validate().is_err());
    }
}
