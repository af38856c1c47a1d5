//! Scale value object for questionnaire sliders (1-10).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// An integer answer on the questionnaire's 1 to 10 slider scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Scale(u8);

impl Scale {
    /// Lowest slider position.
    pub const MIN: Self = Self(1);

    /// Highest slider position.
    pub const MAX: Self = Self(10);

    /// Slider position the questionnaire starts every question at.
    pub const MIDPOINT: Self = Self(5);

    /// Creates a Scale, returning error if outside 1-10.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        Self::try_for_field("scale", value)
    }

    /// Creates a Scale, naming `field` in the error if outside 1-10.
    pub fn try_for_field(field: &str, value: u8) -> Result<Self, ValidationError> {
        if !(1..=10).contains(&value) {
            return Err(ValidationError::out_of_range(field, 1, 10, i32::from(value)));
        }
        Ok(Self(value))
    }

    /// Creates a Scale, clamping to the valid range.
    pub fn saturating(value: u8) -> Self {
        Self(value.clamp(1, 10))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as f64 for score arithmetic.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::MIDPOINT
    }
}

impl TryFrom<u8> for Scale {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Scale> for u8 {
    fn from(scale: Scale) -> Self {
        scale.0
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_try_new_accepts_full_range() {
        for value in 1..=10 {
            assert_eq!(Scale::try_new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn scale_try_new_rejects_zero() {
        match Scale::try_new(0) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "scale");
                assert_eq!(min, 1);
                assert_eq!(max, 10);
                assert_eq!(actual, 0);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn scale_try_new_rejects_eleven() {
        assert!(Scale::try_new(11).is_err());
    }

    #[test]
    fn scale_try_for_field_names_field() {
        let err = Scale::try_for_field("powerBiUsage", 42).unwrap_err();
        assert_eq!(err.field(), "powerBiUsage");
    }

    #[test]
    fn scale_saturating_clamps() {
        assert_eq!(Scale::saturating(0), Scale::MIN);
        assert_eq!(Scale::saturating(200), Scale::MAX);
        assert_eq!(Scale::saturating(7).value(), 7);
    }

    #[test]
    fn scale_default_is_midpoint() {
        assert_eq!(Scale::default().value(), 5);
    }

    #[test]
    fn scale_displays_out_of_ten() {
        assert_eq!(format!("{}", Scale::saturating(8)), "8/10");
    }

    #[test]
    fn scale_serializes_as_number() {
        let json = serde_json::to_string(&Scale::saturating(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn scale_deserialization_rejects_out_of_range() {
        assert!(serde_json::from_str::<Scale>("0").is_err());
        assert!(serde_json::from_str::<Scale>("11").is_err());
        assert_eq!(serde_json::from_str::<Scale>("10").unwrap(), Scale::MAX);
    }
}
