//! Bounded score value objects.
//!
//! Scores are accumulated as raw f64 points and clamped once, at the end, into
//! the range of the score type. Both types clamp on construction and on
//! deserialization so an out-of-range value can never be observed.

use serde::{Deserialize, Serialize};
use std::fmt;

fn clamp_points(points: f64, max: f64) -> f64 {
    if points.is_nan() {
        return 0.0;
    }
    points.clamp(0.0, max)
}

/// A platform fit score on the 0-100 scale.
///
/// Used for the overall suitability score and for every competitor score.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct FitScore(f64);

impl FitScore {
    /// Lowest possible fit.
    pub const ZERO: Self = Self(0.0);

    /// Highest possible fit.
    pub const MAX: Self = Self(100.0);

    /// Creates a FitScore, clamping accumulated points to 0-100.
    pub fn new(points: f64) -> Self {
        Self(clamp_points(points, 100.0))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value rounded for display.
    pub fn rounded(&self) -> u8 {
        // Clamped to 0-100, so the cast cannot truncate.
        self.0.round() as u8
    }
}

impl Default for FitScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for FitScore {
    fn from(points: f64) -> Self {
        Self::new(points)
    }
}

impl From<FitScore> for f64 {
    fn from(score: FitScore) -> Self {
        score.0
    }
}

impl fmt::Display for FitScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}

/// A category score on the 0-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct CategoryScore(f64);

impl CategoryScore {
    /// Lowest possible category score.
    pub const ZERO: Self = Self(0.0);

    /// Highest possible category score.
    pub const MAX: Self = Self(10.0);

    /// Creates a CategoryScore, clamping accumulated points to 0-10.
    pub fn new(points: f64) -> Self {
        Self(clamp_points(points, 10.0))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value rounded to one decimal place.
    pub fn one_decimal(&self) -> f64 {
        (self.0 * 10.0).round() / 10.0
    }
}

impl Default for CategoryScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for CategoryScore {
    fn from(points: f64) -> Self {
        Self::new(points)
    }
}

impl From<CategoryScore> for f64 {
    fn from(score: CategoryScore) -> Self {
        score.0
    }
}

impl fmt::Display for CategoryScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}/10", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_score_clamps_to_hundred() {
        assert_eq!(FitScore::new(130.0), FitScore::MAX);
        assert_eq!(FitScore::new(-4.0), FitScore::ZERO);
        assert_eq!(FitScore::new(79.0).value(), 79.0);
    }

    #[test]
    fn fit_score_nan_becomes_zero() {
        assert_eq!(FitScore::new(f64::NAN), FitScore::ZERO);
    }

    #[test]
    fn fit_score_rounds_for_display() {
        assert_eq!(FitScore::new(8.5).rounded(), 9);
        assert_eq!(format!("{}", FitScore::new(79.4)), "79");
    }

    #[test]
    fn fit_score_deserialization_clamps() {
        let score: FitScore = serde_json::from_str("250.0").unwrap();
        assert_eq!(score, FitScore::MAX);
    }

    #[test]
    fn fit_score_serializes_as_number() {
        assert_eq!(serde_json::to_string(&FitScore::new(8.5)).unwrap(), "8.5");
    }

    #[test]
    fn category_score_clamps_to_ten() {
        assert_eq!(CategoryScore::new(12.0), CategoryScore::MAX);
        assert_eq!(CategoryScore::new(-1.0), CategoryScore::ZERO);
    }

    #[test]
    fn category_score_one_decimal_rounds() {
        assert_eq!(CategoryScore::new(6.3063).one_decimal(), 6.3);
        assert_eq!(CategoryScore::new(2.25).one_decimal(), 2.3);
    }

    #[test]
    fn category_score_displays_out_of_ten() {
        assert_eq!(format!("{}", CategoryScore::new(7.24)), "7.2/10");
    }

    #[test]
    fn scores_order_by_value() {
        assert!(CategoryScore::new(3.0) < CategoryScore::new(4.0));
        assert!(FitScore::new(60.0) > FitScore::new(59.9));
    }
}
