//! Scoring error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors surfaced by the value metric calculations.
///
/// Score calculations are total over a well-formed input and never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// A business parameter was rejected at the boundary.
    #[error("Invalid business parameter: {0}")]
    InvalidParameter(#[from] ValidationError),

    /// The projected three-year platform cost is not a usable ROI divisor.
    #[error("Three-year platform cost {three_year_cost} is not positive; ROI is undefined")]
    DegenerateRoiDenominator { three_year_cost: f64 },
}

impl ScoringError {
    pub fn degenerate_roi(three_year_cost: f64) -> Self {
        ScoringError::DegenerateRoiDenominator { three_year_cost }
    }

    /// Returns true when the caller supplied bad input, as opposed to
    /// input that produced an undefined result.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ScoringError::InvalidParameter(_))
    }
}
