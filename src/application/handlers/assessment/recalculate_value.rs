//! RecalculateValueHandler - Reruns the business value calculation when
//! the business parameters change.

use tracing::{debug, warn};

use crate::domain::assessment::AssessmentInput;
use crate::domain::scoring::{
    compute_overall_score, compute_value_metrics, BusinessParameters, ScoringError, ValueMetrics,
};

/// Command to recompute value metrics for new business parameters.
#[derive(Debug, Clone)]
pub struct RecalculateValueCommand {
    pub input: AssessmentInput,
    pub parameters: BusinessParameters,
}

impl RecalculateValueCommand {
    /// Rejects non-positive parameters when handled.
    pub fn new(input: AssessmentInput, parameters: BusinessParameters) -> Self {
        Self { input, parameters }
    }

    /// Raises every parameter to at least 1 first, as the calculator's
    /// input fields do.
    pub fn clamped(input: AssessmentInput, parameters: BusinessParameters) -> Self {
        Self {
            input,
            parameters: parameters.clamped(),
        }
    }
}

/// Handler for recalculating value metrics.
#[derive(Debug, Default)]
pub struct RecalculateValueHandler;

impl RecalculateValueHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: RecalculateValueCommand) -> Result<ValueMetrics, ScoringError> {
        let overall = compute_overall_score(&cmd.input);

        let metrics =
            compute_value_metrics(&cmd.input, overall, &cmd.parameters).map_err(|err| {
                warn!(error = %err, "Value recalculation failed");
                err
            })?;

        debug!(
            overall_score = overall.value(),
            organization_size = cmd.parameters.organization_size,
            cost_savings = metrics.cost_savings,
            three_year_roi_percent = metrics.three_year_roi_percent,
            "Recalculated value metrics"
        );

        Ok(metrics)
    }
}
