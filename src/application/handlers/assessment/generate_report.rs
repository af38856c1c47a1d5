//! GenerateReportHandler - Command handler producing the full assessment report.

use tracing::{debug, warn};

use crate::config::DefaultsConfig;
use crate::domain::assessment::AssessmentInput;
use crate::domain::foundation::Timestamp;
use crate::domain::report::AssessmentReport;
use crate::domain::scoring::{Alternative, BusinessParameters, ScoringError};

/// Command to score a submitted questionnaire and assemble its report.
#[derive(Debug, Clone)]
pub struct GenerateReportCommand {
    pub input: AssessmentInput,
    /// Falls back to the configured defaults when absent.
    pub parameters: Option<BusinessParameters>,
    /// Falls back to the configured alternative when absent.
    pub alternative: Option<Alternative>,
}

impl GenerateReportCommand {
    pub fn new(input: AssessmentInput) -> Self {
        Self {
            input,
            parameters: None,
            alternative: None,
        }
    }

    pub fn with_parameters(mut self, parameters: BusinessParameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternative = Some(alternative);
        self
    }
}

/// Handler for generating assessment reports.
pub struct GenerateReportHandler {
    defaults: DefaultsConfig,
}

impl GenerateReportHandler {
    pub fn new(defaults: DefaultsConfig) -> Self {
        Self { defaults }
    }

    pub fn handle(&self, cmd: GenerateReportCommand) -> Result<AssessmentReport, ScoringError> {
        let parameters = cmd
            .parameters
            .unwrap_or_else(|| self.defaults.business_parameters());
        let alternative = cmd.alternative.unwrap_or(self.defaults.alternative);

        let report = AssessmentReport::generate(
            cmd.input,
            &parameters,
            alternative,
            Timestamp::now(),
        )
        .map_err(|err| {
            warn!(error = %err, alternative = %alternative, "Report generation failed");
            err
        })?;

        debug!(
            overall_score = report.overall_score.value(),
            tier = %report.tier.tier,
            alternative = %alternative,
            outcome = ?report.comparison.outcome,
            "Generated assessment report"
        );

        Ok(report)
    }
}
