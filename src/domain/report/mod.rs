//! Report module - Read-only views assembled from computed scores.
//!
//! Views are plain serializable data for the chart, summary and export
//! collaborators. Nothing here computes a score; it only arranges and
//! labels what the scoring module produced.

pub mod dashboard;
pub mod executive_summary;

pub use dashboard::{
    CapabilityAxis, CategoryRisk, RadarAxis, ResultsDashboard, RiskLevel, PLATFORM_CAPABILITY,
};
pub use executive_summary::{CategoryHighlight, ExecutiveSummary, RoiOutlook};

use serde::Serialize;

use crate::domain::assessment::{AssessmentInput, IndustryProfile};
use crate::domain::foundation::{FitScore, Timestamp};
use crate::domain::scoring::{
    compute_category_scores, compute_competitor_scores, compute_overall_score,
    compute_value_metrics, select_tier, Alternative, AlternativeComparison, BusinessParameters,
    CategoryScores, CompetitorScore, ScoringError, TierSelection, ValueMetrics,
};

/// A headline platform benefit shown on the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformBenefit {
    pub title: &'static str,
    pub description: &'static str,
}

pub static PLATFORM_BENEFITS: [PlatformBenefit; 6] = [
    PlatformBenefit {
        title: "Unified Platform",
        description: "Single integrated experience for all data and analytics needs",
    },
    PlatformBenefit {
        title: "Power BI Integration",
        description: "Seamless connection to industry-leading BI capabilities",
    },
    PlatformBenefit {
        title: "OneLake Architecture",
        description: "Simplified data management with a unified data lake",
    },
    PlatformBenefit {
        title: "AI-Ready Platform",
        description: "Built-in ML and AI capabilities for advanced analytics",
    },
    PlatformBenefit {
        title: "SaaS Simplicity",
        description: "Reduced maintenance and infrastructure management",
    },
    PlatformBenefit {
        title: "Microsoft Ecosystem",
        description: "Deep integration with Microsoft 365, Azure, and other services",
    },
];

/// The full assessment report for one submitted questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    /// Presentational only; never feeds a score.
    pub generated_at: Timestamp,
    pub input: AssessmentInput,
    pub overall_score: FitScore,
    pub tier: TierSelection,
    pub category_scores: CategoryScores,
    pub executive_summary: ExecutiveSummary,
    pub competitors: Vec<CompetitorScore>,
    pub comparison: AlternativeComparison,
    pub business_parameters: BusinessParameters,
    pub value_metrics: ValueMetrics,
    /// Yearly value forgone by not adopting.
    pub annual_opportunity_cost: f64,
    pub industry: IndustryProfile,
    pub dashboard: ResultsDashboard,
    pub platform_benefits: &'static [PlatformBenefit],
}

impl AssessmentReport {
    /// Runs every calculation over `input` and assembles the report.
    ///
    /// # Errors
    ///
    /// Propagates `ScoringError` from the value metrics.
    pub fn generate(
        input: AssessmentInput,
        params: &BusinessParameters,
        alternative: Alternative,
        generated_at: Timestamp,
    ) -> Result<Self, ScoringError> {
        let overall_score = compute_overall_score(&input);
        let category_scores = compute_category_scores(&input);
        let competitors = compute_competitor_scores(&input);
        let value_metrics = compute_value_metrics(&input, overall_score, params)?;

        let comparison =
            AlternativeComparison::select(overall_score, &competitors, alternative, &input);

        Ok(Self {
            generated_at,
            overall_score,
            tier: select_tier(overall_score),
            executive_summary: ExecutiveSummary::from_scores(&category_scores),
            dashboard: ResultsDashboard::build(&input, overall_score, &category_scores),
            industry: input.industry.profile(),
            annual_opportunity_cost: value_metrics
                .annual_opportunity_cost(params.average_hourly_rate),
            category_scores,
            competitors,
            comparison,
            business_parameters: *params,
            value_metrics,
            platform_benefits: &PLATFORM_BENEFITS,
            input,
        })
    }

    /// Calendar date shown in the report header.
    pub fn report_date(&self) -> String {
        self.generated_at.report_date()
    }

    /// Pretty-printed JSON for the export collaborator.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
