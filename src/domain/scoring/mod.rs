//! Scoring module - Pure derivations from one set of questionnaire answers.
//!
//! Data flows one way:
//!
//! ```text
//! AssessmentInput ─┬─> compute_category_scores
//!                  ├─> compute_overall_score ──┬─> compute_value_metrics
//!                  └─> compute_competitor_scores└─> select_tier
//! ```
//!
//! Every function here is deterministic and side-effect free. Only the value
//! metrics can fail, and only on their business parameters.

mod categories;
mod competitors;
mod composite;
mod errors;
mod tiers;
mod value_metrics;

pub use categories::{
    analytics_score, compute_category_scores, culture_score, data_score, governance_score,
    Category, CategoryScores,
};
pub use competitors::{
    compare_with_alternative, compute_competitor_scores, Alternative, AlternativeComparison,
    ComparisonOutcome, CompetitorScore, PlatformProfile, CLEAR_MARGIN, PLATFORM_NAME,
    PLATFORM_PROFILE,
};
pub use composite::compute_overall_score;
pub use errors::ScoringError;
pub use tiers::{
    select_tier, FitTier, GaugeBand, NextStepsBand, ReadinessLevel, TierContent, TierSelection,
};
pub use value_metrics::{
    compute_value_metrics, BusinessParameters, ValueMetrics, MAX_RISK_REDUCTION,
    MIN_TIME_TO_VALUE_MONTHS,
};
