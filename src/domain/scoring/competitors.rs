//! Competitor Score Calculator - Fit scores for alternative platforms.
//!
//! Every alternative has its own base score and an independent rule set, so
//! a competitor's score never depends on another competitor's. Descriptive
//! content (strengths, weaknesses, "consider if" lists) is static per
//! alternative.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::assessment::{AssessmentInput, DataType, Infrastructure, WarehouseSolution};
use crate::domain::foundation::FitScore;

/// Name of the platform being assessed, used in comparison prose.
pub const PLATFORM_NAME: &str = "Microsoft Fabric";

/// Margin beyond which one platform is a clearly better fit.
pub const CLEAR_MARGIN: f64 = 15.0;

/// An alternative analytics platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alternative {
    #[default]
    #[serde(rename = "AWS", alias = "aws")]
    Aws,
    #[serde(rename = "Snowflake", alias = "snowflake")]
    Snowflake,
    #[serde(rename = "Databricks", alias = "databricks")]
    Databricks,
    #[serde(rename = "On-Premise", alias = "on-premise")]
    OnPremise,
}

impl Alternative {
    /// Alternatives in display order.
    pub const ALL: [Alternative; 4] = [
        Alternative::Aws,
        Alternative::Snowflake,
        Alternative::Databricks,
        Alternative::OnPremise,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Alternative::Aws => "AWS",
            Alternative::Snowflake => "Snowflake",
            Alternative::Databricks => "Databricks",
            Alternative::OnPremise => "On-Premise",
        }
    }

    /// Static descriptive content for this alternative.
    pub fn profile(&self) -> &'static PlatformProfile {
        match self {
            Alternative::Aws => &AWS_PROFILE,
            Alternative::Snowflake => &SNOWFLAKE_PROFILE,
            Alternative::Databricks => &DATABRICKS_PROFILE,
            Alternative::OnPremise => &ON_PREMISE_PROFILE,
        }
    }

    /// Scores this alternative against the answers.
    pub fn score(&self, input: &AssessmentInput) -> FitScore {
        let points = match self {
            Alternative::Aws => aws_points(input),
            Alternative::Snowflake => snowflake_points(input),
            Alternative::Databricks => databricks_points(input),
            Alternative::OnPremise => on_premise_points(input),
        };
        FitScore::new(points)
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static strengths, weaknesses and selection guidance for a platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformProfile {
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub consider_if: &'static [&'static str],
}

/// Descriptive content for the assessed platform itself.
pub static PLATFORM_PROFILE: PlatformProfile = PlatformProfile {
    strengths: &[
        "Unified analytics platform",
        "Seamless Power BI integration",
        "Microsoft ecosystem synergy",
        "OneLake data storage efficiency",
        "Simplified governance",
    ],
    weaknesses: &[
        "Relatively new platform",
        "Microsoft-centric approach",
        "Evolving feature set",
        "Cloud-only solution",
    ],
    consider_if: &[
        "You have significant Microsoft investments",
        "Power BI is central to your analytics",
        "You want a unified platform experience",
        "You need simplified governance",
        "You prefer a single vendor solution",
    ],
};

static AWS_PROFILE: PlatformProfile = PlatformProfile {
    strengths: &[
        "Comprehensive cloud ecosystem",
        "Strong market presence",
        "Wide range of specialized services",
        "Global infrastructure",
    ],
    weaknesses: &[
        "Less integrated with Microsoft products",
        "Can require more specialized skills",
        "Potential higher costs for complex scenarios",
        "Less unified experience than Fabric",
    ],
    consider_if: &[
        "You're already heavily invested in AWS",
        "You need specialized AWS services",
        "You prefer more granular service selection",
    ],
};

static SNOWFLAKE_PROFILE: PlatformProfile = PlatformProfile {
    strengths: &[
        "Excellent data warehouse solution",
        "Cloud-agnostic deployment",
        "Separation of storage and compute",
        "Strong data sharing capabilities",
    ],
    weaknesses: &[
        "Less integrated with Microsoft products",
        "Not a comprehensive analytics platform",
        "Can be expensive at scale",
        "Limited native ETL capabilities",
    ],
    consider_if: &[
        "You need a cloud-agnostic solution",
        "Data sharing is a primary requirement",
        "You need pure data warehouse performance",
    ],
};

static DATABRICKS_PROFILE: PlatformProfile = PlatformProfile {
    strengths: &[
        "Excellent for complex data science",
        "Strong Spark-based processing",
        "Good for unstructured data",
        "Advanced ML capabilities",
    ],
    weaknesses: &[
        "Steeper learning curve",
        "Can be more expensive",
        "Less integrated with Microsoft ecosystem",
        "Less comprehensive than Fabric",
    ],
    consider_if: &[
        "Advanced ML/AI is your primary focus",
        "You need deep data science capabilities",
        "You're heavily invested in Spark",
    ],
};

static ON_PREMISE_PROFILE: PlatformProfile = PlatformProfile {
    strengths: &[
        "Complete data sovereignty control",
        "Can be more cost-effective long-term",
        "No internet dependency",
        "Potential for higher security",
    ],
    weaknesses: &[
        "Higher upfront investment",
        "Maintenance overhead",
        "Scaling difficulties",
        "Less modern capabilities",
    ],
    consider_if: &[
        "Data sovereignty is non-negotiable",
        "You have strict air-gap requirements",
        "You have existing datacenter investments",
    ],
};

/// A scored alternative with its descriptive content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorScore {
    pub alternative: Alternative,
    pub name: &'static str,
    pub score: FitScore,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
}

impl CompetitorScore {
    fn for_alternative(alternative: Alternative, input: &AssessmentInput) -> Self {
        let profile = alternative.profile();
        Self {
            alternative,
            name: alternative.name(),
            score: alternative.score(input),
            strengths: profile.strengths,
            weaknesses: profile.weaknesses,
        }
    }
}

/// Scores every alternative, in display order.
pub fn compute_competitor_scores(input: &AssessmentInput) -> Vec<CompetitorScore> {
    Alternative::ALL
        .into_iter()
        .map(|alternative| CompetitorScore::for_alternative(alternative, input))
        .collect()
}

/// Base 65. AWS infrastructure +15, Redshift warehouse +10, real-time above
/// 7 +5, fewer than two Microsoft investments +10.
fn aws_points(input: &AssessmentInput) -> f64 {
    let mut points = 65.0;
    if input.has_infrastructure(&Infrastructure::Aws) {
        points += 15.0;
    }
    if input.data_warehouse_solution == WarehouseSolution::AwsRedshift {
        points += 10.0;
    }
    if input.real_time_needs.value() > 7 {
        points += 5.0;
    }
    if input.investment_count() < 2 {
        points += 10.0;
    }
    points
}

/// Base 70. Volume above 7 +10, Snowflake warehouse +15, budget above 7 +5,
/// fewer than three Microsoft investments +5.
fn snowflake_points(input: &AssessmentInput) -> f64 {
    let mut points = 70.0;
    if input.data_volume.value() > 7 {
        points += 10.0;
    }
    if input.data_warehouse_solution == WarehouseSolution::Snowflake {
        points += 15.0;
    }
    if input.budget_constraint.value() > 7 {
        points += 5.0;
    }
    if input.investment_count() < 3 {
        points += 5.0;
    }
    points
}

/// Base 60. Semi-structured +10, unstructured +10, real-time above 8 +10,
/// budget above 6 +5.
fn databricks_points(input: &AssessmentInput) -> f64 {
    let mut points = 60.0;
    if input.has_data_type(&DataType::SemiStructured) {
        points += 10.0;
    }
    if input.has_data_type(&DataType::Unstructured) {
        points += 10.0;
    }
    if input.real_time_needs.value() > 8 {
        points += 10.0;
    }
    if input.budget_constraint.value() > 6 {
        points += 5.0;
    }
    points
}

/// Base 40. On-premises servers +15, sovereignty above 8 +15, more than
/// three compliance standards +10, budget below 4 -10.
fn on_premise_points(input: &AssessmentInput) -> f64 {
    let mut points = 40.0;
    if input.has_infrastructure(&Infrastructure::OnPremisesServers) {
        points += 15.0;
    }
    if input.data_sovereignty_needs.value() > 8 {
        points += 15.0;
    }
    if input.compliance_count() > 3 {
        points += 10.0;
    }
    if input.budget_constraint.value() < 4 {
        points -= 10.0;
    }
    points
}

/// How the assessed platform compares with one alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOutcome {
    /// Ahead by more than the clear margin.
    ClearlyBetter,
    MarginallyBetter,
    /// Comparable outcomes, including exact ties.
    MarginallyWorse,
    /// Behind by more than the clear margin.
    ClearlyWorse,
}

impl ComparisonOutcome {
    /// Returns the recommendation prose naming the alternative.
    pub fn recommendation(&self, alternative: Alternative) -> String {
        let name = alternative.name();
        match self {
            ComparisonOutcome::ClearlyBetter => format!(
                "{PLATFORM_NAME} appears to be a significantly better fit than {name} for your specific needs, primarily due to your existing Microsoft investments and requirements alignment."
            ),
            ComparisonOutcome::MarginallyBetter => format!(
                "{PLATFORM_NAME} appears to be a somewhat better fit than {name} for your organization, though the difference is not dramatic. Consider evaluating specific capabilities that are most important to you."
            ),
            ComparisonOutcome::ClearlyWorse => format!(
                "{name} appears to be a significantly better fit than {PLATFORM_NAME} for your specific needs. Consider your specific use cases and long-term strategy when making a decision."
            ),
            ComparisonOutcome::MarginallyWorse => format!(
                "Both {PLATFORM_NAME} and {name} could work for your organization with similar expected outcomes. Your specific priorities and use cases should guide your final decision."
            ),
        }
    }
}

/// Compares the overall score with an alternative's score.
///
/// # Edge Cases
/// - Exactly 15 ahead: marginally better (the margin is strict)
/// - Equal scores: marginally worse, read as "comparable"
pub fn compare_with_alternative(overall: FitScore, competitor: FitScore) -> ComparisonOutcome {
    let (ours, theirs) = (overall.value(), competitor.value());
    if ours > theirs + CLEAR_MARGIN {
        ComparisonOutcome::ClearlyBetter
    } else if ours > theirs {
        ComparisonOutcome::MarginallyBetter
    } else if ours + CLEAR_MARGIN < theirs {
        ComparisonOutcome::ClearlyWorse
    } else {
        ComparisonOutcome::MarginallyWorse
    }
}

/// The assessed platform set against one selected alternative.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeComparison {
    pub competitor: CompetitorScore,
    pub outcome: ComparisonOutcome,
    pub recommendation: String,
    pub consider_if: &'static [&'static str],
}

impl AlternativeComparison {
    /// Builds the comparison for `selected` from already computed scores.
    ///
    /// Falls back to the first competitor if `selected` was not scored.
    pub fn select(
        overall: FitScore,
        competitors: &[CompetitorScore],
        selected: Alternative,
        input: &AssessmentInput,
    ) -> Self {
        let competitor = competitors
            .iter()
            .find(|c| c.alternative == selected)
            .or_else(|| competitors.first())
            .cloned()
            .unwrap_or_else(|| CompetitorScore::for_alternative(selected, input));
        let outcome = compare_with_alternative(overall, competitor.score);
        Self {
            recommendation: outcome.recommendation(competitor.alternative),
            consider_if: competitor.alternative.profile().consider_if,
            competitor,
            outcome,
        }
    }
}
