//! Results dashboard views: risk table, readiness radar, capability
//! alignment and key factors.
//!
//! Every axis is a plain number for the chart renderer. Radar values are
//! rounded to one decimal place, as charted.

use serde::Serialize;

use crate::domain::assessment::{AssessmentInput, MicrosoftProduct};
use crate::domain::foundation::{CategoryScore, FitScore};
use crate::domain::scoring::{Category, CategoryScores, GaugeBand};

/// Platform capability values charted against the organization, in axis order.
pub const PLATFORM_CAPABILITY: [f64; 6] = [10.0, 9.0, 9.0, 7.0, 9.0, 10.0];

/// Adoption risk for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Extreme,
}

impl RiskLevel {
    /// 7.5 and above is low risk, then medium from 5 and high from 2.5.
    pub fn from_score(score: CategoryScore) -> Self {
        match score.value() {
            s if s >= 7.5 => RiskLevel::Low,
            s if s >= 5.0 => RiskLevel::Medium,
            s if s >= 2.5 => RiskLevel::High,
            _ => RiskLevel::Extreme,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Extreme => "Extreme",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRisk {
    pub category: Category,
    pub name: &'static str,
    pub score: CategoryScore,
    pub level: RiskLevel,
}

/// One labelled chart axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarAxis {
    pub label: &'static str,
    pub value: f64,
}

/// One capability axis: where the organization stands next to the platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityAxis {
    pub label: &'static str,
    pub organization: f64,
    pub platform: f64,
}

impl CapabilityAxis {
    /// Platform capability minus organization need. Negative when the
    /// organization asks for more than the platform is rated for.
    pub fn headroom(&self) -> f64 {
        self.platform - self.organization
    }
}

/// Everything the results dashboard charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsDashboard {
    pub gauge: GaugeBand,
    pub category_risks: Vec<CategoryRisk>,
    pub readiness_radar: Vec<RadarAxis>,
    pub capability_alignment: Vec<CapabilityAxis>,
    pub key_factors: Vec<String>,
}

impl ResultsDashboard {
    pub fn build(input: &AssessmentInput, overall: FitScore, scores: &CategoryScores) -> Self {
        Self {
            gauge: GaugeBand::from_score(overall),
            category_risks: category_risks(scores),
            readiness_radar: readiness_radar(input, scores),
            capability_alignment: capability_alignment(input),
            key_factors: key_factors(input),
        }
    }
}

/// Risk per category, in report order.
pub fn category_risks(scores: &CategoryScores) -> Vec<CategoryRisk> {
    scores
        .iter()
        .map(|(category, score)| CategoryRisk {
            category,
            name: category.label(),
            score,
            level: RiskLevel::from_score(score),
        })
        .collect()
}

/// The six readiness axes: four categories, ecosystem fit and
/// implementation readiness.
pub fn readiness_radar(input: &AssessmentInput, scores: &CategoryScores) -> Vec<RadarAxis> {
    let mut axes: Vec<RadarAxis> = scores
        .iter()
        .map(|(category, score)| RadarAxis {
            label: category.label(),
            value: score.one_decimal(),
        })
        .collect();

    axes.push(RadarAxis {
        label: "Microsoft Ecosystem Fit",
        value: one_decimal(ecosystem_fit(input)),
    });
    axes.push(RadarAxis {
        label: "Implementation Readiness",
        value: one_decimal(implementation_readiness(input)),
    });
    axes
}

/// Power BI usage counts half; Azure 2, Power BI, Microsoft 365 and
/// Dynamics 365 one each. Clamped to 0-10.
pub fn ecosystem_fit(input: &AssessmentInput) -> f64 {
    let mut score = input.power_bi_usage.as_f64() / 2.0;
    for (product, points) in [
        (MicrosoftProduct::Azure, 2.0),
        (MicrosoftProduct::PowerBi, 1.0),
        (MicrosoftProduct::Microsoft365, 1.0),
        (MicrosoftProduct::Dynamics365, 1.0),
    ] {
        if input.invests_in(&product) {
            score += points;
        }
    }
    score.clamp(0.0, 10.0)
}

/// Starts at 5 and moves with budget and timeline; complexity lowers it,
/// an established Microsoft footprint raises it. Clamped to 0-10.
pub fn implementation_readiness(input: &AssessmentInput) -> f64 {
    let mut score = 5.0;
    score += (input.budget_constraint.as_f64() - 5.0) / 2.0;
    score += (input.time_to_implementation.as_f64() - 5.0) / 2.0;

    if input.data_volume.value() > 8 {
        score -= 1.0;
    }
    if input.real_time_needs.value() > 8 {
        score -= 1.0;
    }
    if input.compliance_count() > 3 {
        score -= 1.0;
    }
    if input.investment_count() >= 3 {
        score += 1.0;
    }
    if input.power_bi_usage.value() >= 7 {
        score += 1.0;
    }

    score.clamp(0.0, 10.0)
}

/// Organization needs on the six capability axes, next to the platform's.
pub fn capability_alignment(input: &AssessmentInput) -> Vec<CapabilityAxis> {
    let investments = input.investment_count() as f64;
    let organization = [
        (
            "Microsoft Ecosystem Fit",
            (investments * 1.5 + input.power_bi_usage.as_f64() / 2.0).min(10.0),
        ),
        ("Data Volume Capability", input.data_volume.as_f64()),
        ("Real-Time Processing", input.real_time_needs.as_f64()),
        ("Cost Efficiency", (11.0 - input.budget_constraint.as_f64()).max(1.0)),
        (
            "Security & Compliance",
            (5.0 + input.compliance_count() as f64 + input.data_sovereignty_needs.as_f64() / 2.0)
                .min(10.0),
        ),
        ("Integration Ease", (investments + 2.0).min(10.0)),
    ];

    organization
        .into_iter()
        .zip(PLATFORM_CAPABILITY)
        .map(|((label, organization), platform)| CapabilityAxis {
            label,
            organization,
            platform,
        })
        .collect()
}

/// Notable answers that drive the result, in display order.
pub fn key_factors(input: &AssessmentInput) -> Vec<String> {
    let mut factors = Vec::new();

    if !input.microsoft_investments.is_empty() {
        let names: Vec<&str> = input.microsoft_investments.iter().map(|p| p.label()).collect();
        factors.push(format!("Existing Microsoft investments: {}", names.join(", ")));
    }
    if input.power_bi_usage.value() > 7 {
        factors.push(
            "Strong Power BI utilization is a significant advantage for Fabric adoption"
                .to_string(),
        );
    }
    if input.data_volume.value() > 7 {
        factors.push(
            "Your high data volume aligns well with Fabric's enterprise-scale capabilities"
                .to_string(),
        );
    }
    if input.real_time_needs.value() > 7 {
        factors.push(
            "Your real-time analytics needs match Fabric's streaming analytics capabilities"
                .to_string(),
        );
    }
    if input.budget_constraint.value() < 5 {
        factors.push(
            "Microsoft Fabric could provide cost efficiencies for your budget constraints"
                .to_string(),
        );
    }

    factors
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;
