//! Executive summary view over the category scores.

use serde::Serialize;

use crate::domain::foundation::CategoryScore;
use crate::domain::scoring::{Category, CategoryScores, ReadinessLevel};

/// Category score below which a strategic recommendation is raised.
pub const RECOMMENDATION_THRESHOLD: f64 = 7.0;

/// Raised when every category is at or above the threshold.
pub const MAINTAIN_EXCELLENCE: &str =
    "Focus on optimizing Microsoft Fabric implementation to maintain current excellence";

/// Executive view: readiness, the strongest and weakest areas, and what to do next.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummary {
    /// Sum of category scores as a percentage of 40.
    pub readiness_percent: u8,
    pub readiness_level: ReadinessLevel,
    pub top_strength: CategoryHighlight,
    pub top_opportunity: CategoryHighlight,
    pub roi_outlook: RoiOutlook,
    pub key_recommendations: Vec<&'static str>,
}

impl ExecutiveSummary {
    pub fn from_scores(scores: &CategoryScores) -> Self {
        let readiness_percent = scores.readiness_percent();
        let recommendations: Vec<&'static str> = scores
            .iter()
            .filter(|(_, score)| score.value() < RECOMMENDATION_THRESHOLD)
            .map(|(category, _)| improvement_for(category))
            .collect();

        Self {
            readiness_percent,
            readiness_level: ReadinessLevel::from_percent(readiness_percent),
            top_strength: CategoryHighlight::of(scores, scores.strongest()),
            top_opportunity: CategoryHighlight::of(scores, scores.weakest()),
            roi_outlook: RoiOutlook::from_readiness(readiness_percent),
            key_recommendations: if recommendations.is_empty() {
                vec![MAINTAIN_EXCELLENCE]
            } else {
                recommendations
            },
        }
    }
}

/// A single category called out in the summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryHighlight {
    pub category: Category,
    pub name: &'static str,
    pub score: CategoryScore,
}

impl CategoryHighlight {
    fn of(scores: &CategoryScores, category: Category) -> Self {
        Self {
            category,
            name: category.label(),
            score: scores.get(category),
        }
    }
}

/// Expected payback horizon derived from readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoiOutlook {
    High,
    Moderate,
    LongTerm,
}

impl RoiOutlook {
    /// 75% and above is high, 50% and above moderate.
    pub fn from_readiness(percent: u8) -> Self {
        match percent {
            75.. => RoiOutlook::High,
            50..=74 => RoiOutlook::Moderate,
            _ => RoiOutlook::LongTerm,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            RoiOutlook::High => "High ROI potential within 6-12 months",
            RoiOutlook::Moderate => "Moderate ROI potential within 12-18 months",
            RoiOutlook::LongTerm => {
                "Long-term ROI potential, 18+ months with proper implementation"
            }
        }
    }
}

fn improvement_for(category: Category) -> &'static str {
    match category {
        Category::Data => "Enhance data integration capabilities through Microsoft Fabric's Data Factory and lakehouse architecture",
        Category::Analytics => "Implement Power BI reporting and Synapse Analytics to strengthen analytical capabilities",
        Category::Governance => "Establish robust data governance utilizing Microsoft Purview integration with Fabric",
        Category::Culture => "Develop a data culture transformation program with skill development tracks",
    }
}

#[cfg(test)]
#[path = "executive_summary_test.rs"]
mod executive_summary_test;
