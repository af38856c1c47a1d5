//! Tier and Recommendation Selector - Score bands and their canned text.
//!
//! All prose lives in static tables keyed by band, so the thresholds can be
//! tested without reference to the wording.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::FitScore;

/// Discrete fit tier selected by the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitTier {
    NotRecommended,
    Partial,
    Good,
    Excellent,
}

/// Label and recommendation prose for one tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierContent {
    pub label: &'static str,
    pub recommendation: &'static str,
}

static EXCELLENT: TierContent = TierContent {
    label: "Excellent fit",
    recommendation: "Microsoft Fabric is an excellent fit for your organization. Your strong Microsoft ecosystem presence, data needs, and requirements align very well with Fabric's capabilities.",
};

static GOOD: TierContent = TierContent {
    label: "Good fit",
    recommendation: "Microsoft Fabric is a good fit for your organization. With some adjustments or additional considerations, Fabric could provide significant value to your data strategy.",
};

static PARTIAL: TierContent = TierContent {
    label: "Partial fit",
    recommendation: "Microsoft Fabric might be suitable for parts of your data strategy, but you should carefully evaluate specific use cases. Consider a hybrid approach with other technologies.",
};

static NOT_RECOMMENDED: TierContent = TierContent {
    label: "Not recommended",
    recommendation: "Microsoft Fabric may not be the optimal solution for your current needs. Other data platforms might better align with your requirements and existing infrastructure.",
};

impl FitTier {
    /// Bands: `[80,100]` excellent, `[60,80)` good, `[40,60)` partial,
    /// below 40 not recommended.
    pub fn from_score(score: FitScore) -> Self {
        match score.value() {
            s if s >= 80.0 => FitTier::Excellent,
            s if s >= 60.0 => FitTier::Good,
            s if s >= 40.0 => FitTier::Partial,
            _ => FitTier::NotRecommended,
        }
    }

    pub fn content(&self) -> &'static TierContent {
        match self {
            FitTier::Excellent => &EXCELLENT,
            FitTier::Good => &GOOD,
            FitTier::Partial => &PARTIAL,
            FitTier::NotRecommended => &NOT_RECOMMENDED,
        }
    }

    pub fn label(&self) -> &'static str {
        self.content().label
    }
}

impl fmt::Display for FitTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Banding for next steps, independent of the fit tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStepsBand {
    /// 70 and above.
    Adopt,
    /// 50 up to 70.
    Evaluate,
    /// Below 50.
    Explore,
}

static ADOPT_STEPS: [&str; 5] = [
    "Schedule a Microsoft Fabric demonstration with a Microsoft representative",
    "Identify a small pilot project to test Fabric capabilities",
    "Evaluate current data assets for migration to Microsoft Fabric",
    "Review Microsoft Fabric pricing and licensing options",
    "Develop a phased implementation plan",
];

static EVALUATE_STEPS: [&str; 5] = [
    "Conduct a deeper technical evaluation of Microsoft Fabric against specific use cases",
    "Compare Microsoft Fabric with alternative solutions for your priority scenarios",
    "Consider a hybrid approach using Fabric alongside existing solutions",
    "Identify skill gaps and training needs for potential Fabric adoption",
    "Evaluate total cost of ownership for a partial Fabric implementation",
];

static EXPLORE_STEPS: [&str; 5] = [
    "Explore alternative data platforms that better match your requirements",
    "Consider Microsoft Fabric only for specific use cases where it excels",
    "Maintain awareness of Microsoft Fabric roadmap for future re-evaluation",
    "Evaluate how to better leverage your existing data platform investments",
    "Consider consulting with a data platform specialist for targeted recommendations",
];

impl NextStepsBand {
    pub fn from_score(score: FitScore) -> Self {
        match score.value() {
            s if s >= 70.0 => NextStepsBand::Adopt,
            s if s >= 50.0 => NextStepsBand::Evaluate,
            _ => NextStepsBand::Explore,
        }
    }

    /// The ordered next-step list for this band.
    pub fn steps(&self) -> &'static [&'static str; 5] {
        match self {
            NextStepsBand::Adopt => &ADOPT_STEPS,
            NextStepsBand::Evaluate => &EVALUATE_STEPS,
            NextStepsBand::Explore => &EXPLORE_STEPS,
        }
    }
}

/// Colour band of the score gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeBand {
    Favorable,
    Moderate,
    Unfavorable,
}

impl GaugeBand {
    pub fn from_score(score: FitScore) -> Self {
        match score.value() {
            s if s >= 70.0 => GaugeBand::Favorable,
            s if s >= 40.0 => GaugeBand::Moderate,
            _ => GaugeBand::Unfavorable,
        }
    }
}

/// The tier, its prose and next steps selected for one overall score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierSelection {
    pub tier: FitTier,
    pub label: &'static str,
    pub recommendation_text: &'static str,
    pub next_steps_band: NextStepsBand,
    pub next_steps: &'static [&'static str],
    pub gauge: GaugeBand,
}

/// Selects the tier, recommendation and next steps for an overall score.
pub fn select_tier(overall: FitScore) -> TierSelection {
    let tier = FitTier::from_score(overall);
    let content = tier.content();
    let band = NextStepsBand::from_score(overall);
    TierSelection {
        tier,
        label: content.label,
        recommendation_text: content.recommendation,
        next_steps_band: band,
        next_steps: band.steps(),
        gauge: GaugeBand::from_score(overall),
    }
}

/// Readiness of the organization across all four categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    Low,
    Medium,
    High,
}

impl ReadinessLevel {
    /// 80% and above is high, 60% and above medium.
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            80.. => ReadinessLevel::High,
            60..=79 => ReadinessLevel::Medium,
            _ => ReadinessLevel::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadinessLevel::High => "High",
            ReadinessLevel::Medium => "Medium",
            ReadinessLevel::Low => "Low",
        }
    }
}

impl fmt::Display for ReadinessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
