//! Category Scorers - Data, Analytics, Governance and Culture readiness.
//!
//! Each scorer accumulates raw points over the whole input and clamps the
//! total to 0-10 once. Sub-terms capped with `min` are capped individually.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::assessment::{
    AssessmentInput, BiTool, DataType, Infrastructure, MicrosoftProduct, WarehouseSolution,
};
use crate::domain::foundation::CategoryScore;

/// Slider divisor that maps a 1-10 answer onto a 0-3 sub-score.
const THIRDS_DIVISOR: f64 = 3.33;

/// Data types the Data score recognizes, one point each.
const SCORED_DATA_TYPES: [DataType; 4] = [
    DataType::Structured,
    DataType::SemiStructured,
    DataType::Unstructured,
    DataType::IotSensor,
];

/// One of the four readiness categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Data,
    Analytics,
    Governance,
    Culture,
}

impl Category {
    /// All categories in report order. Ties between categories resolve to
    /// the earlier entry.
    pub const ALL: [Category; 4] = [
        Category::Data,
        Category::Analytics,
        Category::Governance,
        Category::Culture,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Data => "Data Integration",
            Category::Analytics => "Analytics Capabilities",
            Category::Governance => "Governance Framework",
            Category::Culture => "Organizational Culture",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four category scores, each 0-10.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryScores {
    pub data: CategoryScore,
    pub analytics: CategoryScore,
    pub governance: CategoryScore,
    pub culture: CategoryScore,
}

impl CategoryScores {
    /// Maximum attainable aggregate.
    pub const MAX_TOTAL: f64 = 40.0;

    /// Returns the score for one category.
    pub fn get(&self, category: Category) -> CategoryScore {
        match category {
            Category::Data => self.data,
            Category::Analytics => self.analytics,
            Category::Governance => self.governance,
            Category::Culture => self.culture,
        }
    }

    /// Iterates categories and scores in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, CategoryScore)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Sum of the four scores, 0-40.
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, score)| score.value()).sum()
    }

    /// Aggregate readiness as a whole percentage of the 40-point maximum.
    pub fn readiness_percent(&self) -> u8 {
        // total is within 0-40, so the result is within 0-100.
        (100.0 * self.total() / Self::MAX_TOTAL).round() as u8
    }

    /// The highest-scoring category; ties go to the earlier category.
    pub fn strongest(&self) -> Category {
        self.iter()
            .fold(None, |best: Option<(Category, CategoryScore)>, (c, s)| match best {
                Some((_, b)) if b >= s => best,
                _ => Some((c, s)),
            })
            .map_or(Category::Data, |(c, _)| c)
    }

    /// The lowest-scoring category; ties go to the earlier category.
    pub fn weakest(&self) -> Category {
        self.iter()
            .fold(None, |worst: Option<(Category, CategoryScore)>, (c, s)| match worst {
                Some((_, w)) if w <= s => worst,
                _ => Some((c, s)),
            })
            .map_or(Category::Data, |(c, _)| c)
    }
}

/// Computes all four category scores.
pub fn compute_category_scores(input: &AssessmentInput) -> CategoryScores {
    CategoryScores {
        data: data_score(input),
        analytics: analytics_score(input),
        governance: governance_score(input),
        culture: culture_score(input),
    }
}

/// Data integration readiness.
///
/// Warehouse tier (+3 Azure Synapse, +2 SQL Server, +1 none or unanswered),
/// one point per recognized data type, then `min(2, volume/5)` and
/// `min(2, real_time/5)`.
pub fn data_score(input: &AssessmentInput) -> CategoryScore {
    let mut points = match input.data_warehouse_solution {
        WarehouseSolution::AzureSynapse => 3.0,
        WarehouseSolution::SqlServer => 2.0,
        WarehouseSolution::NoWarehouse | WarehouseSolution::Unspecified => 1.0,
        _ => 0.0,
    };

    points += SCORED_DATA_TYPES
        .iter()
        .filter(|t| input.has_data_type(t))
        .count() as f64;

    points += (input.data_volume.as_f64() / 5.0).min(2.0);
    points += (input.real_time_needs.as_f64() / 5.0).min(2.0);

    CategoryScore::new(points)
}

/// Analytics capability readiness.
///
/// # Edge Cases
/// - An unanswered BI tool earns nothing; "None" earns 1 as a greenfield
///   opportunity
pub fn analytics_score(input: &AssessmentInput) -> CategoryScore {
    let mut points = match input.business_intelligence_tool {
        BiTool::PowerBi => 3.0,
        BiTool::SqlServerReportingServices | BiTool::Excel => 2.0,
        BiTool::NoTool => 1.0,
        _ => 0.0,
    };

    points += (input.power_bi_usage.as_f64() / THIRDS_DIVISOR).min(3.0);
    points += investment_points(
        input,
        &[
            (MicrosoftProduct::PowerBi, 2.0),
            (MicrosoftProduct::Azure, 1.0),
            (MicrosoftProduct::Dynamics365, 1.0),
        ],
    );

    CategoryScore::new(points)
}

/// Governance framework readiness.
///
/// Fewer compliance requirements and lower sovereignty needs make adoption
/// easier. Azure Data Factory in the current infrastructure adds 1.
pub fn governance_score(input: &AssessmentInput) -> CategoryScore {
    let compliance = input.compliance_count();
    let mut points = if compliance == 0 {
        2.0
    } else {
        (2.0 - compliance as f64 * 0.5).max(0.0)
    };

    points += ((10.0 - input.data_sovereignty_needs.as_f64()) / THIRDS_DIVISOR).min(3.0);
    points += investment_points(
        input,
        &[
            (MicrosoftProduct::Azure, 2.0),
            (MicrosoftProduct::Microsoft365, 1.0),
            (MicrosoftProduct::Dynamics365, 1.0),
        ],
    );

    if input.has_infrastructure(&Infrastructure::AzureDataFactory) {
        points += 1.0;
    }

    CategoryScore::new(points)
}

/// Organizational culture readiness.
pub fn culture_score(input: &AssessmentInput) -> CategoryScore {
    let mut points = (input.investment_count() as f64).min(3.0);
    points += (input.power_bi_usage.as_f64() / THIRDS_DIVISOR).min(3.0);
    points += (input.time_to_implementation.as_f64() / 5.0).min(2.0);
    points += (input.budget_constraint.as_f64() / 5.0).min(2.0);

    CategoryScore::new(points)
}

fn investment_points(input: &AssessmentInput, table: &[(MicrosoftProduct, f64)]) -> f64 {
    table
        .iter()
        .filter(|(product, _)| input.invests_in(product))
        .map(|(_, points)| points)
        .sum()
}
