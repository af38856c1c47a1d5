//! Derived Value Metrics - Business case projections.
//!
//! Projections combine the answers, the overall score and three business
//! parameters the user can tune. Industry multipliers scale the cost,
//! time-to-value and productivity calculations.

use serde::{Deserialize, Serialize};

use super::errors::ScoringError;
use crate::domain::assessment::{AssessmentInput, MicrosoftProduct};
use crate::domain::foundation::{FitScore, ValidationError};

/// Share of employees assumed to be knowledge workers who benefit.
const KNOWLEDGE_WORKER_SHARE: f64 = 0.30;

/// Baseline implementation time before adjustments.
const BASELINE_MONTHS: f64 = 12.0;

/// Shortest time-to-value ever reported.
pub const MIN_TIME_TO_VALUE_MONTHS: u32 = 3;

/// Upper bound of the risk reduction score.
pub const MAX_RISK_REDUCTION: u8 = 10;

/// User-tunable inputs to the business case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessParameters {
    /// Number of employees.
    pub organization_size: u32,
    /// Current yearly spend on the data estate.
    pub current_annual_costs: f64,
    pub average_hourly_rate: f64,
}

impl Default for BusinessParameters {
    fn default() -> Self {
        Self {
            organization_size: 500,
            current_annual_costs: 500_000.0,
            average_hourly_rate: 75.0,
        }
    }
}

impl BusinessParameters {
    /// Creates validated parameters.
    pub fn new(
        organization_size: u32,
        current_annual_costs: f64,
        average_hourly_rate: f64,
    ) -> Result<Self, ValidationError> {
        let params = Self {
            organization_size,
            current_annual_costs,
            average_hourly_rate,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks every parameter is strictly positive and finite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.organization_size == 0 {
            return Err(ValidationError::not_positive("organizationSize", 0.0));
        }
        require_positive("currentAnnualCosts", self.current_annual_costs)?;
        require_positive("averageHourlyRate", self.average_hourly_rate)?;
        Ok(())
    }

    /// Raises every parameter to at least 1, the calculator's input floor.
    ///
    /// Non-numeric values are treated as below the floor.
    pub fn clamped(self) -> Self {
        Self {
            organization_size: self.organization_size.max(1),
            current_annual_costs: at_least_one(self.current_annual_costs),
            average_hourly_rate: at_least_one(self.average_hourly_rate),
        }
    }
}

fn require_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::not_positive(field, value))
    }
}

fn at_least_one(value: f64) -> f64 {
    if value >= 1.0 {
        value
    } else {
        1.0
    }
}

/// Projected business value of adopting the platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueMetrics {
    /// Yearly savings in whole currency units.
    pub cost_savings: f64,
    pub time_to_value_months: u32,
    pub annual_productivity_hours: u64,
    pub three_year_roi_percent: i64,
    /// 5-10.
    pub risk_reduction: u8,
    /// 1-10.
    pub data_driven_benefit_score: u8,
}

impl ValueMetrics {
    /// Yearly value forgone by not adopting: savings plus productivity value.
    pub fn annual_opportunity_cost(&self, average_hourly_rate: f64) -> f64 {
        self.cost_savings + self.annual_productivity_hours as f64 * average_hourly_rate
    }
}

/// Computes the business value projections.
///
/// # Errors
///
/// - `ScoringError::InvalidParameter` if any business parameter is not
///   strictly positive
/// - `ScoringError::DegenerateRoiDenominator` if the projected three-year
///   platform cost is not positive, which happens when rounded savings
///   exceed very small annual costs
pub fn compute_value_metrics(
    input: &AssessmentInput,
    overall: FitScore,
    params: &BusinessParameters,
) -> Result<ValueMetrics, ScoringError> {
    params.validate()?;

    let cost_savings = cost_savings(input, overall, params.current_annual_costs);
    let annual_productivity_hours = productivity_hours(input, overall, params.organization_size);
    let productivity_value = annual_productivity_hours as f64 * params.average_hourly_rate;

    Ok(ValueMetrics {
        cost_savings,
        time_to_value_months: time_to_value_months(input),
        annual_productivity_hours,
        three_year_roi_percent: three_year_roi(
            cost_savings,
            productivity_value,
            params.current_annual_costs,
        )?,
        risk_reduction: risk_reduction(input),
        data_driven_benefit_score: data_driven_benefit_score(overall),
    })
}

/// Yearly savings, rounded to whole currency units.
///
/// Base rate by warehouse: legacy `0.25 + s/400`, competitor platform
/// `0.15 + s/500`, anything else `0.10 + s/1000`. Azure and Power BI
/// investments add 0.05 each.
fn cost_savings(input: &AssessmentInput, overall: FitScore, annual_costs: f64) -> f64 {
    let score = overall.value();
    let warehouse = &input.data_warehouse_solution;

    let mut rate = if warehouse.is_legacy() {
        0.25 + score / 400.0
    } else if warehouse.is_competitor_platform() {
        0.15 + score / 500.0
    } else {
        0.10 + score / 1000.0
    };
    if input.invests_in(&MicrosoftProduct::Azure) {
        rate += 0.05;
    }
    if input.invests_in(&MicrosoftProduct::PowerBi) {
        rate += 0.05;
    }

    (annual_costs * rate * input.industry.multipliers().cost_savings).round()
}

fn time_to_value_months(input: &AssessmentInput) -> u32 {
    let mut months = BASELINE_MONTHS;
    if input.invests_in(&MicrosoftProduct::Azure) {
        months -= 2.0;
    }
    if input.invests_in(&MicrosoftProduct::PowerBi) {
        months -= 1.0;
    }
    if input.power_bi_usage.value() > 7 {
        months -= 2.0;
    }
    if input.data_volume.value() > 8 {
        months += 2.0;
    }
    if input.real_time_needs.value() > 8 {
        months += 1.0;
    }
    if input.compliance_count() > 3 {
        months += 2.0;
    }

    floor_months(months * input.industry.multipliers().time_to_value)
}

fn floor_months(months: f64) -> u32 {
    // Never negative after the floor, and far below u32::MAX.
    months.round().max(f64::from(MIN_TIME_TO_VALUE_MONTHS)) as u32
}

fn productivity_hours(input: &AssessmentInput, overall: FitScore, organization_size: u32) -> u64 {
    let hours_per_employee = match overall.value() {
        s if s >= 80.0 => 52.0,
        s if s >= 60.0 => 26.0,
        _ => 13.0,
    };
    let hours = f64::from(organization_size)
        * KNOWLEDGE_WORKER_SHARE
        * hours_per_employee
        * input.industry.multipliers().productivity;
    hours.round() as u64
}

/// Three-year ROI percentage.
///
/// Benefit is three years of savings plus productivity value. Cost is a
/// one-off implementation at half the current annual cost plus three years
/// at 80% of the remaining spend.
fn three_year_roi(
    cost_savings: f64,
    productivity_value: f64,
    annual_costs: f64,
) -> Result<i64, ScoringError> {
    let benefit = 3.0 * (cost_savings + productivity_value);
    let cost = annual_costs * 0.5 + (annual_costs - cost_savings) * 0.8 * 3.0;

    if !(cost > 0.0 && cost.is_finite()) {
        return Err(ScoringError::degenerate_roi(cost));
    }

    let roi = round_half_up((benefit - cost) / cost * 100.0);
    // Saturating cast; ROI percentages are far inside i64.
    Ok(roi as i64)
}

/// Rounds half-way values toward positive infinity, so -2.5 becomes -2.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn risk_reduction(input: &AssessmentInput) -> u8 {
    let flags = [
        input.compliance_count() > 2,
        input.data_sovereignty_needs.value() > 7,
        input.invests_in(&MicrosoftProduct::Azure),
        input.invests_in(&MicrosoftProduct::Microsoft365),
        input.power_bi_usage.value() > 7,
    ];
    let bonus = flags.iter().filter(|set| **set).count() as u8;
    (5 + bonus).min(MAX_RISK_REDUCTION)
}

fn data_driven_benefit_score(overall: FitScore) -> u8 {
    (overall.value() / 20.0 + 2.0).round().clamp(1.0, 10.0) as u8
}
