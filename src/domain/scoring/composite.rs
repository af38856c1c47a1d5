//! Composite Score Calculator - The single 0-100 platform suitability score.

use crate::domain::assessment::{AssessmentInput, MicrosoftProduct};
use crate::domain::foundation::FitScore;

/// Points awarded per existing Microsoft investment.
const INVESTMENT_POINTS: [(MicrosoftProduct, f64); 4] = [
    (MicrosoftProduct::Azure, 15.0),
    (MicrosoftProduct::PowerBi, 15.0),
    (MicrosoftProduct::Dynamics365, 10.0),
    (MicrosoftProduct::Microsoft365, 5.0),
];

/// Computes the overall suitability score.
///
/// Points accumulate additively and are clamped to 0-100 once, at the end:
/// - Azure +15, Power BI +15, Dynamics 365 +10, Microsoft 365 +5
/// - `power_bi_usage * 2`
/// - `real_time_needs * 1.5`
/// - data volume tier: +15 from 7, +10 from 4, +5 below
/// - `(10 - budget_constraint) * 1.5`
///
/// # Edge Cases
/// - No investments and minimum sliders: 8.5 (usage 2, real-time 1.5,
///   volume 5, budget 0 at an unconstrained budget of 10)
/// - Unrecognized investments contribute nothing
pub fn compute_overall_score(input: &AssessmentInput) -> FitScore {
    let mut points: f64 = INVESTMENT_POINTS
        .iter()
        .filter(|(product, _)| input.invests_in(product))
        .map(|(_, points)| points)
        .sum();

    points += input.power_bi_usage.as_f64() * 2.0;
    points += input.real_time_needs.as_f64() * 1.5;
    points += data_volume_points(input.data_volume.value());
    points += (10.0 - input.budget_constraint.as_f64()) * 1.5;

    FitScore::new(points)
}

fn data_volume_points(volume: u8) -> f64 {
    match volume {
        7.. => 15.0,
        4..=6 => 10.0,
        _ => 5.0,
    }
}
