//! Property tests for the scoring functions.
//!
//! Every property runs over arbitrary questionnaire answers drawn from the
//! full catalogs and slider ranges.

use std::collections::BTreeSet;
use std::fmt::Debug;

use proptest::prelude::*;

use fabric_fit::domain::assessment::{
    AssessmentInput, BiTool, ComplianceStandard, DataType, Industry, Infrastructure,
    MicrosoftProduct, ScaleField, WarehouseSolution,
};
use fabric_fit::domain::foundation::Scale;
use fabric_fit::domain::scoring::{
    analytics_score, compute_category_scores, compute_competitor_scores, compute_overall_score,
    compute_value_metrics, BusinessParameters, MAX_RISK_REDUCTION, MIN_TIME_TO_VALUE_MONTHS,
};

// =============================================================================
// Strategies
// =============================================================================

fn scale() -> impl Strategy<Value = Scale> {
    (1u8..=10).prop_map(Scale::saturating)
}

fn subset<T: Clone + Ord + Debug + 'static>(
    options: Vec<T>,
) -> impl Strategy<Value = BTreeSet<T>> {
    let len = options.len();
    prop::sample::subsequence(options, 0..=len).prop_map(|picked| picked.into_iter().collect())
}

fn assessment_input() -> impl Strategy<Value = AssessmentInput> {
    let estate = (
        subset(Infrastructure::all()),
        prop::sample::select(WarehouseSolution::all()),
        prop::sample::select(BiTool::all()),
        subset(DataType::all()),
    );
    let needs = (scale(), scale(), subset(MicrosoftProduct::all()), scale());
    let constraints = (
        scale(),
        scale(),
        subset(ComplianceStandard::all()),
        scale(),
        prop::sample::select(Industry::ALL.to_vec()),
    );

    (estate, needs, constraints).prop_map(
        |(
            (
                current_infrastructure,
                data_warehouse_solution,
                business_intelligence_tool,
                data_types,
            ),
            (data_volume, real_time_needs, microsoft_investments, power_bi_usage),
            (
                budget_constraint,
                time_to_implementation,
                compliance_requirements,
                data_sovereignty_needs,
                industry,
            ),
        )| AssessmentInput {
            current_infrastructure,
            data_warehouse_solution,
            business_intelligence_tool,
            data_types,
            data_volume,
            real_time_needs,
            microsoft_investments,
            power_bi_usage,
            budget_constraint,
            time_to_implementation,
            compliance_requirements,
            data_sovereignty_needs,
            industry,
        },
    )
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_scores_stay_in_range(input in assessment_input()) {
        let overall = compute_overall_score(&input).value();
        prop_assert!((0.0..=100.0).contains(&overall));

        for (category, score) in compute_category_scores(&input).iter() {
            prop_assert!((0.0..=10.0).contains(&score.value()), "{} = {}", category, score.value());
        }

        for competitor in compute_competitor_scores(&input) {
            prop_assert!((0.0..=100.0).contains(&competitor.score.value()), "{}", competitor.name);
        }
    }

    #[test]
    fn prop_scoring_is_deterministic(input in assessment_input()) {
        let params = BusinessParameters::default();
        let overall = compute_overall_score(&input);

        prop_assert_eq!(overall, compute_overall_score(&input));
        prop_assert_eq!(compute_category_scores(&input), compute_category_scores(&input));
        prop_assert_eq!(
            compute_value_metrics(&input, overall, &params),
            compute_value_metrics(&input, overall, &params)
        );
    }

    #[test]
    fn prop_power_bi_usage_never_lowers_scores(
        input in assessment_input(),
        low in 1u8..=10,
        high in 1u8..=10,
    ) {
        let (low, high) = (low.min(high), low.max(high));
        let lower = input.clone().with_scale(ScaleField::PowerBiUsage, Scale::saturating(low));
        let higher = input.with_scale(ScaleField::PowerBiUsage, Scale::saturating(high));

        prop_assert!(compute_overall_score(&higher) >= compute_overall_score(&lower));
        prop_assert!(analytics_score(&higher) >= analytics_score(&lower));
    }

    #[test]
    fn prop_looser_budget_never_raises_overall(
        input in assessment_input(),
        low in 1u8..=10,
        high in 1u8..=10,
    ) {
        let (low, high) = (low.min(high), low.max(high));
        let tight = input.clone().with_scale(ScaleField::BudgetConstraint, Scale::saturating(low));
        let loose = input.with_scale(ScaleField::BudgetConstraint, Scale::saturating(high));

        prop_assert!(compute_overall_score(&loose) <= compute_overall_score(&tight));
    }

    #[test]
    fn prop_value_metrics_respect_bounds(input in assessment_input()) {
        let overall = compute_overall_score(&input);
        let metrics = compute_value_metrics(&input, overall, &BusinessParameters::default());
        prop_assert!(metrics.is_ok(), "{:?}", metrics);

        let metrics = metrics.unwrap();
        prop_assert!(metrics.time_to_value_months >= MIN_TIME_TO_VALUE_MONTHS);
        prop_assert!(metrics.risk_reduction <= MAX_RISK_REDUCTION);
        prop_assert!((1..=10).contains(&metrics.data_driven_benefit_score));
        prop_assert!(metrics.cost_savings >= 0.0);
    }

    #[test]
    fn prop_readiness_percent_is_bounded(input in assessment_input()) {
        prop_assert!(compute_category_scores(&input).readiness_percent() <= 100);
    }
}

#[test]
fn data_volume_seven_starts_the_top_tier() {
    let six = AssessmentInput::default().with_scale(ScaleField::DataVolume, Scale::saturating(6));
    let seven = AssessmentInput::default().with_scale(ScaleField::DataVolume, Scale::saturating(7));

    // +15 against +10
    assert_eq!(
        compute_overall_score(&seven).value() - compute_overall_score(&six).value(),
        5.0
    );
}
