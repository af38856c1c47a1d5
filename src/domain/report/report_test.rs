#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use crate::domain::assessment::{AssessmentInput, Industry, MicrosoftProduct, ScaleField};
    use crate::domain::foundation::{Scale, Timestamp};
    use crate::domain::report::AssessmentReport;
    use crate::domain::scoring::{
        Alternative, BusinessParameters, ComparisonOutcome, FitTier, ScoringError,
    };

    fn scale(value: u8) -> Scale {
        Scale::try_new(value).unwrap()
    }

    fn fixed_time() -> Timestamp {
        let dt = DateTime::parse_from_rfc3339("2025-03-01T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Timestamp::from_datetime(dt)
    }

    fn microsoft_shop() -> AssessmentInput {
        AssessmentInput::default()
            .with_investments([MicrosoftProduct::Azure, MicrosoftProduct::PowerBi])
            .with_scale(ScaleField::PowerBiUsage, scale(8))
            .with_scale(ScaleField::RealTimeNeeds, scale(5))
            .with_scale(ScaleField::DataVolume, scale(8))
            .with_scale(ScaleField::BudgetConstraint, scale(3))
            .with_industry(Industry::Manufacturing)
    }

    #[test]
    fn test_report_assembles_every_section() {
        let report = AssessmentReport::generate(
            microsoft_shop(),
            &BusinessParameters::default(),
            Alternative::Aws,
            fixed_time(),
        )
        .unwrap();

        assert_eq!(report.overall_score.value(), 79.0);
        assert_eq!(report.tier.tier, FitTier::Good);
        assert_eq!(report.competitors.len(), 4);
        assert_eq!(report.comparison.competitor.alternative, Alternative::Aws);
        assert_eq!(report.industry.name, "Manufacturing");
        assert_eq!(report.platform_benefits.len(), 6);
        assert_eq!(report.report_date(), "2025-03-01");
    }

    #[test]
    fn test_report_compares_against_selected_alternative() {
        // AWS: 65 + 0 + 0 + 0 + 0 = 65 against 79
        let report = AssessmentReport::generate(
            microsoft_shop(),
            &BusinessParameters::default(),
            Alternative::Aws,
            fixed_time(),
        )
        .unwrap();
        assert_eq!(report.comparison.outcome, ComparisonOutcome::MarginallyBetter);

        // Snowflake: 70 + 10 (volume 8) + 5 (two investments) = 85 against 79
        let report = AssessmentReport::generate(
            microsoft_shop(),
            &BusinessParameters::default(),
            Alternative::Snowflake,
            fixed_time(),
        )
        .unwrap();
        assert_eq!(report.comparison.outcome, ComparisonOutcome::MarginallyWorse);
    }

    #[test]
    fn test_report_opportunity_cost_uses_hourly_rate() {
        let params = BusinessParameters::new(1_000, 250_000.0, 100.0).unwrap();
        let report =
            AssessmentReport::generate(microsoft_shop(), &params, Alternative::Aws, fixed_time())
                .unwrap();

        let expected = report.value_metrics.cost_savings
            + report.value_metrics.annual_productivity_hours as f64 * 100.0;
        assert_eq!(report.annual_opportunity_cost, expected);
        assert_eq!(report.business_parameters, params);
    }

    #[test]
    fn test_report_fails_on_invalid_parameters() {
        let params = BusinessParameters {
            average_hourly_rate: 0.0,
            ..BusinessParameters::default()
        };
        let result =
            AssessmentReport::generate(microsoft_shop(), &params, Alternative::Aws, fixed_time());
        assert!(matches!(result, Err(ScoringError::InvalidParameter(_))));
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = AssessmentReport::generate(
            microsoft_shop(),
            &BusinessParameters::default(),
            Alternative::Databricks,
            fixed_time(),
        )
        .unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["overallScore"], 79.0);
        assert_eq!(json["tier"]["label"], "Good fit");
        assert_eq!(json["input"]["industry"], "manufacturing");
        assert!(json["generatedAt"].as_str().unwrap().starts_with("2025-03-01"));
        assert!(json["valueMetrics"]["threeYearRoiPercent"].is_i64());
        assert_eq!(json["comparison"]["competitor"]["name"], "Databricks");
    }

    #[test]
    fn test_report_exports_pretty_json() {
        let report = AssessmentReport::generate(
            microsoft_shop(),
            &BusinessParameters::default(),
            Alternative::Aws,
            fixed_time(),
        )
        .unwrap();
        let exported = report.to_json().unwrap();

        assert!(exported.contains("\n  \"generatedAt\""));
        let parsed: serde_json::Value = serde_json::from_str(&exported).unwrap();
        assert_eq!(parsed["platformBenefits"][0]["title"], "Unified Platform");
    }
}
