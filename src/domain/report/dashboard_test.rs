#[cfg(test)]
mod tests {
    use crate::domain::assessment::{
        AssessmentInput, ComplianceStandard, MicrosoftProduct, ScaleField,
    };
    use crate::domain::foundation::{CategoryScore, FitScore, Scale};
    use crate::domain::report::dashboard::{
        capability_alignment, category_risks, ecosystem_fit, implementation_readiness,
        key_factors, readiness_radar, ResultsDashboard, RiskLevel, PLATFORM_CAPABILITY,
    };
    use crate::domain::scoring::{compute_category_scores, Category, CategoryScores, GaugeBand};

    fn scale(value: u8) -> Scale {
        Scale::try_new(value).unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // Risk levels
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn test_risk_level_boundaries() {
        let level = |s: f64| RiskLevel::from_score(CategoryScore::new(s));
        assert_eq!(level(7.5), RiskLevel::Low);
        assert_eq!(level(7.49), RiskLevel::Medium);
        assert_eq!(level(5.0), RiskLevel::Medium);
        assert_eq!(level(4.9), RiskLevel::High);
        assert_eq!(level(2.5), RiskLevel::High);
        assert_eq!(level(2.4), RiskLevel::Extreme);
    }

    #[test]
    fn test_category_risks_follow_report_order() {
        let scores = CategoryScores {
            data: CategoryScore::new(9.0),
            analytics: CategoryScore::new(6.0),
            governance: CategoryScore::new(3.0),
            culture: CategoryScore::new(1.0),
        };
        let risks = category_risks(&scores);

        let levels: Vec<_> = risks.iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            vec![RiskLevel::Low, RiskLevel::Medium, RiskLevel::High, RiskLevel::Extreme]
        );
        assert_eq!(risks[2].category, Category::Governance);
    }

    // ───────────────────────────────────────────────────────────────
    // Readiness radar
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn test_ecosystem_fit_from_investments_and_usage() {
        let input = AssessmentInput::default()
            .with_investments([MicrosoftProduct::Azure, MicrosoftProduct::Dynamics365])
            .with_scale(ScaleField::PowerBiUsage, scale(7));
        // 3.5 + 2 + 1
        assert_eq!(ecosystem_fit(&input), 6.5);
    }

    #[test]
    fn test_ecosystem_fit_caps_at_ten() {
        let input = AssessmentInput::default()
            .with_investments(MicrosoftProduct::all())
            .with_scale(ScaleField::PowerBiUsage, scale(10));
        assert_eq!(ecosystem_fit(&input), 10.0);
    }

    #[test]
    fn test_implementation_readiness_defaults_to_midpoint() {
        assert_eq!(implementation_readiness(&AssessmentInput::default()), 5.0);
    }

    #[test]
    fn test_implementation_readiness_penalizes_complexity() {
        let input = AssessmentInput::default()
            .with_compliance(ComplianceStandard::all())
            .with_scale(ScaleField::DataVolume, scale(9))
            .with_scale(ScaleField::RealTimeNeeds, scale(9))
            .with_scale(ScaleField::BudgetConstraint, scale(1))
            .with_scale(ScaleField::TimeToImplementation, scale(1));
        // 5 - 2 - 2 - 3 is below zero
        assert_eq!(implementation_readiness(&input), 0.0);
    }

    #[test]
    fn test_implementation_readiness_rewards_footprint() {
        let input = AssessmentInput::default()
            .with_investments([
                MicrosoftProduct::Azure,
                MicrosoftProduct::PowerBi,
                MicrosoftProduct::SharePoint,
            ])
            .with_scale(ScaleField::PowerBiUsage, scale(7))
            .with_scale(ScaleField::BudgetConstraint, scale(8));
        // 5 + 1.5 + 1 + 1
        assert_eq!(implementation_readiness(&input), 8.5);
    }

    #[test]
    fn test_readiness_radar_has_six_rounded_axes() {
        let input = AssessmentInput::default();
        let scores = compute_category_scores(&input);
        let radar = readiness_radar(&input, &scores);

        assert_eq!(radar.len(), 6);
        assert_eq!(radar[0].label, Category::Data.label());
        assert_eq!(radar[4].label, "Microsoft Ecosystem Fit");
        assert_eq!(radar[5].label, "Implementation Readiness");
        for axis in &radar {
            assert_eq!((axis.value * 10.0).round() / 10.0, axis.value, "{}", axis.label);
            assert!((0.0..=10.0).contains(&axis.value));
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Capability alignment
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn test_capability_alignment_axes() {
        let input = AssessmentInput::default()
            .with_investments([MicrosoftProduct::Azure, MicrosoftProduct::PowerBi])
            .with_compliance([ComplianceStandard::Gdpr, ComplianceStandard::Hipaa])
            .with_scale(ScaleField::PowerBiUsage, scale(8))
            .with_scale(ScaleField::BudgetConstraint, scale(3))
            .with_scale(ScaleField::DataSovereigntyNeeds, scale(6));
        let axes = capability_alignment(&input);

        let organization: Vec<f64> = axes.iter().map(|a| a.organization).collect();
        // ecosystem 3 + 4, volume 5, real-time 5, cost 8, security 5 + 2 + 3, integration 4
        assert_eq!(organization, vec![7.0, 5.0, 5.0, 8.0, 10.0, 4.0]);

        let platform: Vec<f64> = axes.iter().map(|a| a.platform).collect();
        assert_eq!(platform, PLATFORM_CAPABILITY.to_vec());
        assert_eq!(axes[3].headroom(), -1.0);
    }

    #[test]
    fn test_cost_efficiency_floors_at_one() {
        let input = AssessmentInput::default().with_scale(ScaleField::BudgetConstraint, scale(10));
        assert_eq!(capability_alignment(&input)[3].organization, 1.0);
    }

    // ───────────────────────────────────────────────────────────────
    // Key factors
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn test_key_factors_empty_for_defaults() {
        assert!(key_factors(&AssessmentInput::default()).is_empty());
    }

    #[test]
    fn test_key_factors_in_display_order() {
        let input = AssessmentInput::default()
            .with_investments([MicrosoftProduct::PowerBi, MicrosoftProduct::Azure])
            .with_scale(ScaleField::PowerBiUsage, scale(8))
            .with_scale(ScaleField::DataVolume, scale(8))
            .with_scale(ScaleField::RealTimeNeeds, scale(8))
            .with_scale(ScaleField::BudgetConstraint, scale(4));
        let factors = key_factors(&input);

        assert_eq!(factors.len(), 5);
        assert_eq!(factors[0], "Existing Microsoft investments: Azure, Power BI");
        assert!(factors[1].starts_with("Strong Power BI utilization"));
        assert!(factors[4].contains("budget constraints"));
    }

    // ───────────────────────────────────────────────────────────────
    // ResultsDashboard
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn test_dashboard_serializes_camel_case() {
        let input = AssessmentInput::default();
        let scores = compute_category_scores(&input);
        let dashboard = ResultsDashboard::build(&input, FitScore::new(55.0), &scores);

        assert_eq!(dashboard.gauge, GaugeBand::Moderate);
        let json = serde_json::to_value(&dashboard).unwrap();
        assert!(json["categoryRisks"].is_array());
        assert!(json["readinessRadar"].is_array());
        assert_eq!(json["capabilityAlignment"][0]["platform"], 10.0);
        assert_eq!(json["gauge"], "moderate");
    }
}
