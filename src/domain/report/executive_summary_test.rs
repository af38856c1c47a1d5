#[cfg(test)]
mod tests {
    use crate::domain::foundation::CategoryScore;
    use crate::domain::report::executive_summary::{
        ExecutiveSummary, RoiOutlook, MAINTAIN_EXCELLENCE,
    };
    use crate::domain::scoring::{Category, CategoryScores, ReadinessLevel};

    fn scores(data: f64, analytics: f64, governance: f64, culture: f64) -> CategoryScores {
        CategoryScores {
            data: CategoryScore::new(data),
            analytics: CategoryScore::new(analytics),
            governance: CategoryScore::new(governance),
            culture: CategoryScore::new(culture),
        }
    }

    #[test]
    fn test_summary_high_readiness_maintains_excellence() {
        let summary = ExecutiveSummary::from_scores(&scores(9.0, 8.0, 7.0, 8.0));

        assert_eq!(summary.readiness_percent, 80);
        assert_eq!(summary.readiness_level, ReadinessLevel::High);
        assert_eq!(summary.roi_outlook, RoiOutlook::High);
        assert_eq!(summary.key_recommendations, vec![MAINTAIN_EXCELLENCE]);
    }

    #[test]
    fn test_summary_recommends_per_weak_category_in_order() {
        let summary = ExecutiveSummary::from_scores(&scores(6.9, 8.0, 2.0, 5.0));

        assert_eq!(summary.key_recommendations.len(), 3);
        assert!(summary.key_recommendations[0].starts_with("Enhance data integration"));
        assert!(summary.key_recommendations[1].starts_with("Establish robust data governance"));
        assert!(summary.key_recommendations[2].starts_with("Develop a data culture"));
    }

    #[test]
    fn test_summary_picks_strength_and_opportunity() {
        let summary = ExecutiveSummary::from_scores(&scores(4.0, 9.5, 3.2, 6.0));

        assert_eq!(summary.top_strength.category, Category::Analytics);
        assert_eq!(summary.top_strength.name, "Analytics Capabilities");
        assert_eq!(summary.top_opportunity.category, Category::Governance);
        assert_eq!(summary.top_opportunity.score, CategoryScore::new(3.2));
    }

    #[test]
    fn test_summary_ties_resolve_to_earlier_category() {
        let summary = ExecutiveSummary::from_scores(&scores(5.0, 5.0, 5.0, 5.0));

        assert_eq!(summary.top_strength.category, Category::Data);
        assert_eq!(summary.top_opportunity.category, Category::Data);
    }

    #[test]
    fn test_readiness_bands() {
        // 24 / 40 = 60%
        let medium = ExecutiveSummary::from_scores(&scores(6.0, 6.0, 6.0, 6.0));
        assert_eq!(medium.readiness_level, ReadinessLevel::Medium);
        assert_eq!(medium.roi_outlook, RoiOutlook::Moderate);

        // 16 / 40 = 40%
        let low = ExecutiveSummary::from_scores(&scores(4.0, 4.0, 4.0, 4.0));
        assert_eq!(low.readiness_level, ReadinessLevel::Low);
        assert_eq!(low.roi_outlook, RoiOutlook::LongTerm);
    }

    #[test]
    fn test_roi_outlook_boundaries() {
        assert_eq!(RoiOutlook::from_readiness(75), RoiOutlook::High);
        assert_eq!(RoiOutlook::from_readiness(74), RoiOutlook::Moderate);
        assert_eq!(RoiOutlook::from_readiness(50), RoiOutlook::Moderate);
        assert_eq!(RoiOutlook::from_readiness(49), RoiOutlook::LongTerm);
        assert!(RoiOutlook::LongTerm.text().contains("18+ months"));
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = ExecutiveSummary::from_scores(&scores(6.0, 6.0, 6.0, 6.0));
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["readinessPercent"], 60);
        assert_eq!(json["readinessLevel"], "medium");
        assert_eq!(json["topStrength"]["name"], "Data Integration");
        assert!(json["keyRecommendations"].is_array());
    }
}
