//! The questionnaire answer record every score is computed from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::catalog::{
    BiTool, ComplianceStandard, DataType, Infrastructure, MicrosoftProduct, WarehouseSolution,
};
use super::industry::Industry;
use crate::domain::foundation::Scale;

/// A completed set of questionnaire answers.
///
/// Deserializes from the questionnaire's camelCase JSON. Every field is
/// required except `industry`, which falls back to general business.
/// Multi-select answers are sets, so duplicates collapse and counts are
/// counts of distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    pub current_infrastructure: BTreeSet<Infrastructure>,
    pub data_warehouse_solution: WarehouseSolution,
    pub business_intelligence_tool: BiTool,
    pub data_types: BTreeSet<DataType>,
    pub data_volume: Scale,
    pub real_time_needs: Scale,
    pub microsoft_investments: BTreeSet<MicrosoftProduct>,
    pub power_bi_usage: Scale,
    /// 10 means unconstrained.
    pub budget_constraint: Scale,
    /// 1 means urgent.
    pub time_to_implementation: Scale,
    pub compliance_requirements: BTreeSet<ComplianceStandard>,
    pub data_sovereignty_needs: Scale,
    #[serde(default)]
    pub industry: Industry,
}

impl Default for AssessmentInput {
    /// The questionnaire's starting state: nothing selected, every slider at 5.
    fn default() -> Self {
        Self {
            current_infrastructure: BTreeSet::new(),
            data_warehouse_solution: WarehouseSolution::Unspecified,
            business_intelligence_tool: BiTool::Unspecified,
            data_types: BTreeSet::new(),
            data_volume: Scale::MIDPOINT,
            real_time_needs: Scale::MIDPOINT,
            microsoft_investments: BTreeSet::new(),
            power_bi_usage: Scale::MIDPOINT,
            budget_constraint: Scale::MIDPOINT,
            time_to_implementation: Scale::MIDPOINT,
            compliance_requirements: BTreeSet::new(),
            data_sovereignty_needs: Scale::MIDPOINT,
            industry: Industry::General,
        }
    }
}

impl AssessmentInput {
    pub fn with_infrastructure(
        mut self,
        entries: impl IntoIterator<Item = Infrastructure>,
    ) -> Self {
        self.current_infrastructure = entries.into_iter().collect();
        self
    }

    pub fn with_warehouse(mut self, warehouse: WarehouseSolution) -> Self {
        self.data_warehouse_solution = warehouse;
        self
    }

    pub fn with_bi_tool(mut self, tool: BiTool) -> Self {
        self.business_intelligence_tool = tool;
        self
    }

    pub fn with_data_types(mut self, types: impl IntoIterator<Item = DataType>) -> Self {
        self.data_types = types.into_iter().collect();
        self
    }

    pub fn with_investments(
        mut self,
        products: impl IntoIterator<Item = MicrosoftProduct>,
    ) -> Self {
        self.microsoft_investments = products.into_iter().collect();
        self
    }

    pub fn with_compliance(
        mut self,
        standards: impl IntoIterator<Item = ComplianceStandard>,
    ) -> Self {
        self.compliance_requirements = standards.into_iter().collect();
        self
    }

    /// Sets one slider answer.
    pub fn with_scale(mut self, field: ScaleField, value: Scale) -> Self {
        self.set_scale(field, value);
        self
    }

    pub fn with_industry(mut self, industry: Industry) -> Self {
        self.industry = industry;
        self
    }

    /// Returns the answer for one slider.
    pub fn scale(&self, field: ScaleField) -> Scale {
        match field {
            ScaleField::DataVolume => self.data_volume,
            ScaleField::RealTimeNeeds => self.real_time_needs,
            ScaleField::PowerBiUsage => self.power_bi_usage,
            ScaleField::BudgetConstraint => self.budget_constraint,
            ScaleField::TimeToImplementation => self.time_to_implementation,
            ScaleField::DataSovereigntyNeeds => self.data_sovereignty_needs,
        }
    }

    pub(crate) fn set_scale(&mut self, field: ScaleField, value: Scale) {
        let slot = match field {
            ScaleField::DataVolume => &mut self.data_volume,
            ScaleField::RealTimeNeeds => &mut self.real_time_needs,
            ScaleField::PowerBiUsage => &mut self.power_bi_usage,
            ScaleField::BudgetConstraint => &mut self.budget_constraint,
            ScaleField::TimeToImplementation => &mut self.time_to_implementation,
            ScaleField::DataSovereigntyNeeds => &mut self.data_sovereignty_needs,
        };
        *slot = value;
    }

    /// Returns true if the organization already invests in `product`.
    pub fn invests_in(&self, product: &MicrosoftProduct) -> bool {
        self.microsoft_investments.contains(product)
    }

    pub fn has_infrastructure(&self, entry: &Infrastructure) -> bool {
        self.current_infrastructure.contains(entry)
    }

    pub fn has_data_type(&self, data_type: &DataType) -> bool {
        self.data_types.contains(data_type)
    }

    /// Number of distinct Microsoft investments, recognized or not.
    pub fn investment_count(&self) -> usize {
        self.microsoft_investments.len()
    }

    /// Number of distinct compliance requirements, recognized or not.
    pub fn compliance_count(&self) -> usize {
        self.compliance_requirements.len()
    }
}

/// The questionnaire's 1-10 slider questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleField {
    DataVolume,
    RealTimeNeeds,
    PowerBiUsage,
    BudgetConstraint,
    TimeToImplementation,
    DataSovereigntyNeeds,
}

impl ScaleField {
    pub const ALL: [ScaleField; 6] = [
        ScaleField::DataVolume,
        ScaleField::RealTimeNeeds,
        ScaleField::PowerBiUsage,
        ScaleField::BudgetConstraint,
        ScaleField::TimeToImplementation,
        ScaleField::DataSovereigntyNeeds,
    ];

    /// Returns the wire name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            ScaleField::DataVolume => "dataVolume",
            ScaleField::RealTimeNeeds => "realTimeNeeds",
            ScaleField::PowerBiUsage => "powerBiUsage",
            ScaleField::BudgetConstraint => "budgetConstraint",
            ScaleField::TimeToImplementation => "timeToImplementation",
            ScaleField::DataSovereigntyNeeds => "dataSovereigntyNeeds",
        }
    }
}
