//! Questionnaire wizard state.
//!
//! Two state machines drive the questionnaire:
//!
//! - [`WizardStep`] moves through the four question pages, one page at a time.
//! - [`AssessmentStage`] moves a session from answering, through the results,
//!   comparison and report views, and back to a fresh questionnaire on restart.
//!
//! Answers are collected by [`QuestionnaireDraft`], a reducer: every
//! [`DraftAction`] produces a new draft, and the draft only becomes an
//! [`AssessmentInput`] when submitted from the last page.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::catalog::{
    BiTool, ComplianceStandard, DataType, Infrastructure, MicrosoftProduct, WarehouseSolution,
};
use super::industry::Industry;
use super::input::{AssessmentInput, ScaleField};
use crate::domain::foundation::{Scale, StateMachine, ValidationError};

/// A page of the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Infrastructure,
    DataProfile,
    MicrosoftEcosystem,
    Requirements,
}

impl WizardStep {
    pub const COUNT: u8 = 4;

    /// Returns the 1-based page number.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Infrastructure => 1,
            WizardStep::DataProfile => 2,
            WizardStep::MicrosoftEcosystem => 3,
            WizardStep::Requirements => 4,
        }
    }

    /// Returns the progress bar fill, 25 per completed page.
    pub fn progress_percent(&self) -> u8 {
        match self {
            WizardStep::Infrastructure => 25,
            WizardStep::DataProfile => 50,
            WizardStep::MicrosoftEcosystem => 75,
            WizardStep::Requirements => 100,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Infrastructure => "Current Infrastructure",
            WizardStep::DataProfile => "Data Characteristics",
            WizardStep::MicrosoftEcosystem => "Microsoft Ecosystem",
            WizardStep::Requirements => "Business Requirements & Compliance",
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            WizardStep::Infrastructure => Some(WizardStep::DataProfile),
            WizardStep::DataProfile => Some(WizardStep::MicrosoftEcosystem),
            WizardStep::MicrosoftEcosystem => Some(WizardStep::Requirements),
            WizardStep::Requirements => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            WizardStep::Infrastructure => None,
            WizardStep::DataProfile => Some(WizardStep::Infrastructure),
            WizardStep::MicrosoftEcosystem => Some(WizardStep::DataProfile),
            WizardStep::Requirements => Some(WizardStep::MicrosoftEcosystem),
        }
    }

    /// Returns true on the page that submits the questionnaire.
    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

impl StateMachine for WizardStep {
    /// Pages are visited in order; only adjacent moves are allowed.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next().as_ref() == Some(target) || self.previous().as_ref() == Some(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.previous().into_iter().chain(self.next()).collect()
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The view an assessment session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStage {
    #[default]
    Assessment,
    Results,
    Comparison,
    Report,
}

impl StateMachine for AssessmentStage {
    /// Valid transitions:
    /// - Assessment -> Results (questionnaire submitted)
    /// - Results -> Comparison
    /// - Comparison -> Report
    /// - Report -> Assessment (restart)
    fn can_transition_to(&self, target: &Self) -> bool {
        use AssessmentStage::*;
        matches!(
            (self, target),
            (Assessment, Results)
                | (Results, Comparison)
                | (Comparison, Report)
                | (Report, Assessment)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AssessmentStage::*;
        match self {
            Assessment => vec![Results],
            Results => vec![Comparison],
            Comparison => vec![Report],
            Report => vec![Assessment],
        }
    }
}

/// Membership toggle for one of the multi-select questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetToggle {
    CurrentInfrastructure(Infrastructure),
    DataTypes(DataType),
    MicrosoftInvestments(MicrosoftProduct),
    ComplianceRequirements(ComplianceStandard),
}

impl SetToggle {
    /// Returns the wire name of the toggled field.
    pub fn field_name(&self) -> &'static str {
        match self {
            SetToggle::CurrentInfrastructure(_) => "currentInfrastructure",
            SetToggle::DataTypes(_) => "dataTypes",
            SetToggle::MicrosoftInvestments(_) => "microsoftInvestments",
            SetToggle::ComplianceRequirements(_) => "complianceRequirements",
        }
    }
}

/// A single questionnaire edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftAction {
    Toggle(SetToggle),
    SetScale { field: ScaleField, value: Scale },
    SetWarehouse(WarehouseSolution),
    SetBiTool(BiTool),
    SetIndustry(Industry),
    NextStep,
    PreviousStep,
}

/// An in-progress questionnaire: the current page plus the answers so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionnaireDraft {
    step: WizardStep,
    answers: AssessmentInput,
}

impl QuestionnaireDraft {
    /// Starts a questionnaire on the first page with default answers.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn answers(&self) -> &AssessmentInput {
        &self.answers
    }

    /// Applies one edit, returning the resulting draft.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` when navigating past the
    /// first or last page.
    pub fn apply(&self, action: DraftAction) -> Result<Self, ValidationError> {
        let mut next = self.clone();
        match action {
            DraftAction::Toggle(toggle) => next.toggle(toggle),
            DraftAction::SetScale { field, value } => next.answers.set_scale(field, value),
            DraftAction::SetWarehouse(warehouse) => {
                next.answers.data_warehouse_solution = warehouse
            }
            DraftAction::SetBiTool(tool) => next.answers.business_intelligence_tool = tool,
            DraftAction::SetIndustry(industry) => next.answers.industry = industry,
            DraftAction::NextStep => {
                let target = self.step.next().ok_or_else(|| {
                    ValidationError::invalid_format("wizard_step", "no step after Requirements")
                })?;
                next.step = self.step.transition_to(target)?;
            }
            DraftAction::PreviousStep => {
                let target = self.step.previous().ok_or_else(|| {
                    ValidationError::invalid_format("wizard_step", "no step before Infrastructure")
                })?;
                next.step = self.step.transition_to(target)?;
            }
        }
        Ok(next)
    }

    /// Finishes the questionnaire, yielding the immutable answer record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` unless on the last page.
    pub fn submit(&self) -> Result<AssessmentInput, ValidationError> {
        if !self.step.is_last() {
            return Err(ValidationError::invalid_format(
                "wizard_step",
                format!("cannot submit from step {}", self.step.number()),
            ));
        }
        Ok(self.answers.clone())
    }

    fn toggle(&mut self, toggle: SetToggle) {
        match toggle {
            SetToggle::CurrentInfrastructure(v) => {
                toggle_member(&mut self.answers.current_infrastructure, v)
            }
            SetToggle::DataTypes(v) => toggle_member(&mut self.answers.data_types, v),
            SetToggle::MicrosoftInvestments(v) => {
                toggle_member(&mut self.answers.microsoft_investments, v)
            }
            SetToggle::ComplianceRequirements(v) => {
                toggle_member(&mut self.answers.compliance_requirements, v)
            }
        }
    }
}

fn toggle_member<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

/// One user's pass through questionnaire, results, comparison and report.
#[derive(Debug, Clone, Default)]
pub struct AssessmentSession {
    stage: AssessmentStage,
    draft: QuestionnaireDraft,
    submitted: Option<AssessmentInput>,
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> AssessmentStage {
        self.stage
    }

    pub fn draft(&self) -> &QuestionnaireDraft {
        &self.draft
    }

    /// The submitted answers, present from the results stage onwards.
    pub fn submitted(&self) -> Option<&AssessmentInput> {
        self.submitted.as_ref()
    }

    /// Applies a questionnaire edit. Only valid while answering.
    pub fn apply(&mut self, action: DraftAction) -> Result<(), ValidationError> {
        self.require_stage(AssessmentStage::Assessment)?;
        self.draft = self.draft.apply(action)?;
        Ok(())
    }

    /// Submits the questionnaire and moves to the results view.
    pub fn submit(&mut self) -> Result<&AssessmentInput, ValidationError> {
        self.require_stage(AssessmentStage::Assessment)?;
        let input = self.draft.submit()?;
        self.stage = self.stage.transition_to(AssessmentStage::Results)?;
        Ok(self.submitted.insert(input))
    }

    /// Moves from results to comparison, or from comparison to report.
    pub fn advance(&mut self) -> Result<AssessmentStage, ValidationError> {
        let target = match self.stage {
            AssessmentStage::Results => AssessmentStage::Comparison,
            AssessmentStage::Comparison => AssessmentStage::Report,
            other => {
                return Err(ValidationError::invalid_format(
                    "assessment_stage",
                    format!("cannot advance from {:?}", other),
                ))
            }
        };
        self.stage = self.stage.transition_to(target)?;
        Ok(self.stage)
    }

    /// Discards the answers and starts a fresh questionnaire.
    pub fn restart(&mut self) -> Result<(), ValidationError> {
        self.stage = self.stage.transition_to(AssessmentStage::Assessment)?;
        self.draft = QuestionnaireDraft::new();
        self.submitted = None;
        Ok(())
    }

    fn require_stage(&self, expected: AssessmentStage) -> Result<(), ValidationError> {
        if self.stage != expected {
            return Err(ValidationError::invalid_format(
                "assessment_stage",
                format!("expected {:?}, session is at {:?}", expected, self.stage),
            ));
        }
        Ok(())
    }
}
