//! Assessment module - The questionnaire and its answers.
//!
//! This module defines:
//! - Answer catalogs for every multiple-choice question
//! - The industry catalog with value multipliers and insight content
//! - `AssessmentInput`, the immutable answer record all scores derive from
//! - The wizard state machines and the questionnaire draft reducer

#[macro_use]
mod macros;

mod catalog;
mod industry;
mod input;
mod wizard;

pub use catalog::{
    BiTool, ComplianceStandard, DataType, Infrastructure, MicrosoftProduct, WarehouseSolution,
};
pub use industry::{Industry, IndustryMultipliers, IndustryProfile};
pub use input::{AssessmentInput, ScaleField};
pub use wizard::{
    AssessmentSession, AssessmentStage, DraftAction, QuestionnaireDraft, SetToggle, WizardStep,
};
