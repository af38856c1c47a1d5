//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (bounded scales, scores, errors)
//! - `assessment` - Questionnaire answers, catalogs, industries and the wizard
//! - `scoring` - Pure scoring functions (composite, categories, competitors, value)
//! - `report` - Read-only views assembled from computed scores

pub mod assessment;
pub mod foundation;
pub mod report;
pub mod scoring;
