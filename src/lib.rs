//! Fabric Fit - Platform suitability scoring for Microsoft Fabric
//!
//! This crate scores a questionnaire about an organization's data estate
//! and produces a 0-100 suitability score, per-category readiness scores,
//! competitor comparisons and a projected business case.

pub mod application;
pub mod config;
pub mod domain;
