//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    GenerateReportCommand, GenerateReportHandler, RecalculateValueCommand,
    RecalculateValueHandler,
};
