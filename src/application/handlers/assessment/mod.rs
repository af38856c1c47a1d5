//! Assessment command handlers.

mod generate_report;
mod recalculate_value;

pub use generate_report::{GenerateReportCommand, GenerateReportHandler};
pub use recalculate_value::{RecalculateValueCommand, RecalculateValueHandler};
