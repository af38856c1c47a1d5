//! Application layer - Commands and Handlers.
//!
//! This layer applies configured defaults and runs the pure scoring
//! functions. It is the only layer that logs.

pub mod handlers;

pub use handlers::{
    GenerateReportCommand, GenerateReportHandler, RecalculateValueCommand,
    RecalculateValueHandler,
};
