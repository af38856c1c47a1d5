//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, the state machine trait and error types
//! that form the vocabulary of the assessment domain.

mod errors;
mod scale;
mod score;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use scale::Scale;
pub use score::{CategoryScore, FitScore};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
