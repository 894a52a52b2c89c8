//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, error types and traits that the JTBD
//! value objects and calculators are built from.

mod errors;
mod percentage;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use percentage::Percentage;
pub use state_machine::StateMachine;
