//! Domain layer containing the scoring logic and its value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, percentage, state machine)
//! - `jtbd` - Job statement, force, outcome and milestone value objects
//! - `analysis` - Pure calculators (clarity, forces, momentum, signal, outcomes)

pub mod analysis;
pub mod foundation;
pub mod jtbd;
