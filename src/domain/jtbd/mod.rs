//! JTBD value objects.
//!
//! Closed enums and validated values for the fields captured on a JTBD
//! opportunity: the job statement and its classification, force items,
//! decision context, outcome measurements and milestones.

mod category;
mod force;
mod job_statement;
mod milestone;
mod outcome;
mod risk;
mod statement_builder;
mod trigger;

pub use category::{JobCategory, JobQuadrant};
pub use force::{
    ConfidenceWeight, ForceItem, ForceStrength, ForceType, ImpactArea, DEFAULT_CONFIDENCE_WEIGHT,
};
pub use job_statement::{JobSegments, JobStatement};
pub use milestone::OutcomeMilestone;
pub use outcome::{AdditionalOutcome, OutcomeMeasurement, OutcomeStatus, Priority};
pub use risk::RiskLevel;
pub use statement_builder::{BuilderStep, BuiltStatement, JobStatementBuilder};
pub use trigger::{IntensityScore, TriggerWindow};
