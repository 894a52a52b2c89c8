//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer runs the domain calculators on behalf of the record store:
//! it applies configured defaults, logs computed scores, and shapes results
//! for write-back.

pub mod handlers;

pub use handlers::{
    EvaluateForceAnalysisHandler, EvaluateOpportunityHandler, EvaluateOpportunityQuery,
    EvaluateOpportunityResult, EvaluateOutcomeHandler, ScoreJobStatementHandler,
};
