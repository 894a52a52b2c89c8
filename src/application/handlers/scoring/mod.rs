//! Scoring query handlers.
//!
//! Synchronous handlers that take a snapshot of an opportunity's JTBD fields,
//! run the domain calculators with configured defaults, and return values for
//! the record store to persist.

mod complete_job_statement;
mod evaluate_force_analysis;
mod evaluate_opportunity;
mod evaluate_outcome;
mod score_job_statement;

pub use complete_job_statement::{
    CompleteJobStatementCommand, CompleteJobStatementHandler, CompleteJobStatementResult,
};
pub use evaluate_force_analysis::{
    EvaluateForceAnalysisHandler, EvaluateForceAnalysisQuery, EvaluateForceAnalysisResult,
};
pub use evaluate_opportunity::{
    EvaluateOpportunityHandler, EvaluateOpportunityQuery, EvaluateOpportunityResult,
};
pub use evaluate_outcome::{
    AdditionalOutcomeProgress, EvaluateOutcomeHandler, EvaluateOutcomeQuery,
    EvaluateOutcomeResult,
};
pub use score_job_statement::{
    ScoreJobStatementHandler, ScoreJobStatementQuery, ScoreJobStatementResult,
};
