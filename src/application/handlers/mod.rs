//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod scoring;

pub use scoring::{
    // Job statements
    CompleteJobStatementCommand, CompleteJobStatementHandler, CompleteJobStatementResult,
    ScoreJobStatementHandler, ScoreJobStatementQuery, ScoreJobStatementResult,
    // Force analysis
    EvaluateForceAnalysisHandler, EvaluateForceAnalysisQuery, EvaluateForceAnalysisResult,
    // Outcomes
    AdditionalOutcomeProgress, EvaluateOutcomeHandler, EvaluateOutcomeQuery,
    EvaluateOutcomeResult,
    // Whole opportunity
    EvaluateOpportunityHandler, EvaluateOpportunityQuery, EvaluateOpportunityResult,
};
