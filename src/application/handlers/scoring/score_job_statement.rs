//! ScoreJobStatementHandler - Query handler for job clarity.
//!
//! Parses the stored job statement and scores its completeness together with
//! the category and quadrant set on the opportunity.

use tracing::debug;

use crate::config::ScoringConfig;
use crate::domain::analysis::{ClarityScorer, JobClarity};
use crate::domain::jtbd::{JobCategory, JobQuadrant, JobStatement};

/// Query to score a job statement.
#[derive(Debug, Clone, Default)]
pub struct ScoreJobStatementQuery {
    pub statement: JobStatement,
    pub category: Option<JobCategory>,
    pub quadrant: Option<JobQuadrant>,
}

/// Result of a clarity query.
pub type ScoreJobStatementResult = JobClarity;

/// Handler for job clarity scoring.
pub struct ScoreJobStatementHandler {
    min_segment_length: usize,
}

impl ScoreJobStatementHandler {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            min_segment_length: config.min_segment_length,
        }
    }

    /// Unstructured statements score only their classifications.
    pub fn handle(&self, query: &ScoreJobStatementQuery) -> ScoreJobStatementResult {
        let clarity = ClarityScorer::score_statement(
            &query.statement,
            query.category,
            query.quadrant,
            self.min_segment_length,
        );

        debug!(
            score = clarity.score.value(),
            structured = clarity.is_structured(),
            "Scored job statement clarity"
        );

        clarity
    }
}
