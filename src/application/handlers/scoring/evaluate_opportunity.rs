//! EvaluateOpportunityHandler - Scores every JTBD section of an opportunity.
//!
//! Combines job clarity, force analysis and outcome evaluation into a single
//! bundle for the record store to persist.

use serde::Serialize;

use super::{
    EvaluateForceAnalysisHandler, EvaluateForceAnalysisQuery, EvaluateForceAnalysisResult,
    EvaluateOutcomeHandler, EvaluateOutcomeQuery, EvaluateOutcomeResult, ScoreJobStatementHandler,
    ScoreJobStatementQuery,
};
use crate::config::ScoringConfig;
use crate::domain::analysis::JobClarity;
use crate::domain::foundation::DomainError;
use crate::domain::jtbd::RiskLevel;

/// Snapshot of an opportunity's JTBD fields.
#[derive(Debug, Clone, Default)]
pub struct EvaluateOpportunityQuery {
    pub job: ScoreJobStatementQuery,
    pub force_analysis: Option<EvaluateForceAnalysisQuery>,
    pub outcome: Option<EvaluateOutcomeQuery>,
}

/// Derived values for one opportunity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluateOpportunityResult {
    pub clarity: JobClarity,
    pub force_analysis: Option<EvaluateForceAnalysisResult>,
    /// `Undefined` until a force analysis exists.
    pub risk_level: RiskLevel,
    pub outcome: Option<EvaluateOutcomeResult>,
}

/// Handler for whole-opportunity evaluation.
pub struct EvaluateOpportunityHandler {
    clarity: ScoreJobStatementHandler,
    forces: EvaluateForceAnalysisHandler,
    outcomes: EvaluateOutcomeHandler,
}

impl EvaluateOpportunityHandler {
    /// # Errors
    ///
    /// Returns `OutOfRange` if the configured default weight is invalid.
    pub fn new(config: &ScoringConfig) -> Result<Self, DomainError> {
        Ok(Self {
            clarity: ScoreJobStatementHandler::new(config),
            forces: EvaluateForceAnalysisHandler::new(config)?,
            outcomes: EvaluateOutcomeHandler::new(),
        })
    }

    /// # Errors
    ///
    /// Propagates force analysis validation errors.
    pub fn handle(
        &self,
        query: &EvaluateOpportunityQuery,
    ) -> Result<EvaluateOpportunityResult, DomainError> {
        let clarity = self.clarity.handle(&query.job);

        let force_analysis = query
            .force_analysis
            .as_ref()
            .map(|q| self.forces.handle(q))
            .transpose()?;

        let risk_level = force_analysis
            .as_ref()
            .map(|f| f.analysis.risk)
            .unwrap_or_default();

        let outcome = query.outcome.as_ref().map(|q| self.outcomes.handle(q));

        Ok(EvaluateOpportunityResult {
            clarity,
            force_analysis,
            risk_level,
            outcome,
        })
    }
}
