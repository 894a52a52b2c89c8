//! EvaluateForceAnalysisHandler - Query handler for force analysis scoring.
//!
//! Resolves the confidence weight against the configured default, runs the
//! force pipeline and prepares the opportunity update note.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ScoringConfig;
use crate::domain::analysis::{ForceAnalysisInputs, ForceAnalysisResult, ForceAnalyzer};
use crate::domain::foundation::DomainError;
use crate::domain::jtbd::ConfidenceWeight;

/// Query to evaluate one force analysis record.
#[derive(Debug, Clone, Default)]
pub struct EvaluateForceAnalysisQuery {
    /// Name of the analysis, used in the activity note.
    pub name: String,
    pub inputs: ForceAnalysisInputs,
}

/// Scores plus the note posted to the opportunity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluateForceAnalysisResult {
    pub analysis: ForceAnalysisResult,
    pub note: String,
}

/// Handler for force analysis evaluation.
#[derive(Debug, Clone, Copy)]
pub struct EvaluateForceAnalysisHandler {
    default_weight: ConfidenceWeight,
}

impl EvaluateForceAnalysisHandler {
    /// # Errors
    ///
    /// Returns `OutOfRange` if the configured default weight is outside [0, 1].
    pub fn new(config: &ScoringConfig) -> Result<Self, DomainError> {
        Ok(Self {
            default_weight: ConfidenceWeight::try_new(config.default_confidence_weight)?,
        })
    }

    /// # Errors
    ///
    /// Returns `OutOfRange`/`InvalidFormat` when the record's own confidence
    /// weight is invalid.
    pub fn handle(
        &self,
        query: &EvaluateForceAnalysisQuery,
    ) -> Result<EvaluateForceAnalysisResult, DomainError> {
        let analysis = ForceAnalyzer::analyze(&query.inputs, self.default_weight).map_err(|err| {
            warn!(analysis = %query.name, error = %err, "Rejected force analysis input");
            DomainError::from(err)
        })?;

        debug!(
            analysis = %query.name,
            items = query.inputs.items.len(),
            push = analysis.scores.push,
            pull = analysis.scores.pull,
            anxiety = analysis.scores.anxiety,
            habit = analysis.scores.habit,
            momentum = analysis.momentum.value(),
            signal = analysis.signal_strength.value(),
            risk = %analysis.risk,
            "Computed force analysis"
        );

        let note = analysis.summary_note(&query.name);
        Ok(EvaluateForceAnalysisResult { analysis, note })
    }
}
