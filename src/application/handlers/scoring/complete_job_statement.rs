//! CompleteJobStatementHandler - Command handler for the statement builder.
//!
//! Finishes a builder session and produces the values written back onto the
//! opportunity, along with the activity note.

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::jtbd::{BuiltStatement, JobStatementBuilder};

/// Command to complete a builder session.
#[derive(Debug, Clone)]
pub struct CompleteJobStatementCommand {
    pub builder: JobStatementBuilder,
}

/// Result of a completed builder session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompleteJobStatementResult {
    pub built: BuiltStatement,
    /// Activity note for the opportunity's history.
    pub note: String,
}

/// Handler for finishing the job statement builder.
#[derive(Debug, Default)]
pub struct CompleteJobStatementHandler;

impl CompleteJobStatementHandler {
    pub fn new() -> Self {
        Self
    }

    /// # Errors
    ///
    /// - `InvalidStateTransition` if the builder is not at the review step
    /// - `IncompleteStatement` if any part is empty
    pub fn handle(
        &self,
        cmd: CompleteJobStatementCommand,
    ) -> Result<CompleteJobStatementResult, DomainError> {
        let built = cmd.builder.finish().map_err(|err| {
            warn!(step = %cmd.builder.step(), error = %err, "Job statement builder rejected");
            match err {
                ValidationError::EmptyField { field } => DomainError::new(
                    ErrorCode::IncompleteStatement,
                    "All parts of the job statement (situation, motivation, outcome) must be completed",
                )
                .with_detail("field", field),
                other => DomainError::from(other),
            }
        })?;

        debug!(
            clarity = built.clarity_score.value(),
            "Job statement completed via builder"
        );

        let note = format!(
            "JTBD Statement created/updated via Builder: {}",
            built.statement
        );
        Ok(CompleteJobStatementResult { built, note })
    }
}
