//! Job statement value objects.
//!
//! A job statement has the form "When <situation>, I want <motivation>, so I
//! can <outcome>." The raw text is stored as entered; segments are derived
//! by [`StatementParser`](crate::domain::analysis::StatementParser).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Free-text job statement exactly as captured on the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobStatement(String);

impl JobStatement {
    /// Wraps raw statement text without validating its structure.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Builds the canonical statement text from its three parts.
    ///
    /// Parts are trimmed; an empty part is rejected.
    pub fn compose(
        situation: &str,
        motivation: &str,
        outcome: &str,
    ) -> Result<Self, ValidationError> {
        let situation = non_empty("situation", situation)?;
        let motivation = non_empty("motivation", motivation)?;
        let outcome = non_empty("outcome", outcome)?;
        Ok(Self(format!(
            "When {}, I want {}, so I can {}.",
            situation, motivation, outcome
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the statement has no visible text.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for JobStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed)
}

/// The three segments of a structured job statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct JobSegments {
    pub situation: String,
    pub motivation: String,
    pub outcome: String,
}

impl JobSegments {
    pub fn new(
        situation: impl Into<String>,
        motivation: impl Into<String>,
        outcome: impl Into<String>,
    ) -> Self {
        Self {
            situation: situation.into(),
            motivation: motivation.into(),
            outcome: outcome.into(),
        }
    }

    /// Recomposes the segments into canonical statement text.
    pub fn to_statement(&self) -> Result<JobStatement, ValidationError> {
        JobStatement::compose(&self.situation, &self.motivation, &self.outcome)
    }
}
