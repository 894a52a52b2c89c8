//! Step-by-step job statement builder.
//!
//! Guides a user through situation, motivation and outcome before a review
//! step that shows the clarity score. Each forward step validates the part
//! just entered.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{JobCategory, JobQuadrant, JobSegments, JobStatement};
use crate::domain::analysis::{ClarityInputs, ClarityScorer, StatementParser};
use crate::domain::foundation::{Percentage, StateMachine, ValidationError};

/// Current step of the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuilderStep {
    #[default]
    Situation,
    Motivation,
    Outcome,
    Review,
}

impl BuilderStep {
    /// The step `advance` moves to, if any.
    pub fn next(&self) -> Option<BuilderStep> {
        match self {
            BuilderStep::Situation => Some(BuilderStep::Motivation),
            BuilderStep::Motivation => Some(BuilderStep::Outcome),
            BuilderStep::Outcome => Some(BuilderStep::Review),
            BuilderStep::Review => None,
        }
    }

    /// The step `back` returns to, if any.
    pub fn previous(&self) -> Option<BuilderStep> {
        match self {
            BuilderStep::Situation => None,
            BuilderStep::Motivation => Some(BuilderStep::Situation),
            BuilderStep::Outcome => Some(BuilderStep::Motivation),
            BuilderStep::Review => Some(BuilderStep::Outcome),
        }
    }
}

impl StateMachine for BuilderStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next().as_ref() == Some(target) || self.previous().as_ref() == Some(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.previous().into_iter().chain(self.next()).collect()
    }
}

impl fmt::Display for BuilderStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BuilderStep::Situation => "Situation",
            BuilderStep::Motivation => "Motivation",
            BuilderStep::Outcome => "Outcome",
            BuilderStep::Review => "Review",
        };
        write!(f, "{}", s)
    }
}

/// Result of a finished builder session, ready to be written to the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltStatement {
    pub statement: JobStatement,
    pub segments: JobSegments,
    pub category: Option<JobCategory>,
    pub quadrant: Option<JobQuadrant>,
    pub clarity_score: Percentage,
}

/// Wizard state for composing a job statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobStatementBuilder {
    step: BuilderStep,
    segments: JobSegments,
    category: Option<JobCategory>,
    quadrant: Option<JobQuadrant>,
    min_segment_length: usize,
}

impl JobStatementBuilder {
    /// Starts an empty builder at the situation step.
    pub fn new(min_segment_length: usize) -> Self {
        Self {
            step: BuilderStep::Situation,
            segments: JobSegments::default(),
            category: None,
            quadrant: None,
            min_segment_length,
        }
    }

    /// Starts a builder pre-filled from an existing statement.
    ///
    /// Text that does not follow the "When …, I want …, so I can …" shape
    /// leaves the segments empty.
    pub fn from_statement(
        statement: &JobStatement,
        category: Option<JobCategory>,
        quadrant: Option<JobQuadrant>,
        min_segment_length: usize,
    ) -> Self {
        Self {
            segments: StatementParser::parse_statement(statement).unwrap_or_default(),
            category,
            quadrant,
            ..Self::new(min_segment_length)
        }
    }

    pub fn step(&self) -> BuilderStep {
        self.step
    }

    pub fn segments(&self) -> &JobSegments {
        &self.segments
    }

    pub fn category(&self) -> Option<JobCategory> {
        self.category
    }

    pub fn quadrant(&self) -> Option<JobQuadrant> {
        self.quadrant
    }

    pub fn set_situation(&mut self, text: impl Into<String>) {
        self.segments.situation = text.into();
    }

    pub fn set_motivation(&mut self, text: impl Into<String>) {
        self.segments.motivation = text.into();
    }

    pub fn set_outcome(&mut self, text: impl Into<String>) {
        self.segments.outcome = text.into();
    }

    pub fn set_category(&mut self, category: Option<JobCategory>) {
        self.category = category;
    }

    pub fn set_quadrant(&mut self, quadrant: Option<JobQuadrant>) {
        self.quadrant = quadrant;
    }

    /// Validates the current step and moves to the next one.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` when the current part is shorter than the minimum
    ///   length, or when already at review
    /// - `EmptyField` when the step's classification is missing
    pub fn advance(&mut self) -> Result<BuilderStep, ValidationError> {
        let target = self.step.next().ok_or_else(|| {
            ValidationError::invalid_format(
                "state_transition",
                "Review is the last step; finish the builder instead",
            )
        })?;

        self.validate_current_step()?;
        self.step = self.step.transition_to(target)?;
        Ok(self.step)
    }

    /// Returns to the previous step. No-op at the first step.
    pub fn back(&mut self) -> BuilderStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Clarity score of the current draft, shown at the review step.
    pub fn clarity_score(&self) -> Option<Percentage> {
        (self.step == BuilderStep::Review).then(|| self.score())
    }

    /// Composes the final statement.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` (`state_transition`) unless at the review step
    /// - `EmptyField` if any part was cleared after it was validated
    pub fn finish(&self) -> Result<BuiltStatement, ValidationError> {
        if self.step != BuilderStep::Review {
            return Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot finish from the {} step", self.step),
            ));
        }

        let statement = self.segments.to_statement()?;
        Ok(BuiltStatement {
            segments: JobSegments::new(
                self.segments.situation.trim(),
                self.segments.motivation.trim(),
                self.segments.outcome.trim(),
            ),
            statement,
            category: self.category,
            quadrant: self.quadrant,
            clarity_score: self.score(),
        })
    }

    fn score(&self) -> Percentage {
        let inputs = ClarityInputs::from_segments(
            &self.segments,
            self.category.is_some(),
            self.quadrant.is_some(),
        );
        ClarityScorer::score(&inputs, self.min_segment_length)
    }

    fn validate_current_step(&self) -> Result<(), ValidationError> {
        match self.step {
            BuilderStep::Situation => {
                self.require_length("situation", &self.segments.situation)?;
                if self.category.is_none() {
                    return Err(ValidationError::empty_field("job_category"));
                }
            }
            BuilderStep::Motivation => {
                self.require_length("motivation", &self.segments.motivation)?;
            }
            BuilderStep::Outcome => {
                self.require_length("outcome", &self.segments.outcome)?;
                if self.quadrant.is_none() {
                    return Err(ValidationError::empty_field("job_quadrant"));
                }
            }
            BuilderStep::Review => {}
        }
        Ok(())
    }

    fn require_length(&self, field: &str, text: &str) -> Result<(), ValidationError> {
        if text.trim().chars().count() < self.min_segment_length {
            return Err(ValidationError::invalid_format(
                field,
                format!("must be at least {} characters", self.min_segment_length),
            ));
        }
        Ok(())
    }
}
