//! Clarity Scorer - Completeness score (0-100) for a job definition.

use serde::{Deserialize, Serialize};

use super::StatementParser;
use crate::domain::foundation::Percentage;
use crate::domain::jtbd::{JobCategory, JobQuadrant, JobSegments, JobStatement};

/// Minimum trimmed length a segment needs to earn its points.
pub const MIN_SEGMENT_LENGTH: usize = 10;

/// Points for each sufficiently long text segment.
pub const SEGMENT_WEIGHT: f64 = 25.0;

/// Points for each classification (category, quadrant) that is set.
pub const CLASSIFICATION_WEIGHT: f64 = 12.5;

/// Inputs to the clarity score.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClarityInputs {
    pub situation: String,
    pub motivation: String,
    pub outcome: String,
    pub category_set: bool,
    pub quadrant_set: bool,
}

impl ClarityInputs {
    pub fn from_segments(segments: &JobSegments, category_set: bool, quadrant_set: bool) -> Self {
        Self {
            situation: segments.situation.clone(),
            motivation: segments.motivation.clone(),
            outcome: segments.outcome.clone(),
            category_set,
            quadrant_set,
        }
    }
}

/// Clarity of a stored job statement together with its parsed segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobClarity {
    /// `None` when the statement does not follow the expected structure.
    pub segments: Option<JobSegments>,
    pub score: Percentage,
}

impl JobClarity {
    pub fn is_structured(&self) -> bool {
        self.segments.is_some()
    }
}

/// Calculator for job clarity scores.
pub struct ClarityScorer;

impl ClarityScorer {
    /// Scores the completeness of a job definition.
    ///
    /// Each segment whose trimmed length (in characters) reaches `min_len`
    /// earns 25 points, with no partial credit. Category and quadrant earn
    /// 12.5 each. The total is rounded and clamped to 0-100.
    pub fn score(inputs: &ClarityInputs, min_len: usize) -> Percentage {
        let segment_points: f64 = [&inputs.situation, &inputs.motivation, &inputs.outcome]
            .iter()
            .filter(|text| text.trim().chars().count() >= min_len)
            .map(|_| SEGMENT_WEIGHT)
            .sum();

        let classification_points: f64 = [inputs.category_set, inputs.quadrant_set]
            .iter()
            .filter(|set| **set)
            .map(|_| CLASSIFICATION_WEIGHT)
            .sum();

        Percentage::from_score(segment_points + classification_points)
    }

    /// Parses a stored statement and scores it with its classifications.
    ///
    /// An unparseable statement contributes no segment points.
    pub fn score_statement(
        statement: &JobStatement,
        category: Option<JobCategory>,
        quadrant: Option<JobQuadrant>,
        min_len: usize,
    ) -> JobClarity {
        let segments = StatementParser::parse_statement(statement);
        let inputs = ClarityInputs::from_segments(
            &segments.clone().unwrap_or_default(),
            category.is_some(),
            quadrant.is_some(),
        );
        JobClarity {
            score: Self::score(&inputs, min_len),
            segments,
        }
    }
}
