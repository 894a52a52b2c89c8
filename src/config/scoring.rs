//! Scoring configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::MIN_SEGMENT_LENGTH;
use crate::domain::jtbd::{ConfidenceWeight, DEFAULT_CONFIDENCE_WEIGHT};

/// Defaults applied by the scoring handlers
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScoringConfig {
    /// Confidence weight used when a force analysis record carries none
    #[serde(default = "default_confidence_weight")]
    pub default_confidence_weight: f64,

    /// Minimum trimmed length for a job statement segment to earn points
    #[serde(default = "default_min_segment_length")]
    pub min_segment_length: usize,
}

impl ScoringConfig {
    /// The configured default as a validated weight
    pub fn confidence_weight(&self) -> Result<ConfidenceWeight, ValidationError> {
        ConfidenceWeight::try_new(self.default_confidence_weight)
            .map_err(|_| ValidationError::InvalidConfidenceWeight(self.default_confidence_weight))
    }

    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.confidence_weight()?;
        if self.min_segment_length == 0 {
            return Err(ValidationError::InvalidSegmentLength);
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_confidence_weight: default_confidence_weight(),
            min_segment_length: default_min_segment_length(),
        }
    }
}

fn default_confidence_weight() -> f64 {
    DEFAULT_CONFIDENCE_WEIGHT
}

fn default_min_segment_length() -> usize {
    MIN_SEGMENT_LENGTH
}
