//! Outcome measurements tracked against a job.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative state of an outcome metric relative to its baseline and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    NoData,
    OnBaseline,
    Negative,
    Improving,
    Achieved,
    Exceeded,
}

impl OutcomeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OutcomeStatus::NoData => "No Data",
            OutcomeStatus::OnBaseline => "On Baseline",
            OutcomeStatus::Negative => "Regressed",
            OutcomeStatus::Improving => "Improving",
            OutcomeStatus::Achieved => "Achieved",
            OutcomeStatus::Exceeded => "Exceeded",
        }
    }

    /// True once the target has been reached or passed.
    pub fn is_met(&self) -> bool {
        matches!(self, OutcomeStatus::Achieved | OutcomeStatus::Exceeded)
    }
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Baseline/current/target triple for one metric.
///
/// Any field may be missing on the source record; the outcome engine maps
/// missing or non-finite values to [`OutcomeStatus::NoData`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OutcomeMeasurement {
    #[serde(default)]
    pub baseline_value: Option<f64>,
    #[serde(default)]
    pub current_value: Option<f64>,
    #[serde(default)]
    pub target_value: Option<f64>,
}

impl OutcomeMeasurement {
    pub fn new(baseline: f64, current: f64, target: f64) -> Self {
        Self {
            baseline_value: Some(baseline),
            current_value: Some(current),
            target_value: Some(target),
        }
    }

    /// Returns the triple when all three values are present and finite.
    pub fn complete(&self) -> Option<(f64, f64, f64)> {
        let finite = |v: Option<f64>| v.filter(|x| x.is_finite());
        Some((
            finite(self.baseline_value)?,
            finite(self.current_value)?,
            finite(self.target_value)?,
        ))
    }
}

/// Importance of a secondary outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    None,
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Maps a 0-3 star rating to a priority; anything above 3 is high.
    pub fn from_stars(stars: u8) -> Self {
        match stars {
            0 => Priority::None,
            1 => Priority::Low,
            2 => Priority::Medium,
            _ => Priority::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::None => "No Priority",
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// A secondary outcome measured alongside the primary metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalOutcome {
    pub description: String,
    pub metric: String,
    #[serde(flatten)]
    pub measurement: OutcomeMeasurement,
    #[serde(default)]
    pub metric_unit: Option<String>,
    #[serde(default)]
    pub priority: Priority,
}

impl AdditionalOutcome {
    pub fn new(
        description: impl Into<String>,
        metric: impl Into<String>,
        measurement: OutcomeMeasurement,
    ) -> Self {
        Self {
            description: description.into(),
            metric: metric.into(),
            measurement,
            metric_unit: None,
            priority: Priority::default(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}
