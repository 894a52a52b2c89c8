//! Outcome Engine - Progress and status of an outcome metric.

use serde::{Deserialize, Serialize};

use crate::domain::jtbd::{OutcomeMeasurement, OutcomeStatus};

/// Derived progress of one outcome metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeProgress {
    /// Share of the desired change achieved so far; may be negative or above 100.
    pub raw_progress: f64,
    /// `raw_progress` clamped to 0-100.
    pub capped_progress: f64,
    pub status: OutcomeStatus,
    /// Distance still to travel (`target - current`); `None` without data.
    pub gap: Option<f64>,
}

impl OutcomeProgress {
    /// Progress reported when any of the three values is missing.
    pub fn no_data() -> Self {
        Self {
            raw_progress: 0.0,
            capped_progress: 0.0,
            status: OutcomeStatus::NoData,
            gap: None,
        }
    }
}

/// Calculator for outcome progress and status.
pub struct OutcomeEngine;

impl OutcomeEngine {
    /// Evaluates a measurement that may have missing values.
    pub fn evaluate(measurement: &OutcomeMeasurement) -> OutcomeProgress {
        match measurement.complete() {
            Some((baseline, current, target)) => Self::compute(baseline, current, target),
            None => OutcomeProgress::no_data(),
        }
    }

    /// Computes progress and status from a baseline/current/target triple.
    ///
    /// Non-finite inputs yield [`OutcomeStatus::NoData`].
    pub fn compute(baseline: f64, current: f64, target: f64) -> OutcomeProgress {
        if !(baseline.is_finite() && current.is_finite() && target.is_finite()) {
            return OutcomeProgress::no_data();
        }

        let raw_progress = Self::raw_progress(baseline, current, target);
        OutcomeProgress {
            raw_progress,
            capped_progress: raw_progress.clamp(0.0, 100.0),
            status: Self::status(baseline, current, target),
            gap: Some(target - current),
        }
    }

    fn raw_progress(baseline: f64, current: f64, target: f64) -> f64 {
        let desired_change = target - baseline;
        let achieved_change = current - baseline;

        if desired_change == 0.0 {
            return if current == target { 100.0 } else { 0.0 };
        }
        100.0 * (achieved_change / desired_change)
    }

    /// First matching rule wins:
    /// achieved, on baseline, then direction-specific exceeded/negative/improving.
    fn status(baseline: f64, current: f64, target: f64) -> OutcomeStatus {
        if current == target {
            return OutcomeStatus::Achieved;
        }
        if current == baseline {
            return OutcomeStatus::OnBaseline;
        }

        if target > baseline {
            if current > target {
                OutcomeStatus::Exceeded
            } else if current < baseline {
                OutcomeStatus::Negative
            } else {
                OutcomeStatus::Improving
            }
        } else if target < baseline {
            if current < target {
                OutcomeStatus::Exceeded
            } else if current > baseline {
                OutcomeStatus::Negative
            } else {
                OutcomeStatus::Improving
            }
        } else if current < baseline {
            // target == baseline: only the sign of the move is known
            OutcomeStatus::Negative
        } else {
            OutcomeStatus::Exceeded
        }
    }
}
