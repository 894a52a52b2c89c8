//! Milestone Tracker - Completion summary for outcome milestones.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::foundation::Percentage;
use crate::domain::jtbd::OutcomeMilestone;

/// Completion summary of an outcome's milestones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneSummary {
    pub total: usize,
    pub achieved: usize,
    pub completion: Percentage,
    /// First pending milestone by sequence, then target date.
    pub next_pending: Option<OutcomeMilestone>,
    /// Pending milestones whose target date lies before `today`.
    pub overdue: Vec<OutcomeMilestone>,
}

pub struct MilestoneTracker;

impl MilestoneTracker {
    pub fn summarize(milestones: &[OutcomeMilestone], today: NaiveDate) -> MilestoneSummary {
        let total = milestones.len();
        let achieved = milestones.iter().filter(|m| m.achieved).count();

        let completion = if total == 0 {
            Percentage::ZERO
        } else {
            Percentage::from_score(100.0 * achieved as f64 / total as f64)
        };

        let mut pending: Vec<&OutcomeMilestone> =
            milestones.iter().filter(|m| !m.achieved).collect();
        pending.sort_by(|a, b| Self::schedule_order(a, b));

        let overdue = pending
            .iter()
            .filter(|m| m.is_overdue(today))
            .map(|m| (*m).clone())
            .collect();

        MilestoneSummary {
            total,
            achieved,
            completion,
            next_pending: pending.first().map(|m| (*m).clone()),
            overdue,
        }
    }

    /// Sequence first; dated milestones before undated ones.
    fn schedule_order(a: &OutcomeMilestone, b: &OutcomeMilestone) -> Ordering {
        a.sequence.cmp(&b.sequence).then_with(|| match (a.target_date, b.target_date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
    }
}
