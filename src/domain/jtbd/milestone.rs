//! Outcome milestones.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An intermediate checkpoint on the way to an outcome target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeMilestone {
    pub name: String,
    #[serde(default = "default_sequence")]
    pub sequence: u32,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub target_value: Option<f64>,
    #[serde(default)]
    pub achieved: bool,
    #[serde(default)]
    pub actual_date: Option<NaiveDate>,
    #[serde(default)]
    pub actual_value: Option<f64>,
}

fn default_sequence() -> u32 {
    10
}

impl OutcomeMilestone {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: default_sequence(),
            target_date: None,
            target_value: None,
            achieved: false,
            actual_date: None,
            actual_value: None,
        }
    }

    pub fn with_sequence(mut self, sequence: u32) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn due_on(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }

    pub fn targeting(mut self, value: f64) -> Self {
        self.target_value = Some(value);
        self
    }

    /// Marks the milestone achieved.
    ///
    /// Actual date and value already recorded are kept; otherwise `today`
    /// and the mapping's current metric value are captured.
    pub fn mark_achieved(&mut self, today: NaiveDate, current_value: Option<f64>) {
        self.achieved = true;
        self.actual_date.get_or_insert(today);
        if self.actual_value.is_none() {
            self.actual_value = current_value;
        }
    }

    /// Reverts the milestone to pending and clears the recorded actuals.
    pub fn mark_unachieved(&mut self) {
        self.achieved = false;
        self.actual_date = None;
        self.actual_value = None;
    }

    /// Pending and past its target date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.achieved && self.target_date.is_some_and(|due| due < today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn mark_achieved_captures_today_and_current_value() {
        let mut milestone = OutcomeMilestone::new("First automated report");
        milestone.mark_achieved(date(2024, 3, 1), Some(42.0));

        assert!(milestone.achieved);
        assert_eq!(milestone.actual_date, Some(date(2024, 3, 1)));
        assert_eq!(milestone.actual_value, Some(42.0));
    }

    #[test]
    fn mark_achieved_keeps_supplied_actuals() {
        let mut milestone = OutcomeMilestone::new("Pilot live");
        milestone.actual_date = Some(date(2024, 2, 14));
        milestone.actual_value = Some(10.0);
        milestone.mark_achieved(date(2024, 3, 1), Some(42.0));

        assert_eq!(milestone.actual_date, Some(date(2024, 2, 14)));
        assert_eq!(milestone.actual_value, Some(10.0));
    }

    #[test]
    fn mark_unachieved_clears_actuals() {
        let mut milestone = OutcomeMilestone::new("Pilot live");
        milestone.mark_achieved(date(2024, 3, 1), Some(5.0));
        milestone.mark_unachieved();

        assert!(!milestone.achieved);
        assert_eq!(milestone.actual_date, None);
        assert_eq!(milestone.actual_value, None);
    }

    #[test]
    fn overdue_only_when_pending_and_past_due() {
        let milestone = OutcomeMilestone::new("Kickoff").due_on(date(2024, 1, 31));
        assert!(milestone.is_overdue(date(2024, 2, 1)));
        assert!(!milestone.is_overdue(date(2024, 1, 31)));

        let mut done = milestone.clone();
        done.mark_achieved(date(2024, 2, 2), None);
        assert!(!done.is_overdue(date(2024, 2, 3)));

        assert!(!OutcomeMilestone::new("Undated").is_overdue(date(2030, 1, 1)));
    }

    #[test]
    fn deserializes_with_defaults() {
        let milestone: OutcomeMilestone =
            serde_json::from_str(r#"{"name":"Go live","target_date":"2024-06-30"}"#).unwrap();
        assert_eq!(milestone.sequence, 10);
        assert_eq!(milestone.target_date, Some(date(2024, 6, 30)));
        assert!(!milestone.achieved);
    }
}
