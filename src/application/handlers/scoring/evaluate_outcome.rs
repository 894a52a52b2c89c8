//! EvaluateOutcomeHandler - Query handler for outcome mappings.
//!
//! Evaluates the primary metric, every additional outcome and the milestone
//! plan of one outcome mapping.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::domain::analysis::{MilestoneSummary, MilestoneTracker, OutcomeEngine, OutcomeProgress};
use crate::domain::jtbd::{
    AdditionalOutcome, OutcomeMeasurement, OutcomeMilestone, OutcomeStatus, Priority,
};

/// Query to evaluate an outcome mapping.
#[derive(Debug, Clone)]
pub struct EvaluateOutcomeQuery {
    /// Name of the mapping, used in the activity note.
    pub name: String,
    pub metric: Option<String>,
    pub metric_unit: Option<String>,
    pub primary: OutcomeMeasurement,
    pub additional: Vec<AdditionalOutcome>,
    pub milestones: Vec<OutcomeMilestone>,
    /// Reference date for overdue milestones.
    pub today: NaiveDate,
}

/// Progress of one additional outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdditionalOutcomeProgress {
    pub description: String,
    pub metric: String,
    pub priority: Priority,
    pub progress: OutcomeProgress,
}

/// Result of an outcome evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluateOutcomeResult {
    pub primary: OutcomeProgress,
    pub additional: Vec<AdditionalOutcomeProgress>,
    /// High-priority outcome with the lowest capped progress, ignoring
    /// outcomes without data.
    pub weakest_high_priority: Option<AdditionalOutcomeProgress>,
    pub milestones: MilestoneSummary,
    pub note: String,
}

/// Handler for outcome evaluation.
#[derive(Debug, Default)]
pub struct EvaluateOutcomeHandler;

impl EvaluateOutcomeHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: &EvaluateOutcomeQuery) -> EvaluateOutcomeResult {
        let primary = OutcomeEngine::evaluate(&query.primary);

        let additional: Vec<_> = query
            .additional
            .iter()
            .map(|outcome| AdditionalOutcomeProgress {
                description: outcome.description.clone(),
                metric: outcome.metric.clone(),
                priority: outcome.priority,
                progress: OutcomeEngine::evaluate(&outcome.measurement),
            })
            .collect();

        let weakest_high_priority = additional
            .iter()
            .filter(|o| o.priority == Priority::High && o.progress.status != OutcomeStatus::NoData)
            .fold(None, |weakest: Option<&AdditionalOutcomeProgress>, o| match weakest {
                Some(w) if w.progress.capped_progress <= o.progress.capped_progress => Some(w),
                _ => Some(o),
            })
            .cloned();

        let milestones = MilestoneTracker::summarize(&query.milestones, query.today);

        debug!(
            mapping = %query.name,
            status = %primary.status,
            progress = primary.capped_progress,
            additional = additional.len(),
            milestones_achieved = milestones.achieved,
            milestones_overdue = milestones.overdue.len(),
            "Evaluated outcome mapping"
        );

        let note = Self::note(query);
        EvaluateOutcomeResult {
            primary,
            additional,
            weakest_high_priority,
            milestones,
            note,
        }
    }

    fn note(query: &EvaluateOutcomeQuery) -> String {
        let unit = query.metric_unit.as_deref().unwrap_or("");
        let value = |v: Option<f64>| v.unwrap_or(0.0);
        format!(
            "Outcome Mapping '{}' updated Opportunity:\n\
             - Primary Metric: {}\n\
             - Current Value: {} {}\n\
             - Target Value: {} {}\n\
             - Milestones Defined: {}",
            query.name,
            query.metric.as_deref().unwrap_or("Not Set"),
            value(query.primary.current_value),
            unit,
            value(query.primary.target_value),
            unit,
            query.milestones.len(),
        )
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
    }
}
