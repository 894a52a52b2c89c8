//! Integration tests for whole-opportunity scoring.
//!
//! These tests drive the public handlers the way a record store would:
//! 1. Load configuration from a file
//! 2. Deserialize a JTBD record snapshot
//! 3. Evaluate the opportunity and check the values written back

use chrono::NaiveDate;
use serde_json::json;
use std::io::Write;

use jtbd_scoring::application::handlers::{
    CompleteJobStatementCommand, CompleteJobStatementHandler, EvaluateForceAnalysisQuery,
    EvaluateOpportunityHandler, EvaluateOpportunityQuery, EvaluateOutcomeQuery,
    ScoreJobStatementQuery,
};
use jtbd_scoring::config::AppConfig;
use jtbd_scoring::domain::analysis::ForceAnalysisInputs;
use jtbd_scoring::domain::foundation::{ErrorCode, Percentage};
use jtbd_scoring::domain::jtbd::{
    AdditionalOutcome, JobCategory, JobQuadrant, JobStatement, JobStatementBuilder,
    OutcomeMeasurement, OutcomeMilestone, OutcomeStatus, RiskLevel, TriggerWindow,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn force_inputs() -> ForceAnalysisInputs {
    serde_json::from_value(json!({
        "items": [
            { "description": "Reports take two days a month", "force_type": "push", "strength": 9, "impact_area": "operational" },
            { "description": "Lost a client over late reports", "force_type": "push", "strength": 8 },
            { "description": "Live dashboards", "force_type": "pull", "strength": 7 },
            { "description": "Data migration effort", "force_type": "anxiety", "strength": 6 },
            { "description": "Spreadsheets everyone knows", "force_type": "habit", "strength": 5 }
        ],
        "trigger_window": "immediate",
        "intensity_score": 9,
        "contract_loss": true
    }))
    .unwrap()
}

fn opportunity_query() -> EvaluateOpportunityQuery {
    EvaluateOpportunityQuery {
        job: ScoreJobStatementQuery {
            statement: JobStatement::new(
                "When client reporting eats two days every month, I want to automate the \
                 reports, so I can spend that time on strategy.",
            ),
            category: Some(JobCategory::ReportingSystems),
            quadrant: Some(JobQuadrant::Functional),
        },
        force_analysis: Some(EvaluateForceAnalysisQuery {
            name: "Reporting overhaul".to_string(),
            inputs: force_inputs(),
        }),
        outcome: Some(EvaluateOutcomeQuery {
            name: "Reporting hours".to_string(),
            metric: Some("Hours on reporting".to_string()),
            metric_unit: Some("h".to_string()),
            primary: OutcomeMeasurement::new(16.0, 10.0, 4.0),
            additional: vec![AdditionalOutcome::new(
                "Client retention",
                "Retention %",
                OutcomeMeasurement::new(80.0, 92.0, 90.0),
            )],
            milestones: vec![OutcomeMilestone::new("Dashboards live").due_on(date(2024, 4, 1))],
            today: date(2024, 3, 1),
        }),
    }
}

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn evaluates_full_opportunity_with_default_config() {
    let handler = EvaluateOpportunityHandler::new(&AppConfig::default().scoring).unwrap();
    let result = handler.handle(&opportunity_query()).unwrap();

    assert_eq!(result.clarity.score, Percentage::HUNDRED);

    let forces = result.force_analysis.unwrap();
    // push 17 * 0.75 = 12.75 -> 13, pull 5.25 -> 5, anxiety 4.5 -> 4, habit 3.75 -> 4
    assert_eq!(forces.analysis.scores.push, 13);
    assert_eq!(forces.analysis.scores.pull, 5);
    assert_eq!(forces.analysis.scores.anxiety, 4);
    assert_eq!(forces.analysis.scores.habit, 4);
    // 18 / 26 = 69.2
    assert_eq!(forces.analysis.momentum.value(), 69);
    // 69 + 20 + 10.5 + 15 > 100
    assert_eq!(forces.analysis.signal_strength, Percentage::HUNDRED);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(
        forces.analysis.opportunity_update.trigger_window,
        TriggerWindow::Immediate
    );
    assert!(forces.analysis.opportunity_update.contract_loss);

    let outcome = result.outcome.unwrap();
    assert_eq!(outcome.primary.status, OutcomeStatus::Improving);
    assert_eq!(outcome.additional[0].progress.status, OutcomeStatus::Exceeded);
    assert_eq!(outcome.milestones.overdue.len(), 0);
}

#[test]
fn configuration_file_changes_weighting() {
    let file = config_file(
        "[scoring]\ndefault_confidence_weight = 1.0\nmin_segment_length = 10\n",
    );
    let config = AppConfig::load_from_file(file.path()).unwrap();
    config.validate().unwrap();

    let handler = EvaluateOpportunityHandler::new(&config.scoring).unwrap();
    let forces = handler
        .handle(&opportunity_query())
        .unwrap()
        .force_analysis
        .unwrap();

    assert_eq!(forces.analysis.scores.push, 17);
    assert_eq!(forces.analysis.scores.anxiety, 6);
    // 24 / 35 = 68.6
    assert_eq!(forces.analysis.momentum.value(), 69);
}

#[test]
fn half_point_scores_round_to_even() {
    let handler = EvaluateOpportunityHandler::new(&AppConfig::default().scoring).unwrap();
    let query = EvaluateOpportunityQuery {
        job: ScoreJobStatementQuery {
            statement: JobStatement::new("Reports take too long"),
            category: Some(JobCategory::ReportingSystems),
            quadrant: None,
        },
        force_analysis: Some(EvaluateForceAnalysisQuery {
            name: "Small push".to_string(),
            inputs: serde_json::from_value(json!({
                "items": [
                    { "description": "Manual exports", "force_type": "push", "strength": 1 },
                    { "description": "Fear of change", "force_type": "anxiety", "strength": 7 }
                ],
                "trigger_window": "short",
                "intensity_score": 7,
                "confidence_weight": 1.0
            }))
            .unwrap(),
        }),
        ..Default::default()
    };
    let result = handler.handle(&query).unwrap();

    // 12.5 -> 12
    assert_eq!(result.clarity.score.value(), 12);
    let forces = result.force_analysis.unwrap();
    // 1 / 8 = 12.5 -> 12
    assert_eq!(forces.analysis.momentum.value(), 12);
    // 12 + 10 + 4.5 = 26.5 -> 26
    assert_eq!(forces.analysis.signal_strength.value(), 26);
    assert_eq!(result.risk_level, RiskLevel::High);
}

#[test]
fn out_of_range_strength_is_rejected_at_the_boundary() {
    let result = serde_json::from_value::<ForceAnalysisInputs>(json!({
        "items": [{ "description": "Too strong", "force_type": "push", "strength": 11 }]
    }));
    assert!(result.is_err());
}

#[test]
fn invalid_record_weight_surfaces_domain_error() {
    let mut query = opportunity_query();
    if let Some(forces) = query.force_analysis.as_mut() {
        forces.inputs.confidence_weight = Some(3.0);
    }

    let handler = EvaluateOpportunityHandler::new(&AppConfig::default().scoring).unwrap();
    let err = handler.handle(&query).unwrap_err();
    assert_eq!(err.code, ErrorCode::OutOfRange);
}

#[test]
fn result_bundle_serializes_with_snake_case_keys() {
    let handler = EvaluateOpportunityHandler::new(&AppConfig::default().scoring).unwrap();
    let result = handler.handle(&opportunity_query()).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["risk_level"], json!("low"));
    assert_eq!(value["clarity"]["score"], json!(100));
    assert_eq!(value["outcome"]["primary"]["status"], json!("improving"));
    assert_eq!(
        value["force_analysis"]["analysis"]["opportunity_update"]["trigger_window"],
        json!("immediate")
    );
}

#[test]
fn builder_output_scores_like_stored_statement() {
    let mut builder = JobStatementBuilder::new(10);
    builder.set_situation("client reporting eats two days every month");
    builder.set_category(Some(JobCategory::ReportingSystems));
    builder.advance().unwrap();
    builder.set_motivation("to automate the reports");
    builder.advance().unwrap();
    builder.set_outcome("spend that time on strategy");
    builder.set_quadrant(Some(JobQuadrant::Functional));
    builder.advance().unwrap();

    let completed = CompleteJobStatementHandler::new()
        .handle(CompleteJobStatementCommand { builder })
        .unwrap();

    let handler = EvaluateOpportunityHandler::new(&AppConfig::default().scoring).unwrap();
    let query = EvaluateOpportunityQuery {
        job: ScoreJobStatementQuery {
            statement: completed.built.statement.clone(),
            category: completed.built.category,
            quadrant: completed.built.quadrant,
        },
        ..Default::default()
    };
    let result = handler.handle(&query).unwrap();

    assert_eq!(result.clarity.score, completed.built.clarity_score);
    assert_eq!(result.risk_level, RiskLevel::Undefined);
}
