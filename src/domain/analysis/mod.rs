//! Analysis Module - Pure scoring services for JTBD records.
//!
//! This module contains stateless calculators that turn the fields of a
//! job statement, force analysis or outcome mapping into derived scores.
//!
//! # Components
//!
//! - `StatementParser` - Splits "When …, I want …, so I can …" into segments
//! - `ClarityScorer` - Completeness score for a job definition
//! - `ForceAggregator` - Weighted push/pull/anxiety/habit sub-scores
//! - `MomentumCalculator` - Change forces versus resistance forces
//! - `SignalStrengthCalculator` - Momentum adjusted for urgency and triggers
//! - `RiskClassifier` - Momentum to risk band
//! - `ForceAnalyzer` - The full force pipeline and opportunity update
//! - `OutcomeEngine` - Outcome progress and status
//! - `MilestoneTracker` - Milestone completion summary
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take value
//! objects as input and return computed results, so they can be called from
//! any thread without coordination.

mod clarity_scorer;
mod force_aggregator;
mod force_analyzer;
mod milestone_tracker;
mod momentum_calculator;
mod outcome_engine;
mod risk_classifier;
mod signal_calculator;
mod statement_parser;

pub use clarity_scorer::{
    ClarityInputs, ClarityScorer, JobClarity, CLASSIFICATION_WEIGHT, MIN_SEGMENT_LENGTH,
    SEGMENT_WEIGHT,
};
pub use force_aggregator::{ForceAggregator, ForceScores, MAX_FORCE_SCORE};
pub use force_analyzer::{
    ForceAnalysisInputs, ForceAnalysisResult, ForceAnalyzer, OpportunityUpdate,
};
pub use milestone_tracker::{MilestoneSummary, MilestoneTracker};
pub use momentum_calculator::MomentumCalculator;
pub use outcome_engine::{OutcomeEngine, OutcomeProgress};
pub use risk_classifier::{RiskClassifier, HIGH_RISK_BELOW, MEDIUM_RISK_BELOW};
pub use signal_calculator::{SignalStrengthCalculator, CONTRACT_LOSS_BONUS};
pub use statement_parser::StatementParser;
