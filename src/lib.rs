//! JTBD Scoring - Jobs-to-be-Done scoring engine for CRM opportunities
//!
//! This crate derives job clarity, force-analysis momentum and signal
//! strength, deal risk, and outcome progress from the JTBD fields captured
//! on an opportunity. All calculations are pure; persistence stays with the
//! caller.

pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;
