//! Risk Classifier - Maps momentum to a risk band.

use crate::domain::foundation::Percentage;
use crate::domain::jtbd::RiskLevel;

/// Momentum below this is high risk.
pub const HIGH_RISK_BELOW: u8 = 30;

/// Momentum below this (and at least `HIGH_RISK_BELOW`) is medium risk.
pub const MEDIUM_RISK_BELOW: u8 = 60;

pub struct RiskClassifier;

impl RiskClassifier {
    /// `< 30` high, `< 60` medium, otherwise low.
    pub fn classify(momentum: Percentage) -> RiskLevel {
        match momentum.value() {
            m if m < HIGH_RISK_BELOW => RiskLevel::High,
            m if m < MEDIUM_RISK_BELOW => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }
}
