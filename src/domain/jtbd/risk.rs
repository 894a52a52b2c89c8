//! Deal risk bands derived from momentum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk that the opportunity stalls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    /// No force analysis has been scored yet.
    #[default]
    Undefined,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Undefined => "Undefined",
        }
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, RiskLevel::Undefined)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
