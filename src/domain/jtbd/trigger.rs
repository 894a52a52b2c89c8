//! Decision-window and pain-intensity context for a force analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Estimated time until the buyer decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerWindow {
    Immediate,
    Short,
    Medium,
    Long,
    #[default]
    Undefined,
}

impl TriggerWindow {
    /// Points added to momentum when deriving signal strength.
    pub fn signal_adjustment(&self) -> i32 {
        match self {
            TriggerWindow::Immediate => 20,
            TriggerWindow::Short => 10,
            TriggerWindow::Medium => 0,
            TriggerWindow::Long => -10,
            TriggerWindow::Undefined => -5,
        }
    }

    /// Adjustment for an optional window; unset is treated as undefined.
    pub fn adjustment_for(window: Option<TriggerWindow>) -> i32 {
        window.unwrap_or_default().signal_adjustment()
    }

    pub fn label(&self) -> &'static str {
        match self {
            TriggerWindow::Immediate => "Immediate (0-30 days)",
            TriggerWindow::Short => "Short-term (1-3 months)",
            TriggerWindow::Medium => "Medium-term (3-6 months)",
            TriggerWindow::Long => "Long-term (6+ months)",
            TriggerWindow::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for TriggerWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Overall intensity of the buyer's pain on a 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct IntensityScore(u8);

impl IntensityScore {
    /// Midpoint of the scale; scores above it raise the signal.
    pub const MIDPOINT: f64 = 5.5;

    /// Signal points per intensity step away from the midpoint.
    pub const POINTS_PER_STEP: f64 = 3.0;

    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=10).contains(&value) {
            return Err(ValidationError::out_of_range("intensity_score", 1, 10, value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Signal adjustment in the range -13.5..=13.5.
    pub fn signal_adjustment(&self) -> f64 {
        (f64::from(self.0) - Self::MIDPOINT) * Self::POINTS_PER_STEP
    }
}

impl TryFrom<u8> for IntensityScore {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<IntensityScore> for u8 {
    fn from(score: IntensityScore) -> Self {
        score.0
    }
}
