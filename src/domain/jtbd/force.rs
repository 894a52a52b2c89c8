//! Force items for the push/pull/anxiety/habit analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Confidence weight applied when the source record carries none.
pub const DEFAULT_CONFIDENCE_WEIGHT: f64 = 0.75;

/// The four forces acting on a buying decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForceType {
    /// Away from the status quo.
    Push,
    /// Towards the new solution.
    Pull,
    /// About the new solution.
    Anxiety,
    /// Attachment to the status quo.
    Habit,
}

impl ForceType {
    /// Returns all force types in canonical order.
    pub fn all() -> &'static [ForceType] {
        &[ForceType::Push, ForceType::Pull, ForceType::Anxiety, ForceType::Habit]
    }

    /// True for forces that drive change (push, pull).
    pub fn drives_change(&self) -> bool {
        matches!(self, ForceType::Push | ForceType::Pull)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ForceType::Push => "Push (Away from Status Quo)",
            ForceType::Pull => "Pull (Towards New Solution)",
            ForceType::Anxiety => "Anxiety (About New Solution)",
            ForceType::Habit => "Habit (Attachment to Status Quo)",
        }
    }
}

impl fmt::Display for ForceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ForceType::Push => "push",
            ForceType::Pull => "pull",
            ForceType::Anxiety => "anxiety",
            ForceType::Habit => "habit",
        };
        write!(f, "{}", s)
    }
}

/// Strength of a single force on a 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ForceStrength(u8);

impl ForceStrength {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Creates a strength, rejecting values outside 1-10.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "strength",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for ForceStrength {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for ForceStrength {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ForceStrength> for u8 {
    fn from(strength: ForceStrength) -> Self {
        strength.0
    }
}

/// Primary area affected by a force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactArea {
    Financial,
    Operational,
    Competitive,
    Personal,
    Strategic,
    Risk,
    Other,
}

impl ImpactArea {
    pub fn label(&self) -> &'static str {
        match self {
            ImpactArea::Financial => "Financial",
            ImpactArea::Operational => "Operational",
            ImpactArea::Competitive => "Competitive",
            ImpactArea::Personal => "Personal",
            ImpactArea::Strategic => "Strategic",
            ImpactArea::Risk => "Risk/Compliance",
            ImpactArea::Other => "Other",
        }
    }
}

/// One observed force in an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceItem {
    pub description: String,
    pub force_type: ForceType,
    pub strength: ForceStrength,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_area: Option<ImpactArea>,
}

impl ForceItem {
    /// Creates a force item, validating the strength.
    pub fn new(
        description: impl Into<String>,
        force_type: ForceType,
        strength: u8,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            description: description.into(),
            force_type,
            strength: ForceStrength::try_new(strength)?,
            impact_area: None,
        })
    }

    /// Tags the item with the area it affects.
    pub fn with_impact_area(mut self, area: ImpactArea) -> Self {
        self.impact_area = Some(area);
        self
    }
}

/// Weight in [0, 1] expressing how much the force data can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceWeight(f64);

impl ConfidenceWeight {
    /// Full confidence: forces are summed unweighted.
    pub const FULL: Self = Self(1.0);

    /// Creates a weight, rejecting NaN and values outside [0, 1].
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if value.is_nan() {
            return Err(ValidationError::invalid_format(
                "confidence_weight",
                "not a number",
            ));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("confidence_weight", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Uses the record's weight when present, otherwise the configured default.
    pub fn resolve(explicit: Option<f64>, default: ConfidenceWeight) -> Result<Self, ValidationError> {
        match explicit {
            Some(value) => Self::try_new(value),
            None => Ok(default),
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for ConfidenceWeight {
    fn default() -> Self {
        Self(DEFAULT_CONFIDENCE_WEIGHT)
    }
}

impl TryFrom<f64> for ConfidenceWeight {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ConfidenceWeight> for f64 {
    fn from(weight: ConfidenceWeight) -> Self {
        weight.0
    }
}
