//! Force Analyzer - Runs the full force analysis pipeline.
//!
//! Aggregates force items, then derives momentum, signal strength and risk,
//! and packages the values the CRM writes back onto the opportunity.

use serde::{Deserialize, Serialize};

use super::{ForceAggregator, ForceScores, MomentumCalculator, RiskClassifier, SignalStrengthCalculator};
use crate::domain::foundation::{Percentage, ValidationError};
use crate::domain::jtbd::{ConfidenceWeight, ForceItem, IntensityScore, RiskLevel, TriggerWindow};

/// Snapshot of a force analysis record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForceAnalysisInputs {
    #[serde(default)]
    pub items: Vec<ForceItem>,
    #[serde(default)]
    pub trigger_window: Option<TriggerWindow>,
    #[serde(default)]
    pub intensity_score: Option<IntensityScore>,
    #[serde(default)]
    pub contract_loss: bool,
    /// Record-level weight; `None` falls back to the configured default.
    #[serde(default)]
    pub confidence_weight: Option<f64>,
}

/// Field values written back onto the opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityUpdate {
    pub momentum_score: Percentage,
    pub signal_strength: Percentage,
    pub trigger_window: TriggerWindow,
    pub contract_loss: bool,
    pub risk_level: RiskLevel,
}

/// Scores derived from one force analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceAnalysisResult {
    pub scores: ForceScores,
    pub confidence_weight: ConfidenceWeight,
    pub momentum: Percentage,
    pub signal_strength: Percentage,
    pub risk: RiskLevel,
    pub opportunity_update: OpportunityUpdate,
}

impl ForceAnalysisResult {
    /// Plain-text activity note describing the opportunity update.
    pub fn summary_note(&self, analysis_name: &str) -> String {
        let update = &self.opportunity_update;
        format!(
            "Force Analysis '{}' updated Opportunity:\n\
             - Momentum Score: {}\n\
             - Signal Strength: {}\n\
             - Decision Window: {}\n\
             - Risk Assessment: {}",
            analysis_name,
            update.momentum_score.value(),
            update.signal_strength.value(),
            update.trigger_window.label(),
            update.risk_level.label(),
        )
    }
}

pub struct ForceAnalyzer;

impl ForceAnalyzer {
    /// Runs aggregation, momentum, signal and risk for one analysis.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the record's confidence weight lies
    /// outside [0, 1] or is NaN, or when an aggregated score escapes its cap.
    pub fn analyze(
        inputs: &ForceAnalysisInputs,
        default_weight: ConfidenceWeight,
    ) -> Result<ForceAnalysisResult, ValidationError> {
        let weight = ConfidenceWeight::resolve(inputs.confidence_weight, default_weight)?;

        let scores = ForceAggregator::aggregate(&inputs.items, weight);
        let momentum = MomentumCalculator::from_scores(&scores)?;
        let signal_strength = SignalStrengthCalculator::compute(
            momentum,
            inputs.trigger_window,
            inputs.intensity_score,
            inputs.contract_loss,
        );
        let risk = RiskClassifier::classify(momentum);

        Ok(ForceAnalysisResult {
            scores,
            confidence_weight: weight,
            momentum,
            signal_strength,
            risk,
            opportunity_update: OpportunityUpdate {
                momentum_score: momentum,
                signal_strength,
                trigger_window: inputs.trigger_window.unwrap_or_default(),
                contract_loss: inputs.contract_loss,
                risk_level: risk,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::jtbd::ForceType;

    fn item(force_type: ForceType, strength: u8) -> ForceItem {
        ForceItem::new("observed", force_type, strength).unwrap()
    }

    fn sample_inputs() -> ForceAnalysisInputs {
        ForceAnalysisInputs {
            items: vec![
                item(ForceType::Push, 9),
                item(ForceType::Push, 7),
                item(ForceType::Pull, 8),
                item(ForceType::Anxiety, 6),
                item(ForceType::Habit, 4),
            ],
            trigger_window: Some(TriggerWindow::Short),
            intensity_score: Some(IntensityScore::try_new(8).unwrap()),
            contract_loss: false,
            confidence_weight: Some(1.0),
        }
    }

    #[test]
    fn full_pipeline() {
        let result = ForceAnalyzer::analyze(&sample_inputs(), ConfidenceWeight::default()).unwrap();

        assert_eq!(
            result.scores,
            ForceScores {
                push: 16,
                pull: 8,
                anxiety: 6,
                habit: 4
            }
        );
        // 24 / 34 = 70.6
        assert_eq!(result.momentum.value(), 71);
        // 71 + 10 + 7.5 = 88.5 -> 88
        assert_eq!(result.signal_strength.value(), 88);
        assert_eq!(result.risk, RiskLevel::Low);
    }

    #[test]
    fn missing_weight_uses_default() {
        let inputs = ForceAnalysisInputs {
            confidence_weight: None,
            ..sample_inputs()
        };
        let result = ForceAnalyzer::analyze(&inputs, ConfidenceWeight::default()).unwrap();
        assert_eq!(result.confidence_weight.value(), 0.75);
        // 16 * 0.75 = 12
        assert_eq!(result.scores.push, 12);
    }

    #[test]
    fn explicit_zero_weight_is_honoured() {
        let inputs = ForceAnalysisInputs {
            confidence_weight: Some(0.0),
            ..sample_inputs()
        };
        let result = ForceAnalyzer::analyze(&inputs, ConfidenceWeight::default()).unwrap();
        assert_eq!(result.scores, ForceScores::default());
        assert_eq!(result.momentum, Percentage::HALF);
    }

    #[test]
    fn invalid_weight_is_rejected() {
        let inputs = ForceAnalysisInputs {
            confidence_weight: Some(1.5),
            ..sample_inputs()
        };
        let err = ForceAnalyzer::analyze(&inputs, ConfidenceWeight::default()).unwrap_err();
        assert_eq!(err.field(), "confidence_weight");
    }

    #[test]
    fn empty_analysis_is_neutral_with_undefined_window() {
        let result =
            ForceAnalyzer::analyze(&ForceAnalysisInputs::default(), ConfidenceWeight::default())
                .unwrap();
        assert_eq!(result.momentum, Percentage::HALF);
        assert_eq!(result.signal_strength.value(), 45);
        assert_eq!(result.risk, RiskLevel::Medium);
        assert_eq!(result.opportunity_update.trigger_window, TriggerWindow::Undefined);
    }

    #[test]
    fn summary_note_lists_update() {
        let result = ForceAnalyzer::analyze(&sample_inputs(), ConfidenceWeight::default()).unwrap();
        let note = result.summary_note("Q3 reporting deal");

        assert!(note.starts_with("Force Analysis 'Q3 reporting deal' updated Opportunity:"));
        assert!(note.contains("- Momentum Score: 71"));
        assert!(note.contains("- Signal Strength: 88"));
        assert!(note.contains("- Decision Window: Short-term (1-3 months)"));
        assert!(note.contains("- Risk Assessment: Low"));
    }
}
