//! Momentum Calculator - Share of change forces among all forces.

use super::{ForceScores, MAX_FORCE_SCORE};
use crate::domain::foundation::{Percentage, ValidationError};

/// Calculator for momentum towards change.
pub struct MomentumCalculator;

impl MomentumCalculator {
    /// Computes momentum from the four force scores.
    ///
    /// `round(100 × (push + pull) / (push + pull + anxiety + habit))`.
    /// With no forces at all the result is the neutral 50.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` when a score exceeds 50.
    pub fn compute(
        push: u8,
        pull: u8,
        anxiety: u8,
        habit: u8,
    ) -> Result<Percentage, ValidationError> {
        let scores = [("push", push), ("pull", pull), ("anxiety", anxiety), ("habit", habit)];
        for (field, score) in scores {
            if score > MAX_FORCE_SCORE {
                return Err(ValidationError::out_of_range(field, 0, MAX_FORCE_SCORE, score));
            }
        }

        let change = u32::from(push) + u32::from(pull);
        let resistance = u32::from(anxiety) + u32::from(habit);
        let total = change + resistance;

        if total == 0 {
            return Ok(Percentage::HALF);
        }

        Ok(Percentage::from_score(100.0 * f64::from(change) / f64::from(total)))
    }

    /// Computes momentum from aggregated scores.
    pub fn from_scores(scores: &ForceScores) -> Result<Percentage, ValidationError> {
        Self::compute(scores.push, scores.pull, scores.anxiety, scores.habit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn momentum(push: u8, pull: u8, anxiety: u8, habit: u8) -> u8 {
        MomentumCalculator::compute(push, pull, anxiety, habit)
            .unwrap()
            .value()
    }

    #[test]
    fn no_forces_is_neutral() {
        assert_eq!(MomentumCalculator::compute(0, 0, 0, 0), Ok(Percentage::HALF));
    }

    #[test]
    fn only_change_forces_is_full_momentum() {
        assert_eq!(MomentumCalculator::compute(10, 5, 0, 0), Ok(Percentage::HUNDRED));
    }

    #[test]
    fn only_resistance_is_zero_momentum() {
        assert_eq!(MomentumCalculator::compute(0, 0, 7, 3), Ok(Percentage::ZERO));
    }

    #[test]
    fn balanced_forces_are_fifty() {
        assert_eq!(momentum(10, 10, 10, 10), 50);
    }

    #[test]
    fn ratio_is_rounded() {
        // 20 / 30 = 66.67
        assert_eq!(momentum(12, 8, 6, 4), 67);
        // 1 / 8 = 12.5 -> 12
        assert_eq!(momentum(1, 0, 7, 0), 12);
        // 3 / 8 = 37.5 -> 38
        assert_eq!(momentum(3, 0, 5, 0), 38);
    }

    #[test]
    fn scores_above_cap_are_rejected() {
        assert_eq!(momentum(50, 50, 50, 50), 50);

        match MomentumCalculator::compute(200, 0, 0, 0) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "push");
                assert_eq!(actual, 200.0);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }

        let err = MomentumCalculator::compute(10, 10, 10, 51).unwrap_err();
        assert_eq!(err.field(), "habit");
    }

    #[test]
    fn from_scores_matches_compute() {
        let scores = ForceScores {
            push: 30,
            pull: 20,
            anxiety: 15,
            habit: 10,
        };
        assert_eq!(
            MomentumCalculator::from_scores(&scores),
            MomentumCalculator::compute(30, 20, 15, 10)
        );

        let overflowing = ForceScores { pull: 60, ..scores };
        assert!(MomentumCalculator::from_scores(&overflowing).is_err());
    }
}
