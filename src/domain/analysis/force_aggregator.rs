//! Force Aggregator - Weighted push/pull/anxiety/habit sub-scores.

use serde::{Deserialize, Serialize};

use crate::domain::jtbd::{ConfidenceWeight, ForceItem, ForceType};

/// Upper bound for each aggregated force score.
pub const MAX_FORCE_SCORE: u8 = 50;

/// Aggregated strength per force type, each in 0-50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ForceScores {
    pub push: u8,
    pub pull: u8,
    pub anxiety: u8,
    pub habit: u8,
}

impl ForceScores {
    /// Returns the score for one force type.
    pub fn get(&self, force_type: ForceType) -> u8 {
        match force_type {
            ForceType::Push => self.push,
            ForceType::Pull => self.pull,
            ForceType::Anxiety => self.anxiety,
            ForceType::Habit => self.habit,
        }
    }

    /// Push plus pull.
    pub fn change(&self) -> u32 {
        u32::from(self.push) + u32::from(self.pull)
    }

    /// Anxiety plus habit.
    pub fn resistance(&self) -> u32 {
        u32::from(self.anxiety) + u32::from(self.habit)
    }

    /// The force type with the highest score; ties resolve in canonical order.
    pub fn dominant(&self) -> Option<ForceType> {
        ForceType::all()
            .iter()
            .copied()
            .filter(|t| self.get(*t) > 0)
            .fold(None, |best: Option<ForceType>, t| match best {
                Some(b) if self.get(b) >= self.get(t) => Some(b),
                _ => Some(t),
            })
    }
}

/// Calculator for aggregated force scores.
pub struct ForceAggregator;

impl ForceAggregator {
    /// Sums item strengths per force type, weights the sum, rounds and caps.
    ///
    /// `score = min(round(sum(strength) × weight), 50)`, halves to even. Types with no items
    /// score 0. A weight of 0 zeroes every score; a weight of 1 leaves sums
    /// unweighted.
    pub fn aggregate<'a, I>(items: I, weight: ConfidenceWeight) -> ForceScores
    where
        I: IntoIterator<Item = &'a ForceItem>,
    {
        let mut sums = [0u32; 4];
        for item in items {
            sums[Self::slot(item.force_type)] += u32::from(item.strength.value());
        }

        let weighted = |sum: u32| -> u8 {
            let raw = (f64::from(sum) * weight.value()).round_ties_even();
            raw.min(f64::from(MAX_FORCE_SCORE)) as u8
        };

        ForceScores {
            push: weighted(sums[Self::slot(ForceType::Push)]),
            pull: weighted(sums[Self::slot(ForceType::Pull)]),
            anxiety: weighted(sums[Self::slot(ForceType::Anxiety)]),
            habit: weighted(sums[Self::slot(ForceType::Habit)]),
        }
    }

    fn slot(force_type: ForceType) -> usize {
        match force_type {
            ForceType::Push => 0,
            ForceType::Pull => 1,
            ForceType::Anxiety => 2,
            ForceType::Habit => 3,
        }
    }
}
