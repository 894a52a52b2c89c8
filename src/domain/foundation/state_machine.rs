//! State machine trait for step and status enums.
//!
//! Workflow steps (such as the job statement builder) implement this trait
//! so that every transition is checked in one place.

use super::ValidationError;

/// Trait for enums that represent a finite set of workflow states.
///
/// Implementors describe the legal edges; `transition_to` and
/// `is_terminal` come for free.
///
/// ```ignore
/// let step = BuilderStep::Situation.transition_to(BuilderStep::Motivation)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Review {
        Drafting,
        Reviewing,
        Saved,
    }

    impl StateMachine for Review {
        fn can_transition_to(&self, target: &Self) -> bool {
            self.valid_transitions().contains(target)
        }

        fn valid_transitions(&self) -> Vec<Self> {
            match self {
                Review::Drafting => vec![Review::Reviewing],
                Review::Reviewing => vec![Review::Drafting, Review::Saved],
                Review::Saved => vec![],
            }
        }
    }

    #[test]
    fn transition_to_follows_declared_edges() {
        assert_eq!(Review::Drafting.transition_to(Review::Reviewing), Ok(Review::Reviewing));
        assert_eq!(Review::Reviewing.transition_to(Review::Drafting), Ok(Review::Drafting));
    }

    #[test]
    fn transition_to_rejects_skipped_step() {
        let err = Review::Drafting.transition_to(Review::Saved).unwrap_err();
        assert_eq!(err.field(), "state_transition");
        assert!(err.to_string().contains("Drafting"));
    }

    #[test]
    fn saved_is_terminal() {
        assert!(Review::Saved.is_terminal());
        assert!(!Review::Drafting.is_terminal());
    }
}
