//! Builder for constructing labeled automata.

use crate::builder::error::BuildError;
use crate::core::{Automaton, AutomatonError, Label, LabeledAutomaton, StateId};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

type EndpointCheck = Validation<(), NonEmptyVec<AutomatonError>>;

/// Builder for constructing a [`LabeledAutomaton`] with a fluent API.
///
/// Transitions are validated as a batch before anything is inserted, and
/// every invalid endpoint is reported in one [`BuildError`].
///
/// # Example
///
/// ```rust
/// use hybrid_automata::builder::AutomatonBuilder;
/// use hybrid_automata::core::Automaton;
///
/// let light = AutomatonBuilder::new(2)
///     .transition(0, 0, 1)
///     .transition(1, 1, 1)
///     .transition(0, 1, 2)
///     .transition(1, 0, 3)
///     .build()
///     .unwrap();
///
/// assert_eq!(light.ntransitions(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    nstates: usize,
    transitions: Vec<(StateId, StateId, Label)>,
}

impl AutomatonBuilder {
    /// Create a builder for an automaton with `nstates` states.
    pub fn new(nstates: usize) -> Self {
        Self {
            nstates,
            transitions: Vec::new(),
        }
    }

    /// Add a transition between the states with indices `source` and `target`.
    pub fn transition(mut self, source: usize, target: usize, label: Label) -> Self {
        self.transitions
            .push((StateId::new(source), StateId::new(target), label));
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (StateId, StateId, Label)>,
    {
        self.transitions.extend(transitions);
        self
    }

    fn check_endpoint(&self, state: StateId) -> EndpointCheck {
        if state.index() < self.nstates {
            Validation::success(())
        } else {
            Validation::fail(AutomatonError::InvalidState {
                state,
                nstates: self.nstates,
            })
        }
    }

    /// Check every transition endpoint, accumulating ALL violations.
    pub fn validate(&self) -> EndpointCheck {
        let mut checks: Vec<EndpointCheck> = Vec::new();

        for &(source, target, _) in &self.transitions {
            checks.push(self.check_endpoint(source));
            if target != source {
                checks.push(self.check_endpoint(target));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the automaton.
    /// Returns an error listing every invalid transition endpoint, or
    /// [`BuildError::TooManyStates`] if the state count cannot be indexed.
    pub fn build(self) -> Result<LabeledAutomaton, BuildError> {
        if self.nstates > LabeledAutomaton::MAX_STATES {
            return Err(BuildError::TooManyStates {
                nstates: self.nstates,
                max: LabeledAutomaton::MAX_STATES,
            });
        }

        if let Validation::Failure(errors) = self.validate() {
            return Err(BuildError::InvalidTransitions {
                violations: errors.iter().cloned().collect(),
            });
        }

        let mut automaton = LabeledAutomaton::with_capacity(self.nstates, self.transitions.len());

        // Repeated pairs overwrite; `add_transition` warns when the label changes.
        for (source, target, label) in self.transitions {
            automaton
                .add_transition(source, target, label)
                .map_err(|e| BuildError::InvalidTransitions {
                    violations: vec![e],
                })?;
        }

        debug!(
            nstates = automaton.nstates(),
            ntransitions = automaton.ntransitions(),
            "built labeled automaton"
        );
        Ok(automaton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Edge;

    #[test]
    fn builds_empty_automaton() {
        let automaton = AutomatonBuilder::new(3).build().unwrap();

        assert_eq!(automaton.nstates(), 3);
        assert_eq!(automaton.ntransitions(), 0);
    }

    #[test]
    fn fluent_api_builds_automaton() {
        let automaton = AutomatonBuilder::new(2)
            .transition(0, 1, 4)
            .transition(1, 0, 5)
            .build()
            .unwrap();

        assert_eq!(automaton.ntransitions(), 2);
        assert_eq!(
            automaton.event(Edge::new(StateId::new(1), StateId::new(0))),
            Ok(5)
        );
    }

    #[test]
    fn add_multiple_transitions() {
        let transitions = vec![
            (StateId::new(0), StateId::new(1), 1),
            (StateId::new(1), StateId::new(2), 2),
        ];

        let automaton = AutomatonBuilder::new(3)
            .transitions(transitions)
            .build()
            .unwrap();

        assert_eq!(automaton.ntransitions(), 2);
    }

    #[test]
    fn builder_accumulates_all_violations() {
        let result = AutomatonBuilder::new(2)
            .transition(0, 5, 1)
            .transition(0, 1, 2)
            .transition(7, 8, 3)
            .build();

        match result {
            Err(BuildError::InvalidTransitions { violations }) => {
                assert_eq!(violations.len(), 3);
                assert!(violations.iter().all(|v| matches!(
                    v,
                    AutomatonError::InvalidState { nstates: 2, .. }
                )));
            }
            Ok(_) => panic!("Expected violations, got automaton"),
            Err(other) => panic!("Expected InvalidTransitions, got {other:?}"),
        }
    }

    #[test]
    fn invalid_self_loop_reported_once() {
        let result = AutomatonBuilder::new(1).transition(3, 3, 1).validate();

        match result {
            Validation::Failure(errors) => assert_eq!(errors.len(), 1),
            Validation::Success(_) => panic!("Expected failure"),
        }
    }

    #[test]
    fn repeated_pair_keeps_last_label() {
        let automaton = AutomatonBuilder::new(2)
            .transition(0, 1, 1)
            .transition(0, 1, 9)
            .build()
            .unwrap();

        assert_eq!(automaton.ntransitions(), 1);
        assert_eq!(
            automaton.event(Edge::new(StateId::new(0), StateId::new(1))),
            Ok(9)
        );
    }

    #[test]
    fn state_count_beyond_index_space_is_rejected() {
        let result = AutomatonBuilder::new(usize::MAX).transition(0, 1, 1).build();

        assert_eq!(
            result.err(),
            Some(BuildError::TooManyStates {
                nstates: usize::MAX,
                max: LabeledAutomaton::MAX_STATES,
            })
        );
    }

    #[test]
    fn validate_succeeds_for_valid_transitions() {
        let builder = AutomatonBuilder::new(2).transition(0, 1, 1);
        assert!(builder.validate().is_success());
    }
}
