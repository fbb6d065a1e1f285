//! Errors raised by automaton operations.

use super::automaton::StateId;
use thiserror::Error;

/// Errors that can occur when querying or mutating an automaton.
///
/// Every failure is scoped to the call that raised it: the automaton is
/// left exactly as it was before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AutomatonError {
    /// The state is not live in this automaton.
    #[error("State {state} is not a live state (automaton has {nstates} states)")]
    InvalidState { state: StateId, nstates: usize },

    /// The transition handle does not resolve to a live transition.
    #[error("Transition {transition} not found")]
    TransitionNotFound { transition: String },

    /// The variant does not support this operation.
    #[error("Operation '{operation}' is not supported by {variant}")]
    UnsupportedOperation {
        operation: &'static str,
        variant: &'static str,
    },
}

impl AutomatonError {
    pub(crate) fn not_found(transition: impl std::fmt::Display) -> Self {
        Self::TransitionNotFound {
            transition: transition.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_state_message_names_state() {
        let err = AutomatonError::InvalidState {
            state: StateId::new(4),
            nstates: 2,
        };
        assert_eq!(
            err.to_string(),
            "State 4 is not a live state (automaton has 2 states)"
        );
    }

    #[test]
    fn unsupported_operation_message() {
        let err = AutomatonError::UnsupportedOperation {
            operation: "rem_state",
            variant: "OneStateAutomaton",
        };
        assert!(err.to_string().contains("rem_state"));
        assert!(err.to_string().contains("OneStateAutomaton"));
    }
}
