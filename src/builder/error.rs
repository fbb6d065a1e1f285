//! Build errors for the automaton builder.

use crate::core::AutomatonError;
use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    /// One or more transitions referenced states that do not exist.
    /// Every offending transition is reported, not only the first.
    #[error(
        "{} invalid transition(s); first: {}",
        .violations.len(),
        first_violation(.violations)
    )]
    InvalidTransitions { violations: Vec<AutomatonError> },

    /// The state count does not fit the backing graph's index space.
    #[error("Too many states: {nstates} (at most {max} supported)")]
    TooManyStates { nstates: usize, max: usize },
}

fn first_violation(violations: &[AutomatonError]) -> String {
    violations
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}
