//! Closed-form automaton with a single state and labeled self-loops.

use super::automaton::{Automaton, Label, StateId};
use super::error::AutomatonError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Transition handle of a [`OneStateAutomaton`]: the label itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelfLoop(Label);

impl SelfLoop {
    pub const fn new(label: Label) -> Self {
        Self(label)
    }

    pub const fn label(self) -> Label {
        self.0
    }
}

impl Display for SelfLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "self-loop #{}", self.0)
    }
}

/// Automaton with exactly one state and `nt` self-loops labeled `1..=nt`.
///
/// Used as a fixed template; it cannot be mutated.
///
/// # Example
///
/// ```rust
/// use hybrid_automata::core::{Automaton, OneStateAutomaton, StateId};
///
/// let automaton = OneStateAutomaton::new(3);
///
/// assert_eq!(automaton.nstates(), 1);
/// assert_eq!(automaton.labels(), vec![1, 2, 3]);
/// for t in automaton.transitions() {
///     assert_eq!(automaton.source(t), StateId::new(0));
///     assert_eq!(automaton.target(t), StateId::new(0));
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneStateAutomaton {
    ntransitions: Label,
}

impl OneStateAutomaton {
    /// The only state.
    pub const STATE: StateId = StateId::new(0);

    pub fn new(ntransitions: Label) -> Self {
        Self { ntransitions }
    }

    fn unsupported(operation: &'static str) -> AutomatonError {
        AutomatonError::UnsupportedOperation {
            operation,
            variant: "OneStateAutomaton",
        }
    }
}

impl Automaton for OneStateAutomaton {
    type Transition = SelfLoop;

    fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        std::iter::once(Self::STATE)
    }

    fn nstates(&self) -> usize {
        1
    }

    fn transitions(&self) -> impl Iterator<Item = SelfLoop> + '_ {
        (1..=self.ntransitions).map(SelfLoop)
    }

    fn ntransitions(&self) -> usize {
        self.ntransitions as usize
    }

    fn add_transition(
        &mut self,
        _source: StateId,
        _target: StateId,
        _label: Label,
    ) -> Result<SelfLoop, AutomatonError> {
        Err(Self::unsupported("add_transition"))
    }

    fn has_transition(&self, transition: SelfLoop) -> bool {
        (1..=self.ntransitions).contains(&transition.0)
    }

    fn rem_transition(&mut self, _transition: SelfLoop) -> Result<(), AutomatonError> {
        Err(Self::unsupported("rem_transition"))
    }

    fn rem_state(&mut self, _state: StateId) -> Result<(), AutomatonError> {
        Err(Self::unsupported("rem_state"))
    }

    fn source(&self, _transition: SelfLoop) -> StateId {
        Self::STATE
    }

    fn target(&self, _transition: SelfLoop) -> StateId {
        Self::STATE
    }

    fn event(&self, transition: SelfLoop) -> Result<Label, AutomatonError> {
        if self.has_transition(transition) {
            Ok(transition.0)
        } else {
            Err(AutomatonError::not_found(transition))
        }
    }

    // With a single state every transition is incident to it.
    fn in_transitions(&self, _state: StateId) -> impl Iterator<Item = SelfLoop> + '_ {
        self.transitions()
    }

    fn out_transitions(&self, _state: StateId) -> impl Iterator<Item = SelfLoop> + '_ {
        self.transitions()
    }
}
