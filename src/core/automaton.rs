//! The capability contract shared by every automaton variant.
//!
//! Hybrid-system algorithms (reachability, controller synthesis,
//! composition) are written against the [`Automaton`] trait only and never
//! touch a variant's backing structure.

use super::error::AutomatonError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Integer event label (symbol) carried by a transition.
pub type Label = u32;

/// Identifier of a discrete state (mode).
///
/// States are numbered densely from `0`. Continuous dynamics, invariant
/// regions and switching laws are attached externally, keyed by this id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(usize);

impl StateId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for StateId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Uniform surface every automaton variant implements.
///
/// Sequence-producing methods return iterators that borrow the automaton,
/// so a sequence can never outlive a mutation. Callers that need to mutate
/// while walking a sequence must collect it first.
///
/// # Example
///
/// ```rust
/// use hybrid_automata::core::{Automaton, LabeledAutomaton, StateId};
///
/// let mut automaton = LabeledAutomaton::new(2);
/// let t = automaton
///     .add_transition(StateId::new(0), StateId::new(1), 7)
///     .unwrap();
///
/// assert!(automaton.has_transition(t));
/// assert_eq!(automaton.source(t), StateId::new(0));
/// assert_eq!(automaton.target(t), StateId::new(1));
/// assert_eq!(automaton.event(t), Ok(7));
/// assert_eq!(automaton.ntransitions(), automaton.transitions().count());
/// ```
pub trait Automaton {
    /// Handle identifying a transition of this variant.
    type Transition: Copy + Eq + Hash + Debug;

    /// All live states, in an order that is stable while unmutated.
    fn states(&self) -> impl Iterator<Item = StateId> + '_;

    /// Number of live states.
    fn nstates(&self) -> usize;

    /// Check whether `state` is live.
    ///
    /// Default implementation relies on states being numbered densely.
    fn has_state(&self, state: StateId) -> bool {
        state.index() < self.nstates()
    }

    /// All transitions.
    fn transitions(&self) -> impl Iterator<Item = Self::Transition> + '_;

    /// Number of transitions.
    fn ntransitions(&self) -> usize;

    /// Name of the handle type used by this variant.
    fn transition_type(&self) -> &'static str {
        std::any::type_name::<Self::Transition>()
    }

    /// Insert a transition from `source` to `target` labeled `label`.
    ///
    /// Fails with [`AutomatonError::InvalidState`] if either endpoint is not live.
    fn add_transition(
        &mut self,
        source: StateId,
        target: StateId,
        label: Label,
    ) -> Result<Self::Transition, AutomatonError>;

    fn has_transition(&self, transition: Self::Transition) -> bool;

    /// Remove a transition.
    ///
    /// Fails with [`AutomatonError::TransitionNotFound`] if it is not present.
    fn rem_transition(&mut self, transition: Self::Transition) -> Result<(), AutomatonError>;

    /// Remove a state together with every transition incident to it.
    fn rem_state(&mut self, state: StateId) -> Result<(), AutomatonError>;

    fn source(&self, transition: Self::Transition) -> StateId;

    fn target(&self, transition: Self::Transition) -> StateId;

    /// Event label of a transition.
    fn event(&self, transition: Self::Transition) -> Result<Label, AutomatonError>;

    /// Alias of [`Automaton::event`].
    fn symbol(&self, transition: Self::Transition) -> Result<Label, AutomatonError> {
        self.event(transition)
    }

    /// Transitions whose target is `state`.
    fn in_transitions(&self, state: StateId) -> impl Iterator<Item = Self::Transition> + '_;

    /// Transitions whose source is `state`.
    fn out_transitions(&self, state: StateId) -> impl Iterator<Item = Self::Transition> + '_;

    fn in_degree(&self, state: StateId) -> usize {
        self.in_transitions(state).count()
    }

    fn out_degree(&self, state: StateId) -> usize {
        self.out_transitions(state).count()
    }

    /// Sorted set of labels currently carried by some transition.
    fn labels(&self) -> Vec<Label> {
        let mut labels: Vec<Label> = self
            .transitions()
            .filter_map(|t| self.event(t).ok())
            .collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }
}
