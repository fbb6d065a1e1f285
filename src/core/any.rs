//! Runtime dispatch over automaton variants.
//!
//! Generic code should take `A: Automaton`. [`AnyAutomaton`] is for the
//! places where a model must hold automata of different variants side by
//! side.

use super::automaton::{Automaton, Label, StateId};
use super::error::AutomatonError;
use super::labeled::{Edge, LabeledAutomaton};
use super::one_state::{OneStateAutomaton, SelfLoop};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Transition handle of an [`AnyAutomaton`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnyTransition {
    Edge(Edge),
    SelfLoop(SelfLoop),
}

impl Display for AnyTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edge(edge) => Display::fmt(edge, f),
            Self::SelfLoop(self_loop) => Display::fmt(self_loop, f),
        }
    }
}

impl From<Edge> for AnyTransition {
    fn from(edge: Edge) -> Self {
        Self::Edge(edge)
    }
}

impl From<SelfLoop> for AnyTransition {
    fn from(self_loop: SelfLoop) -> Self {
        Self::SelfLoop(self_loop)
    }
}

/// Automaton of any supported variant.
///
/// A handle of the wrong variant never resolves: `has_transition` is
/// `false` and `event`/`rem_transition` report
/// [`AutomatonError::TransitionNotFound`].
#[derive(Clone, Debug)]
pub enum AnyAutomaton {
    Labeled(LabeledAutomaton),
    OneState(OneStateAutomaton),
}

impl From<LabeledAutomaton> for AnyAutomaton {
    fn from(automaton: LabeledAutomaton) -> Self {
        Self::Labeled(automaton)
    }
}

impl From<OneStateAutomaton> for AnyAutomaton {
    fn from(automaton: OneStateAutomaton) -> Self {
        Self::OneState(automaton)
    }
}

type BoxedTransitions<'a> = Box<dyn Iterator<Item = AnyTransition> + 'a>;

impl Automaton for AnyAutomaton {
    type Transition = AnyTransition;

    fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        let states: Box<dyn Iterator<Item = StateId> + '_> = match self {
            Self::Labeled(a) => Box::new(a.states()),
            Self::OneState(a) => Box::new(a.states()),
        };
        states
    }

    fn nstates(&self) -> usize {
        match self {
            Self::Labeled(a) => a.nstates(),
            Self::OneState(a) => a.nstates(),
        }
    }

    fn transitions(&self) -> impl Iterator<Item = AnyTransition> + '_ {
        let transitions: BoxedTransitions<'_> = match self {
            Self::Labeled(a) => Box::new(a.transitions().map(AnyTransition::from)),
            Self::OneState(a) => Box::new(a.transitions().map(AnyTransition::from)),
        };
        transitions
    }

    fn ntransitions(&self) -> usize {
        match self {
            Self::Labeled(a) => a.ntransitions(),
            Self::OneState(a) => a.ntransitions(),
        }
    }

    fn transition_type(&self) -> &'static str {
        match self {
            Self::Labeled(a) => a.transition_type(),
            Self::OneState(a) => a.transition_type(),
        }
    }

    fn add_transition(
        &mut self,
        source: StateId,
        target: StateId,
        label: Label,
    ) -> Result<AnyTransition, AutomatonError> {
        match self {
            Self::Labeled(a) => a.add_transition(source, target, label).map(Into::into),
            Self::OneState(a) => a.add_transition(source, target, label).map(Into::into),
        }
    }

    fn has_transition(&self, transition: AnyTransition) -> bool {
        match (self, transition) {
            (Self::Labeled(a), AnyTransition::Edge(edge)) => a.has_transition(edge),
            (Self::OneState(a), AnyTransition::SelfLoop(self_loop)) => {
                a.has_transition(self_loop)
            }
            _ => false,
        }
    }

    fn rem_transition(&mut self, transition: AnyTransition) -> Result<(), AutomatonError> {
        match (self, transition) {
            (Self::Labeled(a), AnyTransition::Edge(edge)) => a.rem_transition(edge),
            (Self::OneState(a), AnyTransition::SelfLoop(self_loop)) => {
                a.rem_transition(self_loop)
            }
            _ => Err(AutomatonError::not_found(transition)),
        }
    }

    fn rem_state(&mut self, state: StateId) -> Result<(), AutomatonError> {
        match self {
            Self::Labeled(a) => a.rem_state(state),
            Self::OneState(a) => a.rem_state(state),
        }
    }

    // Endpoints are intrinsic to the handle, whichever variant it came from.
    fn source(&self, transition: AnyTransition) -> StateId {
        match transition {
            AnyTransition::Edge(edge) => edge.source,
            AnyTransition::SelfLoop(_) => OneStateAutomaton::STATE,
        }
    }

    fn target(&self, transition: AnyTransition) -> StateId {
        match transition {
            AnyTransition::Edge(edge) => edge.target,
            AnyTransition::SelfLoop(_) => OneStateAutomaton::STATE,
        }
    }

    fn event(&self, transition: AnyTransition) -> Result<Label, AutomatonError> {
        match (self, transition) {
            (Self::Labeled(a), AnyTransition::Edge(edge)) => a.event(edge),
            (Self::OneState(a), AnyTransition::SelfLoop(self_loop)) => a.event(self_loop),
            _ => Err(AutomatonError::not_found(transition)),
        }
    }

    fn in_transitions(&self, state: StateId) -> impl Iterator<Item = AnyTransition> + '_ {
        let transitions: BoxedTransitions<'_> = match self {
            Self::Labeled(a) => Box::new(a.in_transitions(state).map(AnyTransition::from)),
            Self::OneState(a) => Box::new(a.in_transitions(state).map(AnyTransition::from)),
        };
        transitions
    }

    fn out_transitions(&self, state: StateId) -> impl Iterator<Item = AnyTransition> + '_ {
        let transitions: BoxedTransitions<'_> = match self {
            Self::Labeled(a) => Box::new(a.out_transitions(state).map(AnyTransition::from)),
            Self::OneState(a) => Box::new(a.out_transitions(state).map(AnyTransition::from)),
        };
        transitions
    }
}
