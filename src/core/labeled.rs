//! Graph-backed automaton with one integer label per ordered state pair.

use super::automaton::{Automaton, Label, StateId};
use super::error::AutomatonError;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction::{Incoming, Outgoing};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use tracing::{debug, trace, warn};

/// Transition handle of a [`LabeledAutomaton`].
///
/// Identity is the ordered `(source, target)` pair; the label is looked up
/// by that identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: StateId,
    pub target: StateId,
}

impl Edge {
    pub const fn new(source: StateId, target: StateId) -> Self {
        Self { source, target }
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// General-purpose automaton: a directed graph over dense states `0..n`
/// whose edge weights hold the event labels.
///
/// Edge and label live in the same graph entry, so inserting or removing a
/// transition always updates both together.
///
/// At most one transition exists per ordered pair of states. Adding a
/// second transition between the same pair overwrites the label of the
/// first instead of creating a parallel edge.
///
/// # State removal
///
/// [`Automaton::rem_state`] keeps ids dense by swap-remove: the state with
/// the highest id takes over the removed id, bringing its transitions and
/// labels along. All other ids are unchanged. Ids held for the moved state
/// are stale afterwards.
///
/// # Example
///
/// ```rust
/// use hybrid_automata::core::{Automaton, LabeledAutomaton, StateId};
///
/// let (q0, q1) = (StateId::new(0), StateId::new(1));
/// let mut automaton = LabeledAutomaton::new(2);
/// automaton.add_transition(q0, q1, 1).unwrap();
/// let t = automaton.add_transition(q0, q1, 2).unwrap();
///
/// assert_eq!(automaton.ntransitions(), 1);
/// assert_eq!(automaton.event(t), Ok(2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LabeledAutomaton {
    graph: DiGraph<(), Label>,
}

impl LabeledAutomaton {
    /// Largest number of states the backing graph can index. Node index
    /// `u32::MAX` is reserved by petgraph as the end marker.
    pub const MAX_STATES: usize = u32::MAX as usize;

    /// Create an automaton with `nstates` isolated states and no transitions.
    ///
    /// # Panics
    ///
    /// Panics if `nstates` exceeds [`LabeledAutomaton::MAX_STATES`]. Use
    /// [`AutomatonBuilder`](crate::builder::AutomatonBuilder) to get an error
    /// instead.
    pub fn new(nstates: usize) -> Self {
        Self::with_capacity(nstates, 0)
    }

    /// Like [`LabeledAutomaton::new`], reserving room for `ntransitions` edges.
    ///
    /// # Panics
    ///
    /// Panics if `nstates` exceeds [`LabeledAutomaton::MAX_STATES`].
    pub fn with_capacity(nstates: usize, ntransitions: usize) -> Self {
        let mut graph = DiGraph::with_capacity(nstates, ntransitions);
        for _ in 0..nstates {
            graph.add_node(());
        }
        debug!(nstates, "created labeled automaton");
        Self { graph }
    }

    /// Append one isolated state and return its id.
    ///
    /// # Panics
    ///
    /// Panics if the automaton already has [`LabeledAutomaton::MAX_STATES`] states.
    pub fn add_state(&mut self) -> StateId {
        let state = Self::state_of(self.graph.add_node(()));
        debug!(%state, "added state");
        state
    }

    fn node_of(state: StateId) -> NodeIndex {
        NodeIndex::new(state.index())
    }

    fn state_of(node: NodeIndex) -> StateId {
        StateId::new(node.index())
    }

    fn live_node(&self, state: StateId) -> Result<NodeIndex, AutomatonError> {
        if self.has_state(state) {
            Ok(Self::node_of(state))
        } else {
            Err(AutomatonError::InvalidState {
                state,
                nstates: self.nstates(),
            })
        }
    }

    fn find(&self, edge: Edge) -> Option<EdgeIndex> {
        if !self.has_state(edge.source) || !self.has_state(edge.target) {
            return None;
        }
        self.graph
            .find_edge(Self::node_of(edge.source), Self::node_of(edge.target))
    }
}

impl Automaton for LabeledAutomaton {
    type Transition = Edge;

    fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.graph.node_indices().map(Self::state_of)
    }

    fn nstates(&self) -> usize {
        self.graph.node_count()
    }

    fn transitions(&self) -> impl Iterator<Item = Edge> + '_ {
        self.graph
            .edge_references()
            .map(|e| Edge::new(Self::state_of(e.source()), Self::state_of(e.target())))
    }

    fn ntransitions(&self) -> usize {
        self.graph.edge_count()
    }

    fn add_transition(
        &mut self,
        source: StateId,
        target: StateId,
        label: Label,
    ) -> Result<Edge, AutomatonError> {
        let from = self.live_node(source)?;
        let to = self.live_node(target)?;
        let edge = Edge::new(source, target);

        match self.event(edge) {
            Ok(previous) if previous != label => {
                warn!(%edge, previous, label, "overwriting transition label");
            }
            Ok(_) => {}
            Err(_) => debug!(%edge, label, "added transition"),
        }

        self.graph.update_edge(from, to, label);
        Ok(edge)
    }

    fn has_transition(&self, transition: Edge) -> bool {
        self.find(transition).is_some()
    }

    fn rem_transition(&mut self, transition: Edge) -> Result<(), AutomatonError> {
        let index = self
            .find(transition)
            .ok_or_else(|| AutomatonError::not_found(transition))?;
        self.graph.remove_edge(index);
        debug!(edge = %transition, "removed transition");
        Ok(())
    }

    fn rem_state(&mut self, state: StateId) -> Result<(), AutomatonError> {
        let node = self.live_node(state)?;

        // Snapshot first: removal invalidates the adjacency iterators.
        let mut incident: Vec<Edge> = self
            .in_transitions(state)
            .chain(self.out_transitions(state))
            .collect();
        incident.sort_unstable();
        incident.dedup();

        for edge in incident {
            self.rem_transition(edge)?;
        }

        let last = StateId::new(self.nstates() - 1);
        self.graph.remove_node(node);
        if last != state {
            debug!(%state, moved_from = %last, "removed state, renumbered last state");
        } else {
            debug!(%state, "removed state");
        }
        Ok(())
    }

    fn source(&self, transition: Edge) -> StateId {
        transition.source
    }

    fn target(&self, transition: Edge) -> StateId {
        transition.target
    }

    fn event(&self, transition: Edge) -> Result<Label, AutomatonError> {
        self.find(transition)
            .and_then(|index| self.graph.edge_weight(index).copied())
            .ok_or_else(|| {
                trace!(edge = %transition, "no label for transition");
                AutomatonError::not_found(transition)
            })
    }

    fn in_transitions(&self, state: StateId) -> impl Iterator<Item = Edge> + '_ {
        self.has_state(state)
            .then_some(Self::node_of(state))
            .into_iter()
            .flat_map(move |node| {
                self.graph
                    .neighbors_directed(node, Incoming)
                    .map(move |from| Edge::new(Self::state_of(from), state))
            })
    }

    fn out_transitions(&self, state: StateId) -> impl Iterator<Item = Edge> + '_ {
        self.has_state(state)
            .then_some(Self::node_of(state))
            .into_iter()
            .flat_map(move |node| {
                self.graph
                    .neighbors_directed(node, Outgoing)
                    .map(move |to| Edge::new(state, Self::state_of(to)))
            })
    }
}
