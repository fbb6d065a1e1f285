//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and a macro for creating labeled
//! automata from a state count and a batch of transitions, validating the
//! whole batch up front.

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;

use crate::core::{Edge, Label, LabeledAutomaton};

/// Build an automaton from labeled edges.
///
/// # Example
///
/// ```
/// use hybrid_automata::builder::from_edges;
/// use hybrid_automata::core::{Automaton, Edge, StateId};
///
/// let edge = Edge::new(StateId::new(0), StateId::new(1));
/// let automaton = from_edges(2, [(edge, 5)]).unwrap();
///
/// assert_eq!(automaton.event(edge), Ok(5));
/// ```
pub fn from_edges<I>(nstates: usize, edges: I) -> Result<LabeledAutomaton, BuildError>
where
    I: IntoIterator<Item = (Edge, Label)>,
{
    AutomatonBuilder::new(nstates)
        .transitions(
            edges
                .into_iter()
                .map(|(edge, label)| (edge.source, edge.target, label)),
        )
        .build()
}
