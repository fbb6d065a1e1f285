//! Hybrid automata: discrete-transition graphs for hybrid-system models.
//!
//! A hybrid automaton is a graph whose states ("modes") carry continuous
//! dynamics and whose edges carry integer event labels. This crate provides
//! the discrete part: the capability contract every automaton variant
//! satisfies, plus the variants themselves. Continuous dynamics, guard
//! regions and switching laws are attached by the caller, keyed by state id
//! and transition handle.
//!
//! # Core Concepts
//!
//! - **Automaton**: the uniform contract via the `Automaton` trait
//! - **LabeledAutomaton**: graph-backed, one label per ordered state pair
//! - **OneStateAutomaton**: a single state with labeled self-loops
//! - **AnyAutomaton**: runtime dispatch where variants must be mixed
//!
//! # Example
//!
//! ```rust
//! use hybrid_automata::core::{Automaton, LabeledAutomaton, StateId};
//!
//! let (q0, q1) = (StateId::new(0), StateId::new(1));
//! let mut light = LabeledAutomaton::new(2);
//! light.add_transition(q0, q0, 1).unwrap();
//! light.add_transition(q1, q1, 1).unwrap();
//! light.add_transition(q0, q1, 2).unwrap();
//! light.add_transition(q1, q0, 3).unwrap();
//!
//! assert_eq!(light.nstates(), 2);
//! assert_eq!(light.ntransitions(), 4);
//!
//! light.rem_state(q0).unwrap();
//! assert_eq!(light.nstates(), 1);
//! assert_eq!(light.ntransitions(), 1);
//! ```

pub mod builder;
pub mod core;
pub mod snapshot;

// Re-export commonly used types
pub use crate::builder::{AutomatonBuilder, BuildError};
pub use crate::core::{
    AnyAutomaton, AnyTransition, Automaton, AutomatonError, Edge, Label, LabeledAutomaton,
    OneStateAutomaton, SelfLoop, StateId,
};
pub use crate::snapshot::{AutomatonSnapshot, SnapshotError};
