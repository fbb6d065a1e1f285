//! Core automaton types.
//!
//! This module contains the automaton abstraction and its variants:
//! - The `Automaton` capability contract
//! - `LabeledAutomaton`, the graph-backed general implementation
//! - `OneStateAutomaton`, a single state with labeled self-loops
//! - `AnyAutomaton`, runtime dispatch over the variants
//!
//! Nothing here is thread-safe by itself: an automaton is owned and
//! mutated by one caller at a time.

mod any;
mod automaton;
mod error;
mod labeled;
mod one_state;

pub use any::{AnyAutomaton, AnyTransition};
pub use automaton::{Automaton, Label, StateId};
pub use error::AutomatonError;
pub use labeled::{Edge, LabeledAutomaton};
pub use one_state::{OneStateAutomaton, SelfLoop};
