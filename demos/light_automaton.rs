//! Two-Mode Switching Automaton
//!
//! This example builds the discrete skeleton of a two-mode switching
//! controller, inspects it through the `Automaton` contract, and removes a
//! mode.
//!
//! Key concepts:
//! - Building from a batch of labeled transitions
//! - Incident-transition queries
//! - Swap-remove renumbering on state removal
//! - Snapshots for persistence
//!
//! Run with: RUST_LOG=debug cargo run --example light_automaton

use hybrid_automata::automaton;
use hybrid_automata::core::{Automaton, StateId};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Two-Mode Switching Automaton ===\n");

    let mut light = automaton! {
        states: 2,
        transitions: [(0, 0, 1), (1, 1, 1), (0, 1, 2), (1, 0, 3)]
    }
    .unwrap();

    println!(
        "{} modes, {} transitions",
        light.nstates(),
        light.ntransitions()
    );

    for state in light.states() {
        for t in light.out_transitions(state) {
            println!(
                "  {} --[{}]--> {}",
                light.source(t),
                light.event(t).unwrap(),
                light.target(t)
            );
        }
    }

    let snapshot = light.snapshot();
    println!("\nSnapshot {}:\n{}", snapshot.id, snapshot.to_json().unwrap());

    println!("\nRemoving mode 0...");
    light.rem_state(StateId::new(0)).unwrap();
    println!(
        "{} mode, {} transition (mode 1 renumbered to 0)",
        light.nstates(),
        light.ntransitions()
    );

    println!("\n=== Example Complete ===");
}
