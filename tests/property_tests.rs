//! Property-based tests for the automaton contract.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated automata.

use hybrid_automata::core::{Automaton, Edge, Label, LabeledAutomaton, OneStateAutomaton, StateId};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

prop_compose! {
    fn arbitrary_automaton()
        (nstates in 1..8usize)
        (
            transitions in prop::collection::vec((0..nstates, 0..nstates, 0..5u32), 0..24),
            nstates in Just(nstates),
        ) -> (usize, Vec<(usize, usize, Label)>)
    {
        (nstates, transitions)
    }
}

fn build(nstates: usize, transitions: &[(usize, usize, Label)]) -> LabeledAutomaton {
    let mut automaton = LabeledAutomaton::new(nstates);
    for &(q, r, label) in transitions {
        automaton
            .add_transition(StateId::new(q), StateId::new(r), label)
            .unwrap();
    }
    automaton
}

fn assert_counts_consistent<A: Automaton>(automaton: &A) -> Result<(), TestCaseError> {
    prop_assert_eq!(automaton.nstates(), automaton.states().count());
    prop_assert_eq!(automaton.ntransitions(), automaton.transitions().count());
    Ok(())
}

proptest! {
    #[test]
    fn counts_match_sequences((nstates, transitions) in arbitrary_automaton()) {
        let mut automaton = LabeledAutomaton::new(nstates);
        assert_counts_consistent(&automaton)?;

        for (q, r, label) in transitions {
            automaton.add_transition(StateId::new(q), StateId::new(r), label).unwrap();
            assert_counts_consistent(&automaton)?;
        }

        while automaton.nstates() > 0 {
            automaton.rem_state(StateId::new(0)).unwrap();
            assert_counts_consistent(&automaton)?;
        }
    }

    #[test]
    fn added_transition_is_queryable(
        (nstates, transitions) in arbitrary_automaton(),
        label in 0..100u32
    ) {
        let mut automaton = build(nstates, &transitions);
        let q = StateId::new(0);
        let r = StateId::new(nstates - 1);

        let t = automaton.add_transition(q, r, label).unwrap();

        prop_assert!(automaton.has_transition(t));
        prop_assert_eq!(automaton.source(t), q);
        prop_assert_eq!(automaton.target(t), r);
        prop_assert_eq!(automaton.event(t), Ok(label));
    }

    #[test]
    fn last_label_wins_per_pair((nstates, transitions) in arbitrary_automaton()) {
        let automaton = build(nstates, &transitions);

        let mut expected: HashMap<(usize, usize), Label> = HashMap::new();
        for &(q, r, label) in &transitions {
            expected.insert((q, r), label);
        }

        prop_assert_eq!(automaton.ntransitions(), expected.len());
        for ((q, r), label) in expected {
            let edge = Edge::new(StateId::new(q), StateId::new(r));
            prop_assert_eq!(automaton.event(edge), Ok(label));
        }
    }

    #[test]
    fn removed_transition_is_absent((nstates, transitions) in arbitrary_automaton()) {
        let mut automaton = build(nstates, &transitions);
        let edges: Vec<Edge> = automaton.transitions().collect();

        for edge in edges {
            let before = automaton.ntransitions();
            automaton.rem_transition(edge).unwrap();
            prop_assert!(!automaton.has_transition(edge));
            prop_assert!(automaton.rem_transition(edge).is_err());
            prop_assert_eq!(automaton.ntransitions(), before - 1);
        }
    }

    #[test]
    fn rem_state_leaves_no_dangling_transition(
        (nstates, transitions) in arbitrary_automaton(),
        pick in any::<prop::sample::Index>()
    ) {
        let mut automaton = build(nstates, &transitions);
        let removed = StateId::new(pick.index(nstates));
        let last = StateId::new(nstates - 1);

        // Transitions not touching the removed state survive, with the last
        // state renamed into the gap.
        let rename = |s: StateId| if s == last { removed } else { s };
        let mut expected: HashSet<(Edge, Label)> = automaton
            .transitions()
            .filter(|e| e.source != removed && e.target != removed)
            .map(|e| (Edge::new(rename(e.source), rename(e.target)), automaton.event(e).unwrap()))
            .collect();

        automaton.rem_state(removed).unwrap();

        prop_assert_eq!(automaton.nstates(), nstates - 1);
        prop_assert!(!automaton.states().any(|s| s.index() >= nstates - 1));
        for edge in automaton.transitions() {
            prop_assert!(automaton.has_state(edge.source));
            prop_assert!(automaton.has_state(edge.target));
            let label = automaton.event(edge).unwrap();
            prop_assert!(expected.remove(&(edge, label)));
        }
        prop_assert!(expected.is_empty());
    }

    #[test]
    fn incident_transitions_partition_transitions((nstates, transitions) in arbitrary_automaton()) {
        let automaton = build(nstates, &transitions);

        let outgoing: usize = automaton.states().map(|s| automaton.out_degree(s)).sum();
        let incoming: usize = automaton.states().map(|s| automaton.in_degree(s)).sum();
        prop_assert_eq!(outgoing, automaton.ntransitions());
        prop_assert_eq!(incoming, automaton.ntransitions());

        for state in automaton.states() {
            for t in automaton.out_transitions(state) {
                prop_assert_eq!(automaton.source(t), state);
                prop_assert!(automaton.has_transition(t));
            }
            for t in automaton.in_transitions(state) {
                prop_assert_eq!(automaton.target(t), state);
                prop_assert!(automaton.has_transition(t));
            }
        }
    }

    #[test]
    fn one_state_transitions_are_self_loops(nt in 0..50u32) {
        let automaton = OneStateAutomaton::new(nt);
        assert_counts_consistent(&automaton)?;

        let mut labels = Vec::new();
        for t in automaton.transitions() {
            prop_assert_eq!(automaton.source(t), StateId::new(0));
            prop_assert_eq!(automaton.target(t), StateId::new(0));
            labels.push(automaton.event(t).unwrap());
        }
        labels.sort_unstable();
        prop_assert_eq!(labels, (1..=nt).collect::<Vec<_>>());
    }

    #[test]
    fn snapshot_restore_preserves_transitions((nstates, transitions) in arbitrary_automaton()) {
        let automaton = build(nstates, &transitions);
        let snapshot = automaton.snapshot();

        let restored = snapshot.restore().unwrap();

        prop_assert_eq!(restored.nstates(), automaton.nstates());
        prop_assert_eq!(restored.snapshot().transitions, snapshot.transitions);
    }
}
