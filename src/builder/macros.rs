//! Macros for ergonomic automaton construction.

/// Build a [`LabeledAutomaton`](crate::core::LabeledAutomaton) from a state
/// count and a list of `(source, target, label)` triples.
///
/// Expands to an [`AutomatonBuilder`](crate::builder::AutomatonBuilder)
/// chain and evaluates to `Result<LabeledAutomaton, BuildError>`.
///
/// # Example
///
/// ```
/// use hybrid_automata::automaton;
/// use hybrid_automata::core::Automaton;
///
/// let light = automaton! {
///     states: 2,
///     transitions: [(0, 0, 1), (1, 1, 1), (0, 1, 2), (1, 0, 3)]
/// }
/// .unwrap();
///
/// assert_eq!(light.nstates(), 2);
/// assert_eq!(light.ntransitions(), 4);
/// ```
#[macro_export]
macro_rules! automaton {
    (
        states: $nstates:expr,
        transitions: [
            $( ($source:expr, $target:expr, $label:expr) ),* $(,)?
        ] $(,)?
    ) => {
        $crate::builder::AutomatonBuilder::new($nstates)
            $( .transition($source, $target, $label) )*
            .build()
    };

    (states: $nstates:expr $(,)?) => {
        $crate::builder::AutomatonBuilder::new($nstates).build()
    };
}
