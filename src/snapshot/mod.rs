//! Snapshot and restore for labeled automata.
//!
//! The automaton layer defines no storage of its own; snapshots give a
//! composing hybrid-system model a versioned, serializable description of
//! the discrete structure to persist alongside its own data.

use crate::builder::from_edges;
use crate::core::{Automaton, Edge, Label, LabeledAutomaton, StateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// One labeled transition in a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub source: StateId,
    pub target: StateId,
    pub label: Label,
}

/// Serializable snapshot of a [`LabeledAutomaton`].
///
/// # Example
///
/// ```rust
/// use hybrid_automata::core::{Automaton, LabeledAutomaton, StateId};
///
/// let mut automaton = LabeledAutomaton::new(2);
/// automaton.add_transition(StateId::new(0), StateId::new(1), 3).unwrap();
///
/// let json = automaton.snapshot().to_json().unwrap();
/// let restored = hybrid_automata::snapshot::AutomatonSnapshot::from_json(&json)
///     .unwrap()
///     .restore()
///     .unwrap();
///
/// assert_eq!(restored.ntransitions(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AutomatonSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Number of states
    pub nstates: usize,

    /// Transitions, sorted by (source, target)
    pub transitions: Vec<TransitionRecord>,
}

impl AutomatonSnapshot {
    /// Rebuild the automaton described by this snapshot.
    pub fn restore(&self) -> Result<LabeledAutomaton, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let edges = self
            .transitions
            .iter()
            .map(|t| (Edge::new(t.source, t.target), t.label));
        let automaton = from_edges(self.nstates, edges)?;

        debug!(id = %self.id, nstates = self.nstates, "restored automaton from snapshot");
        Ok(automaton)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }
}

impl LabeledAutomaton {
    /// Take a snapshot of the current structure.
    ///
    /// Transitions are recorded in a stable sorted order, so two snapshots
    /// of the same automaton differ only in `id` and `taken_at`.
    pub fn snapshot(&self) -> AutomatonSnapshot {
        let mut transitions: Vec<TransitionRecord> = self
            .transitions()
            .filter_map(|edge| {
                self.event(edge).ok().map(|label| TransitionRecord {
                    source: edge.source,
                    target: edge.target,
                    label,
                })
            })
            .collect();
        transitions.sort_unstable_by_key(|t| (t.source, t.target));

        AutomatonSnapshot {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            taken_at: Utc::now(),
            nstates: self.nstates(),
            transitions,
        }
    }
}
