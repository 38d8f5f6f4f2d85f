//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::Snapshot;

/// Reducer transforms a snapshot based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (Snapshot, Intent) -> Snapshot
pub trait Reducer {
    /// The snapshot type this reducer operates on.
    type State: Snapshot;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new snapshot.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
