//! Base trait for intents (actions and commits) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Action lifecycle events (started, settled)
/// - Committed results of a simulated round trip
/// - Synchronous local edits (selection, clearing)
///
/// Intents are processed by reducers to produce new snapshots.
pub trait Intent: Send + 'static {}
