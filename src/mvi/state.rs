//! Base trait for store snapshots in MVI architecture.

/// Marker trait for store snapshot objects.
///
/// Snapshots should be:
/// - Immutable (Clone to create new snapshots)
/// - Self-contained (all data a view needs to render)
/// - Comparable (PartialEq for detecting changes)
pub trait Snapshot: Clone + PartialEq + Default + Send + Sync + 'static {}
