//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base traits and the snapshot cell used by both
//! stores to implement unidirectional data flow.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Intent ──→ Reducer ──→ Snapshot ──→ View
//!   ↑                                              │
//!   └──────────────────────────────────────────────┘
//! ```
//!
//! - **Snapshot**: Immutable representation of store state
//! - **Intent**: Action lifecycle events and committed results
//! - **Reducer**: Pure function that transforms snapshots based on intents
//! - **StateCell**: Single-writer publisher that applies intents atomically

mod cell;
mod intent;
mod reducer;
mod state;

pub use cell::StateCell;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::Snapshot;
