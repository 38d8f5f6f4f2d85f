//! Reward-flow feature module.
//!
//! Drives a single redemption from QR scan to share and keeps the
//! redemption history.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Snapshot types (`RewardState`, `Boop`, `CurrentBoop`)
//! - `intent.rs` - Action lifecycle and commit intents
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `catalog.rs` - Retailer lookup and QR payload format
//! - `store.rs` - Async actions, minting and latency

mod catalog;
mod intent;
mod reducer;
mod state;
mod store;

pub use catalog::{parse_payload, qr_payload, Retailer, RetailerCatalog, StaticCatalog, QR_PREFIX};
pub use intent::{RewardCommit, RewardIntent};
pub use reducer::RewardReducer;
pub use state::{Boop, BoopStatus, CurrentBoop, HistoryFilter, RewardState};
pub use store::RewardFlowStore;
