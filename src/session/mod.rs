//! Session feature module.
//!
//! Authentication lifecycle, linked social accounts and profile edits.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Snapshot types (`SessionState`, `User`, persisted record)
//! - `intent.rs` - Action lifecycle and commit intents
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `store.rs` - Async actions, backend checks and persistence

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::{SessionCommit, SessionIntent};
pub use reducer::SessionReducer;
pub use state::{ConnectedSocials, PersistedSession, Platform, SessionState, User};
pub use store::{decode_session, encode_session, SessionStore, SESSION_STORAGE_KEY};
