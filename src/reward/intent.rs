//! Intents for the reward-flow store.

use crate::mvi::Intent;

use super::state::{Boop, CurrentBoop};

/// Result of a successful round trip, applied to the latest snapshot.
#[derive(Debug, Clone)]
pub enum RewardCommit {
    /// A scan resolved; replaces any redemption in progress.
    Scanned { current: CurrentBoop },
    /// A share minted a new history entry.
    Shared { boop: Boop },
    /// Soft delete by id. Unknown ids change nothing.
    Deleted { id: String },
}

#[derive(Debug, Clone)]
pub enum RewardIntent {
    /// An async action started: mark busy and clear the previous error.
    Begin,
    /// An async action succeeded.
    Commit(RewardCommit),
    /// An async action failed with a user-facing message.
    Fail { message: String },
    SelectImage { uri: String },
    ClearCurrentBoop,
    ClearError,
}

impl Intent for RewardIntent {}
