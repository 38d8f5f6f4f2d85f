//! Intents for the session store.

use crate::mvi::Intent;

use super::state::{Platform, User};

/// Result of a successful round trip, applied to the latest snapshot.
#[derive(Debug, Clone)]
pub enum SessionCommit {
    SignedIn { user: User },
    /// New account, identity not yet confirmed.
    SignedUp { user: User },
    Verified,
    SocialLinked { platform: Platform, connected: bool },
    UsernameChanged { username: String },
    /// Password storage is not modelled; the commit only settles the action.
    PasswordAccepted,
    ProfilePhotoChanged { uri: String },
}

#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// An async action started: mark busy and clear the previous error.
    Begin,
    /// An async action succeeded.
    Commit(SessionCommit),
    /// An async action failed with a user-facing message.
    Fail { message: String },
    /// Synchronous failure outside the busy protocol.
    Reject { message: String },
    SignOut,
    CreditPoints { amount: u32 },
    ClearError,
}

impl Intent for SessionIntent {}
