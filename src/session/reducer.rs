//! Reducer for the session store.

use crate::mvi::Reducer;

use super::intent::{SessionCommit, SessionIntent};
use super::state::SessionState;

/// Reducer for session state transitions.
///
/// Pure function. Credential checks, latency and persistence happen in
/// [`super::SessionStore`] around the dispatch call.
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::Begin => {
                state.in_flight += 1;
                state.error = None;
            }
            SessionIntent::Commit(commit) => {
                apply_commit(&mut state, commit);
                state.in_flight = state.in_flight.saturating_sub(1);
            }
            SessionIntent::Fail { message } => {
                state.error = Some(message);
                state.in_flight = state.in_flight.saturating_sub(1);
            }
            SessionIntent::Reject { message } => {
                state.error = Some(message);
            }
            SessionIntent::SignOut => {
                state.user = None;
                state.is_authenticated = false;
            }
            SessionIntent::CreditPoints { amount } => {
                if let Some(user) = state.user.as_mut() {
                    user.points = user.points.saturating_add(amount);
                }
            }
            SessionIntent::ClearError => {
                state.error = None;
            }
        }
        state
    }
}

fn apply_commit(state: &mut SessionState, commit: SessionCommit) {
    match commit {
        SessionCommit::SignedIn { user } => {
            state.user = Some(user);
            state.is_authenticated = true;
        }
        SessionCommit::SignedUp { user } => {
            state.user = Some(user);
        }
        SessionCommit::Verified => {
            // Only a pending account can become authenticated.
            if state.user.is_some() {
                state.is_authenticated = true;
            }
        }
        SessionCommit::SocialLinked {
            platform,
            connected,
        } => {
            if let Some(user) = state.user.as_mut() {
                user.connected_socials.set(platform, connected);
            }
        }
        SessionCommit::UsernameChanged { username } => {
            if let Some(user) = state.user.as_mut() {
                user.username = username;
            }
        }
        SessionCommit::PasswordAccepted => {}
        SessionCommit::ProfilePhotoChanged { uri } => {
            if let Some(user) = state.user.as_mut() {
                user.profile_photo = Some(uri);
            }
        }
    }
}
