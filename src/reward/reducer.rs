//! Reducer for the reward-flow store.

use crate::mvi::Reducer;

use super::intent::{RewardCommit, RewardIntent};
use super::state::{BoopStatus, RewardState};

/// Reducer for scan → select → share transitions and history edits.
///
/// Pure function. Catalog lookups, minting and latency are handled by
/// [`super::RewardFlowStore`].
pub struct RewardReducer;

impl Reducer for RewardReducer {
    type State = RewardState;
    type Intent = RewardIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RewardIntent::Begin => {
                state.in_flight += 1;
                state.error = None;
            }
            RewardIntent::Commit(commit) => {
                apply_commit(&mut state, commit);
                state.in_flight = state.in_flight.saturating_sub(1);
            }
            RewardIntent::Fail { message } => {
                state.error = Some(message);
                state.in_flight = state.in_flight.saturating_sub(1);
            }
            RewardIntent::SelectImage { uri } => {
                if let Some(current) = state.current_boop.as_mut() {
                    current.selected_image = Some(uri);
                }
            }
            RewardIntent::ClearCurrentBoop => {
                state.current_boop = None;
            }
            RewardIntent::ClearError => {
                state.error = None;
            }
        }
        state
    }
}

fn apply_commit(state: &mut RewardState, commit: RewardCommit) {
    match commit {
        RewardCommit::Scanned { current } => {
            state.current_boop = Some(current);
        }
        RewardCommit::Shared { boop } => {
            state.boops.insert(0, boop);
        }
        RewardCommit::Deleted { id } => {
            if let Some(boop) = state.boops.iter_mut().find(|b| b.id == id) {
                boop.status = BoopStatus::Deleted;
            }
        }
    }
}
