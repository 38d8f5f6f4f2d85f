//! Reward-flow store: scan → select → share, plus redemption history.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::backend::SimulatedLatency;
use crate::clock::Clock;
use crate::error::{Operation, StoreError};
use crate::mvi::StateCell;
use crate::points::PointsSource;

use super::catalog::{parse_payload, RetailerCatalog};
use super::intent::{RewardCommit, RewardIntent};
use super::reducer::RewardReducer;
use super::state::{Boop, BoopStatus, CurrentBoop, RewardState};

/// Owns the redemption history and the redemption in progress.
///
/// Not persisted: every instance starts from the seeded demo history.
pub struct RewardFlowStore {
    cell: StateCell<RewardReducer>,
    catalog: Arc<dyn RetailerCatalog>,
    clock: Arc<dyn Clock>,
    points: Arc<dyn PointsSource>,
    latency: SimulatedLatency,
}

impl RewardFlowStore {
    pub fn new(
        catalog: Arc<dyn RetailerCatalog>,
        clock: Arc<dyn Clock>,
        points: Arc<dyn PointsSource>,
        latency: SimulatedLatency,
    ) -> Self {
        Self::with_state(RewardState::seeded(), catalog, clock, points, latency)
    }

    /// Start from an arbitrary snapshot instead of the seeded history.
    pub fn with_state(
        initial: RewardState,
        catalog: Arc<dyn RetailerCatalog>,
        clock: Arc<dyn Clock>,
        points: Arc<dyn PointsSource>,
        latency: SimulatedLatency,
    ) -> Self {
        Self {
            cell: StateCell::new(initial),
            catalog,
            clock,
            points,
            latency,
        }
    }

    pub fn state(&self) -> RewardState {
        self.cell.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<RewardState> {
        self.cell.subscribe()
    }

    pub fn boops(&self) -> Vec<Boop> {
        self.cell.read(|s| s.boops.clone())
    }

    pub fn current_boop(&self) -> Option<CurrentBoop> {
        self.cell.read(|s| s.current_boop.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.cell.read(|s| s.is_loading())
    }

    pub fn error(&self) -> Option<String> {
        self.cell.read(|s| s.error.clone())
    }

    pub fn catalog(&self) -> &dyn RetailerCatalog {
        self.catalog.as_ref()
    }

    /// Resolve a `retailer:<Name>` payload and start a redemption.
    ///
    /// The first offered image is preselected. On a miss the redemption in
    /// progress, if any, is left as it was.
    pub async fn scan_qr_code(&self, payload: &str) -> Result<CurrentBoop, StoreError> {
        self.run(Operation::ScanQrCode, |_| {
            let retailer = parse_payload(payload)
                .and_then(|name| self.catalog.find(name))
                .ok_or_else(|| StoreError::UnknownRetailer {
                    payload: payload.to_string(),
                })?;
            let current = CurrentBoop {
                selected_image: retailer.images.first().cloned(),
                retailer: retailer.name,
                discount: retailer.discount,
                images: retailer.images,
            };
            Ok((
                RewardCommit::Scanned {
                    current: current.clone(),
                },
                current,
            ))
        })
        .await
    }

    /// Point the selection at `uri`. Without a redemption in progress this
    /// does nothing.
    pub fn select_image(&self, uri: &str) {
        self.cell.dispatch(RewardIntent::SelectImage {
            uri: uri.to_string(),
        });
    }

    /// Mint a completed boop from the selected image and put it at the
    /// front of the history. The redemption in progress is kept.
    pub async fn share_boop(&self) -> Result<Boop, StoreError> {
        self.run(Operation::ShareBoop, |state| {
            let current = state.current_boop.as_ref().ok_or(StoreError::NoImageSelected)?;
            let image = current
                .selected_image
                .clone()
                .ok_or(StoreError::NoImageSelected)?;
            let now = self.clock.now();
            let boop = Boop {
                id: unique_id(state, format!("boop-{}", now.timestamp_millis())),
                retailer: current.retailer.clone(),
                date: now.date_naive(),
                points: self.points.draw(),
                status: BoopStatus::Completed,
                image: Some(image),
            };
            Ok((RewardCommit::Shared { boop: boop.clone() }, boop))
        })
        .await
    }

    /// Soft delete. An unknown id is not an error and changes nothing.
    pub async fn delete_boop(&self, id: &str) -> Result<(), StoreError> {
        self.run(Operation::DeleteBoop, |state| {
            if state.find(id).is_none() {
                debug!(id, "delete of unknown boop ignored");
            }
            Ok((RewardCommit::Deleted { id: id.to_string() }, ()))
        })
        .await
    }

    pub fn clear_current_boop(&self) {
        self.cell.dispatch(RewardIntent::ClearCurrentBoop);
    }

    pub fn clear_error(&self) {
        self.cell.dispatch(RewardIntent::ClearError);
    }

    async fn run<T>(
        &self,
        operation: Operation,
        plan: impl FnOnce(&RewardState) -> Result<(RewardCommit, T), StoreError>,
    ) -> Result<T, StoreError> {
        debug!(operation = %operation, "reward action started");
        self.cell.dispatch(RewardIntent::Begin);
        self.latency.round_trip().await;

        let outcome = self.cell.try_dispatch(|state| {
            plan(state).map(|(commit, value)| (RewardIntent::Commit(commit), value))
        });

        match outcome {
            Ok(value) => {
                info!(operation = %operation, "reward action committed");
                Ok(value)
            }
            Err(err) => {
                let message = err.message_for(operation);
                warn!(operation = %operation, error = %err, "reward action failed");
                self.cell.dispatch(RewardIntent::Fail { message });
                Err(err)
            }
        }
    }
}

/// Timestamp ids collide when two shares land in the same millisecond.
fn unique_id(state: &RewardState, base: String) -> String {
    if state.find(&base).is_none() {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base}-{n}");
        if state.find(&candidate).is_none() {
            return candidate;
        }
        n += 1;
    }
}
