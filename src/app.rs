//! Composition root: builds both stores and sequences cross-store flows.

use std::sync::Arc;

use tracing::warn;

use crate::backend::{MockBackend, SimulatedLatency};
use crate::clock::SystemClock;
use crate::config::Config;
use crate::error::StoreError;
use crate::points::RandomPoints;
use crate::reward::{Boop, RewardFlowStore, StaticCatalog};
use crate::session::SessionStore;
use crate::storage::FileStorage;

/// The two stores a front end drives.
///
/// The stores never reference each other. Flows that touch both, such as
/// crediting a share, are sequenced here.
pub struct BoopApp {
    session: Arc<SessionStore>,
    rewards: Arc<RewardFlowStore>,
}

impl BoopApp {
    pub fn new(session: Arc<SessionStore>, rewards: Arc<RewardFlowStore>) -> Self {
        Self { session, rewards }
    }

    /// Wire the mocked backend, file storage and system clock per `config`.
    pub fn from_config(config: &Config) -> Self {
        let latency = SimulatedLatency::new(config.network.latency());
        let storage = Arc::new(FileStorage::new(config.storage.data_dir.clone()));

        let session = SessionStore::open(
            Arc::new(MockBackend::default()),
            storage,
            latency,
            config.storage.session_key.clone(),
        );
        let rewards = RewardFlowStore::new(
            Arc::new(StaticCatalog::default()),
            Arc::new(SystemClock),
            Arc::new(RandomPoints::new(
                config.rewards.min_points,
                config.rewards.max_points,
            )),
            latency,
        );

        Self::new(Arc::new(session), Arc::new(rewards))
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn rewards(&self) -> &RewardFlowStore {
        &self.rewards
    }

    pub fn session_handle(&self) -> Arc<SessionStore> {
        Arc::clone(&self.session)
    }

    pub fn rewards_handle(&self) -> Arc<RewardFlowStore> {
        Arc::clone(&self.rewards)
    }

    /// Share the current boop, then add its points to the user's balance.
    ///
    /// The share stands even if crediting fails (no user loaded); that
    /// failure lands in the session store's error field.
    pub async fn share_and_credit(&self) -> Result<Boop, StoreError> {
        let boop = self.rewards.share_boop().await?;
        if let Err(err) = self.session.credit_points(boop.points) {
            warn!(boop = %boop.id, error = %err, "shared boop was not credited");
        }
        Ok(boop)
    }
}
