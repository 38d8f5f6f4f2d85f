//! Shared test utilities and mock collaborators.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use boop::backend::{MockBackend, SimulatedLatency};
use boop::clock::FixedClock;
use boop::points::FixedPoints;
use boop::reward::{RewardFlowStore, StaticCatalog};
use boop::session::{SessionStore, SESSION_STORAGE_KEY};
use boop::storage::{KeyValueStorage, MemoryStorage, StorageError};
use chrono::{DateTime, TimeZone, Utc};

/// Simulated delay used by store tests. Runs under paused tokio time.
pub const LATENCY_MS: u64 = 1000;

pub fn latency() -> SimulatedLatency {
    SimulatedLatency::new(std::time::Duration::from_millis(LATENCY_MS))
}

/// 2024-05-01T12:00:00Z
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub fn session_store(storage: Arc<dyn KeyValueStorage>) -> SessionStore {
    SessionStore::open(
        Arc::new(MockBackend::default()),
        storage,
        latency(),
        SESSION_STORAGE_KEY,
    )
}

/// Session store over fresh in-memory storage.
pub fn memory_session() -> (SessionStore, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    (session_store(storage.clone()), storage)
}

/// Reward store with a controllable clock and a constant point draw.
pub fn reward_store(points: u32) -> (RewardFlowStore, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(fixed_now()));
    let store = RewardFlowStore::new(
        Arc::new(StaticCatalog::default()),
        clock.clone(),
        Arc::new(FixedPoints(points)),
        latency(),
    );
    (store, clock)
}

/// Storage whose writes always fail; reads return `initial`.
pub struct FailingStorage {
    pub initial: Option<Vec<u8>>,
}

impl KeyValueStorage for FailingStorage {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.initial.clone())
    }

    fn set(&self, key: &str, _value: &[u8]) -> Result<(), StorageError> {
        Err(StorageError::InvalidKey {
            key: key.to_string(),
        })
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

/// In-memory storage whose next `set` after [`SlowOnceStorage::arm`]
/// blocks the calling thread for `delay` before writing.
pub struct SlowOnceStorage {
    inner: MemoryStorage,
    armed: AtomicBool,
    delay: Duration,
}

impl SlowOnceStorage {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: MemoryStorage::new(),
            armed: AtomicBool::new(false),
            delay,
        }
    }

    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }
}

impl KeyValueStorage for SlowOnceStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        if self.armed.swap(false, Ordering::SeqCst) {
            std::thread::sleep(self.delay);
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

pub const NIKE_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1542291026-7eec264c27ff",
    "https://images.unsplash.com/photo-1600185365926-3a2ce3cdb9eb",
    "https://images.unsplash.com/photo-1556906781-9a412961c28c",
];
