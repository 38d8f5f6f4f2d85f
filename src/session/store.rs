//! Session store: authentication lifecycle and profile edits.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::backend::{CredentialVerifier, SimulatedLatency};
use crate::error::{Operation, StoreError};
use crate::mvi::StateCell;
use crate::storage::{KeyValueStorage, StorageError};

use super::intent::{SessionCommit, SessionIntent};
use super::reducer::SessionReducer;
use super::state::{PersistedSession, Platform, SessionState, User};

/// Storage key the session snapshot is written under.
pub const SESSION_STORAGE_KEY: &str = "boop-auth-storage";

/// Owns the signed-in user and persists it across restarts.
///
/// Async actions follow one protocol: mark busy and clear the error, wait
/// one simulated round trip, then either commit against the latest snapshot
/// or record an error. Each commit is written to storage.
pub struct SessionStore {
    cell: StateCell<SessionReducer>,
    backend: Arc<dyn CredentialVerifier>,
    storage: Arc<dyn KeyValueStorage>,
    latency: SimulatedLatency,
    key: String,
    /// Held from snapshot read to slot write so saves land in commit order.
    persist_lock: Mutex<()>,
}

impl SessionStore {
    /// Open the store, restoring the snapshot saved under `key`.
    ///
    /// An unreadable or corrupt slot is logged and treated as signed out.
    pub fn open(
        backend: Arc<dyn CredentialVerifier>,
        storage: Arc<dyn KeyValueStorage>,
        latency: SimulatedLatency,
        key: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let initial = match load_persisted(storage.as_ref(), &key) {
            Ok(Some(persisted)) => {
                debug!(key = %key, authenticated = persisted.is_authenticated, "session restored");
                SessionState::restored(persisted)
            }
            Ok(None) => SessionState::default(),
            Err(err) => {
                warn!(key = %key, error = %err, "discarding unreadable session snapshot");
                SessionState::default()
            }
        };

        Self {
            cell: StateCell::new(initial),
            backend,
            storage,
            latency,
            key,
            persist_lock: Mutex::new(()),
        }
    }

    pub fn state(&self) -> SessionState {
        self.cell.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.cell.subscribe()
    }

    pub fn user(&self) -> Option<User> {
        self.cell.read(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.cell.read(|s| s.is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.cell.read(|s| s.is_loading())
    }

    pub fn error(&self) -> Option<String> {
        self.cell.read(|s| s.error.clone())
    }

    pub async fn sign_in(&self, phone_number: &str, password: &str) -> Result<User, StoreError> {
        self.run(Operation::SignIn, |_| {
            let user = self
                .backend
                .sign_in(phone_number, password)
                .ok_or(StoreError::InvalidCredentials)?;
            Ok((SessionCommit::SignedIn { user: user.clone() }, user))
        })
        .await
    }

    /// Create an account. `phone_number` already carries the dial code.
    ///
    /// The account stays unauthenticated until [`Self::verify_code`].
    pub async fn sign_up(
        &self,
        phone_number: &str,
        username: &str,
        _password: &str,
    ) -> Result<User, StoreError> {
        self.run(Operation::SignUp, |_| {
            let user = self.backend.register(phone_number, username);
            Ok((SessionCommit::SignedUp { user: user.clone() }, user))
        })
        .await
    }

    pub async fn verify_code(&self, code: &str) -> Result<(), StoreError> {
        self.run(Operation::VerifyCode, |state| {
            if !self.backend.verify_code(code) {
                return Err(StoreError::InvalidCode);
            }
            if state.user.is_none() {
                return Err(StoreError::NoActiveUser);
            }
            Ok((SessionCommit::Verified, ()))
        })
        .await
    }

    /// Clears the session immediately; no round trip, no failure mode.
    pub fn sign_out(&self) {
        self.cell.dispatch(SessionIntent::SignOut);
        info!("signed out");
        self.persist();
    }

    pub async fn connect_social(&self, platform: Platform) -> Result<(), StoreError> {
        self.set_social(Operation::ConnectSocial(platform), platform, true)
            .await
    }

    pub async fn disconnect_social(&self, platform: Platform) -> Result<(), StoreError> {
        self.set_social(Operation::DisconnectSocial(platform), platform, false)
            .await
    }

    async fn set_social(
        &self,
        operation: Operation,
        platform: Platform,
        connected: bool,
    ) -> Result<(), StoreError> {
        self.run(operation, |state| {
            require_user(state)?;
            Ok((
                SessionCommit::SocialLinked {
                    platform,
                    connected,
                },
                (),
            ))
        })
        .await
    }

    pub async fn update_username(&self, username: &str) -> Result<(), StoreError> {
        self.run(Operation::UpdateUsername, |state| {
            require_user(state)?;
            Ok((
                SessionCommit::UsernameChanged {
                    username: username.to_string(),
                },
                (),
            ))
        })
        .await
    }

    /// Checks `current_password`; the new password is not stored anywhere.
    pub async fn update_password(
        &self,
        current_password: &str,
        _new_password: &str,
    ) -> Result<(), StoreError> {
        self.run(Operation::UpdatePassword, |_| {
            if !self.backend.check_password(current_password) {
                return Err(StoreError::IncorrectPassword);
            }
            Ok((SessionCommit::PasswordAccepted, ()))
        })
        .await
    }

    pub async fn update_profile_photo(&self, uri: &str) -> Result<(), StoreError> {
        self.run(Operation::UpdateProfilePhoto, |state| {
            require_user(state)?;
            Ok((
                SessionCommit::ProfilePhotoChanged {
                    uri: uri.to_string(),
                },
                (),
            ))
        })
        .await
    }

    /// Add reward points to the active user's balance. Local, synchronous.
    pub fn credit_points(&self, amount: u32) -> Result<u32, StoreError> {
        let credited: Result<u32, StoreError> = self.cell.try_dispatch(|state| {
            let user = require_user(state)?;
            let balance = user.points.saturating_add(amount);
            Ok((SessionIntent::CreditPoints { amount }, balance))
        });

        match credited {
            Ok(balance) => {
                info!(amount, balance, "points credited");
                self.persist();
                Ok(balance)
            }
            Err(err) => {
                let message = err.message_for(Operation::CreditPoints);
                warn!(error = %err, "credit rejected");
                self.cell.dispatch(SessionIntent::Reject { message });
                Err(err)
            }
        }
    }

    pub fn clear_error(&self) {
        self.cell.dispatch(SessionIntent::ClearError);
    }

    async fn run<T>(
        &self,
        operation: Operation,
        plan: impl FnOnce(&SessionState) -> Result<(SessionCommit, T), StoreError>,
    ) -> Result<T, StoreError> {
        debug!(operation = %operation, "session action started");
        self.cell.dispatch(SessionIntent::Begin);
        self.latency.round_trip().await;

        let outcome = self.cell.try_dispatch(|state| {
            plan(state).map(|(commit, value)| (SessionIntent::Commit(commit), value))
        });

        match outcome {
            Ok(value) => {
                info!(operation = %operation, "session action committed");
                self.persist();
                Ok(value)
            }
            Err(err) => {
                let message = err.message_for(operation);
                warn!(operation = %operation, error = %err, "session action failed");
                self.cell.dispatch(SessionIntent::Fail { message });
                Err(err)
            }
        }
    }

    /// Write the durable part of the latest snapshot. Failures are logged,
    /// never surfaced: the in-memory commit already happened.
    fn persist(&self) {
        let _guard = self.persist_lock.lock();
        let persisted = self.cell.read(|s| s.persisted());
        if let Err(err) = save_persisted(self.storage.as_ref(), &self.key, &persisted) {
            warn!(key = %self.key, error = %err, "failed to persist session");
        }
    }
}

fn require_user(state: &SessionState) -> Result<&User, StoreError> {
    state.user.as_ref().ok_or(StoreError::NoActiveUser)
}

/// Serialize a session record in its storage format.
pub fn encode_session(key: &str, persisted: &PersistedSession) -> Result<Vec<u8>, StorageError> {
    serde_json::to_vec(persisted).map_err(|source| StorageError::Serialization {
        key: key.to_string(),
        source,
    })
}

/// Parse a session record from its storage format.
pub fn decode_session(key: &str, bytes: &[u8]) -> Result<PersistedSession, StorageError> {
    serde_json::from_slice(bytes).map_err(|source| StorageError::Serialization {
        key: key.to_string(),
        source,
    })
}

fn load_persisted(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> Result<Option<PersistedSession>, StorageError> {
    storage
        .get(key)?
        .map(|bytes| decode_session(key, &bytes))
        .transpose()
}

fn save_persisted(
    storage: &dyn KeyValueStorage,
    key: &str,
    persisted: &PersistedSession,
) -> Result<(), StorageError> {
    let bytes = encode_session(key, persisted)?;
    storage.set(key, &bytes)
}
