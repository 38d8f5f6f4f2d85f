//! Snapshot cell: the single shared mutable resource of a store.

use std::marker::PhantomData;

use tokio::sync::watch;

use super::reducer::Reducer;

/// Single-writer, multi-reader snapshot publisher.
///
/// Every write goes through the reducer while the channel's write lock is
/// held, so observers only ever see whole snapshots. Observers either poll
/// [`StateCell::snapshot`] or hold a [`watch::Receiver`] from
/// [`StateCell::subscribe`].
pub struct StateCell<R: Reducer> {
    tx: watch::Sender<R::State>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> StateCell<R> {
    pub fn new(initial: R::State) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            tx,
            _reducer: PhantomData,
        }
    }

    /// Clone of the latest published snapshot.
    pub fn snapshot(&self) -> R::State {
        self.tx.borrow().clone()
    }

    /// Read a projection of the latest snapshot without cloning all of it.
    pub fn read<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.tx.borrow())
    }

    /// Receiver notified whenever a dispatch changes the snapshot.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.tx.subscribe()
    }

    /// Apply an intent to the latest snapshot and publish the result.
    ///
    /// Observers are only woken when the reduced snapshot differs.
    pub fn dispatch(&self, intent: R::Intent) -> R::State {
        let mut published = None;
        self.tx.send_if_modified(|state| {
            let reduced = R::reduce(state.clone(), intent);
            let changed = reduced != *state;
            *state = reduced;
            published = Some(state.clone());
            changed
        });
        published.unwrap_or_else(|| self.snapshot())
    }

    /// Validate against the latest snapshot and, on success, reduce the
    /// planned intent in the same critical section.
    ///
    /// `plan` sees the snapshot under the write lock; no other dispatch can
    /// interleave between the check and the reduction.
    pub fn try_dispatch<T, E>(
        &self,
        plan: impl FnOnce(&R::State) -> Result<(R::Intent, T), E>,
    ) -> Result<T, E> {
        let mut outcome = None;
        self.tx.send_if_modified(|state| match plan(state) {
            Ok((intent, value)) => {
                let reduced = R::reduce(state.clone(), intent);
                let changed = reduced != *state;
                *state = reduced;
                outcome = Some(Ok(value));
                changed
            }
            Err(err) => {
                outcome = Some(Err(err));
                false
            }
        });
        outcome.unwrap_or_else(|| unreachable!("send_if_modified always runs its closure"))
    }
}
