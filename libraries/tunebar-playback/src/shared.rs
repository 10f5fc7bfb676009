//! Thread-safe handle to a playback store

use crate::commands::PlaybackCommand;
use crate::store::PlaybackStore;
use crate::subscribers::SubscriptionId;
use crate::types::Snapshot;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tunebar_core::Track;

/// Cloneable handle sharing one [`PlaybackStore`] between threads
///
/// Each call holds the lock for the whole transition and notification, so
/// commands from different threads are applied one at a time. Listeners run
/// while the lock is held and must not call back into the same handle.
#[derive(Debug, Clone, Default)]
pub struct SharedPlaybackStore {
    inner: Arc<Mutex<PlaybackStore>>,
}

impl SharedPlaybackStore {
    pub fn new(store: PlaybackStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    // A panicking listener poisons the lock; the snapshot it left behind is
    // still a complete state, so keep going with it.
    fn lock(&self) -> MutexGuard<'_, PlaybackStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply any command
    pub fn dispatch(&self, command: PlaybackCommand) {
        self.lock().dispatch(command);
    }

    /// Latest published snapshot
    pub fn state(&self) -> Snapshot {
        self.lock().state()
    }

    /// Register a listener
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + Send + 'static,
    {
        self.lock().subscribe(listener)
    }

    /// Remove a listener, returning whether it was registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock().unsubscribe(id)
    }

    /// The `limit` most recently played tracks, newest first
    pub fn recently_played(&self, limit: usize) -> Vec<Track> {
        self.lock().recently_played(limit)
    }
}

impl From<PlaybackStore> for SharedPlaybackStore {
    fn from(store: PlaybackStore) -> Self {
        Self::new(store)
    }
}
