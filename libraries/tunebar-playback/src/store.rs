//! Playback store
//!
//! Owns the current snapshot, the subscriber registry and the history
//! recorder. Commands take `&mut self`, so transitions are serialized by the
//! borrow checker and listeners cannot call back into the store.

use crate::commands::{reduce, Outcome, PlaybackCommand};
use crate::history::HistoryRecorder;
use crate::subscribers::{Subscribers, SubscriptionId};
use crate::types::{PlaybackConfig, PlaybackState, RepeatMode, Snapshot};
use std::sync::Arc;
use tracing::debug;
use tunebar_core::Track;
use tunebar_storage::Storage;

/// Single source of truth for "what is playing"
///
/// Every command publishes a new snapshot (or re-publishes the current one)
/// and notifies each subscriber exactly once, even when nothing changed.
#[derive(Debug)]
pub struct PlaybackStore {
    snapshot: Snapshot,
    subscribers: Subscribers,
    history: HistoryRecorder,
}

impl PlaybackStore {
    /// Create a store with initial state from `config`, recording history
    /// into `storage`
    pub fn new(config: PlaybackConfig, storage: Storage) -> Self {
        Self {
            snapshot: Arc::new(PlaybackState::new(&config)),
            subscribers: Subscribers::new(),
            history: HistoryRecorder::new(storage, config.history_size),
        }
    }

    /// Latest published snapshot
    pub fn state(&self) -> Snapshot {
        Arc::clone(&self.snapshot)
    }

    /// Register a listener called with every published snapshot
    ///
    /// The listener is not called with the current state on registration.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + Send + 'static,
    {
        let id = self.subscribers.subscribe(Box::new(listener));
        debug!(%id, "Subscribed");
        id
    }

    /// Remove a listener, returning whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.subscribers.unsubscribe(id);
        debug!(%id, removed, "Unsubscribed");
        removed
    }

    /// Number of registered listeners
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Apply any command
    pub fn dispatch(&mut self, command: PlaybackCommand) {
        let name = command.name();
        let outcome = reduce(&self.snapshot, command);

        let played = match outcome {
            Outcome::Unchanged => {
                debug!(command = name, "State unchanged");
                None
            }
            Outcome::Changed(state) => {
                self.snapshot = Arc::new(state);
                debug!(command = name, "State changed");
                None
            }
            Outcome::Played(state) => {
                self.snapshot = Arc::new(state);
                debug!(
                    command = name,
                    index = self.snapshot.current_index,
                    "Track started"
                );
                self.snapshot.current_track.clone()
            }
        };

        let snapshot = Arc::clone(&self.snapshot);
        self.subscribers.notify(&snapshot);

        if let Some(track) = played {
            self.history.record(&track);
        }
    }

    /// Play `track`
    pub fn play_track(&mut self, track: Track) {
        self.dispatch(PlaybackCommand::PlayTrack(track));
    }

    /// Replace the queue
    pub fn set_queue(&mut self, tracks: Vec<Track>) {
        self.dispatch(PlaybackCommand::SetQueue(tracks));
    }

    /// Flip between playing and paused
    pub fn toggle_play(&mut self) {
        self.dispatch(PlaybackCommand::TogglePlay);
    }

    /// Set the playing flag; repeating the current value still notifies
    pub fn set_playing(&mut self, is_playing: bool) {
        self.dispatch(PlaybackCommand::SetPlaying(is_playing));
    }

    /// Skip to the next queue entry
    pub fn next(&mut self) {
        self.dispatch(PlaybackCommand::Next);
    }

    /// Skip to the previous queue entry
    pub fn previous(&mut self) {
        self.dispatch(PlaybackCommand::Previous);
    }

    /// Set volume (clamped to 0-100)
    pub fn set_volume(&mut self, level: i32) {
        self.dispatch(PlaybackCommand::SetVolume(level));
    }

    /// Flip the shuffle flag (queue order is left as is)
    pub fn toggle_shuffle(&mut self) {
        self.dispatch(PlaybackCommand::ToggleShuffle);
    }

    /// Advance repeat mode: off, all, one, then off again
    pub fn cycle_repeat(&mut self) {
        self.dispatch(PlaybackCommand::CycleRepeat);
    }

    /// Current repeat mode
    pub fn repeat_mode(&self) -> RepeatMode {
        self.snapshot.repeat_mode
    }

    /// The `limit` most recently played tracks, newest first
    pub fn recently_played(&self, limit: usize) -> Vec<Track> {
        self.history.recent(limit)
    }

    /// Forget persisted history
    pub fn clear_history(&self) {
        self.history.clear();
    }
}

impl Default for PlaybackStore {
    fn default() -> Self {
        Self::new(PlaybackConfig::default(), Storage::memory())
    }
}
