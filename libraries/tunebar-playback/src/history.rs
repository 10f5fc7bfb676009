//! Playback history tracking
//!
//! Maintains a bounded, de-duplicated list of played tracks, newest first,
//! persisted under the `playback_history` storage key.

use std::collections::VecDeque;
use tracing::debug;
use tunebar_core::{keys, Track};
use tunebar_storage::Storage;

/// Playback history with bounded size
///
/// Each track appears at most once; re-playing a track moves it to the
/// front. When full, the oldest entry is discarded.
#[derive(Debug, Clone)]
pub struct History {
    /// History buffer (most recent = front)
    tracks: VecDeque<Track>,

    /// Maximum history size
    max_size: usize,
}

impl History {
    /// Create new history with specified maximum size
    pub fn new(max_size: usize) -> Self {
        Self {
            tracks: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Rebuild history from persisted entries (newest first)
    ///
    /// Duplicate ids keep their first (newest) occurrence and the result is
    /// trimmed to `max_size`.
    pub fn from_entries(entries: Vec<Track>, max_size: usize) -> Self {
        let mut history = Self::new(max_size);
        for track in entries {
            if history.tracks.len() >= max_size {
                break;
            }
            if !history.tracks.iter().any(|t| t.is_same_as(&track)) {
                history.tracks.push_back(track);
            }
        }
        history
    }

    /// Record a played track at the front
    pub fn record(&mut self, track: Track) {
        self.tracks.retain(|t| !t.is_same_as(&track));
        self.tracks.push_front(track);
        self.tracks.truncate(self.max_size);
    }

    /// Get all history tracks (newest first)
    pub fn get_all(&self) -> Vec<&Track> {
        self.tracks.iter().collect()
    }

    /// Get number of tracks in history
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if history is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Consume into a list (newest first)
    pub fn into_vec(self) -> Vec<Track> {
        self.tracks.into()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(50)
    }
}

/// Writes played tracks through to storage
///
/// Every call re-reads the stored list so that other writers sharing the
/// same storage are not overwritten with a stale copy.
#[derive(Debug, Clone)]
pub struct HistoryRecorder {
    storage: Storage,
    max_size: usize,
}

impl HistoryRecorder {
    pub fn new(storage: Storage, max_size: usize) -> Self {
        Self { storage, max_size }
    }

    /// Current persisted history (empty if missing or unreadable)
    pub fn load(&self) -> History {
        let entries: Vec<Track> = self
            .storage
            .get(keys::PLAYBACK_HISTORY)
            .unwrap_or_default();
        History::from_entries(entries, self.max_size)
    }

    /// Persist `track` as the most recently played
    pub fn record(&self, track: &Track) {
        let mut history = self.load();
        history.record(track.clone());
        debug!(track = %track.id, entries = history.len(), "Recorded playback history");
        self.storage
            .set(keys::PLAYBACK_HISTORY, &history.into_vec());
    }

    /// The `limit` most recently played tracks
    pub fn recent(&self, limit: usize) -> Vec<Track> {
        let mut tracks = self.load().into_vec();
        tracks.truncate(limit);
        tracks
    }

    /// Forget all history
    pub fn clear(&self) {
        self.storage.remove(keys::PLAYBACK_HISTORY);
    }
}
