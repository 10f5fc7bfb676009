//! Core types for playback management

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tunebar_core::Track;

/// Published, read-only view of the playback state
///
/// Snapshots are never mutated after publication; the store replaces its
/// snapshot wholesale on every command.
pub type Snapshot = Arc<PlaybackState>;

/// Repeat mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop when queue ends
    #[default]
    Off,

    /// Loop entire queue
    All,

    /// Loop current track only
    One,
}

impl RepeatMode {
    /// Next mode in the cycle `Off -> All -> One -> Off`
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RepeatMode::Off => "off",
            RepeatMode::All => "all",
            RepeatMode::One => "one",
        };
        f.write_str(name)
    }
}

/// Configuration for the playback store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Maximum persisted history size (default: 50)
    pub history_size: usize,

    /// Initial volume (0-100, default: 70)
    pub volume: u8,

    /// Initial shuffle flag (default: false)
    pub shuffled: bool,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            history_size: 50,
            volume: 70,
            shuffled: false,
            repeat: RepeatMode::Off,
        }
    }
}

/// Complete playback state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Track being played, `None` until the first play
    pub current_track: Option<Track>,

    /// Whether playback is active
    pub is_playing: bool,

    /// Tracks considered for next/previous navigation (may repeat ids)
    pub queue: Arc<[Track]>,

    /// Position of `current_track` within `queue`
    ///
    /// Only meaningful when `current_track` is the track at this position;
    /// see [`PlaybackState::queue_position`].
    pub current_index: usize,

    /// Volume level (0-100)
    pub volume: u8,

    /// Shuffle flag
    ///
    /// Only a flag: it does not reorder `queue` or change navigation.
    pub is_shuffled: bool,

    /// Repeat mode
    pub repeat_mode: RepeatMode,
}

impl PlaybackState {
    /// Initial state for `config`
    pub fn new(config: &PlaybackConfig) -> Self {
        Self {
            current_track: None,
            is_playing: false,
            queue: Arc::from(Vec::new()),
            current_index: 0,
            volume: config.volume.min(100),
            is_shuffled: config.shuffled,
            repeat_mode: config.repeat,
        }
    }

    /// Whether nothing has been played yet
    pub fn is_idle(&self) -> bool {
        self.current_track.is_none()
    }

    /// `current_index`, if the current track actually sits there
    pub fn queue_position(&self) -> Option<usize> {
        let current = self.current_track.as_ref()?;
        self.queue
            .get(self.current_index)
            .filter(|track| track.is_same_as(current))
            .map(|_| self.current_index)
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(&PlaybackConfig::default())
    }
}
