//! Tunebar - Playback State
//!
//! The player store behind every Tunebar front end: which track is playing,
//! the navigation queue, volume, shuffle and repeat flags.
//!
//! This crate provides:
//! - An owned state machine with one command per transport control
//! - Immutable snapshots shared with subscribers
//! - Persisted, de-duplicated playback history
//! - A mutex-guarded handle for multi-threaded hosts
//!
//! # Architecture
//!
//! `tunebar-playback` does not play audio. A front end subscribes to the
//! store, renders each snapshot, and drives its player from `is_playing` and
//! `current_track`.
//!
//! # Example
//!
//! ```rust
//! use tunebar_core::Track;
//! use tunebar_playback::{PlaybackStore, RepeatMode};
//!
//! let mut store = PlaybackStore::default();
//! let id = store.subscribe(|state| {
//!     if let Some(track) = &state.current_track {
//!         println!("now playing {}", track.title);
//!     }
//! });
//!
//! let a = Track::new("a", "First", "Artist");
//! let b = Track::new("b", "Second", "Artist");
//! store.set_queue(vec![a.clone(), b]);
//! store.play_track(a);
//! store.next();
//! assert_eq!(store.state().current_index, 1);
//!
//! store.cycle_repeat();
//! assert_eq!(store.repeat_mode(), RepeatMode::All);
//!
//! store.unsubscribe(id);
//! ```

pub mod commands;
pub mod history;
mod shared;
mod store;
mod subscribers;
pub mod types;

pub use commands::PlaybackCommand;
pub use history::{History, HistoryRecorder};
pub use shared::SharedPlaybackStore;
pub use store::PlaybackStore;
pub use subscribers::{Listener, SubscriptionId, Subscribers};
pub use types::{PlaybackConfig, PlaybackState, RepeatMode, Snapshot};
