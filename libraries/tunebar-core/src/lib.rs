//! Tunebar Core
//!
//! Platform-agnostic core types and error handling for Tunebar.
//!
//! This crate provides the building blocks shared by the playback store, the
//! key-value storage layer and the catalog client:
//! - **Domain Types**: `Track`, `Playlist` and their identifiers
//! - **Storage Keys**: well-known keys used in the key-value store
//! - **Error Handling**: unified `TunebarError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tunebar_core::{Track, UNKNOWN_DURATION};
//!
//! let track = Track::new("dQw4w9WgXcQ", "Never Gonna Give You Up", "Rick Astley");
//! assert_eq!(track.duration_label, UNKNOWN_DURATION);
//!
//! let stale = track.clone().with_duration("3:33");
//! assert!(track.is_same_as(&stale));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod format;
pub mod keys;
pub mod types;

pub use error::{Result, TunebarError};
pub use types::{Playlist, PlaylistId, Track, TrackId, UNKNOWN_DURATION};
