//! Tunebar Storage
//!
//! Key-value persistence for Tunebar.
//!
//! This crate provides:
//! - **Backends**: the [`KeyValueBackend`] contract plus in-memory and
//!   JSON-file implementations
//! - **Best-effort access**: [`Storage`], which catches and logs every
//!   failure so callers never see a storage error
//! - **Playlists**: [`PlaylistLibrary`], the saved playlists under the
//!   `playlists` key
//!
//! # Example
//!
//! ```rust
//! use tunebar_storage::{PlaylistLibrary, Storage};
//!
//! let storage = Storage::memory();
//! let library = PlaylistLibrary::new(storage.clone());
//!
//! let playlist = library.create("Road Trip", None).unwrap();
//! assert_eq!(library.get(&playlist.id).unwrap().name, "Road Trip");
//! ```

mod backend;
mod error;
mod storage;

pub mod playlists;

pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use error::{Result, StorageError};
pub use playlists::PlaylistLibrary;
pub use storage::Storage;
