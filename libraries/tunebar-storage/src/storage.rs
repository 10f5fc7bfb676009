//! Best-effort JSON storage
//!
//! Every operation catches and logs backend or serialization failures instead
//! of returning them. Readers get `None`, writers carry on as if the write was
//! skipped.

use crate::backend::{FileBackend, KeyValueBackend, MemoryBackend};
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Shared handle to a key-value backend storing JSON values
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn KeyValueBackend>,
}

impl Storage {
    /// Wrap a backend
    pub fn new(backend: impl KeyValueBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Storage that lives only as long as the process
    pub fn memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Storage persisted as JSON files in `dir`
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(FileBackend::open(dir)?))
    }

    /// Read and decode the value under `key`
    ///
    /// Returns `None` when the key is missing, the backend fails, or the
    /// stored JSON does not decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.read(key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key, error = %e, "Failed to read from storage");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Discarding undecodable stored value");
                None
            }
        }
    }

    /// Encode and store `value` under `key`
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "Failed to encode value for storage");
                return;
            }
        };

        match self.backend.write(key, &raw) {
            Ok(()) => debug!(key, bytes = raw.len(), "Stored value"),
            Err(e) => warn!(key, error = %e, "Failed to write to storage"),
        }
    }

    /// Remove the value under `key`
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.delete(key) {
            warn!(key, error = %e, "Failed to remove from storage");
        }
    }

    /// Remove every stored value
    pub fn clear(&self) {
        if let Err(e) = self.backend.clear() {
            warn!(error = %e, "Failed to clear storage");
        }
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::memory()
    }
}
