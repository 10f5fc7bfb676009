/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Key cannot be used by the backend
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Backend state lock was poisoned by a panicking writer
    #[error("Storage lock poisoned")]
    LockPoisoned,

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for tunebar_core::TunebarError {
    fn from(err: StorageError) -> Self {
        tunebar_core::TunebarError::storage(err.to_string())
    }
}
