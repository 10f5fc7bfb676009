/// Core error types for Tunebar
use thiserror::Error;

/// Result type alias using `TunebarError`
pub type Result<T> = std::result::Result<T, TunebarError>;

/// Core error type for Tunebar
#[derive(Error, Debug)]
pub enum TunebarError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),
}

impl TunebarError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = TunebarError::not_found("Playlist", "123_abc");
        assert_eq!(err.to_string(), "Playlist not found: 123_abc");
    }

    #[test]
    fn invalid_input_message() {
        let err = TunebarError::invalid_input("playlist name cannot be empty");
        assert_eq!(err.to_string(), "Invalid input: playlist name cannot be empty");
    }
}
