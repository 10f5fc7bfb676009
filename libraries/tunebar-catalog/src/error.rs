/// Catalog client errors
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while talking to the catalog API
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("Catalog error ({status}): {message}")]
    Api { status: u16, message: String },

    /// No API key configured
    #[error("Catalog API key not configured")]
    MissingApiKey,

    /// Invalid base URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl From<CatalogError> for tunebar_core::TunebarError {
    fn from(err: CatalogError) -> Self {
        tunebar_core::TunebarError::Network(err.to_string())
    }
}
