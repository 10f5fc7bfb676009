//! Tunebar Catalog Client
//!
//! HTTP client for the music catalog (YouTube Data API v3).
//!
//! # Features
//!
//! - **Search**: music videos only, with a fixed sample list when offline
//! - **Details**: a single track including its duration
//! - **Trending** and **related** shelves
//!
//! # Example
//!
//! ```ignore
//! use tunebar_catalog::{Catalog, CatalogClient, CatalogConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(CatalogConfig::new("my-api-key"))?;
//!
//!     let tracks = client.trending().await;
//!     println!("{} trending tracks", tracks.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod duration;
mod error;
mod fallback;
mod types;

pub use client::{Catalog, CatalogClient, RELATED_RESULTS, TRENDING_QUERY, TRENDING_RESULTS};
pub use duration::{duration_label, parse_iso8601, LIVE};
pub use error::{CatalogError, Result};
pub use fallback::sample_tracks;
pub use types::{CatalogConfig, DEFAULT_BASE_URL};
