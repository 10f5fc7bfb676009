//! Catalog search client.

use crate::duration::duration_label;
use crate::error::{CatalogError, Result};
use crate::fallback::sample_tracks;
use crate::types::{CatalogConfig, SearchResponse, VideosResponse};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};
use tunebar_core::{Track, TrackId};

/// Query used for the trending shelf
pub const TRENDING_QUERY: &str = "top songs 2024";

/// Result count for the trending shelf
pub const TRENDING_RESULTS: u32 = 24;

/// Result count for related tracks
pub const RELATED_RESULTS: u32 = 10;

/// Only music videos
const MUSIC_CATEGORY: &str = "10";

/// Music catalog as seen by the UI
///
/// Methods never fail: each implementation decides what to return when the
/// catalog is unavailable.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Search for tracks matching `query`
    async fn search(&self, query: &str, max_results: u32) -> Vec<Track>;

    /// Full details (including duration) for one track
    async fn get_details(&self, id: &TrackId) -> Option<Track>;

    /// Tracks for the trending shelf
    async fn trending(&self) -> Vec<Track> {
        self.search(TRENDING_QUERY, TRENDING_RESULTS).await
    }

    /// Tracks related to `id`
    async fn related(&self, id: &TrackId) -> Vec<Track>;
}

/// Client for the YouTube Data API.
///
/// Searches fall back to a fixed sample list when no API key is configured
/// or the request fails, so the UI always has something to show.
///
/// # Example
///
/// ```ignore
/// use tunebar_catalog::{Catalog, CatalogClient, CatalogConfig};
///
/// let client = CatalogClient::new(CatalogConfig::new("my-api-key"))?;
/// for track in client.search("lofi", 12).await {
///     println!("{} - {}", track.artist, track.title);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(Duration::from_secs(5))
            .user_agent(format!("Tunebar/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: CatalogConfig { base_url, ..config },
        })
    }

    /// Normalized base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Whether requests will reach the API at all
    pub fn has_api_key(&self) -> bool {
        self.config.api_key().is_some()
    }

    /// Default result count from the configuration
    pub fn default_max_results(&self) -> u32 {
        self.config.max_results
    }

    /// Search without falling back
    pub async fn try_search(&self, query: &str, max_results: u32) -> Result<Vec<Track>> {
        let max_results = max_results.to_string();
        let response: SearchResponse = self
            .get(
                "search",
                &[
                    ("part", "snippet"),
                    ("type", "video"),
                    ("videoCategoryId", MUSIC_CATEGORY),
                    ("maxResults", max_results.as_str()),
                    ("q", query),
                ],
            )
            .await?;

        let tracks = response.into_tracks();
        info!(query, results = tracks.len(), "Catalog search");
        Ok(tracks)
    }

    /// Look up one video, `None` if the API does not know it
    pub async fn try_details(&self, id: &TrackId) -> Result<Option<Track>> {
        let response: VideosResponse = self
            .get(
                "videos",
                &[("part", "snippet,contentDetails"), ("id", id.as_str())],
            )
            .await?;

        Ok(response.items.into_iter().next().map(|item| {
            let duration = item
                .content_details
                .and_then(|details| duration_label(&details.duration));
            item.snippet.into_track(item.id, duration)
        }))
    }

    /// Related videos without falling back
    pub async fn try_related(&self, id: &TrackId) -> Result<Vec<Track>> {
        let max_results = RELATED_RESULTS.to_string();
        let response: SearchResponse = self
            .get(
                "search",
                &[
                    ("part", "snippet"),
                    ("type", "video"),
                    ("relatedToVideoId", id.as_str()),
                    ("maxResults", max_results.as_str()),
                ],
            )
            .await?;

        Ok(response.into_tracks())
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<T> {
        let key = self.config.api_key().ok_or(CatalogError::MissingApiKey)?;
        let url = format!("{}/{}", self.config.base_url, endpoint);

        debug!(url = %url, "Catalog request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[("key", key)])
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CatalogError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn search(&self, query: &str, max_results: u32) -> Vec<Track> {
        match self.try_search(query, max_results).await {
            Ok(tracks) => tracks,
            Err(CatalogError::MissingApiKey) => {
                warn!("Catalog API key not configured, using sample tracks");
                sample_tracks()
            }
            Err(e) => {
                warn!(query, error = %e, "Catalog search failed, using sample tracks");
                sample_tracks()
            }
        }
    }

    async fn get_details(&self, id: &TrackId) -> Option<Track> {
        self.try_details(id)
            .await
            .map_err(|e| warn!(%id, error = %e, "Failed to get track details"))
            .ok()
            .flatten()
    }

    async fn related(&self, id: &TrackId) -> Vec<Track> {
        self.try_related(id)
            .await
            .map_err(|e| warn!(%id, error = %e, "Failed to get related tracks"))
            .unwrap_or_default()
    }
}
