//! Client configuration and API response types

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tunebar_core::{Track, UNKNOWN_DURATION};

/// Public YouTube Data API endpoint
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Catalog client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// API key; without one every search returns the sample tracks
    pub api_key: Option<String>,

    /// API base URL, without trailing slash
    pub base_url: String,

    /// Default number of search results
    pub max_results: u32,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CatalogConfig {
    /// Config for the public API with `api_key`
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Point the client at another endpoint (used against mock servers)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured key, ignoring blank values
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_results: 12,
            timeout_secs: 10,
        }
    }
}

// ===== API responses =====

/// `GET /search` response
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub id: SearchItemId,
    pub snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchItemId {
    /// Absent for channel and playlist results
    pub video_id: Option<String>,
}

/// `GET /videos` response
#[derive(Debug, Deserialize)]
pub(crate) struct VideosResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoItem {
    pub id: String,
    pub snippet: Snippet,
    pub content_details: Option<ContentDetails>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentDetails {
    /// ISO-8601 duration, e.g. `PT3M33S`
    pub duration: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Snippet {
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Thumbnails {
    pub high: Option<Thumbnail>,
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnail {
    pub url: String,
}

impl Snippet {
    /// Build a track, preferring the high resolution thumbnail
    pub fn into_track(self, id: String, duration: Option<String>) -> Track {
        let thumbnail = self
            .thumbnails
            .high
            .or(self.thumbnails.default)
            .map(|t| t.url);

        Track {
            id: id.into(),
            title: self.title,
            artist: self.channel_title,
            thumbnail_url: thumbnail,
            duration_label: duration.unwrap_or_else(|| UNKNOWN_DURATION.to_string()),
        }
    }
}

impl SearchResponse {
    /// Video results as tracks, skipping channels and playlists
    pub fn into_tracks(self) -> Vec<Track> {
        self.items
            .into_iter()
            .filter_map(|item| {
                let id = item.id.video_id?;
                Some(item.snippet.into_track(id, None))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_results, 12);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.api_key().is_none());
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = CatalogConfig::new("   ");
        assert!(config.api_key().is_none());
    }

    #[test]
    fn search_response_maps_tracks() {
        let body = serde_json::json!({
            "items": [
                {
                    "id": { "kind": "youtube#video", "videoId": "abc" },
                    "snippet": {
                        "title": "Song",
                        "channelTitle": "Band",
                        "thumbnails": {
                            "default": { "url": "https://img/default.jpg" },
                            "high": { "url": "https://img/high.jpg" }
                        }
                    }
                },
                {
                    "id": { "kind": "youtube#channel", "channelId": "chan" },
                    "snippet": { "title": "A channel" }
                },
                {
                    "id": { "videoId": "low" },
                    "snippet": {
                        "title": "Low res",
                        "channelTitle": "Band",
                        "thumbnails": { "default": { "url": "https://img/low.jpg" } }
                    }
                }
            ]
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        let tracks = response.into_tracks();

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].id.as_str(), "abc");
        assert_eq!(tracks[0].artist, "Band");
        assert_eq!(tracks[0].thumbnail_url.as_deref(), Some("https://img/high.jpg"));
        assert_eq!(tracks[0].duration_label, UNKNOWN_DURATION);
        assert_eq!(tracks[1].thumbnail_url.as_deref(), Some("https://img/low.jpg"));
    }

    #[test]
    fn empty_response_has_no_items() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_tracks().is_empty());
    }
}
