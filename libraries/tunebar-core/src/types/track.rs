/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// Duration label used when the catalog does not report a duration
pub const UNKNOWN_DURATION: &str = "Unknown";

fn unknown_duration() -> String {
    UNKNOWN_DURATION.to_string()
}

/// A playable catalog item
///
/// The serialized field names (`video_id`, `thumbnail`, `duration`) match the
/// records already persisted under the `playlists` and `playback_history`
/// keys.
///
/// Identity is the `id` alone: catalog metadata may be stale, so two tracks
/// with the same id are the same track even when other fields differ. Use
/// [`Track::is_same_as`] for identity and `==` for full structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Catalog identifier
    #[serde(rename = "video_id")]
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist (channel) name
    #[serde(default)]
    pub artist: String,

    /// Thumbnail image URL
    #[serde(rename = "thumbnail", default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// Human readable duration (e.g. "3:33", "LIVE") or [`UNKNOWN_DURATION`]
    #[serde(rename = "duration", default = "unknown_duration")]
    pub duration_label: String,
}

impl Track {
    /// Create a track with no thumbnail and an unknown duration
    pub fn new(id: impl Into<TrackId>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            thumbnail_url: None,
            duration_label: unknown_duration(),
        }
    }

    /// Set the thumbnail URL
    #[must_use]
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// Set the duration label
    #[must_use]
    pub fn with_duration(mut self, label: impl Into<String>) -> Self {
        self.duration_label = label.into();
        self
    }

    /// Whether both values refer to the same catalog entry
    pub fn is_same_as(&self, other: &Track) -> bool {
        self.id == other.id
    }

    /// Whether the catalog reported a duration for this track
    pub fn has_known_duration(&self) -> bool {
        !self.duration_label.eq_ignore_ascii_case(UNKNOWN_DURATION)
    }
}
