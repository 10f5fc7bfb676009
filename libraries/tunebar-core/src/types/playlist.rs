/// Playlist domain type
use crate::types::{PlaylistId, Track};
use serde::{Deserialize, Serialize};

/// A user-built playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Sidebar folder (absent or empty = top level)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,

    /// Cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Tracks in playlist order
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Create a new, empty playlist with a generated id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            folder: None,
            thumbnail: None,
            tracks: Vec::new(),
        }
    }

    /// Place the playlist in a folder
    #[must_use]
    pub fn in_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    /// Folder name used for grouping (`""` for top level)
    pub fn folder_name(&self) -> &str {
        self.folder.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_playlist_is_top_level_and_empty() {
        let playlist = Playlist::new("Road Trip");
        assert_eq!(playlist.name, "Road Trip");
        assert_eq!(playlist.folder_name(), "");
        assert!(playlist.tracks.is_empty());
    }

    #[test]
    fn folder_name_reports_folder() {
        let playlist = Playlist::new("Focus").in_folder("Work");
        assert_eq!(playlist.folder_name(), "Work");
    }

    #[test]
    fn stored_record_without_tracks_loads() {
        let playlist: Playlist =
            serde_json::from_str(r#"{"id":"1700000000000_abcdefghi","name":"Empty"}"#).unwrap();
        assert!(playlist.tracks.is_empty());
        assert_eq!(playlist.folder, None);
    }
}
