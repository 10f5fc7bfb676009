//! Saved playlists
//!
//! Playlists are stored as a single JSON array under the `playlists` key.
//! Each operation reads the array, modifies it and writes it back.

use crate::Storage;
use std::collections::BTreeMap;
use tracing::info;
use tunebar_core::{keys, Playlist, PlaylistId, Result, Track, TrackId, TunebarError};

/// Playlist collection backed by [`Storage`]
#[derive(Debug, Clone)]
pub struct PlaylistLibrary {
    storage: Storage,
}

impl PlaylistLibrary {
    /// Create a library over `storage`
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// All playlists in saved order
    pub fn all(&self) -> Vec<Playlist> {
        self.storage.get(keys::PLAYLISTS).unwrap_or_default()
    }

    /// The first `limit` playlists
    pub fn recent(&self, limit: usize) -> Vec<Playlist> {
        let mut playlists = self.all();
        playlists.truncate(limit);
        playlists
    }

    /// Look up a playlist by id
    pub fn get(&self, id: &PlaylistId) -> Option<Playlist> {
        self.all().into_iter().find(|p| &p.id == id)
    }

    /// Create and save an empty playlist
    pub fn create(&self, name: &str, folder: Option<&str>) -> Result<Playlist> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TunebarError::invalid_input("playlist name cannot be empty"));
        }

        let mut playlist = Playlist::new(name);
        playlist.folder = folder
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string);

        self.save(playlist.clone());
        info!(id = %playlist.id, name = %playlist.name, "Created playlist");
        Ok(playlist)
    }

    /// Insert `playlist`, or replace the saved playlist with the same id
    pub fn save(&self, playlist: Playlist) {
        let mut playlists = self.all();
        match playlists.iter_mut().find(|p| p.id == playlist.id) {
            Some(existing) => *existing = playlist,
            None => playlists.push(playlist),
        }
        self.storage.set(keys::PLAYLISTS, &playlists);
    }

    /// Delete a playlist, returning whether it existed
    pub fn delete(&self, id: &PlaylistId) -> bool {
        let mut playlists = self.all();
        let before = playlists.len();
        playlists.retain(|p| &p.id != id);

        if playlists.len() == before {
            return false;
        }

        self.storage.set(keys::PLAYLISTS, &playlists);
        true
    }

    /// Append a track to a playlist
    pub fn add_track(&self, id: &PlaylistId, track: Track) -> Result<Playlist> {
        self.update(id, |playlist| playlist.tracks.push(track))
    }

    /// Remove every occurrence of a track from a playlist
    pub fn remove_track(&self, id: &PlaylistId, track_id: &TrackId) -> Result<Playlist> {
        self.update(id, |playlist| playlist.tracks.retain(|t| &t.id != track_id))
    }

    /// Playlists grouped by folder name
    ///
    /// Top-level playlists are grouped under `""`, which is always present.
    pub fn by_folder(&self) -> BTreeMap<String, Vec<Playlist>> {
        let mut grouped: BTreeMap<String, Vec<Playlist>> = BTreeMap::new();
        grouped.insert(String::new(), Vec::new());

        for playlist in self.all() {
            grouped
                .entry(playlist.folder_name().to_string())
                .or_default()
                .push(playlist);
        }

        grouped
    }

    fn update(&self, id: &PlaylistId, change: impl FnOnce(&mut Playlist)) -> Result<Playlist> {
        let mut playlist = self
            .get(id)
            .ok_or_else(|| TunebarError::not_found("Playlist", id.as_str()))?;
        change(&mut playlist);
        self.save(playlist.clone());
        Ok(playlist)
    }
}
