//! Well-known keys in the key-value store

/// Saved playlists (sequence of `Playlist` records)
pub const PLAYLISTS: &str = "playlists";

/// Recently played tracks (sequence of `Track`, newest first)
pub const PLAYBACK_HISTORY: &str = "playback_history";
