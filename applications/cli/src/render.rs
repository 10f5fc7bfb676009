//! Plain-text rendering of snapshots and track lists

use tunebar_core::format::truncate;
use tunebar_core::{Playlist, Track};
use tunebar_playback::{PlaybackState, RepeatMode};

const TITLE_WIDTH: usize = 50;
const ARTIST_WIDTH: usize = 30;

/// One-line transport bar for a snapshot
pub fn now_playing(state: &PlaybackState) -> String {
    let Some(track) = &state.current_track else {
        return format!("[idle] vol {}", state.volume);
    };

    let mut line = format!(
        "{} {} - {} [{}]",
        if state.is_playing { "▶" } else { "⏸" },
        truncate(&track.title, TITLE_WIDTH),
        truncate(&track.artist, ARTIST_WIDTH),
        track.duration_label,
    );

    if let Some(index) = state.queue_position() {
        line.push_str(&format!(" ({}/{})", index + 1, state.queue.len()));
    }

    line.push_str(&format!(" vol {}", state.volume));
    if state.repeat_mode != RepeatMode::Off {
        line.push_str(&format!(" repeat {}", state.repeat_mode));
    }
    if state.is_shuffled {
        line.push_str(" shuffle");
    }

    line
}

/// Numbered track list, marking `current` if present
pub fn track_list(tracks: &[Track], current: Option<&Track>) -> String {
    if tracks.is_empty() {
        return "(no tracks)".to_string();
    }

    tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let marker = match current {
                Some(c) if c.is_same_as(track) => '*',
                _ => ' ',
            };
            format!(
                "{marker}{:>3}. {} - {} [{}]",
                i + 1,
                truncate(&track.title, TITLE_WIDTH),
                truncate(&track.artist, ARTIST_WIDTH),
                track.duration_label
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Playlist summary line
pub fn playlist_line(playlist: &Playlist) -> String {
    let count = playlist.tracks.len();
    format!(
        "{}  {} ({} track{})",
        playlist.id,
        playlist.name,
        count,
        if count == 1 { "" } else { "s" }
    )
}
