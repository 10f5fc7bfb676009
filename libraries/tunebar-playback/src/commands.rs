//! Playback commands and the transition function
//!
//! Every command is a pure function of (current state, arguments) to a new
//! state. [`reduce`] computes the outcome without touching subscribers or
//! storage; the store applies it.

use crate::types::{PlaybackState, RepeatMode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tunebar_core::Track;

/// The complete set of commands a transport UI may issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", content = "args", rename_all = "snake_case")]
pub enum PlaybackCommand {
    /// Play a track (need not be in the queue)
    PlayTrack(Track),

    /// Replace the queue and reset the index to 0
    SetQueue(Vec<Track>),

    /// Flip the playing flag
    TogglePlay,

    /// Set the playing flag
    SetPlaying(bool),

    /// Skip forward
    Next,

    /// Skip back (never wraps)
    Previous,

    /// Set volume, clamped to 0-100
    SetVolume(i32),

    /// Flip the shuffle flag
    ToggleShuffle,

    /// Advance repeat mode `Off -> All -> One -> Off`
    CycleRepeat,
}

impl PlaybackCommand {
    /// Short command name for logs
    pub fn name(&self) -> &'static str {
        match self {
            PlaybackCommand::PlayTrack(_) => "play_track",
            PlaybackCommand::SetQueue(_) => "set_queue",
            PlaybackCommand::TogglePlay => "toggle_play",
            PlaybackCommand::SetPlaying(_) => "set_playing",
            PlaybackCommand::Next => "next",
            PlaybackCommand::Previous => "previous",
            PlaybackCommand::SetVolume(_) => "set_volume",
            PlaybackCommand::ToggleShuffle => "toggle_shuffle",
            PlaybackCommand::CycleRepeat => "cycle_repeat",
        }
    }
}

/// Result of applying a command to a state
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// State is unchanged (subscribers are still notified)
    Unchanged,

    /// State changed without starting a track
    Changed(PlaybackState),

    /// A track started playing; it belongs in the history
    Played(PlaybackState),
}

/// Compute the outcome of `command` applied to `state`
pub fn reduce(state: &PlaybackState, command: PlaybackCommand) -> Outcome {
    match command {
        PlaybackCommand::PlayTrack(track) => {
            // Tracks outside the queue keep the previous index
            let current_index = state
                .queue
                .iter()
                .position(|t| t.is_same_as(&track))
                .unwrap_or(state.current_index);

            Outcome::Played(PlaybackState {
                current_track: Some(track),
                is_playing: true,
                current_index,
                ..state.clone()
            })
        }
        PlaybackCommand::SetQueue(tracks) => Outcome::Changed(PlaybackState {
            queue: Arc::from(tracks),
            current_index: 0,
            ..state.clone()
        }),
        PlaybackCommand::TogglePlay => Outcome::Changed(PlaybackState {
            is_playing: !state.is_playing,
            ..state.clone()
        }),
        PlaybackCommand::SetPlaying(is_playing) => Outcome::Changed(PlaybackState {
            is_playing,
            ..state.clone()
        }),
        PlaybackCommand::Next => next(state),
        PlaybackCommand::Previous => {
            if state.current_index > 0 && state.current_index < state.queue.len() {
                Outcome::Played(at_index(state, state.current_index - 1))
            } else {
                Outcome::Unchanged
            }
        }
        PlaybackCommand::SetVolume(level) => Outcome::Changed(PlaybackState {
            volume: level.clamp(0, 100) as u8,
            ..state.clone()
        }),
        PlaybackCommand::ToggleShuffle => Outcome::Changed(PlaybackState {
            is_shuffled: !state.is_shuffled,
            ..state.clone()
        }),
        PlaybackCommand::CycleRepeat => Outcome::Changed(PlaybackState {
            repeat_mode: state.repeat_mode.cycled(),
            ..state.clone()
        }),
    }
}

fn next(state: &PlaybackState) -> Outcome {
    if state.repeat_mode == RepeatMode::One {
        // Re-affirm the current track; the UI restarts it on notification
        return Outcome::Unchanged;
    }

    let following = state.current_index.checked_add(1);
    if let Some(index) = following.filter(|&i| i < state.queue.len()) {
        return Outcome::Played(at_index(state, index));
    }

    if state.repeat_mode == RepeatMode::All && !state.queue.is_empty() {
        return Outcome::Played(at_index(state, 0));
    }

    Outcome::Unchanged
}

/// Play `state.queue[index]`; `index` must be in bounds
fn at_index(state: &PlaybackState, index: usize) -> PlaybackState {
    PlaybackState {
        current_track: Some(state.queue[index].clone()),
        is_playing: true,
        current_index: index,
        ..state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Track {
        Track::new(id, format!("Track {id}"), "Test Artist")
    }

    fn queued(ids: &[&str], index: usize, repeat: RepeatMode) -> PlaybackState {
        let queue: Vec<Track> = ids.iter().map(|id| track(id)).collect();
        PlaybackState {
            current_track: queue.get(index).cloned(),
            queue: Arc::from(queue),
            current_index: index,
            repeat_mode: repeat,
            ..PlaybackState::default()
        }
    }

    fn played(outcome: Outcome) -> PlaybackState {
        match outcome {
            Outcome::Played(state) => state,
            other => panic!("expected Played, got {other:?}"),
        }
    }

    #[test]
    fn play_track_in_queue_moves_index() {
        let state = queued(&["a", "b", "c"], 0, RepeatMode::Off);
        let next = played(reduce(&state, PlaybackCommand::PlayTrack(track("c"))));

        assert_eq!(next.current_index, 2);
        assert!(next.is_playing);
        assert_eq!(next.queue_position(), Some(2));
    }

    #[test]
    fn play_track_outside_queue_keeps_index() {
        let state = queued(&["a", "b", "c"], 1, RepeatMode::Off);
        let next = played(reduce(&state, PlaybackCommand::PlayTrack(track("z"))));

        assert_eq!(next.current_index, 1);
        assert_eq!(next.current_track, Some(track("z")));
        assert_eq!(next.queue_position(), None);
    }

    #[test]
    fn play_track_with_duplicate_ids_picks_first() {
        let state = queued(&["a", "b", "a"], 1, RepeatMode::Off);
        let next = played(reduce(&state, PlaybackCommand::PlayTrack(track("a"))));
        assert_eq!(next.current_index, 0);
    }

    #[test]
    fn next_advances() {
        let state = queued(&["a", "b"], 0, RepeatMode::Off);
        let next = played(reduce(&state, PlaybackCommand::Next));

        assert_eq!(next.current_track, Some(track("b")));
        assert_eq!(next.current_index, 1);
    }

    #[test]
    fn next_at_end_without_repeat_is_unchanged() {
        let state = queued(&["a", "b"], 1, RepeatMode::Off);
        assert_eq!(reduce(&state, PlaybackCommand::Next), Outcome::Unchanged);
    }

    #[test]
    fn next_at_end_with_repeat_all_wraps() {
        let state = queued(&["a", "b"], 1, RepeatMode::All);
        let next = played(reduce(&state, PlaybackCommand::Next));

        assert_eq!(next.current_track, Some(track("a")));
        assert_eq!(next.current_index, 0);
    }

    #[test]
    fn next_with_repeat_one_is_unchanged() {
        let state = queued(&["a", "b"], 0, RepeatMode::One);
        assert_eq!(reduce(&state, PlaybackCommand::Next), Outcome::Unchanged);
    }

    #[test]
    fn next_on_empty_queue_is_unchanged_even_with_repeat_all() {
        let state = PlaybackState {
            repeat_mode: RepeatMode::All,
            ..PlaybackState::default()
        };
        assert_eq!(reduce(&state, PlaybackCommand::Next), Outcome::Unchanged);
    }

    #[test]
    fn next_with_out_of_range_index_does_not_panic() {
        let state = PlaybackState {
            current_index: usize::MAX,
            ..queued(&["a"], 0, RepeatMode::Off)
        };
        assert_eq!(reduce(&state, PlaybackCommand::Next), Outcome::Unchanged);
    }

    #[test]
    fn previous_moves_back() {
        let state = queued(&["a", "b", "c"], 2, RepeatMode::Off);
        let prev = played(reduce(&state, PlaybackCommand::Previous));

        assert_eq!(prev.current_track, Some(track("b")));
        assert_eq!(prev.current_index, 1);
    }

    #[test]
    fn previous_never_wraps() {
        for repeat in [RepeatMode::Off, RepeatMode::All, RepeatMode::One] {
            let state = queued(&["a", "b"], 0, repeat);
            assert_eq!(reduce(&state, PlaybackCommand::Previous), Outcome::Unchanged);
        }
    }

    #[test]
    fn previous_with_out_of_range_index_is_unchanged() {
        let state = PlaybackState {
            current_index: 5,
            ..queued(&["a", "b"], 0, RepeatMode::Off)
        };
        assert_eq!(reduce(&state, PlaybackCommand::Previous), Outcome::Unchanged);
    }

    #[test]
    fn volume_is_clamped() {
        let state = PlaybackState::default();
        for (input, stored) in [(-10, 0), (150, 100), (55, 55), (i32::MIN, 0), (i32::MAX, 100)] {
            match reduce(&state, PlaybackCommand::SetVolume(input)) {
                Outcome::Changed(next) => assert_eq!(next.volume, stored),
                other => panic!("expected Changed, got {other:?}"),
            }
        }
    }

    #[test]
    fn set_queue_keeps_current_track() {
        let state = queued(&["a", "b", "c"], 2, RepeatMode::Off);
        let Outcome::Changed(next) =
            reduce(&state, PlaybackCommand::SetQueue(vec![track("x"), track("y")]))
        else {
            panic!("expected Changed");
        };

        assert_eq!(next.current_index, 0);
        assert_eq!(next.current_track, Some(track("c")));
        assert_eq!(next.queue.len(), 2);
    }

    #[test]
    fn command_json_shape() {
        let json = serde_json::to_value(PlaybackCommand::SetVolume(55)).unwrap();
        assert_eq!(json, serde_json::json!({ "command": "set_volume", "args": 55 }));

        let json = serde_json::to_value(PlaybackCommand::Next).unwrap();
        assert_eq!(json, serde_json::json!({ "command": "next" }));
    }
}
