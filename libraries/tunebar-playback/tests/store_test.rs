//! Store behaviour as seen by a front end: commands, notifications, history

use std::sync::{Arc, Mutex};
use tunebar_core::{keys, Track};
use tunebar_playback::{PlaybackConfig, PlaybackStore, RepeatMode, Snapshot};
use tunebar_storage::{KeyValueBackend, Storage, StorageError};

fn track(id: &str) -> Track {
    Track::new(id, format!("Track {id}"), "Test Artist").with_duration("3:00")
}

fn tracks(ids: &[&str]) -> Vec<Track> {
    ids.iter().map(|id| track(id)).collect()
}

/// Store plus a log of every snapshot it published
fn observed_store(storage: Storage) -> (PlaybackStore, Arc<Mutex<Vec<Snapshot>>>) {
    let mut store = PlaybackStore::new(PlaybackConfig::default(), storage);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |snapshot| sink.lock().unwrap().push(Arc::clone(snapshot)));
    (store, seen)
}

fn history_ids(store: &PlaybackStore) -> Vec<String> {
    store
        .recently_played(usize::MAX)
        .into_iter()
        .map(|t| t.id.as_str().to_string())
        .collect()
}

struct FailingBackend;

impl KeyValueBackend for FailingBackend {
    fn read(&self, _key: &str) -> tunebar_storage::Result<Option<String>> {
        Err(StorageError::LockPoisoned)
    }

    fn write(&self, _key: &str, _value: &str) -> tunebar_storage::Result<()> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }

    fn delete(&self, _key: &str) -> tunebar_storage::Result<()> {
        Err(StorageError::LockPoisoned)
    }

    fn clear(&self) -> tunebar_storage::Result<()> {
        Err(StorageError::LockPoisoned)
    }
}

// ===== Notification contract =====

#[test]
fn every_command_notifies_once_with_current_state() {
    let (mut store, seen) = observed_store(Storage::memory());

    let commands: [fn(&mut PlaybackStore); 11] = [
        |s| s.set_queue(tracks(&["a", "b", "c"])),
        |s| s.play_track(track("a")),
        |s| s.toggle_play(),
        |s| s.set_playing(true),
        |s| s.set_playing(true),
        |s| s.next(),
        |s| s.previous(),
        |s| s.previous(),
        |s| s.set_volume(55),
        |s| s.toggle_shuffle(),
        |s| s.cycle_repeat(),
    ];

    for (i, command) in commands.iter().enumerate() {
        command(&mut store);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), i + 1, "command {i} notified wrong number of times");
        assert_eq!(**seen.last().unwrap(), *store.state());
    }
}

#[test]
fn no_notification_on_subscribe() {
    let (_store, seen) = observed_store(Storage::memory());
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let mut store = PlaybackStore::default();
    let calls = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&calls);
    let id = store.subscribe(move |_| *counter.lock().unwrap() += 1);

    store.toggle_play();
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.toggle_play();

    assert_eq!(*calls.lock().unwrap(), 1);
}

#[test]
fn listeners_are_independent() {
    let mut store = PlaybackStore::default();
    let log = Arc::new(Mutex::new(Vec::new()));

    let first_log = Arc::clone(&log);
    let first = store.subscribe(move |_| first_log.lock().unwrap().push("first"));
    let second_log = Arc::clone(&log);
    store.subscribe(move |_| second_log.lock().unwrap().push("second"));

    store.toggle_play();
    store.unsubscribe(first);
    store.toggle_play();

    assert_eq!(*log.lock().unwrap(), vec!["first", "second", "second"]);
}

// ===== Queue and navigation =====

#[test]
fn set_queue_resets_index_and_keeps_track() {
    let mut store = PlaybackStore::default();
    store.set_queue(tracks(&["a", "b", "c"]));
    store.play_track(track("c"));
    store.set_playing(false);

    store.set_queue(tracks(&["x", "y"]));

    let state = store.state();
    assert_eq!(state.current_index, 0);
    assert_eq!(&*state.queue, &tracks(&["x", "y"])[..]);
    assert_eq!(state.current_track, Some(track("c")));
    assert!(!state.is_playing);
}

#[test]
fn last_track_without_repeat_stays_put() {
    let (mut store, seen) = observed_store(Storage::memory());
    store.set_queue(tracks(&["t1", "t2", "t3"]));
    store.play_track(track("t3"));
    let before = store.state();

    store.next();
    store.next();

    assert_eq!(*store.state(), *before);
    assert_eq!(store.state().current_index, 2);
    assert_eq!(seen.lock().unwrap().len(), 4);
}

#[test]
fn repeat_all_wraps_single_track_queue() {
    let mut store = PlaybackStore::default();
    store.set_queue(tracks(&["only"]));
    store.play_track(track("only"));
    store.clear_history();
    store.cycle_repeat();
    assert_eq!(store.repeat_mode(), RepeatMode::All);

    store.next();

    let state = store.state();
    assert_eq!(state.current_index, 0);
    assert_eq!(state.current_track, Some(track("only")));
    assert_eq!(history_ids(&store), vec!["only"]);
}

#[test]
fn repeat_one_reaffirms_current_track() {
    let (mut store, seen) = observed_store(Storage::memory());
    store.set_queue(tracks(&["t1", "t2"]));
    store.play_track(track("t1"));
    store.set_playing(false);
    store.cycle_repeat();
    store.cycle_repeat();
    assert_eq!(store.repeat_mode(), RepeatMode::One);
    store.clear_history();
    let notified_before = seen.lock().unwrap().len();

    store.next();

    let state = store.state();
    assert_eq!(state.current_track, Some(track("t1")));
    assert!(!state.is_playing);
    assert_eq!(seen.lock().unwrap().len(), notified_before + 1);
    assert!(history_ids(&store).is_empty());
}

#[test]
fn previous_at_start_is_noop_for_every_repeat_mode() {
    let mut store = PlaybackStore::default();
    store.set_queue(tracks(&["a", "b"]));
    store.play_track(track("a"));

    for _ in 0..3 {
        let before = store.state();
        store.previous();
        assert_eq!(*store.state(), *before);
        store.cycle_repeat();
    }
}

#[test]
fn next_then_previous_round_trip() {
    let mut store = PlaybackStore::default();
    store.set_queue(tracks(&["a", "b", "c"]));
    store.play_track(track("a"));

    store.next();
    store.next();
    assert_eq!(store.state().current_track, Some(track("c")));

    store.previous();
    assert_eq!(store.state().current_track, Some(track("b")));
    assert_eq!(store.state().current_index, 1);
}

#[test]
fn stale_index_after_playing_outside_queue() {
    let mut store = PlaybackStore::default();
    store.set_queue(tracks(&["a", "b", "c"]));
    store.play_track(track("b"));
    store.play_track(track("elsewhere"));

    assert_eq!(store.state().current_index, 1);

    store.next();
    assert_eq!(store.state().current_track, Some(track("c")));
}

#[test]
fn cycle_repeat_three_times_is_identity() {
    let mut store = PlaybackStore::default();
    for _ in 0..3 {
        store.cycle_repeat();
    }
    assert_eq!(store.repeat_mode(), RepeatMode::Off);
}

#[test]
fn shuffle_flag_does_not_change_navigation() {
    let mut store = PlaybackStore::default();
    store.set_queue(tracks(&["a", "b", "c"]));
    store.play_track(track("a"));
    store.toggle_shuffle();

    store.next();

    assert!(store.state().is_shuffled);
    assert_eq!(store.state().current_track, Some(track("b")));
}

#[test]
fn volume_is_clamped() {
    let mut store = PlaybackStore::default();
    for (input, stored) in [(-10, 0), (150, 100), (55, 55)] {
        store.set_volume(input);
        assert_eq!(store.state().volume, stored);
    }
}

// ===== History =====

#[test]
fn replayed_track_moves_to_front() {
    let mut store = PlaybackStore::default();
    store.play_track(track("a"));
    store.play_track(track("b"));
    store.play_track(track("a"));

    assert_eq!(history_ids(&store), vec!["a", "b"]);
}

#[test]
fn history_is_capped_at_configured_size() {
    let config = PlaybackConfig {
        history_size: 3,
        ..PlaybackConfig::default()
    };
    let mut store = PlaybackStore::new(config, Storage::memory());
    for id in ["1", "2", "3", "4", "5"] {
        store.play_track(track(id));
    }

    assert_eq!(history_ids(&store), vec!["5", "4", "3"]);
}

#[test]
fn history_survives_store_restart() {
    let storage = Storage::memory();
    {
        let mut store = PlaybackStore::new(PlaybackConfig::default(), storage.clone());
        store.play_track(track("a"));
        store.play_track(track("b"));
    }

    let store = PlaybackStore::new(PlaybackConfig::default(), storage.clone());
    assert_eq!(history_ids(&store), vec!["b", "a"]);

    let raw: Vec<Track> = storage.get(keys::PLAYBACK_HISTORY).unwrap();
    assert_eq!(raw.len(), 2);
}

#[test]
fn history_is_written_after_listeners_run() {
    let storage = Storage::memory();
    let mut store = PlaybackStore::new(PlaybackConfig::default(), storage.clone());

    let observed = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&observed);
    let reader = storage.clone();
    store.subscribe(move |_| {
        let stored: Option<Vec<Track>> = reader.get(keys::PLAYBACK_HISTORY);
        *sink.lock().unwrap() = Some(stored.unwrap_or_default().len());
    });

    store.play_track(track("a"));

    assert_eq!(*observed.lock().unwrap(), Some(0));
    assert_eq!(history_ids(&store), vec!["a"]);
}

#[test]
fn non_playing_commands_do_not_touch_history() {
    let mut store = PlaybackStore::default();
    store.set_queue(tracks(&["a", "b"]));
    store.toggle_play();
    store.set_volume(20);
    store.toggle_shuffle();
    store.cycle_repeat();
    store.previous();

    assert!(history_ids(&store).is_empty());
}

#[test]
fn failing_storage_does_not_block_transitions() {
    let (mut store, seen) = observed_store(Storage::new(FailingBackend));
    store.set_queue(tracks(&["a", "b"]));
    store.play_track(track("a"));
    store.next();

    let state = store.state();
    assert_eq!(state.current_track, Some(track("b")));
    assert!(state.is_playing);
    assert_eq!(seen.lock().unwrap().len(), 3);
    assert!(store.recently_played(10).is_empty());
}

#[test]
fn file_storage_keeps_history_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::open(dir.path()).unwrap();
    let mut store = PlaybackStore::new(PlaybackConfig::default(), storage);
    store.play_track(track("disk"));

    let reopened = Storage::open(dir.path()).unwrap();
    let history: Vec<Track> = reopened.get(keys::PLAYBACK_HISTORY).unwrap();
    assert_eq!(history, vec![track("disk")]);
}
