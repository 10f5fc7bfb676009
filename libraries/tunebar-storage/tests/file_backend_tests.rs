//! File backend integration tests
//!
//! Uses real temporary directories so the tests exercise the same file
//! layout a running application produces.

use tunebar_core::{keys, Track};
use tunebar_storage::{FileBackend, KeyValueBackend, Storage};

#[test]
fn values_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();

    {
        let storage = Storage::open(dir.path()).unwrap();
        storage.set(
            keys::PLAYBACK_HISTORY,
            &vec![Track::new("dQw4w9WgXcQ", "Never Gonna Give You Up", "Rick Astley")],
        );
    }

    let reopened = Storage::open(dir.path()).unwrap();
    let history: Vec<Track> = reopened.get(keys::PLAYBACK_HISTORY).unwrap();

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id.as_str(), "dQw4w9WgXcQ");
}

#[test]
fn one_file_per_key() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileBackend::open(dir.path()).unwrap();

    backend.write(keys::PLAYLISTS, "[]").unwrap();
    backend.write(keys::PLAYBACK_HISTORY, "[]").unwrap();

    assert!(dir.path().join("playlists.json").is_file());
    assert!(dir.path().join("playback_history.json").is_file());
}

#[test]
fn overwrite_replaces_previous_value() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileBackend::open(dir.path()).unwrap();

    backend.write("volume", "10").unwrap();
    backend.write("volume", "90").unwrap();

    assert_eq!(backend.read("volume").unwrap().as_deref(), Some("90"));
    assert!(!dir.path().join("volume.json.tmp").exists());
}

#[test]
fn delete_missing_key_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileBackend::open(dir.path()).unwrap();

    assert!(backend.delete("never-written").is_ok());
}

#[test]
fn clear_keeps_unrelated_files() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileBackend::open(dir.path()).unwrap();
    std::fs::write(dir.path().join("README.txt"), "notes").unwrap();

    backend.write("a", "1").unwrap();
    backend.write("b", "2").unwrap();
    backend.clear().unwrap();

    assert_eq!(backend.read("a").unwrap(), None);
    assert_eq!(backend.read("b").unwrap(), None);
    assert!(dir.path().join("README.txt").exists());
}

#[test]
fn open_creates_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("profile").join("data");

    let backend = FileBackend::open(&nested).unwrap();

    assert!(nested.is_dir());
    assert_eq!(backend.dir(), nested.as_path());
}

#[test]
fn corrupt_file_reads_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("playlists.json"), "{not json").unwrap();

    let storage = Storage::open(dir.path()).unwrap();
    assert_eq!(storage.get::<Vec<Track>>(keys::PLAYLISTS), None);
}
