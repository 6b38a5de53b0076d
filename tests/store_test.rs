//! Integration tests for file-backed streak persistence

use std::fs;

use kstreak::store::{FileBackend, MemoryBackend, StreakStore};
use tempfile::TempDir;

#[test]
fn test_snapshot_survives_a_reopen() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("streaks.toml");

    let mut store = StreakStore::open(Box::new(FileBackend::new(&path))).expect("open store");
    store.set_kills("Alice", 4).expect("set kills");
    store.add_kill("Bob").expect("add kill");
    drop(store);

    let store = StreakStore::open(Box::new(FileBackend::new(&path))).expect("reopen store");
    assert_eq!(store.kills("Alice"), 4);
    assert_eq!(store.kills("Bob"), 1);
    assert_eq!(store.players().len(), 2);
}

#[test]
fn test_missing_file_loads_as_empty() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("does-not-exist.toml");

    let store = StreakStore::open(Box::new(FileBackend::new(path))).expect("open store");
    assert!(store.players().is_empty());
}

#[test]
fn test_every_mutation_rewrites_the_whole_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("streaks.toml");

    let mut store = StreakStore::open(Box::new(FileBackend::new(&path))).expect("open store");
    store.set_kills("Alice", 2).expect("set kills");
    store.set_kills("Bob", 9).expect("set kills");

    let content = fs::read_to_string(&path).expect("read streak file");
    assert!(content.contains("Alice"));
    assert!(content.contains("Bob"));

    store.delete("Bob").expect("delete");
    let content = fs::read_to_string(&path).expect("read streak file");
    assert!(content.contains("Alice"));
    assert!(!content.contains("Bob"));
}

#[test]
fn test_negative_counts_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("streaks.toml");

    let mut store = StreakStore::open(Box::new(FileBackend::new(&path))).expect("open store");
    store.set_kills("Alice", -5).expect("set kills");
    drop(store);

    let store = StreakStore::open(Box::new(FileBackend::new(&path))).expect("reopen store");
    assert_eq!(store.kills("Alice"), -5);
}

#[test]
fn test_corrupt_file_is_reported_on_open() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("streaks.toml");
    fs::write(&path, "players = \"not a table\"\n").expect("write garbage");

    let err = StreakStore::open(Box::new(FileBackend::new(&path)))
        .err()
        .expect("corrupt file should fail to load");
    assert!(err.to_string().contains("Failed to parse streak file"));
}

#[test]
fn test_save_failure_reaches_the_mutating_caller() {
    let dir = TempDir::new().expect("temp dir");
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "in the way").expect("write blocker");

    // The parent of the streak file is a regular file, so every save
    // fails at directory creation
    let mut store = StreakStore::open(Box::new(FileBackend::new(blocker.join("streaks.toml"))))
        .expect("open store");

    let err = store
        .set_kills("Alice", 3)
        .err()
        .expect("saving under a file should fail");
    assert!(err.to_string().contains("Failed to create streak directory"));
    assert!(store.add_kill("Alice").is_err());
}

#[test]
fn test_memory_backend_keeps_nothing_between_opens() {
    let mut store = StreakStore::open(Box::new(MemoryBackend)).expect("open store");
    store.set_kills("Alice", 3).expect("set kills");
    drop(store);

    let store = StreakStore::open(Box::new(MemoryBackend)).expect("reopen store");
    assert!(!store.exists("Alice"));
}

#[test]
fn test_quoted_player_names_survive_the_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("streaks.toml");

    let mut store = StreakStore::open(Box::new(FileBackend::new(&path))).expect("open store");
    store.set_kills("xX_Slayer_Xx", 12).expect("set kills");
    store.set_kills("dotted.name", 1).expect("set kills");
    drop(store);

    let store = StreakStore::open(Box::new(FileBackend::new(&path))).expect("reopen store");
    assert_eq!(store.kills("xX_Slayer_Xx"), 12);
    assert_eq!(store.kills("dotted.name"), 1);
}
