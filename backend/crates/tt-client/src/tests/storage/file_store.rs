use crate::{FileStore, KeyValueStore};

use std::fs;

use tempfile::TempDir;

fn session_file(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("session.json")
}

#[test]
fn test_open_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(session_file(&dir)).unwrap();

    assert_eq!(store.get("access_token").unwrap(), None);
    assert!(!session_file(&dir).exists());
}

#[test]
fn test_values_survive_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let store = FileStore::open(session_file(&dir)).unwrap();
        store
            .set_many(&[("access_token", "abc"), ("refresh_token", "def")])
            .unwrap();
    }

    let reopened = FileStore::open(session_file(&dir)).unwrap();
    assert_eq!(reopened.get("access_token").unwrap(), Some("abc".to_string()));
    assert_eq!(reopened.get("refresh_token").unwrap(), Some("def".to_string()));
}

#[test]
fn test_remove_is_persisted() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(session_file(&dir)).unwrap();
    store.set("access_token", "abc").unwrap();
    store.set("user_info", "{}").unwrap();

    store.remove("access_token").unwrap();

    let reopened = FileStore::open(session_file(&dir)).unwrap();
    assert_eq!(reopened.get("access_token").unwrap(), None);
    assert_eq!(reopened.get("user_info").unwrap(), Some("{}".to_string()));
}

#[test]
fn test_creates_missing_parent_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("session.json");
    let store = FileStore::open(&path).unwrap();

    store.set("access_token", "abc").unwrap();

    assert!(path.exists());
}

#[test]
fn test_no_temp_file_left_behind() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(session_file(&dir)).unwrap();

    store.set("access_token", "abc").unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["session.json".to_string()]);
}

#[test]
fn test_corrupted_file_is_backed_up_and_ignored() {
    let dir = TempDir::new().unwrap();
    fs::write(session_file(&dir), "{ not json").unwrap();

    let store = FileStore::open(session_file(&dir)).unwrap();

    assert_eq!(store.get("access_token").unwrap(), None);
    assert!(!session_file(&dir).exists());

    let backups: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("session.json.corrupted."))
        .collect();
    assert_eq!(backups.len(), 1);
}

#[test]
fn test_clear_writes_empty_object() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(session_file(&dir)).unwrap();
    store.set("access_token", "abc").unwrap();

    store.clear().unwrap();

    let contents = fs::read_to_string(session_file(&dir)).unwrap();
    assert_eq!(contents.trim(), "{}");
}
