use crate::{KeyValueStore, MemoryStore};

#[test]
fn test_get_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("access_token").unwrap(), None);
}

#[test]
fn test_set_then_get() {
    let store = MemoryStore::new();
    store.set("access_token", "abc").unwrap();
    assert_eq!(store.get("access_token").unwrap(), Some("abc".to_string()));
}

#[test]
fn test_set_overwrites() {
    let store = MemoryStore::new();
    store.set("access_token", "old").unwrap();
    store.set("access_token", "new").unwrap();
    assert_eq!(store.get("access_token").unwrap(), Some("new".to_string()));
}

#[test]
fn test_remove_missing_key_is_ok() {
    let store = MemoryStore::new();
    store.remove("never_set").unwrap();
}

#[test]
fn test_clear_drops_everything() {
    let store = MemoryStore::new();
    store.set_many(&[("a", "1"), ("b", "2")]).unwrap();

    store.clear().unwrap();

    assert_eq!(store.get("a").unwrap(), None);
    assert_eq!(store.get("b").unwrap(), None);
}
