use crate::session::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_INFO_KEY};
use crate::{CredentialStore, KeyValueStore, MemoryStore};

use std::sync::Arc;

use tt_core::{Identity, LoginResponse, Role};

fn identity() -> Identity {
    Identity {
        id: 7,
        username: "trainer1".into(),
        email: "trainer1@example.com".into(),
        first_name: "Terry".into(),
        last_name: "Trainer".into(),
        phone: None,
        role: Some(Role::Trainer),
        expertise: Some("Rust".into()),
        designation: None,
        is_active_flag: Some(true),
    }
}

fn login_response() -> LoginResponse {
    LoginResponse {
        access: "access-1".into(),
        refresh: "refresh-1".into(),
        user: identity(),
    }
}

#[test]
fn test_save_writes_all_three_keys() {
    let store = Arc::new(MemoryStore::new());
    let credentials = CredentialStore::new(store.clone());

    credentials.save(&login_response()).unwrap();

    assert_eq!(
        store.get(ACCESS_TOKEN_KEY).unwrap(),
        Some("access-1".to_string())
    );
    assert_eq!(
        store.get(REFRESH_TOKEN_KEY).unwrap(),
        Some("refresh-1".to_string())
    );
    assert!(store.get(USER_INFO_KEY).unwrap().is_some());
    assert_eq!(credentials.identity().unwrap(), Some(identity()));
    assert!(credentials.has_session().unwrap());
}

#[test]
fn test_clear_tokens_keeps_identity() {
    let credentials = CredentialStore::in_memory();
    credentials.save(&login_response()).unwrap();

    credentials.clear_tokens().unwrap();

    assert_eq!(credentials.access_token().unwrap(), None);
    assert_eq!(credentials.refresh_token().unwrap(), None);
    assert_eq!(credentials.identity().unwrap(), Some(identity()));
    assert!(!credentials.has_session().unwrap());
}

#[test]
fn test_clear_removes_only_session_keys() {
    let store = Arc::new(MemoryStore::new());
    store.set("theme", "dark").unwrap();
    let credentials = CredentialStore::new(store.clone());
    credentials.save(&login_response()).unwrap();

    credentials.clear().unwrap();

    assert_eq!(credentials.access_token().unwrap(), None);
    assert_eq!(credentials.refresh_token().unwrap(), None);
    assert_eq!(credentials.identity().unwrap(), None);
    assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
}

#[test]
fn test_clear_when_empty_is_ok() {
    let credentials = CredentialStore::in_memory();
    credentials.clear().unwrap();
    credentials.clear().unwrap();
}

#[test]
fn test_unreadable_identity_is_treated_as_absent() {
    let store = Arc::new(MemoryStore::new());
    store.set(USER_INFO_KEY, "not json").unwrap();
    store.set(ACCESS_TOKEN_KEY, "access-1").unwrap();
    let credentials = CredentialStore::new(store);

    assert_eq!(credentials.identity().unwrap(), None);
    assert!(!credentials.has_session().unwrap());
}
