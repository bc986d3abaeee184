//! Shared fixtures for the wiremock integration tests

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{Value, json};
use tt_client::{ApiClient, CredentialStore, MemoryStore, SessionStore};
use wiremock::MockServer;

pub const ADMIN_USERNAME: &str = "admin@Stack";
pub const ADMIN_PASSWORD: &str = "St@ckly2025";

pub fn user_json(id: i64, username: &str, role: Option<&str>) -> Value {
    json!({
        "id": id,
        "username": username,
        "email": format!("{}@example.com", username.replace('@', ".")),
        "first_name": "Test",
        "last_name": "User",
        "phone": null,
        "role": role,
    })
}

pub fn login_json(access: &str, refresh: &str, user: Value) -> Value {
    json!({
        "access": access,
        "refresh": refresh,
        "user": user,
    })
}

/// Client against `server` with an empty in-memory credential store.
pub fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), CredentialStore::in_memory())
}

/// Session store over a fresh client, with its auth listener running.
pub fn session_store(server: &MockServer) -> Arc<SessionStore> {
    let session = Arc::new(SessionStore::new(api_client(server)));
    session.spawn_auth_listener();
    session
}

/// Credential store pre-filled as if `user` had logged in earlier.
pub fn persisted_credentials(access: &str, user: Value) -> CredentialStore {
    let credentials = CredentialStore::new(Arc::new(MemoryStore::new()));
    let login = serde_json::from_value(login_json(access, "refresh-old", user))
        .expect("valid login fixture");
    credentials.save(&login).expect("memory store accepts writes");
    credentials
}
