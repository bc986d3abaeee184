use crate::storage::{KeyValueStore, MemoryStore, StorageResult};

use std::fmt;
use std::sync::Arc;

use log::warn;
use tt_core::{Identity, LoginResponse};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_INFO_KEY: &str = "user_info";

/// The three persisted session entries, on top of any [`KeyValueStore`].
///
/// Cloning shares the underlying store.
#[derive(Clone)]
pub struct CredentialStore {
    store: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore").finish_non_exhaustive()
    }
}

impl CredentialStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn access_token(&self) -> StorageResult<Option<String>> {
        self.store.get(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> StorageResult<Option<String>> {
        self.store.get(REFRESH_TOKEN_KEY)
    }

    /// Persisted identity. An entry that no longer parses is treated as absent.
    pub fn identity(&self) -> StorageResult<Option<Identity>> {
        let Some(raw) = self.store.get(USER_INFO_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(identity) => Ok(Some(identity)),
            Err(e) => {
                warn!("Ignoring unreadable {USER_INFO_KEY} entry: {e}");
                Ok(None)
            }
        }
    }

    /// Both a token and an identity are present.
    pub fn has_session(&self) -> StorageResult<bool> {
        Ok(self.access_token()?.is_some() && self.identity()?.is_some())
    }

    /// Persist the tokens and identity from a successful login in one write.
    pub fn save(&self, login: &LoginResponse) -> StorageResult<()> {
        let user_info = serde_json::to_string(&login.user)?;
        self.store.set_many(&[
            (ACCESS_TOKEN_KEY, login.access.as_str()),
            (REFRESH_TOKEN_KEY, login.refresh.as_str()),
            (USER_INFO_KEY, user_info.as_str()),
        ])
    }

    pub fn save_access_token(&self, access: &str) -> StorageResult<()> {
        self.store.set(ACCESS_TOKEN_KEY, access)
    }

    pub fn save_identity(&self, identity: &Identity) -> StorageResult<()> {
        let user_info = serde_json::to_string(identity)?;
        self.store.set(USER_INFO_KEY, &user_info)
    }

    /// Forget both tokens; the cached identity stays.
    pub fn clear_tokens(&self) -> StorageResult<()> {
        self.store.remove_many(&[ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY])
    }

    /// Forget all three session entries. Other keys in the store are untouched.
    pub fn clear(&self) -> StorageResult<()> {
        self.store.remove_many(&[ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_INFO_KEY])
    }
}
