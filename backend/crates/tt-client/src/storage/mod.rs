//! Key-value persistence for session data.
//!
//! The session layer only ever sees [`KeyValueStore`], so credentials can live in
//! a file, in memory for tests, or anywhere else that can hold a few strings.

pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod memory_store;

pub use error::{Result as StorageResult, StorageError};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Drop every key, not just the session ones.
    fn clear(&self) -> StorageResult<()>;

    /// Write several entries as one update where the backend allows it.
    fn set_many(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> StorageResult<()> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }
}
