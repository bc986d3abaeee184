use crate::storage::{KeyValueStore, StorageError, StorageResult};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// A JSON object of string values on disk, cached in memory.
///
/// Every mutation rewrites the whole file with the atomic write pattern:
///
/// 1. Writes to temp file
/// 2. Syncs to disk (fsync)
/// 3. Atomic rename to final location
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. A file that does not parse is renamed to
    /// `<name>.corrupted.<timestamp>` and the store starts empty.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let entries = load(&path)?;

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries.lock().map_err(|_| StorageError::poisoned())
    }

    fn update<F>(&self, change: F) -> StorageResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut entries = self.lock()?;
        let mut next = entries.clone();
        change(&mut next);

        if next == *entries {
            return Ok(());
        }

        save(&self.path, &next)?;
        *entries = next;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.update(|entries| {
            entries.remove(key);
        })
    }

    fn clear(&self) -> StorageResult<()> {
        self.update(BTreeMap::clear)
    }

    fn set_many(&self, pairs: &[(&str, &str)]) -> StorageResult<()> {
        self.update(|entries| {
            for (key, value) in pairs {
                entries.insert((*key).to_string(), (*value).to_string());
            }
        })
    }

    fn remove_many(&self, keys: &[&str]) -> StorageResult<()> {
        self.update(|entries| {
            for key in keys {
                entries.remove(*key);
            }
        })
    }
}

fn load(path: &Path) -> StorageResult<BTreeMap<String, String>> {
    if !path.exists() {
        info!("No session file at {path:?}");
        return Ok(BTreeMap::new());
    }

    let contents = fs::read_to_string(path).map_err(|e| StorageError::file_read(path.into(), e))?;

    match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
        Ok(entries) => {
            debug!("Loaded {} session entries from {path:?}", entries.len());
            Ok(entries)
        }
        Err(e) => {
            warn!("Session file corrupted at {path:?}: {e}");
            backup_corrupted(path)?;
            Ok(BTreeMap::new())
        }
    }
}

fn save(path: &Path, entries: &BTreeMap<String, String>) -> StorageResult<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| StorageError::dir_creation(dir.into(), e))?;
    }

    let temp_path = sibling(path, &format!("tmp.{}", std::process::id()));
    let json = serde_json::to_string_pretty(entries)?;

    {
        let mut file = fs::File::create(&temp_path)
            .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

        file.write_all(json.as_bytes())
            .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

        file.sync_all()
            .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        StorageError::atomic_rename(temp_path.clone(), path.into(), e)
    })?;

    debug!("Saved {} session entries to {path:?}", entries.len());
    Ok(())
}

fn backup_corrupted(path: &Path) -> StorageResult<PathBuf> {
    let timestamp = chrono::Utc::now().format(DATE_FORMAT);
    let backup_path = sibling(path, &format!("corrupted.{timestamp}"));

    fs::rename(path, &backup_path).map_err(StorageError::backup_failed)?;

    warn!("Backed up corrupted session file to {backup_path:?}");
    Ok(backup_path)
}

/// `session.json` + `tmp.42` -> `session.json.tmp.42`, in the same directory.
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
