use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::model::task::Task;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize value: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Store key for the serialized task collection
pub const KEY_TASKS: &str = "tasks";
/// Store key for the session flag ("true" or absent)
pub const KEY_LOGGED_IN: &str = "isLoggedIn";
/// Store key for cached credentials
pub const KEY_CREDENTIALS: &str = "userCredentials";

/// Persistent key-value store backed by a single JSON file.
///
/// String keys map to string values. The whole map is rewritten on every
/// mutation, through a temp file in the same directory followed by an
/// atomic rename, so a failed write leaves the prior file intact.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    map: IndexMap<String, String>,
}

impl Store {
    /// Open the store at the given file path. A missing file yields an
    /// empty store. A malformed file also yields an empty store and
    /// reports the parse failure so the caller can log it.
    pub fn open(path: &Path) -> (Store, Option<StoreError>) {
        let mut store = Store {
            path: path.to_path_buf(),
            map: IndexMap::new(),
        };
        if !path.exists() {
            return (store, None);
        }
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) => {
                return (
                    store,
                    Some(StoreError::ReadError {
                        path: path.to_path_buf(),
                        source: e,
                    }),
                );
            }
        };
        match serde_json::from_str::<IndexMap<String, String>>(&text) {
            Ok(map) => {
                store.map = map;
                (store, None)
            }
            Err(e) => (store, Some(StoreError::SerializeError(e))),
        }
    }

    /// Get the value for a key, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    /// Set a key and persist. The in-memory value is updated even when
    /// the write fails (optimistic update, no rollback).
    pub fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.map.insert(key.to_string(), value);
        self.persist()
    }

    /// Remove the named keys and persist once. A failed write restores
    /// the removed entries, so memory and disk stay in agreement — logout
    /// must not appear to succeed when the flag is still on disk.
    pub fn remove(&mut self, keys: &[&str]) -> Result<(), StoreError> {
        let before = self.map.clone();
        for key in keys {
            self.map.shift_remove(*key);
        }
        if let Err(e) = self.persist() {
            self.map = before;
            return Err(e);
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.map)?;
        let dir = self.path.parent().unwrap_or(Path::new("."));
        let tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| StoreError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;
        fs::write(tmp.path(), content).map_err(|e| StoreError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;
        tmp.persist(&self.path).map_err(|e| StoreError::WriteError {
            path: self.path.clone(),
            source: e.error,
        })?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Typed accessors
// ---------------------------------------------------------------------------

/// Cached login credentials, persisted verbatim as a local session artifact
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Read the persisted task collection. Absent key → None.
/// A malformed value is reported so the caller can log and reseed.
pub fn read_tasks(store: &Store) -> Result<Option<Vec<Task>>, StoreError> {
    match store.get(KEY_TASKS) {
        None => Ok(None),
        Some(json) => Ok(Some(serde_json::from_str(json)?)),
    }
}

/// Persist the full task collection
pub fn write_tasks(store: &mut Store, tasks: &[Task]) -> Result<(), StoreError> {
    let json = serde_json::to_string(tasks)?;
    store.set(KEY_TASKS, json)
}

/// Whether the session flag is set
pub fn is_logged_in(store: &Store) -> bool {
    store.get(KEY_LOGGED_IN).is_some()
}

/// Set the session flag
pub fn set_logged_in(store: &mut Store) -> Result<(), StoreError> {
    store.set(KEY_LOGGED_IN, "true".to_string())
}

/// Persist credentials
pub fn write_credentials(store: &mut Store, credentials: &Credentials) -> Result<(), StoreError> {
    let json = serde_json::to_string(credentials)?;
    store.set(KEY_CREDENTIALS, json)
}

/// Read cached credentials, if present and well-formed
pub fn read_credentials(store: &Store) -> Option<Credentials> {
    let json = store.get(KEY_CREDENTIALS)?;
    serde_json::from_str(json).ok()
}

/// Clear the session flag and cached credentials in one write
pub fn clear_session(store: &mut Store) -> Result<(), StoreError> {
    store.remove(&[KEY_LOGGED_IN, KEY_CREDENTIALS])
}
