//! Persistent key/value storage for state that must survive a restart.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key of the persisted session.
pub const AUTH_STORAGE_KEY: &str = "auth-storage";

/// Storage key of the persisted sidebar (menu + permissions).
pub const SIDEBAR_STORAGE_KEY: &str = "sidebar-storage";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to (de)serialize '{key}': {source}")]
    Serde {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no data directory available for persistent storage")]
    NoDataDir,
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

/// String key/value storage (the browser's local storage, in spirit).
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub type SharedStorage = Arc<dyn KeyValueStorage>;

/// Envelope written for every persisted value.
#[derive(Debug, Serialize, Deserialize)]
struct Persisted<T> {
    state: T,
    version: u32,
}

/// Read and decode `key`. A version mismatch reads as absent.
pub fn load<T: DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
    version: u32,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };

    let persisted: Persisted<T> = serde_json::from_str(&raw).map_err(|source| StorageError::Serde {
        key: key.to_string(),
        source,
    })?;

    if persisted.version != version {
        tracing::warn!(
            key,
            found = persisted.version,
            expected = version,
            "discarding persisted state with unexpected version"
        );
        return Ok(None);
    }

    Ok(Some(persisted.state))
}

pub fn save<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    version: u32,
    state: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(&Persisted { state, version }).map_err(|source| {
        StorageError::Serde {
            key: key.to_string(),
            source,
        }
    })?;
    storage.set(key, &raw)
}

/// In-memory storage (tests, ephemeral runs).
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStorage {
        Arc::new(Self::new())
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A panic while holding the lock cannot leave a half-written entry.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}

/// One JSON file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir`, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// `{data_dir}/backoffice`, falling back to `~/.local/share/backoffice`.
    pub fn default_dir() -> Result<PathBuf, StorageError> {
        let base = dirs::data_dir()
            .or_else(|| {
                dirs::home_dir().map(|mut h| {
                    h.push(".local");
                    h.push("share");
                    h
                })
            })
            .ok_or(StorageError::NoDataDir)?;
        Ok(base.join("backoffice"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        // Write-then-rename so a crash never leaves a truncated file behind.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &path).map_err(|source| StorageError::Io { path, source })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_round_trips_and_removes() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("state")).unwrap();

        assert_eq!(storage.get(AUTH_STORAGE_KEY).unwrap(), None);
        storage.set(AUTH_STORAGE_KEY, "{\"a\":1}").unwrap();
        assert_eq!(storage.get(AUTH_STORAGE_KEY).unwrap().as_deref(), Some("{\"a\":1}"));
        assert!(dir.path().join("state/auth-storage.json").exists());

        storage.remove(AUTH_STORAGE_KEY).unwrap();
        storage.remove(AUTH_STORAGE_KEY).unwrap();
        assert_eq!(storage.get(AUTH_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn file_storage_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        assert!(matches!(
            storage.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
    }

    #[test]
    fn versioned_envelope() {
        let storage = MemoryStorage::new();
        save(&storage, "k", 1, &vec![1, 2, 3]).unwrap();

        let raw = storage.get("k").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["version"], 1);
        assert_eq!(json["state"], serde_json::json!([1, 2, 3]));

        let same: Option<Vec<i32>> = load(&storage, "k", 1).unwrap();
        assert_eq!(same, Some(vec![1, 2, 3]));
        let newer: Option<Vec<i32>> = load(&storage, "k", 2).unwrap();
        assert_eq!(newer, None);
    }

    #[test]
    fn corrupt_value_is_a_serde_error() {
        let storage = MemoryStorage::new();
        storage.set("k", "not json").unwrap();
        let res: Result<Option<u8>, _> = load(&storage, "k", 1);
        assert!(matches!(res, Err(StorageError::Serde { .. })));
    }
}
