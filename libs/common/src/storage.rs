//! Local key-value storage for the Shutterbox application
//!
//! This module provides the storage capability the rest of the application is
//! built on: a small string key-value interface with an in-memory backend for
//! tests and a file-backed backend that survives process restarts.

use crate::error::{StorageError, StorageResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

/// Key-value storage capability.
///
/// Modeled after browser local storage: synchronous string-to-string access
/// with no TTL and no iteration. Implementations are injected into the
/// session manager and application state rather than accessed through a
/// global.
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key, `None` if the key is absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Set a key-value pair, overwriting any previous value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// In-memory store backed by a `HashMap`
///
/// State lives for the lifetime of the process only. This is the backend
/// used by tests and by callers that do not want durability.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cells: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let cells = self.cells.lock().map_err(|_| StorageError::poisoned())?;
        Ok(cells.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut cells = self.cells.lock().map_err(|_| StorageError::poisoned())?;
        cells.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut cells = self.cells.lock().map_err(|_| StorageError::poisoned())?;
        cells.remove(key);
        Ok(())
    }
}

/// Configuration for the file-backed store
#[derive(Debug, Clone)]
pub struct FileStoreConfig {
    /// Path of the JSON document holding the key-value pairs
    pub path: PathBuf,
}

impl FileStoreConfig {
    /// Create a new FileStoreConfig from environment variables
    ///
    /// # Environment Variables
    /// - `SHUTTERBOX_STORAGE_PATH`: storage file path (default: "shutterbox.json")
    pub fn from_env() -> StorageResult<Self> {
        let path = std::env::var("SHUTTERBOX_STORAGE_PATH")
            .unwrap_or_else(|_| "shutterbox.json".to_string());

        Ok(FileStoreConfig { path: path.into() })
    }
}

/// File-backed store
///
/// All keys live in a single JSON document that is read once at open and
/// rewritten in full on every mutation. Durability matches what the
/// application needs: a handful of small records, written on auth events.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    cells: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open a file store, loading existing content if the file is present
    pub fn open(config: &FileStoreConfig) -> StorageResult<Self> {
        let cells = match std::fs::read_to_string(&config.path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(StorageError::Io(e)),
        };

        info!("Opened file store at {}", config.path.display());

        Ok(FileStore {
            path: config.path.clone(),
            cells: Mutex::new(cells),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, cells: &HashMap<String, String>) -> StorageResult<()> {
        let text = serde_json::to_string(cells)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let cells = self.cells.lock().map_err(|_| StorageError::poisoned())?;
        Ok(cells.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut cells = self.cells.lock().map_err(|_| StorageError::poisoned())?;
        cells.insert(key.to_string(), value.to_string());
        self.flush(&cells)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut cells = self.cells.lock().map_err(|_| StorageError::poisoned())?;
        cells.remove(key);
        self.flush(&cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_set_get_remove() -> StorageResult<()> {
        let store = MemoryStore::new();

        let key = "test_key";
        let value = "test_value";
        store.set(key, value)?;

        let retrieved = store.get(key)?;
        assert_eq!(retrieved, Some(value.to_string()));

        store.remove(key)?;
        let retrieved = store.get(key)?;
        assert_eq!(retrieved, None);

        Ok(())
    }

    #[test]
    fn test_memory_overwrite() -> StorageResult<()> {
        let store = MemoryStore::new();

        store.set("k", "first")?;
        store.set("k", "second")?;
        assert_eq!(store.get("k")?, Some("second".to_string()));

        Ok(())
    }

    #[test]
    fn test_remove_absent_key_is_ok() -> StorageResult<()> {
        let store = MemoryStore::new();
        store.remove("never_set")?;
        assert_eq!(store.get("never_set")?, None);
        Ok(())
    }
}
