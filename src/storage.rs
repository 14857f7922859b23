//! String key-value persistence backing favorites and preferences.

use crate::errors::{StoreError, StoreResult};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

pub const APP_DIR_NAME: &str = "pokezone";

pub trait Storage: Send + Sync {
    /// The stored value, or `None` if the key was never written.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Default on-disk location: `<platform data dir>/pokezone`.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(APP_DIR_NAME))
}

/// One `<key>.json` file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

fn io_error(key: &str, e: std::io::Error) -> StoreError {
    StoreError::Io {
        key: key.to_string(),
        details: e.to_string(),
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.root).map_err(|e| io_error(key, e))?;
        let path = self.path_for(key);
        debug!(path = %path.display(), "writing");
        fs::write(path, value).map_err(|e| io_error(key, e))
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }
}

/// Process-local storage; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));

        assert_eq!(storage.get("pokezone-theme").unwrap(), None);
        storage.set("pokezone-theme", "dark").unwrap();
        assert_eq!(storage.get("pokezone-theme").unwrap().as_deref(), Some("dark"));
        assert!(dir.path().join("nested").join("pokezone-theme.json").exists());

        storage.remove("pokezone-theme").unwrap();
        assert_eq!(storage.get("pokezone-theme").unwrap(), None);
        storage.remove("pokezone-theme").unwrap();
    }

    #[test]
    fn memory_storage_overwrites() {
        let storage = MemoryStorage::new();
        storage.set("k", "1").unwrap();
        storage.set("k", "2").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("2"));
    }
}
