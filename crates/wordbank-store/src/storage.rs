use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Storage file {path} is not a JSON object: {reason}")]
    InvalidFile { path: PathBuf, reason: String },

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// String key/value slots, the shape of browser local storage
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Arc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// Process-local storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Poisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// All slots kept as string values of one JSON object on disk
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_slots(&self) -> Result<Map<String, Value>, StorageError> {
        if !self.path.exists() {
            tracing::debug!("No storage file at {:?}, starting empty", self.path);
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(slots)) => Ok(slots),
            Ok(_) => Err(StorageError::InvalidFile {
                path: self.path.clone(),
                reason: "top-level value is not an object".to_string(),
            }),
            Err(e) => Err(StorageError::InvalidFile {
                path: self.path.clone(),
                reason: e.to_string(),
            }),
        }
    }

    /// Temp file + rename so a crash never leaves a half-written file
    fn write_slots(&self, slots: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_string_pretty(slots).map_err(|e| StorageError::InvalidFile {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path).map_err(|e| self.io_error(e))?;
            file.write_all(content.as_bytes())
                .map_err(|e| self.io_error(e))?;
            file.sync_all().map_err(|e| self.io_error(e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            self.io_error(e)
        })
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _lock = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let slots = self.read_slots()?;

        Ok(slots.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _lock = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut slots = self.read_slots()?;
        slots.insert(key.to_string(), Value::String(value.to_string()));
        self.write_slots(&slots)?;

        tracing::debug!("Wrote slot '{}' ({} bytes) to {:?}", key, value.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (FileStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("nested").join("storage.json"));
        (storage, temp_dir)
    }

    #[test]
    fn test_missing_file_reads_as_absent() {
        let (storage, _temp_dir) = create_test_storage();
        assert_eq!(storage.get_item("personalDictionary").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_survives_reopen() {
        let (storage, _temp_dir) = create_test_storage();
        storage.set_item("personalDictionary", "[]").unwrap();
        storage.set_item("other", "value").unwrap();

        let reopened = FileStorage::new(storage.path().to_path_buf());
        assert_eq!(
            reopened.get_item("personalDictionary").unwrap().as_deref(),
            Some("[]")
        );
        assert_eq!(reopened.get_item("other").unwrap().as_deref(), Some("value"));
        assert!(!storage.path().with_extension("tmp").exists());
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let (storage, _temp_dir) = create_test_storage();
        fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
        fs::write(storage.path(), "[1, 2, 3]").unwrap();

        let err = storage.get_item("personalDictionary").unwrap_err();
        assert!(matches!(err, StorageError::InvalidFile { .. }));
    }

    #[test]
    fn test_memory_storage_overwrites() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "one").unwrap();
        storage.set_item("k", "two").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("two"));
        assert_eq!(storage.get_item("missing").unwrap(), None);
    }
}
