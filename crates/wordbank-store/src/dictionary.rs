use std::sync::Mutex;

use wordbank_types::{Definitions, DictionaryEntry};

use crate::storage::{KeyValueStorage, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Slot content is not a JSON array of entries; it is left as is
    #[error("Personal dictionary is corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to serialize personal dictionary: {0}")]
    Serialize(String),

    #[error("Personal dictionary lock poisoned")]
    Poisoned,
}

/// Saved words, kept as one JSON array under a single storage key
pub struct PersonalDictionary<S> {
    storage: S,
    key: String,
    /// Serializes load-check-append-write
    add_lock: Mutex<()>,
}

impl<S: KeyValueStorage> PersonalDictionary<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            add_lock: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read all entries; an absent slot is an empty dictionary
    pub fn load(&self) -> Result<Vec<DictionaryEntry>, StoreError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            tracing::debug!("Slot '{}' absent, personal dictionary is empty", self.key);
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Option<Vec<DictionaryEntry>>>(&raw) {
            Ok(entries) => {
                let entries = entries.unwrap_or_default();
                tracing::debug!("Loaded {} personal entries", entries.len());
                Ok(entries)
            }
            Err(e) => {
                tracing::error!("Error reading personal dictionary slot '{}': {}", self.key, e);
                Err(StoreError::Corrupt(e.to_string()))
            }
        }
    }

    pub fn contains(&self, word: &str) -> Result<bool, StoreError> {
        Ok(self.load()?.iter().any(|entry| entry.word == word))
    }

    /// Append `word` unless an entry with the exact same word exists
    pub fn add(&self, word: &str, definitions: &Definitions) -> Result<AddOutcome, StoreError> {
        let _lock = self.add_lock.lock().map_err(|_| StoreError::Poisoned)?;

        let mut entries = self.load()?;
        if entries.iter().any(|entry| entry.word == word) {
            tracing::debug!("'{}' already saved, skipping", word);
            return Ok(AddOutcome::AlreadyExists);
        }

        entries.push(DictionaryEntry::new(word, definitions));
        let serialized =
            serde_json::to_string(&entries).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.storage.set_item(&self.key, &serialized)?;

        tracing::info!("Saved '{}' ({} entries total)", word, entries.len());
        Ok(AddOutcome::Added)
    }
}
