use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_key() -> String {
    "personalDictionary".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Storage file, `None` means the platform data directory
    pub path: Option<PathBuf>,
    /// Slot holding the serialized word list
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: default_key(),
        }
    }
}

impl StoreConfig {
    pub fn storage_path(&self) -> PathBuf {
        match &self.path {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("wordbank")
                .join("storage.json"),
        }
    }
}
