use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;
use self::store::StoreConfig;
use self::ui::UiConfig;

pub mod lookup;
pub mod store;
pub mod ui;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub lookup: LookupConfig,
    pub store: StoreConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env(|key| env::var(key).ok());
        config
    }

    /// Read a JSON config file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config =
            serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.apply_env(|key| env::var(key).ok());
        Ok(config)
    }

    /// Override fields from `WORDBANK_*` variables
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("WORDBANK_API_URL") {
            self.lookup.api_url = url;
        }

        if let Some(encode) = var("WORDBANK_ENCODE_TERM").and_then(|v| v.parse().ok()) {
            self.lookup.encode_term = encode;
        }

        if let Some(path) = var("WORDBANK_STORAGE") {
            self.store.path = Some(PathBuf::from(path));
        }

        if let Some(key) = var("WORDBANK_STORAGE_KEY") {
            self.store.key = key;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_point_at_public_dictionary() {
        let config = Config::default();
        assert_eq!(
            config.lookup.api_url,
            "https://api.dictionaryapi.dev/api/v2/entries/en/"
        );
        assert!(config.lookup.encode_term);
        assert_eq!(config.store.key, "personalDictionary");
        assert!(config.store.path.is_none());
    }

    #[test]
    fn env_overrides_fields() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("WORDBANK_API_URL", "http://localhost:9000/entries/"),
            ("WORDBANK_ENCODE_TERM", "false"),
            ("WORDBANK_STORAGE", "/tmp/words.json"),
        ]);

        let mut config = Config::default();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.lookup.api_url, "http://localhost:9000/entries/");
        assert!(!config.lookup.encode_term);
        assert_eq!(config.store.storage_path(), PathBuf::from("/tmp/words.json"));
        assert_eq!(config.store.key, "personalDictionary");
    }

    #[test]
    fn unparsable_bool_is_ignored() {
        let mut config = Config::default();
        config.apply_env(|key| (key == "WORDBANK_ENCODE_TERM").then(|| "maybe".to_string()));
        assert!(config.lookup.encode_term);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "store": { "key": "words" } }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.store.key, "words");
        assert_eq!(config.ui.prompt, "search> ");
        assert!(config.lookup.encode_term);
    }

    #[test]
    fn load_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
