//! Store configuration.
//!
//! # Example
//!
//! ```no_run
//! use sheet_core::{CharacterStore, StoreConfig};
//!
//! let config = StoreConfig::new("./data").with_key("characters");
//! let store = CharacterStore::open(config.open_storage())?;
//! println!("{} characters", store.len());
//! # Ok::<(), sheet_core::StoreError>(())
//! ```

use crate::storage::{JsonFileStorage, DEFAULT_STORAGE_KEY};
use std::path::PathBuf;

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "SHEET_DATA_DIR";

/// Environment variable overriding the storage key.
pub const STORAGE_KEY_ENV: &str = "SHEET_STORAGE_KEY";

/// Where and under which key the character collection is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the collection file.
    pub data_dir: PathBuf,
    /// Storage key. Must stay stable across sessions.
    pub key: String,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Read `SHEET_DATA_DIR` and `SHEET_STORAGE_KEY`, falling back to the
    /// current directory and the default key.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| ".".to_string());
        let mut config = Self::new(data_dir);
        if let Some(key) = lookup(STORAGE_KEY_ENV).filter(|v| !v.is_empty()) {
            config.key = key;
        }
        tracing::debug!(data_dir = %config.data_dir.display(), key = %config.key, "store config");
        config
    }

    /// File backend for this configuration.
    pub fn open_storage(&self) -> JsonFileStorage {
        JsonFileStorage::new(&self.data_dir, &self.key)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.key, "characters");
        assert!(config.open_storage().path().ends_with("characters.json"));
    }

    #[test]
    fn test_builder() {
        let config = StoreConfig::new("/tmp/sheets").with_key("mesa-de-sexta");
        assert_eq!(
            config.open_storage().path(),
            PathBuf::from("/tmp/sheets/mesa-de-sexta.json")
        );
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(DATA_DIR_ENV, "/srv/sheets"), (STORAGE_KEY_ENV, "party")]);
        let config = StoreConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.data_dir, PathBuf::from("/srv/sheets"));
        assert_eq!(config.key, "party");
    }

    #[test]
    fn test_from_lookup_empty_values_fall_back() {
        let config = StoreConfig::from_lookup(|_| Some(String::new()));
        assert_eq!(config, StoreConfig::default());
    }
}
