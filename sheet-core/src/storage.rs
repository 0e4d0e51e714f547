//! Durable storage for the character collection.
//!
//! The collection is a single key holding a JSON array of characters.
//! Backends implement [`CharacterStorage`]; the store never touches files
//! directly, so tests can swap in [`MemoryStorage`].

use crate::character::Character;
use std::cell::{Cell, RefCell};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "characters";

/// Errors from storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Backend that loads and saves the whole character collection.
pub trait CharacterStorage {
    /// Load the collection. An absent key is an empty collection.
    fn load(&self) -> Result<Vec<Character>, StorageError>;

    /// Replace the stored collection.
    fn save(&mut self, characters: &[Character]) -> Result<(), StorageError>;
}

// ============================================================================
// JSON file backend
// ============================================================================

/// Stores the collection as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: storage_path(dir, key),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CharacterStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Character>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no saved characters yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let characters: Vec<Character> = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), count = characters.len(), "loaded characters");
        Ok(characters)
    }

    fn save(&mut self, characters: &[Character]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(characters)?;
        fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), count = characters.len(), "saved characters");
        Ok(())
    }
}

/// File path for a storage key. Characters outside `[A-Za-z0-9_-]` become `_`.
pub fn storage_path(dir: impl AsRef<Path>, key: &str) -> PathBuf {
    let sanitized = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>();
    dir.as_ref().join(format!("{sanitized}.json"))
}

// ============================================================================
// In-memory backend
// ============================================================================

/// Keeps the serialized collection in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the store
/// and inspect what was written through the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    data: Rc<RefCell<Option<String>>>,
    saves: Rc<Cell<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already serialized collection.
    pub fn with_json(json: impl Into<String>) -> Self {
        let storage = Self::default();
        *storage.data.borrow_mut() = Some(json.into());
        storage
    }

    /// The last written JSON, if any.
    pub fn raw(&self) -> Option<String> {
        self.data.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl CharacterStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Character>, StorageError> {
        match self.data.borrow().as_deref() {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, characters: &[Character]) -> Result<(), StorageError> {
        let json = serde_json::to_string(characters)?;
        *self.data.borrow_mut() = Some(json);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
