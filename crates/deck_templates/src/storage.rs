//! Key-value storage backends for persisted catalog state
//!
//! The catalog keeps two string values: the JSON list of custom templates
//! and the selected template id. Backends are injected so tests can run
//! against memory while the application persists to a JSON file.

use crate::error::{StorageError, StorageResult};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// String-valued key-value storage
pub trait KeyValueStore {
    /// Read a value
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete a value (no error if absent)
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

/// Outcome of a best-effort storage access
///
/// `Fallback` carries the value that was used instead together with the
/// error that forced it, so callers can log or surface it.
#[derive(Debug)]
pub enum Recovered<T> {
    /// Storage was read or written successfully
    Fresh(T),
    /// Storage failed and a fallback value is in effect
    Fallback { value: T, error: StorageError },
}

impl<T> Recovered<T> {
    /// Build from a storage result, using `fallback` on error
    pub fn from_result(result: StorageResult<T>, fallback: impl FnOnce() -> T) -> Self {
        match result {
            Ok(value) => Self::Fresh(value),
            Err(error) => Self::Fallback {
                value: fallback(),
                error,
            },
        }
    }

    /// True when the fallback was used
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// The storage error, if one occurred
    pub fn error(&self) -> Option<&StorageError> {
        match self {
            Self::Fresh(_) => None,
            Self::Fallback { error, .. } => Some(error),
        }
    }

    /// Discard the distinction and take the value
    pub fn into_inner(self) -> T {
        match self {
            Self::Fresh(value) | Self::Fallback { value, .. } => value,
        }
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object file
///
/// The file is re-read on every access so separate handles in the same
/// process observe each other's writes.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// File name used inside a data directory
    pub const FILE_NAME: &'static str = "storage.json";

    /// Create a store at an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store inside a data directory
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(Self::FILE_NAME))
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> StorageResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Read for a rewrite; a corrupt file is replaced rather than blocking writes
    ///
    /// The flag reports whether the file was corrupt.
    fn read_for_update(&self) -> StorageResult<(BTreeMap<String, String>, bool)> {
        match self.read_all() {
            Ok(values) => Ok((values, false)),
            Err(StorageError::Serialization(e)) => {
                tracing::warn!(
                    "Storage file {:?} is corrupt, starting from empty: {}",
                    self.path,
                    e
                );
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let (mut values, _) = self.read_for_update()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let (mut values, corrupt) = self.read_for_update()?;
        if values.remove(key).is_some() || corrupt {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

/// Store that rejects every operation
///
/// Stands in for unavailable persistent media (private browsing, read-only
/// volumes) and exercises the catalog's degraded paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable("storage is not available".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("storage is not available".into()))
    }

    fn remove(&mut self, _key: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("storage is not available".into()))
    }
}
