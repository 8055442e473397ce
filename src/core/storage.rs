//! Key-value persistence backends for the cart

use crate::core::error::Error;
use crate::Result;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::NamedTempFile;

/// A string key-value store that survives page loads or process restarts
pub trait Storage {
    /// Returns the value stored under `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`; deleting a missing key is not an error
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryInner {
    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

/// In-memory storage. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStorage {
    /// Creates an empty storage without a size limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty storage that rejects writes beyond `quota_bytes`
    pub fn with_quota(quota_bytes: usize) -> Self {
        let storage = Self::new();
        storage.inner.borrow_mut().quota_bytes = Some(quota_bytes);
        storage
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.inner.borrow().entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.borrow_mut();

        if let Some(quota) = inner.quota_bytes {
            let needed = inner.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(Error::PersistenceWrite(format!(
                    "Quota exceeded: {} bytes needed, {} allowed",
                    needed, quota
                )));
            }
        }

        inner.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.inner.borrow_mut().entries.remove(key);
        Ok(())
    }
}

/// Storage kept in a single JSON object file mapping keys to values
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Opens storage at `path`; the file is created on the first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(HashMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| {
            Error::PersistenceRead(format!(
                "Storage file {} is corrupt: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Entries to update before a write. A corrupt file is replaced rather than kept.
    fn entries_for_write(&self) -> Result<HashMap<String, String>> {
        match self.read_entries() {
            Ok(entries) => Ok(entries),
            Err(Error::PersistenceRead(reason)) => {
                log::warn!("{}, starting from an empty store", reason);
                Ok(HashMap::new())
            }
            Err(e) => Err(Error::PersistenceWrite(e.to_string())),
        }
    }

    /// Writes the whole map through a temporary file renamed over the target
    fn write_entries(&self, entries: &HashMap<String, String>) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;

        let contents = serde_json::to_string_pretty(entries)?;
        let mut file = NamedTempFile::new_in(parent).map_err(|e| self.write_error(e))?;
        file.write_all(contents.as_bytes())
            .and_then(|_| file.as_file().sync_all())
            .map_err(|e| self.write_error(e))?;
        file.persist(&self.path).map_err(|e| self.write_error(e.error))?;

        Ok(())
    }

    fn write_error(&self, e: impl std::fmt::Display) -> Error {
        Error::PersistenceWrite(format!("Failed to write {}: {}", self.path.display(), e))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let mut entries = self.entries_for_write()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
