//! Key/value persistence for the document and editor preferences.
//!
//! Values are opaque strings stored under fixed keys, the same shape as
//! browser-local storage. [`FileStore`] keeps everything in one JSON object
//! on disk; [`MemoryStore`] is used for tests and throwaway sessions.
use std::{
  collections::BTreeMap,
  fs,
  path::{Path, PathBuf},
};

use crate::error::{DocumentError, DocumentResult};

/// Fixed keys under which document data is stored.
pub mod keys {
  pub const CONTENT: &str = "document-content";
  pub const TITLE: &str = "document-title";
  pub const LAST_SAVED: &str = "document-last-saved";
  pub const EDITOR_MODE: &str = "editor-mode";
  pub const THEME: &str = "theme";
}

/// A string-to-string store.
pub trait KeyValueStore {
  /// Get the value stored under `key`, if any.
  ///
  /// # Errors
  ///
  /// Returns an error if the backing storage cannot be read.
  fn get(&self, key: &str) -> DocumentResult<Option<String>>;

  /// Store `value` under `key`, replacing any previous value.
  ///
  /// # Errors
  ///
  /// Returns an error if the backing storage cannot be written.
  fn set(&mut self, key: &str, value: &str) -> DocumentResult<()>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  entries: BTreeMap<String, String>,
}

impl MemoryStore {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }
}

impl KeyValueStore for MemoryStore {
  fn get(&self, key: &str) -> DocumentResult<Option<String>> {
    Ok(self.entries.get(key).cloned())
  }

  fn set(&mut self, key: &str, value: &str) -> DocumentResult<()> {
    self.entries.insert(key.to_string(), value.to_string());
    Ok(())
  }
}

/// Store backed by a single JSON object file.
///
/// The file is read once on [`FileStore::open`] and rewritten on every
/// change. A missing file is an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
  path:    PathBuf,
  entries: BTreeMap<String, String>,
}

impl FileStore {
  /// Open the store at `path`, reading existing entries if the file exists.
  ///
  /// # Errors
  ///
  /// Returns an error if the file exists but cannot be read or does not hold
  /// a JSON object of strings.
  pub fn open<P: AsRef<Path>>(path: P) -> DocumentResult<Self> {
    let path = path.as_ref().to_path_buf();

    let entries = if path.exists() {
      let content = fs::read_to_string(&path)?;
      if content.trim().is_empty() {
        BTreeMap::new()
      } else {
        serde_json::from_str(&content).map_err(|e| {
          DocumentError::Store(format!(
            "Failed to parse store file {}: {e}",
            path.display()
          ))
        })?
      }
    } else {
      log::debug!("Store file {} does not exist yet", path.display());
      BTreeMap::new()
    };

    Ok(Self { path, entries })
  }

  /// Path of the backing file.
  #[must_use]
  pub fn path(&self) -> &Path {
    &self.path
  }

  fn flush(&self) -> DocumentResult<()> {
    if let Some(parent) = self.path.parent()
      && !parent.as_os_str().is_empty()
      && !parent.exists()
    {
      fs::create_dir_all(parent)?;
      log::info!("Created store directory: {}", parent.display());
    }

    let serialized = serde_json::to_string_pretty(&self.entries)?;
    fs::write(&self.path, serialized)?;
    log::trace!("Wrote {} entries to {}", self.entries.len(), self.path.display());
    Ok(())
  }
}

impl KeyValueStore for FileStore {
  fn get(&self, key: &str) -> DocumentResult<Option<String>> {
    Ok(self.entries.get(key).cloned())
  }

  fn set(&mut self, key: &str, value: &str) -> DocumentResult<()> {
    self.entries.insert(key.to_string(), value.to_string());
    self.flush()
  }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Fine in tests")]
mod tests {
  use super::*;

  #[test]
  fn test_memory_store_roundtrip() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get(keys::THEME).unwrap(), None);

    store.set(keys::THEME, "dark").unwrap();
    store.set(keys::THEME, "light").unwrap();
    assert_eq!(store.get(keys::THEME).unwrap().as_deref(), Some("light"));
  }

  #[test]
  fn test_file_store_creates_parent_directories() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nested").join("store.json");

    let mut store = FileStore::open(&path).unwrap();
    store.set(keys::TITLE, "Plan").unwrap();

    assert!(path.is_file());
    assert_eq!(store.path(), path);
    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get(keys::TITLE).unwrap().as_deref(), Some("Plan"));
  }

  #[test]
  fn test_file_store_rejects_garbage() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let err = FileStore::open(&path).unwrap_err();
    assert!(matches!(err, DocumentError::Store(_)));
  }
}
