// SPDX-License-Identifier: MPL-2.0
//! Persisted key-value storage, the desktop counterpart of browser local storage.
//!
//! Values are strings under string keys. [`FileStore`] keeps the whole map in
//! one CBOR file (`storage.cbor`) inside the data directory and rewrites it on
//! every `set`; [`MemoryStore`] keeps it in memory only.
//!
//! Opening never creates files: a missing file is an empty store. A file that
//! cannot be decoded also opens as an empty store, flagged with
//! [`FileStore::was_reset`], and the next `set` overwrites it. A file that
//! cannot be read at all is an error, and callers decide whether to degrade
//! to running without persistence.

use super::paths;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

/// Storage file name within the app data directory.
pub const STORAGE_FILE: &str = "storage.cbor";

/// String key-value storage.
pub trait KeyValueStore: std::fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store; nothing survives the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// CBOR-file backed store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    reset: bool,
}

impl FileStore {
    /// Opens the store in the default data directory.
    ///
    /// See [`paths::get_app_data_dir`] for the resolution order.
    pub fn open() -> Result<Self> {
        Self::open_in(None)
    }

    /// Opens the store in `base_dir`, or the default data directory when `None`.
    pub fn open_in(base_dir: Option<PathBuf>) -> Result<Self> {
        let dir = paths::get_app_data_dir_with_override(base_dir)
            .ok_or_else(|| Error::Storage("no data directory available".to_string()))?;
        Self::open_at(dir.join(STORAGE_FILE))
    }

    /// Opens the store backed by the file at `path`.
    pub fn open_at(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
                reset: false,
            });
        }

        let reader = BufReader::new(fs::File::open(&path)?);
        let (entries, reset) = match ciborium::from_reader(reader) {
            Ok(entries) => (entries, false),
            Err(ciborium::de::Error::Io(err)) if err.kind() != ErrorKind::UnexpectedEof => {
                return Err(err.into());
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "storage file is corrupt, starting empty"
                );
                (BTreeMap::new(), true)
            }
        };

        Ok(Self {
            path,
            entries,
            reset,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file existed but could not be decoded.
    #[must_use]
    pub fn was_reset(&self) -> bool {
        self.reset
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(fs::File::create(&self.path)?);
        ciborium::into_writer(&self.entries, writer)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    /// Updates the entry and rewrites the file.
    ///
    /// On a write failure the in-memory entry keeps the new value.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").expect("set");
        assert_eq!(store.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn missing_file_opens_empty_without_creating_it() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = FileStore::open_in(Some(temp_dir.path().to_path_buf())).expect("open");
        assert_eq!(store.get("theme"), None);
        assert!(!temp_dir.path().join(STORAGE_FILE).exists());
    }

    #[test]
    fn values_survive_reopen() {
        let temp_dir = tempdir().expect("create temp dir");
        let base = temp_dir.path().to_path_buf();

        let mut store = FileStore::open_in(Some(base.clone())).expect("open");
        store.set("theme", "light").expect("set");

        let reopened = FileStore::open_in(Some(base)).expect("reopen");
        assert_eq!(reopened.get("theme"), Some("light".to_string()));
    }

    #[test]
    fn set_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("nested").join("deeply");

        let mut store = FileStore::open_in(Some(nested.clone())).expect("open");
        store.set("theme", "dark").expect("set");
        assert!(nested.join(STORAGE_FILE).exists());
    }

    #[test]
    fn corrupted_file_opens_empty_and_is_repaired_by_set() {
        let temp_dir = tempdir().expect("create temp dir");
        let base = temp_dir.path().to_path_buf();
        fs::write(base.join(STORAGE_FILE), "not valid cbor data").expect("write");

        let mut store = FileStore::open_in(Some(base.clone())).expect("open");
        assert!(store.was_reset());
        assert_eq!(store.get("theme"), None);

        store.set("theme", "light").expect("set");

        let reopened = FileStore::open_in(Some(base)).expect("reopen");
        assert!(!reopened.was_reset());
        assert_eq!(reopened.get("theme"), Some("light".to_string()));
    }

    #[test]
    fn truncated_file_is_treated_as_corrupt() {
        let temp_dir = tempdir().expect("create temp dir");
        // Map header announcing one entry, then nothing.
        fs::write(temp_dir.path().join(STORAGE_FILE), [0xa1u8]).expect("write");

        let store = FileStore::open_in(Some(temp_dir.path().to_path_buf())).expect("open");
        assert!(store.was_reset());
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join(STORAGE_FILE);
        fs::create_dir(&path).expect("create directory in place of file");

        assert!(FileStore::open_at(path).is_err());
    }

    #[test]
    fn fresh_store_is_not_reset() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = FileStore::open_in(Some(temp_dir.path().to_path_buf())).expect("open");
        assert!(!store.was_reset());
    }

    #[test]
    fn isolated_directories_do_not_interfere() {
        let dir_a = tempdir().expect("create temp dir A");
        let dir_b = tempdir().expect("create temp dir B");

        let mut a = FileStore::open_in(Some(dir_a.path().to_path_buf())).expect("open a");
        let mut b = FileStore::open_in(Some(dir_b.path().to_path_buf())).expect("open b");
        a.set("theme", "dark").expect("set a");
        b.set("theme", "light").expect("set b");

        let a = FileStore::open_in(Some(dir_a.path().to_path_buf())).expect("reopen a");
        let b = FileStore::open_in(Some(dir_b.path().to_path_buf())).expect("reopen b");
        assert_eq!(a.get("theme"), Some("dark".to_string()));
        assert_eq!(b.get("theme"), Some("light".to_string()));
    }
}
