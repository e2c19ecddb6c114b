//! Filesystem storage backend.
//!
//! [`FileStorage`] persists each key as one file under a base directory:
//!
//! ```text
//! <base_dir>/
//! ├── user          # value bytes, UTF-8
//! └── <other keys>
//! ```
//!
//! The base directory is created on the first write, so constructing a
//! `FileStorage` over a directory that doesn't exist yet is fine.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{SessionStorage, StorageError};

/// A durable storage scope backed by one file per key.
///
/// Keys map directly to file names, so a key must be a plain name:
/// non-empty, no path separators, not `.` or `..`. Anything else is
/// rejected with [`StorageError::InvalidKey`] before touching the
/// filesystem.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    /// Creates a storage scope rooted at `base`.
    ///
    /// The directory is not created until the first [`set`](SessionStorage::set).
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Returns the directory this scope is rooted at.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Resolves `key` to its file path, rejecting keys that would
    /// escape the base directory.
    fn entry_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let plain = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\']);
        if !plain {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.base.join(key))
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.entry_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(&path, value)?;
        tracing::debug!(key, path = %path.display(), "value persisted");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            // Removing an absent key is a no-op, same as the memory backend.
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.entry_path(key)?.is_file())
    }
}
