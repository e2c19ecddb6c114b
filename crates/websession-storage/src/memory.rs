//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{SessionStorage, StorageError};

/// An ephemeral, in-memory storage scope.
///
/// Cloning a `MemoryStorage` does NOT copy the data — clones share the
/// same underlying map, so two clones model two readers of one storage
/// scope: a write through one is immediately visible to the other.
/// This is the backend to use in tests and for sessions that should not
/// outlive the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates a new, empty storage scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the map, mapping a poisoned lock to [`StorageError::Unavailable`].
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError>
    {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".into()))
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.lock()?.contains_key(key))
    }
}
