//! Storage abstraction layer for websession.
//!
//! The session layer never talks to a concrete storage scope directly —
//! it goes through the [`SessionStorage`] trait, a minimal key-value
//! capability (get/set/remove by string key). This keeps the session
//! logic testable without a real browser-style storage area, and lets
//! embedders swap in whatever persistence their platform provides.
//!
//! Two backends ship with this crate:
//!
//! - [`MemoryStorage`] — ephemeral, for tests and throwaway sessions
//! - [`FileStorage`] — one file per key under a base directory, durable
//!   across restarts

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// A key-value storage scope with string keys and UTF-8 string values.
///
/// This models the contract of browser local storage: a flat namespace
/// of string-keyed string values, shared by every reader of the same
/// scope, with last-writer-wins semantics on concurrent writes. All
/// methods are synchronous — the storage areas this abstracts over do
/// not suspend.
///
/// # Trait bounds
///
/// - `Send + Sync` → a storage handle can be shared across threads
///   (the session store wrapping it may be).
/// - `'static` → implementations own their data and don't borrow
///   temporaries.
pub trait SessionStorage: Send + Sync + 'static {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, overwriting any prior value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key` from the scope. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Returns `true` if `key` currently holds a value.
    ///
    /// The default implementation reads the value and discards it.
    /// Backends with a cheaper existence check should override this.
    fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }
}
