//! Error types for the storage layer.

/// Errors that can occur when reading or writing a storage scope.
///
/// There is deliberately no "key not found" variant — an absent key is
/// a normal outcome, reported as `Ok(None)` by
/// [`SessionStorage::get`](crate::SessionStorage::get).
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing storage scope cannot be used at all — e.g. a
    /// poisoned lock, a disabled storage area, or an exhausted quota.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The key is not representable in this backend (for the file
    /// backend: empty, or containing path separators).
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    /// An I/O failure from a durable backend.
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
