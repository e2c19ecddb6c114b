//! Error types for the session layer.

/// Errors that can occur when persisting, reading, or clearing the
/// session record.
///
/// There are exactly two failure domains: the storage scope itself
/// (unavailable, I/O failure) and the serialized record (unencodable
/// on the way in, malformed on the way out). No retries or recovery
/// happen here — every failure propagates to the caller.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The underlying storage scope failed.
    #[error("storage error: {0}")]
    Storage(#[from] websession_storage::StorageError),

    /// The user record could not be serialized to JSON.
    /// With plain string fields this cannot happen in practice, but
    /// the store reports it rather than panicking.
    #[error("failed to encode user record: {0}")]
    Encode(serde_json::Error),

    /// The stored value exists but is not a valid serialized record —
    /// something else wrote to the key, or the data was corrupted.
    /// The store leaves the bad value in place; it does not repair it.
    #[error("stored user record is malformed: {0}")]
    Malformed(serde_json::Error),
}
