//! Session data types: the persisted user record and store configuration.

use serde::{Deserialize, Serialize};

/// The storage key a [`SessionConfig::default`] store uses.
pub const DEFAULT_STORAGE_KEY: &str = "user";

// ---------------------------------------------------------------------------
// UserRecord
// ---------------------------------------------------------------------------

/// The user record a session persists.
///
/// Every field is a required string and none of them are validated —
/// the store persists exactly what the caller supplies. The record is
/// serialized to JSON before being written, so the stored value is
/// UTF-8 text of the shape
/// `{"username":..,"email":..,"password":..,"birthdate":..,"gender":..}`.
///
/// # Security caveat
///
/// The `password` field is persisted in plaintext, readable by anything
/// with access to the storage scope. That is the contract of this
/// store, not an oversight to patch here — do not put credentials you
/// care about into a `UserRecord`. The store itself never logs the
/// password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    /// Stored in plaintext. See the type-level security caveat.
    pub password: String,
    /// An unvalidated date representation — any string the caller
    /// supplies (e.g. `"2000-01-01"`).
    pub birthdate: String,
    pub gender: String,
}

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`SessionStore`](crate::SessionStore).
///
/// `Default` gives the standard behavior: the record lives under the
/// fixed key `"user"`. Embedders that need several independent session
/// stores in one storage scope can give each its own key.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The key the serialized record is stored under.
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }
}
