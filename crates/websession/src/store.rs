//! The session store: one user record, one reactive flag.
//!
//! This is the central piece of the session layer. It is responsible for:
//! - Persisting a user record under a fixed storage key (`login`)
//! - Clearing it (`logout`)
//! - Reading it back on demand (`get_user`)
//! - Mirroring "is a record present" into a flag UI code can observe
//!
//! # The flag is a derived cache
//!
//! The flag is not independently authoritative — it caches "does the
//! storage key currently hold a value", probed once at construction and
//! updated on every `login`/`logout` made *through this store*. Writes
//! that reach the same storage scope through another store (or another
//! process sharing the scope) do not update this store's flag. That
//! matches the scope's last-writer-wins concurrency model: there is no
//! locking and no cross-store synchronization.

use tokio::sync::watch;
use websession_storage::SessionStorage;

use crate::{AuthHandle, SessionConfig, SessionError, UserRecord};

/// Stores one user record in a key-value storage scope and tracks a
/// reactive login flag.
///
/// ## State machine
///
/// Two states, keyed entirely off the presence of the storage key:
///
/// ```text
///   LoggedOut ──(login)──→ LoggedIn ──(logout)──→ LoggedOut
///                              │
///                              └──(login again: overwrite, no transition)
/// ```
///
/// The initial state is probed from storage when the store is built.
/// There is no terminal state and no expiry — a record stays until
/// something removes it.
pub struct SessionStore<S> {
    /// The injected storage scope. The store holds the only handle it
    /// needs; callers keep their own clone if they want direct access.
    storage: S,

    /// Configuration (storage key).
    config: SessionConfig,

    /// The reactive login flag. A `watch` channel keeps exactly one
    /// current value: `borrow` reads it synchronously, and receivers
    /// from [`subscribe`](SessionStore::subscribe) can await changes.
    flag: watch::Sender<bool>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Creates a store over `storage` with the default configuration
    /// (storage key `"user"`).
    ///
    /// Probes storage to initialize the flag: a store built over a
    /// scope that already holds a record starts out logged in.
    ///
    /// # Errors
    /// Returns [`SessionError::Storage`] if the probe fails.
    pub fn new(storage: S) -> Result<Self, SessionError> {
        Self::with_config(storage, SessionConfig::default())
    }

    /// Creates a store with a custom configuration.
    pub fn with_config(
        storage: S,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        let present = storage.contains(&config.storage_key)?;
        // The initial receiver is dropped; `subscribe` hands out fresh
        // ones, and `send_replace` works with zero receivers.
        let (flag, _) = watch::channel(present);

        tracing::debug!(
            key = %config.storage_key,
            logged_in = present,
            "session store initialized"
        );

        Ok(Self {
            storage,
            config,
            flag,
        })
    }

    /// Persists `user` under the configured key and flips the flag to
    /// logged-in.
    ///
    /// No validation is performed on the record's contents — empty
    /// strings are persisted as-is. A prior record under the key is
    /// silently overwritten, so calling `login` while already logged
    /// in replaces the session's user.
    ///
    /// # Errors
    /// - [`SessionError::Encode`] — the record could not be serialized
    /// - [`SessionError::Storage`] — the write failed; the flag is
    ///   left untouched in that case
    pub fn login(&self, user: &UserRecord) -> Result<(), SessionError> {
        let encoded =
            serde_json::to_string(user).map_err(SessionError::Encode)?;
        self.storage.set(&self.config.storage_key, &encoded)?;
        self.flag.send_replace(true);

        // Username only — the record holds a plaintext password that
        // must never reach the logs.
        tracing::info!(username = %user.username, "user logged in");
        Ok(())
    }

    /// Removes the record and flips the flag to logged-out.
    ///
    /// Idempotent: logging out while already logged out is a no-op
    /// that leaves the flag false and the key absent.
    ///
    /// # Errors
    /// Returns [`SessionError::Storage`] if the removal fails.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.storage.remove(&self.config.storage_key)?;
        self.flag.send_replace(false);

        tracing::info!("user logged out");
        Ok(())
    }

    /// Reads the current user record, or `Ok(None)` if nobody is
    /// logged in.
    ///
    /// This always goes to storage — the store caches the flag, never
    /// the record itself.
    ///
    /// # Errors
    /// - [`SessionError::Storage`] — the read failed
    /// - [`SessionError::Malformed`] — the key holds a value that is
    ///   not a valid serialized record
    pub fn get_user(&self) -> Result<Option<UserRecord>, SessionError> {
        match self.storage.get(&self.config.storage_key)? {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(SessionError::Malformed),
            None => Ok(None),
        }
    }

    /// Returns the current value of the login flag.
    pub fn is_logged_in(&self) -> bool {
        *self.flag.borrow()
    }

    /// Returns a receiver for the login flag.
    ///
    /// The receiver starts at the current value; every `login`/`logout`
    /// through this store publishes the new value to all receivers.
    /// UI code typically holds one of these and re-renders on change.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.flag.subscribe()
    }

    /// Wraps this store into a clonable [`AuthHandle`] — the bundle
    /// handed to UI components.
    pub fn into_handle(self) -> AuthHandle<S> {
        AuthHandle::new(self)
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Unit tests for `SessionStore`, over the in-memory backend.
    //!
    //! Naming convention: `test_{function}_{scenario}_{expected}`.
    //! Storage-sharing behavior (two stores over one scope) lives in
    //! the integration suite; these tests cover one store's contract.

    use websession_storage::MemoryStorage;

    use super::*;

    // -- Helpers ----------------------------------------------------------

    /// A store over a fresh, empty scope.
    fn empty_store() -> SessionStore<MemoryStorage> {
        SessionStore::new(MemoryStorage::new()).expect("probe cannot fail")
    }

    /// The record used throughout the suite.
    fn alice() -> UserRecord {
        UserRecord {
            username: "alice".into(),
            email: "a@x.com".into(),
            password: "p".into(),
            birthdate: "2000-01-01".into(),
            gender: "f".into(),
        }
    }

    fn bob() -> UserRecord {
        UserRecord {
            username: "bob".into(),
            email: "b@x.com".into(),
            password: "q".into(),
            birthdate: "1999-12-31".into(),
            gender: "m".into(),
        }
    }

    // =====================================================================
    // new() / with_config()
    // =====================================================================

    #[test]
    fn test_new_empty_scope_starts_logged_out() {
        let store = empty_store();

        assert!(!store.is_logged_in());
        assert!(store.get_user().unwrap().is_none());
    }

    #[test]
    fn test_new_scope_with_record_starts_logged_in() {
        // A store built over a scope that already holds a record must
        // pick the session up — this is the "page reload" case.
        let storage = MemoryStorage::new();
        SessionStore::new(storage.clone()).unwrap().login(&alice()).unwrap();

        let reopened = SessionStore::new(storage).unwrap();

        assert!(reopened.is_logged_in());
        assert_eq!(reopened.get_user().unwrap(), Some(alice()));
    }

    #[test]
    fn test_with_config_uses_custom_key() {
        let storage = MemoryStorage::new();
        let config = SessionConfig {
            storage_key: "admin".into(),
        };
        let store =
            SessionStore::with_config(storage.clone(), config).unwrap();

        store.login(&alice()).unwrap();

        // The record went under "admin", not the default key.
        assert!(storage.get("admin").unwrap().is_some());
        assert!(storage.get("user").unwrap().is_none());
    }

    #[test]
    fn test_stores_with_distinct_keys_are_independent() {
        // Two stores sharing one scope but keyed differently hold two
        // independent sessions.
        let storage = MemoryStorage::new();
        let user_store = SessionStore::new(storage.clone()).unwrap();
        let admin_store = SessionStore::with_config(
            storage,
            SessionConfig {
                storage_key: "admin".into(),
            },
        )
        .unwrap();

        user_store.login(&alice()).unwrap();
        admin_store.login(&bob()).unwrap();
        user_store.logout().unwrap();

        assert!(user_store.get_user().unwrap().is_none());
        assert_eq!(admin_store.get_user().unwrap(), Some(bob()));
    }

    // =====================================================================
    // login()
    // =====================================================================

    #[test]
    fn test_login_then_get_user_returns_same_record() {
        let store = empty_store();

        store.login(&alice()).expect("login should succeed");

        assert_eq!(store.get_user().unwrap(), Some(alice()));
        assert!(store.is_logged_in());
    }

    #[test]
    fn test_login_overwrites_previous_record() {
        let store = empty_store();
        store.login(&alice()).unwrap();

        store.login(&bob()).unwrap();

        assert_eq!(store.get_user().unwrap(), Some(bob()));
        assert!(store.is_logged_in());
    }

    #[test]
    fn test_login_performs_no_validation() {
        // Empty strings are legal everywhere — the store persists
        // exactly what it is given.
        let store = empty_store();
        let blank = UserRecord {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            birthdate: String::new(),
            gender: String::new(),
        };

        store.login(&blank).unwrap();

        assert_eq!(store.get_user().unwrap(), Some(blank));
    }

    // =====================================================================
    // logout()
    // =====================================================================

    #[test]
    fn test_logout_clears_record_and_flag() {
        let store = empty_store();
        store.login(&alice()).unwrap();

        store.logout().expect("logout should succeed");

        assert!(!store.is_logged_in());
        assert!(store.get_user().unwrap().is_none());
    }

    #[test]
    fn test_logout_twice_is_idempotent() {
        let store = empty_store();
        store.login(&alice()).unwrap();

        store.logout().unwrap();
        store.logout().expect("second logout should also succeed");

        assert!(!store.is_logged_in());
        assert!(store.get_user().unwrap().is_none());
    }

    #[test]
    fn test_logout_without_login_is_a_noop() {
        let store = empty_store();

        store.logout().unwrap();

        assert!(!store.is_logged_in());
    }

    // =====================================================================
    // get_user()
    // =====================================================================

    #[test]
    fn test_get_user_empty_scope_returns_none() {
        let store = empty_store();

        assert!(store.get_user().unwrap().is_none());
    }

    #[test]
    fn test_get_user_malformed_value_returns_error() {
        // Something else scribbled over the key — the store surfaces
        // the corruption instead of guessing.
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone()).unwrap();
        storage.set("user", "not json at all").unwrap();

        let result = store.get_user();

        assert!(
            matches!(result, Err(SessionError::Malformed(_))),
            "corrupted value should surface as Malformed"
        );
    }

    #[test]
    fn test_get_user_missing_field_returns_error() {
        // Valid JSON, wrong shape: a record with a field missing is
        // just as malformed as garbage bytes.
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone()).unwrap();
        storage
            .set("user", r#"{"username":"alice","email":"a@x.com"}"#)
            .unwrap();

        assert!(matches!(
            store.get_user(),
            Err(SessionError::Malformed(_))
        ));
    }

    // =====================================================================
    // subscribe() — flag reactivity
    // =====================================================================

    #[tokio::test]
    async fn test_subscribe_observes_login_and_logout() {
        let store = empty_store();
        let mut flag = store.subscribe();
        assert!(!*flag.borrow_and_update());

        store.login(&alice()).unwrap();
        flag.changed().await.expect("sender is alive");
        assert!(*flag.borrow_and_update());

        store.logout().unwrap();
        flag.changed().await.expect("sender is alive");
        assert!(!*flag.borrow_and_update());
    }

    #[test]
    fn test_subscribe_starts_at_current_value() {
        let store = empty_store();
        store.login(&alice()).unwrap();

        // A receiver taken after login sees true immediately, with no
        // pending change notification.
        let flag = store.subscribe();
        assert!(*flag.borrow());
    }
}
