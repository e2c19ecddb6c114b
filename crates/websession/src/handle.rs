//! The auth handle: the bundle UI code consumes.
//!
//! UI components shouldn't own the session store — many of them need
//! the same session at once, and a component's lifetime is usually
//! shorter than the session's. [`AuthHandle`] wraps the store in an
//! `Arc` so it can be cloned freely and handed to every component that
//! needs to log in, log out, read the user, or watch the flag.

use std::sync::Arc;

use tokio::sync::watch;
use websession_storage::SessionStorage;

use crate::{SessionError, SessionStore, UserRecord};

/// A cheaply clonable handle to a shared [`SessionStore`].
///
/// All clones refer to the same store: a `login` through one is
/// observable through every other, including their flag receivers.
/// Created via [`SessionStore::into_handle`].
pub struct AuthHandle<S> {
    inner: Arc<SessionStore<S>>,
}

// A manual Clone impl, because `#[derive(Clone)]` would demand
// `S: Clone` — the Arc makes that bound unnecessary.
impl<S> Clone for AuthHandle<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: SessionStorage> AuthHandle<S> {
    pub(crate) fn new(store: SessionStore<S>) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    /// See [`SessionStore::login`].
    pub fn login(&self, user: &UserRecord) -> Result<(), SessionError> {
        self.inner.login(user)
    }

    /// See [`SessionStore::logout`].
    pub fn logout(&self) -> Result<(), SessionError> {
        self.inner.logout()
    }

    /// See [`SessionStore::get_user`].
    pub fn get_user(&self) -> Result<Option<UserRecord>, SessionError> {
        self.inner.get_user()
    }

    /// See [`SessionStore::is_logged_in`].
    pub fn is_logged_in(&self) -> bool {
        self.inner.is_logged_in()
    }

    /// See [`SessionStore::subscribe`].
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.inner.subscribe()
    }
}
