//! Client-side session store for websession.
//!
//! This crate keeps one user record in a durable key-value storage
//! scope and tracks a reactive "is logged in" flag that mirrors the
//! record's presence. It is the session half of the stack:
//!
//! ```text
//! UI code (above)        ← holds an AuthHandle, observes the flag
//!     ↕
//! Session layer (this crate)  ← login / logout / get_user, flag
//!     ↕
//! Storage layer (below)  ← websession-storage: get/set/remove by key
//! ```
//!
//! There is no backend authentication here — no password verification,
//! no token validation, no network. `login` trusts whatever record the
//! caller hands it and persists it verbatim.

mod error;
mod handle;
mod record;
mod store;

pub use error::SessionError;
pub use handle::AuthHandle;
pub use record::{SessionConfig, UserRecord, DEFAULT_STORAGE_KEY};
pub use store::SessionStore;
