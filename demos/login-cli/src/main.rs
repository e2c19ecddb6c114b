//! A minimal end-to-end demo of the session stack.
//!
//! Runs the whole lifecycle over a file-backed storage scope:
//! build a store, watch the flag from a background task, log a user
//! in, read the record back, log out. Run it twice to see the second
//! run start out logged in if you comment out the logout.
//!
//! ```text
//! RUST_LOG=debug cargo run -p login-cli
//! ```

use tracing_subscriber::EnvFilter;
use websession::{SessionStore, UserRecord};
use websession_storage::FileStorage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // A throwaway scope under the system temp dir. A real app would
    // point this at its platform data directory.
    let scope_dir = std::env::temp_dir().join("websession-demo");
    let storage = FileStorage::new(&scope_dir);
    tracing::info!(scope = %scope_dir.display(), "storage scope");

    let auth = SessionStore::new(storage)?.into_handle();
    println!("logged in at startup: {}", auth.is_logged_in());

    // A watcher task standing in for a UI component bound to the flag.
    let mut flag = auth.subscribe();
    let watcher = tokio::spawn(async move {
        while flag.changed().await.is_ok() {
            println!("flag changed: logged in = {}", *flag.borrow_and_update());
        }
    });

    auth.login(&UserRecord {
        username: "alice".into(),
        email: "a@x.com".into(),
        password: "p".into(),
        birthdate: "2000-01-01".into(),
        gender: "f".into(),
    })?;

    if let Some(user) = auth.get_user()? {
        println!("current user: {} <{}>", user.username, user.email);
    }

    auth.logout()?;
    println!("logged in after logout: {}", auth.is_logged_in());

    // Let the watcher drain its notifications, then wind down.
    tokio::task::yield_now().await;
    watcher.abort();
    Ok(())
}
