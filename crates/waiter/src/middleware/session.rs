//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. Cart state is
//! deliberately ephemeral (the POS backend is the system of record), so the
//! in-memory store is the right durability level: a restart clears carts,
//! nothing else.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::WaiterConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "comandera_session";

/// Session expiry time in seconds (12 hours - longer than any shift).
const SESSION_EXPIRY_SECONDS: i64 = 12 * 60 * 60;

/// Create the session layer with the in-memory store.
#[must_use]
pub fn create_session_layer(config: &WaiterConfig) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    // Determine if we're in production (HTTPS)
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
