//! Comandera Waiter library.
//!
//! This crate provides the waiter front-end as a library, allowing it to be
//! tested end-to-end and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod menu;
pub mod middleware;
pub mod models;
pub mod pos;
pub mod roster;
pub mod routes;
pub mod state;

use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use state::AppState;

/// Build the waiter application router with its full middleware stack
/// (sessions, security headers, request ids, tracing).
///
/// Sentry layers are added by the binary, not here, so tests can drive the
/// app without an error-tracking DSN.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new("crates/waiter/static"))
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(middleware::create_session_layer(state.config()))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the POS backend.
async fn health() -> &'static str {
    "ok"
}
