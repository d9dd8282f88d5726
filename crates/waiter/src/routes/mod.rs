//! HTTP route handlers for the waiter front-end.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to the customer list
//! GET  /health                 - Health check
//!
//! # Customers
//! GET  /customers              - Customer card list
//! POST /customers              - Create external customer (returns card fragment)
//!
//! # Order builder (HTMX fragments)
//! GET  /orders/{id}            - Order page (tabs, first category, total)
//! GET  /orders/{id}/items      - Item list for ?category= (fragment)
//! POST /orders/{id}/items/{item}/increment - Add one unit (fragment + cart-updated)
//! POST /orders/{id}/items/{item}/decrement - Remove one unit (fragment + cart-updated)
//! GET  /orders/{id}/total      - Formatted total (fragment)
//! GET  /orders/{id}/summary    - Review summary for the confirm dialog (fragment)
//! POST /orders/{id}/send       - Submit to the POS backend (HX-Redirect on success)
//! ```

pub mod customers;
pub mod orders;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Generic error fragment, swapped into a feedback slot client-side.
#[derive(Template, WebTemplate)]
#[template(path = "partials/error.html")]
pub struct ErrorFragment {
    pub message: String,
}

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new().route("/", get(customers::index).post(customers::create))
}

/// Create the order-builder routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/{order_id}", get(orders::show))
        .route("/{order_id}/items", get(orders::category_items))
        .route(
            "/{order_id}/items/{item_id}/increment",
            post(orders::increment),
        )
        .route(
            "/{order_id}/items/{item_id}/decrement",
            post(orders::decrement),
        )
        .route("/{order_id}/total", get(orders::total))
        .route("/{order_id}/summary", get(orders::summary))
        .route("/{order_id}/send", post(orders::send))
}

/// Create all routes for the waiter front-end.
pub fn routes() -> Router<AppState> {
    Router::new()
        // The customer list is the landing page
        .route("/", get(customers::root))
        // Customer routes
        .nest("/customers", customer_routes())
        // Order-builder routes
        .nest("/orders", order_routes())
}
