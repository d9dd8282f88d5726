//! Session-related keys.
//!
//! The only state the waiter keeps in the session is one cart per order,
//! stored under a per-order key so a waiter juggling several tables never
//! mixes carts.

use comandera_core::OrderId;

/// Session keys.
pub mod keys {
    /// Prefix for per-order cart entries.
    pub const CART_PREFIX: &str = "cart";
}

/// Session key for the cart of one order.
#[must_use]
pub fn cart_key(order_id: OrderId) -> String {
    format!("{}:{order_id}", keys::CART_PREFIX)
}
