//! Comandera Core - Shared domain types.
//!
//! This crate provides the domain model used across all Comandera components:
//! - `waiter` - Waiter-facing ordering front-end
//! - `cli` - Command-line tools for menu management
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no rendering. The cart and menu logic here is directly unit
//! testable without a running server.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe ids, money, and names
//! - [`menu`] - The read-only menu lookup table
//! - [`cart`] - The order cart aggregate and its mutation functions
//! - [`customer`] - External customers returned by the POS backend

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod customer;
pub mod menu;
pub mod types;

pub use cart::{Cart, CartLine, OrderSummary, SummaryLine};
pub use customer::Customer;
pub use menu::{Menu, MenuCategory, MenuItem};
pub use types::*;
