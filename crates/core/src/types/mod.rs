//! Core types for Comandera.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod name;

pub use id::*;
pub use money::Money;
pub use name::{CustomerName, CustomerNameError};
