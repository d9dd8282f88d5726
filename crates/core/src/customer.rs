//! Customers created from the waiter's customer list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CustomerId, CustomerName};

/// An external customer (no room number), as returned by the POS backend.
///
/// Identity is the backend-assigned id. The creation timestamp is recorded
/// client-side when the backend confirms the customer, and is only used for
/// relative display ("just now") in the customer list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Backend-assigned id.
    pub id: CustomerId,
    /// Validated display name.
    pub name: CustomerName,
    /// When the backend confirmed the customer.
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Create a customer confirmed now.
    #[must_use]
    pub fn new(id: CustomerId, name: CustomerName) -> Self {
        Self {
            id,
            name,
            created_at: Utc::now(),
        }
    }
}
