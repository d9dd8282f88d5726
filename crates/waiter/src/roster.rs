//! In-process roster of customers created during this run.
//!
//! The POS backend persists customers but the observed contract exposes no
//! list endpoint, and the original customer list was page-lifetime state.
//! The roster models exactly that: customers confirmed by the backend since
//! the process started, most recent first.

use std::sync::{Arc, RwLock};

use comandera_core::Customer;

/// Shared, insertion-front list of customers.
///
/// Cheap to clone; all clones see the same list. Mutation happens only from
/// request handlers, which hold the lock for the duration of a push.
#[derive(Debug, Clone, Default)]
pub struct CustomerRoster {
    inner: Arc<RwLock<Vec<Customer>>>,
}

impl CustomerRoster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a customer to the front of the list.
    pub fn prepend(&self, customer: Customer) {
        self.write().insert(0, customer);
    }

    /// Snapshot of all customers, most recent first.
    #[must_use]
    pub fn all(&self) -> Vec<Customer> {
        self.read().clone()
    }

    /// Number of customers in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Customer>> {
        // A poisoned lock only means a handler panicked mid-push; the list
        // itself is still a valid Vec.
        self.inner.read().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Customer>> {
        self.inner.write().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use comandera_core::{CustomerId, CustomerName};

    fn customer(id: i64, name: &str) -> Customer {
        Customer::new(CustomerId::new(id), CustomerName::parse(name).unwrap())
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let roster = CustomerRoster::new();
        roster.prepend(customer(1, "Ana"));
        roster.prepend(customer(2, "Juan"));

        let all = roster.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name.as_str(), "Juan");
        assert_eq!(all[1].name.as_str(), "Ana");
    }

    #[test]
    fn test_clones_share_state() {
        let roster = CustomerRoster::new();
        let clone = roster.clone();
        roster.prepend(customer(1, "Ana"));

        assert_eq!(clone.len(), 1);
        assert!(!clone.is_empty());
    }
}
