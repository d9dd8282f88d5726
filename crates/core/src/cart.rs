//! The order cart: lines keyed by item id, with pure mutation functions.
//!
//! The cart is owned state, mutated only through [`Cart::increment`] and
//! [`Cart::decrement`], and serializable so the waiter can park it in the
//! session between requests. Rendering never reaches into it directly; it
//! reads quantities and totals through the accessor methods.

use serde::{Deserialize, Serialize};

use crate::menu::MenuItem;
use crate::types::{MenuItemId, Money};

/// One cart entry: a menu item snapshot plus a quantity.
///
/// Invariant: `quantity >= 1` while the line is in a cart. A line whose
/// quantity reaches 0 is removed from the cart entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Id of the menu item this line refers to.
    pub item_id: MenuItemId,
    /// Item name at the time it was added.
    pub name: String,
    /// Unit price at the time it was added.
    pub price: Money,
    /// Number of units ordered.
    pub quantity: u32,
}

impl CartLine {
    /// Price × quantity for this line.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// A line of the order summary shown in the confirmation dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    /// Item name.
    pub name: String,
    /// Units ordered.
    pub quantity: u32,
    /// Price × quantity.
    pub subtotal: Money,
}

/// The review summary of a cart: one line per entry plus the grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    /// Summary lines in cart insertion order. Empty for an empty cart.
    pub lines: Vec<SummaryLine>,
    /// Sum of all subtotals.
    pub total: Money,
}

/// The running cart for one order.
///
/// Item ids are unique; lines keep insertion order for display. The total is
/// recomputed from the lines on every call - with a handful of lines there is
/// nothing worth caching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `item`. A line is created on first increment.
    ///
    /// Returns the item's new quantity.
    pub fn increment(&mut self, item: &MenuItem) -> u32 {
        if let Some(line) = self.line_mut(item.id) {
            line.quantity += 1;
            return line.quantity;
        }

        self.lines.push(CartLine {
            item_id: item.id,
            name: item.name.clone(),
            price: item.price,
            quantity: 1,
        });
        1
    }

    /// Remove one unit of the item with id `id`.
    ///
    /// Absent items are a no-op. A line whose quantity reaches 0 is removed.
    /// Returns the item's new quantity (0 when removed or absent).
    pub fn decrement(&mut self, id: MenuItemId) -> u32 {
        let Some(line) = self.line_mut(id) else {
            return 0;
        };

        line.quantity -= 1;
        let remaining = line.quantity;
        if remaining == 0 {
            self.lines.retain(|l| l.item_id != id);
        }
        remaining
    }

    /// Current quantity for an item, 0 when not in the cart.
    #[must_use]
    pub fn quantity(&self, id: MenuItemId) -> u32 {
        self.line(id).map_or(0, |l| l.quantity)
    }

    /// Whether the item has a line in the cart.
    #[must_use]
    pub fn contains(&self, id: MenuItemId) -> bool {
        self.line(id).is_some()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of price × quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Build the review summary for the confirmation dialog.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            lines: self
                .lines
                .iter()
                .map(|l| SummaryLine {
                    name: l.name.clone(),
                    quantity: l.quantity,
                    subtotal: l.subtotal(),
                })
                .collect(),
            total: self.total(),
        }
    }

    fn line(&self, id: MenuItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_id == id)
    }

    fn line_mut(&mut self, id: MenuItemId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.item_id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::menu::MenuItem;

    fn item(id: i64, name: &str, pesos: i64) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(id),
            name: name.to_string(),
            ingredients: String::new(),
            price: Money::from_pesos(pesos),
            image_url: None,
        }
    }

    #[test]
    fn test_increment_creates_line_then_adds() {
        let mut cart = Cart::new();
        let empanada = item(1, "Empanada", 2500);

        assert_eq!(cart.increment(&empanada), 1);
        assert_eq!(cart.increment(&empanada), 2);
        assert_eq!(cart.quantity(empanada.id), 2);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_decrement_removes_line_at_zero() {
        let mut cart = Cart::new();
        let empanada = item(1, "Empanada", 2500);
        cart.increment(&empanada);

        assert_eq!(cart.decrement(empanada.id), 0);
        assert!(!cart.contains(empanada.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_absent_is_noop() {
        let mut cart = Cart::new();
        let before = cart.clone();

        assert_eq!(cart.decrement(MenuItemId::new(42)), 0);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_quantity_never_negative_and_membership_matches_quantity() {
        let mut cart = Cart::new();
        let empanada = item(1, "Empanada", 2500);

        // Arbitrary mixed sequence; the invariant must hold after each step.
        let steps: &[bool] = &[true, false, false, true, true, false, false, false, true];
        for &up in steps {
            if up {
                cart.increment(&empanada);
            } else {
                cart.decrement(empanada.id);
            }
            let quantity = cart.quantity(empanada.id);
            assert_eq!(cart.contains(empanada.id), quantity > 0);
        }
    }

    #[test]
    fn test_total_matches_sum_after_each_mutation() {
        let mut cart = Cart::new();
        let completo = item(1, "Completo", 1000);
        let pisco = item(2, "Pisco sour", 2500);

        cart.increment(&completo);
        cart.increment(&completo);
        assert_eq!(cart.total(), Money::from_pesos(2000));

        cart.increment(&pisco);
        assert_eq!(cart.total(), Money::from_pesos(4500));
        assert_eq!(cart.total().display(), "$4.500");

        cart.decrement(completo.id);
        assert_eq!(cart.total(), Money::from_pesos(3500));
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        assert_eq!(Cart::new().total(), Money::zero());
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        let first = item(2, "Cazuela", 8900);
        let second = item(1, "Empanada", 2500);
        cart.increment(&first);
        cart.increment(&second);

        let names: Vec<&str> = cart.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Cazuela", "Empanada"]);
    }

    #[test]
    fn test_summary_lines_and_total() {
        let mut cart = Cart::new();
        let completo = item(1, "Completo", 1000);
        let pisco = item(2, "Pisco sour", 2500);
        cart.increment(&completo);
        cart.increment(&completo);
        cart.increment(&pisco);

        let summary = cart.summary();
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].name, "Completo");
        assert_eq!(summary.lines[0].quantity, 2);
        assert_eq!(summary.lines[0].subtotal, Money::from_pesos(2000));
        assert_eq!(summary.total, Money::from_pesos(4500));
    }

    #[test]
    fn test_empty_summary() {
        let summary = Cart::new().summary();
        assert!(summary.lines.is_empty());
        assert_eq!(summary.total, Money::zero());
    }

    #[test]
    fn test_serde_roundtrip_for_session_storage() {
        let mut cart = Cart::new();
        cart.increment(&item(1, "Empanada", 2500));
        cart.increment(&item(1, "Empanada", 2500));

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}
