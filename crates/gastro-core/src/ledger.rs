//! # Order Ledger
//!
//! The arithmetic that keeps an order's total in sync with its lines.
//!
//! ## Ledger Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Ledger Operations                              │
//! │                                                                         │
//! │  Operator Action          Ledger Call             Line List Change      │
//! │  ───────────────          ───────────             ────────────────      │
//! │                                                                         │
//! │  Tap menu item ──────────► add_line_item() ─────► merge or push        │
//! │                                                                         │
//! │  +/- stepper ────────────► change_quantity() ───► qty += delta,        │
//! │                                                    remove at qty ≤ 0    │
//! │                                                                         │
//! │  Tap remove ─────────────► remove_line_item() ──► delete line          │
//! │                                                                         │
//! │  (after each)              compute_total() ─────► total = Σ lines      │
//! │                                                                         │
//! │  EVERY structural change ends in a full recompute of the total.         │
//! │  The total is never patched in place, so it can never drift from        │
//! │  the line items.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! All operations are total: an out-of-range index or a non-active order is
//! a silent no-op, never a panic or error. The presentation layer may race
//! against stale snapshots and must never crash the engine.

use crate::money::Money;
use crate::types::{MenuItem, Order, OrderLineItem};
use crate::{MAX_LINE_QUANTITY, MAX_ORDER_LINES};

impl Order {
    /// Adds a catalog item to the order.
    ///
    /// ## Behavior
    /// - If a line with the same catalog id exists: its quantity increases
    ///   by 1 (no duplicate rows)
    /// - Otherwise: a new line is snapshotted from the menu item with
    ///   quantity 1, appended at the end (insertion order is display order)
    /// - No-op if the order is no longer active, or if a new line would
    ///   exceed [`MAX_ORDER_LINES`]
    pub fn add_line_item(&mut self, menu_item: &MenuItem) {
        if !self.is_active() {
            return;
        }

        if let Some(line) = self
            .items
            .iter_mut()
            .find(|l| l.menu_item_id == menu_item.id)
        {
            line.quantity = (line.quantity + 1).min(MAX_LINE_QUANTITY);
        } else {
            if self.items.len() >= MAX_ORDER_LINES {
                return;
            }
            self.items.push(OrderLineItem::from_menu_item(menu_item));
        }

        self.total_cents = self.compute_total().cents();
    }

    /// Adjusts a line's quantity by `delta` (positive or negative).
    ///
    /// ## Behavior
    /// - Resulting quantity ≤ 0 removes the line entirely; a zero or
    ///   negative quantity row is never retained
    /// - Resulting quantity is clamped to [`MAX_LINE_QUANTITY`]; extreme
    ///   deltas saturate instead of overflowing
    /// - Out-of-range index is a no-op
    /// - No-op if the order is no longer active
    pub fn change_quantity(&mut self, index: usize, delta: i64) {
        if !self.is_active() || index >= self.items.len() {
            return;
        }

        let line = &mut self.items[index];
        line.quantity = line.quantity.saturating_add(delta).min(MAX_LINE_QUANTITY);
        if line.quantity <= 0 {
            self.items.remove(index);
        }

        self.total_cents = self.compute_total().cents();
    }

    /// Deletes a line unconditionally.
    ///
    /// Out-of-range index is a no-op; no-op if the order is not active.
    pub fn remove_line_item(&mut self, index: usize) {
        if !self.is_active() || index >= self.items.len() {
            return;
        }

        self.items.remove(index);
        self.total_cents = self.compute_total().cents();
    }

    /// Recomputes the gross total from the current lines.
    ///
    /// This is the sole source of truth for `total_cents`; every structural
    /// change to the line list reassigns the total from here.
    pub fn compute_total(&self) -> Money {
        self.items.iter().map(|l| l.line_total()).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MenuCategory, OrderStatus};

    fn menu_item(id: &str, price_cents: i64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            category: MenuCategory::Drinks,
            price_cents,
            tax_rate_bps: 1900,
            icon: "🍔".to_string(),
            tags: vec![],
        }
    }

    fn active_order() -> Order {
        Order::new("TABLE_01", None)
    }

    #[test]
    fn test_add_line_item_appends_snapshot() {
        let mut order = active_order();
        order.add_line_item(&menu_item("A", 1000));

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 1);
        assert_eq!(order.total_cents, 1000);
    }

    #[test]
    fn test_add_same_item_merges_lines() {
        let mut order = active_order();
        let item = menu_item("A", 1000);

        order.add_line_item(&item);
        order.add_line_item(&item);

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.total_cents, 2000);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut order = active_order();
        order.add_line_item(&menu_item("B", 500));
        order.add_line_item(&menu_item("A", 1000));
        order.add_line_item(&menu_item("B", 500));

        let ids: Vec<&str> = order.items.iter().map(|l| l.menu_item_id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(order.items[0].quantity, 2);
    }

    #[test]
    fn test_change_quantity_up_and_down() {
        let mut order = active_order();
        order.add_line_item(&menu_item("A", 1000));

        order.change_quantity(0, 2);
        assert_eq!(order.items[0].quantity, 3);
        assert_eq!(order.total_cents, 3000);

        order.change_quantity(0, -2);
        assert_eq!(order.items[0].quantity, 1);
        assert_eq!(order.total_cents, 1000);
    }

    #[test]
    fn test_change_quantity_to_zero_removes_line() {
        let mut order = active_order();
        order.add_line_item(&menu_item("A", 1000));

        order.change_quantity(0, -1);

        assert!(order.items.is_empty());
        assert_eq!(order.total_cents, 0);
    }

    #[test]
    fn test_change_quantity_below_zero_removes_line() {
        let mut order = active_order();
        order.add_line_item(&menu_item("A", 1000));
        order.change_quantity(0, 5); // quantity 6

        order.change_quantity(0, -100);

        assert!(order.items.is_empty());
        assert_eq!(order.total_cents, 0);
    }

    #[test]
    fn test_change_quantity_clamps_at_max_line_quantity() {
        let mut order = active_order();
        order.add_line_item(&menu_item("A", 100));

        // Extreme deltas saturate instead of overflowing or wrapping
        order.change_quantity(0, i64::MAX);
        assert_eq!(order.items[0].quantity, crate::MAX_LINE_QUANTITY);
        assert_eq!(order.total_cents, crate::MAX_LINE_QUANTITY * 100);

        order.change_quantity(0, 1);
        assert_eq!(order.items[0].quantity, crate::MAX_LINE_QUANTITY);

        order.change_quantity(0, i64::MIN);
        assert!(order.items.is_empty());
        assert_eq!(order.total_cents, 0);
    }

    #[test]
    fn test_change_quantity_out_of_range_is_noop() {
        let mut order = active_order();
        order.add_line_item(&menu_item("A", 1000));

        order.change_quantity(5, 1);

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 1);
        assert_eq!(order.total_cents, 1000);
    }

    #[test]
    fn test_remove_line_item() {
        let mut order = active_order();
        order.add_line_item(&menu_item("A", 1000));
        order.add_line_item(&menu_item("B", 500));

        order.remove_line_item(0);

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].menu_item_id, "B");
        assert_eq!(order.total_cents, 500);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut order = active_order();
        order.add_line_item(&menu_item("A", 1000));

        order.remove_line_item(1);

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total_cents, 1000);
    }

    #[test]
    fn test_mutations_on_paid_order_are_noops() {
        let mut order = active_order();
        order.add_line_item(&menu_item("A", 1000));
        order.status = OrderStatus::Paid;

        order.add_line_item(&menu_item("B", 500));
        order.change_quantity(0, 3);
        order.remove_line_item(0);

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 1);
        assert_eq!(order.total_cents, 1000);
    }

    #[test]
    fn test_add_at_line_capacity_is_noop_for_new_items() {
        let mut order = active_order();
        for i in 0..crate::MAX_ORDER_LINES {
            order.add_line_item(&menu_item(&format!("ITEM_{}", i), 100));
        }
        assert_eq!(order.items.len(), crate::MAX_ORDER_LINES);

        // New distinct item is dropped, merging into an existing line still works
        order.add_line_item(&menu_item("OVERFLOW", 100));
        assert_eq!(order.items.len(), crate::MAX_ORDER_LINES);

        order.add_line_item(&menu_item("ITEM_0", 100));
        assert_eq!(order.items[0].quantity, 2);
    }

    #[test]
    fn test_total_always_equals_line_sum() {
        let mut order = active_order();
        let a = menu_item("A", 350);
        let b = menu_item("B", 1890);

        order.add_line_item(&a);
        order.add_line_item(&b);
        order.add_line_item(&a);
        order.change_quantity(1, 2);
        order.remove_line_item(0);
        order.change_quantity(0, -1);

        let expected: i64 = order
            .items
            .iter()
            .map(|l| l.quantity * l.unit_price_cents)
            .sum();
        assert_eq!(order.total_cents, expected);
    }
}
