//! # Domain Types
//!
//! Core domain types used throughout Gastro POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │      Order      │   │     Table       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  items (lines)  │◄──│  order_history  │       │
//! │  │  price_cents    │   │  status         │   │  status         │       │
//! │  │  tax_rate_bps   │   │  total_cents    │   │  current_order  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  OrderLineItem  │   │   OrderStatus   │   │  TableStatus    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  snapshot of    │   │  Active         │   │  Free           │       │
//! │  │  MenuItem +     │   │  Completed      │   │  Occupied       │       │
//! │  │  quantity       │   │  Cancelled      │   │  Cleaning       │       │
//! │  └─────────────────┘   │  Paid           │   │  Reserved       │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! An `OrderLineItem` copies name, price and tax rate from the `MenuItem` at
//! the moment it is added. Later catalog edits never retroactively change
//! historical orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::{Money, TaxRate};

// =============================================================================
// Menu Category
// =============================================================================

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    Drinks,
    Appetizers,
    MainCourses,
    Desserts,
}

impl MenuCategory {
    /// Human-readable label as shown on the category rail.
    pub const fn label(&self) -> &'static str {
        match self {
            MenuCategory::Drinks => "Drinks",
            MenuCategory::Appetizers => "Appetizers",
            MenuCategory::MainCourses => "Main Courses",
            MenuCategory::Desserts => "Desserts",
        }
    }

    /// All categories, in display order.
    pub const ALL: [MenuCategory; 4] = [
        MenuCategory::Drinks,
        MenuCategory::Appetizers,
        MenuCategory::MainCourses,
        MenuCategory::Desserts,
    ];
}

// =============================================================================
// Menu Item
// =============================================================================

/// A catalog entry available for ordering.
///
/// Loaded once at startup by an external loader and never mutated by the
/// engine; catalog editing is a back-office concern.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique catalog identifier (e.g. "DRINK_BEER_05").
    pub id: String,

    /// Display name shown on the menu grid and on order lines.
    pub name: String,

    /// Category used for the menu-grid filter.
    pub category: MenuCategory,

    /// Gross (VAT-inclusive) price in cents.
    pub price_cents: i64,

    /// Tax rate in basis points (700 = 7%, 1900 = 19%).
    pub tax_rate_bps: u32,

    /// Display icon (emoji shorthand used by the frontend grid).
    pub icon: String,

    /// Optional free-form tags ("popular", "vegetarian", ...).
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MenuItem {
    /// Returns the gross price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the tax rate.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }
}

// =============================================================================
// Order Line Item
// =============================================================================

/// A line item in an order.
/// Uses snapshot pattern to freeze catalog data at time of ordering.
///
/// ## Invariant
/// A line with quantity ≤ 0 never exists inside an order's item list; the
/// ledger removes it instead of zeroing it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    /// Catalog id this line was snapshotted from.
    pub menu_item_id: String,

    /// Name at time of ordering (frozen).
    pub name: String,

    /// Gross unit price in cents at time of ordering (frozen).
    pub unit_price_cents: i64,

    /// Tax rate in basis points at time of ordering (frozen).
    pub tax_rate_bps: u32,

    /// Display icon at time of ordering (frozen).
    pub icon: String,

    /// Quantity ordered (≥ 1 while the line exists).
    pub quantity: i64,

    /// Optional free-text kitchen notes ("No gas", "With lemon", ...).
    pub notes: Option<String>,
}

impl OrderLineItem {
    /// Creates a line item from a catalog entry with quantity 1.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the catalog price changes
    /// later, this line retains the original price.
    pub fn from_menu_item(item: &MenuItem) -> Self {
        OrderLineItem {
            menu_item_id: item.id.clone(),
            name: item.name.clone(),
            unit_price_cents: item.price_cents,
            tax_rate_bps: item.tax_rate_bps,
            icon: item.icon.clone(),
            quantity: 1,
            notes: None,
        }
    }

    /// Returns the gross unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the tax rate.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Gross line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order is in progress (lines being added/changed).
    Active,
    /// Order was closed without payment recorded here (e.g. migrated data).
    Completed,
    /// Order was cancelled before payment.
    Cancelled,
    /// Order has been paid and finalized.
    Paid,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Active
    }
}

impl OrderStatus {
    /// Whether an order in this status counts towards revenue reporting.
    pub const fn is_settled(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Paid)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// Tender options on the payment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on external terminal.
    Card,
    /// Mobile/NFC wallet payment.
    Mobile,
    /// Split tender across guests.
    Split,
}

// =============================================================================
// Order
// =============================================================================

/// A single order placed at a table.
///
/// ## Invariant
/// `total_cents == Σ(line.quantity × line.unit_price_cents)` after every
/// mutation. The total is always recomputed from the lines, never patched
/// incrementally, so it cannot drift.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique, time-ordered identifier (UUID v7).
    pub id: String,

    /// Table this order belongs to.
    pub table_id: String,

    /// Lines in insertion order (display order is significant).
    pub items: Vec<OrderLineItem>,

    /// When the order was started.
    #[ts(as = "String")]
    pub start_time: DateTime<Utc>,

    /// When the order ended (set exactly once, on completion).
    #[ts(as = "Option<String>")]
    pub end_time: Option<DateTime<Utc>>,

    /// Lifecycle status.
    pub status: OrderStatus,

    /// Gross total in cents, kept in sync with `items`.
    pub total_cents: i64,

    /// Staff member who took the order.
    pub staff: Option<String>,

    /// How the order was paid (set on completion).
    pub payment_method: Option<PaymentMethod>,

    /// Fiscal signing reference attached on completion. Generated by an
    /// external signing device; opaque to the engine.
    pub tse_signature: Option<String>,
}

impl Order {
    /// Starts a new, empty active order for a table.
    pub fn new(table_id: &str, staff: Option<String>) -> Self {
        Order {
            id: Uuid::now_v7().to_string(),
            table_id: table_id.to_string(),
            items: Vec::new(),
            start_time: Utc::now(),
            end_time: None,
            status: OrderStatus::Active,
            total_cents: 0,
            staff,
            payment_method: None,
            tse_signature: None,
        }
    }

    /// Whether lines may still be added or changed.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == OrderStatus::Active
    }

    /// Returns the gross total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Table Status
// =============================================================================

/// The status of a dining table.
///
/// Happy path: `Free → Occupied → Cleaning → Free`. `Reserved` is a
/// pre-occupied state available to the floor plan but not part of the
/// happy path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    Free,
    Occupied,
    Cleaning,
    Reserved,
}

// =============================================================================
// Table
// =============================================================================

/// A dining table on the floor plan.
///
/// Tables are long-lived entities: they are seeded once and only their
/// mutable fields (status, guests, staff, current order, history) change.
///
/// ## Invariant
/// `current_order_id` is `Some` if and only if the status is `Occupied` and
/// the referenced order is `Active`. A Free/Cleaning/Reserved table carries
/// no current-order reference.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Stable identifier (e.g. "TABLE_01").
    pub id: String,

    /// Display name ("Table 1 - Window").
    pub name: String,

    /// Current lifecycle status.
    pub status: TableStatus,

    /// Seated guest count (0 when free).
    pub guests: u32,

    /// Floor zone label ("Main Dining", "Terrace", ...).
    pub location: String,

    /// Staff member currently assigned to the table.
    pub staff: Option<String>,

    /// Id of the table's single active order, if any.
    pub current_order_id: Option<String>,

    /// Every order ever placed at this table, oldest first.
    pub order_history: Vec<Order>,
}

impl Table {
    /// Looks up the table's current active order in its history.
    pub fn current_order(&self) -> Option<&Order> {
        let id = self.current_order_id.as_deref()?;
        self.order_history.iter().find(|o| o.id == id)
    }

    /// Mutable variant of [`current_order`](Self::current_order).
    pub fn current_order_mut(&mut self) -> Option<&mut Order> {
        let id = self.current_order_id.clone()?;
        self.order_history.iter_mut().find(|o| o.id == id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_item(id: &str, price_cents: i64, bps: u32) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            category: MenuCategory::Drinks,
            price_cents,
            tax_rate_bps: bps,
            icon: "🍺".to_string(),
            tags: vec![],
        }
    }

    #[test]
    fn test_new_order_is_active_and_empty() {
        let order = Order::new("TABLE_01", Some("Anna Schmidt".to_string()));
        assert!(order.is_active());
        assert!(order.items.is_empty());
        assert_eq!(order.total_cents, 0);
        assert_eq!(order.table_id, "TABLE_01");
        assert!(order.end_time.is_none());
        assert!(order.payment_method.is_none());
    }

    #[test]
    fn test_order_ids_are_unique() {
        let a = Order::new("TABLE_01", None);
        let b = Order::new("TABLE_01", None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_line_item_snapshots_catalog_data() {
        let item = menu_item("DRINK_BEER_05", 480, 700);
        let line = OrderLineItem::from_menu_item(&item);

        assert_eq!(line.menu_item_id, "DRINK_BEER_05");
        assert_eq!(line.unit_price_cents, 480);
        assert_eq!(line.tax_rate_bps, 700);
        assert_eq!(line.quantity, 1);
        assert!(line.notes.is_none());
    }

    #[test]
    fn test_line_total() {
        let item = menu_item("A", 350, 700);
        let mut line = OrderLineItem::from_menu_item(&item);
        line.quantity = 3;
        assert_eq!(line.line_total().cents(), 1050);
    }

    #[test]
    fn test_settled_statuses() {
        assert!(OrderStatus::Paid.is_settled());
        assert!(OrderStatus::Completed.is_settled());
        assert!(!OrderStatus::Active.is_settled());
        assert!(!OrderStatus::Cancelled.is_settled());
    }

    #[test]
    fn test_table_current_order_lookup() {
        let mut order = Order::new("TABLE_01", None);
        order.total_cents = 1000;
        let order_id = order.id.clone();

        let table = Table {
            id: "TABLE_01".to_string(),
            name: "Table 1".to_string(),
            status: TableStatus::Occupied,
            guests: 2,
            location: "Main Dining".to_string(),
            staff: None,
            current_order_id: Some(order_id),
            order_history: vec![order],
        };

        assert_eq!(table.current_order().unwrap().total_cents, 1000);
    }

    #[test]
    fn test_table_without_current_order() {
        let table = Table {
            id: "TABLE_02".to_string(),
            name: "Table 2".to_string(),
            status: TableStatus::Free,
            guests: 0,
            location: "Terrace".to_string(),
            staff: None,
            current_order_id: None,
            order_history: vec![],
        };
        assert!(table.current_order().is_none());
    }

    #[test]
    fn test_menu_item_deserializes_from_loader_json() {
        // The external catalog loader feeds camelCase JSON
        let json = r#"{
            "id": "DRINK_WATER",
            "name": "Mineral Water 0.5L",
            "category": "drinks",
            "priceCents": 350,
            "taxRateBps": 700,
            "icon": "🥤"
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "DRINK_WATER");
        assert_eq!(item.category, MenuCategory::Drinks);
        assert_eq!(item.price().cents(), 350);
        assert!(item.tags.is_empty()); // missing tags default to empty
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let order = Order::new("TABLE_01", None);
        let value = serde_json::to_value(&order).unwrap();
        assert!(value.get("tableId").is_some());
        assert!(value.get("startTime").is_some());
        assert!(value.get("totalCents").is_some());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(MenuCategory::MainCourses.label(), "Main Courses");
        assert_eq!(MenuCategory::ALL.len(), 4);
    }
}
