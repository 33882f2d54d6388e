//! # Table Registry
//!
//! Owns the collection of tables and drives every table/order transition.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Table Lifecycle                                     │
//! │                                                                         │
//! │            start_new_order            complete_order                    │
//! │   ┌──────┐ ───────────────► ┌──────────┐ ───────────► ┌──────────┐     │
//! │   │ Free │                  │ Occupied │              │ Cleaning │     │
//! │   └──────┘ ◄───────────────────────────────────────── └──────────┘     │
//! │      ▲            free_table                                │          │
//! │      │                                                      │          │
//! │      └──────────────────────────────────────────────────────┘          │
//! │                                                                         │
//! │   Reserved: structurally available pre-occupied state; starting an     │
//! │   order on a reserved table seats it directly.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! Operations are total over the table id: an unknown id leaves the registry
//! unchanged and logs at warn level instead of raising. The presentation
//! layer may dispatch intents against stale snapshots; availability wins
//! over strictness. The single deliberate rejection is starting a new order
//! on a table that already carries a live active order.

use tracing::{debug, warn};

use chrono::Utc;
use gastro_core::{CoreError, CoreResult, Order, OrderStatus, PaymentMethod, Table, TableStatus};

/// The authoritative collection of tables and, through them, every order
/// ever placed. All mutation funnels through the methods below; nothing
/// else hands out `&mut Table`.
#[derive(Debug, Clone)]
pub struct TableRegistry {
    tables: Vec<Table>,
}

impl TableRegistry {
    /// Builds a registry from externally seeded tables.
    ///
    /// The seed decides initial statuses and histories; the registry never
    /// invents tables on its own.
    pub fn new(tables: Vec<Table>) -> Self {
        TableRegistry { tables }
    }

    // =========================================================================
    // Read surface
    // =========================================================================

    /// All tables, in seed order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Looks up a table by id.
    pub fn get(&self, table_id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == table_id)
    }

    /// Looks up a table by id, treating absence as a domain error.
    /// Used at the seeding/loader boundary, not for runtime intents.
    pub fn require(&self, table_id: &str) -> CoreResult<&Table> {
        self.get(table_id)
            .ok_or_else(|| CoreError::TableNotFound(table_id.to_string()))
    }

    /// The table's current active order, if it has one.
    pub fn current_order(&self, table_id: &str) -> Option<&Order> {
        self.get(table_id)?.current_order()
    }

    fn get_mut(&mut self, table_id: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.id == table_id)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Starts a new active order on a table.
    ///
    /// ## Effect
    /// Creates an empty order (total 0, status active), appends it to the
    /// table's history, seats the table (`Occupied`, guest count, staff)
    /// and points `current_order_id` at the new order.
    ///
    /// ## Rejection
    /// A table that already carries a live active order is rejected with
    /// [`CoreError::TableOccupied`] rather than silently replacing the
    /// order; the operator must complete or clear the running order first.
    ///
    /// An unknown table id is a logged no-op returning `Ok(())`.
    pub fn start_new_order(
        &mut self,
        table_id: &str,
        guests: u32,
        staff: Option<String>,
    ) -> CoreResult<()> {
        let Some(table) = self.get_mut(table_id) else {
            warn!(table_id, "start_new_order on unknown table ignored");
            return Ok(());
        };

        if let Some(order) = table.current_order() {
            if order.is_active() {
                return Err(CoreError::TableOccupied {
                    table_id: table.id.clone(),
                    order_id: order.id.clone(),
                });
            }
        }

        let order = Order::new(&table.id, staff.clone());
        debug!(table_id, order_id = %order.id, guests, "starting new order");

        table.status = TableStatus::Occupied;
        table.guests = guests;
        table.staff = staff;
        table.current_order_id = Some(order.id.clone());
        table.order_history.push(order);

        Ok(())
    }

    /// Completes and settles the table's current active order.
    ///
    /// ## Effect
    /// Marks the order paid, stamps the end time, records the payment
    /// method and the fiscal signature reference, clears the table's
    /// current-order reference and moves the table to `Cleaning`.
    ///
    /// Silently ignored when the table is unknown or has no active order:
    /// callers invoke this defensively and must never crash on it.
    pub fn complete_order(
        &mut self,
        table_id: &str,
        payment_method: PaymentMethod,
        tse_signature: &str,
    ) {
        let Some(table) = self.get_mut(table_id) else {
            warn!(table_id, "complete_order on unknown table ignored");
            return;
        };

        let Some(order) = table.current_order_mut() else {
            debug!(table_id, "complete_order without active order ignored");
            return;
        };

        order.status = OrderStatus::Paid;
        order.end_time = Some(Utc::now());
        order.payment_method = Some(payment_method);
        order.tse_signature = Some(tse_signature.to_string());
        debug!(table_id, order_id = %order.id, ?payment_method, "order paid");

        table.current_order_id = None;
        table.status = TableStatus::Cleaning;
    }

    /// Returns a table to service.
    ///
    /// Valid from any prior status (primarily used from `Cleaning`):
    /// status becomes `Free`, guests drop to 0, the staff assignment is
    /// cleared. If the table still carried a live active order the order is
    /// cancelled so no dangling active order survives on a free table.
    pub fn free_table(&mut self, table_id: &str) {
        let Some(table) = self.get_mut(table_id) else {
            warn!(table_id, "free_table on unknown table ignored");
            return;
        };

        if let Some(order) = table.current_order_mut() {
            if order.is_active() {
                warn!(table_id, order_id = %order.id, "freeing table with live order; cancelling it");
                order.status = OrderStatus::Cancelled;
                order.end_time = Some(Utc::now());
            }
        }

        table.status = TableStatus::Free;
        table.guests = 0;
        table.staff = None;
        table.current_order_id = None;
    }

    // =========================================================================
    // Scoped mutation
    // =========================================================================

    /// Runs a closure against a table's current active order.
    ///
    /// This is how the engine routes ledger operations: the closure gets
    /// `&mut Order` and the registry guarantees it is the single active
    /// order of an occupied table. No-op when the table is unknown or has
    /// no active order.
    pub fn with_current_order<F>(&mut self, table_id: &str, f: F)
    where
        F: FnOnce(&mut Order),
    {
        let Some(table) = self.get_mut(table_id) else {
            warn!(table_id, "order mutation on unknown table ignored");
            return;
        };
        let Some(order) = table.current_order_mut() else {
            debug!(table_id, "order mutation without active order ignored");
            return;
        };
        f(order);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
