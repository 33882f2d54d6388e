//! # Engine Facade
//!
//! The single entry point the presentation layer talks to.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Intent → Snapshot Cycle                          │
//! │                                                                         │
//! │  Frontend Action           Engine Intent            State Change        │
//! │  ───────────────           ─────────────            ────────────        │
//! │                                                                         │
//! │  Tap table card ─────────► select_table() ────────► session focus      │
//! │  Tap "New Order" ────────► start_new_order() ─────► registry           │
//! │  Tap menu item ──────────► add_to_order() ────────► focused order      │
//! │  +/- stepper ────────────► update_quantity() ─────► focused order      │
//! │  Tap pay ────────────────► complete_order() ──────► registry           │
//! │  Tap "table ready" ──────► free_table() ──────────► registry           │
//! │                                                                         │
//! │  After EVERY mutation the engine re-syncs the session focus against    │
//! │  the registry, then the frontend pulls a fresh snapshot() and          │
//! │  re-renders from it. No partial state ever escapes.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single-writer model: every intent runs to completion before the next one
//! starts; there is no interleaving of mutations on the same table.

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use chrono::Utc;
use gastro_core::validation::{
    validate_entity_id, validate_guest_count, validate_menu_item_name, validate_price_cents,
    validate_tax_rate_bps,
};
use gastro_core::{
    CoreResult, MenuItem, Order, OrderLineItem, PaymentMethod, Table, TableStatus, TaxScheme,
    VatBreakdown,
};

use crate::registry::TableRegistry;
use crate::session::{CategoryFilter, Session};
use crate::stats::{format_order_duration, TableStats};

// =============================================================================
// Snapshot
// =============================================================================

/// Immutable read model handed to the presentation layer.
///
/// Recomputed per call; the frontend re-renders from it deterministically
/// and never reaches into engine internals.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// All tables, in floor-plan order.
    pub tables: Vec<Table>,

    /// Catalog entries passing the current category/search filters.
    pub menu_items: Vec<MenuItem>,

    /// The focused table, if any.
    pub current_table: Option<Table>,

    /// The focused table's active order, if any.
    pub current_order: Option<Order>,

    /// The active category filter.
    pub selected_category: CategoryFilter,

    /// Floor-wide statistics.
    pub table_stats: TableStats,
}

// =============================================================================
// Engine
// =============================================================================

/// The order/table state engine.
///
/// Owns the table registry, the operator session and the immutable catalog.
/// Seeded once by an external loader; every subsequent change flows through
/// the intent methods below.
#[derive(Debug, Clone)]
pub struct PosEngine {
    registry: TableRegistry,
    session: Session,
    menu: Vec<MenuItem>,
    tax_scheme: TaxScheme,
}

impl PosEngine {
    /// Builds an engine from loader-supplied seed data with the default
    /// two-rate tax scheme.
    pub fn new(tables: Vec<Table>, menu: Vec<MenuItem>) -> Self {
        Self::with_tax_scheme(tables, menu, TaxScheme::default())
    }

    /// Builds an engine with an explicit tax scheme.
    pub fn with_tax_scheme(tables: Vec<Table>, menu: Vec<MenuItem>, tax_scheme: TaxScheme) -> Self {
        PosEngine {
            registry: TableRegistry::new(tables),
            session: Session::new(),
            menu,
            tax_scheme,
        }
    }

    /// Builds an engine from untrusted seed data, validating it first.
    ///
    /// This is the loader boundary: files and migrations come in here,
    /// while [`PosEngine::new`] stays available for in-process callers
    /// constructing known-good data. Nothing enters the registry or the
    /// catalog unless every record passes.
    pub fn from_seed(tables: Vec<Table>, menu: Vec<MenuItem>) -> CoreResult<Self> {
        for table in &tables {
            validate_entity_id(&table.id)?;
            validate_guest_count(table.guests)?;
        }
        for item in &menu {
            validate_entity_id(&item.id)?;
            validate_menu_item_name(&item.name)?;
            validate_price_cents(item.price_cents)?;
            validate_tax_rate_bps(item.tax_rate_bps)?;
        }

        Ok(Self::new(tables, menu))
    }

    // =========================================================================
    // Intent surface
    // =========================================================================

    /// Focuses a table for subsequent order edits.
    pub fn select_table(&mut self, table_id: &str) {
        self.session.select_table(&self.registry, table_id);
    }

    /// Clears the table focus.
    pub fn deselect_table(&mut self) {
        self.session.deselect();
    }

    /// Starts a new order on a table and focuses that table.
    ///
    /// Rejects a table that already carries a live active order; unknown
    /// table ids are a logged no-op (see [`TableRegistry::start_new_order`]).
    pub fn start_new_order(
        &mut self,
        table_id: &str,
        guests: u32,
        staff: Option<String>,
    ) -> CoreResult<()> {
        self.registry.start_new_order(table_id, guests, staff)?;
        self.session.select_table(&self.registry, table_id);
        self.session.sync_with(&self.registry);
        Ok(())
    }

    /// Settles the table's active order and moves the table to cleaning.
    /// Defensive calls on tables without an active order are no-ops.
    pub fn complete_order(
        &mut self,
        table_id: &str,
        payment_method: PaymentMethod,
        tse_signature: &str,
    ) {
        self.registry
            .complete_order(table_id, payment_method, tse_signature);
        self.session.sync_with(&self.registry);
    }

    /// Returns a cleaned table to service.
    pub fn free_table(&mut self, table_id: &str) {
        self.registry.free_table(table_id);
        self.session.sync_with(&self.registry);
    }

    /// Adds a catalog item to the focused table's active order.
    ///
    /// A focused *free* table gets a fresh one-guest order started
    /// automatically; without a focus, with an unknown catalog id, or with
    /// a focus in any other non-occupied state this is a logged no-op.
    pub fn add_to_order(&mut self, menu_item_id: &str) {
        let Some(item) = self.menu.iter().find(|m| m.id == menu_item_id).cloned() else {
            debug!(menu_item_id, "add_to_order with unknown catalog id ignored");
            return;
        };
        let Some(table_id) = self.session.current_table_id().map(String::from) else {
            debug!(menu_item_id, "add_to_order without focused table ignored");
            return;
        };

        // Walk-up convenience: tapping the menu with a free table focused
        // seats the table first.
        if self
            .registry
            .get(&table_id)
            .is_some_and(|t| t.status == TableStatus::Free)
        {
            // Cannot collide with an active order on a free table
            let _ = self.registry.start_new_order(&table_id, 1, None);
        }

        self.registry
            .with_current_order(&table_id, |order| order.add_line_item(&item));
        self.session.sync_with(&self.registry);
    }

    /// Adjusts a line's quantity on the focused order; at quantity ≤ 0 the
    /// line disappears. Out-of-range indices and missing focus are no-ops.
    pub fn update_quantity(&mut self, line_index: usize, delta: i64) {
        let Some(table_id) = self.session.current_table_id().map(String::from) else {
            debug!("update_quantity without focused table ignored");
            return;
        };
        self.registry
            .with_current_order(&table_id, |order| order.change_quantity(line_index, delta));
        self.session.sync_with(&self.registry);
    }

    /// Removes a line from the focused order unconditionally.
    pub fn remove_item(&mut self, line_index: usize) {
        let Some(table_id) = self.session.current_table_id().map(String::from) else {
            debug!("remove_item without focused table ignored");
            return;
        };
        self.registry
            .with_current_order(&table_id, |order| order.remove_line_item(line_index));
        self.session.sync_with(&self.registry);
    }

    /// Switches the menu-grid category filter.
    pub fn set_selected_category(&mut self, filter: CategoryFilter) {
        self.session.set_selected_category(filter);
    }

    /// Updates the menu search filter.
    pub fn set_search_query(&mut self, query: &str) {
        self.session.set_search_query(query);
    }

    // =========================================================================
    // Read surface
    // =========================================================================

    /// The current immutable read model.
    pub fn snapshot(&self) -> Snapshot {
        let current_table = self
            .session
            .current_table_id()
            .and_then(|id| self.registry.get(id))
            .cloned();
        let current_order = current_table
            .as_ref()
            .and_then(|t| t.current_order())
            .cloned();

        Snapshot {
            tables: self.registry.tables().to_vec(),
            menu_items: self
                .session
                .filter_menu(&self.menu)
                .into_iter()
                .cloned()
                .collect(),
            current_table,
            current_order,
            selected_category: self.session.selected_category(),
            table_stats: TableStats::collect(&self.registry),
        }
    }

    /// Elapsed-time label for a running order ("42m").
    pub fn order_duration(&self, order: &Order) -> String {
        format_order_duration(order.start_time, Utc::now())
    }

    /// Net/VAT split of a set of order lines under the engine's tax scheme.
    pub fn vat_breakdown(&self, items: &[OrderLineItem]) -> VatBreakdown {
        self.tax_scheme.breakdown(items)
    }

    /// Direct access to the registry's read surface.
    pub fn registry(&self) -> &TableRegistry {
        &self.registry
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
