//! # Operator Session
//!
//! Thin convenience state: which table the operator is focused on and which
//! menu filters are applied. Carries no invariants of its own but must never
//! point at a table whose order has gone away.
//!
//! ## Synchronization Contract
//! Completing or freeing a table can invalidate the focus. The engine facade
//! re-asserts consistency by calling [`Session::sync_with`] after **every**
//! mutating registry call; the check is structural, not something each call
//! site has to remember.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use gastro_core::{MenuCategory, MenuItem, TableStatus};

use crate::registry::TableRegistry;

// =============================================================================
// Category Filter
// =============================================================================

/// Menu-grid category filter, including the "show everything" rail entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "kind", content = "category")]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Restrict the grid to one category.
    Only(MenuCategory),
}

impl CategoryFilter {
    /// Whether a catalog item passes this filter.
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// The operator's focus and filter state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current_table_id: Option<String>,
    selected_category: CategoryFilter,
    search_query: String,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    /// Id of the focused table, if any.
    pub fn current_table_id(&self) -> Option<&str> {
        self.current_table_id.as_deref()
    }

    /// The active category filter.
    pub fn selected_category(&self) -> CategoryFilter {
        self.selected_category
    }

    /// The active search filter (empty string = no restriction).
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Focuses a table. Unknown ids are ignored so a stale tap on a
    /// just-removed table cannot produce a dangling focus.
    pub fn select_table(&mut self, registry: &TableRegistry, table_id: &str) {
        if registry.get(table_id).is_some() {
            self.current_table_id = Some(table_id.to_string());
        } else {
            debug!(table_id, "select_table on unknown table ignored");
        }
    }

    /// Clears the focus.
    pub fn deselect(&mut self) {
        self.current_table_id = None;
    }

    pub fn set_selected_category(&mut self, filter: CategoryFilter) {
        self.selected_category = filter;
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.trim().to_string();
    }

    /// Applies both filters to the catalog, preserving catalog order.
    pub fn filter_menu<'a>(&self, menu: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        let query = self.search_query.to_lowercase();
        menu.iter()
            .filter(|item| self.selected_category.matches(item))
            .filter(|item| query.is_empty() || item.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Drops the focus when it no longer points somewhere the operator can
    /// work: a table with a live active order, or a free table awaiting its
    /// first tap (the walk-up flow). A focus left on a cleaning or reserved
    /// table after its order went away is cleared. Called by the engine
    /// after every registry mutation.
    pub fn sync_with(&mut self, registry: &TableRegistry) {
        let Some(table_id) = self.current_table_id.as_deref() else {
            return;
        };

        let focus_is_workable = registry
            .get(table_id)
            .map(|t| {
                t.current_order().is_some_and(|o| o.is_active()) || t.status == TableStatus::Free
            })
            .unwrap_or(false);

        if !focus_is_workable {
            debug!(table_id, "focused table lost its active order; clearing focus");
            self.current_table_id = None;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gastro_core::{PaymentMethod, Table, TableStatus};

    fn table(id: &str) -> Table {
        Table {
            id: id.to_string(),
            name: format!("Table {}", id),
            status: TableStatus::Free,
            guests: 0,
            location: "Main Dining".to_string(),
            staff: None,
            current_order_id: None,
            order_history: vec![],
        }
    }

    fn menu_item(id: &str, name: &str, category: MenuCategory) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            category,
            price_cents: 500,
            tax_rate_bps: 1900,
            icon: String::new(),
            tags: vec![],
        }
    }

    #[test]
    fn test_select_unknown_table_is_ignored() {
        let registry = TableRegistry::new(vec![table("T1")]);
        let mut session = Session::new();

        session.select_table(&registry, "NO_SUCH_TABLE");
        assert!(session.current_table_id().is_none());

        session.select_table(&registry, "T1");
        assert_eq!(session.current_table_id(), Some("T1"));
    }

    #[test]
    fn test_sync_clears_focus_after_complete_order() {
        let mut registry = TableRegistry::new(vec![table("T1")]);
        let mut session = Session::new();

        registry.start_new_order("T1", 2, None).unwrap();
        session.select_table(&registry, "T1");
        session.sync_with(&registry);
        assert_eq!(session.current_table_id(), Some("T1"));

        registry.complete_order("T1", PaymentMethod::Cash, "SIG1");
        session.sync_with(&registry);
        assert!(session.current_table_id().is_none());
    }

    #[test]
    fn test_sync_keeps_focus_when_other_table_completes() {
        let mut registry = TableRegistry::new(vec![table("T1"), table("T2")]);
        let mut session = Session::new();

        registry.start_new_order("T1", 2, None).unwrap();
        registry.start_new_order("T2", 4, None).unwrap();
        session.select_table(&registry, "T1");

        registry.complete_order("T2", PaymentMethod::Card, "SIG2");
        session.sync_with(&registry);

        assert_eq!(session.current_table_id(), Some("T1"));
    }

    #[test]
    fn test_sync_keeps_walk_up_focus_on_free_table() {
        let mut registry = TableRegistry::new(vec![table("T1"), table("T2")]);
        let mut session = Session::new();

        // Walk-up: T1 is focused but still free, no order yet
        session.select_table(&registry, "T1");

        // An unrelated transition elsewhere must not steal the focus
        registry.start_new_order("T2", 4, None).unwrap();
        session.sync_with(&registry);
        assert_eq!(session.current_table_id(), Some("T1"));

        registry.free_table("T2");
        session.sync_with(&registry);
        assert_eq!(session.current_table_id(), Some("T1"));
    }

    #[test]
    fn test_category_filter() {
        let drinks = menu_item("D1", "Pilsner 0.5L", MenuCategory::Drinks);
        let main = menu_item("M1", "Wiener Schnitzel", MenuCategory::MainCourses);

        assert!(CategoryFilter::All.matches(&drinks));
        assert!(CategoryFilter::Only(MenuCategory::Drinks).matches(&drinks));
        assert!(!CategoryFilter::Only(MenuCategory::Drinks).matches(&main));
    }

    #[test]
    fn test_filter_menu_by_category_and_search() {
        let menu = vec![
            menu_item("D1", "Pilsner 0.5L", MenuCategory::Drinks),
            menu_item("D2", "Mineral Water 0.5L", MenuCategory::Drinks),
            menu_item("M1", "Wiener Schnitzel", MenuCategory::MainCourses),
        ];
        let mut session = Session::new();

        session.set_selected_category(CategoryFilter::Only(MenuCategory::Drinks));
        let filtered = session.filter_menu(&menu);
        assert_eq!(filtered.len(), 2);

        session.set_search_query("pilsner");
        let filtered = session.filter_menu(&menu);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "D1");

        // Search alone, case-insensitive
        session.set_selected_category(CategoryFilter::All);
        session.set_search_query("SCHNITZEL");
        let filtered = session.filter_menu(&menu);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "M1");
    }
}
