//! # Table Statistics
//!
//! Derived aggregates over the whole registry, recomputed on demand and
//! never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use gastro_core::{Money, Order, TableStatus};

use crate::registry::TableRegistry;

/// Floor-wide counters for the dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TableStats {
    pub total_tables: usize,
    pub free_tables: usize,
    pub occupied_tables: usize,
    pub cleaning_tables: usize,
    pub reserved_tables: usize,

    /// Gross revenue of all settled (completed or paid) orders.
    pub revenue_to_date: Money,

    /// Mean settled-order duration in whole minutes. Orders without an end
    /// time are skipped; zero qualifying orders yields 0.
    pub average_order_minutes: i64,
}

impl TableStats {
    /// Computes the statistics for the registry's current state.
    pub fn collect(registry: &TableRegistry) -> TableStats {
        let tables = registry.tables();

        let count = |status: TableStatus| tables.iter().filter(|t| t.status == status).count();

        let settled: Vec<&Order> = tables
            .iter()
            .flat_map(|t| t.order_history.iter())
            .filter(|o| o.status.is_settled())
            .collect();

        let revenue_to_date: Money = settled.iter().map(|o| o.total()).sum();

        let durations_minutes: Vec<i64> = settled
            .iter()
            .filter_map(|o| o.end_time.map(|end| (end - o.start_time).num_minutes()))
            .collect();

        let average_order_minutes = if durations_minutes.is_empty() {
            0
        } else {
            // Round half up on the mean, matching the operator display
            let sum: i64 = durations_minutes.iter().sum();
            let n = durations_minutes.len() as i64;
            (sum + n / 2) / n
        };

        TableStats {
            total_tables: tables.len(),
            free_tables: count(TableStatus::Free),
            occupied_tables: count(TableStatus::Occupied),
            cleaning_tables: count(TableStatus::Cleaning),
            reserved_tables: count(TableStatus::Reserved),
            revenue_to_date,
            average_order_minutes,
        }
    }
}

/// Elapsed-time label for a running order ("42m"), as shown on the table
/// card.
pub fn format_order_duration(start_time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - start_time).num_minutes().max(0);
    format!("{}m", minutes)
}

// =============================================================================
// Unit Tests
// =============================================================================
