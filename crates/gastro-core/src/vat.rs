//! # VAT Breakdown
//!
//! Splits an order's gross line totals into net and VAT buckets under a
//! two-rate tax scheme.
//!
//! ## Two-Rate Scheme
//! The reference jurisdiction taxes food and drink at two rates: a reduced
//! rate (7%) and a standard rate (19%). Receipts must report, per rate, the
//! accumulated net amount and the accumulated VAT amount.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  gross line total ──► net = gross / (1 + rate) ──► matching bucket      │
//! │                       vat = gross - net                                 │
//! │                                                                         │
//! │  lines taxed at the reduced rate  → net_reduced  / vat_reduced          │
//! │  lines taxed at the standard rate → net_standard / vat_standard         │
//! │  lines at any other rate          → unclassified_gross (not silently    │
//! │                                     dropped; surfaced for data-quality  │
//! │                                     reporting)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The breakdown is a pure fold over the lines: the same lines produce the
//! same buckets regardless of list order or any prior state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Money, TaxRate};
use crate::types::OrderLineItem;

// =============================================================================
// Tax Scheme
// =============================================================================

/// The two permitted tax rates.
///
/// Defaults to the German scheme (7% reduced, 19% standard) but any
/// two-rate scheme can be configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxScheme {
    /// Reduced rate (applies to e.g. non-alcoholic drinks, takeaway food).
    pub reduced: TaxRate,
    /// Standard rate.
    pub standard: TaxRate,
}

impl Default for TaxScheme {
    fn default() -> Self {
        TaxScheme {
            reduced: TaxRate::from_bps(700),
            standard: TaxRate::from_bps(1900),
        }
    }
}

impl TaxScheme {
    /// Creates a scheme from two rates.
    pub const fn new(reduced: TaxRate, standard: TaxRate) -> Self {
        TaxScheme { reduced, standard }
    }

    /// Computes the VAT breakdown for a set of order lines.
    ///
    /// Lines whose rate matches neither scheme rate contribute to
    /// `unclassified_gross` only; both rate buckets stay untouched.
    pub fn breakdown(&self, items: &[OrderLineItem]) -> VatBreakdown {
        let mut out = VatBreakdown::default();

        for line in items {
            let gross = line.line_total();
            let rate = line.tax_rate();

            if rate == self.reduced {
                out.net_reduced += gross.net_of(rate);
                out.vat_reduced += gross.vat_of(rate);
            } else if rate == self.standard {
                out.net_standard += gross.net_of(rate);
                out.vat_standard += gross.vat_of(rate);
            } else {
                out.unclassified_gross += gross;
            }
        }

        out
    }
}

// =============================================================================
// VAT Breakdown
// =============================================================================

/// Derived, stateless net/VAT split by rate. Recomputed on demand from an
/// order's lines; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VatBreakdown {
    /// Accumulated net of lines at the reduced rate.
    pub net_reduced: Money,
    /// Accumulated net of lines at the standard rate.
    pub net_standard: Money,
    /// Accumulated VAT of lines at the reduced rate.
    pub vat_reduced: Money,
    /// Accumulated VAT of lines at the standard rate.
    pub vat_standard: Money,
    /// Gross total of lines whose rate matched neither scheme rate.
    /// Always zero for a clean catalog.
    pub unclassified_gross: Money,
}

impl VatBreakdown {
    /// Total VAT across both rate buckets.
    pub fn total_vat(&self) -> Money {
        self.vat_reduced + self.vat_standard
    }

    /// Total net across both rate buckets.
    pub fn total_net(&self) -> Money {
        self.net_reduced + self.net_standard
    }

    /// Gross total of all classified lines.
    pub fn total_gross(&self) -> Money {
        self.total_net() + self.total_vat()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price_cents: i64, quantity: i64, bps: u32) -> OrderLineItem {
        OrderLineItem {
            menu_item_id: id.to_string(),
            name: format!("Item {}", id),
            unit_price_cents: price_cents,
            tax_rate_bps: bps,
            icon: String::new(),
            quantity,
            notes: None,
        }
    }

    #[test]
    fn test_breakdown_two_rates() {
        // €10.70 at 7% and €11.90 at 19%
        let items = vec![line("A", 1070, 1, 700), line("B", 1190, 1, 1900)];
        let b = TaxScheme::default().breakdown(&items);

        assert_eq!(b.net_reduced.cents(), 1000);
        assert_eq!(b.vat_reduced.cents(), 70);
        assert_eq!(b.net_standard.cents(), 1000);
        assert_eq!(b.vat_standard.cents(), 190);
        assert!(b.unclassified_gross.is_zero());
    }

    #[test]
    fn test_breakdown_respects_quantity() {
        let items = vec![line("A", 1070, 3, 700)];
        let b = TaxScheme::default().breakdown(&items);

        assert_eq!(b.net_reduced.cents(), 3000);
        assert_eq!(b.vat_reduced.cents(), 210);
    }

    #[test]
    fn test_breakdown_is_order_independent() {
        let mut items = vec![
            line("A", 350, 2, 700),
            line("B", 1890, 1, 1900),
            line("C", 480, 2, 700),
            line("D", 1250, 3, 1900),
        ];
        let scheme = TaxScheme::default();
        let forward = scheme.breakdown(&items);

        items.reverse();
        let backward = scheme.breakdown(&items);

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_unrecognized_rate_goes_to_unclassified() {
        let items = vec![
            line("A", 1070, 1, 700),
            line("X", 999, 2, 1600), // not a scheme rate
        ];
        let b = TaxScheme::default().breakdown(&items);

        assert_eq!(b.net_reduced.cents(), 1000);
        assert_eq!(b.vat_reduced.cents(), 70);
        assert!(b.net_standard.is_zero());
        assert!(b.vat_standard.is_zero());
        assert_eq!(b.unclassified_gross.cents(), 1998);
    }

    #[test]
    fn test_per_line_round_trip_is_exact() {
        for (price, qty, bps) in [(333, 1, 700), (999, 7, 1900), (1, 1, 1900), (1070, 2, 700)] {
            let l = line("A", price, qty, bps);
            let gross = l.line_total();
            let rate = l.tax_rate();
            assert_eq!(gross.net_of(rate) + gross.vat_of(rate), gross);
        }
    }

    #[test]
    fn test_empty_lines_yield_zero_breakdown() {
        let b = TaxScheme::default().breakdown(&[]);
        assert_eq!(b, VatBreakdown::default());
        assert!(b.total_vat().is_zero());
        assert!(b.total_gross().is_zero());
    }

    #[test]
    fn test_custom_scheme() {
        let scheme = TaxScheme::new(TaxRate::from_bps(500), TaxRate::from_bps(2000));
        let items = vec![line("A", 1050, 1, 500), line("B", 1200, 1, 2000)];
        let b = scheme.breakdown(&items);

        assert_eq!(b.net_reduced.cents(), 1000);
        assert_eq!(b.vat_reduced.cents(), 50);
        assert_eq!(b.net_standard.cents(), 1000);
        assert_eq!(b.vat_standard.cents(), 200);
    }
}
