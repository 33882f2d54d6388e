//! # gastro-core: Pure Business Logic for Gastro POS
//!
//! This crate is the **heart** of Gastro POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Gastro POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (TypeScript)                          │   │
//! │  │   Table Grid ──► Menu Grid ──► Order Panel ──► Payment Panel   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshot / intents                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    gastro-engine                                │   │
//! │  │   table registry, session state, statistics, snapshots          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gastro-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  ledger   │  │    vat    │  │   │
//! │  │   │  MenuItem │  │   Money   │  │  order    │  │ TaxScheme │  │   │
//! │  │   │  Table    │  │  TaxRate  │  │  math     │  │ breakdown │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, Order, Table, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`ledger`] - Order line-item math (add/change/remove, total recompute)
//! - [`vat`] - Two-rate VAT breakdown of gross line totals
//! - [`error`] - Domain error types
//! - [`validation`] - Seed-data validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Operations**: ledger mutations tolerate stale indices as no-ops;
//!    the engine never panics on operator input
//!
//! ## Example Usage
//!
//! ```rust
//! use gastro_core::money::{Money, TaxRate};
//!
//! // Gross menu price, VAT-inclusive
//! let price = Money::from_cents(1070); // €10.70
//!
//! // Split into net + VAT at the reduced rate
//! let rate = TaxRate::from_bps(700); // 7%
//! assert_eq!(price.net_of(rate).cents(), 1000);
//! assert_eq!(price.vat_of(rate).cents(), 70);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;
pub mod vat;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use gastro_core::Money` instead of
// `use gastro_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, TaxRate};
pub use types::*;
pub use vat::{TaxScheme, VatBreakdown};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single order
///
/// ## Business Reason
/// Prevents runaway orders and keeps the order panel renderable.
pub const MAX_ORDER_LINES: usize = 100;

/// Maximum quantity of a single line
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
