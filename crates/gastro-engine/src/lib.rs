//! # gastro-engine: Table/Order State Engine for Gastro POS
//!
//! This crate owns every piece of mutable state in Gastro POS: which tables
//! are occupied, what has been ordered, and how an order moves from creation
//! through payment. It sits between the pure math in `gastro-core` and the
//! TypeScript presentation layer.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Gastro POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (TypeScript)                          │   │
//! │  └────────────┬──────────────────────────────▲─────────────────────┘   │
//! │               │ intents                      │ Snapshot                │
//! │  ┌────────────▼──────────────────────────────┴─────────────────────┐   │
//! │  │               ★ gastro-engine (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ registry  │  │  session  │  │   stats   │  │  payment  │  │   │
//! │  │   │ tables +  │  │  focus +  │  │ counters, │  │ simulated │  │   │
//! │  │   │ orders    │  │  filters  │  │ revenue   │  │ terminal  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   SINGLE WRITER • TOTAL OPERATIONS • SNAPSHOT READS            │   │
//! │  └────────────────────────────┬────────────────────────────────────┘   │
//! │                               │                                         │
//! │  ┌────────────────────────────▼────────────────────────────────────┐   │
//! │  │                  gastro-core (pure logic)                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The [`PosEngine`] facade: intent surface + snapshots
//! - [`registry`] - Table state machine (free → occupied → cleaning → free)
//! - [`session`] - Operator focus and menu filters
//! - [`stats`] - Derived floor statistics
//! - [`payment`] - Simulated async payment terminal
//!
//! ## Failure Philosophy
//! Runtime intents never panic and almost never error: unknown ids and
//! stale indices are logged no-ops, because the frontend may dispatch
//! against a snapshot that is already outdated. The single typed rejection
//! is starting a new order on a table that already has one.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod payment;
pub mod registry;
pub mod session;
pub mod stats;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::{PosEngine, Snapshot};
pub use payment::{PaymentProcessor, PaymentReceipt};
pub use registry::TableRegistry;
pub use session::{CategoryFilter, Session};
pub use stats::{format_order_duration, TableStats};
