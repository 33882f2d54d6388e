//! # Error Types
//!
//! Domain-specific error types for gastro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gastro-core errors (this file)                                        │
//! │  ├── CoreError        - Domain errors + state-machine rejections       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  gastro-engine reuses CoreError; it defines no error type of its own.  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → Frontend                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (table id, order id, etc.)
//! 3. Errors are enum variants, never String
//! 4. Most registry operations are total and never error at all; only the
//!    few deliberate rejections (and catalog-loading validation) surface here

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Table cannot be found in the registry.
    ///
    /// ## When This Occurs
    /// - A loader refers to a table id that was never seeded
    ///
    /// Note: runtime intents on an unknown table id are a silent no-op,
    /// not this error. The UI may race against stale snapshots and must
    /// never crash on them.
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Table already has a live active order.
    ///
    /// ## When This Occurs
    /// - Starting a new order on a table whose status is `Occupied`
    ///   and whose current order is still `Active`
    #[error("Table {table_id} already has active order {order_id}")]
    TableOccupied { table_id: String, order_id: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when loader-supplied data doesn't meet requirements.
/// Used for early validation before any of it enters the registry.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid id, invalid rate).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
