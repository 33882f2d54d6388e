//! # Validation Module
//!
//! Input validation for loader-supplied catalog and seed data.
//!
//! The engine itself never validates at intent time (stale references are
//! tolerated as no-ops); these checks run once, at the seeding boundary,
//! before anything enters the registry.
//!
//! ## Usage
//! ```rust
//! use gastro_core::validation::{validate_menu_item_name, validate_guest_count};
//!
//! validate_menu_item_name("Wiener Schnitzel").unwrap();
//! validate_guest_count(4).unwrap();
//! ```

use crate::error::ValidationError;
use crate::MAX_LINE_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog item name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_menu_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates an entity id (table or catalog id).
///
/// ## Rules
/// - Must not be empty
/// - Should contain only alphanumeric characters, hyphens, underscores
pub fn validate_entity_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0); a non-positive quantity never enters an order,
///   it removes the line instead
/// - Must not exceed MAX_LINE_QUANTITY
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a gross price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (complimentary items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a seated guest count.
///
/// ## Rules
/// - At most 99 guests on one table; 0 is valid (a free table)
pub fn validate_guest_count(guests: u32) -> ValidationResult<()> {
    if guests > 99 {
        return Err(ValidationError::OutOfRange {
            field: "guests".to_string(),
            min: 0,
            max: 99,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_menu_item_name() {
        assert!(validate_menu_item_name("Wiener Schnitzel").is_ok());
        assert!(validate_menu_item_name("").is_err());
        assert!(validate_menu_item_name("   ").is_err());
        assert!(validate_menu_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_entity_id() {
        assert!(validate_entity_id("TABLE_01").is_ok());
        assert!(validate_entity_id("DRINK-BEER-05").is_ok());
        assert!(validate_entity_id("").is_err());
        assert!(validate_entity_id("has space").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1890).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_guest_count() {
        assert!(validate_guest_count(0).is_ok());
        assert!(validate_guest_count(12).is_ok());
        assert!(validate_guest_count(100).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(0).is_ok());
        assert!(validate_tax_rate_bps(700).is_ok());
        assert!(validate_tax_rate_bps(10000).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }
}
