//! # Validation Module
//!
//! Input checks applied before a value enters a catalogue or a delivery rule.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Product::new(code, name, price)                                       │
//! │  ├── validate_code          → non-empty (any other string is fine)     │
//! │  └── validate_price         → 0 ≤ price ≤ MAX_AMOUNT                   │
//! │                                                                         │
//! │  DeliveryRule::new(tiers)                                              │
//! │  └── validate_delivery_amount → 0 ≤ threshold, cost ≤ MAX_AMOUNT       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The upper bound keeps every sum a basket can realistically build far
//! inside `Decimal`'s 96-bit range, so pricing arithmetic cannot overflow.
//!
//! ## Usage
//! ```rust
//! use basket_core::money::Money;
//! use basket_core::validation::{validate_code, validate_price};
//!
//! assert!(validate_code("R.01 café#1").is_ok());
//! assert!(validate_price(Money::from_cents(-1)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Largest accepted price, threshold or delivery cost, in cents
/// (1,000,000,000.00).
pub const MAX_AMOUNT_CENTS: i64 = 100_000_000_000;

/// Largest accepted price, threshold or delivery cost.
pub fn max_amount() -> Money {
    Money::from_cents(MAX_AMOUNT_CENTS)
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product code.
///
/// Only the empty string is rejected; codes are otherwise opaque and matched
/// exactly, with no trimming or case folding.
///
/// ## Example
/// ```rust
/// use basket_core::validation::validate_code;
///
/// assert!(validate_code("B01").is_ok());
/// assert!(validate_code("SKU 1").is_ok());
/// assert!(validate_code("").is_err());
/// ```
pub fn validate_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates a product price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    bounded("price", price)
}

/// Validates a delivery tier threshold or cost.
pub fn validate_delivery_amount(field: &str, amount: Money) -> ValidationResult<()> {
    bounded(field, amount)
}

fn bounded(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    let max = max_amount();
    if amount > max {
        return Err(ValidationError::TooLarge {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
