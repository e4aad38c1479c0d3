//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  basket-core errors (this file)                                        │
//! │  ├── CoreError        - Pricing domain errors                          │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  basket-cli errors (app crate)                                         │
//! │  ├── ConfigError      - Bad environment configuration                  │
//! │  └── CliError         - What the terminal sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr + exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (code, threshold, etc.)
//! 3. Errors are enum variants, never String
//! 4. Nothing in this crate panics on bad input

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product code is not in the catalogue.
    ///
    /// ## When This Occurs
    /// - `Catalogue::find("ZZ99")`
    /// - `Basket::add("ZZ99")`, in which case the basket is left untouched
    #[error("Unknown product code: {0}")]
    UnknownProductCode(String),

    /// A product could not be constructed.
    ///
    /// ## When This Occurs
    /// - Empty code
    /// - Negative price, or a price above the accepted ceiling
    #[error("Invalid product {code}: {reason}")]
    InvalidProduct { code: String, reason: String },

    /// Delivery tiers are inconsistent.
    ///
    /// ## When This Occurs
    /// - Two tiers share a threshold
    /// - A threshold or a cost is negative or above the accepted ceiling
    #[error("Invalid delivery rule: {0}")]
    InvalidDeliveryRule(String),

    /// A pricing configuration document could not be read.
    #[error("Invalid pricing configuration: {0}")]
    InvalidConfig(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the checks in [`crate::validation`] before a value is accepted
/// into a catalogue or delivery rule.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Amount is above the accepted ceiling.
    #[error("{field} must not exceed {max}")]
    TooLarge { field: String, max: Money },

    /// Amount must not be below zero.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. a non-decimal amount).
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownProductCode("ZZ99".to_string());
        assert_eq!(err.to_string(), "Unknown product code: ZZ99");

        let err = CoreError::InvalidProduct {
            code: "R01".to_string(),
            reason: "price must not be negative".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid product R01: price must not be negative"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "code".to_string(),
        };
        assert_eq!(err.to_string(), "code is required");

        let err = ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");

        let err = ValidationError::TooLarge {
            field: "cost".to_string(),
            max: Money::from_cents(100_000),
        };
        assert_eq!(err.to_string(), "cost must not exceed $1000.00");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "code".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
