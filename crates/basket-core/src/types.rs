//! # Domain Types
//!
//! Value types shared across the pricing pipeline.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ProductEntry   │   │  DeliveryTier   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code (R01)     │   │  raw config row │   │  threshold      │       │
//! │  │  name           │   │  → Product::new │   │  cost           │       │
//! │  │  price (Money)  │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Product` is only ever built through [`Product::new`], so every product
//! in a catalogue has a non-empty code and a non-negative price. Codes and
//! names are otherwise free-form text.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_code, validate_price};

// =============================================================================
// Product
// =============================================================================

/// A product available for sale. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    code: String,
    name: String,
    price: Money,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Errors
    /// `CoreError::InvalidProduct` when the price is negative (or above
    /// [`crate::validation::MAX_AMOUNT_CENTS`]) or the code is empty.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{Money, Product};
    ///
    /// let red = Product::new("R01", "Red Widget", Money::from_cents(3295)).unwrap();
    /// assert_eq!(red.code(), "R01");
    ///
    /// assert!(Product::new("R01", "Red Widget", Money::from_cents(-1)).is_err());
    /// ```
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Money) -> CoreResult<Self> {
        let code = code.into();
        let name = name.into();

        let checked = validate_code(&code).and_then(|_| validate_price(price));
        if let Err(e) = checked {
            return Err(invalid_product(code, e));
        }

        Ok(Product { code, name, price })
    }

    /// Business identifier, e.g. `R01`.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

fn invalid_product(code: String, err: ValidationError) -> CoreError {
    CoreError::InvalidProduct {
        code,
        reason: err.to_string(),
    }
}

// =============================================================================
// Product Entry
// =============================================================================

/// An unvalidated product row as it appears in a pricing configuration.
///
/// ```json
/// { "code": "R01", "name": "Red Widget", "price": "32.95" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub code: String,
    pub name: String,
    pub price: Money,
}

impl ProductEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        ProductEntry {
            code: code.into(),
            name: name.into(),
            price,
        }
    }
}

impl TryFrom<ProductEntry> for Product {
    type Error = CoreError;

    fn try_from(entry: ProductEntry) -> CoreResult<Self> {
        Product::new(entry.code, entry.name, entry.price)
    }
}

impl From<&Product> for ProductEntry {
    fn from(product: &Product) -> Self {
        ProductEntry::new(product.code(), product.name(), product.price())
    }
}

// =============================================================================
// Delivery Tier
// =============================================================================

/// One step of a delivery charge schedule.
///
/// `cost` is charged while the discounted subtotal is below the *next*
/// tier's threshold. See [`crate::delivery::DeliveryRule::calculate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryTier {
    pub threshold: Money,
    pub cost: Money,
}

impl DeliveryTier {
    #[inline]
    pub const fn new(threshold: Money, cost: Money) -> Self {
        DeliveryTier { threshold, cost }
    }
}

impl From<(Money, Money)> for DeliveryTier {
    fn from((threshold, cost): (Money, Money)) -> Self {
        DeliveryTier::new(threshold, cost)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
