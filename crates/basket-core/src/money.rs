//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Integer cents are not enough for offers either:                        │
//! │    32.95 / 2 = 16.475 → needs the third digit BEFORE rounding          │
//! │                                                                         │
//! │  OUR SOLUTION: Exact decimals, rounded once at the cent                 │
//! │    16.475 → round half up → 16.48                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use basket_core::money::Money;
//!
//! let price: Money = "32.95".parse().unwrap();
//! let half = price.half().round_half_up();
//! assert_eq!(half.to_fixed_string(), "16.48");
//!
//! let total = price + Money::from_cents(495);
//! assert_eq!(total.to_fixed_string(), "37.90");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::MONEY_SCALE;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value backed by an exact decimal.
///
/// ## Design Decisions
/// - **Decimal, not i64 cents**: intermediate values such as a unit
///   half-price keep their sub-cent digits until explicitly rounded
/// - **Signed**: a pathological discount can push a subtotal below zero
/// - **Copy**: `Decimal` is a 16-byte value type, so `Money` is too
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price ──► Basket subtotal ──► − offer discounts               │
/// │                                              │                          │
/// │                                              ▼                          │
/// │                           DeliveryRule.calculate(discounted subtotal)   │
/// │                                              │                          │
/// │                                              ▼                          │
/// │                             round_half_up() ──► "98.27"                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let price = Money::from_cents(3295);
    /// assert_eq!(price.to_fixed_string(), "32.95");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, MONEY_SCALE))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_negative()
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Exact half of this amount. No rounding is applied.
    ///
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let half = Money::from_cents(3295).half();
    /// assert_eq!(half, "16.475".parse::<Money>().unwrap());
    /// ```
    #[inline]
    pub fn half(&self) -> Self {
        Money(self.0 / Decimal::from(2))
    }

    /// Rounds to whole cents, half up.
    ///
    /// ## Rounding Rule
    /// ```text
    /// 16.475 → 16.48    (midpoint goes up)
    /// 16.474 → 16.47
    /// -5.555 → -5.56    (midpoint goes away from zero)
    /// ```
    ///
    /// Negative amounts mirror the positive ones, which is what "half up"
    /// means for a price.
    pub fn round_half_up(&self) -> Self {
        Money(
            self.0
                .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Formats as a plain fixed-point string with exactly two fractional
    /// digits: no currency symbol, no grouping separators.
    ///
    /// The value is rounded half up first, so `16.475` renders as `"16.48"`.
    ///
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(3785).to_fixed_string(), "37.85");
    /// assert_eq!(Money::zero().to_fixed_string(), "0.00");
    /// assert_eq!(Money::from_cents(123456789).to_fixed_string(), "1234567.89");
    /// ```
    pub fn to_fixed_string(&self) -> String {
        let rounded = self.round_half_up();
        let mut amount = if rounded.is_zero() {
            Decimal::ZERO
        } else {
            rounded.0
        };
        amount.rescale(MONEY_SCALE);
        amount.to_string()
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a decimal literal such as `"32.95"` or `"4"`.
///
/// Exponent notation and anything that is not a plain decimal is rejected.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str_exact(trimmed)
            .map(Money)
            .map_err(|e| ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: format!("'{trimmed}' is not a decimal amount ({e})"),
            })
    }
}

// =============================================================================
// Serde
// =============================================================================

/// Money deserializes from a decimal string only (`"32.95"`). A bare JSON
/// number is rejected so no amount ever passes through `f64`.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// Serializes as the rounded two-digit string, e.g. `"0.00"` or `"98.27"`.
///
/// Use with `#[serde(serialize_with = "crate::money::serialize_fixed")]` on
/// result fields that must always show cents.
pub fn serialize_fixed<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&money.to_fixed_string())
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money with a dollar sign, e.g. `$32.95` or `-$5.50`.
///
/// ## Note
/// For the bare two-digit form use [`Money::to_fixed_string`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${}", sign, self.abs().to_fixed_string())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a count (quantities, pairs).
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

impl Mul<usize> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: usize) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
