//! # Delivery Charges
//!
//! Tiered delivery pricing over a (discounted) subtotal.
//!
//! ## How Tiers Are Read
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tiers: (0, 4.95)  (50, 2.95)  (90, 0.00)                               │
//! │                                                                         │
//! │   subtotal   0 ─────────── 50 ─────────── 90 ─────────────►             │
//! │   charge       4.95          2.95           free                        │
//! │                                                                         │
//! │  A tier's cost applies while subtotal < NEXT tier's threshold.         │
//! │  At or above the highest threshold delivery is free, so the last       │
//! │  tier's own cost is never charged.                                     │
//! │                                                                         │
//! │  Exactly on a boundary (50.00) → next tier (2.95).                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::trace;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::DeliveryTier;
use crate::validation::validate_delivery_amount;

/// A delivery charge schedule, sorted ascending by threshold.
///
/// ## Invariants
/// - Thresholds are strictly increasing
/// - Thresholds and costs are non-negative and within
///   [`MAX_AMOUNT_CENTS`](crate::validation::MAX_AMOUNT_CENTS)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryRule {
    tiers: Vec<DeliveryTier>,
}

impl DeliveryRule {
    /// Builds a rule from tiers in any order.
    ///
    /// An empty list is accepted and always yields free delivery.
    ///
    /// ## Errors
    /// `CoreError::InvalidDeliveryRule` for a duplicated threshold or a
    /// negative threshold or cost.
    pub fn new(tiers: impl IntoIterator<Item = DeliveryTier>) -> CoreResult<Self> {
        let mut tiers: Vec<DeliveryTier> = tiers.into_iter().collect();

        for tier in &tiers {
            validate_delivery_amount("threshold", tier.threshold)
                .and_then(|_| validate_delivery_amount("cost", tier.cost))
                .map_err(|e| CoreError::InvalidDeliveryRule(e.to_string()))?;
        }

        tiers.sort_by_key(|tier| tier.threshold);

        if let Some(pair) = tiers
            .windows(2)
            .find(|pair| pair[0].threshold == pair[1].threshold)
        {
            return Err(CoreError::InvalidDeliveryRule(format!(
                "duplicate threshold {}",
                pair[0].threshold
            )));
        }

        Ok(DeliveryRule { tiers })
    }

    /// Convenience constructor from `(threshold, cost)` pairs.
    ///
    /// ```rust
    /// use basket_core::{DeliveryRule, Money};
    ///
    /// let rule = DeliveryRule::from_pairs([
    ///     (Money::from_cents(9000), Money::zero()),
    ///     (Money::zero(), Money::from_cents(495)),
    ///     (Money::from_cents(5000), Money::from_cents(295)),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(rule.calculate(Money::from_cents(3000)), Money::from_cents(495));
    /// assert_eq!(rule.calculate(Money::from_cents(6000)), Money::from_cents(295));
    /// assert_eq!(rule.calculate(Money::from_cents(9500)), Money::zero());
    /// ```
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Money, Money)>) -> CoreResult<Self> {
        Self::new(pairs.into_iter().map(DeliveryTier::from))
    }

    /// Delivery charge for a subtotal.
    ///
    /// Returns the cost of the first tier whose successor's threshold is
    /// strictly greater than `subtotal`, or zero when no such tier exists.
    pub fn calculate(&self, subtotal: Money) -> Money {
        let charge = self
            .tiers
            .windows(2)
            .find(|pair| subtotal < pair[1].threshold)
            .map(|pair| pair[0].cost)
            .unwrap_or_else(Money::zero);

        trace!(%subtotal, %charge, "delivery charge");
        charge
    }

    /// Tiers in ascending threshold order.
    pub fn tiers(&self) -> &[DeliveryTier] {
        &self.tiers
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(amount: rust_decimal::Decimal) -> Money {
        Money::from_decimal(amount)
    }

    fn standard() -> DeliveryRule {
        DeliveryRule::from_pairs([
            (money(dec!(0)), money(dec!(4.95))),
            (money(dec!(50)), money(dec!(2.95))),
            (money(dec!(90)), money(dec!(0))),
        ])
        .unwrap()
    }

    #[test]
    fn test_tier_lookup() {
        let rule = standard();
        assert_eq!(rule.calculate(money(dec!(30))), money(dec!(4.95)));
        assert_eq!(rule.calculate(money(dec!(60))), money(dec!(2.95)));
        assert_eq!(rule.calculate(money(dec!(95))), Money::zero());
    }

    #[test]
    fn test_exact_threshold_uses_next_tier() {
        let rule = standard();
        assert_eq!(rule.calculate(money(dec!(50))), money(dec!(2.95)));
        assert_eq!(rule.calculate(money(dec!(90))), Money::zero());
        assert_eq!(rule.calculate(money(dec!(49.99))), money(dec!(4.95)));
        assert_eq!(rule.calculate(money(dec!(89.99))), money(dec!(2.95)));
    }

    #[test]
    fn test_zero_and_negative_subtotal_use_first_tier() {
        let rule = standard();
        assert_eq!(rule.calculate(Money::zero()), money(dec!(4.95)));
        assert_eq!(rule.calculate(money(dec!(-3))), money(dec!(4.95)));
    }

    #[test]
    fn test_tiers_sorted_on_construction() {
        let rule = DeliveryRule::from_pairs([
            (money(dec!(90)), money(dec!(0))),
            (money(dec!(0)), money(dec!(4.95))),
            (money(dec!(50)), money(dec!(2.95))),
        ])
        .unwrap();
        assert_eq!(rule, standard());
        let thresholds: Vec<Money> = rule.tiers().iter().map(|t| t.threshold).collect();
        assert_eq!(
            thresholds,
            vec![money(dec!(0)), money(dec!(50)), money(dec!(90))]
        );
    }

    #[test]
    fn test_top_tier_cost_never_charged() {
        let rule = DeliveryRule::from_pairs([
            (money(dec!(0)), money(dec!(5))),
            (money(dec!(100)), money(dec!(1))),
        ])
        .unwrap();
        assert_eq!(rule.calculate(money(dec!(99.99))), money(dec!(5)));
        assert_eq!(rule.calculate(money(dec!(150))), Money::zero());
    }

    #[test]
    fn test_empty_and_single_tier_are_free() {
        let empty = DeliveryRule::new(Vec::new()).unwrap();
        assert_eq!(empty.calculate(money(dec!(10))), Money::zero());

        let single = DeliveryRule::from_pairs([(money(dec!(0)), money(dec!(4.95)))]).unwrap();
        assert_eq!(single.calculate(money(dec!(10))), Money::zero());
    }

    #[test]
    fn test_duplicate_threshold_rejected() {
        let err = DeliveryRule::from_pairs([
            (money(dec!(0)), money(dec!(4.95))),
            (money(dec!(50)), money(dec!(2.95))),
            (money(dec!(50.00)), money(dec!(1.95))),
        ])
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidDeliveryRule(_)));
        assert_eq!(
            err.to_string(),
            "Invalid delivery rule: duplicate threshold $50.00"
        );
    }

    #[test]
    fn test_negative_amounts_rejected() {
        assert!(matches!(
            DeliveryRule::from_pairs([(money(dec!(-1)), money(dec!(4.95)))]),
            Err(CoreError::InvalidDeliveryRule(_))
        ));
        assert!(matches!(
            DeliveryRule::from_pairs([(money(dec!(0)), money(dec!(-4.95)))]),
            Err(CoreError::InvalidDeliveryRule(_))
        ));
    }

    #[test]
    fn test_amounts_above_ceiling_rejected() {
        let err = DeliveryRule::from_pairs([
            (money(dec!(0)), money(dec!(4.95))),
            (money(dec!(1000000000.01)), money(dec!(0))),
        ])
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid delivery rule: threshold must not exceed $1000000000.00"
        );

        assert!(DeliveryRule::from_pairs([
            (money(dec!(0)), money(dec!(4.95))),
            (money(dec!(1000000000.00)), money(dec!(0))),
        ])
        .is_ok());
    }
}
