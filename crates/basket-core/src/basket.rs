//! # Basket
//!
//! A shopping basket and its pricing pipeline.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Basket::breakdown()                             │
//! │                                                                         │
//! │  items ──► Σ price ────────────────────────► subtotal                  │
//! │                                                  │                      │
//! │  offers ─► Σ offer.apply(items) ──────────► − discount                 │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │                                        discounted subtotal              │
//! │                                                  │                      │
//! │  delivery_rule.calculate(discounted) ─────► + delivery                 │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │                                   round half up ──► total "98.27"      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use basket_core::{Basket, Catalogue, DeliveryRule, Money, Offer, Product};
//!
//! let catalogue = Catalogue::new(vec![
//!     Product::new("R01", "Red Widget", Money::from_cents(3295)).unwrap(),
//! ]);
//! let delivery = DeliveryRule::from_pairs([
//!     (Money::zero(), Money::from_cents(495)),
//!     (Money::from_cents(5000), Money::from_cents(295)),
//!     (Money::from_cents(9000), Money::zero()),
//! ])
//! .unwrap();
//! let offers = [Offer::RedWidgetHalfPrice];
//!
//! let mut basket = Basket::new(&catalogue, &delivery, &offers);
//! basket.add("R01").unwrap();
//! basket.add("R01").unwrap();
//! assert_eq!(basket.total(), "54.37");
//! ```

use serde::Serialize;
use tracing::debug;

use crate::catalogue::Catalogue;
use crate::delivery::DeliveryRule;
use crate::error::CoreResult;
use crate::money::{serialize_fixed, Money};
use crate::offer::Offer;
use crate::types::Product;

// =============================================================================
// Price Breakdown
// =============================================================================

/// Every intermediate value of one pricing run.
///
/// Only `total` is rounded; the other fields are exact. Serialized, every
/// field is a two-digit string such as `"0.00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    #[serde(serialize_with = "serialize_fixed")]
    pub subtotal: Money,
    #[serde(serialize_with = "serialize_fixed")]
    pub discount: Money,
    #[serde(serialize_with = "serialize_fixed")]
    pub discounted_subtotal: Money,
    #[serde(serialize_with = "serialize_fixed")]
    pub delivery: Money,
    #[serde(serialize_with = "serialize_fixed")]
    pub total: Money,
}

// =============================================================================
// Basket
// =============================================================================

/// A shopping basket.
///
/// ## Invariants
/// - Items keep insertion order; the same product may appear many times
/// - Items are only ever appended, and only after a successful lookup
/// - Pricing is a pure function of the items: calling [`Basket::total`]
///   twice gives the same answer, adding more items afterwards just changes
///   the next answer
#[derive(Debug, Clone)]
pub struct Basket<'a> {
    catalogue: &'a Catalogue,
    delivery_rule: &'a DeliveryRule,
    offers: &'a [Offer],
    items: Vec<&'a Product>,
}

impl<'a> Basket<'a> {
    /// Creates an empty basket. Pass `&[]` for no offers.
    pub fn new(catalogue: &'a Catalogue, delivery_rule: &'a DeliveryRule, offers: &'a [Offer]) -> Self {
        Basket {
            catalogue,
            delivery_rule,
            offers,
            items: Vec::new(),
        }
    }

    /// Adds one unit of the product with `code`.
    ///
    /// ## Errors
    /// `CoreError::UnknownProductCode` if the catalogue has no such code.
    /// The basket is unchanged in that case.
    pub fn add(&mut self, code: &str) -> CoreResult<()> {
        let product = self.catalogue.find(code)?;
        self.items.push(product);
        debug!(code, items = self.items.len(), "added to basket");
        Ok(())
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[&'a Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of item prices before any discount.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|item| item.price()).sum()
    }

    /// Sum of every offer's discount.
    pub fn discount(&self) -> Money {
        self.offers
            .iter()
            .map(|offer| offer.apply(&self.items))
            .sum()
    }

    /// Runs the full pricing pipeline.
    ///
    /// The discounted subtotal is not clamped: a discount larger than the
    /// subtotal yields a negative base for the delivery lookup.
    pub fn breakdown(&self) -> PriceBreakdown {
        let subtotal = self.subtotal();
        let discount = self.discount();
        let discounted_subtotal = subtotal - discount;
        let delivery = self.delivery_rule.calculate(discounted_subtotal);
        let total = (discounted_subtotal + delivery).round_half_up();

        debug!(
            items = self.items.len(),
            %subtotal,
            %discount,
            %delivery,
            %total,
            "priced basket"
        );

        PriceBreakdown {
            subtotal,
            discount,
            discounted_subtotal,
            delivery,
            total,
        }
    }

    /// Grand total as a two-decimal string, e.g. `"98.27"`.
    pub fn total(&self) -> String {
        self.breakdown().total.to_fixed_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
