//! # Pricing Configuration
//!
//! Describes a complete pricing setup (products, delivery tiers, offers) as
//! data, and turns it into a validated [`Pricing`] bundle.
//!
//! ## Configuration File Format
//! ```json
//! {
//!   "products": [
//!     { "code": "R01", "name": "Red Widget",   "price": "32.95" },
//!     { "code": "G01", "name": "Green Widget", "price": "24.95" },
//!     { "code": "B01", "name": "Blue Widget",  "price": "7.95" }
//!   ],
//!   "delivery": [
//!     { "threshold": "0",  "cost": "4.95" },
//!     { "threshold": "50", "cost": "2.95" },
//!     { "threshold": "90", "cost": "0" }
//!   ],
//!   "offers": [{ "kind": "red_widget_half_price" }]
//! }
//! ```
//!
//! Amounts must be JSON strings so they never pass through a float; a bare
//! number such as `"price": 32.95` is rejected as `InvalidConfig`. Prices,
//! thresholds and costs above
//! [`MAX_AMOUNT_CENTS`](crate::validation::MAX_AMOUNT_CENTS) fail `build`.
//! This module only parses text; reading the file is the caller's job.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::basket::{Basket, PriceBreakdown};
use crate::catalogue::Catalogue;
use crate::delivery::DeliveryRule;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::offer::Offer;
use crate::types::{DeliveryTier, Product, ProductEntry};

// =============================================================================
// Pricing Config
// =============================================================================

/// Raw, unvalidated pricing setup.
///
/// `Default` is the reference widget shop: three widgets, three delivery
/// tiers and the red widget offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    pub products: Vec<ProductEntry>,
    #[serde(default)]
    pub delivery: Vec<DeliveryTier>,
    #[serde(default)]
    pub offers: Vec<Offer>,
}

impl PricingConfig {
    /// Parses a JSON document.
    ///
    /// ## Errors
    /// `CoreError::InvalidConfig` with the parser's message (including line
    /// and column) when the document is malformed.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::InvalidConfig(e.to_string()))
    }

    /// Serializes back to pretty JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CoreError::InvalidConfig(e.to_string()))
    }

    /// Validates every product and tier and builds the pricing bundle.
    pub fn build(&self) -> CoreResult<Pricing> {
        let products = self
            .products
            .iter()
            .cloned()
            .map(Product::try_from)
            .collect::<CoreResult<Vec<_>>>()?;

        let catalogue = Catalogue::new(products);
        let delivery_rule = DeliveryRule::new(self.delivery.iter().copied())?;

        debug!(
            products = catalogue.len(),
            tiers = delivery_rule.tiers().len(),
            offers = self.offers.len(),
            "pricing configuration built"
        );

        Ok(Pricing {
            catalogue,
            delivery_rule,
            offers: self.offers.clone(),
        })
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            products: vec![
                ProductEntry::new("R01", "Red Widget", Money::from_cents(3295)),
                ProductEntry::new("G01", "Green Widget", Money::from_cents(2495)),
                ProductEntry::new("B01", "Blue Widget", Money::from_cents(795)),
            ],
            delivery: vec![
                DeliveryTier::new(Money::zero(), Money::from_cents(495)),
                DeliveryTier::new(Money::from_cents(5000), Money::from_cents(295)),
                DeliveryTier::new(Money::from_cents(9000), Money::zero()),
            ],
            offers: vec![Offer::RedWidgetHalfPrice],
        }
    }
}

// =============================================================================
// Pricing
// =============================================================================

/// A validated catalogue, delivery rule and offer list.
///
/// Immutable; share it by reference and open one basket per transaction.
///
/// ```rust
/// use basket_core::PricingConfig;
///
/// let pricing = PricingConfig::default().build().unwrap();
/// assert_eq!(pricing.price(["B01", "G01"]).unwrap().total.to_fixed_string(), "37.85");
/// ```
#[derive(Debug, Clone)]
pub struct Pricing {
    catalogue: Catalogue,
    delivery_rule: DeliveryRule,
    offers: Vec<Offer>,
}

impl Pricing {
    pub fn new(catalogue: Catalogue, delivery_rule: DeliveryRule, offers: Vec<Offer>) -> Self {
        Pricing {
            catalogue,
            delivery_rule,
            offers,
        }
    }

    /// Opens an empty basket against this setup.
    pub fn basket(&self) -> Basket<'_> {
        Basket::new(&self.catalogue, &self.delivery_rule, &self.offers)
    }

    /// Prices a whole list of codes in one go.
    ///
    /// Stops at the first unknown code.
    pub fn price<I, S>(&self, codes: I) -> CoreResult<PriceBreakdown>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut basket = self.basket();
        for code in codes {
            basket.add(code.as_ref())?;
        }
        Ok(basket.breakdown())
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn delivery_rule(&self) -> &DeliveryRule {
        &self.delivery_rule
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SHOP_JSON: &str = r#"{
        "products": [
            { "code": "R01", "name": "Red Widget",   "price": "32.95" },
            { "code": "G01", "name": "Green Widget", "price": "24.95" },
            { "code": "B01", "name": "Blue Widget",  "price": "7.95" }
        ],
        "delivery": [
            { "threshold": "90", "cost": "0" },
            { "threshold": "0",  "cost": "4.95" },
            { "threshold": "50", "cost": "2.95" }
        ],
        "offers": [{ "kind": "red_widget_half_price" }]
    }"#;

    #[test]
    fn test_json_matches_default_behaviour() {
        let from_json = PricingConfig::from_json(SHOP_JSON).unwrap().build().unwrap();
        let from_default = PricingConfig::default().build().unwrap();

        for codes in [
            vec!["B01", "G01"],
            vec!["R01", "R01"],
            vec!["R01", "G01"],
            vec!["B01", "B01", "R01", "R01", "R01"],
        ] {
            assert_eq!(
                from_json.price(&codes).unwrap(),
                from_default.price(&codes).unwrap()
            );
        }
    }

    #[test]
    fn test_default_reference_totals() {
        let pricing = PricingConfig::default().build().unwrap();
        let total = |codes: &[&str]| pricing.price(codes).unwrap().total.to_fixed_string();

        assert_eq!(total(&["B01", "G01"]), "37.85");
        assert_eq!(total(&["R01", "R01"]), "54.37");
        assert_eq!(total(&["R01", "G01"]), "60.85");
        assert_eq!(total(&["B01", "B01", "R01", "R01", "R01"]), "98.27");
    }

    #[test]
    fn test_price_stops_at_unknown_code() {
        let pricing = PricingConfig::default().build().unwrap();
        assert!(matches!(
            pricing.price(["B01", "ZZ99"]),
            Err(CoreError::UnknownProductCode(code)) if code == "ZZ99"
        ));
    }

    #[test]
    fn test_malformed_json_is_invalid_config() {
        assert!(matches!(
            PricingConfig::from_json("{ not json"),
            Err(CoreError::InvalidConfig(_))
        ));
        assert!(matches!(
            PricingConfig::from_json(r#"{"products": [], "extra": 1}"#),
            Err(CoreError::InvalidConfig(_))
        ));
        assert!(matches!(
            PricingConfig::from_json(r#"{"products": [{"code":"R01","name":"Red","price":"abc"}]}"#),
            Err(CoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_optional_sections_default_to_empty() {
        let config =
            PricingConfig::from_json(r#"{"products":[{"code":"X1","name":"X","price":"1.00"}]}"#)
                .unwrap();
        assert!(config.delivery.is_empty());
        assert!(config.offers.is_empty());

        let pricing = config.build().unwrap();
        assert_eq!(pricing.price(["X1"]).unwrap().total.to_fixed_string(), "1.00");
    }

    #[test]
    fn test_build_rejects_bad_entries() {
        let mut config = PricingConfig::default();
        config.products.push(ProductEntry::new("N01", "Negative", Money::from_cents(-1)));
        assert!(matches!(config.build(), Err(CoreError::InvalidProduct { .. })));

        let mut config = PricingConfig::default();
        config
            .delivery
            .push(DeliveryTier::new(Money::from_cents(5000), Money::from_cents(100)));
        assert!(matches!(config.build(), Err(CoreError::InvalidDeliveryRule(_))));
    }

    #[test]
    fn test_numeric_amounts_are_invalid_config() {
        let err = PricingConfig::from_json(
            r#"{"products": [{"code":"B01","name":"Blue Widget","price":32.95}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));

        let err = PricingConfig::from_json(
            r#"{"products": [], "delivery": [{"threshold": 0, "cost": "4.95"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn test_build_rejects_amounts_above_ceiling() {
        let huge = r#"{"products": [{"code":"R01","name":"Red","price":"79228162514264337593543950335"}]}"#;
        let config = PricingConfig::from_json(huge).unwrap();
        assert!(matches!(config.build(), Err(CoreError::InvalidProduct { .. })));

        let huge_cost = r#"{"products": [], "delivery": [{"threshold":"0","cost":"2000000000"}]}"#;
        let config = PricingConfig::from_json(huge_cost).unwrap();
        assert!(matches!(config.build(), Err(CoreError::InvalidDeliveryRule(_))));
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = PricingConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(PricingConfig::from_json(&json).unwrap(), config);
    }
}
