//! # Offers
//!
//! Promotional discount rules. Each offer looks at the basket items and
//! reports how much to take off the subtotal; offers never see each other
//! and their discounts are simply added up by the basket.
//!
//! ## Adding an Offer Kind
//! Add a variant to [`Offer`] and a match arm in [`Offer::apply`]. The
//! serde tag (`kind`) is the snake_case variant name.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Product;
use crate::RED_WIDGET_CODE;

/// A discount strategy.
///
/// ```json
/// [{ "kind": "red_widget_half_price" }, { "kind": "none" }]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Offer {
    /// No discount.
    #[default]
    None,
    /// Buy one red widget, get the second half price.
    RedWidgetHalfPrice,
}

impl Offer {
    /// Discount this offer grants on `items`. Never negative.
    pub fn apply(&self, items: &[&Product]) -> Money {
        match self {
            Offer::None => Money::zero(),
            Offer::RedWidgetHalfPrice => second_half_price(RED_WIDGET_CODE, items),
        }
    }

    /// Short human label for logs and listings.
    pub fn name(&self) -> &'static str {
        match self {
            Offer::None => "no offer",
            Offer::RedWidgetHalfPrice => "red widget: buy one, second half price",
        }
    }
}

/// Every second item with `code` is half price.
///
/// The half price comes from the first matching item, rounded half up to the
/// cent once, and is then multiplied by the number of complete pairs. An odd
/// item left over gets nothing.
///
/// ```text
/// 3 × R01 @ 32.95  →  pairs = 1,  half = round(16.475) = 16.48  →  16.48
/// 4 × R01 @ 32.95  →  pairs = 2                                 →  32.96
/// ```
fn second_half_price(code: &str, items: &[&Product]) -> Money {
    let mut matching = items.iter().filter(|item| item.code() == code);

    let Some(first) = matching.next() else {
        return Money::zero();
    };
    let count = 1 + matching.count();

    let pairs = count / 2;
    let half_price = first.price().half().round_half_up();
    half_price * pairs
}

// =============================================================================
// Unit Tests
// =============================================================================
