//! # Catalogue
//!
//! Static lookup table from product code to [`Product`].
//!
//! Built once, read many times. Baskets borrow products straight out of the
//! catalogue, so the catalogue must outlive every basket that uses it.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{CoreError, CoreResult};
use crate::types::Product;

/// Products keyed by code.
///
/// ## Invariants
/// - Codes are unique. When the input holds the same code twice the later
///   product replaces the earlier one, and the replacement is logged.
/// - Immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    products: HashMap<String, Product>,
}

impl Catalogue {
    /// Builds a catalogue from a list of products (last write wins).
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let mut map = HashMap::new();
        for product in products {
            let code = product.code().to_string();
            if let Some(previous) = map.insert(code, product) {
                warn!(
                    code = previous.code(),
                    replaced_name = previous.name(),
                    "duplicate product code in catalogue, keeping the later entry"
                );
            }
        }
        Catalogue { products: map }
    }

    /// Looks up a product by its exact code.
    ///
    /// ## Errors
    /// `CoreError::UnknownProductCode` carrying the code when it is absent.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{Catalogue, CoreError, Money, Product};
    ///
    /// let catalogue = Catalogue::new(vec![
    ///     Product::new("B01", "Blue Widget", Money::from_cents(795)).unwrap(),
    /// ]);
    /// assert_eq!(catalogue.find("B01").unwrap().name(), "Blue Widget");
    /// assert!(matches!(catalogue.find("ZZ99"), Err(CoreError::UnknownProductCode(c)) if c == "ZZ99"));
    /// ```
    pub fn find(&self, code: &str) -> CoreResult<&Product> {
        self.products
            .get(code)
            .ok_or_else(|| CoreError::UnknownProductCode(code.to_string()))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.products.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products, ordered by code for stable listings.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        let mut products: Vec<&Product> = self.products.values().collect();
        products.sort_by(|a, b| a.code().cmp(b.code()));
        products.into_iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn widgets() -> Catalogue {
        Catalogue::new(vec![
            Product::new("R01", "Red Widget", Money::from_cents(3295)).unwrap(),
            Product::new("G01", "Green Widget", Money::from_cents(2495)).unwrap(),
            Product::new("B01", "Blue Widget", Money::from_cents(795)).unwrap(),
        ])
    }

    #[test]
    fn test_find_known_code() {
        let catalogue = widgets();
        let product = catalogue.find("G01").unwrap();
        assert_eq!(product.name(), "Green Widget");
        assert_eq!(product.price(), Money::from_cents(2495));
    }

    #[test]
    fn test_find_unknown_code() {
        let catalogue = widgets();
        match catalogue.find("ZZ99") {
            Err(CoreError::UnknownProductCode(code)) => assert_eq!(code, "ZZ99"),
            other => panic!("expected UnknownProductCode, got {other:?}"),
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(widgets().find("r01").is_err());
    }

    #[test]
    fn test_duplicate_code_last_write_wins() {
        let catalogue = Catalogue::new(vec![
            Product::new("R01", "Old Red", Money::from_cents(1000)).unwrap(),
            Product::new("R01", "New Red", Money::from_cents(2000)).unwrap(),
        ]);
        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue.find("R01").unwrap().name(), "New Red");
    }

    #[test]
    fn test_products_sorted_by_code() {
        let catalogue = widgets();
        let codes: Vec<&str> = catalogue.products().map(|p| p.code()).collect();
        assert_eq!(codes, vec!["B01", "G01", "R01"]);
    }

    #[test]
    fn test_empty_catalogue() {
        let catalogue = Catalogue::default();
        assert!(catalogue.is_empty());
        assert!(!catalogue.contains("R01"));
    }
}
