//! # basket-core: Pure Pricing Logic
//!
//! Computes the total cost of a shopping basket from a product catalogue,
//! a tiered delivery-charge schedule and a set of promotional offers.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Basket Pricing Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    basket-cli (apps/basket-cli)                 │   │
//! │  │        env config ──► clap ──► demo / price / catalogue        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ basket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  money   │ │catalogue │ │ delivery │ │  offer   │          │   │
//! │  │   │  Money   │ │ Product  │ │  tiers   │ │ discount │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                       ┌──────────┐ ┌──────────┐                │   │
//! │  │                       │  basket  │ │  config  │                │   │
//! │  │                       │ pipeline │ │  Pricing │                │   │
//! │  │                       └──────────┘ └──────────┘                │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FLOATS • PURE FUNCTIONS                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Exact decimal `Money` with half-up cent rounding
//! - [`types`] - `Product`, `ProductEntry`, `DeliveryTier`
//! - [`catalogue`] - Code → product lookup
//! - [`delivery`] - Tiered delivery charges
//! - [`offer`] - Discount strategies
//! - [`basket`] - The pricing pipeline
//! - [`config`] - Pricing setup as data
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level checks
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::PricingConfig;
//!
//! let pricing = PricingConfig::default().build().unwrap();
//!
//! let mut basket = pricing.basket();
//! for code in ["B01", "B01", "R01", "R01", "R01"] {
//!     basket.add(code).unwrap();
//! }
//! assert_eq!(basket.total(), "98.27");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod catalogue;
pub mod config;
pub mod delivery;
pub mod error;
pub mod money;
pub mod offer;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::{Basket, PriceBreakdown};
pub use catalogue::Catalogue;
pub use config::{Pricing, PricingConfig};
pub use delivery::DeliveryRule;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use offer::Offer;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Product code the red widget offer applies to.
pub const RED_WIDGET_CODE: &str = "R01";

/// Decimal places of the currency's minor unit.
pub const MONEY_SCALE: u32 = 2;
