//! # Commands
//!
//! One function per subcommand. Each writes to a caller-supplied writer so
//! tests can capture the output.

use std::fs;
use std::io::Write;
use std::path::Path;

use basket_core::{Pricing, PricingConfig};
use tracing::{info, warn};

use crate::cli::PriceArgs;
use crate::error::{CliError, CliResult};

/// Reference baskets and their expected totals under the built-in pricing.
pub const DEMO_BASKETS: &[(&[&str], &str)] = &[
    (&["B01", "G01"], "37.85"),
    (&["R01", "R01"], "54.37"),
    (&["R01", "G01"], "60.85"),
    (&["B01", "B01", "R01", "R01", "R01"], "98.27"),
];

/// Reads and builds the pricing setup, or the built-in one when `path` is `None`.
pub fn load_pricing(path: Option<&Path>) -> CliResult<Pricing> {
    let config = match path {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), "loaded pricing configuration");
            PricingConfig::from_json(&json)?
        }
        None => PricingConfig::default(),
    };
    Ok(config.build()?)
}

/// `basket demo`
pub fn demo(pricing: &Pricing, out: &mut impl Write) -> CliResult<()> {
    let mut failed = 0;

    for (codes, expected) in DEMO_BASKETS {
        let mut basket = pricing.basket();
        for code in codes.iter() {
            basket.add(code)?;
        }
        let total = basket.total();

        if total != *expected {
            failed += 1;
            warn!(basket = %codes.join(","), %total, %expected, "demo basket mismatch");
        }
        writeln!(out, "{} => ${} (Expected ${})", codes.join(", "), total, expected)?;
    }

    if failed > 0 {
        return Err(CliError::ScenarioMismatch {
            failed,
            total: DEMO_BASKETS.len(),
        });
    }
    Ok(())
}

/// `basket price <CODE>...`
pub fn price(pricing: &Pricing, args: &PriceArgs, out: &mut impl Write) -> CliResult<()> {
    let breakdown = pricing.price(&args.codes)?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &breakdown)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", breakdown.total.to_fixed_string())?;
    }
    Ok(())
}

/// `basket catalogue`
pub fn catalogue(pricing: &Pricing, out: &mut impl Write) -> CliResult<()> {
    writeln!(out, "Products:")?;
    for product in pricing.catalogue().products() {
        writeln!(
            out,
            "  {:<8} {:<24} {:>10}",
            product.code(),
            product.name(),
            product.price().to_string()
        )?;
    }

    writeln!(out, "Delivery:")?;
    for tier in pricing.delivery_rule().tiers() {
        writeln!(out, "  from {:<10} {}", tier.threshold.to_string(), tier.cost)?;
    }

    writeln!(out, "Offers:")?;
    if pricing.offers().is_empty() {
        writeln!(out, "  (none)")?;
    }
    for offer in pricing.offers() {
        writeln!(out, "  {}", offer.name())?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
