//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// basket - price shopping baskets against a catalogue, delivery tiers and offers.
#[derive(Parser, Debug)]
#[command(name = "basket")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON pricing configuration (overrides BASKET_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Defaults to `demo` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Price the reference baskets and compare with their expected totals
    Demo,

    /// Price one basket
    Price(PriceArgs),

    /// List products, delivery tiers and offers
    Catalogue,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct PriceArgs {
    /// Product codes, one per unit (e.g. `R01 R01 B01`)
    #[arg(required = true, value_name = "CODE")]
    pub codes: Vec<String>,

    /// Print the full price breakdown as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn command_or_default(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Demo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_demo() {
        let cli = Cli::try_parse_from(["basket"]).unwrap();
        assert_eq!(cli.command_or_default(), &Commands::Demo);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_price_args() {
        let cli =
            Cli::try_parse_from(["basket", "price", "R01", "R01", "--json", "--config", "shop.json"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("shop.json")));
        match cli.command_or_default() {
            Commands::Price(args) => {
                assert_eq!(args.codes, vec!["R01".to_string(), "R01".to_string()]);
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_price_requires_codes() {
        assert!(Cli::try_parse_from(["basket", "price"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
