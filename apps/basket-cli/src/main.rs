//! # basket
//!
//! Command line front end for basket-core.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CliConfig::load() (env)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  init_tracing() ──► stderr                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load_pricing(--config | BASKET_CONFIG | built-in)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  demo | price | catalogue ──► stdout                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Examples
//! ```bash
//! basket                           # same as `basket demo`
//! basket price R01 R01 B01
//! basket price R01 R01 --json
//! basket catalogue --config shop.json
//! RUST_LOG=basket_core=debug basket price R01 R01
//! ```

mod cli;
mod commands;
mod config;
mod error;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(e) => {
            CliError::from(e).report(&mut io::stderr());
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.log_json);

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.report(&mut io::stderr());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &CliConfig) -> CliResult<()> {
    let pricing_path = cli.config.as_deref().or(config.pricing_path.as_deref());
    let pricing = commands::load_pricing(pricing_path)?;
    info!(
        products = pricing.catalogue().len(),
        offers = pricing.offers().len(),
        "pricing ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command_or_default() {
        Commands::Demo => commands::demo(&pricing, &mut out),
        Commands::Price(args) => commands::price(&pricing, args, &mut out),
        Commands::Catalogue => commands::catalogue(&pricing, &mut out),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=basket_core=trace` - Show delivery lookups
/// - Default: warnings only, so stdout/stderr stay quiet for scripts
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
