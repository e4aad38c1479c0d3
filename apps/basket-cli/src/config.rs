//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command line flags override what is read here.
//!
//! | Variable          | Meaning                                  | Default  |
//! |-------------------|------------------------------------------|----------|
//! | `BASKET_CONFIG`   | Path to a JSON pricing configuration     | built-in |
//! | `BASKET_LOG_JSON` | Emit logs as JSON lines (`true`/`false`) | `false`  |

use std::env;
use std::path::PathBuf;

/// Process-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Pricing configuration file; `None` uses the built-in widget shop.
    pub pricing_path: Option<PathBuf>,

    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pricing_path = match lookup("BASKET_CONFIG") {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue("BASKET_CONFIG".to_string()))
            }
            Some(path) => Some(PathBuf::from(path)),
            None => None,
        };

        let log_json = lookup("BASKET_LOG_JSON")
            .unwrap_or_else(|| "false".to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BASKET_LOG_JSON".to_string()))?;

        Ok(CliConfig {
            pricing_path,
            log_json,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
