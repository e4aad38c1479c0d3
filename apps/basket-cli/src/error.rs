//! # CLI Error Type
//!
//! Everything that can stop a `basket` command, mapped to a message on
//! stderr and a non-zero exit status by `main`.

use std::io::Write;
use std::path::PathBuf;

use basket_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Cannot read pricing configuration {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Cannot encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// One or more demo baskets did not price to their expected total.
    #[error("{failed} of {total} demo baskets did not match the expected total")]
    ScenarioMismatch { failed: usize, total: usize },
}

impl CliError {
    /// Writes the single `error: ...` line the user sees for a failed run.
    ///
    /// A failure to write (closed stderr) is ignored; the exit status still
    /// reports the error.
    pub fn report(&self, out: &mut impl Write) {
        let _ = writeln!(out, "error: {self}");
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_passes_through() {
        let err: CliError = CoreError::UnknownProductCode("ZZ99".to_string()).into();
        assert_eq!(err.to_string(), "Unknown product code: ZZ99");
    }

    #[test]
    fn test_report_writes_one_line() {
        let err: CliError = CoreError::UnknownProductCode("ZZ99".to_string()).into();
        let mut out = Vec::new();
        err.report(&mut out);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "error: Unknown product code: ZZ99\n");
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_mismatch_message() {
        let err = CliError::ScenarioMismatch { failed: 1, total: 4 };
        assert_eq!(
            err.to_string(),
            "1 of 4 demo baskets did not match the expected total"
        );
    }
}
