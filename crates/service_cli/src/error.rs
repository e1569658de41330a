//! CLI error types.

use std::path::PathBuf;

use pricer_core::types::{CurrencyError, PricingError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `option-sweep`.
#[derive(Debug, Error)]
pub enum CliError {
    /// Pricing request rejected or failed.
    #[error("Pricing failed: {0}")]
    Pricing(#[from] PricingError),

    /// Configuration file, environment, or flag problem.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Unknown currency code or invalid pair.
    #[error("Currency error: {0}")]
    Currency(#[from] CurrencyError),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Output file could not be written.
    #[error("Cannot write {path}: {source}")]
    Output {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Standard output or file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_is_wrapped() {
        let err: CliError = PricingError::InvalidModel("arbitrage".to_string()).into();
        assert_eq!(err.to_string(), "Pricing failed: Invalid model: arbitrage");
    }

    #[test]
    fn test_output_error_names_path() {
        let err = CliError::Output {
            path: PathBuf::from("/nowhere/curve.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/nowhere/curve.csv"));
    }
}
