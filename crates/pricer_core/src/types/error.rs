//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The single failure type a pricing request can surface
//! - `CurrencyError`: Errors from currency and currency-pair parsing

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every failure of a pricing request collapses into one of these variants.
/// A request either yields a complete result or exactly one `PricingError`;
/// no partial curve is ever returned alongside an error.
///
/// # Variants
/// - `InvalidInput`: A scalar is non-finite, out of range, or a required block is missing
/// - `InvalidModel`: The requested model name is not one of the known models
/// - `NumericDegeneracy`: A model division degenerates (zero volatility or maturity)
/// - `Cancelled`: The caller cancelled the request mid-flight
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid_input("low", "must be positive, got 0");
/// assert_eq!(format!("{}", err), "Invalid input: low must be positive, got 0");
///
/// let err = PricingError::InvalidModel("arbitrage".to_string());
/// assert_eq!(format!("{}", err), "Invalid model: arbitrage");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid input: {field} {reason}")]
    InvalidInput {
        /// Name of the offending input
        field: String,
        /// Which bound or requirement was breached
        reason: String,
    },

    /// Unknown model selector.
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// Division by zero or non-finite intermediate inside a model.
    #[error("Numeric degeneracy: {0}")]
    NumericDegeneracy(String),

    /// Request cancelled through its cancellation token.
    #[error("Pricing cancelled")]
    Cancelled,
}

impl PricingError {
    /// Creates an `InvalidInput` error for the named field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a `NumericDegeneracy` error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::NumericDegeneracy(message.into())
    }

    /// Returns the offending field name for `InvalidInput` errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Currency-related errors.
///
/// # Variants
/// - `UnknownCurrency`: Unknown currency code
/// - `SameCurrency`: Base and quote currencies are the same
/// - `ParseError`: Failed to parse a `BASE/QUOTE` pair string
///
/// # Examples
/// ```
/// use pricer_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Base and quote currencies are the same.
    #[error("Base and quote currencies are the same: {0}")]
    SameCurrency(String),

    /// Failed to parse currency pair string.
    #[error("Currency pair parse error: {0}")]
    ParseError(String),
}
