//! Error types for deterministic pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors from the closed-form and lattice models

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical and lattice pricing errors.
///
/// # Variants
/// - `InvalidStrike`: Non-positive or non-finite strike
/// - `InvalidSteps`: Zero lattice steps
/// - `ZeroVolatility`: σ = 0 feeds a division (d1 or the lattice probability)
/// - `ZeroMaturity`: T = 0 feeds a division in d1
/// - `NonFinite`: A NaN or infinity escaped the computation
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::ZeroVolatility { model: "black-scholes" };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid strike (non-positive or non-finite).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Lattice built with zero steps.
    #[error("Invalid step count: {steps} (must be at least 1)")]
    InvalidSteps {
        /// The invalid step count
        steps: usize,
    },

    /// Zero volatility makes the model divide by zero.
    #[error("Zero volatility in {model}")]
    ZeroVolatility {
        /// Model that hit the degeneracy
        model: &'static str,
    },

    /// Zero maturity makes the model divide by zero.
    #[error("Zero maturity in {model}")]
    ZeroMaturity {
        /// Model that hit the degeneracy
        model: &'static str,
    },

    /// Non-finite value produced during computation.
    #[error("Non-finite value in {context}")]
    NonFinite {
        /// Where the value appeared
        context: &'static str,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidStrike { .. } => {
                PricingError::invalid_input("strike", err.to_string())
            }
            AnalyticalError::InvalidSteps { .. } => {
                PricingError::invalid_input("steps", err.to_string())
            }
            AnalyticalError::ZeroVolatility { .. }
            | AnalyticalError::ZeroMaturity { .. }
            | AnalyticalError::NonFinite { .. } => PricingError::NumericDegeneracy(err.to_string()),
        }
    }
}
