//! Error types for the Monte Carlo engines.
//!
//! This module defines structured error types for configuration validation
//! in the Monte Carlo simulation engine.

use std::fmt;

use pricer_core::types::PricingError;

/// Configuration error for the Monte Carlo engines.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    InvalidPathCount(usize),
    /// Step count outside valid range [1, 10_000].
    InvalidStepCount(usize),
    /// Batch size outside valid range [1, 1_000_000].
    InvalidBatchSize(usize),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl ConfigError {
    /// Input field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidPathCount(_) => "paths",
            Self::InvalidStepCount(_) => "steps",
            Self::InvalidBatchSize(_) => "batch_size",
            Self::InvalidParameter { name, .. } => name,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathCount(count) => {
                write!(
                    f,
                    "Invalid path count {}: must be in range [1, 10_000_000]",
                    count
                )
            }
            Self::InvalidStepCount(count) => {
                write!(
                    f,
                    "Invalid step count {}: must be in range [1, 10_000]",
                    count
                )
            }
            Self::InvalidBatchSize(size) => {
                write!(
                    f,
                    "Invalid batch size {}: must be in range [1, 1_000_000]",
                    size
                )
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::invalid_input(err.field(), err.to_string())
    }
}
