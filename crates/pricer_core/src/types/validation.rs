//! Scalar validation helpers.
//!
//! Every pricing entry point checks its inputs with these helpers before any
//! model runs, so a bad request never produces a partial result. Each helper
//! returns the value on success, which keeps call sites to one line:
//!
//! ```
//! use pricer_core::types::validation::{require_finite, require_positive};
//!
//! let level = require_positive("level", 100.0).unwrap();
//! let rate = require_finite("rate", -0.01).unwrap();
//! assert_eq!((level, rate), (100.0, -0.01));
//!
//! let err = require_positive("low", 0.0).unwrap_err();
//! assert_eq!(err.field(), Some("low"));
//! ```

use super::error::PricingError;

/// Requires a finite value (NaN and infinities are rejected).
#[inline]
pub fn require_finite(field: &str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::invalid_input(
            field,
            format!("must be a finite number, got {}", value),
        ))
    }
}

/// Requires a finite, strictly positive value.
#[inline]
pub fn require_positive(field: &str, value: f64) -> Result<f64, PricingError> {
    let value = require_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(PricingError::invalid_input(
            field,
            format!("must be positive, got {}", value),
        ))
    }
}
