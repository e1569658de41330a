//! Range-based volatility proxy.
//!
//! Treats an observed low/high pair as the bounds of a single-period price
//! excursion over the option horizon:
//!
//! ```text
//! σ = ln(high / low) / (2·√T)
//! ```

use pricer_core::types::validation::require_positive;
use pricer_core::types::PricingError;

/// Estimates volatility from an observed low/high range.
///
/// `level` is not part of the formula but must still be a usable price,
/// so it is validated alongside the other denominators.
///
/// # Errors
/// `PricingError::InvalidInput` naming the first of `low`, `high`, `level`,
/// `maturity` that is non-positive or non-finite.
///
/// # Notes
/// `high < low` is accepted and yields a negative σ.
///
/// # Examples
/// ```
/// use pricer_models::volatility::estimate_range_volatility;
///
/// let sigma = estimate_range_volatility(90.0, 110.0, 100.0, 1.0).unwrap();
/// assert!((sigma - 0.100335).abs() < 1e-6);
///
/// assert!(estimate_range_volatility(0.0, 110.0, 100.0, 1.0).is_err());
/// ```
pub fn estimate_range_volatility(
    low: f64,
    high: f64,
    level: f64,
    maturity: f64,
) -> Result<f64, PricingError> {
    let low = require_positive("low", low)?;
    let high = require_positive("high", high)?;
    require_positive("level", level)?;
    let maturity = require_positive("maturity", maturity)?;

    Ok((high / low).ln() / (2.0 * maturity.sqrt()))
}
