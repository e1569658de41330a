//! Market snapshot shared by every vanilla pricing model.

use super::error::PricingError;
use super::validation::{require_finite, require_positive};

/// Market inputs for pricing one vanilla option at a given strike.
///
/// `level` is the spot price for equities or the exchange rate for FX; the
/// models treat both identically.
///
/// # Examples
///
/// ```
/// use pricer_core::types::VanillaMarket;
///
/// let market = VanillaMarket::new(100.0, 1.0, 0.05, 0.2).unwrap();
/// assert!((market.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
///
/// assert!(VanillaMarket::new(0.0, 1.0, 0.05, 0.2).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VanillaMarket {
    /// Underlying level (spot price or exchange rate).
    pub level: f64,
    /// Time to maturity in years.
    pub maturity: f64,
    /// Continuously compounded risk-free rate (may be negative).
    pub rate: f64,
    /// Volatility (σ). Ignored by stochastic-volatility models.
    pub volatility: f64,
}

impl VanillaMarket {
    /// Creates a validated market snapshot.
    ///
    /// Level and maturity must be positive; rate and volatility must be finite.
    /// Volatility sign is not checked here: models that divide by it report
    /// degeneracy themselves.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidInput` naming the first bad field.
    pub fn new(level: f64, maturity: f64, rate: f64, volatility: f64) -> Result<Self, PricingError> {
        Ok(Self {
            level: require_positive("level", level)?,
            maturity: require_positive("maturity", maturity)?,
            rate: require_finite("rate", rate)?,
            volatility: require_finite("volatility", volatility)?,
        })
    }

    /// Discount factor e^(−rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }
}
