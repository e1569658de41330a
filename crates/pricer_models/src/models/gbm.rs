//! Geometric Brownian Motion terminal sampling.
//!
//! Under the risk-neutral measure
//! ```text
//! dL = r·L·dt + σ·L·dW
//! ```
//! has the exact solution
//! ```text
//! L(T) = L(0)·exp((r − σ²/2)·T + σ·√T·Z),   Z ~ N(0, 1)
//! ```
//! so a European payoff needs one normal draw per path and no time stepping.

use pricer_core::types::{PricingError, VanillaMarket};

/// GBM parameters with the drift and diffusion terms pre-computed.
///
/// # Examples
/// ```
/// use pricer_core::types::VanillaMarket;
/// use pricer_models::models::GbmParams;
///
/// let market = VanillaMarket::new(100.0, 1.0, 0.05, 0.2).unwrap();
/// let gbm = GbmParams::from_market(&market).unwrap();
///
/// // Z = 0 lands on the median: L·exp((r − σ²/2)T)
/// let median = gbm.terminal_level(0.0);
/// assert!((median - 100.0 * (0.03_f64).exp()).abs() < 1e-10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial level L(0)
    pub level: f64,
    /// (r − σ²/2)·T
    drift: f64,
    /// σ·√T
    diffusion: f64,
}

impl GbmParams {
    /// Builds terminal-sampling parameters from a validated market snapshot.
    ///
    /// # Errors
    /// `PricingError::NumericDegeneracy` if the drift or diffusion term is
    /// not finite (σ² overflow).
    pub fn from_market(market: &VanillaMarket) -> Result<Self, PricingError> {
        let sigma = market.volatility;
        let drift = (market.rate - 0.5 * sigma * sigma) * market.maturity;
        let diffusion = sigma * market.maturity.sqrt();
        if !(drift.is_finite() && diffusion.is_finite()) {
            return Err(PricingError::degenerate("GBM drift or diffusion is not finite"));
        }
        Ok(Self {
            level: market.level,
            drift,
            diffusion,
        })
    }

    /// Maps one standard normal draw to the terminal level.
    #[inline]
    pub fn terminal_level(&self, z: f64) -> f64 {
        self.level * (self.drift + self.diffusion * z).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_terminal_level_formula() {
        let market = VanillaMarket::new(110.0, 2.0, 0.01, 0.1).unwrap();
        let gbm = GbmParams::from_market(&market).unwrap();
        let z = 1.3;
        let expected = 110.0 * ((0.01 - 0.005) * 2.0 + 0.1 * 2.0_f64.sqrt() * z).exp();
        assert_relative_eq!(gbm.terminal_level(z), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_volatility_is_deterministic_forward() {
        let market = VanillaMarket::new(100.0, 1.0, 0.05, 0.0).unwrap();
        let gbm = GbmParams::from_market(&market).unwrap();
        let forward = 100.0 * 0.05_f64.exp();
        assert_relative_eq!(gbm.terminal_level(-2.0), forward, epsilon = 1e-12);
        assert_relative_eq!(gbm.terminal_level(2.0), forward, epsilon = 1e-12);
    }

    #[test]
    fn test_terminal_level_monotone_in_z() {
        let market = VanillaMarket::new(100.0, 1.0, 0.05, 0.2).unwrap();
        let gbm = GbmParams::from_market(&market).unwrap();
        assert!(gbm.terminal_level(0.5) > gbm.terminal_level(-0.5));
    }

    #[test]
    fn test_overflowing_volatility_is_degenerate() {
        let market = VanillaMarket::new(100.0, 1.0, 0.05, 1e200).unwrap();
        assert!(matches!(
            GbmParams::from_market(&market),
            Err(PricingError::NumericDegeneracy(_))
        ));
    }
}
