//! Terminal-value Monte Carlo under GBM.
//!
//! One normal draw per path gives the exact terminal level; the discounted
//! mean of the call and put payoffs is the estimate. No variance reduction
//! is applied.

use pricer_core::traits::priceable::PairPricer;
use pricer_core::types::{CancellationToken, OptionPair, PricingError, VanillaMarket};
use pricer_models::models::GbmParams;

use super::config::MonteCarloConfig;
use super::parallel::{simulate_batched, McEstimate};

/// European Monte Carlo pricer with exact GBM terminal sampling.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{CancellationToken, VanillaMarket};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder().n_paths(50_000).seed(1).build().unwrap();
/// let pricer = MonteCarloPricer::new(config);
/// let market = VanillaMarket::new(100.0, 1.0, 0.05, 0.2).unwrap();
///
/// let estimate = pricer.estimate(&market, 100.0, &CancellationToken::new()).unwrap();
/// assert!((estimate.pair.call - 10.45).abs() < 4.0 * estimate.call_std_error);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a pricer over a validated configuration.
    pub fn new(config: MonteCarloConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Returns a pricer drawing from sub-stream `stream` of the seed.
    pub fn for_stream(&self, stream: u64) -> Self {
        Self::new(self.config.for_stream(stream))
    }

    /// Estimates the call and put with their standard errors.
    ///
    /// # Errors
    ///
    /// - `PricingError::Cancelled` if `cancel` fires between batches
    /// - `PricingError::NumericDegeneracy` if the estimate is not finite
    pub fn estimate(
        &self,
        market: &VanillaMarket,
        strike: f64,
        cancel: &CancellationToken,
    ) -> Result<McEstimate, PricingError> {
        let gbm = GbmParams::from_market(market)?;

        let acc = simulate_batched(&self.config, cancel, |rng| {
            let terminal = gbm.terminal_level(rng.gen_normal());
            ((terminal - strike).max(0.0), (strike - terminal).max(0.0))
        })?;

        let estimate = acc.estimate(market.discount_factor());
        if !estimate.pair.is_finite() {
            return Err(PricingError::degenerate(
                "Monte Carlo estimate is not finite",
            ));
        }
        Ok(estimate)
    }
}

impl PairPricer for MonteCarloPricer {
    fn price_pair(
        &self,
        market: &VanillaMarket,
        strike: f64,
        cancel: &CancellationToken,
    ) -> Result<OptionPair, PricingError> {
        Ok(self.estimate(market, strike, cancel)?.pair)
    }
}
