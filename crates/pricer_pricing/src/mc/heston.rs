//! Heston stochastic-volatility Monte Carlo.
//!
//! Each path takes `n_steps` Euler full-truncation steps, drawing two
//! independent normals per step (the level shock and the independent part
//! of the variance shock). Cost scales with `n_paths × n_steps`.

use pricer_core::traits::priceable::PairPricer;
use pricer_core::types::{CancellationToken, OptionPair, PricingError, VanillaMarket};
use pricer_models::models::HestonParams;

use super::config::MonteCarloConfig;
use super::parallel::{simulate_batched, McEstimate};

/// Heston Monte Carlo pricer.
///
/// The market's `volatility` is ignored; the variance process starts at
/// `v0` and mean-reverts to `theta`.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{CancellationToken, VanillaMarket};
/// use pricer_models::models::HestonParams;
/// use pricer_pricing::mc::{HestonPricer, MonteCarloConfig};
///
/// let config = MonteCarloConfig::builder().n_paths(2_000).n_steps(50).seed(3).build().unwrap();
/// let pricer = HestonPricer::new(HestonParams::default(), config);
/// let market = VanillaMarket::new(100.0, 1.0, 0.05, 0.2).unwrap();
///
/// let estimate = pricer.estimate(&market, 100.0, &CancellationToken::new()).unwrap();
/// assert!(estimate.pair.call > 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HestonPricer {
    params: HestonParams,
    config: MonteCarloConfig,
}

impl HestonPricer {
    /// Creates a pricer from validated parameters and configuration.
    pub fn new(params: HestonParams, config: MonteCarloConfig) -> Self {
        Self { params, config }
    }

    /// Returns the model parameters.
    #[inline]
    pub fn params(&self) -> &HestonParams {
        &self.params
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Returns a pricer drawing from sub-stream `stream` of the seed.
    pub fn for_stream(&self, stream: u64) -> Self {
        Self::new(self.params, self.config.for_stream(stream))
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
        let n_steps = self.config.n_steps();
        let dt = market.maturity / n_steps as f64;
        let rate = market.rate;
        let params = &self.params;

        let acc = simulate_batched(&self.config, cancel, |rng| {
            let mut state = params.initial_state(market.level);
            for _ in 0..n_steps {
                let z_level = rng.gen_normal();
                let z_indep = rng.gen_normal();
                params.euler_step(&mut state, rate, dt, z_level, z_indep);
            }
            (
                (state.level - strike).max(0.0),
                (strike - state.level).max(0.0),
            )
        })?;

        let estimate = acc.estimate(market.discount_factor());
        if !estimate.pair.is_finite() {
            return Err(PricingError::degenerate("Heston estimate is not finite"));
        }
        Ok(estimate)
    }
}

impl PairPricer for HestonPricer {
    fn price_pair(
        &self,
        market: &VanillaMarket,
        strike: f64,
        cancel: &CancellationToken,
    ) -> Result<OptionPair, PricingError> {
        Ok(self.estimate(market, strike, cancel)?.pair)
    }
}
