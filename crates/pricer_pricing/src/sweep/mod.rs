//! Strike sweep orchestration.
//!
//! ```text
//! PricingInputs ─ validate ─ build model ─ σ = range estimate ─┐
//!                                                               ▼
//!              StrikeGrid::strikes(level) ── par_iter ── PairPricer per strike
//!                                                               │
//!                                    ordered collect ◄──────────┘
//!                                           ▼
//!                                      PriceCurve
//! ```
//!
//! σ is computed once per sweep and shared by every strike, and so is the
//! Monte Carlo base seed: an unseeded request draws one from entropy and
//! reports it in the result. Strikes are
//! rounded to cents before the model sees them; prices are rounded to cents
//! independently. Any failure aborts the whole sweep: there is no partial
//! curve.

mod grid;

pub use grid::{StrikeGrid, MAX_GRID_POINTS};

use pricer_core::math::rounding::round_to_cents;
use pricer_core::traits::priceable::PairPricer;
use pricer_core::types::{
    CancellationToken, OptionPair, PriceCurve, PriceQuote, PricingError, VanillaMarket,
};
use pricer_models::volatility::estimate_range_volatility;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::engine::{EngineSettings, ModelSelector, PricingModel};
use crate::inputs::PricingInputs;

/// Everything about a sweep except the market inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepSettings {
    /// Model knobs (paths, steps, seed, tree size).
    pub engine: EngineSettings,
    /// Strike grid.
    pub grid: StrikeGrid,
    /// Price strikes on the rayon pool.
    pub parallel_strikes: bool,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            engine: EngineSettings::default(),
            grid: StrikeGrid::default(),
            parallel_strikes: true,
        }
    }
}

/// Output of a sweep: the shared σ and the strike-ascending curve.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepResult {
    /// Model that produced the curve.
    pub model: ModelSelector,
    /// Range volatility used for every strike.
    pub volatility: f64,
    /// Base seed of the Monte Carlo streams; `None` for deterministic models.
    pub seed: Option<u64>,
    /// Rounded (strike, call, put) points.
    pub curve: PriceCurve,
    /// Unrounded standard errors of the call and put at each curve point,
    /// for Monte Carlo models only.
    pub std_errors: Option<Vec<OptionPair>>,
}

/// Output of a single-strike quote.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuoteResult {
    /// Model that produced the quote.
    pub model: ModelSelector,
    /// Range volatility used.
    pub volatility: f64,
    /// Base seed of the Monte Carlo streams; `None` for deterministic models.
    pub seed: Option<u64>,
    /// Rounded (strike, call, put).
    pub quote: PriceQuote,
    /// Unrounded call and put standard errors, for Monte Carlo models only.
    pub std_error: Option<OptionPair>,
}

/// Validated inputs, the configured model and the shared σ.
struct Prepared {
    model: PricingModel,
    market: VanillaMarket,
    strikes: Vec<f64>,
    seed: Option<u64>,
}

fn prepare(
    inputs: &PricingInputs,
    selector: ModelSelector,
    settings: &SweepSettings,
) -> Result<Prepared, PricingError> {
    inputs.validate()?;

    // One base seed per request, so an unseeded run can be replayed
    let mut engine = settings.engine.clone();
    let seed = if selector.is_stochastic() {
        let seed = match engine.monte_carlo.seed() {
            Some(seed) => seed,
            None => {
                let seed = rand::random();
                debug!(model = %selector, seed, "Monte Carlo seed drawn from entropy");
                seed
            }
        };
        engine.monte_carlo = engine.monte_carlo.with_seed(seed);
        Some(seed)
    } else {
        None
    };
    let model = PricingModel::build(selector, &engine, inputs.heston.as_ref())?;

    let sigma = estimate_range_volatility(inputs.low, inputs.high, inputs.level, inputs.maturity)?;
    if sigma < 0.0 {
        warn!(
            low = inputs.low,
            high = inputs.high,
            sigma,
            "observed high is below observed low; volatility is negative"
        );
    }

    Ok(Prepared {
        model,
        market: inputs.market(sigma)?,
        strikes: settings.grid.strikes(inputs.level)?,
        seed,
    })
}

fn price_point(
    model: &PricingModel,
    market: &VanillaMarket,
    index: usize,
    strike: f64,
    cancel: &CancellationToken,
) -> Result<(PriceQuote, Option<OptionPair>), PricingError> {
    cancel.check()?;
    let (pair, std_error) = model
        .for_stream(index as u64)
        .price_with_error(market, strike, cancel)?;
    if !pair.is_finite() {
        return Err(PricingError::degenerate(format!(
            "{} produced a non-finite price at strike {}",
            model.selector(),
            strike
        )));
    }
    Ok((PriceQuote::from_pair(strike, pair), std_error))
}

/// Sweeps the strike grid with the selected model.
///
/// # Errors
///
/// - `PricingError::InvalidInput` for any bad scalar, a missing Heston
///   block, or a grid that collapses after rounding
/// - `PricingError::NumericDegeneracy` for σ = 0 in closed form or binomial
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::engine::ModelSelector;
/// use pricer_pricing::inputs::PricingInputs;
/// use pricer_pricing::sweep::{sweep, SweepSettings};
///
/// let result = sweep(
///     &PricingInputs::equity_defaults(),
///     ModelSelector::ClosedForm,
///     &SweepSettings::default(),
/// )
/// .unwrap();
///
/// assert_eq!(result.curve.len(), 21);
/// let atm = result.curve.at_strike(100.0).unwrap();
/// assert_eq!((atm.call, atm.put), (6.82, 1.94));
/// ```
pub fn sweep(
    inputs: &PricingInputs,
    selector: ModelSelector,
    settings: &SweepSettings,
) -> Result<SweepResult, PricingError> {
    sweep_with_cancel(inputs, selector, settings, &CancellationToken::new())
}

/// [`sweep`] with a cancellation token checked between strikes and
/// between Monte Carlo batches.
///
/// # Errors
///
/// As [`sweep`], plus `PricingError::Cancelled`.
pub fn sweep_with_cancel(
    inputs: &PricingInputs,
    selector: ModelSelector,
    settings: &SweepSettings,
    cancel: &CancellationToken,
) -> Result<SweepResult, PricingError> {
    let Prepared {
        model,
        market,
        strikes,
        seed,
    } = prepare(inputs, selector, settings)?;
    debug!(
        model = %selector,
        sigma = market.volatility,
        points = strikes.len(),
        "sweeping strikes"
    );

    let price = |(index, &strike): (usize, &f64)| price_point(&model, &market, index, strike, cancel);
    let priced: Vec<(PriceQuote, Option<OptionPair>)> = if settings.parallel_strikes {
        strikes.par_iter().enumerate().map(price).collect::<Result<_, _>>()?
    } else {
        strikes.iter().enumerate().map(price).collect::<Result<_, _>>()?
    };

    let (points, std_errors): (Vec<PriceQuote>, Vec<Option<OptionPair>>) =
        priced.into_iter().unzip();
    let curve = PriceCurve::new(points)?;
    debug!(model = %selector, points = curve.len(), "sweep complete");

    Ok(SweepResult {
        model: selector,
        volatility: market.volatility,
        seed,
        curve,
        std_errors: std_errors.into_iter().collect(),
    })
}

/// Prices the user-entered strike (rounded to cents) with the sweep's σ.
///
/// A strike that lies on the grid draws from the same random stream as
/// the matching curve point, so seeded quotes agree with seeded curves.
///
/// # Errors
///
/// As [`sweep`].
pub fn quote(
    inputs: &PricingInputs,
    selector: ModelSelector,
    settings: &SweepSettings,
) -> Result<QuoteResult, PricingError> {
    quote_with_cancel(inputs, selector, settings, &CancellationToken::new())
}

/// [`quote`] with a cancellation token.
///
/// # Errors
///
/// As [`sweep_with_cancel`].
pub fn quote_with_cancel(
    inputs: &PricingInputs,
    selector: ModelSelector,
    settings: &SweepSettings,
    cancel: &CancellationToken,
) -> Result<QuoteResult, PricingError> {
    let Prepared {
        model,
        market,
        strikes,
        seed,
    } = prepare(inputs, selector, settings)?;

    let strike = round_to_cents(inputs.strike);
    if strike <= 0.0 {
        return Err(PricingError::invalid_input(
            "strike",
            format!("rounds to {}", strike),
        ));
    }
    let stream = strikes
        .iter()
        .position(|&grid_strike| grid_strike == strike)
        .unwrap_or(strikes.len());
    debug!(model = %selector, strike, stream, "pricing quote");

    let (quote, std_error) = price_point(&model, &market, stream, strike, cancel)?;
    Ok(QuoteResult {
        model: selector,
        volatility: market.volatility,
        seed,
        quote,
        std_error,
    })
}
