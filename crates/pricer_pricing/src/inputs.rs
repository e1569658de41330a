//! Raw scalar inputs for one pricing request.
//!
//! The presentation layer owns text parsing; everything here is already a
//! number. [`PricingInputs::validate`] rejects the request before any model
//! runs.

use pricer_core::types::validation::{require_finite, require_positive};
use pricer_core::types::{PricingError, VanillaMarket};
use pricer_models::models::HestonParams;

/// Heston parameter block, as entered by the user.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::inputs::HestonInputs;
///
/// let heston = HestonInputs::default();
/// assert_eq!(heston.correlation, -0.7);
/// assert!(heston.to_params().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HestonInputs {
    /// Initial variance v0 (>= 0).
    pub initial_variance: f64,
    /// Mean-reversion speed κ.
    pub mean_reversion: f64,
    /// Long-run variance θ (>= 0).
    pub long_run_variance: f64,
    /// Volatility of variance ξ (>= 0).
    pub vol_of_vol: f64,
    /// Level/variance correlation ρ in [-1, 1].
    pub correlation: f64,
}

impl HestonInputs {
    /// Validates the block and converts it into model parameters.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidInput` naming the first bad parameter.
    pub fn to_params(&self) -> Result<HestonParams, PricingError> {
        Ok(HestonParams::new(
            self.initial_variance,
            self.mean_reversion,
            self.long_run_variance,
            self.vol_of_vol,
            self.correlation,
        )?)
    }
}

impl Default for HestonInputs {
    fn default() -> Self {
        Self {
            initial_variance: 0.04,
            mean_reversion: 2.0,
            long_run_variance: 0.04,
            vol_of_vol: 0.3,
            correlation: -0.7,
        }
    }
}

/// Inputs for one sweep or quote.
///
/// `level` is the spot price for equities or the exchange rate for FX.
/// `high >= low` is not required; an inverted range gives a negative σ.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::inputs::PricingInputs;
///
/// let inputs = PricingInputs::equity_defaults();
/// assert!(inputs.validate().is_ok());
///
/// let bad = PricingInputs { low: 0.0, ..inputs };
/// assert_eq!(bad.validate().unwrap_err().field(), Some("low"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInputs {
    /// Underlying level (> 0).
    pub level: f64,
    /// Strike for single quotes (> 0).
    pub strike: f64,
    /// Maturity in years (> 0).
    pub maturity: f64,
    /// Continuously compounded risk-free rate (may be negative).
    pub rate: f64,
    /// Lowest observed level (> 0).
    pub low: f64,
    /// Highest observed level (> 0).
    pub high: f64,
    /// Heston parameters; required only by the Heston model.
    #[cfg_attr(feature = "serde", serde(default))]
    pub heston: Option<HestonInputs>,
}

impl PricingInputs {
    /// Equity form defaults: spot 100, strike 100, one year, 5%, range 90–110.
    pub fn equity_defaults() -> Self {
        Self {
            level: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            low: 90.0,
            high: 110.0,
            heston: None,
        }
    }

    /// FX form defaults: rate 110, strike 110, one year, 5%, range 105–115.
    pub fn fx_defaults() -> Self {
        Self {
            level: 110.0,
            strike: 110.0,
            low: 105.0,
            high: 115.0,
            ..Self::equity_defaults()
        }
    }

    /// Attaches a Heston parameter block.
    pub fn with_heston(mut self, heston: HestonInputs) -> Self {
        self.heston = Some(heston);
        self
    }

    /// Checks every scalar before any model runs.
    ///
    /// Fields are checked in the order level, strike, maturity, rate, low,
    /// high. A Heston block, if present, only has to be finite here; its
    /// ranges are checked when the Heston model is built, so other models
    /// ignore it.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidInput` naming the first bad field.
    pub fn validate(&self) -> Result<(), PricingError> {
        require_positive("level", self.level)?;
        require_positive("strike", self.strike)?;
        require_positive("maturity", self.maturity)?;
        require_finite("rate", self.rate)?;
        require_positive("low", self.low)?;
        require_positive("high", self.high)?;
        if let Some(heston) = &self.heston {
            require_finite("initial_variance", heston.initial_variance)?;
            require_finite("mean_reversion", heston.mean_reversion)?;
            require_finite("long_run_variance", heston.long_run_variance)?;
            require_finite("vol_of_vol", heston.vol_of_vol)?;
            require_finite("correlation", heston.correlation)?;
        }
        Ok(())
    }

    /// Market snapshot at volatility `sigma`.
    pub fn market(&self, sigma: f64) -> Result<VanillaMarket, PricingError> {
        VanillaMarket::new(self.level, self.maturity, self.rate, sigma)
    }
}

impl Default for PricingInputs {
    fn default() -> Self {
        Self::equity_defaults()
    }
}
