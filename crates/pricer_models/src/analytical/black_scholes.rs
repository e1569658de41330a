//! Black-Scholes closed form for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = L·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - L·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(L/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! `L` is the underlying level: a spot price for equities, an exchange rate
//! for FX. N is the Zelen–Severo approximation from [`super::distributions`].

use num_traits::Float;
use pricer_core::traits::priceable::PairPricer;
use pricer_core::types::{CancellationToken, OptionPair, PricingError, VanillaMarket};

use super::distributions::norm_cdf;
use super::error::AnalyticalError;

const MODEL: &str = "black-scholes";

/// Black-Scholes model for European option pricing.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let (call, put) = bs.price_pair(100.0, 1.0).unwrap();
///
/// // Put-call parity: C - P = L - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    /// Underlying level (L)
    level: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// The level is assumed validated upstream. The sign of σ is not checked:
    /// a negative range estimate flows through unchanged.
    ///
    /// # Errors
    /// - `AnalyticalError::ZeroVolatility` if volatility == 0
    /// - `AnalyticalError::NonFinite` if any parameter is NaN or infinite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_err());
    /// ```
    pub fn new(level: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        if !(level.is_finite() && rate.is_finite() && volatility.is_finite()) {
            return Err(AnalyticalError::NonFinite {
                context: "black-scholes parameters",
            });
        }

        if volatility == T::zero() {
            return Err(AnalyticalError::ZeroVolatility { model: MODEL });
        }

        Ok(Self {
            level,
            rate,
            volatility,
        })
    }

    /// Returns the underlying level.
    #[inline]
    pub fn level(&self) -> T {
        self.level
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes d₁ and d₂ for a strike and maturity.
    ///
    /// # Errors
    /// - `AnalyticalError::ZeroMaturity` if maturity == 0
    /// - `AnalyticalError::InvalidStrike` if strike <= 0
    pub fn d1_d2(&self, strike: T, maturity: T) -> Result<(T, T), AnalyticalError> {
        let zero = T::zero();
        if !(strike > zero) || !strike.is_finite() {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if maturity == zero {
            return Err(AnalyticalError::ZeroMaturity { model: MODEL });
        }

        let half = T::from(0.5).unwrap();
        let vol_sqrt_t = self.volatility * maturity.sqrt();
        let log_moneyness = (self.level / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * maturity;

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        Ok((d1, d1 - vol_sqrt_t))
    }

    /// Prices the call and put struck at `strike`, returning `(call, put)`.
    ///
    /// # Errors
    /// Degenerate inputs as in [`Self::d1_d2`], plus
    /// `AnalyticalError::NonFinite` if either price is NaN or infinite.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// let (call, put) = bs.price_pair(100.0, 1.0).unwrap();
    /// assert!((call - 10.45).abs() < 0.01);
    /// assert!((put - 5.57).abs() < 0.01);
    /// ```
    pub fn price_pair(&self, strike: T, maturity: T) -> Result<(T, T), AnalyticalError> {
        let (d1, d2) = self.d1_d2(strike, maturity)?;
        let discounted_strike = strike * (-self.rate * maturity).exp();

        let call = self.level * norm_cdf(d1) - discounted_strike * norm_cdf(d2);
        let put = discounted_strike * norm_cdf(-d2) - self.level * norm_cdf(-d1);

        if !(call.is_finite() && put.is_finite()) {
            return Err(AnalyticalError::NonFinite {
                context: "black-scholes price",
            });
        }
        Ok((call, put))
    }
}

/// Closed-form pricer over a [`VanillaMarket`].
///
/// Builds a [`BlackScholes`] from the market snapshot for every call; the
/// formula is cheap enough that caching buys nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosedForm;

impl PairPricer for ClosedForm {
    fn price_pair(
        &self,
        market: &VanillaMarket,
        strike: f64,
        _cancel: &CancellationToken,
    ) -> Result<OptionPair, PricingError> {
        let model = BlackScholes::new(market.level, market.rate, market.volatility)?;
        let (call, put) = model.price_pair(strike, market.maturity)?;
        Ok(OptionPair::new(call, put))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_zero_volatility_is_degenerate() {
        let err = BlackScholes::new(100.0_f64, 0.05, 0.0).unwrap_err();
        assert_eq!(
            err,
            AnalyticalError::ZeroVolatility {
                model: "black-scholes"
            }
        );
    }

    #[test]
    fn test_non_finite_parameters_rejected() {
        assert!(matches!(
            BlackScholes::new(100.0_f64, f64::NAN, 0.2),
            Err(AnalyticalError::NonFinite { .. })
        ));
        assert!(matches!(
            BlackScholes::new(100.0_f64, 0.05, f64::INFINITY),
            Err(AnalyticalError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_accessors() {
        let bs = BlackScholes::new(110.0_f64, 0.01, 0.15).unwrap();
        assert_eq!(bs.level(), 110.0);
        assert_eq!(bs.rate(), 0.01);
        assert_eq!(bs.volatility(), 0.15);
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_d2_atm_zero_rate() {
        // ATM with r=0: d1 = σ√T/2, d2 = -σ√T/2
        let bs = BlackScholes::new(100.0_f64, 0.0, 0.2).unwrap();
        let (d1, d2) = bs.d1_d2(100.0, 1.0).unwrap();
        assert_relative_eq!(d1, 0.1, epsilon = 1e-12);
        assert_relative_eq!(d2, -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_maturity_is_degenerate() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(
            bs.d1_d2(100.0, 0.0).unwrap_err(),
            AnalyticalError::ZeroMaturity {
                model: "black-scholes"
            }
        );
    }

    #[test]
    fn test_non_positive_strike_rejected() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert!(matches!(
            bs.price_pair(0.0, 1.0),
            Err(AnalyticalError::InvalidStrike { .. })
        ));
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_reference_values() {
        // L=100, K=100, r=0.05, σ=0.2, T=1: C ≈ 10.4506, P ≈ 5.5735
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let (call, put) = bs.price_pair(100.0, 1.0).unwrap();
        assert_relative_eq!(call, 10.4506, epsilon = 1e-3);
        assert_relative_eq!(put, 5.5735, epsilon = 1e-3);
    }

    #[test]
    fn test_range_volatility_scenario() {
        // σ = ln(110/90)/2 from the default equity form inputs
        let sigma = (110.0_f64 / 90.0).ln() / 2.0;
        let bs = BlackScholes::new(100.0_f64, 0.05, sigma).unwrap();
        let (call, put) = bs.price_pair(100.0, 1.0).unwrap();
        assert_relative_eq!(call, 6.8165, epsilon = 1e-3);
        assert_relative_eq!(put, 1.9394, epsilon = 1e-3);
    }

    #[test]
    fn test_fx_level_matches_equity_maths() {
        // USD/JPY around 110 behaves exactly like a 110 spot
        let sigma = (115.0_f64 / 105.0).ln() / 2.0;
        let bs = BlackScholes::new(110.0_f64, 0.05, sigma).unwrap();
        let (call, put) = bs.price_pair(110.0, 1.0).unwrap();
        let parity = 110.0 - 110.0 * (-0.05_f64).exp();
        assert_relative_eq!(call - put, parity, epsilon = 1e-6);
        assert!(call > 0.0 && put > 0.0);
    }

    #[test]
    fn test_deep_otm_call_near_zero() {
        let bs = BlackScholes::new(50.0_f64, 0.05, 0.2).unwrap();
        let (call, put) = bs.price_pair(100.0, 1.0).unwrap();
        assert!(call < 0.01);
        assert!(put > 40.0);
    }

    #[test]
    fn test_negative_volatility_flips_call() {
        // With σ < 0 both d-terms change sign, so C(-σ) = -P(σ)
        let pos = BlackScholes::new(100.0_f64, 0.05, 0.1).unwrap();
        let neg = BlackScholes::new(100.0_f64, 0.05, -0.1).unwrap();
        let (call_pos, put_pos) = pos.price_pair(100.0, 1.0).unwrap();
        let (call_neg, put_neg) = neg.price_pair(100.0, 1.0).unwrap();
        assert_relative_eq!(call_neg, -put_pos, epsilon = 1e-6);
        assert_relative_eq!(put_neg, -call_pos, epsilon = 1e-6);
    }

    #[test]
    fn test_f32_pricing() {
        let bs = BlackScholes::new(100.0_f32, 0.05, 0.2).unwrap();
        let (call, _) = bs.price_pair(100.0, 1.0).unwrap();
        assert!((call - 10.45).abs() < 0.01);
    }

    // ==========================================================
    // PairPricer Tests
    // ==========================================================

    #[test]
    fn test_closed_form_pair_pricer() {
        let market = VanillaMarket::new(100.0, 1.0, 0.05, 0.2).unwrap();
        let pair = ClosedForm
            .price_pair(&market, 100.0, &CancellationToken::new())
            .unwrap();
        assert_relative_eq!(pair.call, 10.4506, epsilon = 1e-3);
        assert_relative_eq!(pair.put, 5.5735, epsilon = 1e-3);
    }

    #[test]
    fn test_closed_form_zero_volatility_is_numeric_degeneracy() {
        let market = VanillaMarket::new(100.0, 1.0, 0.05, 0.0).unwrap();
        let err = ClosedForm
            .price_pair(&market, 100.0, &CancellationToken::new())
            .unwrap_err();
        assert!(matches!(err, PricingError::NumericDegeneracy(_)));
    }

    // ==========================================================
    // Put-Call Parity Tests
    // ==========================================================

    proptest! {
        #[test]
        fn prop_put_call_parity(
            level in 10.0_f64..500.0,
            moneyness in 0.5_f64..1.5,
            maturity in 0.05_f64..5.0,
            rate in -0.02_f64..0.10,
            sigma in 0.05_f64..0.8,
        ) {
            let strike = level * moneyness;
            let bs = BlackScholes::new(level, rate, sigma).unwrap();
            let (call, put) = bs.price_pair(strike, maturity).unwrap();
            let forward_gap = level - strike * (-rate * maturity).exp();
            prop_assert!((call - put - forward_gap).abs() < 1e-6);
        }

        #[test]
        fn prop_prices_non_negative(
            level in 10.0_f64..500.0,
            moneyness in 0.5_f64..1.5,
            maturity in 0.05_f64..5.0,
            sigma in 0.05_f64..0.8,
        ) {
            let bs = BlackScholes::new(level, 0.03, sigma).unwrap();
            let (call, put) = bs.price_pair(level * moneyness, maturity).unwrap();
            // The CDF approximation carries ~1e-7 absolute error
            prop_assert!(call > -1e-4 * level);
            prop_assert!(put > -1e-4 * level);
        }
    }
}
