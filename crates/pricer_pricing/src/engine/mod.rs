//! Model selection and enum dispatch.
//!
//! [`ModelSelector`] names a model; [`PricingModel`] is the configured model
//! itself. Every variant implements [`PairPricer`], and dispatch is a plain
//! `match` (static, no trait objects).
//!
//! # Example
//!
//! ```rust
//! use pricer_core::traits::priceable::PairPricer;
//! use pricer_core::types::{CancellationToken, VanillaMarket};
//! use pricer_pricing::engine::{EngineSettings, ModelSelector, PricingModel};
//!
//! let selector: ModelSelector = "binomial".parse().unwrap();
//! let model = PricingModel::build(selector, &EngineSettings::default(), None).unwrap();
//!
//! let market = VanillaMarket::new(100.0, 1.0, 0.05, 0.2).unwrap();
//! let pair = model.price_pair(&market, 100.0, &CancellationToken::new()).unwrap();
//! assert!((pair.call - 10.45).abs() < 0.1);
//!
//! assert!("arbitrage".parse::<ModelSelector>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use pricer_core::traits::priceable::PairPricer;
use pricer_core::types::{CancellationToken, OptionPair, PricingError, VanillaMarket};
use pricer_models::analytical::black_scholes::ClosedForm;
use pricer_models::lattice::{BinomialTree, DEFAULT_TREE_STEPS};

use crate::inputs::HestonInputs;
use crate::mc::{HestonPricer, MonteCarloConfig, MonteCarloPricer};

/// The four supported pricing models.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ModelSelector {
    /// Black–Scholes closed form.
    #[default]
    ClosedForm,
    /// Terminal-value Monte Carlo under GBM.
    MonteCarlo,
    /// Cox–Ross–Rubinstein binomial lattice.
    Binomial,
    /// Heston stochastic-volatility Monte Carlo.
    Heston,
}

impl ModelSelector {
    /// Every selector, in display order.
    pub const ALL: [ModelSelector; 4] = [
        ModelSelector::ClosedForm,
        ModelSelector::MonteCarlo,
        ModelSelector::Binomial,
        ModelSelector::Heston,
    ];

    /// Canonical kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            ModelSelector::ClosedForm => "closed-form",
            ModelSelector::MonteCarlo => "monte-carlo",
            ModelSelector::Binomial => "binomial",
            ModelSelector::Heston => "heston",
        }
    }

    /// Whether the model needs a Heston parameter block.
    pub fn requires_heston(&self) -> bool {
        matches!(self, ModelSelector::Heston)
    }

    /// Whether the model draws random numbers.
    pub fn is_stochastic(&self) -> bool {
        matches!(self, ModelSelector::MonteCarlo | ModelSelector::Heston)
    }
}

impl fmt::Display for ModelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelSelector {
    type Err = PricingError;

    /// Accepts kebab-case names and the camelCase form identifiers
    /// (`blackScholes`, `monteCarlo`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalised.as_str() {
            "closedform" | "blackscholes" | "bs" => Ok(ModelSelector::ClosedForm),
            "montecarlo" | "mc" => Ok(ModelSelector::MonteCarlo),
            "binomial" | "crr" => Ok(ModelSelector::Binomial),
            "heston" => Ok(ModelSelector::Heston),
            _ => Err(PricingError::InvalidModel(s.to_string())),
        }
    }
}

/// Engine knobs shared by every model in a sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineSettings {
    /// Monte Carlo and Heston configuration.
    pub monte_carlo: MonteCarloConfig,
    /// Binomial lattice steps.
    pub tree_steps: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            monte_carlo: MonteCarloConfig::default(),
            tree_steps: DEFAULT_TREE_STEPS,
        }
    }
}

/// A configured pricing model.
#[derive(Clone, Debug, PartialEq)]
pub enum PricingModel {
    /// Black–Scholes closed form.
    ClosedForm(ClosedForm),
    /// GBM terminal Monte Carlo.
    MonteCarlo(MonteCarloPricer),
    /// CRR binomial lattice.
    Binomial(BinomialTree),
    /// Heston Monte Carlo.
    Heston(HestonPricer),
}

impl PricingModel {
    /// Builds the model named by `selector`.
    ///
    /// `heston` is consulted only for [`ModelSelector::Heston`].
    ///
    /// # Errors
    ///
    /// - `PricingError::InvalidInput` (`heston`) if Heston is selected
    ///   without a parameter block
    /// - `PricingError::InvalidInput` for a bad Heston block or tree size
    pub fn build(
        selector: ModelSelector,
        settings: &EngineSettings,
        heston: Option<&HestonInputs>,
    ) -> Result<Self, PricingError> {
        Ok(match selector {
            ModelSelector::ClosedForm => PricingModel::ClosedForm(ClosedForm),
            ModelSelector::MonteCarlo => {
                PricingModel::MonteCarlo(MonteCarloPricer::new(settings.monte_carlo.clone()))
            }
            ModelSelector::Binomial => PricingModel::Binomial(
                BinomialTree::new(settings.tree_steps)
                    .map_err(|err| PricingError::invalid_input("tree_steps", err.to_string()))?,
            ),
            ModelSelector::Heston => {
                let inputs = heston.ok_or_else(|| {
                    PricingError::invalid_input("heston", "parameters are required by the heston model")
                })?;
                PricingModel::Heston(HestonPricer::new(
                    inputs.to_params()?,
                    settings.monte_carlo.clone(),
                ))
            }
        })
    }

    /// The selector this model was built from.
    pub fn selector(&self) -> ModelSelector {
        match self {
            PricingModel::ClosedForm(_) => ModelSelector::ClosedForm,
            PricingModel::MonteCarlo(_) => ModelSelector::MonteCarlo,
            PricingModel::Binomial(_) => ModelSelector::Binomial,
            PricingModel::Heston(_) => ModelSelector::Heston,
        }
    }

    /// Returns the model drawing from random sub-stream `stream`.
    ///
    /// Deterministic models are returned unchanged.
    pub fn for_stream(&self, stream: u64) -> Self {
        match self {
            PricingModel::MonteCarlo(pricer) => PricingModel::MonteCarlo(pricer.for_stream(stream)),
            PricingModel::Heston(pricer) => PricingModel::Heston(pricer.for_stream(stream)),
            other => other.clone(),
        }
    }
}

impl PricingModel {
    /// Prices one strike and, for Monte Carlo models, the standard errors
    /// of the call and put estimates.
    ///
    /// # Errors
    ///
    /// As [`PairPricer::price_pair`].
    pub fn price_with_error(
        &self,
        market: &VanillaMarket,
        strike: f64,
        cancel: &CancellationToken,
    ) -> Result<(OptionPair, Option<OptionPair>), PricingError> {
        let estimate = match self {
            PricingModel::MonteCarlo(model) => model.estimate(market, strike, cancel)?,
            PricingModel::Heston(model) => model.estimate(market, strike, cancel)?,
            deterministic => return Ok((deterministic.price_pair(market, strike, cancel)?, None)),
        };
        Ok((
            estimate.pair,
            Some(OptionPair::new(estimate.call_std_error, estimate.put_std_error)),
        ))
    }
}

impl PairPricer for PricingModel {
    fn price_pair(
        &self,
        market: &VanillaMarket,
        strike: f64,
        cancel: &CancellationToken,
    ) -> Result<OptionPair, PricingError> {
        match self {
            PricingModel::ClosedForm(model) => model.price_pair(market, strike, cancel),
            PricingModel::MonteCarlo(model) => model.price_pair(market, strike, cancel),
            PricingModel::Binomial(model) => model.price_pair(market, strike, cancel),
            PricingModel::Heston(model) => model.price_pair(market, strike, cancel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================
    // ModelSelector Tests
    // ==========================================================

    #[test]
    fn test_parse_canonical_names() {
        for selector in ModelSelector::ALL {
            assert_eq!(selector.name().parse::<ModelSelector>().unwrap(), selector);
            assert_eq!(selector.to_string(), selector.name());
        }
    }

    #[test]
    fn test_parse_form_identifiers() {
        assert_eq!("blackScholes".parse::<ModelSelector>().unwrap(), ModelSelector::ClosedForm);
        assert_eq!("monteCarlo".parse::<ModelSelector>().unwrap(), ModelSelector::MonteCarlo);
        assert_eq!(" Heston ".parse::<ModelSelector>().unwrap(), ModelSelector::Heston);
        assert_eq!("closed_form".parse::<ModelSelector>().unwrap(), ModelSelector::ClosedForm);
    }

    #[test]
    fn test_unknown_model() {
        let err = "arbitrage".parse::<ModelSelector>().unwrap_err();
        assert_eq!(err, PricingError::InvalidModel("arbitrage".to_string()));
        assert!("".parse::<ModelSelector>().is_err());
    }

    #[test]
    fn test_selector_flags() {
        assert!(ModelSelector::Heston.requires_heston());
        assert!(!ModelSelector::MonteCarlo.requires_heston());
        assert!(ModelSelector::MonteCarlo.is_stochastic());
        assert!(!ModelSelector::Binomial.is_stochastic());
        assert_eq!(ModelSelector::default(), ModelSelector::ClosedForm);
    }

    // ==========================================================
    // PricingModel Tests
    // ==========================================================

    #[test]
    fn test_build_every_model() {
        let heston = HestonInputs::default();
        let settings = EngineSettings::default();
        for selector in ModelSelector::ALL {
            let model = PricingModel::build(selector, &settings, Some(&heston)).unwrap();
            assert_eq!(model.selector(), selector);
        }
    }

    #[test]
    fn test_heston_requires_parameters() {
        let err = PricingModel::build(ModelSelector::Heston, &EngineSettings::default(), None)
            .unwrap_err();
        assert_eq!(err.field(), Some("heston"));
    }

    #[test]
    fn test_zero_tree_steps_rejected() {
        let settings = EngineSettings {
            tree_steps: 0,
            ..EngineSettings::default()
        };
        let err = PricingModel::build(ModelSelector::Binomial, &settings, None).unwrap_err();
        assert_eq!(err.field(), Some("tree_steps"));
    }

    #[test]
    fn test_for_stream_only_touches_stochastic_models() {
        let settings = EngineSettings {
            monte_carlo: MonteCarloConfig::builder().seed(5).build().unwrap(),
            ..EngineSettings::default()
        };
        let closed = PricingModel::build(ModelSelector::ClosedForm, &settings, None).unwrap();
        assert_eq!(closed.for_stream(3), closed);

        let mc = PricingModel::build(ModelSelector::MonteCarlo, &settings, None).unwrap();
        assert_ne!(mc.for_stream(3), mc);
    }

    #[test]
    fn test_std_error_only_for_stochastic_models() {
        let market = VanillaMarket::new(100.0, 1.0, 0.05, 0.2).unwrap();
        let cancel = CancellationToken::new();
        let settings = EngineSettings {
            monte_carlo: MonteCarloConfig::builder().n_paths(5_000).seed(9).build().unwrap(),
            ..EngineSettings::default()
        };
        let heston = HestonInputs::default();

        for selector in ModelSelector::ALL {
            let model = PricingModel::build(selector, &settings, Some(&heston)).unwrap();
            let (pair, std_error) = model.price_with_error(&market, 100.0, &cancel).unwrap();
            assert_eq!(pair, model.price_pair(&market, 100.0, &cancel).unwrap());
            match std_error {
                Some(se) => {
                    assert!(selector.is_stochastic());
                    assert!(se.call > 0.0 && se.put > 0.0);
                    // Roughly payoff std / sqrt(5000)
                    assert!(se.call < 0.5, "call std error {}", se.call);
                }
                None => assert!(!selector.is_stochastic()),
            }
        }
    }

    #[test]
    fn test_dispatch_matches_direct_call() {
        let market = VanillaMarket::new(100.0, 1.0, 0.05, 0.2).unwrap();
        let cancel = CancellationToken::new();
        let model =
            PricingModel::build(ModelSelector::ClosedForm, &EngineSettings::default(), None)
                .unwrap();
        assert_eq!(
            model.price_pair(&market, 95.0, &cancel).unwrap(),
            ClosedForm.price_pair(&market, 95.0, &cancel).unwrap()
        );
    }
}
