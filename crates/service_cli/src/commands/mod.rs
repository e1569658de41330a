//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. The argument groups
//! shared by `sweep` and `quote` live here.

pub mod check;
pub mod quote;
pub mod sweep;

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use pricer_core::types::{AssetDomain, Currency, CurrencyPair};
use pricer_pricing::engine::ModelSelector;
use pricer_pricing::inputs::{HestonInputs, PricingInputs};

use crate::config::EngineOverrides;
use crate::output::OutputFormat;
use crate::Result;

/// Underlying asset class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AssetKind {
    /// Spot price of a stock or index
    #[default]
    Equity,
    /// Exchange rate of a currency pair
    Fx,
}

/// Market inputs. Unset values take the defaults of the chosen asset.
#[derive(Args, Debug, Clone, Default)]
pub struct MarketArgs {
    /// Asset class of the underlying
    #[arg(long, value_enum, default_value_t = AssetKind::Equity)]
    pub asset: AssetKind,

    /// Base currency for FX
    #[arg(long, default_value = "USD")]
    pub base: String,

    /// Quote currency for FX
    #[arg(long = "quote", default_value = "JPY")]
    pub quote_currency: String,

    /// Spot price or exchange rate
    #[arg(long)]
    pub level: Option<f64>,

    /// Strike for single quotes
    #[arg(short = 'k', long)]
    pub strike: Option<f64>,

    /// Time to maturity in years
    #[arg(short = 't', long)]
    pub maturity: Option<f64>,

    /// Risk-free rate (continuously compounded)
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: Option<f64>,

    /// Lowest observed level
    #[arg(long)]
    pub low: Option<f64>,

    /// Highest observed level
    #[arg(long)]
    pub high: Option<f64>,

    /// Heston initial variance
    #[arg(long)]
    pub v0: Option<f64>,

    /// Heston mean-reversion speed
    #[arg(long, allow_hyphen_values = true)]
    pub kappa: Option<f64>,

    /// Heston long-run variance
    #[arg(long)]
    pub theta: Option<f64>,

    /// Heston volatility of variance
    #[arg(long)]
    pub xi: Option<f64>,

    /// Heston level/variance correlation
    #[arg(long, allow_hyphen_values = true)]
    pub rho: Option<f64>,
}

impl MarketArgs {
    /// Asset domain, with the currency pair validated for FX.
    pub fn domain(&self) -> Result<AssetDomain> {
        match self.asset {
            AssetKind::Equity => Ok(AssetDomain::Equity),
            AssetKind::Fx => {
                let base: Currency = self.base.parse()?;
                let quote: Currency = self.quote_currency.parse()?;
                Ok(AssetDomain::Fx(CurrencyPair::new(base, quote)?))
            }
        }
    }

    /// Pricing inputs over the asset defaults.
    ///
    /// The Heston block is attached only when `selector` needs it, so
    /// Heston flags never reject a closed-form request.
    pub fn inputs(&self, selector: ModelSelector, heston: HestonInputs) -> PricingInputs {
        let defaults = match self.asset {
            AssetKind::Equity => PricingInputs::equity_defaults(),
            AssetKind::Fx => PricingInputs::fx_defaults(),
        };

        let inputs = PricingInputs {
            level: self.level.unwrap_or(defaults.level),
            strike: self.strike.unwrap_or(defaults.strike),
            maturity: self.maturity.unwrap_or(defaults.maturity),
            rate: self.rate.unwrap_or(defaults.rate),
            low: self.low.unwrap_or(defaults.low),
            high: self.high.unwrap_or(defaults.high),
            heston: None,
        };

        if selector.requires_heston() {
            inputs.with_heston(self.heston(heston))
        } else {
            inputs
        }
    }

    fn heston(&self, base: HestonInputs) -> HestonInputs {
        HestonInputs {
            initial_variance: self.v0.unwrap_or(base.initial_variance),
            mean_reversion: self.kappa.unwrap_or(base.mean_reversion),
            long_run_variance: self.theta.unwrap_or(base.long_run_variance),
            vol_of_vol: self.xi.unwrap_or(base.vol_of_vol),
            correlation: self.rho.unwrap_or(base.correlation),
        }
    }
}

/// Engine overrides on top of the configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Monte Carlo and Heston path count
    #[arg(short = 'n', long)]
    pub paths: Option<usize>,

    /// Heston time steps
    #[arg(long)]
    pub steps: Option<usize>,

    /// Binomial lattice steps
    #[arg(long)]
    pub tree_steps: Option<usize>,

    /// Seed for reproducible Monte Carlo
    #[arg(long)]
    pub seed: Option<u64>,

    /// Price strikes and path batches on one thread
    #[arg(long)]
    pub sequential: bool,
}

impl EngineArgs {
    /// Overrides to merge into the loaded configuration.
    pub fn overrides(&self) -> EngineOverrides {
        EngineOverrides {
            paths: self.paths,
            steps: self.steps,
            tree_steps: self.tree_steps,
            seed: self.seed,
            parallel: self.sequential.then_some(false),
        }
    }
}

/// Arguments shared by `sweep` and `quote`.
#[derive(Args, Debug, Clone)]
pub struct PriceArgs {
    /// Pricing model (closed-form, monte-carlo, binomial, heston)
    #[arg(short, long, default_value = "closed-form")]
    pub model: String,

    #[command(flatten)]
    pub market: MarketArgs,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
