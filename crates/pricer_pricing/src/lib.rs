//! # Pricer Pricing (Layer 3: Engines and Orchestration)
//!
//! Drives the models of `pricer_models` across a strike grid.
//!
//! This crate provides:
//! - Box–Muller normals over seeded, splittable generators (`rng`)
//! - Batched, parallel Monte Carlo for GBM and Heston (`mc`)
//! - Model selection and enum dispatch (`engine`)
//! - Request validation (`inputs`)
//! - The strike sweep and single-strike quote (`sweep`)
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::engine::ModelSelector;
//! use pricer_pricing::inputs::PricingInputs;
//! use pricer_pricing::sweep::{sweep, SweepSettings};
//!
//! let selector: ModelSelector = "blackScholes".parse().unwrap();
//! let result = sweep(&PricingInputs::fx_defaults(), selector, &SweepSettings::default()).unwrap();
//!
//! assert_eq!(result.curve.len(), 21);
//! assert_eq!(result.curve.strikes()[0], 55.0);
//! ```
//!
//! ## Reproducibility
//!
//! With `MonteCarloConfig::seed` set, every strike and every path batch
//! draws from a stream derived from that seed, so a seeded sweep returns
//! the same curve whatever the thread count. Without a seed, each run draws
//! its base seed from OS entropy.
//!
//! ## Concurrency
//!
//! Strikes and Monte Carlo batches run on the global rayon pool. A
//! `CancellationToken` is polled between strikes and between batches.

#![deny(missing_docs)]

pub mod engine;
pub mod inputs;
pub mod mc;
pub mod rng;
pub mod sweep;

pub use engine::{EngineSettings, ModelSelector, PricingModel};
pub use inputs::{HestonInputs, PricingInputs};
pub use sweep::{
    quote, quote_with_cancel, sweep, sweep_with_cancel, QuoteResult, StrikeGrid, SweepResult,
    SweepSettings,
};
