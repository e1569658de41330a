//! Stochastic dynamics sampled by the Monte Carlo engines.
//!
//! This module provides:
//! - `GbmParams`: exact terminal sampling of geometric Brownian motion
//! - `HestonParams`: Euler full-truncation stepping of the Heston model
//!
//! The engines in `pricer_pricing::mc` own the random numbers and the
//! path loop; the types here only map normal draws to the next state.

pub mod gbm;
pub mod heston;

pub use gbm::GbmParams;
pub use heston::{HestonError, HestonParams, HestonState};
