//! # Random Number Generation Infrastructure
//!
//! This module provides the random sources for the Monte Carlo engines.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Every generator can be seeded; seeded sweeps
//!   derive one independent stream per strike and per path batch
//! - **Replayable entropy**: Unseeded runs draw one base seed from the
//!   operating system, log it and report it with the result
//! - **Accurate naming**: Normal variates come from a Box–Muller transform,
//!   and the type says so
//!
//! ## Module Structure
//!
//! - [`box_muller`]: Box–Muller standard normal sampler
//! - [`prng`]: Seeded PRNG wrapper and stream-seed derivation
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Generate standard normal variates (mean=0, std=1)
//! let normal_value = rng.gen_normal();
//! assert!(normal_value.is_finite());
//!
//! // Independent sub-streams of one base seed
//! let mut batch = PricerRng::for_stream(12345, 3);
//! assert_ne!(batch.gen_normal(), normal_value);
//! ```

pub mod box_muller;
mod prng;

// Public re-exports
pub use box_muller::BoxMuller;
pub use prng::{derive_seed, PricerRng};
