//! Monte Carlo pricing engines.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer / HestonPricer
//! ├── MonteCarloConfig    (paths, steps, batch size, seed, parallel)
//! ├── simulate_batched()  (rayon batches, ordered reduction)
//! │   └── PricerRng       (one stream per batch, Box–Muller normals)
//! └── PayoffAccumulator   (call/put sums → McEstimate)
//! ```
//!
//! # Example
//!
//! ```rust
//! use pricer_core::traits::priceable::PairPricer;
//! use pricer_core::types::{CancellationToken, VanillaMarket};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(20_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let pricer = MonteCarloPricer::new(config);
//! let market = VanillaMarket::new(100.0, 1.0, 0.05, 0.2).unwrap();
//! let pair = pricer.price_pair(&market, 100.0, &CancellationToken::new()).unwrap();
//! assert!(pair.call > pair.put);
//! ```

pub mod config;
pub mod error;
pub mod european;
pub mod heston;
pub mod parallel;

pub use config::{
    MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_BATCH_SIZE, DEFAULT_PATHS, DEFAULT_STEPS,
    MAX_BATCH_SIZE, MAX_PATHS, MAX_STEPS,
};
pub use error::ConfigError;
pub use european::MonteCarloPricer;
pub use heston::HestonPricer;
pub use parallel::{simulate_batched, McEstimate, PayoffAccumulator};
