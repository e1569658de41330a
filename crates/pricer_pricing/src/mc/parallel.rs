//! Batched path simulation with deterministic reduction.
//!
//! Paths are split into fixed-size batches. Every batch owns a
//! [`PricerRng`] seeded from `(base seed, batch index)` and accumulates its
//! payoffs locally; partial sums are then reduced in batch order.
//!
//! ```text
//!   batch 0   batch 1   ...   batch N-1      (rayon pool or sequential)
//!   ┌─────┐   ┌─────┐         ┌─────┐
//!   │ acc │   │ acc │   ...   │ acc │
//!   └──┬──┘   └──┬──┘         └──┬──┘
//!      └─────────┴──── ordered ──┘
//!                      merge
//! ```
//!
//! Because neither the seeds nor the reduction order depend on scheduling,
//! a seeded estimate is identical with `parallel` on or off.

use pricer_core::types::{CancellationToken, OptionPair, PricingError};
use rayon::prelude::*;
use tracing::{debug, trace};

use super::config::MonteCarloConfig;
use crate::rng::PricerRng;

/// Running sums of call and put payoffs.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PayoffAccumulator;
///
/// let mut acc = PayoffAccumulator::default();
/// acc.add(2.0, 0.0);
/// acc.add(0.0, 1.0);
/// let estimate = acc.estimate(1.0);
/// assert_eq!(estimate.pair.call, 1.0);
/// assert_eq!(estimate.pair.put, 0.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PayoffAccumulator {
    call_sum: f64,
    put_sum: f64,
    call_sq_sum: f64,
    put_sq_sum: f64,
    count: usize,
}

impl PayoffAccumulator {
    /// Adds one path's undiscounted payoffs.
    #[inline]
    pub fn add(&mut self, call: f64, put: f64) {
        self.call_sum += call;
        self.put_sum += put;
        self.call_sq_sum += call * call;
        self.put_sq_sum += put * put;
        self.count += 1;
    }

    /// Folds another accumulator into this one.
    #[inline]
    pub fn merge(&mut self, other: &Self) {
        self.call_sum += other.call_sum;
        self.put_sum += other.put_sum;
        self.call_sq_sum += other.call_sq_sum;
        self.put_sq_sum += other.put_sq_sum;
        self.count += other.count;
    }

    /// Number of paths accumulated.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Discounted sample means and their standard errors.
    ///
    /// An empty accumulator yields zeros.
    pub fn estimate(&self, discount: f64) -> McEstimate {
        if self.count == 0 {
            return McEstimate::default();
        }
        let n = self.count as f64;
        let std_error = |sum: f64, sq_sum: f64| {
            if self.count < 2 {
                return 0.0;
            }
            let mean = sum / n;
            let variance = ((sq_sum - n * mean * mean) / (n - 1.0)).max(0.0);
            discount * (variance / n).sqrt()
        };

        McEstimate {
            pair: OptionPair::new(discount * self.call_sum / n, discount * self.put_sum / n),
            call_std_error: std_error(self.call_sum, self.call_sq_sum),
            put_std_error: std_error(self.put_sum, self.put_sq_sum),
            n_paths: self.count,
        }
    }
}

/// Discounted Monte Carlo estimate with sampling error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct McEstimate {
    /// Discounted mean call and put payoffs.
    pub pair: OptionPair,
    /// Standard error of the call estimate.
    pub call_std_error: f64,
    /// Standard error of the put estimate.
    pub put_std_error: f64,
    /// Number of simulated paths.
    pub n_paths: usize,
}

/// Simulates `config.n_paths()` paths in batches and sums their payoffs.
///
/// `path_payoffs` maps a generator to one path's `(call, put)` payoffs.
/// Unseeded configurations draw the base seed from OS entropy and log it
/// at `debug`; the sweep fixes one seed up front instead.
///
/// # Errors
///
/// `PricingError::Cancelled` if `cancel` fires before a batch starts.
pub fn simulate_batched<F>(
    config: &MonteCarloConfig,
    cancel: &CancellationToken,
    path_payoffs: F,
) -> Result<PayoffAccumulator, PricingError>
where
    F: Fn(&mut PricerRng) -> (f64, f64) + Sync,
{
    let base_seed = match config.seed() {
        Some(seed) => seed,
        None => {
            let seed = rand::random();
            debug!(seed, "Monte Carlo seed drawn from entropy");
            seed
        }
    };
    let n_paths = config.n_paths();
    let batch_size = config.batch_size();
    let n_batches = config.n_batches();
    trace!(n_paths, n_batches, base_seed, "simulating batches");

    let run_batch = |batch: usize| -> Result<PayoffAccumulator, PricingError> {
        cancel.check()?;
        let start = batch * batch_size;
        let len = batch_size.min(n_paths - start);
        let mut rng = PricerRng::for_stream(base_seed, batch as u64);
        let mut acc = PayoffAccumulator::default();
        for _ in 0..len {
            let (call, put) = path_payoffs(&mut rng);
            acc.add(call, put);
        }
        Ok(acc)
    };

    let partials: Vec<PayoffAccumulator> = if config.parallel() {
        (0..n_batches).into_par_iter().map(run_batch).collect::<Result<_, _>>()?
    } else {
        (0..n_batches).map(run_batch).collect::<Result<_, _>>()?
    };

    Ok(partials
        .iter()
        .fold(PayoffAccumulator::default(), |mut total, partial| {
            total.merge(partial);
            total
        }))
}
