//! Pseudo-random number generator wrapper for Monte Carlo simulations.
//!
//! This module provides [`PricerRng`], a seeded PRNG wrapper that draws
//! reproducible standard normals, and [`derive_seed`] for splitting one
//! seed into independent streams.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Distribution;

use super::box_muller::BoxMuller;

/// SplitMix64 golden-ratio increment.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Derives the seed of sub-stream `stream` from a parent seed.
///
/// Uses the SplitMix64 finaliser, so neighbouring stream indices produce
/// unrelated seeds. The mapping is a pure function of its arguments, which
/// keeps seeded results independent of thread scheduling.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::derive_seed;
///
/// assert_eq!(derive_seed(42, 3), derive_seed(42, 3));
/// assert_ne!(derive_seed(42, 3), derive_seed(42, 4));
/// ```
#[inline]
pub fn derive_seed(seed: u64, stream: u64) -> u64 {
    let mut z = seed.wrapping_add(stream.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Monte Carlo simulation random number generator.
///
/// Always seeded: unseeded runs resolve a seed before any generator is
/// built. Normal variates come from [`BoxMuller`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(42);
/// let z: f64 = rng.gen_normal();
/// assert!(z.is_finite());
/// ```
#[derive(Clone, Debug)]
pub struct PricerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl PricerRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of random numbers,
    /// enabling reproducible Monte Carlo simulations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let mut rng1 = PricerRng::from_seed(12345);
    /// let mut rng2 = PricerRng::from_seed(12345);
    ///
    /// // Same seed produces identical sequences
    /// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates the generator for sub-stream `stream` of `seed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::rng::{derive_seed, PricerRng};
    ///
    /// let rng = PricerRng::for_stream(7, 2);
    /// assert_eq!(rng.seed(), derive_seed(7, 2));
    /// ```
    #[inline]
    pub fn for_stream(seed: u64, stream: u64) -> Self {
        Self::from_seed(derive_seed(seed, stream))
    }

    /// Returns the seed used for initialisation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let rng = PricerRng::from_seed(42);
    /// assert_eq!(rng.seed(), 42);
    /// ```
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single standard normal variate (mean=0, std=1).
    ///
    /// Consumes two uniforms via the Box–Muller cosine branch.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        BoxMuller.sample(&mut self.inner)
    }
}
