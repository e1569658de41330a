//! Monte Carlo simulation configuration.
//!
//! This module provides configuration types and builders for the terminal
//! GBM and Heston Monte Carlo engines.

use super::error::ConfigError;
use crate::rng::derive_seed;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Maximum number of paths in one batch.
pub const MAX_BATCH_SIZE: usize = 1_000_000;

/// Default number of simulation paths.
pub const DEFAULT_PATHS: usize = 10_000;

/// Default number of time steps per path (Heston).
pub const DEFAULT_STEPS: usize = 100;

/// Default number of paths per batch.
pub const DEFAULT_BATCH_SIZE: usize = 2_048;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// Paths are simulated in batches of `batch_size`; each batch draws from
/// its own generator so the result does not depend on how batches are
/// scheduled across threads.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 50_000);
/// assert_eq!(config.n_steps(), 252);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Number of time steps per path.
    n_steps: usize,
    /// Paths per batch.
    batch_size: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Whether batches run on the rayon pool.
    parallel: bool,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of paths per batch.
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether batches run in parallel.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Number of batches needed to cover `n_paths`.
    #[inline]
    pub fn n_batches(&self) -> usize {
        self.n_paths.div_ceil(self.batch_size)
    }

    /// Returns a copy whose seed is the sub-stream `stream` of this seed.
    ///
    /// Unseeded configurations are returned unchanged. The sweep gives each
    /// strike its own stream so curves do not share random numbers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::mc::MonteCarloConfig;
    ///
    /// let base = MonteCarloConfig::builder().seed(7).build().unwrap();
    /// assert_ne!(base.for_stream(0).seed(), base.for_stream(1).seed());
    /// assert_eq!(base.for_stream(3), base.for_stream(3));
    ///
    /// let unseeded = MonteCarloConfig::default();
    /// assert_eq!(unseeded.for_stream(3).seed(), None);
    /// ```
    pub fn for_stream(&self, stream: u64) -> Self {
        Self {
            seed: self.seed.map(|seed| derive_seed(seed, stream)),
            ..self.clone()
        }
    }

    /// Returns a copy with `seed` fixed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::mc::MonteCarloConfig;
    ///
    /// let config = MonteCarloConfig::default().with_seed(11);
    /// assert_eq!(config.seed(), Some(11));
    /// ```
    pub fn with_seed(&self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self.clone()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than 10,000,000
    /// - `n_steps` is 0 or greater than 10,000
    /// - `batch_size` is 0 or greater than 1,000,000
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            return Err(ConfigError::InvalidBatchSize(self.batch_size));
        }
        Ok(())
    }
}

impl Default for MonteCarloConfig {
    /// 10,000 paths, 100 steps, batches of 2,048, unseeded, parallel.
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            n_steps: DEFAULT_STEPS,
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
            parallel: true,
        }
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Provides a fluent API for constructing Monte Carlo configurations
/// with validation at build time. Unset fields take the defaults.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(200_000)
///     .batch_size(4_096)
///     .parallel(false)
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.n_steps(), 100);
/// assert!(!config.parallel());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    batch_size: Option<usize>,
    seed: Option<u64>,
    parallel: Option<bool>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths.
    ///
    /// # Arguments
    ///
    /// * `n_paths` - Number of paths in [1, 10_000_000]
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path.
    ///
    /// # Arguments
    ///
    /// * `n_steps` - Number of steps in [1, 10_000]
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the number of paths per batch.
    #[inline]
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Sets the seed for reproducibility.
    ///
    /// # Arguments
    ///
    /// * `seed` - 64-bit seed value
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional seed; `None` draws from OS entropy per run.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables parallel batch execution.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any count is out of range.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let config = MonteCarloConfig {
            n_paths: self.n_paths.unwrap_or(DEFAULT_PATHS),
            n_steps: self.n_steps.unwrap_or(DEFAULT_STEPS),
            batch_size: self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE),
            seed: self.seed,
            parallel: self.parallel.unwrap_or(true),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = MonteCarloConfig::builder().build().unwrap();

        assert_eq!(config.n_paths(), 10_000);
        assert_eq!(config.n_steps(), 100);
        assert_eq!(config.batch_size(), 2_048);
        assert_eq!(config.seed(), None);
        assert!(config.parallel());
        assert_eq!(config, MonteCarloConfig::default());
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = MonteCarloConfig::builder()
            .n_paths(1000)
            .n_steps(100)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.seed(), Some(42));

        let cleared = MonteCarloConfig::builder().seed(1).maybe_seed(None).build().unwrap();
        assert_eq!(cleared.seed(), None);
    }

    #[test]
    fn test_n_batches_rounds_up() {
        let config = MonteCarloConfig::builder()
            .n_paths(10_000)
            .batch_size(2_048)
            .build()
            .unwrap();
        assert_eq!(config.n_batches(), 5);

        let exact = MonteCarloConfig::builder()
            .n_paths(4_096)
            .batch_size(2_048)
            .build()
            .unwrap();
        assert_eq!(exact.n_batches(), 2);
    }

    #[test]
    fn test_config_invalid_zero_paths() {
        let result = MonteCarloConfig::builder().n_paths(0).n_steps(100).build();

        assert!(matches!(result, Err(ConfigError::InvalidPathCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_paths() {
        let result = MonteCarloConfig::builder()
            .n_paths(MAX_PATHS + 1)
            .n_steps(100)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidPathCount(_))));
    }

    #[test]
    fn test_config_invalid_zero_steps() {
        let result = MonteCarloConfig::builder().n_paths(1000).n_steps(0).build();

        assert!(matches!(result, Err(ConfigError::InvalidStepCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_steps() {
        let result = MonteCarloConfig::builder()
            .n_paths(1000)
            .n_steps(MAX_STEPS + 1)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidStepCount(_))));
    }

    #[test]
    fn test_config_invalid_batch_size() {
        let result = MonteCarloConfig::builder().batch_size(0).build();

        assert!(matches!(result, Err(ConfigError::InvalidBatchSize(0))));
    }

    #[test]
    fn test_for_stream_keeps_other_fields() {
        let config = MonteCarloConfig::builder()
            .n_paths(5_000)
            .seed(11)
            .parallel(false)
            .build()
            .unwrap();
        let stream = config.for_stream(4);

        assert_eq!(stream.n_paths(), 5_000);
        assert!(!stream.parallel());
        assert_eq!(stream.seed(), Some(derive_seed(11, 4)));
    }
}
