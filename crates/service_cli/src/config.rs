//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables,
//! and command-line flags.
//!
//! Priority (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (`OPTION_SWEEP_*`)
//! 3. Config file
//! 4. Default values

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_models::lattice::{DEFAULT_TREE_STEPS, MAX_TREE_STEPS};
use pricer_pricing::engine::EngineSettings;
use pricer_pricing::inputs::HestonInputs;
use pricer_pricing::mc::{MonteCarloConfig, DEFAULT_BATCH_SIZE, DEFAULT_PATHS, DEFAULT_STEPS};
use pricer_pricing::sweep::SweepSettings;
use serde::Deserialize;
use thiserror::Error;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "option-sweep.toml";

/// Environment variable names.
pub mod env_keys {
    /// Monte Carlo path count.
    pub const PATHS: &str = "OPTION_SWEEP_PATHS";
    /// Heston time steps.
    pub const STEPS: &str = "OPTION_SWEEP_STEPS";
    /// Binomial lattice steps.
    pub const TREE_STEPS: &str = "OPTION_SWEEP_TREE_STEPS";
    /// Monte Carlo seed.
    pub const SEED: &str = "OPTION_SWEEP_SEED";
    /// Paths per batch.
    pub const BATCH_SIZE: &str = "OPTION_SWEEP_BATCH_SIZE";
    /// Parallel path batches and strikes.
    pub const PARALLEL: &str = "OPTION_SWEEP_PARALLEL";
    /// Default log level.
    pub const LOG_LEVEL: &str = "OPTION_SWEEP_LOG_LEVEL";

    /// Every key, in the order overrides are applied.
    pub const ALL: [&str; 7] = [PATHS, STEPS, TREE_STEPS, SEED, BATCH_SIZE, PARALLEL, LOG_LEVEL];
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unrecognised log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// A value that does not parse for its key.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Config key or environment variable
        key: String,
        /// Raw value
        value: String,
    },

    /// Lattice step count out of range.
    #[error("Invalid tree_steps: {0}. Must be between 1 and {max}", max = MAX_TREE_STEPS)]
    InvalidTreeSteps(usize),

    /// Monte Carlo settings rejected by the engine.
    #[error("Invalid Monte Carlo settings: {0}")]
    Engine(#[from] pricer_pricing::mc::ConfigError),

    /// Config file missing or unreadable.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Per-batch trace events
    Trace,
    /// Per-sweep debug events
    Debug,
    /// Command progress
    Info,
    /// Negative volatility and other warnings only
    #[default]
    Warn,
    /// Errors only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Effective CLI configuration.
///
/// Every field is optional in the TOML file:
///
/// ```toml
/// log_level = "info"
/// paths = 50000
/// seed = 42
///
/// [heston]
/// vol_of_vol = 0.5
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Default tracing directive when `RUST_LOG` is unset.
    pub log_level: LogLevel,
    /// Monte Carlo and Heston path count.
    pub paths: usize,
    /// Heston time steps.
    pub steps: usize,
    /// Paths per batch.
    pub batch_size: usize,
    /// Seed for reproducible Monte Carlo; entropy when absent.
    pub seed: Option<u64>,
    /// Run path batches and strikes on the rayon pool.
    pub parallel: bool,
    /// Binomial lattice steps.
    pub tree_steps: usize,
    /// Heston parameters used when flags do not override them.
    pub heston: HestonInputs,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            paths: DEFAULT_PATHS,
            steps: DEFAULT_STEPS,
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
            parallel: true,
            tree_steps: DEFAULT_TREE_STEPS,
            heston: HestonInputs::default(),
        }
    }
}

/// Engine overrides given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOverrides {
    /// `--paths`
    pub paths: Option<usize>,
    /// `--steps`
    pub steps: Option<usize>,
    /// `--tree-steps`
    pub tree_steps: Option<usize>,
    /// `--seed`
    pub seed: Option<u64>,
    /// `--sequential` forces `Some(false)`
    pub parallel: Option<bool>,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            ConfigError::FileError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Applies overrides looked up by environment variable name.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(env_keys::PATHS) {
            self.paths = parse_value(env_keys::PATHS, &value)?;
        }
        if let Some(value) = lookup(env_keys::STEPS) {
            self.steps = parse_value(env_keys::STEPS, &value)?;
        }
        if let Some(value) = lookup(env_keys::TREE_STEPS) {
            self.tree_steps = parse_value(env_keys::TREE_STEPS, &value)?;
        }
        if let Some(value) = lookup(env_keys::SEED) {
            self.seed = Some(parse_value(env_keys::SEED, &value)?);
        }
        if let Some(value) = lookup(env_keys::BATCH_SIZE) {
            self.batch_size = parse_value(env_keys::BATCH_SIZE, &value)?;
        }
        if let Some(value) = lookup(env_keys::PARALLEL) {
            self.parallel = parse_flag(env_keys::PARALLEL, &value)?;
        }
        if let Some(value) = lookup(env_keys::LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&value)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, overrides: &EngineOverrides) {
        if let Some(paths) = overrides.paths {
            self.paths = paths;
        }
        if let Some(steps) = overrides.steps {
            self.steps = steps;
        }
        if let Some(tree_steps) = overrides.tree_steps {
            self.tree_steps = tree_steps;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(parallel) = overrides.parallel {
            self.parallel = parallel;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sweep_settings().map(|_| ())
    }

    /// Engine settings for a sweep.
    pub fn sweep_settings(&self) -> Result<SweepSettings, ConfigError> {
        if self.tree_steps == 0 || self.tree_steps > MAX_TREE_STEPS {
            return Err(ConfigError::InvalidTreeSteps(self.tree_steps));
        }

        let monte_carlo = MonteCarloConfig::builder()
            .n_paths(self.paths)
            .n_steps(self.steps)
            .batch_size(self.batch_size)
            .maybe_seed(self.seed)
            .parallel(self.parallel)
            .build()?;

        Ok(SweepSettings {
            engine: EngineSettings {
                monte_carlo,
                tree_steps: self.tree_steps,
            },
            parallel_strikes: self.parallel,
            ..SweepSettings::default()
        })
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Build configuration from all sources.
///
/// An explicit `path` must exist; without one, [`DEFAULT_CONFIG_FILE`] is
/// read from the working directory if present.
pub fn build_config(
    path: Option<&Path>,
    overrides: &EngineOverrides,
) -> Result<CliConfig, ConfigError> {
    build_config_with(path, overrides, |key| std::env::var(key).ok())
}

/// [`build_config`] with an injectable environment lookup.
pub fn build_config_with<F>(
    path: Option<&Path>,
    overrides: &EngineOverrides,
    lookup: F,
) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                CliConfig::from_file(&default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_overrides(lookup)?;
    config.merge_with_cli(overrides);
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn write_toml(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.paths, 10_000);
        assert_eq!(config.steps, 100);
        assert_eq!(config.tree_steps, 100);
        assert_eq!(config.seed, None);
        assert!(config.parallel);
        assert_eq!(config.heston, HestonInputs::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Trace), "trace");
        assert_eq!(format!("{}", LogLevel::Error), "error");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            paths = 50000
            steps = 250
            batch_size = 4096
            seed = 42
            parallel = false
            tree_steps = 400

            [heston]
            vol_of_vol = 0.5
            correlation = -0.3
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.paths, 50_000);
        assert_eq!(config.steps, 250);
        assert_eq!(config.batch_size, 4096);
        assert_eq!(config.seed, Some(42));
        assert!(!config.parallel);
        assert_eq!(config.tree_steps, 400);
        assert_eq!(config.heston.vol_of_vol, 0.5);
        assert_eq!(config.heston.correlation, -0.3);
        // Unspecified Heston fields keep their defaults
        assert_eq!(config.heston.mean_reversion, 2.0);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: CliConfig = toml::from_str("paths = 1234").unwrap();
        assert_eq!(config.paths, 1234);
        assert_eq!(config.steps, DEFAULT_STEPS);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_unknown_toml_key_rejected() {
        assert!(toml::from_str::<CliConfig>("path = 10").is_err());
    }

    #[test]
    fn test_from_file() {
        let file = write_toml("seed = 7\ntree_steps = 250\n");
        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.tree_steps, 250);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }

    #[test]
    fn test_environment_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_overrides(env(&[
                (env_keys::PATHS, "20000"),
                (env_keys::SEED, "99"),
                (env_keys::PARALLEL, "off"),
                (env_keys::LOG_LEVEL, "info"),
            ]))
            .unwrap();

        assert_eq!(config.paths, 20_000);
        assert_eq!(config.seed, Some(99));
        assert!(!config.parallel);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.steps, DEFAULT_STEPS);
    }

    #[test]
    fn test_environment_override_rejects_garbage() {
        let mut config = CliConfig::default();
        let err = config
            .apply_overrides(env(&[(env_keys::TREE_STEPS, "many")]))
            .unwrap_err();
        match err {
            ConfigError::InvalidValue { key, value } => {
                assert_eq!(key, env_keys::TREE_STEPS);
                assert_eq!(value, "many");
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_takes_precedence_over_environment_and_file() {
        let file = write_toml("paths = 1000\nseed = 1\n");
        let overrides = EngineOverrides {
            paths: Some(3000),
            ..EngineOverrides::default()
        };

        let config = build_config_with(
            Some(file.path()),
            &overrides,
            env(&[(env_keys::PATHS, "2000"), (env_keys::SEED, "2")]),
        )
        .unwrap();

        assert_eq!(config.paths, 3000);
        assert_eq!(config.seed, Some(2));
    }

    #[test]
    fn test_validate_rejects_zero_paths() {
        let config = CliConfig {
            paths: 0,
            ..CliConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Engine(_))));
    }

    #[test]
    fn test_validate_rejects_tree_steps() {
        for tree_steps in [0, MAX_TREE_STEPS + 1] {
            let config = CliConfig {
                tree_steps,
                ..CliConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidTreeSteps(n)) if n == tree_steps
            ));
        }
    }

    #[test]
    fn test_sweep_settings_follow_parallel_flag() {
        let config = CliConfig {
            parallel: false,
            seed: Some(5),
            ..CliConfig::default()
        };
        let settings = config.sweep_settings().unwrap();
        assert!(!settings.parallel_strikes);
        assert!(!settings.engine.monte_carlo.parallel());
        assert_eq!(settings.engine.monte_carlo.seed(), Some(5));
    }
}
