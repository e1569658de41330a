//! Check command implementation
//!
//! Prints the effective configuration and verifies it against the engine.

use std::path::Path;

use pricer_pricing::engine::ModelSelector;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig, source: Option<&Path>) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;

    let source = source.map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
    let seed = config
        .seed
        .map_or_else(|| "entropy".to_string(), |s| s.to_string());

    println!("option-sweep {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Configuration ({})", source);
    println!("  log level:    {}", config.log_level);
    println!("  paths:        {}", config.paths);
    println!("  steps:        {}", config.steps);
    println!("  batch size:   {}", config.batch_size);
    println!("  seed:         {}", seed);
    println!("  parallel:     {}", config.parallel);
    println!("  tree steps:   {}", config.tree_steps);
    println!(
        "  heston:       v0={} kappa={} theta={} xi={} rho={}",
        config.heston.initial_variance,
        config.heston.mean_reversion,
        config.heston.long_run_variance,
        config.heston.vol_of_vol,
        config.heston.correlation
    );
    println!();
    println!("Runtime");
    println!("  threads:      {}", rayon::current_num_threads());
    println!(
        "  models:       {}",
        ModelSelector::ALL
            .iter()
            .map(ModelSelector::name)
            .collect::<Vec<_>>()
            .join(", ")
    );

    info!("Configuration OK");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_default_config() {
        assert!(run(&CliConfig::default(), None).is_ok());
    }

    #[test]
    fn test_check_rejects_invalid_config() {
        let config = CliConfig {
            batch_size: 0,
            ..CliConfig::default()
        };
        assert!(run(&config, None).is_err());
    }
}
