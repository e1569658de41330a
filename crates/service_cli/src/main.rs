//! option-sweep - Command Line Strike Sweeps
//!
//! Operational entry point for the option pricer.
//!
//! # Commands
//!
//! - `option-sweep sweep --model <name>` - Price calls and puts across the strike grid
//! - `option-sweep quote --model <name> --strike <K>` - Price a single strike
//! - `option-sweep check` - Print and validate the effective configuration
//!
//! # Architecture
//!
//! As the service layer, this crate parses text, loads configuration and
//! renders results. All pricing lives in `pricer_pricing`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::PriceArgs;
use config::{build_config, EngineOverrides};

/// Vanilla option strike-sweep pricer
#[derive(Parser)]
#[command(name = "option-sweep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML); `option-sweep.toml` is used if present
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price calls and puts from 50% to 150% of the level
    Sweep(PriceArgs),

    /// Price a call and put at a single strike
    Quote(PriceArgs),

    /// Check configuration and runtime
    Check,
}

fn init_tracing(default_directive: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive)),
        )
        .init();
}

/// Buffered stdout, or a freshly created file.
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Output {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = match &cli.command {
        Commands::Sweep(args) | Commands::Quote(args) => args.engine.overrides(),
        Commands::Check => EngineOverrides::default(),
    };
    let config = build_config(cli.config.as_deref(), &overrides)?;

    let directive = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    init_tracing(directive);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Configuration loaded");

    match &cli.command {
        Commands::Sweep(args) => commands::sweep::run(args, &config),
        Commands::Quote(args) => commands::quote::run(args, &config),
        Commands::Check => commands::check::run(&config, cli.config.as_deref()),
    }
}
