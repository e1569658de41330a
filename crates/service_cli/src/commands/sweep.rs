//! Sweep command implementation
//!
//! Prices calls and puts across the strike grid and renders the curve.

use std::io::Write;

use tracing::info;

use pricer_pricing::engine::ModelSelector;
use pricer_pricing::sweep::sweep;

use super::PriceArgs;
use crate::config::CliConfig;
use crate::output::{write_curve, ReportHeader};
use crate::{open_output, Result};

/// Run the sweep command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<()> {
    let selector: ModelSelector = args.model.parse()?;
    let domain = args.market.domain()?;
    let inputs = args.market.inputs(selector, config.heston);
    let settings = config.sweep_settings()?;

    info!(
        model = %selector,
        asset = %domain,
        level = inputs.level,
        low = inputs.low,
        high = inputs.high,
        "Starting sweep"
    );

    let result = sweep(&inputs, selector, &settings)?;
    info!(
        points = result.curve.len(),
        sigma = result.volatility,
        seed = ?result.seed,
        "Sweep complete"
    );

    let header = ReportHeader::for_sweep(domain, inputs.level, &result);
    let mut out = open_output(args.output.as_deref())?;
    write_curve(
        &mut out,
        args.format,
        &header,
        result.curve.points(),
        result.std_errors.as_deref(),
    )?;
    out.flush()?;
    Ok(())
}
