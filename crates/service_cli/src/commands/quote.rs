//! Quote command implementation
//!
//! Prices the call and put at a single strike.

use std::io::Write;

use tracing::info;

use pricer_pricing::engine::ModelSelector;
use pricer_pricing::sweep::quote;

use super::PriceArgs;
use crate::config::CliConfig;
use crate::output::{write_quote, ReportHeader};
use crate::{open_output, Result};

/// Run the quote command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<()> {
    let selector: ModelSelector = args.model.parse()?;
    let domain = args.market.domain()?;
    let inputs = args.market.inputs(selector, config.heston);
    let settings = config.sweep_settings()?;

    info!(model = %selector, asset = %domain, strike = inputs.strike, "Starting quote");

    let result = quote(&inputs, selector, &settings)?;

    let header = ReportHeader::for_quote(domain, inputs.level, &result);
    let mut out = open_output(args.output.as_deref())?;
    write_quote(
        &mut out,
        args.format,
        &header,
        &result.quote,
        result.std_error.as_ref(),
    )?;
    out.flush()?;
    Ok(())
}
