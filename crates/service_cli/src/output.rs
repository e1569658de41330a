//! Rendering of curves and quotes as a table, JSON or CSV.

use std::io::Write;

use clap::ValueEnum;
use pricer_core::types::{AssetDomain, OptionPair, PriceQuote};
use pricer_pricing::sweep::{QuoteResult, SweepResult};
use serde::Serialize;

use crate::Result;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Box-drawn table for terminals
    #[default]
    Table,
    /// Pretty-printed JSON document
    Json,
    /// `strike,call,put` rows, plus standard-error columns for Monte Carlo
    Csv,
}

/// Labels printed above the prices.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReportHeader {
    /// Equity or FX pair.
    pub asset: AssetDomain,
    /// Model name.
    pub model: &'static str,
    /// Underlying level.
    pub level: f64,
    /// Range volatility used for every strike.
    pub volatility: f64,
    /// Monte Carlo base seed, for replaying the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ReportHeader {
    /// Header for a sweep.
    pub fn for_sweep(asset: AssetDomain, level: f64, result: &SweepResult) -> Self {
        Self {
            asset,
            model: result.model.name(),
            level,
            volatility: result.volatility,
            seed: result.seed,
        }
    }

    /// Header for a single quote.
    pub fn for_quote(asset: AssetDomain, level: f64, result: &QuoteResult) -> Self {
        Self {
            asset,
            model: result.model.name(),
            level,
            volatility: result.volatility,
            seed: result.seed,
        }
    }
}

#[derive(Serialize)]
struct CurveDocument<'a> {
    #[serde(flatten)]
    header: &'a ReportHeader,
    curve: &'a [PriceQuote],
    #[serde(skip_serializing_if = "Option::is_none")]
    std_errors: Option<&'a [OptionPair]>,
}

#[derive(Serialize)]
struct QuoteDocument<'a> {
    #[serde(flatten)]
    header: &'a ReportHeader,
    quote: &'a PriceQuote,
    #[serde(skip_serializing_if = "Option::is_none")]
    std_error: Option<&'a OptionPair>,
}

/// CSV row for Monte Carlo output.
#[derive(Serialize)]
struct SampledRow {
    strike: f64,
    call: f64,
    put: f64,
    call_std_error: f64,
    put_std_error: f64,
}

/// Writes a curve in `format`.
///
/// `std_errors`, when present, holds one entry per point and adds
/// standard-error columns to the table and CSV.
pub fn write_curve<W: Write>(
    out: &mut W,
    format: OutputFormat,
    header: &ReportHeader,
    points: &[PriceQuote],
    std_errors: Option<&[OptionPair]>,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, header, points, std_errors),
        OutputFormat::Json => {
            let document = CurveDocument {
                header,
                curve: points,
                std_errors,
            };
            serde_json::to_writer_pretty(&mut *out, &document)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => write_csv(out, points, std_errors),
    }
}

/// Writes one quote in `format`.
pub fn write_quote<W: Write>(
    out: &mut W,
    format: OutputFormat,
    header: &ReportHeader,
    quote: &PriceQuote,
    std_error: Option<&OptionPair>,
) -> Result<()> {
    let points = std::slice::from_ref(quote);
    let std_errors = std_error.map(std::slice::from_ref);
    match format {
        OutputFormat::Table => write_table(out, header, points, std_errors),
        OutputFormat::Json => {
            let document = QuoteDocument {
                header,
                quote,
                std_error,
            };
            serde_json::to_writer_pretty(&mut *out, &document)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => write_csv(out, points, std_errors),
    }
}

fn write_table<W: Write>(
    out: &mut W,
    header: &ReportHeader,
    points: &[PriceQuote],
    std_errors: Option<&[OptionPair]>,
) -> Result<()> {
    writeln!(out, "Model:      {}", header.model)?;
    writeln!(out, "Asset:      {}", header.asset)?;
    writeln!(out, "Level:      {:.2} ({})", header.level, header.asset.level_label())?;
    writeln!(out, "Volatility: {:.6}", header.volatility)?;
    if let Some(seed) = header.seed {
        writeln!(out, "Seed:       {}", seed)?;
    }

    match std_errors {
        None => {
            writeln!(out, "┌────────────┬────────────┬────────────┐")?;
            writeln!(out, "│ Strike     │ Call       │ Put        │")?;
            writeln!(out, "├────────────┼────────────┼────────────┤")?;
            for point in points {
                writeln!(
                    out,
                    "│ {:>10.2} │ {:>10.2} │ {:>10.2} │",
                    point.strike, point.call, point.put
                )?;
            }
            writeln!(out, "└────────────┴────────────┴────────────┘")?;
        }
        Some(std_errors) => {
            writeln!(out, "┌────────────┬────────────┬──────────┬────────────┬──────────┐")?;
            writeln!(out, "│ Strike     │ Call       │ ± SE     │ Put        │ ± SE     │")?;
            writeln!(out, "├────────────┼────────────┼──────────┼────────────┼──────────┤")?;
            for (point, se) in points.iter().zip(std_errors) {
                writeln!(
                    out,
                    "│ {:>10.2} │ {:>10.2} │ {:>8.4} │ {:>10.2} │ {:>8.4} │",
                    point.strike, point.call, se.call, point.put, se.put
                )?;
            }
            writeln!(out, "└────────────┴────────────┴──────────┴────────────┴──────────┘")?;
        }
    }
    Ok(())
}

fn write_csv<W: Write>(
    out: &mut W,
    points: &[PriceQuote],
    std_errors: Option<&[OptionPair]>,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    match std_errors {
        None => {
            for point in points {
                writer.serialize(point)?;
            }
        }
        Some(std_errors) => {
            for (point, se) in points.iter().zip(std_errors) {
                writer.serialize(SampledRow {
                    strike: point.strike,
                    call: point.call,
                    put: point.put,
                    call_std_error: se.call,
                    put_std_error: se.put,
                })?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
