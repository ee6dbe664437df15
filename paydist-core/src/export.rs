use crate::figure::fmt_float;
use crate::pipeline::Report;
use crate::stats::round_to;
use paydist_common::{PaydistError, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

// --- console report ---

pub fn write_report<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    let stats = &report.stats;
    writeln!(out, "bin size {}", report.binning.bins)?;
    writeln!(out, "PDF Mean Annual Salary = {}", fmt_float(stats.mean))?;
    writeln!(
        out,
        "Mean Annual Salary = {}",
        fmt_float(round_to(report.samples.mean, 2))
    )?;
    writeln!(
        out,
        "Fraction of population with salaries between {}W̄ and {}W̄ = {}",
        stats.factors.lower,
        stats.factors.upper,
        fmt_float(stats.band_percent)
    )?;
    Ok(())
}

pub fn print_report(report: &Report) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), report)
}

pub fn print_raw_mean(mean: f64) {
    println!("Mean Annual Salary (W̃): {}", fmt_float(mean));
}

// --- JSON export ---

pub fn export_json(output_path: &Path, report: &Report) -> Result<()> {
    let file = std::fs::File::create(output_path)?;
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}

// --- CSV export, one row per bin ---

#[derive(Serialize)]
struct BinRow {
    bin_start: f64,
    bin_end: f64,
    center: f64,
    width: f64,
    count: u64,
    probability: f64,
    cumulative: f64,
    density: f64,
}

pub fn export_csv(output_path: &Path, report: &Report) -> Result<()> {
    let d = &report.distribution;
    let mut wtr = csv::Writer::from_path(output_path)?;
    for i in 0..d.bins() {
        wtr.serialize(BinRow {
            bin_start: d.edges[i],
            bin_end: d.edges[i + 1],
            center: d.centers[i],
            width: d.widths[i],
            count: d.counts[i],
            probability: d.probability[i],
            cumulative: d.cumulative[i],
            density: d.density[i],
        })?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl std::str::FromStr for ExportFormat {
    type Err = PaydistError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(PaydistError::Other(format!(
                "Unknown format: {other} (use json or csv)"
            ))),
        }
    }
}

pub fn export(output_path: &Path, report: &Report, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Json => export_json(output_path, report),
        ExportFormat::Csv => export_csv(output_path, report),
    }
}
