mod chart;

use chart::{render_density, render_pdf, RenderOptions};
use clap::{Parser, Subcommand};
use paydist_common::Config;
use paydist_core::{
    analyze_file, density_figure, export, export_json, pdf_figure, print_raw_mean, print_report,
    BandFactors, BinningStrategy, ExportFormat,
};
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn parse_bins(s: &str) -> Result<usize, String> { // reject 0 at CLI parse time
    let v: usize = s.parse().map_err(|_| format!("not an integer: {s}"))?;
    if v >= 1 { Ok(v) } else { Err("bins must be at least 1".into()) }
}

#[derive(Parser)]
#[command(name = "paydist", version, about = "Salary distribution profiler")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Freedman-Diaconis PDF chart with the mean band highlighted (default)
    Pdf {
        path: Option<String>,
        #[arg(long)] output: Option<String>,
        #[arg(long)] export: Option<String>,
        #[arg(long, default_value = "json")] format: String,
    },
    /// Fixed-bin probability density chart
    Density {
        path: Option<String>,
        #[arg(long, value_parser = parse_bins)] bins: Option<usize>,
        #[arg(long)] output: Option<String>,
    },
    /// Console report only
    Summary { path: Option<String>, #[arg(long)] save: bool },
    /// Write the default config file
    InitConfig { #[arg(long)] force: bool },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_else(|e| {
        warn!("ignoring config file: {e}");
        Config::default()
    });
    let command = cli.command.unwrap_or(Commands::Pdf {
        path: None,
        output: None,
        export: None,
        format: "json".into(),
    });
    match command {
        Commands::Pdf { path, output, export, format } => run_pdf(path, output, export, format, &config)?,
        Commands::Density { path, bins, output } => run_density(path, bins, output, &config)?,
        Commands::Summary { path, save } => run_summary(path, save, &config)?,
        Commands::InitConfig { force } => run_init_config(force)?,
    }
    Ok(())
}

fn input_path(path: Option<String>, config: &Config) -> PathBuf {
    PathBuf::from(path.unwrap_or_else(|| config.input.path.clone()))
}

fn band_factors(config: &Config) -> anyhow::Result<BandFactors> {
    Ok(BandFactors::try_from(&config.band)?)
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() { std::fs::create_dir_all(parent)?; }
    }
    Ok(())
}

fn run_pdf(path: Option<String>, output: Option<String>, export_to: Option<String>, format: String, config: &Config) -> anyhow::Result<()> {
    // parse the format before any work so a typo fails fast
    let format: ExportFormat = format.parse()?;
    let input = input_path(path, config);
    let report = analyze_file(&input, BinningStrategy::FreedmanDiaconis, band_factors(config)?)?;
    print_report(&report)?;

    let figure = pdf_figure(&report.distribution, &report.stats);
    let out_path = PathBuf::from(output.unwrap_or_else(|| config.render.output.clone()));
    ensure_parent(&out_path)?;
    render_pdf(&figure, &out_path, &RenderOptions::from_config(&config.render))?;
    println!("Chart saved to {}", out_path.display());

    if let Some(dest) = export_to {
        let dest = PathBuf::from(dest);
        ensure_parent(&dest)?;
        export(&dest, &report, format)?;
        println!("Report exported to {}", dest.display());
    }
    Ok(())
}

fn run_density(path: Option<String>, bins: Option<usize>, output: Option<String>, config: &Config) -> anyhow::Result<()> {
    let input = input_path(path, config);
    let bins = bins.unwrap_or(config.binning.fixed_bins);
    let report = analyze_file(&input, BinningStrategy::Fixed(bins), band_factors(config)?)?;
    print_raw_mean(report.samples.mean);

    let figure = density_figure(&report.distribution, report.samples.mean);
    let out_path = PathBuf::from(output.unwrap_or_else(|| config.render.density_output.clone()));
    ensure_parent(&out_path)?;
    render_density(&figure, &out_path, &RenderOptions::from_config(&config.render))?;
    println!("Chart saved to {}", out_path.display());
    Ok(())
}

fn run_summary(path: Option<String>, save: bool, config: &Config) -> anyhow::Result<()> {
    let input = input_path(path, config);
    let report = analyze_file(&input, BinningStrategy::FreedmanDiaconis, band_factors(config)?)?;
    print_report(&report)?;
    if save {
        let out_dir = Path::new(&config.export.output_dir);
        std::fs::create_dir_all(out_dir)?;
        let out_path = out_dir.join("summary.json");
        export_json(&out_path, &report)?;
        println!("Summary saved to {}", out_path.display());
    }
    Ok(())
}

fn run_init_config(force: bool) -> anyhow::Result<()> {
    let path = Config::config_path();
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default().save()?;
    println!("Config written to {}", path.display());
    Ok(())
}
