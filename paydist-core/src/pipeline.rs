use crate::loader::{load_samples, SampleFileInfo};
use crate::profile::{build_histogram, choose_bins, summarize, BinSize, BinningStrategy, Distribution, SampleSummary};
use crate::stats::{distribution_stats, BandFactors, DistributionStats};
use paydist_common::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SampleFileInfo>,
    pub samples: SampleSummary,
    pub binning: BinSize,
    pub distribution: Distribution,
    pub stats: DistributionStats,
}

pub fn analyze(samples: &[f64], strategy: BinningStrategy, factors: BandFactors) -> Result<Report> {
    let summary = summarize(samples)?;
    let binning = choose_bins(&summary, strategy)?;
    let hist = build_histogram(samples, binning.bins);
    let distribution = Distribution::from_histogram(&hist);
    let stats = distribution_stats(&distribution, factors);
    debug!(
        weighted_mean = stats.weighted_mean,
        band_percent = stats.band_percent,
        "computed distribution statistics"
    );
    Ok(Report {
        source: None,
        samples: summary,
        binning,
        distribution,
        stats,
    })
}

pub fn analyze_file(path: &Path, strategy: BinningStrategy, factors: BandFactors) -> Result<Report> {
    let (info, samples) = load_samples(path)?;
    let mut report = analyze(&samples, strategy, factors)?;
    info!(path = %path.display(), samples = info.sample_count, bins = report.binning.bins, "analyzed");
    report.source = Some(info);
    Ok(report)
}
