pub mod binning;
pub mod distribution;
pub mod histogram;
pub mod numeric;

pub use binning::{choose_bins, freedman_diaconis, BinSize, BinningStrategy};
pub use distribution::Distribution;
pub use histogram::{build_histogram, Histogram, HistogramBin};
pub use numeric::{percentile_sorted, summarize, SampleSummary};
