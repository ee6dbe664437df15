pub mod export;
pub mod figure;
pub mod loader;
pub mod pipeline;
pub mod profile;
pub mod stats;

pub use export::{export, export_csv, export_json, print_raw_mean, print_report, write_report, ExportFormat};
pub use figure::{density_figure, fmt_float, pdf_figure, Bar, DensityFigure, PdfFigure, TextRole};
pub use loader::{load_samples, load_samples_from_reader, SampleFileInfo};
pub use paydist_common::{PaydistError, Result, MAX_BINS};
pub use pipeline::{analyze, analyze_file, Report};
pub use profile::{
    build_histogram, choose_bins, summarize, BinSize, BinningStrategy, Distribution, Histogram,
    SampleSummary,
};
pub use stats::{distribution_stats, round_to, weighted_mean, BandFactors, DistributionStats};
