pub mod config;
pub use config::{
    BandConfig, BinningConfig, Config, ExportConfig, InputConfig, RenderConfig, MAX_BINS,
    MAX_CANVAS,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaydistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: cannot parse {token:?} as a number")]
    Parse { line: u64, token: String },
    #[error("no numeric samples in input")]
    EmptyInput,
    #[error("degenerate distribution: IQR {iqr} over {n} samples truncates to a zero bin width")]
    DegenerateDistribution { iqr: f64, n: usize },
    #[error("range {range} over bin width {width} needs more than {max} bins")]
    TooManyBins { range: f64, width: f64, max: usize },
    #[error("sample range [{min}, {max}] is not representable")]
    RangeOverflow { min: f64, max: f64 },
    #[error("config error: {0}")]
    Config(String),
    #[error("render error: {0}")]
    Render(String),
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for PaydistError {
    fn from(e: serde_json::Error) -> Self {
        PaydistError::Other(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PaydistError>;
