//! Bin-count selection.
//!
//! The Freedman-Diaconis width is `2 * IQR / n^(1/3)`, truncated to a whole
//! number before the range is divided by it. A width that truncates to zero
//! is reported as [`PaydistError::DegenerateDistribution`]; a count above
//! [`MAX_BINS`] as [`PaydistError::TooManyBins`].

use super::numeric::SampleSummary;
use paydist_common::{PaydistError, Result, MAX_BINS};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "bins", rename_all = "snake_case")]
pub enum BinningStrategy {
    FreedmanDiaconis,
    Fixed(usize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinSize {
    pub strategy: BinningStrategy,
    pub bins: usize,
    pub bin_width: Option<u64>,
    pub iqr: Option<f64>,
}

pub fn choose_bins(summary: &SampleSummary, strategy: BinningStrategy) -> Result<BinSize> {
    let size = match strategy {
        BinningStrategy::FreedmanDiaconis => freedman_diaconis(summary)?,
        BinningStrategy::Fixed(bins) if bins == 0 || bins > MAX_BINS => {
            return Err(PaydistError::Config(format!(
                "fixed bin count must be in 1..={MAX_BINS}, got {bins}"
            )))
        }
        BinningStrategy::Fixed(bins) => BinSize {
            strategy,
            bins,
            bin_width: None,
            iqr: None,
        },
    };
    debug!(strategy = ?size.strategy, bins = size.bins, width = ?size.bin_width, "chose bin count");
    Ok(size)
}

pub fn freedman_diaconis(summary: &SampleSummary) -> Result<BinSize> {
    let iqr = summary.iqr();
    let n = summary.count;
    let raw_width = 2.0 * iqr / (n as f64).cbrt();
    let bin_width = raw_width.trunc();
    if !(bin_width >= 1.0) {
        return Err(PaydistError::DegenerateDistribution { iqr, n });
    }
    let range = summary.max - summary.min;
    let ratio = (range / bin_width).ceil();
    if !(ratio <= MAX_BINS as f64) {
        return Err(PaydistError::TooManyBins { range, width: bin_width, max: MAX_BINS });
    }
    Ok(BinSize {
        strategy: BinningStrategy::FreedmanDiaconis,
        bins: (ratio as usize).max(1),
        bin_width: Some(bin_width as u64),
        iqr: Some(iqr),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::numeric::summarize;

    fn fd(values: &[f64]) -> Result<BinSize> {
        freedman_diaconis(&summarize(values).unwrap())
    }

    #[test]
    fn reference_sample() {
        let s = fd(&[10.0, 20.0, 20.0, 30.0, 30.0, 30.0, 40.0, 40.0, 40.0, 40.0]).unwrap();
        // 2 * 17.5 / 10^(1/3) = 16.24..
        assert_eq!(s.bin_width, Some(16));
        assert_eq!(s.bins, 2);
        assert_eq!(s.iqr, Some(17.5));
    }

    #[test]
    fn salary_scale() {
        let values: Vec<f64> = (0..1000).map(|i| 20_000.0 + 101.0 * i as f64).collect();
        let s = fd(&values).unwrap();
        // IQR 50449.5, width trunc(2 * 50449.5 / 10) = 10089, range 100899
        assert_eq!(s.bin_width, Some(10089));
        assert_eq!(s.bins, 11);
    }

    #[test]
    fn zero_variance_is_degenerate() {
        match fd(&[5.0; 8]) {
            Err(PaydistError::DegenerateDistribution { iqr, n }) => {
                assert_eq!(iqr, 0.0);
                assert_eq!(n, 8);
            }
            other => panic!("expected degenerate error, got {other:?}"),
        }
    }

    #[test]
    fn sub_unit_width_is_degenerate() {
        // IQR 0.5 truncates to a zero width
        assert!(matches!(
            fd(&[0.0, 0.25, 0.5, 0.75, 1.0]),
            Err(PaydistError::DegenerateDistribution { .. })
        ));
    }

    #[test]
    fn single_sample_is_degenerate() {
        assert!(matches!(fd(&[42.0]), Err(PaydistError::DegenerateDistribution { .. })));
    }

    #[test]
    fn fixed_strategy_passes_through() {
        let summary = summarize(&[1.0, 2.0]).unwrap();
        let s = choose_bins(&summary, BinningStrategy::Fixed(30)).unwrap();
        assert_eq!(s.bins, 30);
        assert!(s.bin_width.is_none());
        assert!(choose_bins(&summary, BinningStrategy::Fixed(0)).is_err());
        assert!(choose_bins(&summary, BinningStrategy::Fixed(MAX_BINS + 1)).is_err());
        assert!(choose_bins(&summary, BinningStrategy::Fixed(MAX_BINS)).is_ok());
    }

    #[test]
    fn single_outlier_exceeds_bin_cap() {
        let mut values: Vec<f64> = (0..100).map(f64::from).collect();
        values.push(1.0e300);
        match fd(&values) {
            Err(PaydistError::TooManyBins { range, width, max }) => {
                assert_eq!(range, 1.0e300);
                assert_eq!(width, 21.0);
                assert_eq!(max, MAX_BINS);
            }
            other => panic!("expected too-many-bins error, got {other:?}"),
        }
    }

    #[test]
    fn realistic_outlier_exceeds_bin_cap() {
        let mut values: Vec<f64> = (0..100).map(|i| 30_000.0 + 250.0 * i as f64).collect();
        values.push(1.0e12);
        assert!(matches!(fd(&values), Err(PaydistError::TooManyBins { .. })));
    }
}
