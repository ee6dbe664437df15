use paydist_common::{PaydistError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
}

impl SampleSummary {
    pub fn iqr(&self) -> f64 {
        self.p75 - self.p25
    }
}

pub struct NumericAccumulator {
    values: Vec<f64>,
    sum: f64,
    min: f64,
    max: f64,
}

impl NumericAccumulator {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            sum: 0.0,
            min: f64::MAX,
            max: f64::MIN,
        }
    }
    pub fn add(&mut self, v: f64) {
        self.values.push(v);
        self.sum += v;
        if v < self.min {
            self.min = v;
        }
        if v > self.max {
            self.max = v;
        }
    }
    pub fn finish(mut self) -> Result<SampleSummary> {
        if self.values.is_empty() {
            return Err(PaydistError::EmptyInput);
        }
        if !(self.max - self.min).is_finite() {
            return Err(PaydistError::RangeOverflow { min: self.min, max: self.max });
        }
        self.values.sort_by(f64::total_cmp);
        let n = self.values.len();
        Ok(SampleSummary {
            count: n,
            min: self.min,
            max: self.max,
            mean: self.sum / n as f64,
            p25: percentile_sorted(&self.values, 25.0),
            p50: percentile_sorted(&self.values, 50.0),
            p75: percentile_sorted(&self.values, 75.0),
        })
    }
}

impl Default for NumericAccumulator {
    fn default() -> Self { Self::new() }
}

pub fn summarize(values: &[f64]) -> Result<SampleSummary> {
    let mut acc = NumericAccumulator::new();
    values.iter().for_each(|&v| acc.add(v));
    acc.finish()
}

/// Percentile `p` (0..=100) of ascending `sorted`, linearly interpolated
/// between the two closest ranks. Panics on an empty slice.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let rank = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
