use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramBin {
    pub range_start: f64,
    pub range_end: f64,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
}

impl Histogram {
    pub fn bins(&self) -> usize {
        self.counts.len()
    }
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
    pub fn iter_bins(&self) -> impl Iterator<Item = HistogramBin> + '_ {
        self.counts.iter().enumerate().map(|(i, &count)| HistogramBin {
            range_start: self.edges[i],
            range_end: self.edges[i + 1],
            count,
        })
    }
}

/// Equal-width histogram over `[min, max]`. Every bin is half-open except the
/// last, which also takes values equal to `max`.
///
/// A range too narrow to hold `bins` distinct edges at its magnitude is
/// widened around its midpoint, by 0.5 on each side for constant input. Empty
/// input, zero bins or a non-finite range give an empty histogram.
pub fn build_histogram(values: &[f64], bins: usize) -> Histogram {
    let empty = Histogram { edges: Vec::new(), counts: Vec::new() };
    if values.is_empty() || bins == 0 {
        return empty;
    }
    let mut min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let mut max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !(max - min).is_finite() {
        return empty;
    }
    // edges computed from min + span * i / bins carry a few ulps of error each
    let resolution = 16.0 * f64::EPSILON * min.abs().max(max.abs()).max(1.0) * bins as f64;
    if max - min < resolution {
        let mid = min + (max - min) / 2.0;
        let half = (resolution / 2.0).max(0.5);
        min = mid - half;
        max = mid + half;
    }
    let span = max - min;
    if !span.is_finite() {
        return empty;
    }
    // power-of-two prescale keeps span * i finite without changing the rounding
    let shrink = if (span * bins as f64).is_finite() { 1.0 } else { 2f64.powi(-64) };
    let mut edges: Vec<f64> = (0..=bins)
        .map(|i| min + span * shrink * i as f64 / bins as f64 / shrink)
        .collect();
    edges[bins] = max;

    let mut counts = vec![0u64; bins];
    for &v in values {
        let mut idx = (((v - min) / span) * bins as f64) as usize;
        idx = idx.min(bins - 1);
        // the scaled index can land one off an edge through rounding
        if v < edges[idx] && idx > 0 {
            idx -= 1;
        } else if idx + 1 < bins && v >= edges[idx + 1] {
            idx += 1;
        }
        counts[idx] += 1;
    }
    Histogram { edges, counts }
}
