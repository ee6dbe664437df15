use super::histogram::Histogram;
use serde::{Deserialize, Serialize};

/// Discrete distribution over histogram bins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Distribution {
    pub counts: Vec<u64>,
    pub edges: Vec<f64>,
    pub centers: Vec<f64>,
    pub widths: Vec<f64>,
    /// count / total, sums to 1
    pub probability: Vec<f64>,
    pub cumulative: Vec<f64>,
    /// probability / width
    pub density: Vec<f64>,
}

impl Distribution {
    pub fn from_histogram(hist: &Histogram) -> Self {
        let total = hist.total();
        let centers: Vec<f64> = hist.edges.windows(2).map(|w| w[0] / 2.0 + w[1] / 2.0).collect();
        let widths: Vec<f64> = hist.edges.windows(2).map(|w| w[1] - w[0]).collect();
        let probability: Vec<f64> = hist
            .counts
            .iter()
            .map(|&c| if total > 0 { c as f64 / total as f64 } else { 0.0 })
            .collect();
        let cumulative = probability
            .iter()
            .scan(0.0, |acc, &p| {
                *acc += p;
                Some(*acc)
            })
            .collect();
        let density = probability
            .iter()
            .zip(&widths)
            .map(|(p, w)| if *w > 0.0 { p / w } else { 0.0 })
            .collect();
        Self {
            counts: hist.counts.clone(),
            edges: hist.edges.clone(),
            centers,
            widths,
            probability,
            cumulative,
            density,
        }
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn max_probability(&self) -> f64 {
        self.probability.iter().cloned().fold(0.0, f64::max)
    }

    pub fn max_density(&self) -> f64 {
        self.density.iter().cloned().fold(0.0, f64::max)
    }
}
