use crate::profile::Distribution;
use paydist_common::{BandConfig, PaydistError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandFactors {
    pub lower: f64,
    pub upper: f64,
}

impl BandFactors {
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !(lower.is_finite() && upper.is_finite()) || lower >= upper {
            return Err(PaydistError::Config(format!(
                "band factors must satisfy lower < upper, got {lower} and {upper}"
            )));
        }
        Ok(Self { lower, upper })
    }

    /// Legend-style label, e.g. `0.8W̄ to 1.2W̄`.
    pub fn label(&self) -> String {
        format!("{}W̄ to {}W̄", self.lower, self.upper)
    }
}

impl Default for BandFactors {
    fn default() -> Self {
        Self { lower: 0.8, upper: 1.2 }
    }
}

impl TryFrom<&BandConfig> for BandFactors {
    type Error = PaydistError;
    fn try_from(cfg: &BandConfig) -> Result<Self> {
        Self::new(cfg.lower_factor, cfg.upper_factor)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionStats {
    /// sum of center * probability, unrounded
    pub weighted_mean: f64,
    /// weighted mean rounded to 2 decimals; thresholds derive from this
    pub mean: f64,
    pub lower: f64,
    pub upper: f64,
    pub factors: BandFactors,
    pub in_band: Vec<bool>,
    pub band_mass: f64,
    /// band mass as a whole percentage
    pub band_percent: f64,
}

pub fn weighted_mean(dist: &Distribution) -> f64 {
    dist.centers
        .iter()
        .zip(&dist.probability)
        .map(|(c, p)| c * p)
        .sum()
}

/// Rounds half to even at `decimals` places.
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round_ties_even() / scale
}

pub fn distribution_stats(dist: &Distribution, factors: BandFactors) -> DistributionStats {
    let weighted = weighted_mean(dist);
    let mean = round_to(weighted, 2);
    let lower = round_to(mean * factors.lower, 2);
    let upper = round_to(mean * factors.upper, 2);
    let in_band: Vec<bool> = dist
        .centers
        .iter()
        .map(|&c| c >= lower && c <= upper)
        .collect();
    let band_mass: f64 = dist
        .probability
        .iter()
        .zip(&in_band)
        .filter(|(_, hit)| **hit)
        .map(|(p, _)| p)
        .sum();
    DistributionStats {
        weighted_mean: weighted,
        mean,
        lower,
        upper,
        factors,
        in_band,
        band_mass,
        band_percent: (band_mass * 100.0).round_ties_even(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::build_histogram;

    fn reference() -> Distribution {
        let h = build_histogram(&[10.0, 20.0, 20.0, 30.0, 30.0, 30.0, 40.0, 40.0, 40.0, 40.0], 2);
        Distribution::from_histogram(&h)
    }

    #[test]
    fn reference_stats() {
        let s = distribution_stats(&reference(), BandFactors::default());
        assert!((s.weighted_mean - 28.0).abs() < 1e-12);
        assert_eq!(s.mean, 28.0);
        assert_eq!(s.lower, 22.4);
        assert_eq!(s.upper, 33.6);
        assert_eq!(s.in_band, vec![false, true]);
        assert!((s.band_mass - 0.7).abs() < 1e-12);
        assert_eq!(s.band_percent, 70.0);
    }

    #[test]
    fn wider_band_takes_everything() {
        let f = BandFactors::new(0.5, 1.5).unwrap();
        let s = distribution_stats(&reference(), f);
        assert_eq!(s.in_band, vec![true, true]);
        assert_eq!(s.band_percent, 100.0);
    }

    #[test]
    fn band_bounds_are_inclusive() {
        // centers 15 and 25 with equal mass: mean 20, band [15, 25] exactly
        let h = build_histogram(&[10.0, 30.0], 2);
        let d = Distribution::from_histogram(&h);
        let s = distribution_stats(&d, BandFactors::new(0.75, 1.25).unwrap());
        assert_eq!((s.lower, s.upper), (15.0, 25.0));
        assert_eq!(s.in_band, vec![true, true]);
    }

    #[test]
    fn rounding_is_half_even() {
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(1234.5678, 2), 1234.57);
        assert_eq!(round_to(-0.125, 2), -0.12);
    }

    #[test]
    fn inverted_factors_rejected() {
        assert!(BandFactors::new(1.2, 0.8).is_err());
        assert!(BandFactors::new(1.0, 1.0).is_err());
        assert!(BandFactors::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn factors_from_config() {
        let f = BandFactors::try_from(&BandConfig::default()).unwrap();
        assert_eq!(f, BandFactors::default());
        assert_eq!(f.label(), "0.8W̄ to 1.2W̄");
    }
}
