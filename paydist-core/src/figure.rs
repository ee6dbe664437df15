//! Renderer-agnostic chart descriptions.
//!
//! Everything a chart needs is resolved here: bar geometry, the highlight
//! mask, annotation strings and axis limits. Backends only draw.

use crate::profile::Distribution;
use crate::stats::DistributionStats;
use serde::{Deserialize, Serialize};

pub const PDF_TITLE: &str = "Probability Distribution Function (PDF)";
pub const DENSITY_TITLE: &str = "Probability Density Function of Annual Salaries";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub left: f64,
    pub right: f64,
    pub height: f64,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextRole {
    Headline,
    Mean,
    Lower,
    Upper,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub role: TextRole,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub y_max: f64,
    pub bars: Vec<Bar>,
    pub mean: f64,
    /// top of the mean marker, the tallest bar
    pub marker_top: f64,
    pub annotations: Vec<Annotation>,
    pub legend: [String; 3],
}

impl PdfFigure {
    pub fn highlighted(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter().filter(|b| b.highlighted)
    }

    pub fn annotation(&self, role: TextRole) -> Option<&str> {
        self.annotations
            .iter()
            .find(|a| a.role == role)
            .map(|a| a.text.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub y_max: f64,
    pub bars: Vec<Bar>,
    pub mean: f64,
    pub mean_label: String,
}

/// Formats a float the way a plain numeric readout shows it: shortest
/// round-trip digits, keeping a trailing `.0` on whole numbers.
pub fn fmt_float(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 {
        format!("{x:.1}")
    } else {
        format!("{x}")
    }
}

fn x_range(dist: &Distribution) -> (f64, f64) {
    match (dist.edges.first(), dist.edges.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => (0.0, 1.0),
    }
}

fn y_limit(peak: f64) -> f64 {
    if peak > 0.0 {
        1.1 * peak
    } else {
        1.0
    }
}

pub fn pdf_figure(dist: &Distribution, stats: &DistributionStats) -> PdfFigure {
    let bars = dist
        .edges
        .windows(2)
        .zip(&dist.probability)
        .zip(&stats.in_band)
        .map(|((w, &height), &highlighted)| Bar {
            left: w[0],
            right: w[1],
            height,
            highlighted,
        })
        .collect();
    let band = stats.factors.label();
    let annotations = vec![
        Annotation {
            role: TextRole::Headline,
            text: format!(
                "{}% of population with salaries between {}",
                fmt_float(stats.band_percent),
                band.replace(" to ", " and ")
            ),
        },
        Annotation {
            role: TextRole::Mean,
            text: format!("PDF Mean(W̄): {}", fmt_float(stats.mean)),
        },
        Annotation {
            role: TextRole::Lower,
            text: format!("Mean*{}: {}", stats.factors.lower, fmt_float(stats.lower)),
        },
        Annotation {
            role: TextRole::Upper,
            text: format!("Mean*{}: {}", stats.factors.upper, fmt_float(stats.upper)),
        },
    ];
    let peak = dist.max_probability();
    PdfFigure {
        title: PDF_TITLE.into(),
        x_label: "Salaries (Euros)".into(),
        y_label: "Probability".into(),
        x_range: x_range(dist),
        y_max: y_limit(peak),
        bars,
        mean: stats.mean,
        marker_top: peak,
        annotations,
        legend: [
            "Mean Value (W̄)".into(),
            "PDF".into(),
            format!("{band}  Range"),
        ],
    }
}

pub fn density_figure(dist: &Distribution, raw_mean: f64) -> DensityFigure {
    let bars = dist
        .edges
        .windows(2)
        .zip(&dist.density)
        .map(|(w, &height)| Bar {
            left: w[0],
            right: w[1],
            height,
            highlighted: false,
        })
        .collect();
    DensityFigure {
        title: DENSITY_TITLE.into(),
        x_label: "Annual Salary".into(),
        y_label: "Probability Density".into(),
        x_range: x_range(dist),
        y_max: y_limit(dist.max_density()),
        bars,
        mean: raw_mean,
        mean_label: "Mean Salary".into(),
    }
}
