//! PNG rendering of [`PdfFigure`] and [`DensityFigure`] with `plotters`.
//!
//! The figures arrive fully resolved from `paydist-core`; this module owns
//! only pixel geometry, fonts and colors.

mod density;
mod pdf;
pub mod theme;

pub use density::render_density;
pub use pdf::render_pdf;
pub use theme::Theme;

use paydist_common::{PaydistError, RenderConfig};
use plotters::style::{FontDesc, FontFamily, FontStyle};

pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub theme: Theme,
}

impl RenderOptions {
    pub fn from_config(cfg: &RenderConfig) -> Self {
        Self {
            width: cfg.width,
            height: cfg.height,
            theme: Theme::from_name(&cfg.theme),
        }
    }

    /// Pixel size scaled to the canvas, `base` being the size at 1920px wide.
    fn px(&self, base: u32) -> u32 {
        let scaled = u64::from(base) * u64::from(self.width) / 1920;
        u32::try_from(scaled).unwrap_or(u32::MAX).max(8)
    }

    fn font(&self, base: u32, style: FontStyle) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, self.px(base) as f64, style)
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> PaydistError {
    PaydistError::Render(e.to_string())
}

/// Splits the vertical segment `x, y0..y1` into `dashes` on/off pieces.
fn dashed_vertical(x: f64, y0: f64, y1: f64, dashes: usize) -> Vec<[(f64, f64); 2]> {
    let step = (y1 - y0) / (2 * dashes) as f64;
    (0..dashes)
        .map(|i| {
            let a = y0 + step * (2 * i) as f64;
            [(x, a), (x, a + step)]
        })
        .collect()
}
