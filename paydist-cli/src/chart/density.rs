use super::{dashed_vertical, render_err, RenderOptions};
use paydist_common::Result;
use paydist_core::DensityFigure;
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

const MEAN_DASHES: usize = 24;

pub fn render_density<'f>(
    fig: &'f DensityFigure,
    output: &Path,
    opts: &RenderOptions,
) -> Result<&'f DensityFigure> {
    let theme = &opts.theme;
    let root = BitMapBackend::new(output, (opts.width, opts.height)).into_drawing_area();
    root.fill(&theme.bg).map_err(render_err)?;

    let (x0, x1) = fig.x_range;
    let mut chart = ChartBuilder::on(&root)
        .caption(&fig.title, opts.font(48, FontStyle::Normal).color(&theme.fg))
        .margin(opts.px(30))
        .x_label_area_size(opts.px(90))
        .y_label_area_size(opts.px(160))
        .build_cartesian_2d(x0..x1, 0f64..fig.y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(fig.x_label.as_str())
        .y_desc(fig.y_label.as_str())
        .axis_desc_style(opts.font(34, FontStyle::Normal).color(&theme.fg))
        .label_style(opts.font(28, FontStyle::Normal).color(&theme.fg))
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_label_formatter(&|y| format!("{y:.1e}"))
        .draw()
        .map_err(render_err)?;

    let (fill, edge, mean) = (theme.density_bar, theme.density_edge, theme.density_mean);
    let swatch = opts.px(14) as i32;

    chart
        .draw_series(fig.bars.iter().map(|b| {
            Rectangle::new([(b.left, 0.0), (b.right, b.height)], fill.mix(0.5).filled())
        }))
        .map_err(render_err)?;
    chart
        .draw_series(fig.bars.iter().map(|b| {
            Rectangle::new([(b.left, 0.0), (b.right, b.height)], edge.stroke_width(1))
        }))
        .map_err(render_err)?;

    chart
        .draw_series(
            dashed_vertical(fig.mean, 0.0, fig.y_max, MEAN_DASHES)
                .into_iter()
                .map(|seg| PathElement::new(seg.to_vec(), mean.stroke_width(3))),
        )
        .map_err(render_err)?
        .label(fig.mean_label.as_str())
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + swatch * 2, y)], mean.stroke_width(3))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(theme.bg.mix(0.8))
        .border_style(theme.fg)
        .label_font(opts.font(26, FontStyle::Normal).color(&theme.fg))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    debug!(path = %output.display(), bars = fig.bars.len(), "rendered density chart");
    Ok(fig)
}
