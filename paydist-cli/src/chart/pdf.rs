use super::{render_err, RenderOptions};
use paydist_common::Result;
use paydist_core::{PdfFigure, TextRole};
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

/// Data-space anchor (top-left) of an annotation.
fn text_anchor(fig: &PdfFigure, role: TextRole) -> (f64, f64) {
    let (x0, x1) = fig.x_range;
    let span = x1 - x0;
    let top = fig.y_max;
    match role {
        TextRole::Headline => (x0 + 0.01 * span, top * 0.995),
        TextRole::Mean => (x0 + 0.62 * span, top * 0.86),
        TextRole::Lower => (x0 + 0.62 * span, top * 0.79),
        TextRole::Upper => (x0 + 0.62 * span, top * 0.72),
    }
}

/// Draws the annotated PDF bar chart to `output` and hands `fig` back.
pub fn render_pdf<'f>(fig: &'f PdfFigure, output: &Path, opts: &RenderOptions) -> Result<&'f PdfFigure> {
    let theme = &opts.theme;
    let root = BitMapBackend::new(output, (opts.width, opts.height)).into_drawing_area();
    root.fill(&theme.bg).map_err(render_err)?;

    let (x0, x1) = fig.x_range;
    let mut chart = ChartBuilder::on(&root)
        .caption(&fig.title, opts.font(56, FontStyle::Bold).color(&theme.title))
        .margin(opts.px(30))
        .x_label_area_size(opts.px(90))
        .y_label_area_size(opts.px(140))
        .build_cartesian_2d(x0..x1, 0f64..fig.y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(fig.x_label.as_str())
        .y_desc(fig.y_label.as_str())
        .axis_desc_style(opts.font(34, FontStyle::Normal).color(&theme.fg))
        .label_style(opts.font(28, FontStyle::Normal).color(&theme.fg))
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_label_formatter(&|y| format!("{y:.3}"))
        .draw()
        .map_err(render_err)?;

    let (bar, edge, highlight, mean) = (theme.bar, theme.bar_edge, theme.highlight, theme.mean);
    let swatch = opts.px(14) as i32;

    chart
        .draw_series(fig.bars.iter().map(|b| {
            Rectangle::new([(b.left, 0.0), (b.right, b.height)], bar.filled())
        }))
        .map_err(render_err)?
        .label(fig.legend[1].as_str())
        .legend(move |(x, y)| Rectangle::new([(x, y - swatch / 2), (x + swatch * 2, y + swatch / 2)], bar.filled()));
    chart
        .draw_series(fig.bars.iter().map(|b| {
            Rectangle::new([(b.left, 0.0), (b.right, b.height)], edge.stroke_width(1))
        }))
        .map_err(render_err)?;

    chart
        .draw_series(fig.highlighted().map(|b| {
            Rectangle::new([(b.left, 0.0), (b.right, b.height)], highlight.mix(0.7).filled())
        }))
        .map_err(render_err)?
        .label(fig.legend[2].as_str())
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - swatch / 2), (x + swatch * 2, y + swatch / 2)], highlight.mix(0.7).filled())
        });

    chart
        .draw_series(LineSeries::new(
            vec![(fig.mean, 0.0), (fig.mean, fig.marker_top)],
            mean.stroke_width(3),
        ))
        .map_err(render_err)?
        .label(fig.legend[0].as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + swatch * 2, y)], mean.stroke_width(3)));

    for note in &fig.annotations {
        let (color, size) = match note.role {
            TextRole::Headline => (theme.fg, 34),
            TextRole::Mean => (theme.mean, 30),
            TextRole::Lower => (theme.lower, 30),
            TextRole::Upper => (theme.highlight, 30),
        };
        let style = opts.font(size, FontStyle::Normal).color(&color);
        chart
            .draw_series(std::iter::once(Text::new(
                note.text.clone(),
                text_anchor(fig, note.role),
                style,
            )))
            .map_err(render_err)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::MiddleRight)
        .background_style(theme.bg.mix(0.8))
        .border_style(theme.bg.mix(0.0))
        .label_font(opts.font(26, FontStyle::Normal).color(&theme.fg))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    debug!(path = %output.display(), bars = fig.bars.len(), "rendered pdf chart");
    Ok(fig)
}
