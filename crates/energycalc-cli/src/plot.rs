use crate::config::models::PlotSettings;
use crate::error::{CliError, Result};
use energycalc::core::sample::EnergySeries;
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;
use tracing::debug;

const POINT_RADIUS: u32 = 3;
const CAPTION_FONT_SIZE: u32 = 24;
const Y_PADDING_RATIO: f64 = 0.1;

/// Renders the series as an SVG scatter plot with a connecting line.
pub fn render_svg(series: &EnergySeries, settings: &PlotSettings) -> Result<()> {
    draw_chart(series, settings).map_err(|e| CliError::Plot {
        path: settings.output.clone(),
        message: e.to_string(),
    })?;
    debug!("Wrote plot with {} point(s) to {:?}", series.len(), settings.output);
    Ok(())
}

fn draw_chart(
    series: &EnergySeries,
    settings: &PlotSettings,
) -> std::result::Result<(), Box<dyn Error>> {
    let (xs, ys) = series.unzip();
    let points: Vec<(f64, f64)> = xs
        .iter()
        .map(|&x| x as f64)
        .zip(ys.iter().copied())
        .collect();

    let root =
        SVGBackend::new(&settings.output, (settings.width, settings.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&settings.title, ("sans-serif", CAPTION_FONT_SIZE))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_bounds(&xs), y_bounds(&ys))?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("Energy value")
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), BLUE.mix(0.35)))?;
    chart
        .draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, POINT_RADIUS, BLUE.filled())),
        )?
        .label("Energy(x)")
        .legend(|(x, y)| Circle::new((x + 10, y), POINT_RADIUS, BLUE.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Horizontal extent of the data; a single point gets one unit of room on each side.
fn x_bounds(xs: &[i64]) -> Range<f64> {
    match (xs.first(), xs.last()) {
        (Some(&first), Some(&last)) if first < last => first as f64..last as f64,
        (Some(&only), _) => only as f64 - 1.0..only as f64 + 1.0,
        _ => 0.0..1.0,
    }
}

/// Vertical extent of the data with proportional padding.
fn y_bounds(ys: &[f64]) -> Range<f64> {
    let (min, max) = ys
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| (lo.min(y), hi.max(y)));
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    let pad = if span < 1e-9 { 1.0 } else { span * Y_PADDING_RATIO };
    (min - pad)..(max + pad)
}
