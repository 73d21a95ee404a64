//! ROC overlay plot
//!
//! Historical submissions are drawn as one colored line each; the new
//! submission is a single black line on top.

use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::history::HistoryCurve;
use crate::roc::RocCurve;

const PLOT_SIZE: (u32, u32) = (1200, 800);

fn plot_err<E: std::fmt::Display>(err: E) -> Error {
    Error::Plot(err.to_string())
}

/// Render the ROC plot to a PNG file.
pub fn render_roc_plot(
    out_path: &Path,
    history: &[HistoryCurve],
    curve: &RocCurve,
) -> Result<()> {
    let (x_range, y_range) = axis_ranges(history, curve);

    let root = BitMapBackend::new(out_path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("FPR vs. TPR for All Submissions", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("False Positive Rate (FPR)")
        .y_desc("True Positive Rate (TPR)")
        .draw()
        .map_err(plot_err)?;

    for (i, historical) in history.iter().enumerate() {
        let color = Palette99::pick(i).mix(0.9);
        chart
            .draw_series(LineSeries::new(historical.points.iter().copied(), &color))
            .map_err(plot_err)?
            .label(historical.dataset.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    let new_points: Vec<(f64, f64)> = curve.points().iter().map(|p| (p.fpr, p.tpr)).collect();
    chart
        .draw_series(LineSeries::new(new_points, &BLACK))
        .map_err(plot_err)?
        .label("New Submission")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

/// Fit the axes to the plotted data with a small margin, falling back to the
/// unit square when there is nothing to plot.
fn axis_ranges(history: &[HistoryCurve], curve: &RocCurve) -> (Range<f64>, Range<f64>) {
    let mut max_x = 0.0f64;
    let mut max_y = 0.0f64;

    for historical in history {
        for &(fpr, tpr) in &historical.points {
            max_x = max_x.max(fpr);
            max_y = max_y.max(tpr);
        }
    }
    for point in curve.points() {
        max_x = max_x.max(point.fpr);
        max_y = max_y.max(point.tpr);
    }

    let x_max = if max_x > 0.0 { max_x * 1.05 } else { 1.0 };
    let y_max = if max_y > 0.0 { max_y * 1.05 } else { 1.0 };
    (0.0..x_max, 0.0..y_max)
}
