use super::{
    AXIS_LABEL_FONT_SIZE, FONT_FAMILY, LEGEND_FONT_SIZE, MARKER_SIZE, SERIES_COLORS, SIZE,
    SUBTITLE, SUBTITLE_FONT_SIZE, TICK_LABEL_FONT_SIZE, TITLE_FONT_SIZE,
};
use crate::table::{chart_title, display_label, KindSeries};
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

/// Draws the average-performance chart for one task: thread count on the
/// vertical axis, mean ns/op on the horizontal axis, one cross-marker
/// series per implementation kind.
pub(crate) fn avg_performance(
    path: &Path,
    task: &str,
    series: &[KindSeries],
    yticks: &[u64],
) -> Result<()> {
    let x_max = series
        .iter()
        .flat_map(|series| series.points.iter())
        .map(|point| point.mean_avg_ns)
        .fold(0.0, f64::max)
        * 1.1;
    let x_max = x_max.max(1.0);
    let y_max = series
        .iter()
        .flat_map(|series| series.points.iter())
        .map(|point| point.threads)
        .max()
        .unwrap_or(0)
        + 1;

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(&chart_title(task), (FONT_FAMILY, TITLE_FONT_SIZE))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(SUBTITLE, (FONT_FAMILY, SUBTITLE_FONT_SIZE))
        .margin(30)
        .x_label_area_size(110)
        .y_label_area_size(140)
        .build_cartesian_2d(0f64..x_max, 0u64..y_max)?;

    // Thread-count labels only at the even counts observed in the run.
    let thread_label = |threads: &u64| {
        if yticks.contains(threads) {
            threads.to_string()
        } else {
            String::new()
        }
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("avg ns / op")
        .y_desc("threads")
        .axis_desc_style((FONT_FAMILY, AXIS_LABEL_FONT_SIZE))
        .label_style((FONT_FAMILY, TICK_LABEL_FONT_SIZE))
        .y_labels(y_max as usize + 1)
        .y_label_formatter(&thread_label)
        .draw()?;

    for (idx, kind_series) in series.iter().enumerate() {
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
        let style = color.stroke_width(2);

        chart
            .draw_series(
                kind_series
                    .points
                    .iter()
                    .map(|point| Cross::new((point.mean_avg_ns, point.threads), MARKER_SIZE, style)),
            )?
            .label(display_label(&kind_series.kind))
            .legend(move |(x, y)| Cross::new((x + 10, y), MARKER_SIZE / 2, style));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT_FAMILY, LEGEND_FONT_SIZE))
        .draw()?;

    root.present()?;

    Ok(())
}
