use crate::persistence;
use crate::table::KindSeries;
use anyhow::Result;
use plotters::style::RGBColor;
use std::path::{Path, PathBuf};

mod scatter;

static FONT_FAMILY: &str = "sans-serif";
const SIZE: (u32, u32) = (1600, 1200);

const TITLE_FONT_SIZE: u32 = 52;
const SUBTITLE_FONT_SIZE: u32 = 44;
const AXIS_LABEL_FONT_SIZE: u32 = 48;
const TICK_LABEL_FONT_SIZE: u32 = 36;
const LEGEND_FONT_SIZE: u32 = 36;

const MARKER_SIZE: i32 = 10;
const SUBTITLE: &str = "random seeds=5; params=default";

// matplotlib's default ten-color cycle, so the charts keep the familiar look
const SERIES_COLORS: &[RGBColor] = &[
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Renders the chart for one task and returns the path it was written to.
///
/// `yticks` is the set of thread counts labeled on the thread axis,
/// computed over the whole run rather than per task so every chart shares
/// the same axis labeling.
pub fn render_task(
    out_dir: &Path,
    task: &str,
    series: &[KindSeries],
    yticks: &[u64],
) -> Result<PathBuf> {
    let path = persistence::chart_path(&persistence::base_dir(out_dir)?, task);
    scatter::avg_performance(&path, task, series, yticks)?;

    Ok(path)
}
