use crate::record::{self, Record};
use crate::summary::Summary;
use crate::table::KindSeries;
use anyhow::Context;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// The harness symlinks its most recent output here.
pub const DEFAULT_LOG_FILE: &str = "latest.txt";

/// Reads the harness log, one JSON record per line. Records without an
/// `avg` field are dropped; malformed lines panic inside the extractor.
pub fn read_log(path: &Path) -> anyhow::Result<Vec<Record>> {
    let file =
        File::open(path).with_context(|| format!("couldn't open log file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for line in reader.lines() {
        let line = line.context("couldn't read log line")?;
        match record::extract(&line) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    debug!("dropped {skipped} records without an avg field");

    Ok(records)
}

pub fn dump_series(out_dir: &Path, task: &str, series: &[KindSeries]) -> anyhow::Result<()> {
    let path = base_dir(out_dir)?.join(format!("avg_performance_{task}.json"));

    let json = serde_json::to_string_pretty(series).expect("couldn't serialize series");
    std::fs::write(&path, json).with_context(|| format!("couldn't write {}", path.display()))?;

    Ok(())
}

pub fn dump_summary(out_dir: &Path, summary: &Summary) -> anyhow::Result<()> {
    let path = base_dir(out_dir)?.join("summary.json");

    let json = serde_json::to_string_pretty(summary).expect("couldn't serialize summary");
    std::fs::write(&path, json).with_context(|| format!("couldn't write {}", path.display()))?;

    Ok(())
}

/// Where the chart for a task lands.
pub fn chart_path(out_dir: &Path, task: &str) -> PathBuf {
    out_dir.join(format!("avg_performance_{task}.png"))
}

pub(crate) fn base_dir(out_dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("couldn't create {}", out_dir.display()))?;

    Ok(out_dir.to_path_buf())
}
