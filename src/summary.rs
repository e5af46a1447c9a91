use crate::statistics::{calculate_distribution, LatencyDistribution};
use crate::table::{display_label, RecordTable};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;

/// Per-(task, kind) latency overview printed at the end of a run and dumped
/// next to the charts.
#[derive(Debug, Serialize, Deserialize)]
pub struct Summary {
    pub results: Vec<SummaryEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub task: String,
    pub kind: String,
    pub latency: LatencyDistribution,
}

impl Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for result in &self.results {
            writeln!(f, "{}", result)?;
        }
        Ok(())
    }
}

impl Display for SummaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:14} {:24}: {:.2} ns/op median, {:.2} ns/op mean",
            self.task,
            display_label(&self.kind),
            self.latency.median,
            self.latency.mean
        )
    }
}

pub fn calculate_summary(table: &RecordTable) -> Summary {
    let mut results = Vec::new();
    for task in table.tasks() {
        for (kind, samples) in table.task_samples(task) {
            results.push(SummaryEntry {
                task: task.to_string(),
                kind: kind.to_string(),
                latency: calculate_distribution(&samples),
            });
        }
    }

    Summary { results }
}
