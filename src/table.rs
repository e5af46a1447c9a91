use crate::record::Record;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Implementation kinds left out of every chart.
pub const EXCLUDED_KINDS: &[&str] = &[
    "main::adapters::CHashMapTable<u64>",
    "main::adapters::MutexStdTable<u64>",
];

/// Mean latency per thread count for one implementation within one task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KindSeries {
    pub kind: String,
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub threads: u64,
    pub mean_avg_ns: f64,
}

/// All timing records of one benchmark run, with the excluded kinds dropped.
#[derive(Debug, Clone)]
pub struct RecordTable {
    records: Vec<Record>,
}

impl RecordTable {
    pub fn new(records: Vec<Record>) -> Self {
        let records = records
            .into_iter()
            .filter(|record| !EXCLUDED_KINDS.contains(&record.kind.as_str()))
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct task names, sorted.
    pub fn tasks(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.task.as_str())
            .sorted()
            .dedup()
            .collect()
    }

    /// One mean-latency series per implementation kind for the given task,
    /// sorted by kind. Trials fold into the per-thread-count mean.
    pub fn task_series(&self, task: &str) -> Vec<KindSeries> {
        self.records
            .iter()
            .filter(|record| record.task == task)
            .map(|record| (record.kind.as_str(), record))
            .into_group_map()
            .into_iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(kind, records)| KindSeries {
                kind: kind.to_string(),
                points: mean_by_threads(&records),
            })
            .collect()
    }

    /// Raw latency samples per implementation kind for the given task,
    /// sorted by kind.
    pub fn task_samples(&self, task: &str) -> Vec<(&str, Vec<u64>)> {
        self.records
            .iter()
            .filter(|record| record.task == task)
            .map(|record| (record.kind.as_str(), record.avg_ns))
            .into_group_map()
            .into_iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .collect()
    }

    /// Even thread counts observed anywhere in the table, sorted. The charts
    /// label only these on the thread axis.
    pub fn even_thread_counts(&self) -> Vec<u64> {
        self.records
            .iter()
            .map(|record| record.threads)
            .filter(|threads| threads % 2 == 0)
            .sorted()
            .dedup()
            .collect()
    }
}

fn mean_by_threads(records: &[&Record]) -> Vec<SeriesPoint> {
    let mut by_threads: BTreeMap<u64, Vec<u64>> = BTreeMap::new();
    for record in records {
        by_threads.entry(record.threads).or_default().push(record.avg_ns);
    }

    by_threads
        .into_iter()
        .map(|(threads, avgs)| SeriesPoint {
            threads,
            mean_avg_ns: avgs.iter().sum::<u64>() as f64 / avgs.len() as f64,
        })
        .collect()
}

/// Legend label for an implementation kind: the adapter type name without
/// its module path and key parameter, e.g.
/// `main::adapters::ContrieTable<u64>` -> `ContrieTable`.
pub fn display_label(kind: &str) -> &str {
    let label = kind.strip_prefix("main::adapters::").unwrap_or(kind);
    label.strip_suffix("<u64>").unwrap_or(label)
}

/// Chart title for a task: underscores become spaces, words are capitalized.
pub fn chart_title(task: &str) -> String {
    task.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(task: &str, trial: u64, kind: &str, threads: u64, avg_ns: u64) -> Record {
        Record {
            timestamp: "Aug 19 13:25:47.159".to_string(),
            kind: kind.to_string(),
            task: task.to_string(),
            trial,
            threads,
            mix: "Mix { read: 94, insert: 2, remove: 1, update: 3, upsert: 0 }".to_string(),
            avg_ns,
            ops: 25165824.0,
            took: "54.048597972s".to_string(),
            message: "workload mix finished".to_string(),
        }
    }

    #[test]
    fn drops_excluded_kinds() {
        let table = RecordTable::new(vec![
            record("read_heavy", 0, "main::adapters::CHashMapTable<u64>", 1, 100),
            record("read_heavy", 0, "main::adapters::MutexStdTable<u64>", 1, 100),
            record("read_heavy", 0, "main::adapters::ShardTable<u64>", 1, 100),
        ]);

        assert_eq!(table.len(), 1);
        assert_eq!(table.task_series("read_heavy").len(), 1);
    }

    #[test]
    fn folds_trials_into_per_thread_mean() {
        let kind = "main::adapters::DashMapTable<u64>";
        let table = RecordTable::new(vec![
            record("uniform", 0, kind, 1, 100),
            record("uniform", 1, kind, 1, 300),
            record("uniform", 0, kind, 2, 50),
        ]);

        let series = table.task_series("uniform");
        assert_eq!(series.len(), 1);
        let points = &series[0].points;
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].threads, 1);
        assert_eq!(points[0].mean_avg_ns, 200.0);
        assert_eq!(points[1].threads, 2);
        assert_eq!(points[1].mean_avg_ns, 50.0);
    }

    #[test]
    fn series_are_sorted_by_kind_and_tasks_by_name() {
        let table = RecordTable::new(vec![
            record("write_heavy", 0, "main::adapters::ShardTable<u64>", 1, 10),
            record("write_heavy", 0, "main::adapters::ContrieTable<u64>", 1, 10),
            record("update_heavy", 0, "main::adapters::FlurryTable", 1, 10),
        ]);

        assert_eq!(table.tasks(), vec!["update_heavy", "write_heavy"]);
        let series = table.task_series("write_heavy");
        assert_eq!(series[0].kind, "main::adapters::ContrieTable<u64>");
        assert_eq!(series[1].kind, "main::adapters::ShardTable<u64>");
    }

    #[test]
    fn even_thread_counts_span_the_whole_table() {
        let kind = "main::adapters::ShardTable<u64>";
        let table = RecordTable::new(vec![
            record("uniform", 0, kind, 1, 10),
            record("uniform", 0, kind, 4, 10),
            record("write_heavy", 0, kind, 2, 10),
            record("write_heavy", 0, kind, 4, 10),
            record("write_heavy", 0, kind, 7, 10),
        ]);

        assert_eq!(table.even_thread_counts(), vec![2, 4]);
    }

    #[test]
    fn strips_adapter_path_and_key_parameter() {
        assert_eq!(display_label("main::adapters::ContrieTable<u64>"), "ContrieTable");
        assert_eq!(display_label("main::adapters::FlurryTable"), "FlurryTable");
        assert_eq!(display_label("SomethingElse"), "SomethingElse");
    }

    #[test]
    fn chart_titles_are_title_cased() {
        assert_eq!(chart_title("read_heavy"), "Read Heavy");
        assert_eq!(chart_title("uniform"), "Uniform");
    }
}
