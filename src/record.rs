use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One flattened timing record from the harness log.
///
/// The interesting events carry `avg`, `ops` and `took` at the top level
/// (the subscriber flattens event fields) and the workload coordinates in
/// the span stack: the `task` span, the `trial_num` span, the `kind` span
/// and the innermost `benchmark` span with `threads` and `mix`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub timestamp: String,
    pub kind: String,
    pub task: String,
    pub trial: u64,
    pub threads: u64,
    pub mix: String,
    pub avg_ns: u64,
    pub ops: f64,
    pub took: String,
    pub message: String,
}

/// Extracts a flat [`Record`] from one log line.
///
/// Returns `None` for records without an `avg` field; the harness logs many
/// non-timing events and those are not charted. Anything else malformed
/// panics: the input is machine-generated, so a broken line means a broken
/// benchmark run.
pub fn extract(line: &str) -> Option<Record> {
    let value: Value = serde_json::from_str(line).expect("couldn't parse log line as JSON");
    value.get("avg")?;

    let span = value.get("span").expect("couldn't get benchmark span");
    let spans = value
        .get("spans")
        .and_then(Value::as_array)
        .expect("couldn't get span stack");
    let task_span = spans.first().expect("couldn't get task span");
    let trial_span = spans.get(1).expect("couldn't get trial span");
    let kind_span = spans.get(2).expect("couldn't get kind span");

    Some(Record {
        timestamp: str_field(&value, "timestamp"),
        kind: str_field(kind_span, "kind"),
        task: str_field(task_span, "task"),
        trial: u64_field(trial_span, "trial_num"),
        threads: u64_field(span, "threads"),
        mix: str_field(span, "mix"),
        avg_ns: parse_avg_ns(&str_field(&value, "avg")),
        ops: value
            .get("ops")
            .and_then(Value::as_f64)
            .expect("couldn't get ops"),
        took: str_field(&value, "took"),
        message: str_field(&value, "message"),
    })
}

/// The harness serializes `avg` as a Debug-formatted duration, e.g. `"2145ns"`.
fn parse_avg_ns(avg: &str) -> u64 {
    avg.strip_suffix("ns")
        .expect("couldn't strip ns unit from avg")
        .parse()
        .expect("couldn't parse avg as nanoseconds")
}

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("couldn't get {key}"))
        .to_string()
}

fn u64_field(value: &Value, key: &str) -> u64 {
    value
        .get(key)
        .and_then(Value::as_u64)
        .unwrap_or_else(|| panic!("couldn't get {key}"))
}
