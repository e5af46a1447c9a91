//! Chart rendering for the sharded-map benchmark harness.
//!
//! The harness runs `bustle` workloads under a `tracing` JSON subscriber and
//! appends one JSON object per log event to its output file. This crate reads
//! that file, folds the per-workload timing events into mean-latency series,
//! and renders one chart per benchmark task (average ns/op against thread
//! count, one series per map implementation).

pub mod persistence;
pub mod plots;
pub mod record;
pub mod statistics;
pub mod summary;
pub mod table;
