use anyhow::Result;
use clap::Parser;
use mapbench_charts::persistence::{self, DEFAULT_LOG_FILE};
use mapbench_charts::plots;
use mapbench_charts::summary::calculate_summary;
use mapbench_charts::table::RecordTable;
use std::path::PathBuf;

/// Renders per-task performance charts from a concurrent-map benchmark log.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Benchmark log file, one JSON record per line
    #[arg(default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Directory the charts and aggregate dumps are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("=== Loading {} ===", args.log_file.display());
    let records = persistence::read_log(&args.log_file)?;
    let table = RecordTable::new(records);
    println!("{} timing records after filtering", table.len());

    let summary = calculate_summary(&table);
    persistence::dump_summary(&args.out_dir, &summary)?;

    let yticks = table.even_thread_counts();
    for task in table.tasks() {
        println!("\n=== Rendering {task} ===");

        let series = table.task_series(task);
        persistence::dump_series(&args.out_dir, task, &series)?;

        let path = plots::render_task(&args.out_dir, task, &series, &yticks)?;
        println!("wrote {}", path.display());
    }

    println!("\n=== Summary ===\n{summary}");

    Ok(())
}
