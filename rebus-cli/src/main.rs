//! Rebus CLI - Command-line interface for solving cryptarithms

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use output::OutputFormatter;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over the flags
fn init_tracing(default_directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .init();
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    init_tracing(config.log_directive());
    debug!(
        equations = config.equations.len(),
        strategy = %config.strategy,
        threads = config.thread_count,
        "Configuration resolved"
    );

    let executor =
        Executor::new(&config).map_err(|e| error::CliError::Config(e.to_string()))?;

    run_executor(executor, config.quiet)
}

/// Run the executor and print results in input order
fn run_executor(executor: Executor, quiet: bool) -> Result<(), error::CliError> {
    let total = executor.collect_work_items().len();

    let (tx, rx) = std::sync::mpsc::channel();

    // Run executor in background thread
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(total);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        warn!("Not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| error::CliError::Config("Executor thread panicked".to_string()))?
        .map_err(error::CliError::Executor)?;

    formatter.print_summary(&results);

    Ok(())
}
