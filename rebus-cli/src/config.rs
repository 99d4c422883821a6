//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use crate::input::EquationFile;
use rebus_solver::Strategy;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--threads` is not given
pub const THREADS_ENV: &str = "REBUS_THREADS";

/// Resolved runtime configuration
pub struct Config {
    /// Equations in input order: positional arguments first, then the file
    pub equations: Vec<String>,
    /// Search strategy
    pub strategy: Strategy,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
    /// Debug logging
    pub verbose: bool,
}

impl Config {
    /// Build config from CLI args, reading the equation file if one is given
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let mut equations = args.equations;
        if let Some(path) = &args.file {
            let file = EquationFile::new(expand_tilde(path));
            equations.extend(file.read()?);
        }
        if equations.is_empty() {
            return Err(CliError::Config(
                "No equations given; pass them as arguments or with --file".to_string(),
            ));
        }

        let env_threads = std::env::var(THREADS_ENV).ok();
        let thread_count = resolve_thread_count(args.threads, env_threads.as_deref())?;

        Ok(Config {
            equations,
            strategy: args.strategy.into(),
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }

    /// Default `EnvFilter` directive; `--verbose` wins over `--quiet`
    pub fn log_directive(&self) -> &'static str {
        match (self.verbose, self.quiet) {
            (true, _) => "rebus=debug,rebus_solver=debug",
            (false, true) => "rebus=warn,rebus_solver=warn",
            (false, false) => "rebus=info,rebus_solver=info",
        }
    }
}

/// Thread count from CLI, then environment, then available parallelism
fn resolve_thread_count(cli: Option<usize>, env: Option<&str>) -> Result<usize, CliError> {
    let count = match (cli, env) {
        (Some(n), _) => n,
        (None, Some(value)) => value.trim().parse().map_err(|_| {
            CliError::Config(format!("Invalid {THREADS_ENV}: '{value}' is not a number"))
        })?,
        (None, None) => num_cpus(),
    };
    if count == 0 {
        return Err(CliError::Config(
            "Thread count must be at least 1".to_string(),
        ));
    }
    Ok(count)
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
