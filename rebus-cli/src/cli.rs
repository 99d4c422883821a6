//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use rebus_solver::Strategy;
use std::path::PathBuf;

/// Search strategy used for every equation
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum StrategyArg {
    /// Try every digit permutation on one thread
    Naive,
    /// Try every digit permutation across the thread pool
    Parallel,
    /// Fix digits column by column from the units up (default)
    #[default]
    Column,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Naive => Strategy::Naive,
            StrategyArg::Parallel => Strategy::Parallel,
            StrategyArg::Column => Strategy::ColumnWise,
        }
    }
}

/// Parallelization level across equations
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// Solve equations one after another, in input order
    Sequential,
    /// Solve equations concurrently; output stays in input order (default)
    #[default]
    Equation,
}

/// Cryptarithm (rebus) solver
#[derive(Parser, Debug)]
#[command(name = "rebus", about = "Solve cryptarithm puzzles", version)]
pub struct Args {
    /// Equations to solve, e.g. "SEND + MORE = MONEY"
    pub equations: Vec<String>,

    /// File with one equation per line ('#' starts a comment)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Search strategy
    #[arg(short, long, value_enum, default_value = "column")]
    pub strategy: StrategyArg,

    /// Number of threads (defaults to REBUS_THREADS, then all cores)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential or equation
    #[arg(long, value_enum, default_value = "equation")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output decoded solutions
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
