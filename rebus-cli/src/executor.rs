//! Executor for solving a batch of equations

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use chrono::TimeDelta;
use rayon::ThreadPool;
use rayon::prelude::*;
use rebus_solver::{CompileError, ParallelSearch, Rebus, Search, Strategy};
use std::sync::Arc;
use std::sync::mpsc::Sender;
use tracing::{debug, info};

/// A solved equation: decoded solutions plus timing
#[derive(Debug, Clone)]
pub struct Solved {
    /// Solutions rendered in the equation's own layout, sorted
    pub decoded: Vec<String>,
    pub compile_duration: TimeDelta,
    pub solve_duration: TimeDelta,
    /// Number of full RPN evaluations the search performed
    pub evaluations: u64,
}

/// Result from processing a single equation
#[derive(Debug, Clone)]
pub struct EquationResult {
    /// Position of the equation in the input
    pub index: usize,
    pub equation: String,
    pub outcome: Result<Solved, CompileError>,
}

/// Work item representing one equation to solve
pub struct WorkItem {
    pub index: usize,
    pub equation: String,
}

/// Executor that solves equations on a dedicated thread pool
pub struct Executor {
    equations: Vec<String>,
    strategy: Strategy,
    parallelize_by: ParallelizeBy,
    thread_pool: Arc<ThreadPool>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            equations: config.equations.clone(),
            strategy: config.strategy,
            parallelize_by: config.parallelize_by,
            thread_pool: Arc::new(thread_pool),
        })
    }

    /// Work items in input order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.equations
            .iter()
            .enumerate()
            .map(|(index, equation)| WorkItem {
                index,
                equation: equation.clone(),
            })
            .collect()
    }

    /// Solve every equation and send results to the channel
    pub fn execute(&self, tx: Sender<EquationResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        info!(
            count = work_items.len(),
            strategy = %self.strategy,
            threads = self.thread_pool.current_num_threads(),
            "Solving equations"
        );

        match self.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = self.run_equation(&work, &tx) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Equation => self.execute_parallel(work_items, &tx),
        }
    }

    /// Solve work items concurrently, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<EquationResult>,
    ) -> Result<(), ArcExecutorError> {
        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map_with(tx.clone(), |tx, work| self.run_equation(&work, tx).err())
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(err1), err2) => Some(ArcExecutorError::combine_opt(err2, err1)),
                    (None, err2) => err2,
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }

    fn run_equation(
        &self,
        work: &WorkItem,
        tx: &Sender<EquationResult>,
    ) -> Result<(), ArcExecutorError> {
        let result = solve_equation(work, self.search());
        tx.send(result)
            .map_err(|_| ExecutorError::ChannelSend.into())
    }

    /// Parallel search shares the executor's pool instead of the global one
    fn search(&self) -> Box<dyn Search + Send + Sync> {
        match self.strategy {
            Strategy::Parallel => Box::new(ParallelSearch::with_pool(self.thread_pool.clone())),
            strategy => Box::new(strategy),
        }
    }
}

/// Compile, solve and decode a single equation
fn solve_equation(work: &WorkItem, search: Box<dyn Search + Send + Sync>) -> EquationResult {
    let outcome = Rebus::new(&work.equation).map(|rebus| {
        let result = rebus.solve_with(search.as_ref());
        let mut decoded: Vec<String> = result
            .report
            .solutions
            .iter()
            .map(|s| rebus.decode(s))
            .collect();
        decoded.sort();
        debug!(
            equation = rebus.text(),
            solutions = decoded.len(),
            evaluations = result.report.evaluations,
            "Equation solved"
        );

        Solved {
            decoded,
            compile_duration: rebus.compile_duration(),
            solve_duration: result.duration(),
            evaluations: result.report.evaluations,
        }
    });

    EquationResult {
        index: work.index,
        equation: work.equation.clone(),
        outcome,
    }
}
