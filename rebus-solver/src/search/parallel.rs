//! Exhaustive permutation search fanned out over a rayon pool

use super::{Search, SearchReport};
use crate::rpn::Rpn;
use crate::substitution::{DIGITS, Substitution};
use itertools::Itertools;
use rayon::ThreadPool;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

/// Number of leading letters whose digits select a shard. Two letters give
/// up to 90 independent shards, enough to keep a pool busy.
const SHARD_DEPTH: usize = 2;

/// Same candidates and test as [`NaiveSearch`](super::NaiveSearch), split
/// across workers
///
/// Candidates are sharded by the digits of the first letters; every shard
/// enumerates the rest on its own and returns a [`SearchReport`]. Reports are
/// reduced with [`SearchReport::merge`], so no state is shared between
/// workers and the result does not depend on scheduling.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rebus_solver::{compile, ParallelSearch, Search};
///
/// let pool = Arc::new(rayon::ThreadPoolBuilder::new().num_threads(2).build().unwrap());
/// let report = ParallelSearch::with_pool(pool).search(&compile("AB + BA = CC").unwrap());
/// assert!(!report.solutions.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParallelSearch {
    pool: Option<Arc<ThreadPool>>,
}

impl ParallelSearch {
    /// Run on the rayon global pool
    pub fn new() -> Self {
        Self { pool: None }
    }

    /// Run on a dedicated pool
    pub fn with_pool(pool: Arc<ThreadPool>) -> Self {
        Self { pool: Some(pool) }
    }
}

impl Search for ParallelSearch {
    fn search(&self, rpn: &Rpn) -> SearchReport {
        let letters: Vec<char> = rpn.letters().into_iter().collect();

        let run = || search_sharded(rpn, &letters);
        let report = match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        };

        debug!(
            letters = letters.len(),
            solutions = report.solutions.len(),
            evaluations = report.evaluations,
            "parallel search finished"
        );
        report
    }
}

fn search_sharded(rpn: &Rpn, letters: &[char]) -> SearchReport {
    let depth = letters.len().min(SHARD_DEPTH);
    let prefixes: Vec<Vec<u8>> = DIGITS.iter().copied().permutations(depth).collect();

    prefixes
        .into_par_iter()
        .map(|prefix| search_shard(rpn, letters, &prefix))
        .reduce(SearchReport::default, SearchReport::merge)
}

/// Enumerate every candidate whose first letters take the digits of `prefix`
fn search_shard(rpn: &Rpn, letters: &[char], prefix: &[u8]) -> SearchReport {
    let remaining: Vec<u8> = DIGITS
        .iter()
        .copied()
        .filter(|d| !prefix.contains(d))
        .collect();

    remaining
        .into_iter()
        .permutations(letters.len() - prefix.len())
        .fold(SearchReport::default(), |mut report, tail| {
            let digits: Vec<u8> = prefix.iter().copied().chain(tail).collect();
            report.record(rpn, Substitution::from_permutation(letters, &digits));
            report
        })
}
