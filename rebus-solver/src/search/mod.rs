//! Search strategies over digit substitutions
//!
//! Three interchangeable strategies enumerate candidate substitutions for a
//! compiled equation. They differ only in cost; for the same [`Rpn`] all of
//! them return the same solution set.
//!
//! - [`NaiveSearch`]: every injective assignment of the equation's letters
//! - [`ParallelSearch`]: the same enumeration split across a rayon pool
//! - [`ColumnSearch`]: column-by-column extension with modular pruning

mod column;
mod naive;
mod parallel;

pub use column::ColumnSearch;
pub use naive::NaiveSearch;
pub use parallel::ParallelSearch;

use crate::error::UnknownStrategy;
use crate::rpn::Rpn;
use crate::substitution::Substitution;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// A way of enumerating substitutions for a compiled equation
///
/// # Example
///
/// ```
/// use rebus_solver::{compile, ColumnSearch, Search};
///
/// let rpn = compile("A + A = B").unwrap();
/// let report = ColumnSearch.search(&rpn);
/// assert_eq!(report.solutions.len(), 4); // A in 1..=4
/// ```
pub trait Search {
    /// Find every complete substitution that makes the equation true
    fn search(&self, rpn: &Rpn) -> SearchReport;
}

/// Outcome of one search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Valid complete substitutions, in letter/digit order
    pub solutions: BTreeSet<Substitution>,
    /// Number of evaluator invocations spent
    pub evaluations: u64,
}

impl SearchReport {
    /// Combine the reports of two disjoint parts of a search space
    pub fn merge(mut self, other: SearchReport) -> SearchReport {
        self.solutions.extend(other.solutions);
        self.evaluations += other.evaluations;
        self
    }

    /// Run the final exact check on a complete candidate and keep it if it holds
    pub(crate) fn record(&mut self, rpn: &Rpn, candidate: Substitution) {
        if rpn.has_leading_zero(&candidate) {
            return;
        }
        self.evaluations += 1;
        match rpn.holds_with(&candidate) {
            Ok(true) => {
                self.solutions.insert(candidate);
            }
            Ok(false) => {}
            Err(err) => trace!(%candidate, %err, "candidate rejected"),
        }
    }
}

/// Selectable search strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Exhaustive permutation search on the calling thread
    Naive,
    /// Exhaustive permutation search on the rayon global pool
    Parallel,
    /// Column-wise pruning search (fastest in practice)
    #[default]
    ColumnWise,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::Parallel, Strategy::ColumnWise];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Parallel => "parallel",
            Strategy::ColumnWise => "column",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(Strategy::Naive),
            "parallel" => Ok(Strategy::Parallel),
            "column" | "column-wise" | "ten-adic" => Ok(Strategy::ColumnWise),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

impl Search for Strategy {
    fn search(&self, rpn: &Rpn) -> SearchReport {
        match self {
            Strategy::Naive => NaiveSearch.search(rpn),
            Strategy::Parallel => ParallelSearch::new().search(rpn),
            Strategy::ColumnWise => ColumnSearch.search(rpn),
        }
    }
}

/// Solve a compiled equation with the chosen strategy
pub fn solve(rpn: &Rpn, strategy: Strategy) -> SearchReport {
    strategy.search(rpn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile;

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!("ten-adic".parse::<Strategy>(), Ok(Strategy::ColumnWise));
        assert!("greedy".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_report_merge() {
        let a = Substitution::from_pairs([('A', 1)]).unwrap();
        let b = Substitution::from_pairs([('A', 2)]).unwrap();
        let left = SearchReport {
            solutions: [a.clone()].into_iter().collect(),
            evaluations: 3,
        };
        let right = SearchReport {
            solutions: [a, b].into_iter().collect(),
            evaluations: 4,
        };
        let merged = left.merge(right);
        assert_eq!(merged.solutions.len(), 2);
        assert_eq!(merged.evaluations, 7);
    }

    #[test]
    fn test_record_rejects_leading_zero_without_evaluating() {
        let rpn = compile("AB = 1").unwrap();
        let mut report = SearchReport::default();
        report.record(&rpn, Substitution::from_pairs([('A', 0), ('B', 1)]).unwrap());
        assert!(report.solutions.is_empty());
        assert_eq!(report.evaluations, 0);
    }

    #[test]
    fn test_all_strategies_agree_on_small_equation() {
        let rpn = compile("AB + BA = CC").unwrap();
        let expected = NaiveSearch.search(&rpn).solutions;
        assert!(!expected.is_empty());
        for strategy in Strategy::ALL {
            assert_eq!(solve(&rpn, strategy).solutions, expected, "{strategy}");
        }
    }
}
