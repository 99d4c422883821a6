//! Exhaustive permutation search

use super::{Search, SearchReport};
use crate::rpn::Rpn;
use crate::substitution::{DIGITS, Substitution};
use itertools::Itertools;
use tracing::debug;

/// Try every injective assignment of the equation's letters to digits
///
/// For `k` letters this is `10!/(10-k)!` candidates, enumerated in
/// lexicographic digit order with letters in sorted order. Slow, but the
/// reference the other strategies are checked against.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveSearch;

impl Search for NaiveSearch {
    fn search(&self, rpn: &Rpn) -> SearchReport {
        let letters: Vec<char> = rpn.letters().into_iter().collect();

        let report = DIGITS
            .iter()
            .copied()
            .permutations(letters.len())
            .fold(SearchReport::default(), |mut report, digits| {
                report.record(rpn, Substitution::from_permutation(&letters, &digits));
                report
            });

        debug!(
            letters = letters.len(),
            solutions = report.solutions.len(),
            evaluations = report.evaluations,
            "naive search finished"
        );
        report
    }
}
