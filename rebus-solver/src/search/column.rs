//! Column-wise (ten-adic) pruning search
//!
//! If `(LHS) - (RHS) = 0` holds exactly, it also holds modulo `10^p` for
//! every `p`, and modulo `10^p` only the last `p` digits of each word matter.
//! The search therefore fixes letters from the units column upwards:
//!
//! ```text
//! round p:  truncate words to their last p glyphs
//!           for each partial substitution s surviving round p-1
//!               U   = letters of the truncated words not in s
//!               for each injective U -> unused digits
//!                   keep s + assignment if the truncated equation is 0 mod 10^p
//! ```
//!
//! After the last round (the longest word's length) every survivor covers all
//! letters. Survivors are then checked exactly on the untruncated equation,
//! together with the leading-zero rule, which the rounds ignore.

use super::{Search, SearchReport};
use crate::eval::Modulus;
use crate::rpn::Rpn;
use crate::substitution::Substitution;
use itertools::Itertools;
use tracing::debug;

/// Pruning search that extends partial substitutions one digit column at a time
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnSearch;

impl Search for ColumnSearch {
    fn search(&self, rpn: &Rpn) -> SearchReport {
        let mut report = SearchReport::default();

        if rpn.letters().is_empty() {
            report.record(rpn, Substitution::new());
            return report;
        }

        let mut frontier = vec![Substitution::new()];
        for power in 1..=rpn.max_word_len() {
            let truncated = rpn.truncated(power);
            let mut next = Vec::new();
            for partial in &frontier {
                report.evaluations += extend(&truncated, power, partial, &mut next);
            }
            debug!(power, survivors = next.len(), "column round finished");

            frontier = next;
            if frontier.is_empty() {
                break;
            }
        }

        for candidate in frontier {
            report.record(rpn, candidate);
        }

        debug!(
            solutions = report.solutions.len(),
            evaluations = report.evaluations,
            "column search finished"
        );
        report
    }
}

/// Extend `partial` with every assignment of the letters newly visible at
/// `power` that keeps the truncated equation at zero modulo `10^power`.
///
/// Survivors are pushed onto `next`; the number of evaluations is returned.
fn extend(
    truncated: &Rpn,
    power: usize,
    partial: &Substitution,
    next: &mut Vec<Substitution>,
) -> u64 {
    let applied = truncated.apply(partial);
    let unknown: Vec<char> = applied.letters().into_iter().collect();
    let available = partial.unused_digits();

    if unknown.len() > available.len() {
        return 0;
    }

    let modulus = Modulus::Modulo(power);
    let mut evaluations = 0;

    for digits in available.into_iter().permutations(unknown.len()) {
        let delta = Substitution::from_permutation(&unknown, &digits);
        evaluations += 1;
        if applied.evaluate_with(&delta, modulus) != Ok(0) {
            continue;
        }
        if let Ok(extended) = partial.merge(&delta) {
            next.push(extended);
        }
    }

    evaluations
}
