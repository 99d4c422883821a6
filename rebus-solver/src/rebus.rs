//! Compiled equation handle

use crate::compile::compile;
use crate::error::CompileError;
use crate::rpn::Rpn;
use crate::search::{Search, SearchReport, Strategy};
use crate::substitution::Substitution;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::BTreeSet;

/// Result from solving an equation, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Solutions and evaluation count
    pub report: SearchReport,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A compiled equation ready to be solved and decoded
///
/// Keeps the caller's text so solutions can be rendered back in the
/// caller's own layout, plus compile timing.
///
/// # Example
///
/// ```
/// use rebus_solver::{Rebus, Strategy};
///
/// let rebus = Rebus::new("КОЗА+КОЗА = СТАДО").unwrap();
/// let solutions = rebus.solutions(Strategy::ColumnWise);
/// assert_eq!(solutions, ["7693+7693 = 15386", "8653+8653 = 17306"]);
/// ```
#[derive(Debug, Clone)]
pub struct Rebus {
    text: String,
    display: String,
    rpn: Rpn,
    letters: BTreeSet<char>,
    compile_start: DateTime<Utc>,
    compile_end: DateTime<Utc>,
}

impl Rebus {
    /// Compile `text`, recording compile timing
    ///
    /// # Errors
    /// Any [`CompileError`]; nothing is searched for a rejected equation.
    pub fn new(text: &str) -> Result<Self, CompileError> {
        let compile_start = Utc::now();
        let rpn = compile(text)?;
        let compile_end = Utc::now();

        Ok(Self {
            text: text.to_string(),
            display: text.to_uppercase(),
            letters: rpn.letters(),
            rpn,
            compile_start,
            compile_end,
        })
    }

    /// The equation as given
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rpn(&self) -> &Rpn {
        &self.rpn
    }

    pub fn letters(&self) -> &BTreeSet<char> {
        &self.letters
    }

    pub fn compile_duration(&self) -> TimeDelta {
        self.compile_end - self.compile_start
    }

    /// Solve with one of the built-in strategies
    pub fn solve(&self, strategy: Strategy) -> SolveResult {
        self.solve_with(&strategy)
    }

    /// Solve with any [`Search`] implementation
    pub fn solve_with(&self, search: &dyn Search) -> SolveResult {
        let solve_start = Utc::now();
        let report = search.search(&self.rpn);
        let solve_end = Utc::now();

        SolveResult {
            report,
            solve_start,
            solve_end,
        }
    }

    /// Render a solution in the layout of the given (uppercased) text
    pub fn decode(&self, substitution: &Substitution) -> String {
        substitution.decode(&self.display)
    }

    /// Solve and decode, sorted
    pub fn solutions(&self, strategy: Strategy) -> Vec<String> {
        let mut decoded: Vec<String> = self
            .solve(strategy)
            .report
            .solutions
            .iter()
            .map(|s| self.decode(s))
            .collect();
        decoded.sort();
        decoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lowercase_input() {
        let rebus = Rebus::new("a + a = b").unwrap();
        let sub = Substitution::from_pairs([('A', 2), ('B', 4)]).unwrap();
        assert_eq!(rebus.decode(&sub), "2 + 2 = 4");
        assert_eq!(rebus.text(), "a + a = b");
    }

    #[test]
    fn test_letters_are_normalized() {
        let rebus = Rebus::new("ab = Ba").unwrap();
        assert_eq!(rebus.letters().iter().collect::<String>(), "AB");
    }

    #[test]
    fn test_solve_records_timing() {
        let rebus = Rebus::new("A + A = B").unwrap();
        let result = rebus.solve(Strategy::Naive);
        assert!(result.duration() >= TimeDelta::zero());
        assert!(rebus.compile_duration() >= TimeDelta::zero());
        assert_eq!(result.report.solutions.len(), 4);
    }

    #[test]
    fn test_compile_error_propagates() {
        assert!(matches!(
            Rebus::new("A / B = C"),
            Err(CompileError::UnknownSymbol(_))
        ));
    }
}
