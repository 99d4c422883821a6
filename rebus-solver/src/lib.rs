//! Rebus Solver Library
//!
//! Solves cryptarithms ("rebuses"): equations over words where each letter
//! stands for a distinct decimal digit, such as `SEND + MORE = MONEY`.
//! Every digit assignment that makes the equation true is returned, with no
//! multi-digit word allowed to start with `0`.
//!
//! # Overview
//!
//! This library provides:
//! - Validation and compilation of an equation into postfix form ([`compile`])
//! - An evaluator with exact and modular arithmetic ([`Modulus`])
//! - A strongly-typed letter→digit bijection ([`Substitution`])
//! - Three interchangeable search strategies ([`Strategy`], [`Search`])
//!
//! # Quick Example
//!
//! ```
//! use rebus_solver::{compile, solve, Strategy};
//!
//! let rpn = compile("КОЗА+КОЗА = СТАДО").unwrap();
//! let report = solve(&rpn, Strategy::ColumnWise);
//!
//! let found: Vec<String> = report.solutions.iter().map(|s| s.to_string()).collect();
//! assert_eq!(found, [
//!     "{А:3, Д:0, З:5, К:8, О:6, С:1, Т:7}",
//!     "{А:3, Д:8, З:9, К:7, О:6, С:1, Т:5}",
//! ]);
//! ```
//!
//! # Key Concepts
//!
//! ## Compilation
//!
//! `compile` uppercases the text, strips whitespace, checks that there is
//! exactly one `=`, at most ten letters and only `+ - * ( )` as symbols, then
//! turns `(LHS)-(RHS)` into an [`Rpn`]. A substitution solves the equation
//! exactly when the RPN evaluates to zero.
//!
//! ## Strategies
//!
//! - `Naive` tries all `10!/(10-k)!` assignments of `k` letters.
//! - `Parallel` does the same on a rayon pool.
//! - `ColumnWise` fixes letters from the units column upwards and drops
//!   partial assignments that already fail modulo `10^p`.
//!
//! All three return the same [`SearchReport::solutions`] for the same input.
//!
//! ## Rebus Handle
//!
//! [`Rebus`] wraps compilation, solving and decoding of solutions back into
//! the caller's text, with timing for each step.

mod compile;
mod error;
mod eval;
mod rebus;
mod rpn;
mod search;
mod substitution;

// Re-export public API
pub use compile::{CanonicalForm, MAX_LETTERS, compile, normalize, validate};
pub use error::{CompileError, EvalError, SubstitutionError, UnknownStrategy};
pub use eval::Modulus;
pub use rebus::{Rebus, SolveResult};
pub use rpn::{Glyph, Operator, Rpn, Token, Word};
pub use search::{
    ColumnSearch, NaiveSearch, ParallelSearch, Search, SearchReport, Strategy, solve,
};
pub use substitution::{DIGITS, Substitution};
