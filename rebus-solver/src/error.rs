//! Error types for the rebus library

use thiserror::Error;

/// Error type for compiling an equation into RPN
///
/// All variants are detected before any search runs and are fatal for the
/// equation: no partial compilation result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Wrong number of `=` signs, an empty side, or a broken expression structure
    #[error("Malformed equation: {0}")]
    MalformedEquation(String),
    /// More distinct letters than there are decimal digits
    #[error("Too many distinct letters: {count} > 10 ({letters})")]
    TooManyLetters { count: usize, letters: String },
    /// Characters outside letters, digits and `+ - * ( )`
    #[error("Unknown symbols: {0}")]
    UnknownSymbol(String),
}

/// Error type for evaluating an RPN sequence
///
/// Searches never surface this error: a candidate whose evaluation fails
/// simply is not a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An operator found fewer than two values on the stack
    #[error("Stack underflow")]
    StackUnderflow,
    /// A word still contains a letter with no assigned digit
    #[error("Unresolved letter '{0}'")]
    UnresolvedLetter(char),
    /// Exact arithmetic left the 128-bit range
    #[error("Arithmetic overflow")]
    Overflow,
    /// The sequence did not reduce to exactly one value
    #[error("Expression left {0} values on the stack")]
    DanglingOperands(usize),
}

/// Error type for building or extending a substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubstitutionError {
    /// Digits must lie in 0..=9
    #[error("Digit {0} is not a decimal digit")]
    DigitOutOfRange(u8),
    /// The letter already has a digit
    #[error("Letter '{0}' is already assigned")]
    LetterAlreadyAssigned(char),
    /// Another letter already maps to this digit
    #[error("Digit {digit} is already used by '{letter}'")]
    DigitAlreadyUsed { digit: u8, letter: char },
}

/// Error type for parsing a strategy name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown strategy '{0}' (expected naive, parallel or column)")]
pub struct UnknownStrategy(pub String);
