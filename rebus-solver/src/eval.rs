//! Stack evaluator for RPN sequences

use crate::error::EvalError;
use crate::rpn::{Glyph, Operator, Rpn, Token, Word};
use crate::substitution::Substitution;
use num_bigint::{BigInt, Sign};

/// Largest power of ten used as a modulus. Residues stay below `10^18`, so
/// the product of two residues fits comfortably in an `i128`.
const MAX_MODULAR_POWER: usize = 18;

/// Arithmetic mode of an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modulus {
    /// Plain integer arithmetic
    Exact,
    /// Arithmetic on the last `p` decimal digits, i.e. modulo `10^p`
    ///
    /// Powers above 18 reduce modulo `10^18` instead. Since `10^18` divides
    /// `10^p`, a zero residue modulo `10^p` still implies a zero residue here.
    Modulo(usize),
}

impl Modulus {
    /// `Some(10^p)` for modular arithmetic
    fn divisor(self) -> Option<i128> {
        match self {
            Modulus::Exact => None,
            Modulus::Modulo(power) => Some(10i128.pow(power.min(MAX_MODULAR_POWER) as u32)),
        }
    }

    /// Number of trailing digits that influence a word's value
    fn significant_digits(self) -> Option<usize> {
        match self {
            Modulus::Exact => None,
            Modulus::Modulo(power) => Some(power.min(MAX_MODULAR_POWER)),
        }
    }
}

impl Rpn {
    /// Evaluate a fully substituted sequence
    ///
    /// Fails with [`EvalError::UnresolvedLetter`] if a word still holds a letter.
    pub fn evaluate(&self, modulus: Modulus) -> Result<i128, EvalError> {
        self.evaluate_with(&Substitution::new(), modulus)
    }

    /// Evaluate with letters resolved through `substitution` on the fly
    ///
    /// Equivalent to `self.apply(substitution).evaluate(modulus)` without
    /// building the substituted sequence. The result is the value of
    /// `(LHS) - (RHS)`; under [`Modulus::Modulo`] it is the non-negative residue.
    pub fn evaluate_with(
        &self,
        substitution: &Substitution,
        modulus: Modulus,
    ) -> Result<i128, EvalError> {
        let divisor = modulus.divisor();
        let mut stack: Vec<i128> = Vec::with_capacity(self.len());

        for token in self.tokens() {
            match token {
                Token::Word(word) => stack.push(word_value(word, substitution, modulus)?),
                Token::Operator(op) => {
                    let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                        return Err(EvalError::StackUnderflow);
                    };
                    stack.push(apply_operator(*op, left, right, divisor)?);
                }
            }
        }

        match stack.as_slice() {
            [value] => Ok(*value),
            rest => Err(EvalError::DanglingOperands(rest.len())),
        }
    }

    /// Exact evaluation in arbitrary precision; never overflows
    pub fn evaluate_big_with(&self, substitution: &Substitution) -> Result<BigInt, EvalError> {
        let mut stack: Vec<BigInt> = Vec::with_capacity(self.len());

        for token in self.tokens() {
            match token {
                Token::Word(word) => stack.push(big_word_value(word, substitution)?),
                Token::Operator(op) => {
                    let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                        return Err(EvalError::StackUnderflow);
                    };
                    stack.push(match op {
                        Operator::Add => left + right,
                        Operator::Sub => left - right,
                        Operator::Mul => left * right,
                    });
                }
            }
        }

        if stack.len() != 1 {
            return Err(EvalError::DanglingOperands(stack.len()));
        }
        stack.pop().ok_or(EvalError::StackUnderflow)
    }

    /// Whether `(LHS) - (RHS)` is exactly zero under `substitution`
    ///
    /// Runs in 128-bit arithmetic and falls back to [`evaluate_big_with`]
    /// when that overflows, so long words are never misjudged.
    ///
    /// [`evaluate_big_with`]: Rpn::evaluate_big_with
    pub fn holds_with(&self, substitution: &Substitution) -> Result<bool, EvalError> {
        match self.evaluate_with(substitution, Modulus::Exact) {
            Ok(value) => Ok(value == 0),
            Err(EvalError::Overflow) => {
                let value = self.evaluate_big_with(substitution)?;
                Ok(value.sign() == Sign::NoSign)
            }
            Err(err) => Err(err),
        }
    }
}

fn resolve(glyph: Glyph, substitution: &Substitution) -> Result<u8, EvalError> {
    match glyph {
        Glyph::Digit(d) => Ok(d),
        Glyph::Letter(c) => substitution
            .digit(c)
            .ok_or(EvalError::UnresolvedLetter(c)),
    }
}

fn big_word_value(word: &Word, substitution: &Substitution) -> Result<BigInt, EvalError> {
    word.glyphs().iter().try_fold(BigInt::default(), |acc, glyph| {
        Ok(acc * 10u32 + u32::from(resolve(*glyph, substitution)?))
    })
}

/// Numeric value of `word`, reduced when a modulus is active
fn word_value(
    word: &Word,
    substitution: &Substitution,
    modulus: Modulus,
) -> Result<i128, EvalError> {
    let glyphs = word.glyphs();
    let start = modulus
        .significant_digits()
        .map_or(0, |n| glyphs.len().saturating_sub(n));

    glyphs[start..].iter().try_fold(0i128, |acc, glyph| {
        let digit = resolve(*glyph, substitution)?;
        acc.checked_mul(10)
            .and_then(|v| v.checked_add(i128::from(digit)))
            .ok_or(EvalError::Overflow)
    })
}

fn apply_operator(
    op: Operator,
    left: i128,
    right: i128,
    divisor: Option<i128>,
) -> Result<i128, EvalError> {
    match divisor {
        None => match op {
            Operator::Add => left.checked_add(right),
            Operator::Sub => left.checked_sub(right),
            Operator::Mul => left.checked_mul(right),
        }
        .ok_or(EvalError::Overflow),
        Some(m) => {
            let value = match op {
                Operator::Add => left + right,
                Operator::Sub => left - right,
                Operator::Mul => left * right,
            };
            Ok(value.rem_euclid(m))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile;

    #[test]
    fn test_exact_evaluation_respects_precedence() {
        let rpn = compile("2+3*4 = 10").unwrap();
        assert_eq!(rpn.evaluate(Modulus::Exact), Ok(4));

        let rpn = compile("(2+3)*4 = 10").unwrap();
        assert_eq!(rpn.evaluate(Modulus::Exact), Ok(10));
    }

    #[test]
    fn test_subtraction_keeps_operand_order() {
        let rpn = compile("10-3-2 = 0").unwrap();
        assert_eq!(rpn.evaluate(Modulus::Exact), Ok(5));
    }

    #[test]
    fn test_modular_evaluation_is_non_negative() {
        let rpn = compile("3 = 15").unwrap();
        assert_eq!(rpn.evaluate(Modulus::Exact), Ok(-12));
        assert_eq!(rpn.evaluate(Modulus::Modulo(1)), Ok(8));
        assert_eq!(rpn.evaluate(Modulus::Modulo(2)), Ok(88));
    }

    #[test]
    fn test_modular_evaluation_uses_trailing_digits() {
        // 1234 * 5678 = 7006652
        let rpn = compile("1234*5678 = 0").unwrap();
        assert_eq!(rpn.evaluate(Modulus::Modulo(3)), Ok(652));
    }

    #[test]
    fn test_evaluate_with_matches_apply_then_evaluate() {
        let rpn = compile("AB+BA = CC").unwrap();
        let sub = Substitution::from_pairs([('A', 1), ('B', 2), ('C', 3)]).unwrap();
        let direct = rpn.evaluate_with(&sub, Modulus::Exact);
        let applied = rpn.apply(&sub).evaluate(Modulus::Exact);
        assert_eq!(direct, Ok(0));
        assert_eq!(direct, applied);
    }

    #[test]
    fn test_unresolved_letter() {
        let rpn = compile("A = 1").unwrap();
        assert_eq!(
            rpn.evaluate(Modulus::Exact),
            Err(EvalError::UnresolvedLetter('A'))
        );
    }

    #[test]
    fn test_exact_overflow_is_reported() {
        let big = "9".repeat(30);
        let rpn = compile(&format!("{big}*{big} = 1")).unwrap();
        assert_eq!(rpn.evaluate(Modulus::Exact), Err(EvalError::Overflow));
        // modular evaluation never overflows
        assert!(rpn.evaluate(Modulus::Modulo(25)).is_ok());
    }

    #[test]
    fn test_big_evaluation_beyond_i128() {
        let big = "9".repeat(30);
        let rpn = compile(&format!("{big}*{big} = 1")).unwrap();
        // (10^30 - 1)^2 - 1 = (10^30 - 2) * 10^30
        let expected = "9".repeat(29) + "8" + &"0".repeat(30);
        assert_eq!(
            rpn.evaluate_big_with(&Substitution::new()).unwrap().to_string(),
            expected
        );
    }

    #[test]
    fn test_holds_with_falls_back_on_overflow() {
        let word = "A".repeat(40);
        let rpn = compile(&format!("{word} = {word}")).unwrap();
        let sub = Substitution::from_pairs([('A', 7)]).unwrap();
        assert_eq!(rpn.evaluate_with(&sub, Modulus::Exact), Err(EvalError::Overflow));
        assert_eq!(rpn.holds_with(&sub), Ok(true));

        let rpn = compile(&format!("{word} = {word}1")).unwrap();
        assert_eq!(rpn.holds_with(&sub), Ok(false));
        assert_eq!(
            rpn.holds_with(&Substitution::new()),
            Err(EvalError::UnresolvedLetter('A'))
        );
    }
}
