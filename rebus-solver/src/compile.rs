//! Equation validation and infix-to-RPN compilation
//!
//! Compilation runs in two steps:
//! 1. [`validate`] normalizes the text and checks it against the alphabet,
//!    producing the canonical difference form `(LHS)-(RHS)`.
//! 2. The canonical form is lexed and reordered with the shunting-yard
//!    algorithm (`*` binds tighter than `+` and `-`, all left associative).

use crate::error::CompileError;
use crate::rpn::{Operator, Rpn, Token, Word};
use std::collections::BTreeSet;

/// There are only ten digits to hand out
pub const MAX_LETTERS: usize = 10;

/// A validated equation in difference form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalForm {
    /// `(LHS)-(RHS)`, uppercased, whitespace removed
    pub text: String,
    /// Distinct letters of the equation
    pub letters: BTreeSet<char>,
}

/// Uppercase the text and strip all whitespace
pub fn normalize(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Validate an equation and build its canonical form
///
/// # Errors
/// * `MalformedEquation` - not exactly one `=`, or an empty side
/// * `TooManyLetters` - more than ten distinct letters
/// * `UnknownSymbol` - a character other than a letter, digit, `+ - * ( )`
pub fn validate(text: &str) -> Result<CanonicalForm, CompileError> {
    let normalized = normalize(text);

    let sides: Vec<&str> = normalized.split('=').collect();
    let [lhs, rhs] = sides.as_slice() else {
        return Err(CompileError::MalformedEquation(format!(
            "expected exactly one '=', found {}",
            sides.len() - 1
        )));
    };
    if lhs.is_empty() || rhs.is_empty() {
        return Err(CompileError::MalformedEquation(
            "both sides of '=' must be non-empty".to_string(),
        ));
    }

    let canonical = format!("({lhs})-({rhs})");

    let letters: BTreeSet<char> = canonical.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() > MAX_LETTERS {
        return Err(CompileError::TooManyLetters {
            count: letters.len(),
            letters: letters.iter().collect(),
        });
    }

    let unknown: BTreeSet<char> = canonical
        .chars()
        .filter(|&c| Lexeme::kind_of(c).is_none())
        .collect();
    if !unknown.is_empty() {
        return Err(CompileError::UnknownSymbol(unknown.iter().collect()));
    }

    Ok(CanonicalForm {
        text: canonical,
        letters,
    })
}

/// Compile an equation into its RPN form
///
/// # Example
///
/// ```
/// use rebus_solver::compile;
///
/// let rpn = compile("КОЗА*2 = СТАДО").unwrap();
/// assert_eq!(rpn.to_strings(), ["КОЗА", "2", "*", "СТАДО", "-"]);
/// ```
pub fn compile(text: &str) -> Result<Rpn, CompileError> {
    let canonical = validate(text)?;
    let lexemes = lex(&canonical.text)?;
    shunting_yard(lexemes)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Lexeme {
    Word(Word),
    Operator(Operator),
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexemeKind {
    WordChar,
    Operator,
    Open,
    Close,
}

impl Lexeme {
    fn kind_of(c: char) -> Option<LexemeKind> {
        match c {
            '(' => Some(LexemeKind::Open),
            ')' => Some(LexemeKind::Close),
            c if Operator::from_char(c).is_some() => Some(LexemeKind::Operator),
            c if c.is_alphabetic() || c.is_ascii_digit() => Some(LexemeKind::WordChar),
            _ => None,
        }
    }
}

/// Split canonical text into words, operators and parentheses
fn lex(text: &str) -> Result<Vec<Lexeme>, CompileError> {
    let mut lexemes = Vec::new();
    let mut word = String::new();

    for c in text.chars() {
        let kind = Lexeme::kind_of(c).ok_or_else(|| CompileError::UnknownSymbol(c.to_string()))?;
        if kind == LexemeKind::WordChar {
            word.push(c);
            continue;
        }
        flush_word(&mut word, &mut lexemes)?;
        lexemes.push(match kind {
            LexemeKind::Open => Lexeme::Open,
            LexemeKind::Close => Lexeme::Close,
            _ => Lexeme::Operator(
                Operator::from_char(c).ok_or_else(|| CompileError::UnknownSymbol(c.to_string()))?,
            ),
        });
    }
    flush_word(&mut word, &mut lexemes)?;

    Ok(lexemes)
}

fn flush_word(word: &mut String, lexemes: &mut Vec<Lexeme>) -> Result<(), CompileError> {
    if word.is_empty() {
        return Ok(());
    }
    let parsed = Word::parse(word).ok_or_else(|| CompileError::UnknownSymbol(word.clone()))?;
    lexemes.push(Lexeme::Word(parsed));
    word.clear();
    Ok(())
}

/// Entries of the operator stack
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    Open,
}

/// Reorder infix lexemes into postfix tokens
///
/// Also checks expression structure: operands and operators must alternate,
/// and parentheses must balance and enclose something.
fn shunting_yard(lexemes: Vec<Lexeme>) -> Result<Rpn, CompileError> {
    let malformed = |msg: &str| CompileError::MalformedEquation(msg.to_string());

    let mut output = Vec::with_capacity(lexemes.len());
    let mut stack: Vec<Pending> = Vec::new();
    let mut expect_operand = true;

    for lexeme in lexemes {
        match lexeme {
            Lexeme::Word(word) => {
                if !expect_operand {
                    return Err(CompileError::MalformedEquation(format!(
                        "missing operator before '{word}'"
                    )));
                }
                output.push(Token::Word(word));
                expect_operand = false;
            }
            Lexeme::Open => {
                if !expect_operand {
                    return Err(malformed("missing operator before '('"));
                }
                stack.push(Pending::Open);
            }
            Lexeme::Close => {
                if expect_operand {
                    return Err(malformed("expected an operand before ')'"));
                }
                loop {
                    match stack.pop() {
                        Some(Pending::Operator(op)) => output.push(Token::Operator(op)),
                        Some(Pending::Open) => break,
                        None => return Err(malformed("unbalanced ')'")),
                    }
                }
            }
            Lexeme::Operator(op) => {
                if expect_operand {
                    return Err(CompileError::MalformedEquation(format!(
                        "operator '{op}' is missing its left operand"
                    )));
                }
                while let Some(&Pending::Operator(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(Pending::Operator(op));
                expect_operand = true;
            }
        }
    }

    if expect_operand {
        return Err(malformed("expression ends with an operator"));
    }
    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(Token::Operator(op)),
            Pending::Open => return Err(malformed("unbalanced '('")),
        }
    }

    Ok(Rpn::from_tokens(output))
}
