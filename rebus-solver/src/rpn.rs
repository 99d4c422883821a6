//! Token model for compiled equations
//!
//! An [`Rpn`] is the postfix form of `(LHS)-(RHS)`. Words keep their letters
//! until a [`Substitution`] resolves them, so the same sequence serves every
//! search strategy and every truncation power.

use crate::substitution::Substitution;
use std::collections::BTreeSet;
use std::fmt;

/// One character of a word: a fixed digit or a letter awaiting one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Glyph {
    Digit(u8),
    Letter(char),
}

impl Glyph {
    /// Classify a character; `None` for anything that cannot be part of a word
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_digit(10) {
            Some(d) => Some(Glyph::Digit(d as u8)),
            None if c.is_alphabetic() => Some(Glyph::Letter(c)),
            None => None,
        }
    }

    /// Digit value under `substitution`, if known
    #[inline]
    pub fn resolve(self, substitution: &Substitution) -> Option<u8> {
        match self {
            Glyph::Digit(d) => Some(d),
            Glyph::Letter(c) => substitution.digit(c),
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glyph::Digit(d) => write!(f, "{d}"),
            Glyph::Letter(c) => write!(f, "{c}"),
        }
    }
}

/// A maximal run of letters and digits, most significant glyph first
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    glyphs: Vec<Glyph>,
}

impl Word {
    /// Parse a word; `None` if `text` is empty or holds a non-word character
    pub fn parse(text: &str) -> Option<Self> {
        let glyphs = text.chars().map(Glyph::from_char).collect::<Option<Vec<_>>>()?;
        (!glyphs.is_empty()).then_some(Self { glyphs })
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Letters still present in the word, in order of appearance
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.iter().filter_map(|g| match g {
            Glyph::Letter(c) => Some(*c),
            Glyph::Digit(_) => None,
        })
    }

    /// True when the word holds digits only
    pub fn is_literal(&self) -> bool {
        self.letters().next().is_none()
    }

    /// The last `power` glyphs (the whole word if it is shorter)
    pub fn truncated(&self, power: usize) -> Word {
        let start = self.glyphs.len().saturating_sub(power);
        Word {
            glyphs: self.glyphs[start..].to_vec(),
        }
    }

    /// Replace every assigned letter with its digit
    pub fn apply(&self, substitution: &Substitution) -> Word {
        let glyphs = self
            .glyphs
            .iter()
            .map(|&g| match g {
                Glyph::Letter(c) => substitution.digit(c).map_or(g, Glyph::Digit),
                Glyph::Digit(_) => g,
            })
            .collect();
        Word { glyphs }
    }

    /// A multi-glyph word whose first glyph resolves to `0`
    pub fn has_leading_zero(&self, substitution: &Substitution) -> bool {
        self.glyphs.len() > 1 && self.glyphs[0].resolve(substitution) == Some(0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyphs.iter().try_for_each(|g| write!(f, "{g}"))
    }
}

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
        }
    }

    /// Binding strength; higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Word(Word),
    Operator(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => fmt::Display::fmt(word, f),
            Token::Operator(op) => fmt::Display::fmt(op, f),
        }
    }
}

/// Postfix token sequence of a compiled equation
///
/// Immutable once built: truncation and substitution return new sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rpn {
    tokens: Vec<Token>,
}

impl Rpn {
    pub(crate) fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.tokens.iter().filter_map(|t| match t {
            Token::Word(word) => Some(word),
            Token::Operator(_) => None,
        })
    }

    /// Distinct letters still awaiting a digit
    pub fn letters(&self) -> BTreeSet<char> {
        self.words().flat_map(Word::letters).collect()
    }

    /// Length of the longest word (0 for an empty sequence)
    pub fn max_word_len(&self) -> usize {
        self.words().map(Word::len).max().unwrap_or(0)
    }

    /// Every word cut down to its last `power` glyphs; operators untouched
    pub fn truncated(&self, power: usize) -> Rpn {
        self.map_words(|word| word.truncated(power))
    }

    /// Every word with the letters of `substitution` replaced by digits
    pub fn apply(&self, substitution: &Substitution) -> Rpn {
        self.map_words(|word| word.apply(substitution))
    }

    /// True if any multi-glyph word would start with `0` under `substitution`
    pub fn has_leading_zero(&self, substitution: &Substitution) -> bool {
        self.words().any(|word| word.has_leading_zero(substitution))
    }

    /// Tokens rendered as strings, e.g. `["КОЗА", "2", "*", "СТАДО", "-"]`
    pub fn to_strings(&self) -> Vec<String> {
        self.tokens.iter().map(ToString::to_string).collect()
    }

    fn map_words(&self, f: impl Fn(&Word) -> Word) -> Rpn {
        let tokens = self
            .tokens
            .iter()
            .map(|token| match token {
                Token::Word(word) => Token::Word(f(word)),
                Token::Operator(op) => Token::Operator(*op),
            })
            .collect();
        Rpn { tokens }
    }
}

impl fmt::Display for Rpn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::parse(text).unwrap()
    }

    #[test]
    fn test_word_parse_mixed_glyphs() {
        let w = word("A1Б");
        assert_eq!(
            w.glyphs(),
            &[Glyph::Letter('A'), Glyph::Digit(1), Glyph::Letter('Б')]
        );
        assert!(!w.is_literal());
        assert!(word("120").is_literal());
        assert!(Word::parse("").is_none());
        assert!(Word::parse("A+B").is_none());
    }

    #[test]
    fn test_truncated_keeps_least_significant_glyphs() {
        assert_eq!(word("СТАДО").truncated(2).to_string(), "ДО");
        assert_eq!(word("AB").truncated(5).to_string(), "AB");
    }

    #[test]
    fn test_apply_and_leading_zero() {
        let sub = Substitution::from_pairs([('A', 0), ('B', 7)]).unwrap();
        let w = word("ABC");
        assert_eq!(w.apply(&sub).to_string(), "07C");
        assert!(w.has_leading_zero(&sub));
        assert!(!word("A").has_leading_zero(&sub));
        assert!(!word("BA").has_leading_zero(&sub));
        assert!(word("05").has_leading_zero(&Substitution::new()));
    }

    #[test]
    fn test_rpn_letters_and_max_len() {
        let rpn = Rpn::from_tokens(vec![
            Token::Word(word("AB")),
            Token::Word(word("CDE")),
            Token::Operator(Operator::Add),
        ]);
        assert_eq!(rpn.letters().into_iter().collect::<String>(), "ABCDE");
        assert_eq!(rpn.max_word_len(), 3);
        assert_eq!(rpn.truncated(1).to_string(), "B E +");
    }
}
