//! Letter-to-digit bijection

use crate::error::SubstitutionError;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// The ten decimal digits, in enumeration order
pub const DIGITS: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Injective mapping from letters to decimal digits
///
/// Every constructor checks that digits are in range and that no two letters
/// share a digit, so a `Substitution` value is always a valid (possibly
/// partial) assignment. Ordering and hashing follow the letter→digit pairs,
/// which makes sets of substitutions directly comparable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Substitution {
    assigned: BTreeMap<char, u8>,
    /// Bit `d` is set when digit `d` is taken
    used: u16,
}

impl Substitution {
    /// The empty substitution
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a substitution from letter/digit pairs, rejecting any collision
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SubstitutionError>
    where
        I: IntoIterator<Item = (char, u8)>,
    {
        pairs.into_iter().try_fold(Self::new(), |mut sub, (letter, digit)| {
            sub.assign(letter, digit)?;
            Ok(sub)
        })
    }

    /// Pair `letters[i]` with `digits[i]`; callers guarantee both are distinct
    pub(crate) fn from_permutation(letters: &[char], digits: &[u8]) -> Self {
        debug_assert_eq!(letters.len(), digits.len());
        let mut sub = Self::new();
        for (&letter, &digit) in letters.iter().zip(digits) {
            debug_assert!(digit < 10 && sub.used & (1 << digit) == 0);
            sub.assigned.insert(letter, digit);
            sub.used |= 1 << digit;
        }
        sub
    }

    /// Add one pair
    pub fn assign(&mut self, letter: char, digit: u8) -> Result<(), SubstitutionError> {
        if digit > 9 {
            return Err(SubstitutionError::DigitOutOfRange(digit));
        }
        if self.assigned.contains_key(&letter) {
            return Err(SubstitutionError::LetterAlreadyAssigned(letter));
        }
        if let Some(owner) = self.owner_of(digit) {
            return Err(SubstitutionError::DigitAlreadyUsed {
                digit,
                letter: owner,
            });
        }
        self.assigned.insert(letter, digit);
        self.used |= 1 << digit;
        Ok(())
    }

    /// Disjoint union with `delta`
    ///
    /// Fails if the two share a letter, or if they map different letters to
    /// the same digit.
    pub fn merge(&self, delta: &Substitution) -> Result<Substitution, SubstitutionError> {
        let mut merged = self.clone();
        for (letter, digit) in delta.iter() {
            merged.assign(letter, digit)?;
        }
        Ok(merged)
    }

    #[inline]
    pub fn digit(&self, letter: char) -> Option<u8> {
        self.assigned.get(&letter).copied()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.assigned.contains_key(&letter)
    }

    pub fn is_digit_used(&self, digit: u8) -> bool {
        digit < 10 && self.used & (1 << digit) != 0
    }

    /// Digits no letter maps to yet, ascending
    pub fn unused_digits(&self) -> Vec<u8> {
        DIGITS
            .iter()
            .copied()
            .filter(|&d| !self.is_digit_used(d))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Pairs in letter order
    pub fn iter(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.assigned.iter().map(|(&l, &d)| (l, d))
    }

    /// Domain equals `letters` exactly
    pub fn is_complete(&self, letters: &BTreeSet<char>) -> bool {
        self.assigned.len() == letters.len() && letters.iter().all(|l| self.contains(*l))
    }

    /// Replace every assigned letter of `text`; everything else is kept as is
    pub fn decode(&self, text: &str) -> String {
        text.chars()
            .map(|c| match self.digit(c) {
                Some(d) => char::from(b'0' + d),
                None => c,
            })
            .collect()
    }

    fn owner_of(&self, digit: u8) -> Option<char> {
        if !self.is_digit_used(digit) {
            return None;
        }
        self.assigned
            .iter()
            .find_map(|(&l, &d)| (d == digit).then_some(l))
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (letter, digit)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{letter}:{digit}")?;
        }
        f.write_str("}")
    }
}
