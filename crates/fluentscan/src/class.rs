//! Character classes and the one-shot quantifier applied to them.

use core::fmt;

/// A predicate over a single character.
///
/// Classification is ordinal and ASCII-range only: `Digit` and `Letter`
/// never match characters outside ASCII, and `Exact` compares scalar
/// values directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// An ASCII decimal digit, `0`–`9`.
    Digit,
    /// An ASCII letter, `A`–`Z` or `a`–`z`.
    Letter,
    /// Exactly the given character.
    Exact(char),
}

impl CharClass {
    pub(crate) fn matches(self, ch: char) -> bool {
        match self {
            CharClass::Digit => ch.is_ascii_digit(),
            CharClass::Letter => ch.is_ascii_alphabetic(),
            CharClass::Exact(want) => ch == want,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Digit => f.write_str("digit"),
            CharClass::Letter => f.write_str("letter"),
            CharClass::Exact(ch) => write!(f, "'{ch}'"),
        }
    }
}

/// How the next character-class predicate is applied.
///
/// Declared ahead of the predicate and consumed by exactly one invocation;
/// invoking a predicate with nothing declared behaves as `ExactlyOne`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Quantifier {
    #[default]
    ExactlyOne,
    Optional,
    OneOrMany,
}
