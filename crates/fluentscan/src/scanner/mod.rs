//! The fluent scanner state machine.
//!
//! State
//! - `cursor` is the current byte offset into the source; `mark` is the
//!   offset the cursor held before the most recent successful advance. The
//!   most recent match is always the derived slice `source[mark..cursor]`,
//!   never a stored copy. An optional miss collapses the span
//!   (`mark = cursor`) so the derived slice is empty.
//! - `pending` holds the one-shot quantifier declared ahead of the next
//!   character-class test; it is taken by exactly one predicate invocation
//!   and defaults to exactly-one.
//! - `failure` is sticky. Once set, every operation short-circuits and
//!   returns the scanner unchanged; the caller inspects the outcome after
//!   the chain completes.
//!
//! Invariants
//! - `mark <= cursor <= source.len()`, both on UTF-8 boundaries.
//! - `failure` only ever goes from `None` to `Some`.
//! - The rewrite buffer's drift equals its length minus the source length.

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
};

use crate::{
    class::{CharClass, Quantifier},
    error::ScanError,
    rewrite::RewriteBuffer,
};

/// Named captures: label to most recent substring bound under that label.
pub type Matches = BTreeMap<String, String>;

/// A fluent scanner over an immutable input string.
///
/// Every chainable operation takes the scanner by value and returns it, so a
/// whole scan is written as one expression. See the crate docs for a worked
/// example.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    source: &'src str,
    cursor: usize,
    mark: usize,
    matches: Matches,
    failure: Option<ScanError>,
    pending: Option<Quantifier>,
    rewrite: RewriteBuffer,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            cursor: 0,
            mark: 0,
            matches: Matches::new(),
            failure: None,
            pending: None,
            rewrite: RewriteBuffer::new(source),
        }
    }

    // --- literal and set matchers -------------------------------------

    /// Matches `pattern` verbatim at the cursor and advances past it.
    ///
    /// A mismatch, including a pattern that would run past the end of
    /// input, records [`ScanError::LiteralMismatch`] and leaves the cursor
    /// where it was.
    #[must_use]
    pub fn then(mut self, pattern: &str) -> Self {
        if self.failure.is_some() {
            return self;
        }
        if self.literal_at(pattern, self.cursor) {
            self.advance_to(self.cursor + pattern.len());
        } else {
            self.failure = Some(ScanError::LiteralMismatch {
                expected: pattern.to_string(),
                offset: self.cursor,
            });
        }
        self
    }

    /// Matches `pattern` if it occurs at the cursor, otherwise skips it.
    ///
    /// On a miss the last match becomes empty and no failure is recorded.
    #[must_use]
    pub fn maybe_then(mut self, pattern: &str) -> Self {
        if self.failure.is_some() {
            return self;
        }
        if self.literal_at(pattern, self.cursor) {
            self.advance_to(self.cursor + pattern.len());
        } else {
            self.mark = self.cursor;
        }
        self
    }

    /// Matches the first of `patterns` that occurs at the cursor.
    ///
    /// Alternatives are tried in declaration order and the first hit wins;
    /// there is no longest-match preference and no backtracking. If none
    /// match, records [`ScanError::NoAlternative`].
    #[must_use]
    pub fn one_of(mut self, patterns: &[&str]) -> Self {
        if self.failure.is_some() {
            return self;
        }
        for pattern in patterns {
            if self.literal_at(pattern, self.cursor) {
                self.advance_to(self.cursor + pattern.len());
                return self;
            }
        }
        self.failure = Some(ScanError::NoAlternative {
            offset: self.cursor,
        });
        self
    }

    /// Scans forward to the next occurrence of `pattern`.
    ///
    /// The cursor stops AT the found pattern, not past it, and the skipped
    /// text becomes the last match (possibly empty when the pattern starts
    /// at the cursor). The following operation is expected to consume the
    /// pattern explicitly. If no occurrence fits before the end of input,
    /// records [`ScanError::DelimiterNotFound`] and moves nothing.
    #[must_use]
    pub fn until(mut self, pattern: &str) -> Self {
        if self.failure.is_some() {
            return self;
        }
        let mut at = self.cursor;
        while at + pattern.len() <= self.source.len() {
            if self.literal_at(pattern, at) {
                self.advance_to(at);
                return self;
            }
            at += 1;
        }
        self.failure = Some(ScanError::DelimiterNotFound {
            delimiter: pattern.to_string(),
            offset: self.cursor,
        });
        self
    }

    // --- quantifier declarations ---------------------------------------

    /// Requires the next character class to match exactly one character.
    ///
    /// This is also the behavior when no quantifier is declared at all.
    #[must_use]
    pub fn one(mut self) -> Self {
        if self.failure.is_none() {
            self.pending = Some(Quantifier::ExactlyOne);
        }
        self
    }

    /// Lets the next character class match one character or nothing.
    #[must_use]
    pub fn maybe(mut self) -> Self {
        if self.failure.is_none() {
            self.pending = Some(Quantifier::Optional);
        }
        self
    }

    /// Makes the next character class match greedily, at least once.
    #[must_use]
    pub fn one_or_many(mut self) -> Self {
        if self.failure.is_none() {
            self.pending = Some(Quantifier::OneOrMany);
        }
        self
    }

    // --- character classes ----------------------------------------------

    /// Matches an ASCII digit under the pending quantifier.
    #[must_use]
    pub fn digit(self) -> Self {
        self.apply_class(CharClass::Digit)
    }

    /// Matches an ASCII letter under the pending quantifier.
    #[must_use]
    pub fn letter(self) -> Self {
        self.apply_class(CharClass::Letter)
    }

    /// Matches exactly `ch` under the pending quantifier.
    #[must_use]
    pub fn is(self, ch: char) -> Self {
        self.apply_class(CharClass::Exact(ch))
    }

    // --- capture ----------------------------------------------------------

    /// Binds the last match to `label`, overwriting any earlier binding.
    #[must_use]
    pub fn bind_var(mut self, label: &str) -> Self {
        if self.failure.is_some() {
            return self;
        }
        self.matches
            .insert(label.to_string(), self.last_match().to_string());
        self
    }

    // --- rewriting ----------------------------------------------------------

    /// Splices `value` over the last match in the rewritten copy of the
    /// input.
    ///
    /// The span is expressed in original-input offsets and translated
    /// through the accumulated length drift, so earlier replacements that
    /// changed the text's length do not misplace this one. Replacing an
    /// empty last match inserts `value` at the cursor. Calling this again
    /// without advancing replaces the same span, overwriting the previous
    /// replacement with `value`.
    #[must_use]
    pub fn replace_with(mut self, value: &str) -> Self {
        if self.failure.is_some() {
            return self;
        }
        self.rewrite.splice(self.mark, self.cursor, value);
        self
    }

    // --- readable state ---------------------------------------------------

    /// The named captures collected so far.
    #[must_use]
    pub fn matches(&self) -> &Matches {
        &self.matches
    }

    /// The most recently matched substring, `source[mark..cursor]`.
    #[must_use]
    pub fn last_match(&self) -> &'src str {
        &self.source[self.mark..self.cursor]
    }

    /// Whether any operation in the chain has failed.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.failure.is_some()
    }

    /// The first failure recorded by the chain, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ScanError> {
        self.failure.as_ref()
    }

    /// The rewritten copy of the input as of this call.
    #[must_use]
    pub fn replaced_string(&self) -> &str {
        self.rewrite.text()
    }

    /// Current byte offset of the cursor in the original input.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    // --- internals ----------------------------------------------------------

    /// Applies `class` under the pending quantifier, consuming it.
    fn apply_class(mut self, class: CharClass) -> Self {
        if self.failure.is_some() {
            return self;
        }
        match self.pending.take().unwrap_or_default() {
            Quantifier::ExactlyOne => match self.decode_at(self.cursor) {
                Some((ch, len)) if class.matches(ch) => {
                    self.advance_to(self.cursor + len);
                }
                _ => {
                    self.failure = Some(ScanError::ClassMismatch {
                        class,
                        offset: self.cursor,
                    });
                }
            },
            Quantifier::Optional => match self.decode_at(self.cursor) {
                Some((ch, len)) if class.matches(ch) => {
                    self.advance_to(self.cursor + len);
                }
                _ => self.mark = self.cursor,
            },
            Quantifier::OneOrMany => {
                let start = self.cursor;
                let mut at = start;
                while let Some((ch, len)) = self.decode_at(at) {
                    if !class.matches(ch) {
                        break;
                    }
                    at += len;
                }
                if at == start {
                    self.failure = Some(ScanError::EmptyRepetition {
                        class,
                        offset: start,
                    });
                } else {
                    self.advance_to(at);
                }
            }
        }
        self
    }

    /// Moves the cursor to `to`, remembering where it came from.
    fn advance_to(&mut self, to: usize) {
        debug_assert!(to >= self.cursor && to <= self.source.len());
        self.mark = self.cursor;
        self.cursor = to;
    }

    // Byte-wise literal comparison at `at`; false when the pattern would run
    // past the end of input.
    fn literal_at(&self, pattern: &str, at: usize) -> bool {
        self.source.as_bytes()[at..].starts_with(pattern.as_bytes())
    }

    // Decodes the scalar at byte offset `at`; `None` at end of input, so
    // class predicates fail there instead of faulting.
    fn decode_at(&self, at: usize) -> Option<(char, usize)> {
        if at >= self.source.len() {
            return None;
        }
        let (ch, len) = bstr::decode_utf8(&self.source.as_bytes()[at..]);
        if len == 0 {
            return None;
        }
        Some((ch.unwrap_or('\u{FFFD}'), len))
    }
}
