//! Replacement buffer: an edited copy of the input plus the offset drift
//! that maps original-input spans onto the edited text.
//!
//! Every splice changes the buffer's length, so a span expressed in
//! original-input offsets must be shifted by the accumulated drift before it
//! can index the edited text. The scanner only ever splices at
//! non-decreasing original offsets (its cursor never moves backwards), which
//! keeps the single signed drift sufficient: everything before the current
//! span has shifted uniformly, everything after it has not shifted yet.
//!
//! The one aliasing case is a repeat splice of the exact same original span
//! (the scanner did not advance in between). Shifting that span through the
//! drift would slice into the bytes of the previous replacement, which is
//! meaningless in original-input terms and can land inside a multi-byte
//! scalar. Instead the buffer remembers its most recent splice and a repeat
//! overwrites that replacement wholesale.

#![allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use alloc::string::{String, ToString};

#[derive(Debug, Clone)]
pub(crate) struct RewriteBuffer {
    text: String,
    drift: isize,
    last: Option<Splice>,
}

/// The most recent splice: its original-input span, where its replacement
/// starts in the edited text, and how many bytes that replacement occupies.
#[derive(Debug, Clone, Copy)]
struct Splice {
    start: usize,
    end: usize,
    at: usize,
    written: usize,
}

impl RewriteBuffer {
    pub(crate) fn new(source: &str) -> Self {
        Self {
            text: source.to_string(),
            drift: 0,
            last: None,
        }
    }

    /// Replaces the original-input span `start..end` with `value`.
    ///
    /// A zero-length span is a pure insertion. Splicing the same span again
    /// overwrites the previous replacement instead of re-translating the
    /// span, so repeated replacement converges on the latest value. After
    /// every splice, `drift == text.len() - original.len()` holds again.
    pub(crate) fn splice(&mut self, start: usize, end: usize, value: &str) {
        debug_assert!(start <= end);
        if let Some(prev) = self.last {
            if prev.start == start && prev.end == end {
                self.text
                    .replace_range(prev.at..prev.at + prev.written, value);
                self.drift += value.len() as isize - prev.written as isize;
                self.last = Some(Splice {
                    written: value.len(),
                    ..prev
                });
                return;
            }
        }
        let lo = self.shifted(start);
        let hi = self.shifted(end).max(lo);
        self.text.replace_range(lo..hi, value);
        self.drift += value.len() as isize - (end - start) as isize;
        self.last = Some(Splice {
            start,
            end,
            at: lo,
            written: value.len(),
        });
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub(crate) fn drift(&self) -> isize {
        self.drift
    }

    // Original offset -> offset in the edited text, clamped to the buffer so
    // a stray offset cannot index out of bounds.
    fn shifted(&self, offset: usize) -> usize {
        (offset as isize + self.drift).clamp(0, self.text.len() as isize) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_splice_leaves_text_unchanged() {
        let mut buf = RewriteBuffer::new("ftp://example.com");
        buf.splice(6, 13, "example");
        assert_eq!(buf.text(), "ftp://example.com");
        assert_eq!(buf.drift(), 0);
    }

    #[test]
    fn growing_splice_shifts_later_offsets() {
        let mut buf = RewriteBuffer::new("ftp://example.com:3000/test/");
        buf.splice(6, 13, "longer-domain");
        assert_eq!(buf.text(), "ftp://longer-domain.com:3000/test/");
        assert_eq!(buf.drift(), 6);
        // ".com" sits at original offsets 13..17 and must still be addressable.
        buf.splice(13, 17, ".io");
        assert_eq!(buf.text(), "ftp://longer-domain.io:3000/test/");
        assert_eq!(buf.drift(), 5);
    }

    #[test]
    fn shrinking_splice_shifts_later_offsets() {
        let mut buf = RewriteBuffer::new("ftp://example.com:3000/test/");
        buf.splice(6, 13, "x");
        assert_eq!(buf.text(), "ftp://x.com:3000/test/");
        assert_eq!(buf.drift(), -6);
        buf.splice(23, 27, "main");
        assert_eq!(buf.text(), "ftp://x.com:3000/main/");
    }

    #[test]
    fn zero_length_span_is_an_insertion() {
        let mut buf = RewriteBuffer::new("ab");
        buf.splice(1, 1, "X");
        assert_eq!(buf.text(), "aXb");
        assert_eq!(buf.drift(), 1);
        buf.splice(2, 2, "Y");
        assert_eq!(buf.text(), "aXbY");
    }

    #[test]
    fn alternating_grow_and_shrink_keep_drift_consistent() {
        let mut buf = RewriteBuffer::new("a1b22c333d");
        buf.splice(1, 2, "##");
        buf.splice(3, 5, "#");
        buf.splice(6, 9, "####");
        assert_eq!(buf.text(), "a##b#c####d");
        assert_eq!(buf.drift(), 1);
    }

    #[test]
    fn splice_to_empty_then_insert_at_end() {
        let mut buf = RewriteBuffer::new("abc");
        buf.splice(0, 3, "");
        assert_eq!(buf.text(), "");
        assert_eq!(buf.drift(), -3);
        buf.splice(3, 3, "z");
        assert_eq!(buf.text(), "z");
        assert_eq!(buf.drift(), -2);
    }

    #[test]
    fn re_splicing_the_same_span_overwrites_the_replacement() {
        let mut buf = RewriteBuffer::new("ftp://example.com");
        buf.splice(6, 13, "foobar");
        assert_eq!(buf.text(), "ftp://foobar.com");
        buf.splice(6, 13, "x");
        assert_eq!(buf.text(), "ftp://x.com");
        assert_eq!(buf.drift(), -6);
        buf.splice(6, 13, "wider-than-before");
        assert_eq!(buf.text(), "ftp://wider-than-before.com");
        assert_eq!(buf.drift(), 10);
    }

    #[test]
    fn re_splicing_with_multibyte_replacements_stays_on_char_boundaries() {
        let mut buf = RewriteBuffer::new("ab");
        buf.splice(0, 1, "\u{65e5}");
        assert_eq!(buf.text(), "\u{65e5}b");
        assert_eq!(buf.drift(), 2);
        buf.splice(0, 1, "x");
        assert_eq!(buf.text(), "xb");
        assert_eq!(buf.drift(), 0);
        buf.splice(0, 1, "\u{30b9}\u{30c6}");
        assert_eq!(buf.text(), "\u{30b9}\u{30c6}b");
        assert_eq!(buf.drift(), 5);
    }

    #[test]
    fn re_splicing_an_insertion_overwrites_it() {
        let mut buf = RewriteBuffer::new("ab");
        buf.splice(1, 1, "XX");
        assert_eq!(buf.text(), "aXXb");
        buf.splice(1, 1, "Y");
        assert_eq!(buf.text(), "aYb");
        assert_eq!(buf.drift(), 1);
    }

    #[test]
    fn splices_after_a_re_splice_still_land_correctly() {
        let mut buf = RewriteBuffer::new("ftp://example.com/test/");
        buf.splice(6, 13, "first");
        buf.splice(6, 13, "\u{65e5}\u{672c}");
        assert_eq!(buf.text(), "ftp://\u{65e5}\u{672c}.com/test/");
        buf.splice(18, 22, "main");
        assert_eq!(buf.text(), "ftp://\u{65e5}\u{672c}.com/main/");
        assert_eq!(buf.drift(), -1);
    }
}
