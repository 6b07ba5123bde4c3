use alloc::string::String;

use thiserror::Error;

use crate::class::CharClass;

/// Why a scan stopped making progress.
///
/// One variant per failing operation. Offsets are byte positions in the
/// original input where the match was attempted. The first failure is
/// recorded on the scanner and every later operation short-circuits, so
/// an error always describes the step that actually went wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A strict literal did not occur at the cursor, or would have run past
    /// the end of input.
    #[error("expected literal {expected:?} at offset {offset}")]
    LiteralMismatch {
        /// The literal that was required.
        expected: String,
        /// Byte offset where matching was attempted.
        offset: usize,
    },

    /// None of the alternatives given to `one_of` matched at the cursor.
    #[error("no alternative matched at offset {offset}")]
    NoAlternative {
        /// Byte offset where matching was attempted.
        offset: usize,
    },

    /// A character class under the exactly-one quantifier did not match the
    /// character at the cursor (or the input was exhausted).
    #[error("expected {class} at offset {offset}")]
    ClassMismatch {
        /// The class that was required.
        class: CharClass,
        /// Byte offset where matching was attempted.
        offset: usize,
    },

    /// A one-or-many repetition matched zero characters.
    #[error("expected at least one {class} at offset {offset}")]
    EmptyRepetition {
        /// The class that was repeated.
        class: CharClass,
        /// Byte offset where matching was attempted.
        offset: usize,
    },

    /// `until` reached the end of input without finding its delimiter.
    #[error("delimiter {delimiter:?} not found at or after offset {offset}")]
    DelimiterNotFound {
        /// The delimiter that was searched for.
        delimiter: String,
        /// Byte offset the search started from.
        offset: usize,
    },
}
