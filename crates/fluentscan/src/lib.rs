//! A fluent, stateful scanner over an immutable input string.
//!
//! A [`Scanner`] is created from one input string and driven through a single
//! chain of method calls. Each call either matches something at the current
//! cursor position (advancing it), declares how the next character-class test
//! should be applied, captures the most recent match under a name, or splices
//! a replacement into an edited copy of the input.
//!
//! Matching failures are never panics and never abort the chain: the first
//! failure is recorded and every later call becomes a no-op, so the caller
//! inspects the outcome once, after the chain completes.
//!
//! ```rust
//! use fluentscan::Scanner;
//!
//! let scan = Scanner::new("ftp://example.com:3000/test/")
//!     .one_of(&["http", "ftp"])
//!     .bind_var("protocol")
//!     .then("://")
//!     .until(".com")
//!     .bind_var("domain")
//!     .then(".com:");
//!
//! assert!(!scan.failed());
//! assert_eq!(scan.matches()["protocol"], "ftp");
//! assert_eq!(scan.matches()["domain"], "example");
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod class;
mod error;
mod rewrite;
mod scanner;

pub use class::CharClass;
pub use error::ScanError;
pub use scanner::{Matches, Scanner};
