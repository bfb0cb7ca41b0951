//! Character-driven scanners over C-like source text.
//!
//! Two small machines sharing the crate's dispatch shape, folded over
//! `char` input instead of user commands:
//!
//! - [`find_divisions`]: positions of `/` used as division, skipping
//!   `//` comments
//! - [`extract_strings`] / [`StringScanner`]: contents of double-quoted
//!   literals, honoring backslash escapes and `//` comments
//!
//! Both are pure: no printing, no I/O, a closed state enum with an
//! exhaustive match per character class.

mod division;
mod strings;

pub use division::find_divisions;
pub use strings::{extract_strings, StringScanner};
