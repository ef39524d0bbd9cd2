//! Regular expression matching with capture extraction and replacement.
//!
//! The engine underneath reports positions in UTF-16 code units. Everything
//! exposed here is translated back into byte ranges that always fall on
//! character boundaries of the searched string, so slicing with them is safe.
//!
//! ```
//! use regexkit::{Options, Regex};
//!
//! let regex = Regex::with_options("^(hello|foo).*$", Options::IGNORE_CASE | Options::ANCHORS_MATCH_LINES)?;
//! let lines: Vec<String> = regex
//!     .matches_in("hello world\ngoodbye world\nFOOBAR\n")
//!     .map(|m| m.as_str().to_string())
//!     .collect();
//! assert_eq!(lines, ["hello world", "FOOBAR"]);
//! # Ok::<(), regexkit::Error>(())
//! ```

mod captures;
mod engine;
mod error;
mod graphemes;
mod grep;
mod iter;
mod last_match;
mod match_result;
mod options;
mod pattern;
mod replace;
mod translate;
mod types;

pub use captures::{Captures, Iter as CapturesIter};
pub use engine::RawMatch;
pub use error::{Error, ErrorKind};
pub use graphemes::{grapheme_offset, grapheme_range};
pub use grep::{Lines, grep, grep_lines, lines};
pub use iter::Matches;
pub use last_match::last_match;
pub use match_result::MatchResult;
pub use options::Options;
pub use pattern::Regex;
pub use translate::translate;
pub use types::{CodeUnitRange, CodeUnits, NOT_FOUND};
