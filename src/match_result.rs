use std::fmt;
use std::ops::Range;
use std::sync::{Arc, OnceLock};

use crate::captures::Captures;
use crate::engine::RawMatch;
use crate::graphemes;
use crate::translate::translate;
use crate::types::{CodeUnitRange, Subject};

/// The result of a single successful match: the matched text, where it was
/// found, and the text of every capture group.
///
/// Clones are cheap and share the lazily computed ranges.
///
/// ```
/// use regexkit::Regex;
///
/// let regex = Regex::new("(a)?(b)").unwrap();
/// let m = regex.first_match("xb").unwrap();
/// assert_eq!(m.as_str(), "b");
/// assert_eq!(m.range(), 1..2);
/// assert_eq!(m.captures().to_vec(), vec![None, Some("b")]);
/// ```
#[derive(Clone)]
pub struct MatchResult {
    inner: Arc<Inner>,
}

struct Inner {
    subject: Arc<Subject>,
    raw: RawMatch,
    range: OnceLock<Range<usize>>,
    capture_ranges: OnceLock<Vec<Option<Range<usize>>>>,
}

impl MatchResult {
    pub(crate) fn new(subject: Arc<Subject>, raw: RawMatch) -> Self {
        MatchResult {
            inner: Arc::new(Inner {
                subject,
                raw,
                range: OnceLock::new(),
                capture_ranges: OnceLock::new(),
            }),
        }
    }

    /// The entire matched text. Always present, though possibly empty.
    pub fn as_str(&self) -> &str {
        &self.subject()[self.range()]
    }

    /// Byte range of the match in the subject.
    pub fn range(&self) -> Range<usize> {
        self.inner
            .range
            .get_or_init(|| match translate(self.inner.raw.range(), self.units()) {
                Some(range) => range,
                None => panic!("the whole match always participates"),
            })
            .clone()
    }

    pub fn start(&self) -> usize {
        self.range().start
    }

    pub fn end(&self) -> usize {
        self.range().end
    }

    /// Range of the match counted in grapheme clusters.
    pub fn grapheme_range(&self) -> Range<usize> {
        graphemes::grapheme_range(self.subject(), self.range())
    }

    /// The capture groups of this match, excluding the whole match.
    pub fn captures(&self) -> Captures<'_> {
        Captures::new(self)
    }

    /// Byte range of every capture group, `None` for groups that did not
    /// participate.
    pub fn capture_ranges(&self) -> &[Option<Range<usize>>] {
        self.inner.capture_ranges.get_or_init(|| {
            self.inner
                .raw
                .capture_ranges()
                .iter()
                .map(|&range| translate(range, self.units()))
                .collect()
        })
    }

    /// The string this match was found in.
    pub fn subject(&self) -> &str {
        self.inner.subject.as_str()
    }

    /// The whole match as reported by the engine, in UTF-16 code units.
    pub fn code_unit_range(&self) -> CodeUnitRange {
        self.inner.raw.range()
    }

    pub(crate) fn raw(&self) -> &RawMatch {
        &self.inner.raw
    }

    fn units(&self) -> &crate::types::CodeUnits {
        self.inner.subject.units()
    }
}

impl PartialEq for MatchResult {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.raw == other.inner.raw && self.subject() == other.subject())
    }
}

impl Eq for MatchResult {}

impl fmt::Debug for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchResult")
            .field("range", &self.range())
            .field("matched", &self.as_str())
            .field("captures", &self.captures().to_vec())
            .finish()
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
