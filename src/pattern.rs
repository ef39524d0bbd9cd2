use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::engine::Engine;
use crate::error::Error;
use crate::iter::Matches;
use crate::last_match::{self, set_last_match};
use crate::match_result::MatchResult;
use crate::options::Options;
use crate::types::Subject;

/// A compiled regular expression.
///
/// A `Regex` is immutable; it can be cloned cheaply and shared between
/// threads. Two values are equal when their pattern text and options are
/// equal.
#[derive(Clone)]
pub struct Regex {
    pattern: String,
    options: Options,
    engine: Arc<Engine>,
}

impl Regex {
    /// Compiles `pattern` with default options.
    pub fn new(pattern: &str) -> Result<Regex, Error> {
        Regex::with_options(pattern, Options::empty())
    }

    /// Compiles `pattern`, returning an error describing the problem if it is
    /// not a valid regular expression.
    pub fn with_options(pattern: &str, options: Options) -> Result<Regex, Error> {
        let engine = Engine::compile(pattern, options)?;
        Ok(Regex {
            pattern: pattern.to_string(),
            options,
            engine: Arc::new(engine),
        })
    }

    /// Compiles a pattern written in the program's source.
    ///
    /// # Panics
    ///
    /// An invalid pattern here is a programming mistake rather than a runtime
    /// condition, so this panics with the compile error.
    #[track_caller]
    pub fn from_static(pattern: &'static str) -> Regex {
        Regex::from_static_with_options(pattern, Options::empty())
    }

    /// Like [`Regex::from_static`], with options.
    #[track_caller]
    pub fn from_static_with_options(pattern: &'static str, options: Options) -> Regex {
        match Regex::with_options(pattern, options) {
            Ok(regex) => regex,
            Err(e) => panic!("{e}"),
        }
    }

    /// The pattern text this regex was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Number of capture groups declared in the pattern.
    pub fn capture_count(&self) -> usize {
        self.engine.capture_count()
    }

    /// Returns `true` if the regex matches somewhere in `subject`.
    ///
    /// The match, or its absence, is recorded in [`Regex::last_match`].
    pub fn is_match(&self, subject: &str) -> bool {
        self.first_match(subject).is_some()
    }

    /// Returns the first match in `subject`, if any, and records it in
    /// [`Regex::last_match`].
    pub fn first_match(&self, subject: &str) -> Option<MatchResult> {
        let result = self.find(subject);
        set_last_match(result.clone());
        result
    }

    /// Returns every non-overlapping match in `subject`.
    ///
    /// The first match is recorded in [`Regex::last_match`], which is cleared
    /// when there are none.
    pub fn all_matches(&self, subject: &str) -> Vec<MatchResult> {
        let matches: Vec<MatchResult> = self.matches_in(subject).collect();
        set_last_match(matches.first().cloned());
        matches
    }

    /// Lazily enumerates the matches in `subject`. Unlike the other matching
    /// methods this does not touch [`Regex::last_match`].
    ///
    /// ```
    /// use regexkit::Regex;
    ///
    /// let regex = Regex::new(r"\d+").unwrap();
    /// let numbers: Vec<&str> = regex
    ///     .matches_in("1, 22, 333")
    ///     .map(|m| m.range())
    ///     .map(|r| &"1, 22, 333"[r])
    ///     .collect();
    /// assert_eq!(numbers, ["1", "22", "333"]);
    /// ```
    pub fn matches_in(&self, subject: &str) -> Matches {
        Matches::new(Arc::clone(&self.engine), subject)
    }

    /// The most recent match recorded on the current thread.
    pub fn last_match() -> Option<MatchResult> {
        last_match::last_match()
    }

    /// First match without recording it.
    pub(crate) fn find(&self, subject: &str) -> Option<MatchResult> {
        let subject = Arc::new(Subject::new(subject));
        let raw = self
            .engine
            .first_match(&subject, subject.units().entire_range())?;
        Some(MatchResult::new(subject, raw))
    }
}

impl PartialEq for Regex {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.options == other.options
    }
}

impl Eq for Regex {}

impl Hash for Regex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.options.bits().hash(state);
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.pattern)
    }
}

impl FromStr for Regex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Regex, Error> {
        Regex::new(s)
    }
}

// Only the pattern text is serialized; options do not survive a round trip.
impl Serialize for Regex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.pattern)
    }
}

impl<'de> Deserialize<'de> for Regex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Regex, D::Error> {
        let pattern = String::deserialize(deserializer)?;
        Regex::new(&pattern)
            .map_err(|e| de::Error::custom(Error::serialization(&pattern, e.message)))
    }
}
