//! The matching engine. Patterns are compiled by `fancy-regex`, falling back to
//! the `regex` crate for patterns it rejects. Results cross this boundary as
//! UTF-16 code unit ranges.

use std::ops::Range;

use log::{debug, trace, warn};

use crate::error::Error;
use crate::options::Options;
use crate::translate::translate;
use crate::types::{CodeUnitRange, Subject};

enum CompiledRegex {
    Fancy(fancy_regex::Regex),
    Standard(regex::Regex),
}

/// Output of one successful search: the whole match followed by one range per
/// declared capture group.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawMatch {
    ranges: Vec<CodeUnitRange>,
}

impl RawMatch {
    /// The range of the whole match.
    pub fn range(&self) -> CodeUnitRange {
        self.ranges[0]
    }

    /// Range of group `i`, where group 0 is the whole match. Groups that did
    /// not participate, or do not exist, are reported as not found.
    pub fn range_at(&self, i: usize) -> CodeUnitRange {
        self.ranges
            .get(i)
            .copied()
            .unwrap_or_else(CodeUnitRange::not_found)
    }

    /// Number of ranges, including the whole match.
    pub fn number_of_ranges(&self) -> usize {
        self.ranges.len()
    }

    pub(crate) fn capture_ranges(&self) -> &[CodeUnitRange] {
        &self.ranges[1..]
    }
}

pub struct Engine {
    regex: CompiledRegex,
    capture_count: usize,
}

impl Engine {
    pub fn compile(pattern: &str, options: Options) -> Result<Engine, Error> {
        let translated = options.translate(pattern);
        let regex = match fancy_regex::Regex::new(&translated) {
            Ok(r) => CompiledRegex::Fancy(r),
            Err(e) => {
                debug!("fancy-regex rejected /{pattern}/ ({e}), retrying with regex");
                regex::Regex::new(&translated)
                    .map(CompiledRegex::Standard)
                    .map_err(|e| Error::syntax(pattern, e.to_string()))?
            }
        };
        let captures_len = match &regex {
            CompiledRegex::Fancy(r) => r.captures_len(),
            CompiledRegex::Standard(r) => r.captures_len(),
        };
        debug!(
            "compiled /{pattern}/ with {options:?}: {} capture groups",
            captures_len - 1
        );
        Ok(Engine {
            regex,
            capture_count: captures_len - 1,
        })
    }

    /// Number of capture groups declared by the pattern, not counting the
    /// whole match.
    pub fn capture_count(&self) -> usize {
        self.capture_count
    }

    /// Finds the leftmost match that starts inside `range`.
    pub fn first_match(&self, subject: &Subject, range: CodeUnitRange) -> Option<RawMatch> {
        let Some(bytes) = translate(range, subject.units()) else {
            panic!("cannot search inside a not-found range");
        };
        trace!("searching {range} (bytes {bytes:?})");

        let groups = self.captures_at(&subject.as_str()[..bytes.end], bytes.start)?;
        let ranges = groups
            .into_iter()
            .map(|group| match group {
                Some(bytes) => {
                    let location = unit(subject, bytes.start);
                    CodeUnitRange::new(location, unit(subject, bytes.end) - location)
                }
                None => CodeUnitRange::not_found(),
            })
            .collect();
        Some(RawMatch { ranges })
    }

    /// Enumerates non-overlapping matches inside `range`, handing each one to
    /// `f` together with a stop flag. Once no further match exists (and the
    /// flag was never raised) `f` is called one last time with `None`.
    pub fn enumerate_matches<F>(&self, subject: &Subject, range: CodeUnitRange, mut f: F)
    where
        F: FnMut(Option<&RawMatch>, &mut bool),
    {
        let end = range.end();
        let mut search = range;
        let mut stop = false;
        while let Some(raw) = self.first_match(subject, search) {
            f(Some(&raw), &mut stop);
            if stop {
                return;
            }
            match advance_past(subject, raw.range()) {
                Some(next) if next <= end => search = CodeUnitRange::new(next, end - next),
                _ => break,
            }
        }
        f(None, &mut stop);
    }

    fn captures_at(&self, haystack: &str, start: usize) -> Option<Vec<Option<Range<usize>>>> {
        let count = self.capture_count + 1;
        match &self.regex {
            CompiledRegex::Fancy(r) => match r.captures_from_pos(haystack, start) {
                Ok(caps) => {
                    let caps = caps?;
                    Some((0..count).map(|i| caps.get(i).map(|m| m.start()..m.end())).collect())
                }
                Err(e) => {
                    warn!("search aborted, treating as no match: {e}");
                    None
                }
            },
            CompiledRegex::Standard(r) => {
                let caps = r.captures_at(haystack, start)?;
                Some((0..count).map(|i| caps.get(i).map(|m| m.start()..m.end())).collect())
            }
        }
    }
}

/// Where the next search starts after `matched`: its end, or one character
/// further when the match was empty. `None` when an empty match sits at the
/// very end of the subject.
pub(crate) fn advance_past(subject: &Subject, matched: CodeUnitRange) -> Option<usize> {
    let end = matched.end();
    if matched.is_empty() {
        subject.units().next_boundary(end)
    } else {
        Some(end)
    }
}

fn unit(subject: &Subject, byte: usize) -> usize {
    match subject.units().unit_offset(byte) {
        Some(unit) => unit,
        None => panic!("engine reported byte {byte}, which is not a character boundary"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(pattern: &str) -> Engine {
        Engine::compile(pattern, Options::empty()).unwrap()
    }

    #[test]
    fn reports_code_unit_ranges() {
        let engine = compile("(b)(x)?");
        let subject = Subject::new("\u{1D11E}ab");
        let raw = engine
            .first_match(&subject, subject.units().entire_range())
            .unwrap();
        assert_eq!(raw.number_of_ranges(), 3);
        assert_eq!(raw.range(), CodeUnitRange::new(3, 1));
        assert_eq!(raw.range_at(1), CodeUnitRange::new(3, 1));
        assert!(raw.range_at(2).is_not_found());
        assert!(raw.range_at(9).is_not_found());
    }

    #[test]
    fn search_is_bounded_to_range() {
        let engine = compile("foo");
        let subject = Subject::new("foo foo");
        let raw = engine
            .first_match(&subject, CodeUnitRange::new(1, 6))
            .unwrap();
        assert_eq!(raw.range(), CodeUnitRange::new(4, 3));
        assert!(
            engine
                .first_match(&subject, CodeUnitRange::new(1, 4))
                .is_none()
        );
    }

    #[test]
    fn search_sees_context_before_range() {
        let engine = compile("^foo");
        let subject = Subject::new("foofoo");
        assert!(
            engine
                .first_match(&subject, CodeUnitRange::new(3, 3))
                .is_none()
        );
    }

    #[test]
    fn enumerate_reports_completion() {
        let engine = compile("o");
        let subject = Subject::new("foo");
        let mut seen = Vec::new();
        let mut completed = false;
        engine.enumerate_matches(&subject, subject.units().entire_range(), |raw, _| {
            match raw {
                Some(raw) => seen.push(raw.range().location),
                None => completed = true,
            }
        });
        assert_eq!(seen, vec![1, 2]);
        assert!(completed);
    }

    #[test]
    fn enumerate_honours_stop() {
        let engine = compile("o");
        let subject = Subject::new("foo");
        let mut calls = 0;
        engine.enumerate_matches(&subject, subject.units().entire_range(), |raw, stop| {
            calls += 1;
            assert!(raw.is_some());
            *stop = true;
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn capture_count_excludes_whole_match() {
        let engine = compile(r"(\w+)@(\w+)\.com");
        assert_eq!(engine.capture_count(), 2);
    }

    #[test]
    fn backreferences_are_supported() {
        let engine = compile(r"(\w)\1");
        let subject = Subject::new("abccd");
        let raw = engine
            .first_match(&subject, subject.units().entire_range())
            .unwrap();
        assert_eq!(raw.range(), CodeUnitRange::new(2, 2));
    }

    #[test]
    fn invalid_pattern_is_a_syntax_error() {
        let err = Engine::compile("(unclosed", Options::empty()).err().unwrap();
        assert_eq!(err.kind(), crate::error::ErrorKind::Syntax);
        assert_eq!(err.pattern, "(unclosed");
    }
}
