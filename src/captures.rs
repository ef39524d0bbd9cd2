use std::ops::Range;

use crate::graphemes;
use crate::match_result::MatchResult;

/// Index-addressable view over the capture groups of one match.
///
/// There is one slot per group declared in the pattern, in pattern order, and
/// a slot is `None` exactly when its group did not participate in the match.
/// The whole match is not part of this view; see [`MatchResult::as_str`].
#[derive(Clone, Copy, Debug)]
pub struct Captures<'m> {
    result: &'m MatchResult,
}

impl<'m> Captures<'m> {
    pub(crate) fn new(result: &'m MatchResult) -> Self {
        Captures { result }
    }

    pub fn len(&self) -> usize {
        self.result.capture_ranges().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte range of capture `i`.
    pub fn range_at(&self, i: usize) -> Option<Range<usize>> {
        self.result.capture_ranges().get(i)?.clone()
    }

    /// Text of capture `i`.
    pub fn get(&self, i: usize) -> Option<&'m str> {
        let range = self.range_at(i)?;
        Some(&self.result.subject()[range])
    }

    /// Range of capture `i` counted in grapheme clusters.
    pub fn grapheme_range_at(&self, i: usize) -> Option<Range<usize>> {
        let range = self.range_at(i)?;
        Some(graphemes::grapheme_range(self.result.subject(), range))
    }

    pub fn iter(&self) -> Iter<'m> {
        Iter {
            captures: *self,
            next: 0,
        }
    }

    pub fn to_vec(&self) -> Vec<Option<&'m str>> {
        self.iter().collect()
    }
}

impl<'m> IntoIterator for Captures<'m> {
    type Item = Option<&'m str>;
    type IntoIter = Iter<'m>;

    fn into_iter(self) -> Iter<'m> {
        self.iter()
    }
}

/// Iterator over the slots of [`Captures`].
#[derive(Clone, Debug)]
pub struct Iter<'m> {
    captures: Captures<'m>,
    next: usize,
}

impl<'m> Iterator for Iter<'m> {
    type Item = Option<&'m str>;

    fn next(&mut self) -> Option<Option<&'m str>> {
        if self.next >= self.captures.len() {
            return None;
        }
        let slot = self.captures.get(self.next);
        self.next += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.captures.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use crate::Regex;

    #[test]
    fn count_matches_declared_groups() {
        let regex = Regex::new("foo (bar|baz) (123|456)?").unwrap();
        let m = regex.first_match("foo baz ").unwrap();
        let captures = m.captures();
        assert_eq!(captures.len(), 2);
        assert_eq!(captures.get(0), Some("baz"));
        assert_eq!(captures.get(1), None);
        assert_eq!(captures.get(2), None);
    }

    #[test]
    fn no_groups() {
        let regex = Regex::new("foo").unwrap();
        let m = regex.first_match("foo").unwrap();
        assert!(m.captures().is_empty());
        assert_eq!(m.captures().iter().count(), 0);
    }

    #[test]
    fn absent_iff_range_absent() {
        let regex = Regex::new("(a)|(b)|(c?)").unwrap();
        for subject in ["a", "b", "c", "x"] {
            let m = regex.first_match(subject).unwrap();
            let captures = m.captures();
            for i in 0..captures.len() {
                assert_eq!(captures.get(i).is_none(), captures.range_at(i).is_none());
            }
        }
    }

    #[test]
    fn empty_capture_is_not_absent() {
        let regex = Regex::new("a(x*)b").unwrap();
        let m = regex.first_match("ab").unwrap();
        assert_eq!(m.captures().get(0), Some(""));
        assert_eq!(m.captures().range_at(0), Some(1..1));
    }

    #[test]
    fn does_not_include_whole_match() {
        let regex = Regex::new("foo (bar|baz)").unwrap();
        let m = regex.first_match("foo bar").unwrap();
        assert_eq!(m.captures().to_vec(), vec![Some("bar")]);
    }

    #[test]
    fn grapheme_positions() {
        let s = "\u{61}\u{65}\u{301}\u{221E}\u{1D11E}";
        let regex = Regex::new("(\u{221E})(\u{1D11E})").unwrap();
        let m = regex.first_match(s).unwrap();
        assert_eq!(m.captures().grapheme_range_at(0), Some(2..3));
        assert_eq!(m.captures().grapheme_range_at(1), Some(3..4));
    }
}
