//! Line-oriented searching.

use crate::match_result::MatchResult;
use crate::pattern::Regex;

fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\x0B' | '\x0C' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Iterator over the lines of a string, created by [`lines`].
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    rest: &'a str,
}

/// Splits `text` into lines. `\r\n` counts as a single separator, separators
/// are not part of the yielded lines, and a trailing separator does not
/// produce an extra empty line.
pub fn lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let Some((at, c)) = self.rest.char_indices().find(|&(_, c)| is_newline(c)) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };
        let line = &self.rest[..at];
        let mut after = at + c.len_utf8();
        if c == '\r' && self.rest[after..].starts_with('\n') {
            after += 1;
        }
        self.rest = &self.rest[after..];
        Some(line)
    }
}

/// Lazily yields each line of `text` that `regex` matches, together with the
/// first match in that line.
///
/// ```
/// use regexkit::{Regex, grep};
///
/// let regex = Regex::new("^ba").unwrap();
/// let found: Vec<&str> = grep("foo\nbar\nbaz\nquux", &regex).map(|(line, _)| line).collect();
/// assert_eq!(found, ["bar", "baz"]);
/// ```
pub fn grep<'a>(
    text: &'a str,
    regex: &'a Regex,
) -> impl Iterator<Item = (&'a str, MatchResult)> + 'a {
    grep_lines(lines(text), regex)
}

/// Like [`grep`], for lines that have already been split.
pub fn grep_lines<'a, I, S>(
    lines: I,
    regex: &'a Regex,
) -> impl Iterator<Item = (S, MatchResult)> + 'a
where
    I: IntoIterator<Item = S> + 'a,
    I::IntoIter: 'a,
    S: AsRef<str> + 'a,
{
    lines.into_iter().filter_map(move |line| {
        let m = regex.find(line.as_ref())?;
        Some((line, m))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matching_lines(text: &str, pattern: &str) -> Vec<String> {
        let regex = Regex::new(pattern).unwrap();
        grep(text, &regex).map(|(line, _)| line.to_string()).collect()
    }

    #[test]
    fn splits_lines() {
        let all: Vec<&str> = lines("a\nb\r\nc\rd\u{2028}e").collect();
        assert_eq!(all, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(lines("").count(), 0);
        assert_eq!(lines("\n").collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn vertical_tab_and_form_feed_end_lines() {
        let all: Vec<&str> = lines("a\x0Bb\x0Cc\u{0085}d").collect();
        assert_eq!(all, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn enumerates_matching_lines() {
        assert_eq!(matching_lines("foo\nbar\nbaz\nquux", "^ba"), vec!["bar", "baz"]);
    }

    #[test]
    fn matches_empty_lines() {
        assert_eq!(matching_lines("foo\n\nbar\n", "^$"), vec![""]);
    }

    #[test]
    fn last_line_without_newline() {
        assert_eq!(matching_lines("foo\nbar", "bar"), vec!["bar"]);
    }

    #[test]
    fn crlf_is_one_newline() {
        assert_eq!(matching_lines("foo\r\nbar\r\n", ".*"), vec!["foo", "bar"]);
    }

    #[test]
    fn passes_match_for_captures() {
        let regex = Regex::new(r"^(\w+): (\d+)$").unwrap();
        let numbers: Vec<u32> = grep("foo: 1\nbar: 2\nbaz: 3", &regex)
            .filter_map(|(_, m)| m.captures().get(1)?.parse().ok())
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn owned_lines() {
        let regex = Regex::new("o").unwrap();
        let input = vec![String::from("one"), String::from("two"), String::from("three")];
        let found: Vec<String> = grep_lines(input, &regex).map(|(line, _)| line).collect();
        assert_eq!(found, vec!["one", "two"]);
    }

    #[test]
    fn does_not_touch_last_match() {
        let regex = Regex::new("o").unwrap();
        assert!(!regex.is_match("x"));
        assert_eq!(grep("foo\nbar", &regex).count(), 1);
        assert_eq!(crate::last_match(), None);
    }
}
