//! Substitution of matches using replacement templates.
//!
//! In a template, `$0` stands for the whole match and `$1`, `$2`, ... for the
//! capture groups. Digits after `$` are taken greedily for as long as they name
//! a group of the pattern, so with three groups `$12` is group 1 followed by a
//! literal `2`. A group that did not participate expands to nothing. A
//! backslash makes the next character literal, e.g. `\$1` produces `$1`.

use crate::match_result::MatchResult;
use crate::pattern::Regex;

impl Regex {
    /// Expands `template` for the match `m`.
    pub fn replacement_for(&self, m: &MatchResult, template: &str) -> String {
        expand(template, m)
    }

    /// Returns a copy of `subject` with the first match replaced by
    /// `template`. The match is recorded like [`Regex::first_match`] does.
    ///
    /// ```
    /// use regexkit::Regex;
    ///
    /// let greeting = Regex::new(r"h(ello) (\w+)").unwrap();
    /// assert_eq!(greeting.replacing_first("hello world", "H$1, $2!"), "Hello, world!");
    /// ```
    pub fn replacing_first(&self, subject: &str, template: &str) -> String {
        let Some(m) = self.first_match(subject) else {
            return subject.to_string();
        };
        let replacement = expand(template, &m);
        let mut output = String::with_capacity(subject.len() + replacement.len());
        output.push_str(&subject[..m.start()]);
        output.push_str(&replacement);
        output.push_str(&subject[m.end()..]);
        output
    }

    /// Returns a copy of `subject` with every match replaced by `template`.
    pub fn replacing_all(&self, subject: &str, template: &str) -> String {
        let mut output = String::with_capacity(subject.len());
        let mut last_end = 0;
        for m in self.matches_in(subject) {
            output.push_str(&subject[last_end..m.start()]);
            output.push_str(&expand(template, &m));
            last_end = m.end();
        }
        output.push_str(&subject[last_end..]);
        output
    }

    /// Replaces the first match in `subject` in place.
    pub fn replace_first(&self, subject: &mut String, template: &str) {
        *subject = self.replacing_first(subject, template);
    }

    /// Replaces every match in `subject` in place.
    pub fn replace_all(&self, subject: &mut String, template: &str) {
        *subject = self.replacing_all(subject, template);
    }
}

fn expand(template: &str, m: &MatchResult) -> String {
    let group_count = m.raw().number_of_ranges() - 1;
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push(chars.next().unwrap_or('\\')),
            '$' => {
                let Some(first) = chars.peek().and_then(|c| c.to_digit(10)) else {
                    result.push('$');
                    continue;
                };
                chars.next();
                let mut group = first as usize;
                while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
                    let candidate = group * 10 + digit as usize;
                    if candidate > group_count {
                        break;
                    }
                    group = candidate;
                    chars.next();
                }
                if let Some(text) = group_text(m, group) {
                    result.push_str(text);
                }
            }
            _ => result.push(c),
        }
    }
    result
}

fn group_text(m: &MatchResult, group: usize) -> Option<&str> {
    if group == 0 {
        Some(m.as_str())
    } else {
        m.captures().get(group - 1)
    }
}
