use bitflags::bitflags;

bitflags! {
    /// Alternate matching behaviours. Every flag is independent and they can
    /// be freely combined.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Options: u8 {
        /// Ignore the case of letters when matching.
        const IGNORE_CASE = 1 << 0;
        /// Treat every character of the pattern as a literal.
        const IGNORE_METACHARACTERS = 1 << 1;
        /// `^` and `$` match at the start and end of each line instead of
        /// only at the start and end of the whole string.
        const ANCHORS_MATCH_LINES = 1 << 2;
        /// `.` also matches line separators.
        const DOT_MATCHES_LINE_SEPARATORS = 1 << 3;
        /// Whitespace in the pattern is ignored and `#` starts a comment
        /// running to the end of the line.
        const ALLOW_COMMENTS_AND_WHITESPACE = 1 << 4;
    }
}

impl Options {
    /// Rewrites `pattern` into the form the engine compiles: inline flag
    /// groups for the matching modes, followed by the pattern itself (escaped
    /// when metacharacters are ignored).
    ///
    /// CRLF mode is always on, so `\r`, `\n` and `\r\n` all end a line for
    /// `^`, `$` and `.`. U+0085, U+2028 and U+2029 are not line separators
    /// for the engine.
    pub(crate) fn translate(self, pattern: &str) -> String {
        let mut result = String::from("(?R)");
        if self.contains(Options::IGNORE_CASE) {
            result.push_str("(?i)");
        }
        if self.contains(Options::DOT_MATCHES_LINE_SEPARATORS) {
            result.push_str("(?s)");
        }
        if self.contains(Options::ANCHORS_MATCH_LINES) {
            result.push_str("(?m)");
        }
        if self.contains(Options::IGNORE_METACHARACTERS) {
            result.push_str(&regex::escape(pattern));
            return result;
        }
        if self.contains(Options::ALLOW_COMMENTS_AND_WHITESPACE) {
            result.push_str("(?x)");
        }
        result.push_str(pattern);
        result
    }
}
