use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The pattern is not a valid regular expression.
    Syntax,
    /// A serialized pattern could not be turned back into a `Regex`.
    Serialization,
}

/// An error raised while building a `Regex`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub pattern: String,
    pub message: String,
}

impl Error {
    pub(crate) fn syntax(pattern: &str, message: impl Into<String>) -> Self {
        Error {
            kind: ErrorKind::Syntax,
            pattern: pattern.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn serialization(pattern: &str, message: impl Into<String>) -> Self {
        Error {
            kind: ErrorKind::Serialization,
            pattern: pattern.to_string(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Syntax => write!(
                f,
                "invalid regular expression /{}/: {}",
                self.pattern, self.message
            ),
            ErrorKind::Serialization => write!(
                f,
                "cannot deserialize regular expression /{}/: {}",
                self.pattern, self.message
            ),
        }
    }
}

impl std::error::Error for Error {}
