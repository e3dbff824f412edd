//! Error types for the formatter crate.

use std::fmt;

use serde_json::error::Category;

use crate::location::ParseLocation;

/// What went wrong while parsing, in terms a person editing JSON by hand
/// would recognise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A key is not followed by `:`.
    MissingColon,
    /// A `,` directly before `}` or `]`.
    TrailingComma,
    /// A string literal that never closes.
    UnterminatedString,
    /// Something that is not a JSON value where a value is expected.
    InvalidValue,
    /// Broken object syntax: non-string key, missing separator.
    MalformedObject,
    /// Input ends before the document is closed.
    Incomplete,
    /// Anything else.
    Other,
}

impl ParseErrorKind {
    /// Classify a `serde_json` error from its category and message.
    pub fn classify(error: &serde_json::Error) -> Self {
        let message = error.to_string();
        if message.contains("expected `:`") {
            Self::MissingColon
        } else if message.contains("trailing comma") {
            Self::TrailingComma
        } else if message.contains("while parsing a string") {
            Self::UnterminatedString
        } else if message.contains("key must be a string") || message.contains("expected `,` or `}`")
        {
            Self::MalformedObject
        } else if error.classify() == Category::Eof {
            Self::Incomplete
        } else if message.contains("expected value")
            || message.contains("expected ident")
            || message.contains("invalid number")
            || message.contains("invalid escape")
            || message.contains("invalid unicode")
        {
            Self::InvalidValue
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::MissingColon => "missing ':' after a key",
            Self::TrailingComma => "extra comma at the end",
            Self::UnterminatedString => "unterminated string",
            Self::InvalidValue => "invalid value",
            Self::MalformedObject => "malformed object",
            Self::Incomplete => "incomplete JSON, closing token missing",
            Self::Other => "invalid JSON",
        };
        f.write_str(text)
    }
}

/// Errors that can occur while canonicalizing a document.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The input is not valid JSON.
    #[error("{kind}{}", at(.location))]
    Parse {
        kind: ParseErrorKind,
        location: Option<ParseLocation>,
        /// The parser's own message.
        detail: String,
    },

    /// The parsed document could not be written back out.
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl FormatError {
    pub fn location(&self) -> Option<ParseLocation> {
        match self {
            Self::Parse { location, .. } => *location,
            Self::Encoding(_) => None,
        }
    }
}

fn at(location: &Option<ParseLocation>) -> String {
    location.map(|l| format!(" ({l})")).unwrap_or_default()
}

/// Convenience alias for formatter results.
pub type FormatResult<T> = Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(raw: &str) -> ParseErrorKind {
        let err = serde_json::from_str::<serde_json::Value>(raw).unwrap_err();
        ParseErrorKind::classify(&err)
    }

    #[test]
    fn classifies_common_mistakes() {
        assert_eq!(kind_of(r#"{"a" 1}"#), ParseErrorKind::MissingColon);
        assert_eq!(kind_of(r#"{"a": 1,}"#), ParseErrorKind::TrailingComma);
        assert_eq!(kind_of(r#"[1, 2,]"#), ParseErrorKind::TrailingComma);
        assert_eq!(kind_of(r#"{"a": "open"#), ParseErrorKind::UnterminatedString);
        assert_eq!(kind_of(r#"{a: 1}"#), ParseErrorKind::MalformedObject);
        assert_eq!(kind_of(r#"{"a": 1"#), ParseErrorKind::Incomplete);
        assert_eq!(kind_of(r#"{"a": nope}"#), ParseErrorKind::InvalidValue);
    }

    #[test]
    fn display_appends_location() {
        let err = FormatError::Parse {
            kind: ParseErrorKind::MissingColon,
            location: Some(ParseLocation { line: 2, column: 7, offset: 8 }),
            detail: String::new(),
        };
        assert_eq!(err.to_string(), "missing ':' after a key (line 2, col 7)");
    }

    #[test]
    fn display_without_location() {
        let err = FormatError::Parse {
            kind: ParseErrorKind::Other,
            location: None,
            detail: String::new(),
        };
        assert_eq!(err.to_string(), "invalid JSON");
        assert!(err.location().is_none());
    }
}
