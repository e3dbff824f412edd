use std::fmt;

/// Where in the source text a parse error was detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseLocation {
    /// 1-based line.
    pub line: usize,
    /// 1-based column, in characters.
    pub column: usize,
    /// 0-based character offset into the source text.
    pub offset: usize,
}

impl ParseLocation {
    /// Build a location from a 1-based line and column, computing the
    /// character offset. A column of 0 is treated as 1.
    pub fn from_line_column(text: &str, line: usize, column: usize) -> Self {
        let line = line.max(1);
        let column = column.max(1);
        let preceding: usize = text
            .split('\n')
            .take(line - 1)
            .map(|l| l.chars().count() + 1)
            .sum();
        Self {
            line,
            column,
            offset: preceding + column - 1,
        }
    }

    /// The position just past the last non-blank line, where a missing
    /// closing token belongs.
    pub fn end_of_content(text: &str) -> Self {
        let last = text
            .split('\n')
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
            .last();
        let (line, column) = match last {
            Some((idx, l)) => (idx + 1, l.chars().count() + 1),
            None => (1, 1),
        };
        Self {
            line,
            column,
            offset: text.chars().count(),
        }
    }
}

impl fmt::Display for ParseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, col {}", self.line, self.column)
    }
}

/// Convert a 0-based character offset into a line/column location.
///
/// Offsets past the end of the text stop at the end.
pub fn location_from_offset(text: &str, offset: usize) -> ParseLocation {
    let mut line = 1;
    let mut column = 1;
    let mut consumed = 0;
    for c in text.chars().take(offset) {
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
        consumed += 1;
    }
    ParseLocation {
        line,
        column,
        offset: consumed,
    }
}
