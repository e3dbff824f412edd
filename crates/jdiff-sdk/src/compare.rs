use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use jdiff_diff::{analyze_structure_with, diff_lines_with, summarize, DiffConfig};
use jdiff_format::canonicalize;
use jdiff_types::{DiffLine, LineId, LineKind, StructureWarning, SummaryItem};

use crate::error::{SdkError, SdkResult};

/// Which of the two compared documents something refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Options for a comparison run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Canonicalize both documents before diffing. When off, the raw text is
    /// diffed as-is and need not be JSON at all.
    pub canonicalize: bool,
    /// Engine configuration.
    pub diff: DiffConfig,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            canonicalize: true,
            diff: DiffConfig::default(),
        }
    }
}

/// Row counts of a line diff, by kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub equal: usize,
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffStats {
    pub fn from_lines(lines: &[DiffLine]) -> Self {
        lines.iter().fold(Self::default(), |mut stats, line| {
            match line.kind() {
                LineKind::Equal => stats.equal += 1,
                LineKind::Added => stats.added += 1,
                LineKind::Removed => stats.removed += 1,
                LineKind::Modified => stats.modified += 1,
            }
            stats
        })
    }

    /// Number of non-equal rows.
    pub fn change_count(&self) -> usize {
        self.added + self.removed + self.modified
    }

    /// Returns `true` if the documents are identical.
    pub fn is_identical(&self) -> bool {
        self.change_count() == 0
    }
}

/// The full result of comparing two documents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub lines: Vec<DiffLine>,
    pub summary: Vec<SummaryItem>,
    pub warning: Option<StructureWarning>,
    pub stats: DiffStats,
}

impl Comparison {
    /// Returns `true` if the documents are identical.
    pub fn is_identical(&self) -> bool {
        self.stats.is_identical()
    }

    /// Look up a row by id, e.g. to jump from a summary item to its line.
    pub fn line(&self, id: LineId) -> Option<&DiffLine> {
        self.lines.iter().find(|l| l.id() == id)
    }

    /// Index of a row by id.
    pub fn position(&self, id: LineId) -> Option<usize> {
        self.lines.iter().position(|l| l.id() == id)
    }
}

/// Compare two raw documents with the default options.
pub fn compare(left: &str, right: &str) -> SdkResult<Comparison> {
    compare_with(left, right, &CompareOptions::default())
}

/// Compare two raw documents.
///
/// With canonicalization on (the default), a document that fails to parse
/// is reported as [`SdkError::Format`] naming the side. The structure check
/// runs on the same text that is diffed and never fails: non-JSON input
/// simply produces no warning.
pub fn compare_with(left: &str, right: &str, options: &CompareOptions) -> SdkResult<Comparison> {
    let (left, right) = if options.canonicalize {
        (
            canonicalize(left).map_err(|source| SdkError::Format {
                side: Side::Left,
                source,
            })?,
            canonicalize(right).map_err(|source| SdkError::Format {
                side: Side::Right,
                source,
            })?,
        )
    } else {
        (left.to_string(), right.to_string())
    };

    let lines = diff_lines_with(&left, &right, &options.diff);
    let summary = summarize(&lines);
    let warning = analyze_structure_with(&left, &right, &options.diff);
    let stats = DiffStats::from_lines(&lines);

    debug!(
        changes = stats.change_count(),
        summary_items = summary.len(),
        warned = warning.is_some(),
        "comparison complete"
    );

    Ok(Comparison {
        lines,
        summary,
        warning,
        stats,
    })
}
