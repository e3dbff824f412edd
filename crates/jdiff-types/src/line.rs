use serde::{Deserialize, Serialize};

use crate::identity::LineId;
use crate::segment::{join_text, Segment, SegmentKind};

/// Classification of an aligned diff row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Identical on both sides.
    Equal,
    /// Only on the right side.
    Added,
    /// Only on the left side.
    Removed,
    /// A removed/added pair merged into one row with a character diff.
    Modified,
}

/// One row of a line diff.
///
/// The constructors enforce the row invariants:
/// - `Added` rows have no left line number, `Removed` rows no right one,
///   `Equal` and `Modified` rows have both.
/// - Concatenating a side's segments reproduces that side's line exactly
///   (or the empty string when the side has no line number).
///
/// Every row gets a fresh [`LineId`] when it is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiffLine {
    id: LineId,
    kind: LineKind,
    left_segments: Vec<Segment>,
    right_segments: Vec<Segment>,
    left_line_number: Option<usize>,
    right_line_number: Option<usize>,
}

impl DiffLine {
    /// A line present unchanged on both sides (1-based line numbers).
    pub fn equal(left: &str, right: &str, left_line: usize, right_line: usize) -> Self {
        Self {
            id: LineId::new(),
            kind: LineKind::Equal,
            left_segments: Segment::whole(left, SegmentKind::Unchanged),
            right_segments: Segment::whole(right, SegmentKind::Unchanged),
            left_line_number: Some(left_line),
            right_line_number: Some(right_line),
        }
    }

    /// A line only present on the right side.
    pub fn added(right: &str, right_line: usize) -> Self {
        Self {
            id: LineId::new(),
            kind: LineKind::Added,
            left_segments: Vec::new(),
            right_segments: Segment::whole(right, SegmentKind::Added),
            left_line_number: None,
            right_line_number: Some(right_line),
        }
    }

    /// A line only present on the left side.
    pub fn removed(left: &str, left_line: usize) -> Self {
        Self {
            id: LineId::new(),
            kind: LineKind::Removed,
            left_segments: Segment::whole(left, SegmentKind::Removed),
            right_segments: Vec::new(),
            left_line_number: Some(left_line),
            right_line_number: None,
        }
    }

    /// A paired change with pre-computed per-side segments.
    pub fn modified(
        left_segments: Vec<Segment>,
        right_segments: Vec<Segment>,
        left_line: usize,
        right_line: usize,
    ) -> Self {
        Self {
            id: LineId::new(),
            kind: LineKind::Modified,
            left_segments,
            right_segments,
            left_line_number: Some(left_line),
            right_line_number: Some(right_line),
        }
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn left_segments(&self) -> &[Segment] {
        &self.left_segments
    }

    pub fn right_segments(&self) -> &[Segment] {
        &self.right_segments
    }

    pub fn left_line_number(&self) -> Option<usize> {
        self.left_line_number
    }

    pub fn right_line_number(&self) -> Option<usize> {
        self.right_line_number
    }

    /// The reconstructed left line.
    pub fn left_text(&self) -> String {
        join_text(&self.left_segments)
    }

    /// The reconstructed right line.
    pub fn right_text(&self) -> String {
        join_text(&self.right_segments)
    }

    /// Returns `true` for every kind except `Equal`.
    pub fn is_change(&self) -> bool {
        self.kind != LineKind::Equal
    }
}
