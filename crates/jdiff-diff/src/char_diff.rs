//! Character-level diff: sub-line highlighting for modified rows.
//!
//! Strings are compared as sequences of extended grapheme clusters, so a
//! multi-byte or combining character is always one atomic unit and segment
//! boundaries never split it.

use unicode_segmentation::UnicodeSegmentation;

use jdiff_types::{Segment, SegmentKind};

use crate::lcs::{LcsTable, DEFAULT_LARGE_TABLE_CELLS};

/// Compute a character diff between two optional strings.
///
/// Returns `(left_segments, right_segments)`:
/// - both absent: two empty lists;
/// - one absent: the present string as a single removed (left) or added
///   (right) segment, the other side empty;
/// - equal strings: one unchanged segment per side, without running the LCS.
///
/// Otherwise the per-character operations recovered from the LCS are
/// coalesced into runs. A change of operation kind closes the current run
/// on both sides at once, so boundaries stay aligned in operation order even
/// when the two sides end up with different segment counts.
pub fn diff_chars(left: Option<&str>, right: Option<&str>) -> (Vec<Segment>, Vec<Segment>) {
    diff_chars_with_limit(left, right, DEFAULT_LARGE_TABLE_CELLS)
}

pub(crate) fn diff_chars_with_limit(
    left: Option<&str>,
    right: Option<&str>,
    warn_cells: usize,
) -> (Vec<Segment>, Vec<Segment>) {
    let (left, right) = match (left, right) {
        (None, None) => return (Vec::new(), Vec::new()),
        (Some(l), None) => return (Segment::whole(l, SegmentKind::Removed), Vec::new()),
        (None, Some(r)) => return (Vec::new(), Segment::whole(r, SegmentKind::Added)),
        (Some(l), Some(r)) => (l, r),
    };

    if left == right {
        return (
            Segment::whole(left, SegmentKind::Unchanged),
            Segment::whole(right, SegmentKind::Unchanged),
        );
    }

    let l: Vec<&str> = left.graphemes(true).collect();
    let r: Vec<&str> = right.graphemes(true).collect();

    let mut runs = Coalescer::default();
    for op in char_ops(&l, &r, warn_cells) {
        runs.push(op);
    }
    runs.finish()
}

/// A single grapheme with its diff classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CharOp<'a> {
    Unchanged(&'a str),
    Removed(&'a str),
    Added(&'a str),
}

impl CharOp<'_> {
    fn kind(&self) -> SegmentKind {
        match self {
            Self::Unchanged(_) => SegmentKind::Unchanged,
            Self::Removed(_) => SegmentKind::Removed,
            Self::Added(_) => SegmentKind::Added,
        }
    }
}

/// Walk the common subsequence: graphemes of `l` before the next common one
/// are removed, graphemes of `r` before it are added, the common one is
/// unchanged. Whatever remains after the last common grapheme is drained as
/// removed (left) then added (right).
fn char_ops<'a>(l: &[&'a str], r: &[&'a str], warn_cells: usize) -> Vec<CharOp<'a>> {
    let table = LcsTable::build_with_limit(l, r, warn_cells);
    let common = table.common_subsequence(l, r);

    let mut ops = Vec::with_capacity(l.len() + r.len());
    let (mut i, mut j) = (0, 0);
    for &c in common {
        while l[i] != c {
            ops.push(CharOp::Removed(l[i]));
            i += 1;
        }
        while r[j] != c {
            ops.push(CharOp::Added(r[j]));
            j += 1;
        }
        ops.push(CharOp::Unchanged(l[i]));
        i += 1;
        j += 1;
    }
    ops.extend(l[i..].iter().map(|&g| CharOp::Removed(g)));
    ops.extend(r[j..].iter().map(|&g| CharOp::Added(g)));
    ops
}

/// Merges consecutive operations of the same kind into segments.
#[derive(Default)]
struct Coalescer {
    left: Vec<Segment>,
    right: Vec<Segment>,
    left_buf: String,
    right_buf: String,
    kind: Option<SegmentKind>,
}

impl Coalescer {
    fn push(&mut self, op: CharOp<'_>) {
        if self.kind.is_some_and(|k| k != op.kind()) {
            self.flush();
        }
        match op {
            CharOp::Unchanged(g) => {
                self.left_buf.push_str(g);
                self.right_buf.push_str(g);
            }
            CharOp::Removed(g) => self.left_buf.push_str(g),
            CharOp::Added(g) => self.right_buf.push_str(g),
        }
        self.kind = Some(op.kind());
    }

    fn flush(&mut self) {
        let Some(kind) = self.kind else { return };
        if !self.left_buf.is_empty() {
            self.left
                .push(Segment::new(std::mem::take(&mut self.left_buf), kind));
        }
        if !self.right_buf.is_empty() {
            self.right
                .push(Segment::new(std::mem::take(&mut self.right_buf), kind));
        }
    }

    fn finish(mut self) -> (Vec<Segment>, Vec<Segment>) {
        self.flush();
        (self.left, self.right)
    }
}
