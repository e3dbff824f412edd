use serde::{Deserialize, Serialize};

/// How a run of text relates to the other side of the diff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Present on both sides.
    Unchanged,
    /// Present only on the right side.
    Added,
    /// Present only on the left side.
    Removed,
}

/// A run of text with a single [`SegmentKind`].
///
/// Segments are emitted in document order and never reordered. Text is
/// never empty: an empty line is represented by an empty segment list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

impl Segment {
    /// Create a segment. `text` must not be empty; use [`Segment::whole`]
    /// when the text may be empty.
    pub fn new(text: impl Into<String>, kind: SegmentKind) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "segments never hold empty text");
        Self { text, kind }
    }

    pub fn unchanged(text: impl Into<String>) -> Self {
        Self::new(text, SegmentKind::Unchanged)
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self::new(text, SegmentKind::Added)
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self::new(text, SegmentKind::Removed)
    }

    /// The segment list for a whole line of one kind: a single segment, or
    /// nothing at all when the line is empty.
    pub fn whole(text: &str, kind: SegmentKind) -> Vec<Segment> {
        if text.is_empty() {
            Vec::new()
        } else {
            vec![Self::new(text, kind)]
        }
    }
}

/// Concatenate the text of a segment list.
pub fn join_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}
