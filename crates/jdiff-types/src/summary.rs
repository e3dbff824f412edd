use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identity::LineId;

/// The kind of a field-level change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "added"),
            Self::Removed => write!(f, "removed"),
            Self::Modified => write!(f, "modified"),
        }
    }
}

/// A field-level change extracted from one non-equal diff row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryItem {
    /// Id of the [`DiffLine`](crate::DiffLine) this item came from.
    pub line_id: LineId,
    /// The JSON key of the changed field. Never empty.
    pub field_name: String,
    /// Value on the left side (set for `Removed` and `Modified`).
    pub old_value: Option<String>,
    /// Value on the right side (set for `Added` and `Modified`).
    pub new_value: Option<String>,
    pub kind: ChangeKind,
}
