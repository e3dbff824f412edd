use serde::{Deserialize, Serialize};

/// Raised when two documents are shaped too differently for a line diff to
/// be meaningful.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StructureWarning {
    pub message: String,
    /// Jaccard similarity of the two documents' key paths, in `[0, 1]`.
    pub similarity: f64,
}

impl StructureWarning {
    pub fn new(message: impl Into<String>, similarity: f64) -> Self {
        Self {
            message: message.into(),
            similarity: similarity.clamp(0.0, 1.0),
        }
    }

    /// Similarity as a rounded integer percentage.
    pub fn percent(&self) -> u32 {
        (self.similarity * 100.0).round() as u32
    }
}
