//! High-level API for jdiff.
//!
//! Runs the full comparison pipeline (canonicalize both documents, diff,
//! summarize, structure check) and owns the user-facing view settings and
//! their persistence. This is the main entry point for front ends.

pub mod compare;
pub mod error;
pub mod file;
pub mod memory;
pub mod settings;
pub mod traits;

pub use compare::{compare, compare_with, CompareOptions, Comparison, DiffStats, Side};
pub use error::{SdkError, SdkResult};
pub use file::FileSettingsStore;
pub use memory::InMemorySettingsStore;
pub use settings::ViewSettings;
pub use traits::SettingsStore;

// Re-export key types
pub use jdiff_diff::DiffConfig;
pub use jdiff_format::{FormatError, ParseLocation};
pub use jdiff_types::{
    ChangeKind, DiffLine, LineId, LineKind, Segment, SegmentKind, StructureWarning, SummaryItem,
};
