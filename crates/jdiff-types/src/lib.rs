//! Foundation types for jdiff.
//!
//! Every record here is an immutable value built once per comparison run.
//! Nothing is mutated after construction and nothing is shared across runs.
//!
//! # Key Types
//!
//! - [`Segment`] -- the smallest unit of rendered diff text
//! - [`DiffLine`] -- one aligned row of a line diff, with per-side segments
//! - [`LineId`] -- UUID v7 identity token assigned to every [`DiffLine`]
//! - [`SummaryItem`] -- field-level change record derived from a [`DiffLine`]
//! - [`StructureWarning`] -- raised when two documents are too dissimilar to diff usefully

pub mod error;
pub mod identity;
pub mod line;
pub mod segment;
pub mod structure;
pub mod summary;

pub use error::TypeError;
pub use identity::LineId;
pub use line::{DiffLine, LineKind};
pub use segment::{join_text, Segment, SegmentKind};
pub use structure::StructureWarning;
pub use summary::{ChangeKind, SummaryItem};
