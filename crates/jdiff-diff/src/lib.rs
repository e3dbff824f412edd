//! Diff engine for jdiff.
//!
//! Compares two textual documents (in practice pretty-printed JSON) and
//! produces a line-aligned, character-refined, field-summarized difference.
//! Every entry point is a pure, synchronous function: no shared state, no
//! failure modes. The only limit is the O(n·m) cost of the LCS tables.
//!
//! # Entry Points
//!
//! - [`diff_lines`] -- LCS line alignment plus key-based pairing of modified rows
//! - [`diff_chars`] -- grapheme-level refinement of one pair of lines
//! - [`summarize`] -- field-level change records for the changed rows
//! - [`analyze_structure`] / [`analyze`] -- is the comparison meaningful at all?

pub mod char_diff;
pub mod config;
pub mod json_line;
pub mod lcs;
pub mod line_diff;
pub mod structure;
pub mod summary;

pub use char_diff::diff_chars;
pub use config::DiffConfig;
pub use json_line::{extract_json_key, parse_json_line};
pub use lcs::{EditOp, LcsTable};
pub use line_diff::{diff_lines, diff_lines_with, split_lines};
pub use structure::{
    analyze, analyze_structure, analyze_structure_with, analyze_with, key_paths, RootKind,
};
pub use summary::summarize;
