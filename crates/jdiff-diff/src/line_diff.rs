//! Line-level diff: LCS alignment of whole lines plus key-based pairing.
//!
//! The LCS yields a minimal edit script. A second, greedy pass looks one
//! operation ahead: a removed line directly followed by an added line with
//! the same JSON key is merged into a single `Modified` row and refined with
//! the character diff. Pairs that are not adjacent in the script are left
//! as separate removed and added rows.

use tracing::debug;

use jdiff_types::{DiffLine, LineKind, Segment, SegmentKind};

use crate::char_diff::diff_chars_with_limit;
use crate::config::DiffConfig;
use crate::json_line::same_json_key;
use crate::lcs::{EditOp, LcsTable};

/// Diff two documents line by line with the default configuration.
pub fn diff_lines(left: &str, right: &str) -> Vec<DiffLine> {
    diff_lines_with(left, right, &DiffConfig::default())
}

/// Diff two documents line by line.
///
/// Never fails. Every returned row carries a freshly generated id.
pub fn diff_lines_with(left: &str, right: &str, config: &DiffConfig) -> Vec<DiffLine> {
    let (l, r) = split_documents(left, right);

    let table = LcsTable::build_with_limit(&l, &r, config.large_table_cells);
    let ops = table.edit_script(&l, &r);
    let lines = build_rows(&ops, &l, &r, config);

    debug!(
        left_lines = l.len(),
        right_lines = r.len(),
        common = table.lcs_len(),
        rows = lines.len(),
        modified = lines.iter().filter(|d| d.kind() == LineKind::Modified).count(),
        "line diff computed"
    );
    lines
}

/// Split text on `'\n'`, dropping the `'\r'` of a CRLF line ending. A
/// trailing newline produces a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Split both documents. The empty document is the single empty line, but
/// when only one side is empty that side contributes no lines at all, so an
/// insertion into an empty document is reported as pure additions.
fn split_documents<'a>(left: &'a str, right: &'a str) -> (Vec<&'a str>, Vec<&'a str>) {
    match (left.is_empty(), right.is_empty()) {
        (true, false) => (Vec::new(), split_lines(right)),
        (false, true) => (split_lines(left), Vec::new()),
        _ => (split_lines(left), split_lines(right)),
    }
}

fn build_rows(ops: &[EditOp], l: &[&str], r: &[&str], config: &DiffConfig) -> Vec<DiffLine> {
    let mut rows = Vec::with_capacity(ops.len());
    let mut i = 0;
    while i < ops.len() {
        match ops[i] {
            EditOp::Equal(li, ri) => {
                rows.push(DiffLine::equal(l[li], r[ri], li + 1, ri + 1));
                i += 1;
            }
            EditOp::Removed(li) => match ops.get(i + 1) {
                Some(&EditOp::Added(ri))
                    if config.pair_modified_lines && same_json_key(l[li], r[ri]) =>
                {
                    rows.push(modified_row(l[li], r[ri], li + 1, ri + 1, config));
                    i += 2;
                }
                _ => {
                    rows.push(DiffLine::removed(l[li], li + 1));
                    i += 1;
                }
            },
            EditOp::Added(ri) => {
                rows.push(DiffLine::added(r[ri], ri + 1));
                i += 1;
            }
        }
    }
    rows
}

fn modified_row(
    left: &str,
    right: &str,
    left_line: usize,
    right_line: usize,
    config: &DiffConfig,
) -> DiffLine {
    let (ls, rs) = if config.char_refinement {
        diff_chars_with_limit(Some(left), Some(right), config.large_table_cells)
    } else {
        (
            Segment::whole(left, SegmentKind::Removed),
            Segment::whole(right, SegmentKind::Added),
        )
    };
    DiffLine::modified(ls, rs, left_line, right_line)
}
