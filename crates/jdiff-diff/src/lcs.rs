//! Longest-common-subsequence table shared by the line and character engines.
//!
//! The table is the textbook O(n·m) dynamic program:
//! `dp[i][j] = dp[i-1][j-1] + 1` when `a[i-1] == b[j-1]`, otherwise
//! `max(dp[i-1][j], dp[i][j-1])`. Time and memory are both proportional to
//! the product of the input lengths; above [`DEFAULT_LARGE_TABLE_CELLS`]
//! a warning is logged but the computation still runs to completion.

use tracing::warn;

/// Table size (in cells) above which a scaling warning is emitted.
pub const DEFAULT_LARGE_TABLE_CELLS: usize = 25_000_000;

/// One step of an edit script, indexing into the two input sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOp {
    /// `a[i] == b[j]`.
    Equal(usize, usize),
    /// `a[i]` is not in `b`.
    Removed(usize),
    /// `b[j]` is not in `a`.
    Added(usize),
}

/// A filled LCS length table for two sequences.
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    /// Fill the table for `a` and `b`.
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        Self::build_with_limit(a, b, DEFAULT_LARGE_TABLE_CELLS)
    }

    /// Fill the table, warning when it exceeds `warn_cells` cells.
    pub fn build_with_limit<T: PartialEq>(a: &[T], b: &[T], warn_cells: usize) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let size = rows.saturating_mul(cols);
        if size > warn_cells {
            warn!(
                left = a.len(),
                right = b.len(),
                cells = size,
                "large LCS table, diff will be slow"
            );
        }

        let mut cells = vec![0usize; size];
        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// `dp[i][j]`: LCS length of `a[..i]` and `b[..j]`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    /// Length of the longest common subsequence of the full inputs.
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Number of cells in the table.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Recover the common subsequence itself, in order.
    ///
    /// Backtracks from `(n, m)`, stepping up when `dp[i-1][j] > dp[i][j-1]`
    /// and left otherwise.
    pub fn common_subsequence<'a, T: PartialEq>(&self, a: &'a [T], b: &[T]) -> Vec<&'a T> {
        let mut out = Vec::with_capacity(self.lcs_len());
        let (mut i, mut j) = (a.len(), b.len());
        while i > 0 && j > 0 {
            if a[i - 1] == b[j - 1] {
                out.push(&a[i - 1]);
                i -= 1;
                j -= 1;
            } else if self.get(i - 1, j) > self.get(i, j - 1) {
                i -= 1;
            } else {
                j -= 1;
            }
        }
        out.reverse();
        out
    }

    /// Recover a minimal edit script in forward document order.
    ///
    /// When both an insertion and a deletion are valid moves
    /// (`dp[i][j-1] >= dp[i-1][j]`), the backtrack takes the insertion
    /// first, so a replaced element shows up as `Removed` then `Added`
    /// once the script is reversed into forward order.
    pub fn edit_script<T: PartialEq>(&self, a: &[T], b: &[T]) -> Vec<EditOp> {
        let mut ops = Vec::with_capacity(a.len().max(b.len()));
        let (mut i, mut j) = (a.len(), b.len());
        while i > 0 || j > 0 {
            if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
                ops.push(EditOp::Equal(i - 1, j - 1));
                i -= 1;
                j -= 1;
            } else if j > 0 && (i == 0 || self.get(i, j - 1) >= self.get(i - 1, j)) {
                ops.push(EditOp::Added(j - 1));
                j -= 1;
            } else {
                ops.push(EditOp::Removed(i - 1));
                i -= 1;
            }
        }
        ops.reverse();
        ops
    }
}
