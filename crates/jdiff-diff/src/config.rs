use serde::{Deserialize, Serialize};

use crate::lcs::DEFAULT_LARGE_TABLE_CELLS;

/// Tuning knobs for the line diff and the structure analyzer.
///
/// The defaults reproduce the standard behaviour; the plain entry points
/// ([`diff_lines`](crate::diff_lines), [`analyze`](crate::analyze)) use them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Merge an adjacent removed/added pair sharing a JSON key into one
    /// `Modified` row.
    pub pair_modified_lines: bool,
    /// Run the character diff on `Modified` rows. When off, those rows carry
    /// the whole old and new lines as single removed/added segments.
    pub char_refinement: bool,
    /// Key-path similarity below which a structure warning is raised.
    pub structure_threshold: f64,
    /// How deep key paths are collected for the structure comparison.
    pub key_path_depth: usize,
    /// LCS table size (cells) above which a scaling warning is logged.
    pub large_table_cells: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            pair_modified_lines: true,
            char_refinement: true,
            structure_threshold: 0.20,
            key_path_depth: 2,
            large_table_cells: DEFAULT_LARGE_TABLE_CELLS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = DiffConfig::default();
        assert!(c.pair_modified_lines);
        assert!(c.char_refinement);
        assert_eq!(c.structure_threshold, 0.20);
        assert_eq!(c.key_path_depth, 2);
        assert_eq!(c.large_table_cells, DEFAULT_LARGE_TABLE_CELLS);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c: DiffConfig = serde_json::from_str(r#"{"key_path_depth": 3}"#).unwrap();
        assert_eq!(c.key_path_depth, 3);
        assert!(c.pair_modified_lines);
    }
}
