//! Structure similarity: is a line diff of these two documents meaningful?
//!
//! Compares the root kinds and the Jaccard similarity of the key paths found
//! near the root of each document. Arrays contribute only their first
//! element, which bounds the cost on long arrays.

use std::collections::BTreeSet;
use std::fmt;

use serde_json::Value;
use tracing::debug;

use jdiff_types::StructureWarning;

use crate::config::DiffConfig;

/// The kind of a document's root value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootKind {
    Object,
    Array,
    Primitive,
}

impl RootKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            _ => Self::Primitive,
        }
    }
}

impl fmt::Display for RootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object => write!(f, "an object {{}}"),
            Self::Array => write!(f, "an array []"),
            Self::Primitive => write!(f, "a primitive value"),
        }
    }
}

/// Parse both texts as JSON and analyze them with the default configuration.
///
/// Returns `None` when either side fails to parse; parse errors are reported
/// by the formatter, not here.
pub fn analyze_structure(left: &str, right: &str) -> Option<StructureWarning> {
    analyze_structure_with(left, right, &DiffConfig::default())
}

pub fn analyze_structure_with(
    left: &str,
    right: &str,
    config: &DiffConfig,
) -> Option<StructureWarning> {
    let left: Value = serde_json::from_str(left).ok()?;
    let right: Value = serde_json::from_str(right).ok()?;
    analyze_with(&left, &right, config)
}

/// Analyze two parsed documents with the default configuration.
pub fn analyze(left: &Value, right: &Value) -> Option<StructureWarning> {
    analyze_with(left, right, &DiffConfig::default())
}

/// Returns a warning when the documents' shapes differ enough that a line
/// diff would mostly show unrelated removals and additions.
pub fn analyze_with(left: &Value, right: &Value, config: &DiffConfig) -> Option<StructureWarning> {
    let left_kind = RootKind::of(left);
    let right_kind = RootKind::of(right);
    if left_kind != right_kind {
        return Some(StructureWarning::new(
            format!(
                "Incompatible root structures: the original document is {left_kind} and \
                 the compared one is {right_kind}. The diff will show nearly everything \
                 as removed or added instead of the real differences."
            ),
            0.0,
        ));
    }

    let left_keys = key_paths(left, config.key_path_depth);
    let right_keys = key_paths(right, config.key_path_depth);
    if left_keys.is_empty() && right_keys.is_empty() {
        return None;
    }

    let similarity = jaccard(&left_keys, &right_keys);
    debug!(
        left_paths = left_keys.len(),
        right_paths = right_keys.len(),
        similarity,
        "structure similarity computed"
    );

    if similarity == 0.0 {
        return Some(StructureWarning::new(
            "No keys are shared between the two documents. They appear to follow \
             completely different schemas, so the diff may not be useful.",
            0.0,
        ));
    }

    if similarity < config.structure_threshold {
        let mut warning = StructureWarning::new(String::new(), similarity);
        warning.message = format!(
            "Only {}% of the keys are shared between the two documents. Their \
             structures are very different, so most lines will show as added or \
             removed instead of the real differences.",
            warning.percent()
        );
        return Some(warning);
    }

    None
}

/// Collect dot-joined key paths reachable within `depth` levels of `value`.
///
/// Object keys count as one level each; an array is represented by its
/// first element, which is inspected one level down under the same prefix.
pub fn key_paths(value: &Value, depth: usize) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    collect_paths(value, depth, "", &mut out);
    out
}

fn collect_paths(value: &Value, depth: usize, prefix: &str, out: &mut BTreeSet<String>) {
    if depth == 0 {
        return;
    }
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect_paths(child, depth - 1, &path, out);
                out.insert(path);
            }
        }
        Value::Array(items) => {
            if let Some(first) = items.first() {
                collect_paths(first, depth - 1, prefix, out);
            }
        }
        _ => {}
    }
}

/// `|a ∩ b| / |a ∪ b|`, or `1.0` when both sets are empty.
fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 1.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}
