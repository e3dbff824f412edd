//! Field-level summary of a line diff.

use jdiff_types::{ChangeKind, DiffLine, LineKind, SummaryItem};

use crate::json_line::parse_json_line;

/// Extract one [`SummaryItem`] per changed row that names a JSON field.
///
/// Each side of a row is trimmed and parsed as `"key": value`. The field is
/// the left key, falling back to the right key; rows where neither side has
/// a key (lone braces, brackets, commas) are skipped. Values fall back to
/// the raw trimmed text when a side has content but no parsable value.
pub fn summarize(lines: &[DiffLine]) -> Vec<SummaryItem> {
    lines.iter().filter_map(summarize_line).collect()
}

fn summarize_line(line: &DiffLine) -> Option<SummaryItem> {
    let kind = match line.kind() {
        LineKind::Equal => return None,
        LineKind::Added => ChangeKind::Added,
        LineKind::Removed => ChangeKind::Removed,
        LineKind::Modified => ChangeKind::Modified,
    };

    let left_text = line.left_text();
    let right_text = line.right_text();
    let left_text = left_text.trim();
    let right_text = right_text.trim();

    let (left_key, left_value) = parse_json_line(left_text);
    let (right_key, right_value) = parse_json_line(right_text);

    let field_name = left_key.or(right_key).filter(|k| !k.is_empty())?;

    Some(SummaryItem {
        line_id: line.id(),
        field_name,
        old_value: left_value.or_else(|| non_empty(left_text)),
        new_value: right_value.or_else(|| non_empty(right_text)),
        kind,
    })
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_diff::diff_lines;
    use jdiff_types::Segment;
    use proptest::prelude::*;

    #[test]
    fn modified_field() {
        let lines = diff_lines("{\n  \"age\": 36,\n}", "{\n  \"age\": 40,\n}");
        let items = summarize(&lines);
        assert_eq!(items.len(), 1);

        let item = &items[0];
        assert_eq!(item.field_name, "age");
        assert_eq!(item.old_value.as_deref(), Some("36"));
        assert_eq!(item.new_value.as_deref(), Some("40"));
        assert_eq!(item.kind, ChangeKind::Modified);
        assert_eq!(item.line_id, lines[1].id());
    }

    #[test]
    fn added_and_removed_fields() {
        let lines = diff_lines(
            "{\n  \"a\": 1,\n  \"keep\": true\n}",
            "{\n  \"keep\": true,\n  \"b\": \"two\"\n}",
        );
        let items = summarize(&lines);
        let removed = items.iter().find(|i| i.field_name == "a").unwrap();
        assert_eq!(removed.kind, ChangeKind::Removed);
        assert_eq!(removed.old_value.as_deref(), Some("1"));
        assert_eq!(removed.new_value, None);

        let added = items.iter().find(|i| i.field_name == "b").unwrap();
        assert_eq!(added.kind, ChangeKind::Added);
        assert_eq!(added.old_value, None);
        assert_eq!(added.new_value.as_deref(), Some("\"two\""));
    }

    #[test]
    fn structural_noise_is_skipped() {
        let lines = diff_lines("[\n  1\n]", "{\n}");
        assert!(lines.iter().any(|l| l.is_change()));
        assert!(summarize(&lines).is_empty());
    }

    #[test]
    fn falls_back_to_right_key_and_raw_text() {
        let line = DiffLine::modified(
            vec![Segment::removed("  ],")],
            vec![Segment::added("  \"tags\": [")],
            3,
            3,
        );
        let items = summarize(&[line]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].field_name, "tags");
        assert_eq!(items[0].old_value.as_deref(), Some("],"));
        assert_eq!(items[0].new_value.as_deref(), Some("["));
    }

    #[test]
    fn identical_documents_have_no_summary() {
        let doc = "{\n  \"a\": 1,\n  \"b\": [\n    2\n  ]\n}";
        assert!(summarize(&diff_lines(doc, doc)).is_empty());
    }

    #[test]
    fn duplicate_fields_keep_their_own_line_ids() {
        let left = "{\n  \"x\": 1,\n  \"y\": 0,\n  \"x\": 1\n}";
        let right = "{\n  \"y\": 0\n}";
        let lines = diff_lines(left, right);
        let items = summarize(&lines);
        let xs: Vec<_> = items.iter().filter(|i| i.field_name == "x").collect();
        assert_eq!(xs.len(), 2);
        assert_ne!(xs[0].line_id, xs[1].line_id);
        for item in xs {
            assert!(lines.iter().any(|l| l.id() == item.line_id));
        }
    }

    proptest! {
        #[test]
        fn at_most_one_item_per_changed_row(
            a in prop::collection::vec("  \"[a-c]\": [0-9],?|\\{|\\}", 0..6),
            b in prop::collection::vec("  \"[a-c]\": [0-9],?|\\{|\\}", 0..6),
        ) {
            let lines = diff_lines(&a.join("\n"), &b.join("\n"));
            let changed = lines.iter().filter(|l| l.is_change()).count();
            let items = summarize(&lines);
            prop_assert!(items.len() <= changed);
            prop_assert!(items.iter().all(|i| !i.field_name.is_empty()));
        }
    }
}
