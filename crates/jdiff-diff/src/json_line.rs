//! Heuristic recognition of pretty-printed `"key": value` lines.
//!
//! These patterns only look at the rendered text of a single line; they are
//! not a JSON parser and are only used to pair and summarize changed lines.

use std::sync::OnceLock;

use regex::Regex;

fn key_pattern() -> &'static Regex {
    static KEY_RE: OnceLock<Regex> = OnceLock::new();
    KEY_RE.get_or_init(|| Regex::new(r#"^"([^"]+)"\s*:"#).expect("valid key pattern"))
}

fn key_value_pattern() -> &'static Regex {
    static KEY_VALUE_RE: OnceLock<Regex> = OnceLock::new();
    KEY_VALUE_RE.get_or_init(|| {
        Regex::new(r#"^"([^"]+)"\s*:\s*(.+?)[\s,]*$"#).expect("valid key/value pattern")
    })
}

/// Extract the key of a line shaped like `  "age" : 36,`.
///
/// Surrounding whitespace is ignored; the key must be a non-empty quoted
/// string followed by optional whitespace and a colon.
pub fn extract_json_key(line: &str) -> Option<&str> {
    let caps = key_pattern().captures(line.trim())?;
    caps.get(1).map(|m| m.as_str())
}

/// Returns `true` if both lines carry a JSON key and the keys are equal.
pub fn same_json_key(left: &str, right: &str) -> bool {
    match (extract_json_key(left), extract_json_key(right)) {
        (Some(l), Some(r)) => l == r,
        _ => false,
    }
}

/// Split a line shaped like `"key": value,` into key and value.
///
/// The value runs up to (not including) any trailing commas and whitespace.
/// Lines that do not match yield `(None, None)`.
pub fn parse_json_line(line: &str) -> (Option<String>, Option<String>) {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return (None, None);
    }
    match key_value_pattern().captures(trimmed) {
        Some(caps) => (
            caps.get(1).map(|m| m.as_str().to_string()),
            caps.get(2).map(|m| m.as_str().to_string()),
        ),
        None => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_of_indented_line() {
        assert_eq!(extract_json_key(r#"    "age": 36,"#), Some("age"));
        assert_eq!(extract_json_key(r#""spaced" : true"#), Some("spaced"));
    }

    #[test]
    fn no_key_on_structural_lines() {
        for line in ["{", "}", "  ],", "[", ",", "", r#"  "just a string","#] {
            assert_eq!(extract_json_key(line), None, "line {line:?}");
        }
    }

    #[test]
    fn empty_key_is_not_a_key() {
        assert_eq!(extract_json_key(r#""": 1"#), None);
    }

    #[test]
    fn same_key_requires_both_sides() {
        assert!(same_json_key(r#"  "a": 1,"#, r#"  "a": 2"#));
        assert!(!same_json_key(r#"  "a": 1,"#, r#"  "b": 1,"#));
        assert!(!same_json_key("b", "x"));
    }

    #[test]
    fn parse_scalar_value() {
        assert_eq!(
            parse_json_line(r#"  "age": 36,"#),
            (Some("age".into()), Some("36".into()))
        );
    }

    #[test]
    fn parse_string_value_keeps_quotes() {
        assert_eq!(
            parse_json_line(r#""name": "Ada Lovelace""#),
            (Some("name".into()), Some(r#""Ada Lovelace""#.into()))
        );
    }

    #[test]
    fn parse_opening_brace_value() {
        assert_eq!(
            parse_json_line(r#"  "address": {"#),
            (Some("address".into()), Some("{".into()))
        );
    }

    #[test]
    fn parse_non_matching_line() {
        assert_eq!(parse_json_line("}"), (None, None));
        assert_eq!(parse_json_line("   "), (None, None));
        assert_eq!(parse_json_line(r#""dangling":"#), (None, None));
    }
}
