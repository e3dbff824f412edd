use serde_json::error::Category;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{FormatError, FormatResult, ParseErrorKind};
use crate::location::ParseLocation;

/// Returns `true` if `raw` parses as JSON.
pub fn validate(raw: &str) -> bool {
    serde_json::from_str::<Value>(raw).is_ok()
}

/// Parse `raw` and re-emit it pretty-printed with sorted object keys.
pub fn canonicalize(raw: &str) -> FormatResult<String> {
    let value: Value = serde_json::from_str(raw).map_err(|e| parse_error(raw, &e))?;
    let text = serde_json::to_string_pretty(&sort_keys(value))
        .map_err(|e| FormatError::Encoding(e.to_string()))?;
    debug!(input_bytes = raw.len(), output_bytes = text.len(), "document canonicalized");
    Ok(text)
}

/// Rebuild every object with its entries in key order, whatever map
/// implementation `serde_json` was compiled with.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k, sort_keys(v)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

fn parse_error(raw: &str, error: &serde_json::Error) -> FormatError {
    let location = if error.classify() == Category::Eof {
        ParseLocation::end_of_content(raw)
    } else {
        ParseLocation::from_line_column(raw, error.line(), error.column())
    };
    let full = error.to_string();
    let suffix = format!(" at line {} column {}", error.line(), error.column());
    let detail = full.strip_suffix(&suffix).unwrap_or(&full).to_string();

    FormatError::Parse {
        kind: ParseErrorKind::classify(error),
        location: Some(location),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_keys_and_indents() {
        let out = canonicalize(r#"{"b":1,"a":{"d":[1,2],"c":null}}"#).unwrap();
        let expected = "{\n  \"a\": {\n    \"c\": null,\n    \"d\": [\n      1,\n      2\n    ]\n  },\n  \"b\": 1\n}";
        assert_eq!(out, expected);
    }

    #[test]
    fn canonical_text_is_a_fixed_point() {
        let once = canonicalize(r#"[{"z": true, "y": "é"}, 3.5]"#).unwrap();
        let twice = canonicalize(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn whitespace_and_order_differences_vanish() {
        let a = canonicalize("{ \"x\" : 1 , \"y\" : 2 }").unwrap();
        let b = canonicalize("{\"y\":2,\"x\":1}").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn primitives_are_valid_documents() {
        assert_eq!(canonicalize("42").unwrap(), "42");
        assert_eq!(canonicalize(" \"s\" ").unwrap(), "\"s\"");
    }

    #[test]
    fn missing_colon_is_located() {
        let err = canonicalize("{\n  \"a\" 1\n}").unwrap_err();
        match err {
            FormatError::Parse { kind, location, detail } => {
                assert_eq!(kind, ParseErrorKind::MissingColon);
                let loc = location.unwrap();
                assert_eq!(loc.line, 2);
                assert!(!detail.contains(" at line "));
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn truncated_document_points_past_last_line() {
        let raw = "{\n  \"a\": [1, 2]\n\n";
        let err = canonicalize(raw).unwrap_err();
        let loc = err.location().unwrap();
        assert_eq!((loc.line, loc.column), (2, 14));
        assert!(err.to_string().starts_with("incomplete JSON"));
    }

    #[test]
    fn empty_input_is_incomplete() {
        let err = canonicalize("").unwrap_err();
        assert!(matches!(
            err,
            FormatError::Parse { kind: ParseErrorKind::Incomplete, .. }
        ));
        assert!(!validate(""));
    }

    #[test]
    fn validate_accepts_any_json_value() {
        assert!(validate("null"));
        assert!(validate("[]"));
        assert!(!validate("{,}"));
    }
}
