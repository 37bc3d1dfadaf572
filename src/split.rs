use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::classify::ContentKind;
use crate::html::{HtmlFragments, split_html_content};
use crate::text::{TextFragments, split_text_content};

/// Default fragment budget in bytes
pub const DEFAULT_MAX_FRAGMENT_BYTES: usize = 4096;

/// Errors reported before any fragment is produced
#[derive(Debug, Error)]
pub enum SplitError {
    /// The value handed in was not textual content
    #[error("input must be a string, got {0}")]
    InvalidInputType(&'static str),

    /// The raw input could not be probed as text
    #[error("invalid input format")]
    InvalidInputFormat(#[source] std::str::Utf8Error),
}

/// Lazy fragment sequence for either content kind
#[derive(Debug)]
pub enum Fragments<'a> {
    Html(HtmlFragments<'a>),
    Text(TextFragments<'a>),
}

impl Fragments<'_> {
    /// The content kind this split was routed to
    pub fn kind(&self) -> ContentKind {
        match self {
            Fragments::Html(_) => ContentKind::Html,
            Fragments::Text(_) => ContentKind::Text,
        }
    }
}

impl Iterator for Fragments<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self {
            Fragments::Html(fragments) => fragments.next(),
            Fragments::Text(fragments) => fragments.next(),
        }
    }
}

/// Split content into fragments of at most `max_len` bytes, routing to the
/// HTML or text splitter by classification.
///
/// Empty input or a zero budget yields an empty sequence.
pub fn split_content(source: &str, max_len: usize) -> Fragments<'_> {
    let kind = ContentKind::of(source);
    debug!(?kind, max_len, source_bytes = source.len(), "splitting content");
    match kind {
        ContentKind::Html => Fragments::Html(split_html_content(source, max_len)),
        ContentKind::Text => Fragments::Text(split_text_content(source, max_len)),
    }
}

/// Split a dynamically typed JSON value.
///
/// Only strings are accepted; null, booleans, numbers, arrays, and objects
/// fail with [`SplitError::InvalidInputType`] before any parsing happens.
pub fn split_content_value(source: &Value, max_len: usize) -> Result<Fragments<'_>, SplitError> {
    match source {
        Value::String(text) => Ok(split_content(text, max_len)),
        other => Err(SplitError::InvalidInputType(value_kind(other))),
    }
}

/// Split raw bytes, which must form valid UTF-8 text.
///
/// Anything else fails with [`SplitError::InvalidInputFormat`] carrying the
/// decode error as its source.
pub fn split_content_bytes(source: &[u8], max_len: usize) -> Result<Fragments<'_>, SplitError> {
    let text = std::str::from_utf8(source).map_err(SplitError::InvalidInputFormat)?;
    Ok(split_content(text, max_len))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_routes_html_to_html_splitter() {
        let fragments = split_content("<div>hello world</div>", 100);
        assert_eq!(fragments.kind(), ContentKind::Html);

        let all: Vec<String> = fragments.collect();
        assert_eq!(all, vec!["<div>hello world</div>".to_string()]);
    }

    #[test]
    fn test_routes_prose_to_text_splitter() {
        let fragments = split_content("Just words. No markup.", 100);
        assert_eq!(fragments.kind(), ContentKind::Text);

        let all: Vec<String> = fragments.collect();
        assert_eq!(all, vec!["Just words. No markup.".to_string()]);
    }

    #[test]
    fn test_empty_input_or_zero_budget_yields_nothing() {
        assert_eq!(split_content("", 100).count(), 0);
        assert_eq!(split_content("some text", 0).count(), 0);
        assert_eq!(split_content("<p>markup</p>", 0).count(), 0);
    }

    #[test]
    fn test_non_string_values_are_rejected_eagerly() {
        let cases = vec![
            (json!(null), "null"),
            (json!(0), "number"),
            (json!(true), "boolean"),
            (json!([1, 2, 3]), "array"),
            (json!({"invalid": "input"}), "object"),
        ];

        for (value, expected_kind) in cases {
            match split_content_value(&value, 100) {
                Err(SplitError::InvalidInputType(kind)) => assert_eq!(kind, expected_kind),
                other => panic!("expected InvalidInputType for {:?}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_string_value_is_accepted() {
        let value = json!("A sentence here.");
        let fragments = split_content_value(&value, 100).unwrap();

        let all: Vec<String> = fragments.collect();
        assert_eq!(all, vec!["A sentence here.".to_string()]);
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let result = split_content_bytes(&[0xff, 0xfe, 0x01], 100);
        assert!(matches!(result, Err(SplitError::InvalidInputFormat(_))));
    }

    #[test]
    fn test_valid_bytes_are_split() {
        let fragments = split_content_bytes("Plain words here.".as_bytes(), 100).unwrap();
        assert_eq!(fragments.count(), 1);
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        assert_eq!(
            SplitError::InvalidInputType("object").to_string(),
            "input must be a string, got object"
        );
        let err = split_content_bytes(&[0x80], 100).unwrap_err();
        assert_eq!(err.to_string(), "invalid input format");
    }
}
