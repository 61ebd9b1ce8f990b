//! On-disk shapes of the card document.
//!
//! Current shape, written by every save:
//!
//! ```json
//! {
//!     "col1": ["sentence A", "sentence B"],
//!     "col2": ["sentence C"]
//! }
//! ```
//!
//! Legacy shape, only ever read: a bare array of strings from the single-column
//! days. The store migrates it on load and rewrites the file in the current shape.

use crate::error::{CopyCatError, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnsFile {
    pub col1: Vec<String>,
    pub col2: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Columns(ColumnsFile),
    Legacy(Vec<String>),
}

/// Parses a stored document, accepting both the current and the legacy shape.
///
/// Entries that are not strings are rendered in Python literal spelling
/// (`True`, `None`, `{'a': 1}`). In the current shape a missing or non-array
/// column is read as empty.
pub fn parse_document(raw: &str) -> Result<Document> {
    let value: Value = serde_json::from_str(raw).map_err(CopyCatError::Serialization)?;
    match value {
        Value::Object(map) => Ok(Document::Columns(ColumnsFile {
            col1: column_entries(map.get("col1")),
            col2: column_entries(map.get("col2")),
        })),
        Value::Array(items) => Ok(Document::Legacy(items.into_iter().map(coerce_text).collect())),
        other => Err(CopyCatError::Store(format!(
            "Expected an object or an array, found {}",
            kind_of(&other)
        ))),
    }
}

/// Serializes the current shape, pretty-printed with four-space indentation.
pub fn render_document(file: &ColumnsFile) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    file.serialize(&mut ser).map_err(CopyCatError::Serialization)?;
    String::from_utf8(buf)
        .map_err(|e| CopyCatError::Store(format!("Invalid UTF-8 in document: {}", e)))
}

fn column_entries(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().cloned().map(coerce_text).collect(),
        _ => Vec::new(),
    }
}

fn coerce_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => {
            let mut out = String::new();
            write_py_literal(&other, &mut out);
            out
        }
    }
}

/// Python `str()` spelling of a JSON value nested inside a non-string entry.
fn write_py_literal(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_py_quoted(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_py_literal(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_py_quoted(key, out);
                out.push_str(": ");
                write_py_literal(item, out);
            }
            out.push('}');
        }
    }
}

// Single quotes unless the text holds a single quote and no double quote.
fn write_py_quoted(s: &str, out: &mut String) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
