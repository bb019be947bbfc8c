//! ASON serializer — walks a native value tree and emits canonical ASON
//! text (the `stringify` direction). Purely recursive, no token
//! intermediate.

use serde_json::{Map, Value};

use crate::escape::{self, EscapeMode};

/// Serialize a value tree as ASON text.
///
/// A root array is serialized directly; a root object is introduced by a
/// standalone `-` line with its entries one level deeper; anything else is a
/// single scalar token. The result carries no trailing newline.
///
/// Total over the value-tree domain — this function cannot fail.
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::Array(items) => sequence_to_ason(items, 0, &mut out),
        Value::Object(map) => {
            out.push_str("-\n");
            map_to_ason(map, 1, &mut out);
        }
        scalar => out.push_str(&escape::encode_value(scalar)),
    }
    if out.ends_with('\n') {
        out.pop();
    }
    out
}

fn map_to_ason(map: &Map<String, Value>, level: usize, out: &mut String) {
    for (key, value) in map {
        push_indent(level, out);
        match value {
            Value::Array(items) => {
                out.push('.');
                out.push_str(&escape::escape(key, EscapeMode::Json));
                out.push('\n');
                sequence_to_ason(items, level + 1, out);
            }
            Value::Object(child) if child.is_empty() => {
                out.push('-');
                out.push_str(&escape::escape(key, EscapeMode::Json));
                out.push('\n');
            }
            Value::Object(child) => {
                out.push_str(&escape::escape(key, EscapeMode::Json));
                out.push('\n');
                map_to_ason(child, level + 1, out);
            }
            scalar => {
                out.push_str(&escape::encode_key(key));
                out.push(' ');
                out.push_str(&escape::encode_value(scalar));
                out.push('\n');
            }
        }
    }
}

fn sequence_to_ason(items: &[Value], level: usize, out: &mut String) {
    for item in items {
        push_indent(level, out);
        match item {
            Value::Array(children) => {
                out.push_str(".\n");
                sequence_to_ason(children, level + 1, out);
            }
            Value::Object(map) => {
                out.push_str("-\n");
                map_to_ason(map, level + 1, out);
            }
            scalar => {
                out.push_str(&escape::encode_value(scalar));
                out.push('\n');
            }
        }
    }
}

fn push_indent(level: usize, out: &mut String) {
    for _ in 0..level {
        out.push(' ');
    }
}
