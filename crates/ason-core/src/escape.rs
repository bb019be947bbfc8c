//! Escape codec — string escaping and primitive disambiguation.
//!
//! Two independent escaping domains share one pair of functions, selected by
//! [`EscapeMode`]:
//!
//! - **Json**: the full JSON string table (`\"`, `\\`, `\b`, `\f`, `\n`,
//!   `\r`, `\t`) plus `\u` escaping of the control characters that have no
//!   named escape.
//! - **Ason**: only `\n` has a named escape; every other control character
//!   in `U+0000..=U+001F` is `\u`-escaped. ASON scalars live inside a
//!   newline-delimited line structure, so a literal newline is the only
//!   character that must never appear raw; `"` and `\` pass through
//!   untouched.
//!
//! Unescaping is the left-to-right inverse with one deliberate asymmetry:
//! a backslash that starts no recognized escape is kept literally in Ason
//! mode but dropped silently in Json mode. Downstream behavior depends on
//! this, so both sides are preserved exactly.
//!
//! On top of the two tables sit the key and value conversions: keys escape
//! spaces as `\ ` and shield a leading `.` or `-` with one extra backslash;
//! values that textually match a primitive literal (`null`, `true`, `false`,
//! or a JSON number) gain one leading backslash so they stay strings.

use serde_json::Value;

/// Selects the active escape table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeMode {
    /// ASON scalar tokens: `\n` named, all other controls `\u`-escaped.
    Ason,
    /// JSON string content: the standard JSON escape table.
    Json,
}

/// A primitive payload carried by semantic tokens and leaf values.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl Scalar {
    /// Move the scalar into a JSON value-tree node.
    pub fn into_value(self) -> Value {
        match self {
            Scalar::Null => Value::Null,
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Number(n) => Value::Number(n),
            Scalar::String(s) => Value::String(s),
        }
    }
}

/// Escape a raw string for the given domain.
pub fn escape(text: &str, mode: EscapeMode) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match mode {
            EscapeMode::Ason => match ch {
                '\n' => out.push_str("\\n"),
                c if (c as u32) < 0x20 => push_u_escape(&mut out, c),
                c => out.push(c),
            },
            EscapeMode::Json => match ch {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                // '/' has an escape in the JSON grammar but it is optional
                '\u{0008}' => out.push_str("\\b"),
                '\u{000C}' => out.push_str("\\f"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if matches!(c as u32, 0x00..=0x07 | 0x0B | 0x0E..=0x1F) => {
                    push_u_escape(&mut out, c)
                }
                c => out.push(c),
            },
        }
    }
    out
}

/// Resolve escape sequences left to right.
///
/// A two-character escape is looked up in the active table first, then a
/// six-character `\uXXXX` escape is attempted. A backslash that starts
/// neither is kept literally in Ason mode and dropped in Json mode.
pub fn unescape(text: &str, mode: EscapeMode) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(ch) = tail[1..].chars().next().and_then(|c| table_lookup(c, mode)) {
            out.push(ch);
            // every table key is ASCII, so the sequence is two bytes long
            rest = &tail[2..];
            continue;
        }
        if let Some(ch) = decode_u_escape(tail) {
            out.push(ch);
            rest = &tail[6..];
            continue;
        }
        if mode == EscapeMode::Ason {
            out.push('\\');
        }
        rest = &tail[1..];
    }
    out.push_str(rest);
    out
}

/// Two-character escapes of the active table.
fn table_lookup(c: char, mode: EscapeMode) -> Option<char> {
    match mode {
        EscapeMode::Ason => match c {
            'n' => Some('\n'),
            _ => None,
        },
        EscapeMode::Json => match c {
            '"' => Some('"'),
            '\\' => Some('\\'),
            '/' => Some('/'),
            'b' => Some('\u{0008}'),
            'f' => Some('\u{000C}'),
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            _ => None,
        },
    }
}

/// Decode a `\uXXXX` escape at the start of `tail` (which begins with `\`).
///
/// Returns `None` when the shape does not match or the code point is not a
/// valid Unicode scalar value; the caller then falls back to the
/// unmapped-backslash rule.
fn decode_u_escape(tail: &str) -> Option<char> {
    let bytes = tail.as_bytes();
    if bytes.len() < 6 || bytes[1] != b'u' {
        return None;
    }
    let hex = tail.get(2..6)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let code = u32::from_str_radix(hex, 16).ok()?;
    char::from_u32(code)
}

fn push_u_escape(out: &mut String, c: char) {
    out.push_str(&format!("\\u{:04x}", c as u32));
}

/// Escape a raw string into an ASON key.
///
/// Applies the Json table, then turns spaces into `\ ` so the key survives
/// the column split, and shields a key whose first non-backslash character
/// is `.` or `-` with one extra leading backslash so it cannot be misread
/// as an empty-collection marker.
pub fn encode_key(key: &str) -> String {
    let stripped = key.trim_start_matches('\\');
    let leading = key.len() - stripped.len();
    let (mut out, body) = if stripped.starts_with('.') || stripped.starts_with('-') {
        ("\\".repeat(leading + 1), stripped)
    } else {
        (String::new(), key)
    };
    out.push_str(&escape(body, EscapeMode::Json).replace(' ', "\\ "));
    out
}

/// Recover a raw key from its ASON form: unescape `\ ` back to spaces, then
/// run Ason-mode unescaping. (The encode side uses the Json table; the
/// decode side deliberately does not mirror it.)
pub fn decode_key(key: &str) -> String {
    unescape(&key.replace("\\ ", " "), EscapeMode::Ason)
}

/// Split `text` into its leading backslashes and a primitive literal, if the
/// remainder is exactly `null`, `true`, `false`, or a JSON number.
pub fn split_primitive_literal(text: &str) -> Option<(usize, &str)> {
    let rest = text.trim_start_matches('\\');
    if rest == "null" || rest == "true" || rest == "false" || is_number_literal(rest) {
        Some((text.len() - rest.len(), rest))
    } else {
        None
    }
}

/// Match the JSON number grammar: `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
fn is_number_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            while bytes.get(i).is_some_and(u8::is_ascii_digit) {
                i += 1;
            }
        }
        _ => return false,
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        if !bytes.get(i).is_some_and(u8::is_ascii_digit) {
            return false;
        }
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if !bytes.get(i).is_some_and(u8::is_ascii_digit) {
            return false;
        }
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
    }
    i == bytes.len()
}

/// Decode an ASON value token into a scalar.
///
/// Zero leading backslashes before a primitive literal mean the literal
/// itself; otherwise exactly one backslash is consumed and the rest of the
/// text stays a string, verbatim. Text that is no primitive at all goes
/// through Ason-mode unescaping.
pub fn decode_value(text: &str) -> Scalar {
    if let Some((backslashes, literal)) = split_primitive_literal(text) {
        if backslashes == 0 {
            return match literal {
                "null" => Scalar::Null,
                "true" => Scalar::Bool(true),
                "false" => Scalar::Bool(false),
                number => parse_number(number),
            };
        }
        let mut s = "\\".repeat(backslashes - 1);
        s.push_str(literal);
        return Scalar::String(s);
    }
    Scalar::String(unescape(text, EscapeMode::Ason))
}

/// Number inference: `i64` first, then `f64` with whole finite values
/// normalized back to integers. Exponent overflow decodes to null.
fn parse_number(text: &str) -> Scalar {
    if let Ok(i) = text.parse::<i64>() {
        return Scalar::Number(i.into());
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => {
            if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                Scalar::Number((f as i64).into())
            } else {
                match serde_json::Number::from_f64(f) {
                    Some(n) => Scalar::Number(n),
                    None => Scalar::Null,
                }
            }
        }
        _ => Scalar::Null,
    }
}

/// Encode a leaf of the value tree as an ASON value token. A string that
/// matches the primitive grammar gains one leading backslash.
pub fn encode_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => {
            if split_primitive_literal(s).is_some() {
                format!("\\{s}")
            } else {
                escape(s, EscapeMode::Ason)
            }
        }
        _ => "null".to_string(),
    }
}

/// Render a scalar as JSON text: primitives verbatim, strings quoted and
/// Json-escaped.
pub fn scalar_to_json(scalar: &Scalar) -> String {
    match scalar {
        Scalar::Null => "null".to_string(),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Number(n) => format_number(n),
        Scalar::String(s) => format!("\"{}\"", escape(s, EscapeMode::Json)),
    }
}

/// Format a JSON number: integers verbatim; floats with `NaN`/`Infinity`
/// canonicalized to `null`, `-0` to `0`, and whole values printed without a
/// fractional part.
fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() => {
            let f = if f == 0.0 { 0.0 } else { f };
            if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                (f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        _ => "null".to_string(),
    }
}
