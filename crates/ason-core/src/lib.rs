//! # ason-core
//!
//! Pure-Rust bidirectional converter between **ASON** and JSON.
//!
//! ASON is an indentation-based plain-text serialization format that maps
//! losslessly onto the JSON data model (null, boolean, number, string,
//! ordered object, array). Nesting is expressed by one leading space per
//! level instead of brackets; a line opens a child container exactly when
//! the next line is indented one level deeper. `.` marks sequences, `-`
//! marks maps, and a key-value line splits at its first unescaped space.
//!
//! ## Quick start
//!
//! ```rust
//! use ason_core::{ason_to_json, json_to_ason};
//!
//! // JSON → ASON
//! let ason = json_to_ason(r#"{"name":"Alice","admin":true}"#).unwrap();
//! assert_eq!(ason, "-\n name Alice\n admin true");
//!
//! // ASON → JSON (roundtrip)
//! let json = ason_to_json(&ason, false, false).unwrap();
//! assert_eq!(json, r#"{"name":"Alice","admin":true}"#);
//! ```
//!
//! Working with value trees directly:
//!
//! ```rust
//! use ason_core::{parse, stringify};
//! use serde_json::json;
//!
//! let value = json!({"scores": [95, 87]});
//! let text = stringify(&value);
//! assert_eq!(text, "-\n .scores\n  95\n  87");
//! assert_eq!(parse(&text).unwrap(), value);
//! ```
//!
//! ## Modules
//!
//! - [`lexer`] — indentation → shift tokens
//! - [`tokenizer`] — shift tokens → semantic tokens (map/sequence contexts)
//! - [`emitter`] — semantic tokens → JSON text
//! - [`builder`] — semantic tokens → `serde_json::Value`
//! - [`serializer`] — `serde_json::Value` → ASON text
//! - [`escape`] — string escaping and primitive disambiguation
//! - [`context`] — the shared context stack and root-collapse rule
//! - [`error`] — error types for conversion failures
//!
//! All conversions are synchronous pure functions of their input; no state
//! outlives a call, so the entry points are freely usable from concurrent
//! threads.

pub mod builder;
pub mod context;
pub mod emitter;
pub mod error;
pub mod escape;
pub mod lexer;
pub mod serializer;
pub mod tokenizer;

pub use error::{AsonError, Result};
pub use serializer::stringify;

use serde_json::Value;

/// Convert ASON text to a JSON document.
///
/// `pretty` inserts newlines and one-space-per-level indentation; `strict`
/// rejects formatting ambiguities (blank lines, trailing whitespace, tabs,
/// unseparated key-value lines) instead of normalizing them. Structural
/// violations — an indentation jump of two or more, a dedent past the root —
/// fail in both modes.
pub fn ason_to_json(text: &str, pretty: bool, strict: bool) -> Result<String> {
    let shift_tokens = lexer::shift_tokenize(text, strict)?;
    let tokens = tokenizer::tokenize(&shift_tokens, strict)?;
    Ok(emitter::generate_json(&tokens, pretty))
}

/// Convert a JSON document to ASON text.
///
/// The input must be syntactically valid JSON; parse errors from
/// `serde_json` are surfaced unmodified as [`AsonError::Json`].
pub fn json_to_ason(json: &str) -> Result<String> {
    let value: Value = serde_json::from_str(json)?;
    Ok(serializer::stringify(&value))
}

/// Parse ASON text into a native value tree.
///
/// Always lenient: ambiguous constructs are normalized (an unsplittable map
/// line becomes a key with an empty-string value) and only hard structural
/// violations fail.
pub fn parse(text: &str) -> Result<Value> {
    let shift_tokens = lexer::shift_tokenize(text, false)?;
    let tokens = tokenizer::tokenize(&shift_tokens, false)?;
    Ok(builder::build_value(&tokens))
}
