//! Indentation lexer — turns raw ASON text into a flat stream of shift
//! tokens describing nesting changes.

use crate::error::{AsonError, Result};

/// Output unit of the indentation lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum ShiftToken {
    /// The line is nested exactly one level deeper than its predecessor.
    Indent,
    /// The line is nested `n` levels shallower than its predecessor.
    Dedent(usize),
    /// A line with its leading indentation stripped. Every input line yields
    /// exactly one content token; downstream stages count them to recover
    /// line numbers.
    Content(String),
}

/// Split the input into lines and emit shift tokens.
///
/// A line's level is its count of leading spaces. Level may stay, rise by
/// exactly one, or drop by any amount; a rise of two or more is a structural
/// error. Strict mode additionally rejects blank (whitespace-only) lines. A
/// trailing newline produces a final empty content line like any other.
pub fn shift_tokenize(text: &str, strict: bool) -> Result<Vec<ShiftToken>> {
    let mut tokens = Vec::new();
    let mut level = 0usize;
    for (idx, line) in text.split('\n').enumerate() {
        if strict && line.trim().is_empty() {
            return Err(AsonError::strict(idx + 1, "line must not be empty"));
        }
        let new_level = line.len() - line.trim_start_matches(' ').len();
        if new_level == level + 1 {
            tokens.push(ShiftToken::Indent);
        } else if new_level < level {
            tokens.push(ShiftToken::Dedent(level - new_level));
        } else if new_level != level {
            return Err(AsonError::structural(
                idx + 1,
                "only one level of indentation increase per line is allowed",
            ));
        }
        tokens.push(ShiftToken::Content(line[new_level..].to_string()));
        level = new_level;
    }
    Ok(tokens)
}
