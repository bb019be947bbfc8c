//! Structural tokenizer — interprets the shift-token stream through a
//! two-context state machine and emits semantic tokens.
//!
//! A content line is classified by the current context (map or sequence) and
//! by one-token lookahead: a line directly followed by [`ShiftToken::Indent`]
//! opens a nested container, anything else is a leaf. Dedents pop contexts
//! in bulk and are forwarded for consumers to close the matching containers.
//!
//! All key and value text is run through the escape codec here, so token
//! payloads are fully decoded.

use crate::context::{Context, ContextStack};
use crate::error::{AsonError, Result};
use crate::escape::{self, EscapeMode, Scalar};
use crate::lexer::ShiftToken;

/// Semantic token describing one structural event. The meaning of a content
/// line depends on the context it was read in, so the variants split into a
/// map-context group and a sequence-context group.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Map context: the key opens a nested map.
    MapKey(String),
    /// Map context: the key opens a nested sequence.
    SeqKey(String),
    /// Map context: the key holds an empty map.
    MapKeyEmpty(String),
    /// Map context: the key holds an empty sequence.
    SeqKeyEmpty(String),
    /// Map context: a scalar entry.
    KeyValue(String, Scalar),
    /// Sequence context: opens a nested sequence element.
    Sequence,
    /// Sequence context: opens a nested anonymous map element.
    AnonMap,
    /// Sequence context: an empty sequence element.
    SequenceEmpty,
    /// Sequence context: an empty map element.
    MapEmpty,
    /// Sequence context: a scalar element.
    Value(Scalar),
    /// Closes `n` containers.
    Dedent(usize),
}

/// Run the shift-token stream through the context state machine.
pub fn tokenize(shift_tokens: &[ShiftToken], strict: bool) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut contexts = ContextStack::new();
    let mut line = 0usize;
    let mut i = 0;
    while i < shift_tokens.len() {
        match &shift_tokens[i] {
            ShiftToken::Content(content) => {
                line += 1;
                check_content(content, line, strict)?;
                let opens = matches!(shift_tokens.get(i + 1), Some(ShiftToken::Indent));
                match contexts.current() {
                    Context::Map => {
                        map_line(content, opens, line, strict, &mut tokens, &mut contexts)?
                    }
                    Context::Sequence => {
                        seq_line(content, opens, line, strict, &mut tokens, &mut contexts)?
                    }
                }
                if opens {
                    // the indent belongs to the line that opened it
                    i += 1;
                }
            }
            ShiftToken::Dedent(n) => {
                if *n >= contexts.depth() {
                    return Err(AsonError::structural(line + 1, "dedent past the root"));
                }
                for _ in 0..*n {
                    contexts.pop();
                }
                tokens.push(Token::Dedent(*n));
            }
            ShiftToken::Indent => {
                // Only reachable when the very first line of the input is
                // indented; every other indent is paired with its opener
                // line above.
                if strict {
                    return Err(AsonError::strict(line + 1, "unexpected indentation"));
                }
            }
        }
        i += 1;
    }
    Ok(tokens)
}

/// Strict-mode line hygiene, checked in a fixed order for every content
/// line: trailing space, trailing carriage return, tabs anywhere.
fn check_content(content: &str, line: usize, strict: bool) -> Result<()> {
    if !strict {
        return Ok(());
    }
    if content.ends_with(' ') {
        return Err(AsonError::strict(
            line,
            "no whitespace at the end of the line allowed",
        ));
    }
    if content.ends_with('\r') {
        return Err(AsonError::strict(
            line,
            "carriage returns not allowed for line breaks",
        ));
    }
    if content.contains('\t') {
        return Err(AsonError::strict(line, "no tabs allowed"));
    }
    Ok(())
}

/// Classify a content line read in map context.
fn map_line(
    content: &str,
    opens: bool,
    line: usize,
    strict: bool,
    tokens: &mut Vec<Token>,
    contexts: &mut ContextStack,
) -> Result<()> {
    if opens {
        if strict && content.is_empty() {
            return Err(AsonError::strict(line, "map key must not be empty"));
        }
        if strict && content.contains(' ') {
            return Err(AsonError::strict(line, "map key must not contain spaces"));
        }
        if let Some(key) = content.strip_prefix('.') {
            tokens.push(Token::SeqKey(escape::unescape(key, EscapeMode::Ason)));
            contexts.push(Context::Sequence);
        } else {
            tokens.push(Token::MapKey(escape::unescape(content, EscapeMode::Ason)));
            contexts.push(Context::Map);
        }
        return Ok(());
    }
    if let Some(key) = content.strip_prefix('.') {
        tokens.push(Token::SeqKeyEmpty(escape::unescape(key, EscapeMode::Ason)));
        return Ok(());
    }
    if let Some(key) = content.strip_prefix('-') {
        tokens.push(Token::MapKeyEmpty(escape::unescape(key, EscapeMode::Ason)));
        return Ok(());
    }

    // A leading backslash shields a '.' or '-' from the marker rules above;
    // one backslash is consumed, the rest stay part of the key.
    let stripped = content.trim_start_matches('\\');
    let leading = content.len() - stripped.len();
    let (prefix, rest) = if leading > 0 && (stripped.starts_with('.') || stripped.starts_with('-'))
    {
        ("\\".repeat(leading - 1), stripped)
    } else {
        (String::new(), content)
    };

    let split = first_unescaped_space(rest);
    if strict && split.is_none() {
        return Err(AsonError::strict(
            line,
            "expected key and value separated by unescaped space or indentation on next line",
        ));
    }
    let split = split.unwrap_or(rest.len());
    let key = &rest[..split];
    let value = rest.get(split + 1..).unwrap_or("");
    if strict && key.is_empty() {
        return Err(AsonError::strict(line, "map key must not be empty"));
    }
    if strict && value.is_empty() {
        return Err(AsonError::strict(line, "map value must not be empty"));
    }

    let mut full_key = prefix;
    full_key.push_str(&escape::decode_key(key));
    tokens.push(Token::KeyValue(full_key, escape::decode_value(value)));
    Ok(())
}

/// Classify a content line read in sequence context.
fn seq_line(
    content: &str,
    opens: bool,
    line: usize,
    strict: bool,
    tokens: &mut Vec<Token>,
    contexts: &mut ContextStack,
) -> Result<()> {
    if opens {
        if content == "." {
            tokens.push(Token::Sequence);
            contexts.push(Context::Sequence);
        } else {
            if strict && content != "-" {
                return Err(AsonError::strict(
                    line,
                    "in a sequence, indentation is introduced by a - or . character on the previous line",
                ));
            }
            tokens.push(Token::AnonMap);
            contexts.push(Context::Map);
        }
        return Ok(());
    }
    if content.starts_with('.') {
        if strict && content.len() > 1 {
            return Err(AsonError::strict(
                line,
                "in a sequence, an empty sequence is depicted with a single . character",
            ));
        }
        tokens.push(Token::SequenceEmpty);
    } else if content.starts_with('-') {
        if strict && content.len() > 1 {
            return Err(AsonError::strict(
                line,
                "in a sequence, an empty map is depicted with a single - character",
            ));
        }
        tokens.push(Token::MapEmpty);
    } else {
        tokens.push(Token::Value(escape::decode_value(content)));
    }
    Ok(())
}

/// Byte offset of the first space not shielded by a directly preceding
/// backslash. A backslash shields only a space, nothing else.
fn first_unescaped_space(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && bytes.get(i + 1) == Some(&b' ') {
            i += 2;
        } else if bytes[i] == b' ' {
            return Some(i);
        } else {
            i += 1;
        }
    }
    None
}
