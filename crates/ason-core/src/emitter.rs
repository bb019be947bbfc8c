//! JSON emitter — renders the semantic token stream as JSON text.
//!
//! The emitter walks the stream with its own context stack (mirroring the
//! tokenizer's) and writes punctuation as it goes: `{`/`[` for opening
//! tokens, the matching closers for dedents, and a comma before any token
//! whose predecessor terminated a value. The whole document is built inside
//! a synthetic root array whose brackets are stripped again when the
//! root-collapse rule applies, so a single-value or single-object document
//! maps to a bare JSON value rather than a singleton array.
//!
//! Pretty mode inserts a newline after every opening brace and separator and
//! indents each new line by one space per nesting level — the same
//! indentation width ASON itself uses.

use crate::context::{self, Context, ContextStack};
use crate::escape::{self, EscapeMode};
use crate::tokenizer::Token;

/// Render semantic tokens as a JSON document.
pub fn generate_json(tokens: &[Token], pretty: bool) -> String {
    let mut contexts = ContextStack::new();
    let mut out = String::from("[");
    // direct children of the synthetic root, tracked for root collapse
    let mut root_values = 0usize;
    let mut root_sequences = 0usize;
    let mut last: Option<&Token> = None;

    for token in tokens {
        match token {
            Token::Dedent(n) => {
                for _ in 0..*n {
                    push_closer(&mut contexts, &mut out);
                }
            }
            Token::Value(scalar) => {
                if contexts.depth() == 1 {
                    root_values += 1;
                }
                separate(&mut out, last, pretty);
                indent(&mut out, &contexts, pretty);
                out.push_str(&escape::scalar_to_json(scalar));
            }
            Token::KeyValue(key, scalar) => {
                separate(&mut out, last, pretty);
                indent(&mut out, &contexts, pretty);
                push_key(&mut out, key);
                out.push_str(&escape::scalar_to_json(scalar));
            }
            Token::AnonMap => {
                if contexts.depth() == 1 {
                    root_values += 1;
                }
                separate(&mut out, last, pretty);
                indent(&mut out, &contexts, pretty);
                out.push('{');
                newline(&mut out, pretty);
                contexts.push(Context::Map);
            }
            Token::Sequence => {
                if contexts.depth() == 1 {
                    root_sequences += 1;
                }
                separate(&mut out, last, pretty);
                indent(&mut out, &contexts, pretty);
                out.push('[');
                newline(&mut out, pretty);
                contexts.push(Context::Sequence);
            }
            Token::MapKey(key) => {
                separate(&mut out, last, pretty);
                indent(&mut out, &contexts, pretty);
                push_key(&mut out, key);
                out.push('{');
                contexts.push(Context::Map);
                newline(&mut out, pretty);
            }
            Token::SeqKey(key) => {
                separate(&mut out, last, pretty);
                indent(&mut out, &contexts, pretty);
                push_key(&mut out, key);
                out.push('[');
                contexts.push(Context::Sequence);
                newline(&mut out, pretty);
            }
            Token::MapKeyEmpty(key) => {
                separate(&mut out, last, pretty);
                indent(&mut out, &contexts, pretty);
                push_key(&mut out, key);
                out.push_str("{}");
            }
            Token::SeqKeyEmpty(key) => {
                separate(&mut out, last, pretty);
                indent(&mut out, &contexts, pretty);
                push_key(&mut out, key);
                out.push_str("[]");
            }
            Token::MapEmpty => {
                if contexts.depth() == 1 {
                    root_values += 1;
                }
                separate(&mut out, last, pretty);
                indent(&mut out, &contexts, pretty);
                out.push_str("{}");
            }
            Token::SequenceEmpty => {
                if contexts.depth() == 1 {
                    root_sequences += 1;
                }
                separate(&mut out, last, pretty);
                indent(&mut out, &contexts, pretty);
                out.push_str("[]");
            }
        }
        last = Some(token);
    }

    // close whatever is still open, root last
    while contexts.depth() > 0 {
        push_closer(&mut contexts, &mut out);
    }

    if context::root_collapse(root_values, root_sequences) {
        out[1..out.len() - 1].to_string()
    } else {
        out
    }
}

/// True for tokens that terminate a value; the next token needs a comma.
fn ends_value(token: &Token) -> bool {
    matches!(
        token,
        Token::Value(_)
            | Token::KeyValue(..)
            | Token::SeqKeyEmpty(_)
            | Token::MapKeyEmpty(_)
            | Token::SequenceEmpty
            | Token::MapEmpty
            | Token::Dedent(_)
    )
}

fn separate(out: &mut String, last: Option<&Token>, pretty: bool) {
    if last.is_some_and(ends_value) {
        out.push(',');
        if pretty {
            out.push('\n');
        }
    }
}

fn indent(out: &mut String, contexts: &ContextStack, pretty: bool) {
    if pretty {
        for _ in 1..contexts.depth() {
            out.push(' ');
        }
    }
}

fn newline(out: &mut String, pretty: bool) {
    if pretty {
        out.push('\n');
    }
}

fn push_key(out: &mut String, key: &str) {
    out.push('"');
    out.push_str(&escape::escape(key, EscapeMode::Json));
    out.push_str("\":");
}

fn push_closer(contexts: &mut ContextStack, out: &mut String) {
    match contexts.pop() {
        Some(Context::Map) => out.push('}'),
        Some(Context::Sequence) => out.push(']'),
        None => {}
    }
}
