//! Value-tree builder — constructs a native JSON value from the semantic
//! token stream (the `parse` direction).
//!
//! The builder keeps a stack of in-progress containers, each remembering how
//! it attaches to its parent (under a key, or appended as an element). A
//! dedent pops and attaches; containers still open when the stream ends are
//! unwound the same way, mirroring the emitter's trailing close. Objects use
//! `serde_json::Map`, which preserves insertion order through the
//! `preserve_order` feature — ASON line order is the property order.

use serde_json::{Map, Value};

use crate::context;
use crate::tokenizer::Token;

/// How a finished container attaches to its parent.
enum Slot {
    /// Appended to the parent sequence.
    Element,
    /// Inserted into the parent map under this key.
    Key(String),
}

enum Node {
    Seq(Vec<Value>),
    Map(Map<String, Value>),
}

struct Frame {
    slot: Slot,
    node: Node,
}

/// Build a value tree from semantic tokens. The root-collapse rule matches
/// the JSON emitter's: a root holding exactly one scalar-or-map child and no
/// sequence child yields that child directly.
pub fn build_value(tokens: &[Token]) -> Value {
    let mut stack = vec![Frame {
        slot: Slot::Element,
        node: Node::Seq(Vec::new()),
    }];
    let mut root_values = 0usize;
    let mut root_sequences = 0usize;

    for token in tokens {
        let at_root = stack.len() == 1;
        match token {
            Token::KeyValue(key, scalar) => {
                insert(&mut stack, key.clone(), scalar.clone().into_value());
            }
            Token::Value(scalar) => {
                if at_root {
                    root_values += 1;
                }
                append(&mut stack, scalar.clone().into_value());
            }
            Token::MapKey(key) => stack.push(Frame {
                slot: Slot::Key(key.clone()),
                node: Node::Map(Map::new()),
            }),
            Token::SeqKey(key) => stack.push(Frame {
                slot: Slot::Key(key.clone()),
                node: Node::Seq(Vec::new()),
            }),
            Token::MapKeyEmpty(key) => insert(&mut stack, key.clone(), Value::Object(Map::new())),
            Token::SeqKeyEmpty(key) => insert(&mut stack, key.clone(), Value::Array(Vec::new())),
            Token::AnonMap => {
                if at_root {
                    root_values += 1;
                }
                stack.push(Frame {
                    slot: Slot::Element,
                    node: Node::Map(Map::new()),
                });
            }
            Token::Sequence => {
                if at_root {
                    root_sequences += 1;
                }
                stack.push(Frame {
                    slot: Slot::Element,
                    node: Node::Seq(Vec::new()),
                });
            }
            Token::MapEmpty => {
                if at_root {
                    root_values += 1;
                }
                append(&mut stack, Value::Object(Map::new()));
            }
            Token::SequenceEmpty => {
                if at_root {
                    root_sequences += 1;
                }
                append(&mut stack, Value::Array(Vec::new()));
            }
            Token::Dedent(n) => {
                for _ in 0..*n {
                    close_top(&mut stack);
                }
            }
        }
    }

    while stack.len() > 1 {
        close_top(&mut stack);
    }

    let root = match stack.pop() {
        Some(Frame {
            node: Node::Seq(items),
            ..
        }) => items,
        _ => Vec::new(),
    };
    if context::root_collapse(root_values, root_sequences) {
        root.into_iter().next().unwrap_or(Value::Null)
    } else {
        Value::Array(root)
    }
}

fn insert(stack: &mut [Frame], key: String, value: Value) {
    if let Some(Frame {
        node: Node::Map(map),
        ..
    }) = stack.last_mut()
    {
        map.insert(key, value);
    }
}

fn append(stack: &mut [Frame], value: Value) {
    if let Some(Frame {
        node: Node::Seq(items),
        ..
    }) = stack.last_mut()
    {
        items.push(value);
    }
}

/// Pop the innermost container and attach it to its parent. The root frame
/// is never popped here.
fn close_top(stack: &mut Vec<Frame>) {
    if stack.len() <= 1 {
        return;
    }
    if let Some(frame) = stack.pop() {
        let value = match frame.node {
            Node::Seq(items) => Value::Array(items),
            Node::Map(map) => Value::Object(map),
        };
        match frame.slot {
            Slot::Element => append(stack, value),
            Slot::Key(key) => insert(stack, key, value),
        }
    }
}
