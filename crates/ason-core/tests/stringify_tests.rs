use ason_core::{json_to_ason, stringify, AsonError};
use serde_json::json;

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn stringify_primitives() {
    assert_eq!(stringify(&json!(null)), "null");
    assert_eq!(stringify(&json!(true)), "true");
    assert_eq!(stringify(&json!(false)), "false");
    assert_eq!(stringify(&json!(5)), "5");
    assert_eq!(stringify(&json!(-7)), "-7");
    assert_eq!(stringify(&json!(3.14)), "3.14");
}

#[test]
fn stringify_plain_string() {
    assert_eq!(stringify(&json!("hello")), "hello");
}

#[test]
fn primitive_lookalike_strings_gain_a_backslash() {
    assert_eq!(stringify(&json!("true")), "\\true");
    assert_eq!(stringify(&json!("null")), "\\null");
    assert_eq!(stringify(&json!("5")), "\\5");
    assert_eq!(stringify(&json!("-1.5e3")), "\\-1.5e3");
}

#[test]
fn leading_zero_string_needs_no_backslash() {
    // "007" is not a valid JSON number, so it cannot be mistaken for one
    assert_eq!(stringify(&json!("007")), "007");
}

#[test]
fn newline_in_string_is_escaped() {
    assert_eq!(stringify(&json!("line1\nline2")), "line1\\nline2");
}

#[test]
fn control_character_uses_u_escape() {
    assert_eq!(stringify(&json!("a\u{0007}b")), "a\\u0007b");
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn stringify_flat_object() {
    assert_eq!(stringify(&json!({"a":5,"b":6})), "-\n a 5\n b 6");
}

#[test]
fn stringify_empty_object() {
    assert_eq!(stringify(&json!({})), "-");
}

#[test]
fn stringify_nested_object() {
    assert_eq!(stringify(&json!({"k":{"x":1}})), "-\n k\n  x 1");
}

#[test]
fn empty_containers_under_keys_use_markers() {
    assert_eq!(stringify(&json!({"k":[]})), "-\n .k");
    assert_eq!(stringify(&json!({"k":{}})), "-\n -k");
}

#[test]
fn array_valued_key() {
    assert_eq!(stringify(&json!({"k":[1,2]})), "-\n .k\n  1\n  2");
}

#[test]
fn key_with_space_is_escaped() {
    assert_eq!(stringify(&json!({"a b":1})), "-\n a\\ b 1");
}

#[test]
fn marker_leading_keys_are_shielded() {
    assert_eq!(stringify(&json!({".k":1})), "-\n \\.k 1");
    assert_eq!(stringify(&json!({"-k":1})), "-\n \\-k 1");
}

#[test]
fn key_order_is_preserved() {
    let mut map = serde_json::Map::new();
    map.insert("zebra".to_string(), json!(1));
    map.insert("apple".to_string(), json!(2));
    assert_eq!(
        stringify(&serde_json::Value::Object(map)),
        "-\n zebra 1\n apple 2"
    );
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn stringify_flat_array() {
    assert_eq!(stringify(&json!([1, 2, 3])), "1\n2\n3");
}

#[test]
fn stringify_empty_array() {
    assert_eq!(stringify(&json!([])), "");
}

#[test]
fn nested_arrays_use_dot_markers() {
    assert_eq!(stringify(&json!([[1], [2]])), ".\n 1\n.\n 2");
}

#[test]
fn objects_in_arrays_use_dash_markers() {
    assert_eq!(stringify(&json!([{"a":1},{"b":2}])), "-\n a 1\n-\n b 2");
}

#[test]
fn empty_containers_as_elements() {
    assert_eq!(stringify(&json!([[], {}])), ".\n-");
}

#[test]
fn no_trailing_newline() {
    assert!(!stringify(&json!({"a":5})).ends_with('\n'));
    assert!(!stringify(&json!([1, 2])).ends_with('\n'));
}

// ============================================================================
// json_to_ason
// ============================================================================

#[test]
fn json_text_to_ason() {
    assert_eq!(json_to_ason(r#"{"a":5,"b":6}"#).unwrap(), "-\n a 5\n b 6");
    assert_eq!(json_to_ason("[1,2]").unwrap(), "1\n2");
    assert_eq!(json_to_ason("5").unwrap(), "5");
}

#[test]
fn json_number_normalization() {
    // serde_json parses 1e3 as a float; whole floats print without a fraction
    assert_eq!(json_to_ason("1e3").unwrap(), "1000");
}

#[test]
fn invalid_json_surfaces_parser_error() {
    let err = json_to_ason("{not json").unwrap_err();
    assert!(matches!(err, AsonError::Json(_)));
}
