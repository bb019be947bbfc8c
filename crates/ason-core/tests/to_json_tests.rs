use ason_core::{ason_to_json, AsonError};

/// Helper: parse JSON strings for comparison, normalizing formatting.
fn json_eq(a: &str, b: &str) -> bool {
    let va: serde_json::Value = serde_json::from_str(a).unwrap();
    let vb: serde_json::Value = serde_json::from_str(b).unwrap();
    va == vb
}

fn assert_json_eq(actual: &str, expected: &str) {
    assert!(
        json_eq(actual, expected),
        "JSON mismatch:\n  actual:   {actual}\n  expected: {expected}"
    );
}

fn compact(text: &str) -> String {
    ason_to_json(text, false, false).unwrap()
}

// ============================================================================
// Root Scalars and Root Collapse
// ============================================================================

#[test]
fn bare_number_collapses_to_bare_json_value() {
    assert_eq!(compact("5"), "5");
}

#[test]
fn bare_string() {
    assert_eq!(compact("hello"), "\"hello\"");
}

#[test]
fn bare_null_true_false() {
    assert_eq!(compact("null"), "null");
    assert_eq!(compact("true"), "true");
    assert_eq!(compact("false"), "false");
}

#[test]
fn escaped_primitive_stays_string() {
    assert_eq!(compact("\\true"), "\"true\"");
    assert_eq!(compact("\\5"), "\"5\"");
    assert_eq!(compact("\\-1.5"), "\"-1.5\"");
}

#[test]
fn double_backslash_sheds_one() {
    // two backslashes before a literal decode to a one-backslash string
    assert_eq!(compact("\\\\null"), "\"\\\\null\"");
}

#[test]
fn empty_input_is_empty_string() {
    assert_eq!(compact(""), "\"\"");
}

#[test]
fn multiple_root_values_stay_an_array() {
    assert_eq!(compact("1\n2\n3"), "[1,2,3]");
    assert_eq!(compact("a\nb"), "[\"a\",\"b\"]");
}

#[test]
fn single_root_sequence_does_not_collapse() {
    assert_eq!(compact("."), "[[]]");
    assert_eq!(compact(".\n 1\n 2"), "[[1,2]]");
}

#[test]
fn single_root_map_collapses() {
    assert_eq!(compact("-"), "{}");
    assert_eq!(compact("-\n a 5"), "{\"a\":5}");
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn flat_object() {
    assert_eq!(compact("-\n a 5\n b 6"), "{\"a\":5,\"b\":6}");
}

#[test]
fn object_with_string_values() {
    assert_json_eq(
        &compact("-\n name Alice\n city Zurich"),
        r#"{"name":"Alice","city":"Zurich"}"#,
    );
}

#[test]
fn nested_object() {
    assert_eq!(compact("-\n k\n  x 1"), "{\"k\":{\"x\":1}}");
}

#[test]
fn sequence_valued_key() {
    assert_eq!(compact("-\n .k\n  1\n  2"), "{\"k\":[1,2]}");
}

#[test]
fn empty_sequence_value() {
    assert_eq!(compact("-\n .k"), "{\"k\":[]}");
}

#[test]
fn empty_map_value() {
    assert_eq!(compact("-\n -k"), "{\"k\":{}}");
}

#[test]
fn value_keeps_spaces_after_first_separator() {
    assert_json_eq(&compact("-\n msg hello world"), r#"{"msg":"hello world"}"#);
}

#[test]
fn escaped_space_in_key() {
    assert_json_eq(&compact("-\n a\\ b 5"), r#"{"a b":5}"#);
}

#[test]
fn backslash_shields_leading_dot_in_key() {
    assert_json_eq(&compact("-\n \\.x 1"), r#"{".x":1}"#);
    assert_json_eq(&compact("-\n \\-x 1"), r#"{"-x":1}"#);
}

#[test]
fn unicode_escape_in_value() {
    assert_json_eq(&compact("-\n k \\u0041"), r#"{"k":"A"}"#);
}

#[test]
fn newline_escape_in_value() {
    assert_json_eq(&compact("-\n k line1\\nline2"), "{\"k\":\"line1\\nline2\"}");
}

// ============================================================================
// Sequences
// ============================================================================

#[test]
fn sequence_of_anonymous_maps() {
    assert_eq!(compact("-\n a 1\n-\n b 2"), "[{\"a\":1},{\"b\":2}]");
}

#[test]
fn nested_sequences() {
    assert_eq!(compact(".\n .\n  1"), "[[[1]]]");
}

#[test]
fn empty_collection_elements() {
    assert_eq!(compact(".\n .\n -"), "[[[],{}]]");
}

#[test]
fn mixed_sequence() {
    assert_eq!(compact("1\n-\n a 2\ntail"), "[1,{\"a\":2},\"tail\"]");
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn exponent_normalizes_to_plain_decimal() {
    assert_eq!(compact("1e3"), "1000");
}

#[test]
fn float_and_negative() {
    assert_eq!(compact("3.14"), "3.14");
    assert_eq!(compact("-7"), "-7");
}

#[test]
fn leading_zero_is_a_string() {
    // "007" fails the number grammar, so it stays a string
    assert_eq!(compact("007"), "\"007\"");
}

// ============================================================================
// Pretty Printing
// ============================================================================

#[test]
fn pretty_flat_object() {
    let json = ason_to_json("-\n a 5\n b 6", true, false).unwrap();
    assert_eq!(json, "{\n \"a\":5,\n \"b\":6}");
}

#[test]
fn pretty_sequence() {
    let json = ason_to_json("1\n2", true, false).unwrap();
    assert_eq!(json, "[1,\n2]");
}

#[test]
fn pretty_nested() {
    let json = ason_to_json("-\n k\n  x 1", true, false).unwrap();
    assert_eq!(json, "{\n \"k\":{\n  \"x\":1}}");
}

#[test]
fn pretty_output_is_valid_json() {
    let json = ason_to_json("-\n a 5\n .k\n  1\n  2\n b x", true, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, serde_json::json!({"a":5,"k":[1,2],"b":"x"}));
}

// ============================================================================
// Structural Errors (both modes)
// ============================================================================

#[test]
fn indentation_jump_fails_lenient() {
    let err = ason_to_json("a\n  b", false, false).unwrap_err();
    assert!(matches!(err, AsonError::Structural { line: 2, .. }));
}

#[test]
fn indentation_jump_fails_strict() {
    let err = ason_to_json("a\n  b", false, true).unwrap_err();
    assert!(matches!(err, AsonError::Structural { line: 2, .. }));
}

#[test]
fn jump_at_first_line_fails() {
    let err = ason_to_json("  a", false, false).unwrap_err();
    assert!(matches!(err, AsonError::Structural { line: 1, .. }));
}

// ============================================================================
// Strict Mode Violations
// ============================================================================

#[test]
fn strict_rejects_blank_line() {
    let err = ason_to_json("a\n\nb", false, true).unwrap_err();
    assert!(matches!(err, AsonError::StrictViolation { line: 2, .. }));
}

#[test]
fn strict_rejects_trailing_whitespace() {
    let err = ason_to_json("a ", false, true).unwrap_err();
    assert!(matches!(err, AsonError::StrictViolation { line: 1, .. }));
}

#[test]
fn strict_rejects_carriage_return() {
    let err = ason_to_json("a\r\nb", false, true).unwrap_err();
    assert!(matches!(err, AsonError::StrictViolation { line: 1, .. }));
}

#[test]
fn strict_rejects_tab() {
    let err = ason_to_json("a\tb", false, true).unwrap_err();
    assert!(matches!(err, AsonError::StrictViolation { line: 1, .. }));
}

#[test]
fn strict_rejects_missing_separator() {
    let err = ason_to_json("-\n a", false, true).unwrap_err();
    assert!(matches!(err, AsonError::StrictViolation { line: 2, .. }));
}

#[test]
fn strict_rejects_space_in_opening_key() {
    let err = ason_to_json("-\n a b\n  x 1", false, true).unwrap_err();
    assert!(matches!(err, AsonError::StrictViolation { line: 2, .. }));
}

#[test]
fn strict_rejects_plain_sequence_opener() {
    let err = ason_to_json("x\n a 1", false, true).unwrap_err();
    assert!(matches!(err, AsonError::StrictViolation { line: 1, .. }));
}

#[test]
fn strict_rejects_overlong_empty_markers() {
    let err = ason_to_json("..", false, true).unwrap_err();
    assert!(matches!(err, AsonError::StrictViolation { line: 1, .. }));
    let err = ason_to_json("--", false, true).unwrap_err();
    assert!(matches!(err, AsonError::StrictViolation { line: 1, .. }));
}

#[test]
fn strict_rejects_indented_first_line() {
    let err = ason_to_json(" a", false, true).unwrap_err();
    assert!(matches!(err, AsonError::StrictViolation { line: 1, .. }));
}

#[test]
fn strict_accepts_well_formed_input() {
    assert_eq!(
        ason_to_json("-\n a 5\n b 6", false, true).unwrap(),
        "{\"a\":5,\"b\":6}"
    );
}

// ============================================================================
// Lenient Fallbacks
// ============================================================================

#[test]
fn lenient_unsplittable_line_becomes_empty_value() {
    assert_eq!(compact("-\n a"), "{\"a\":\"\"}");
}

#[test]
fn lenient_accepts_indented_first_line() {
    assert_eq!(compact(" a"), "\"a\"");
}

#[test]
fn lenient_trailing_newline_adds_empty_root_element() {
    assert_eq!(compact("-\n a 5\n"), "[{\"a\":5},\"\"]");
}
