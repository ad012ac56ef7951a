use rstest::rstest;

use crate::{Error, Family, Writable};

fn object_error(source: &str) -> Error {
    match Writable::object_from_str(source) {
        Err(e) => e,
        Ok(object) => panic!("expected {source:?} to fail, parsed {object}"),
    }
}

fn array_error(source: &str) -> Error {
    match Writable::array_from_str(source) {
        Err(e) => e,
        Ok(array) => panic!("expected {source:?} to fail, parsed {array}"),
    }
}

#[rstest]
#[case::not_an_object("[1]", "must begin with '{'")]
#[case::missing_close(r#"{"a": 1"#, "expected a ',' or '}'")]
#[case::missing_colon(r#"{"a" 1}"#, "expected a ':' after a key")]
#[case::missing_key_eof("{", "must end with '}'")]
#[case::empty_key_slot("{:1}", "missing value")]
#[case::unterminated_string(r#"{"a": "b}"#, "unterminated string")]
#[case::newline_in_string("{\"a\": \"b\nc\"}", "unterminated string")]
#[case::illegal_escape(r#"{"a": "b\qc"}"#, "illegal escape")]
fn object_syntax_errors(#[case] source: &str, #[case] expected: &str) {
    let error = object_error(source);
    assert!(
        matches!(error, Error::Syntax { .. }),
        "unexpected error {error} for {source:?}"
    );
    let message = error.to_string();
    assert!(
        message.contains(expected),
        "error {message:?} for {source:?} does not mention {expected:?}"
    );
}

#[rstest]
#[case::not_an_array("{}", "must begin with '['")]
#[case::missing_close("[1, 2", "expected a ',' or ']'")]
#[case::eof_after_open("[", "missing value")]
#[case::stray_delimiter("[1 # 2]", "expected a ',' or ']'")]
fn array_syntax_errors(#[case] source: &str, #[case] expected: &str) {
    let message = array_error(source).to_string();
    assert!(
        message.contains(expected),
        "error {message:?} for {source:?} does not mention {expected:?}"
    );
}

#[test]
fn syntax_errors_carry_a_byte_offset() {
    let error = object_error("{\"key\" 1}");
    let Error::Syntax { offset, .. } = error else {
        panic!("expected a syntax error, got {error}");
    };
    // The offset lands just past the offending character.
    assert_eq!(offset, 8);
}

#[test]
fn truncated_unicode_escape_fails() {
    let error = object_error(r#"{"a": "\u00"}"#);
    assert!(error.to_string().contains("invalid unicode escape"));
}

#[test]
fn duplicate_keys_are_rejected() {
    let error = object_error(r#"{"a": 1, "a": 2}"#);
    let Error::DuplicateKey(key) = error else {
        panic!("expected a duplicate key error, got {error}");
    };
    assert_eq!(key, "a");
}

#[test]
fn duplicate_bare_and_quoted_keys_collide() {
    assert!(matches!(
        object_error(r#"{a: 1, "a": 2}"#),
        Error::DuplicateKey(_)
    ));
}
