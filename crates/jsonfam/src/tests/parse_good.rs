use rstest::rstest;

use crate::{Family, Immutable, JsonArray, JsonObject, Value, Writable};

#[test]
fn strict_object_text() {
    let object = Writable::object_from_str(
        r#"{"name": "ada", "age": 36, "tags": [true, null], "meta": {"id": "x7"}}"#,
    )
    .unwrap();
    assert_eq!(object.len(), 4);
    assert_eq!(object.get_string("name").unwrap().as_deref(), Some("ada"));
    assert_eq!(object.get_i32("age").unwrap(), 36);
    let tags = object.get_array("tags").unwrap();
    assert_eq!(tags.len(), 2);
    assert!(tags.get_bool(0).unwrap());
    assert!(tags.is_null(1));
    assert_eq!(
        object.get_object("meta").unwrap().get_string("id").unwrap().as_deref(),
        Some("x7")
    );
}

#[test]
fn single_quotes_and_bare_words() {
    let object = Writable::object_from_str("{'a': 'b', c: d}").unwrap();
    assert_eq!(object.get_string("a").unwrap().as_deref(), Some("b"));
    assert_eq!(object.get_string("c").unwrap().as_deref(), Some("d"));
}

#[test]
fn equals_and_arrow_stand_in_for_colon() {
    let object = Writable::object_from_str("{a = 1, b => 2, c: 3}").unwrap();
    assert_eq!(object.get_i32("a").unwrap(), 1);
    assert_eq!(object.get_i32("b").unwrap(), 2);
    assert_eq!(object.get_i32("c").unwrap(), 3);
}

#[test]
fn semicolons_stand_in_for_commas() {
    let object = Writable::object_from_str("{a: 1; b: 2}").unwrap();
    assert_eq!(object.len(), 2);
    let array = Writable::array_from_str("[1; 2; 3]").unwrap();
    assert_eq!(array.len(), 3);
}

#[test]
fn trailing_separators_are_allowed() {
    assert_eq!(Writable::object_from_str("{a: 1,}").unwrap().len(), 1);
    assert_eq!(Writable::array_from_str("[1, 2,]").unwrap().len(), 2);
    assert_eq!(Writable::array_from_str("[1; 2;]").unwrap().len(), 2);
}

#[test]
fn elided_array_elements_become_nulls() {
    let array = Writable::array_from_str("[1,,3]").unwrap();
    assert_eq!(array.len(), 3);
    assert_eq!(array.get_i32(0).unwrap(), 1);
    assert!(array.is_null(1));
    assert_eq!(array.get_i32(2).unwrap(), 3);
}

#[test]
fn empty_containers() {
    assert!(Writable::object_from_str("{}").unwrap().is_empty());
    assert!(Writable::array_from_str("[]").unwrap().is_empty());
    assert!(Writable::array_from_str("[ ]").unwrap().is_empty());
}

#[test]
fn bare_tokens_keep_inner_spaces() {
    let object = Writable::object_from_str("{greeting: hello there , x: 1}").unwrap();
    assert_eq!(
        object.get_string("greeting").unwrap().as_deref(),
        Some("hello there")
    );
}

#[rstest]
#[case("0x1F", Value::Int(31))]
#[case("0X10", Value::Int(16))]
#[case("3.14", Value::Double(3.14))]
#[case("-2.5e2", Value::Double(-250.0))]
#[case("TRUE", Value::Bool(true))]
#[case("False", Value::Bool(false))]
#[case("NULL", Value::Null)]
#[case("42", Value::Int(42))]
#[case("2147483647", Value::Int(i32::MAX))]
#[case("2147483648", Value::Long(2_147_483_648))]
#[case("-2147483649", Value::Long(-2_147_483_649))]
#[case("+7", Value::Int(7))]
#[case("0x", Value::String("0x".to_owned()))]
#[case("12abc", Value::String("12abc".to_owned()))]
#[case("1e999", Value::String("1e999".to_owned()))]
fn bare_token_coercions(#[case] source: &str, #[case] expected: Value<Writable>) {
    assert_eq!(Writable::value_from_str(source).unwrap(), expected);
}

#[test]
fn quoting_defeats_coercion() {
    let array = Writable::array_from_str(r#"["true", "42", "null"]"#).unwrap();
    assert!(matches!(array.get(0).unwrap(), crate::ValueRef::Str("true")));
    assert!(matches!(array.get(1).unwrap(), crate::ValueRef::Str("42")));
    assert!(!array.is_null(2));
}

#[test]
fn escapes_decode() {
    let array = Writable::array_from_str(r#"["a\tb\n", "Aé", "sla\/sh \"q\" '"]"#).unwrap();
    assert_eq!(array.get_string(0).unwrap().as_deref(), Some("a\tb\n"));
    assert_eq!(array.get_string(1).unwrap().as_deref(), Some("Aé"));
    assert_eq!(array.get_string(2).unwrap().as_deref(), Some("sla/sh \"q\" '"));
}

#[test]
fn families_parse_the_same_document() {
    let source = r#"{"a": [1, {"b": null}], "c": 2.5}"#;
    let writable = Writable::object_from_str(source).unwrap();
    let immutable = Immutable::object_from_str(source).unwrap();
    assert_eq!(writable.view(), immutable.view());
    assert_eq!(writable.to_string(), immutable.to_string());
}

#[test]
fn parses_from_a_reader() {
    let source = r#"{"k": [1, 2]}"#;
    let from_reader = Writable::object_from_reader(source.as_bytes()).unwrap();
    let from_str = Writable::object_from_str(source).unwrap();
    assert_eq!(from_reader, from_str);
}

#[test]
fn scalar_roots_parse() {
    assert_eq!(
        Writable::value_from_str(" 'solo' ").unwrap(),
        Value::String("solo".to_owned())
    );
    assert_eq!(Writable::value_from_str(" 42 ").unwrap(), Value::Int(42));
}
