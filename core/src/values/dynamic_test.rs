//! Unit tests for the value domain.

use pretty_assertions::assert_eq;
use regex::Regex;

use super::dynamic::{Value, ValueKind};

#[test]
fn numeric_widths_normalize_to_f64() {
    assert_eq!(Value::from(7_u8), Value::Number(7.0));
    assert_eq!(Value::from(-3_i64), Value::Number(-3.0));
    assert_eq!(Value::from(2.5_f32), Value::Number(2.5));
    assert_eq!(Value::from(1_usize), Value::Number(1.0));
}

#[test]
fn text_and_unit_conversions() {
    assert_eq!(Value::from("abc"), Value::Str("abc".into()));
    assert_eq!(Value::from(String::from("abc")), Value::Str("abc".into()));
    assert_eq!(Value::from(()), Value::Null);
    assert_eq!(Value::from(b"abc".as_slice()), Value::Str("abc".into()));
}

#[test]
fn display_renders_the_canonical_text() {
    assert_eq!(Value::Null.to_string(), "");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Number(5.0).to_string(), "5");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
    assert_eq!(Value::Str("raw".into()).to_string(), "raw");
}

#[test]
fn containers_render_bracketed_with_quoted_strings() {
    let array = Value::Array(vec![Value::Number(1.0), Value::from("two"), Value::Null]);
    assert_eq!(array.to_string(), "[1, \"two\", null]");

    let map = Value::Map(vec![
        ("a".into(), Value::Number(1.0)),
        ("b".into(), Value::from("x")),
    ]);
    assert_eq!(map.to_string(), "{\"a\": 1, \"b\": \"x\"}");
}

#[test]
fn patterns_compare_by_source_text() {
    let a = Value::pattern(Regex::new("^x").unwrap());
    let b = Value::pattern(Regex::new("^x").unwrap());
    let c = Value::pattern(Regex::new("^y").unwrap());
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn values_of_different_kinds_are_never_equal() {
    assert_ne!(Value::Number(1.0), Value::Str("1".into()));
    assert_ne!(Value::Bool(false), Value::Null);
}

#[test]
fn map_entries_preserve_insertion_order() {
    let map = Value::Map(vec![
        ("first".into(), Value::Number(1.0)),
        ("second".into(), Value::Number(2.0)),
    ]);
    assert_eq!(map.map_entry("second"), Some(&Value::Number(2.0)));
    assert_eq!(map.map_entry("missing"), None);
}

#[test]
fn kind_names() {
    assert_eq!(Value::Null.kind(), ValueKind::Null);
    assert_eq!(Value::Number(0.0).kind().name(), "number");
    assert_eq!(Value::Str("".into()).kind().name(), "string");
    assert_eq!(Value::Array(vec![]).kind().name(), "array");
}
