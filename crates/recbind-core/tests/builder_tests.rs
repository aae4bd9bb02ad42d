use std::str::FromStr;

use bigdecimal::BigDecimal;
use recbind_core::{record, record_to_json, to_json, JsonBuilder, JsonValue};

record! {
    pub struct Sample {
        id: i32,
        name: String,
    }
}

record! {
    pub struct Tagged {
        label: String,
    }
}

fn obj(entries: &[(&str, JsonValue)]) -> JsonValue {
    JsonValue::Object(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    )
}

// ============================================================================
// Structural API
// ============================================================================

#[test]
fn empty_object() {
    let mut jb = JsonBuilder::new();
    jb.begin_object();
    jb.end_object();
    assert_eq!(jb.as_str(), "{}");
}

#[test]
fn empty_array() {
    let mut jb = JsonBuilder::new();
    jb.begin_array();
    jb.end_array();
    assert_eq!(jb.as_str(), "[]");
}

#[test]
fn two_properties_get_one_comma() {
    let mut jb = JsonBuilder::new();
    jb.begin_object();
    jb.property("text");
    jb.begin_object();
    jb.end_object();
    jb.property("text2");
    jb.begin_object();
    jb.end_object();
    jb.end_object();
    assert_eq!(jb.as_str(), r#"{"text":{},"text2":{}}"#);
}

#[test]
fn property_values() {
    let mut jb = JsonBuilder::new();
    jb.begin_object();
    jb.property("text");
    jb.value(&JsonValue::from("asd"));
    jb.property("text2");
    jb.value(&JsonValue::Null);
    jb.property("int");
    jb.value(&JsonValue::Int(1));
    jb.end_object();
    assert_eq!(jb.as_str(), r#"{"text":"asd","text2":null,"int":1}"#);
}

#[test]
fn array_with_mixed_members() {
    let mut jb = JsonBuilder::new();
    jb.begin_array();
    jb.value(&JsonValue::Int(1));
    jb.value(&JsonValue::Int(3));
    jb.begin_object();
    jb.property("text");
    jb.value(&JsonValue::from("asd"));
    jb.end_object();
    jb.end_array();
    assert_eq!(jb.as_str(), r#"[1,3,{"text":"asd"}]"#);
}

// ============================================================================
// Value dispatch
// ============================================================================

#[test]
fn boolean_literal() {
    assert_eq!(to_json(&JsonValue::Bool(true)), "true");
    assert_eq!(to_json(&JsonValue::Bool(false)), "false");
}

#[test]
fn null_literal() {
    assert_eq!(to_json(&JsonValue::Null), "null");
}

#[test]
fn numbers_as_raw_literals() {
    assert_eq!(to_json(&JsonValue::Int(-42)), "-42");
    assert_eq!(to_json(&JsonValue::Long(3_000_000_000)), "3000000000");
    assert_eq!(
        to_json(&JsonValue::Decimal(BigDecimal::from_str("1.5").unwrap())),
        "1.5"
    );
}

#[test]
fn array_value() {
    let list = JsonValue::Array(vec![
        JsonValue::Int(1),
        JsonValue::Int(2),
        JsonValue::Int(3),
    ]);
    assert_eq!(to_json(&list), "[1,2,3]");
}

#[test]
fn map_value() {
    assert_eq!(
        to_json(&obj(&[("test", JsonValue::from("asd"))])),
        r#"{"test":"asd"}"#
    );
}

#[test]
fn nested_arrays_keep_single_commas() {
    let matrix = JsonValue::Array(vec![
        JsonValue::Array(vec![JsonValue::Int(1)]),
        JsonValue::Array(vec![JsonValue::Int(2)]),
    ]);
    assert_eq!(to_json(&matrix), "[[1],[2]]");
}

#[test]
fn objects_inside_array_keep_single_commas() {
    let items = JsonValue::Array(vec![
        obj(&[("a", JsonValue::Int(1))]),
        obj(&[("b", JsonValue::Int(2))]),
    ]);
    assert_eq!(to_json(&items), r#"[{"a":1},{"b":2}]"#);
}

#[test]
fn record_flattens_through_binder() {
    let sample = Sample {
        id: 1,
        name: "test".into(),
    };
    // Object key order is unspecified, so compare through a reference parser.
    let emitted: serde_json::Value = serde_json::from_str(&record_to_json(&sample)).unwrap();
    assert_eq!(emitted, serde_json::json!({"id": 1, "name": "test"}));
}

#[test]
fn single_field_record_is_exact() {
    let tagged = Tagged {
        label: "x".into(),
    };
    assert_eq!(record_to_json(&tagged), r#"{"label":"x"}"#);
}

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn property_name_escapes() {
    let mut jb = JsonBuilder::new();
    jb.begin_object();
    jb.property("property\"/</");
    jb.begin_object();
    jb.end_object();
    jb.end_object();
    assert_eq!(jb.as_str(), "{\"property\\\"/<\\/\":{}}");
}

#[test]
fn named_escapes() {
    let mut jb = JsonBuilder::new();
    jb.begin_object();
    jb.property("property\u{8}\t\n\u{c}\r");
    jb.begin_object();
    jb.end_object();
    jb.end_object();
    assert_eq!(jb.as_str(), "{\"property\\b\\t\\n\\f\\r\":{}}");
}

#[test]
fn low_control_chars_get_unicode_escapes() {
    let mut jb = JsonBuilder::new();
    jb.begin_object();
    jb.property("property\u{10}");
    jb.begin_object();
    jb.end_object();
    jb.end_object();
    assert_eq!(jb.as_str(), "{\"property\\u0010\":{}}");
}

#[test]
fn high_range_escapes_stop_at_range_ends() {
    // 0x80 and 0x2000 sit inside the escaped ranges; 0xa1 and 0x2101 are
    // the first characters past them and pass through verbatim.
    let mut jb = JsonBuilder::new();
    jb.begin_object();
    jb.property("property\u{80}\u{a1}\u{2000}\u{2101}");
    jb.begin_object();
    jb.end_object();
    jb.end_object();
    assert_eq!(jb.as_str(), "{\"property\\u0080\u{a1}\\u2000\u{2101}\":{}}");
}

#[test]
fn slash_unescaped_without_angle_bracket() {
    assert_eq!(
        to_json(&obj(&[("a", JsonValue::from("c/d"))])),
        r#"{"a":"c/d"}"#
    );
}

#[test]
fn slash_escaped_after_angle_bracket() {
    assert_eq!(to_json(&JsonValue::from("a</b")), "\"a<\\/b\"");
}

#[test]
fn emitted_escapes_are_standard_json() {
    // Everything the builder escapes is standards-compliant, so a reference
    // parser must read the original text back.
    let text = to_json(&JsonValue::from("a\nb\t\"c\"\u{10}\u{2042}"));
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, serde_json::json!("a\nb\t\"c\"\u{10}\u{2042}"));
}

#[test]
fn multiline_document_has_no_inserted_whitespace() {
    let value = obj(&[(
        "rows",
        JsonValue::Array(vec![JsonValue::Int(1), JsonValue::from("two")]),
    )]);
    assert_eq!(to_json(&value), r#"{"rows":[1,"two"]}"#);
}

// ============================================================================
// Builder state
// ============================================================================

#[test]
fn builder_can_accumulate_into_string() {
    let mut jb = JsonBuilder::new();
    jb.value(&JsonValue::Int(5));
    assert_eq!(jb.into_string(), "5");
}

#[test]
fn top_level_siblings_are_comma_separated() {
    // Unbracketed sibling values still get the separator; the builder does
    // not validate document shape.
    let mut jb = JsonBuilder::new();
    jb.value(&JsonValue::Int(1));
    jb.value(&JsonValue::Int(2));
    assert_eq!(jb.as_str(), "1,2");
}
