use super::{convert_input, convert_output, legacy_io_type, strip_underscores};
use crate::legacy::{WippInput, WippOutput, COLLECTION_TYPES};
use crate::model::{IoFormat, IoType};
use serde_json::json;

#[test]
fn legacy_types_map_to_io_types() {
    let cases = [
        ("string", IoType::String),
        ("enum", IoType::String),
        ("boolean", IoType::Boolean),
        ("number", IoType::Number),
        ("integer", IoType::Number),
        ("array", IoType::Array),
        ("unknownThing", IoType::Path),
    ];
    for (legacy, expected) in cases {
        assert_eq!(legacy_io_type(legacy), expected, "{legacy}");
    }
    for collection in COLLECTION_TYPES {
        assert_eq!(legacy_io_type(collection), IoType::Path, "{collection}");
    }
}

#[test]
fn names_lose_their_underscores() {
    assert_eq!(strip_underscores("inp_dir"), "inpdir");
    assert_eq!(strip_underscores("__x__y"), "xy");
    assert_eq!(strip_underscores("plain"), "plain");
}

#[test]
fn input_keeps_required_and_uses_format_option() {
    let input: WippInput = serde_json::from_value(json!({
        "name": "file_pattern",
        "type": "string",
        "description": "Pattern",
        "required": true,
        "options": {"format": "filePattern"}
    }))
    .expect("input must parse");
    let io = convert_input(&input);

    assert_eq!(io.name, "filepattern");
    assert_eq!(io.io_type, IoType::String);
    assert!(io.required);
    assert_eq!(io.description.as_deref(), Some("Pattern"));
    assert_eq!(io.io_format, IoFormat::List(vec!["filePattern".to_string()]));
    assert_eq!(io.default_value, None);
}

#[test]
fn legacy_name_is_the_fallback_format() {
    let input: WippInput =
        serde_json::from_value(json!({"name": "inp_dir", "type": "collection"})).expect("parse");
    let io = convert_input(&input);
    assert!(!io.required);
    assert_eq!(io.io_format, IoFormat::List(vec!["inp_dir".to_string()]));
}

#[test]
fn outputs_are_always_required() {
    let output: WippOutput =
        serde_json::from_value(json!({"name": "out_dir", "type": "genericData"})).expect("parse");
    let io = convert_output(&output);
    assert_eq!(io.name, "outdir");
    assert_eq!(io.io_type, IoType::Path);
    assert!(io.required);
}
