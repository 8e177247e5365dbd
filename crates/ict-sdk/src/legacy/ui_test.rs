use super::{convert_ui, legacy_ui_type, COLLECTION_TYPES};
use crate::error::IctError;
use crate::legacy::{WippInput, WippUi};
use crate::model::{IoSide, UiItem, UiKind};
use ict_core::FieldPath;
use serde_json::{json, Number, Value};

fn inputs() -> Vec<WippInput> {
    serde_json::from_value(json!([
        {"name": "inp_dir", "type": "collection", "description": "Input images"},
        {"name": "file_pattern", "type": "string"},
        {"name": "kernel_size", "type": "integer", "default": 3},
        {"name": "threshold", "type": "number"},
        {"name": "remove_interactions", "type": "boolean"},
        {"name": "method", "type": "enum", "options": {"values": ["Otsu", "Manual"]}},
        {"name": "channels", "type": "array", "options": {"values": ["ascending"]}},
        {"name": "flag", "type": "enum"},
        {"name": "mystery", "type": "hologram"}
    ]))
    .expect("inputs must parse")
}

fn convert(ui: Value) -> Result<UiItem, IctError> {
    let ui: WippUi = serde_json::from_value(ui).expect("ui must parse");
    convert_ui(&ui, &inputs(), FieldPath::keys(&["ui"]).index(0))
}

#[test]
fn widget_types_follow_the_input_type() {
    let cases = [
        ("string", Some("text")),
        ("number", Some("number")),
        ("integer", Some("number")),
        ("boolean", Some("checkbox")),
        ("enum", Some("select")),
        ("array", Some("multiselect")),
        ("hologram", None),
    ];
    for (input_type, expected) in cases {
        assert_eq!(legacy_ui_type(input_type), expected, "{input_type}");
    }
    for collection in COLLECTION_TYPES {
        assert_eq!(legacy_ui_type(collection), Some("path"));
    }
}

#[test]
fn collection_input_becomes_a_path_widget() {
    let item = convert(json!({"key": "inputs.inp_dir", "title": "Input collection"}))
        .expect("must convert");
    assert_eq!(item.key.side(), IoSide::Inputs);
    assert_eq!(item.key.name(), "inpdir");
    assert_eq!(item.title, "Input collection");
    assert_eq!(item.description, "Input images");
    assert_eq!(item.kind, UiKind::Path { ext: None });
}

#[test]
fn title_and_description_have_fallbacks() {
    let item = convert(json!({"key": "inputs.file_pattern"})).expect("must convert");
    assert_eq!(item.title, "file_pattern");
    assert_eq!(item.description, "");
    assert_eq!(item.kind.type_name(), "text");
}

#[test]
fn integer_number_uses_input_default() {
    let item = convert(json!({"key": "inputs.kernel_size"})).expect("must convert");
    assert_eq!(
        item.kind,
        UiKind::Number {
            default: Some(Number::from(3)),
            integer: Some(true),
            range: None,
        }
    );
}

#[test]
fn numeric_string_default_is_parsed() {
    let item = convert(json!({"key": "inputs.threshold", "default": "0.5"})).expect("must convert");
    match item.kind {
        UiKind::Number { default, integer, .. } => {
            assert_eq!(default.and_then(|number| number.as_f64()), Some(0.5));
            assert_eq!(integer, None);
        }
        other => panic!("unexpected widget: {other:?}"),
    }

    let err = convert(json!({"key": "inputs.threshold", "default": "half"})).expect_err("must reject");
    assert!(matches!(err, IctError::InvalidValue { ref path, .. } if path.to_string() == "$.ui[0].default"));
}

#[test]
fn checkbox_accepts_boolean_strings() {
    let item = convert(json!({"key": "inputs.remove_interactions", "default": "True"}))
        .expect("must convert");
    assert_eq!(item.kind, UiKind::Checkbox { default: Some(true) });
}

#[test]
fn number_and_checkbox_need_a_default() {
    for key in ["inputs.threshold", "inputs.remove_interactions"] {
        let err = convert(json!({"key": key})).expect_err("must reject");
        assert!(
            matches!(err, IctError::MissingUiData { ref field, .. } if field == "default"),
            "{key}: {err}"
        );
    }
}

#[test]
fn select_fields_come_from_option_values() {
    let item = convert(json!({"key": "inputs.method", "condition": "inputs.flag==on"}))
        .expect("must convert");
    assert_eq!(
        item.kind,
        UiKind::Select {
            fields: vec!["Otsu".to_string(), "Manual".to_string()],
            optional: None,
        }
    );
    assert!(item.condition.is_some());

    let item = convert(json!({"key": "inputs.channels"})).expect("must convert");
    assert_eq!(item.kind.type_name(), "multiselect");

    let err = convert(json!({"key": "inputs.flag"})).expect_err("must reject");
    assert!(matches!(
        err,
        IctError::MissingUiData { ref key, ref field } if key == "inputs.flag" && field == "fields"
    ));
}

#[test]
fn unsupported_shapes_are_rejected() {
    let err = convert(json!({"key": "fieldsets"})).expect_err("must reject");
    assert!(matches!(err, IctError::UnsupportedUiConstruct { ref key } if key == "fieldsets"));

    let err = convert(json!({"key": "outputs.out_dir"})).expect_err("must reject");
    assert!(matches!(err, IctError::InvalidFormat { ref path, .. } if path.to_string() == "$.ui[0].key"));

    let err = convert(json!({"key": "inputs.ghost"})).expect_err("must reject");
    assert!(matches!(
        err,
        IctError::UiIoMismatch { ref inputs, ref outputs } if inputs == &vec!["ghost".to_string()] && outputs.is_empty()
    ));

    let err = convert(json!({"key": "inputs.mystery"})).expect_err("must reject");
    assert!(matches!(
        err,
        IctError::UnknownVariant { ref path, ref value, .. }
            if path.to_string() == "$.inputs[8].type" && value == "hologram"
    ));

    let err = convert(json!({"key": "inputs.method", "condition": "method is Otsu"}))
        .expect_err("must reject");
    assert!(matches!(err, IctError::InvalidFormat { .. }));
}
