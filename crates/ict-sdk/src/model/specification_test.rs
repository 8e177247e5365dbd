use super::Specification;
use crate::error::IctError;
use crate::model::IoSide;
use crate::test_support::{minimal_document, remove, set};
use serde_json::json;

#[test]
fn minimal_document_is_valid() {
    let spec = Specification::from_value(&minimal_document()).expect("spec must validate");
    assert_eq!(spec.metadata().name.as_str(), "wipp/threshold");
    assert_eq!(spec.inputs().len(), 1);
    assert_eq!(spec.io(IoSide::Outputs)[0].name, "outDir");
    assert_eq!(spec.ui().len(), 1);
    assert!(spec.hardware().is_none());
}

#[test]
fn ui_for_unknown_parameters_lists_each_side() {
    let mut document = minimal_document();
    set(
        &mut document,
        "ui",
        json!([
            {"key": "inputs.inpDir", "title": "A", "description": "a", "type": "path"},
            {"key": "inputs.zeta", "title": "Z", "description": "z", "type": "text"},
            {"key": "inputs.alpha", "title": "A", "description": "a", "type": "text"},
            {"key": "outputs.missing", "title": "M", "description": "m", "type": "path"}
        ]),
    );
    let err = Specification::from_value(&document).expect_err("must reject");
    match err {
        IctError::UiIoMismatch { inputs, outputs } => {
            assert_eq!(inputs, vec!["alpha".to_string(), "zeta".to_string()]);
            assert_eq!(outputs, vec!["missing".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ui_may_cover_only_some_parameters() {
    let mut document = minimal_document();
    set(&mut document, "ui", json!([]));
    assert!(Specification::from_value(&document).is_ok());
}

#[test]
fn duplicate_names_on_one_side_are_rejected() {
    let mut document = minimal_document();
    let input = json!({"name": "inpDir", "type": "string", "required": false, "format": ["x"]});
    let inputs = document["inputs"].as_array_mut().expect("inputs list");
    inputs.push(input);
    let err = Specification::from_value(&document).expect_err("must reject");
    assert!(matches!(
        err,
        IctError::DuplicateIoName { side: IoSide::Inputs, ref name } if name == "inpDir"
    ));
}

#[test]
fn same_name_on_both_sides_is_allowed() {
    let mut document = minimal_document();
    set(
        &mut document,
        "outputs",
        json!([{"name": "inpDir", "type": "path", "required": true, "format": ["x"]}]),
    );
    assert!(Specification::from_value(&document).is_ok());
}

#[test]
fn missing_top_level_lists_are_reported() {
    for field in ["inputs", "outputs", "ui"] {
        let mut document = minimal_document();
        remove(&mut document, field);
        let err = Specification::from_value(&document).expect_err("must reject");
        assert!(
            matches!(err, IctError::MissingField { ref path } if path.to_string() == format!("$.{field}")),
            "unexpected error for {field}: {err}"
        );
    }
}

#[test]
fn metadata_errors_surface_before_io_errors() {
    let mut document = minimal_document();
    set(&mut document, "name", json!("threshold"));
    set(&mut document, "inputs", json!("not a list"));
    let err = Specification::from_value(&document).expect_err("must reject");
    assert!(matches!(err, IctError::InvalidFormat { ref path, .. } if path.to_string() == "$.name"));
}

#[test]
fn hardware_is_optional_and_read_when_present() {
    let mut document = minimal_document();
    set(&mut document, "hardware", json!({"gpu.required": true}));
    let spec = Specification::from_value(&document).expect("spec must validate");
    assert_eq!(
        spec.hardware().and_then(|hardware| hardware.gpu.gpu_required),
        Some(true)
    );
}
