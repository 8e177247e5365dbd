use super::{
    from_legacy, from_legacy_with_options, load_legacy, parse_manifest, LegacyOptions,
    LegacySource, DEFAULT_SPEC_VERSION,
};
use crate::cwl::to_cwl;
use crate::error::IctError;
use crate::model::{IoType, Specification, UiKind};
use crate::serialize::to_document;
use crate::test_support::{fixture_path, wipp_manifest, wipp_manifest_document};
use serde_json::{json, Map};
use std::path::PathBuf;

#[test]
fn fixture_manifest_converts() {
    let conversion = load_legacy(
        LegacySource::FilePath(fixture_path("wipp_plugin.json")),
        &LegacyOptions::default(),
    )
    .expect("fixture must convert");
    let spec = &conversion.specification;

    assert_eq!(spec.metadata().name.as_str(), "polusai/TheiaBleedthroughEstimation");
    assert_eq!(spec.metadata().spec_version.to_string(), DEFAULT_SPEC_VERSION);
    assert_eq!(
        spec.inputs().iter().map(|io| io.name.as_str()).collect::<Vec<_>>(),
        vec![
            "inpdir",
            "filepattern",
            "channelordering",
            "selectioncriterion",
            "kernelsize",
            "removeinteractions"
        ]
    );
    assert_eq!(spec.outputs()[0].name, "outdir");
    assert_eq!(spec.outputs()[0].io_type, IoType::Path);
    assert_eq!(
        spec.ui().iter().map(|item| item.kind.type_name()).collect::<Vec<_>>(),
        vec!["path", "text", "multiselect", "select", "number", "checkbox"]
    );
    assert!(matches!(
        spec.ui()[4].kind,
        UiKind::Number {
            integer: Some(true),
            ..
        }
    ));

    let hardware = spec.hardware().expect("resource requirements convert");
    assert_eq!(hardware.cpu.cpu_min.as_deref(), Some("2"));
    assert_eq!(hardware.memory.memory_min.as_deref(), Some("2048Mi"));
    assert_eq!(hardware.gpu.gpu_required, Some(false));

    assert_eq!(conversion.warnings.len(), 1);
    assert_eq!(
        conversion.warnings[0].reference.as_deref(),
        Some("legacy.metadata.citation_dropped")
    );
}

#[test]
fn converted_specification_is_valid_downstream() {
    let conversion = from_legacy(&wipp_manifest(), &Map::new()).expect("must convert");
    let spec = conversion.specification;

    let reloaded = Specification::from_value(&to_document(&spec)).expect("must reload");
    assert_eq!(reloaded, spec);

    let tool = to_cwl(&spec, false).expect("must convert to cwl");
    assert!(tool.inputs.contains_key("outdir"));
    assert_eq!(tool.inputs["kernelsize"].cwl_type, "double?");
}

#[test]
fn inline_and_file_sources_agree() {
    let options = LegacyOptions::default();
    let inline = load_legacy(LegacySource::InlineDocument(wipp_manifest_document()), &options)
        .expect("inline must convert");
    let from_file = load_legacy(LegacySource::FilePath(fixture_path("wipp_plugin.json")), &options)
        .expect("file must convert");
    assert_eq!(inline, from_file);
}

#[test]
fn only_json_manifests_are_read_from_disk() {
    let err = load_legacy(
        LegacySource::FilePath(PathBuf::from("plugin.yaml")),
        &LegacyOptions::default(),
    )
    .expect_err("must reject");
    assert!(matches!(err, IctError::UnsupportedFileExtension { .. }));
}

#[test]
fn spec_version_option_is_stamped() {
    let options = LegacyOptions {
        spec_version: "0.1.0".to_string(),
        ..LegacyOptions::default()
    };
    let conversion = from_legacy_with_options(&wipp_manifest(), &options).expect("must convert");
    assert_eq!(conversion.specification.metadata().spec_version.to_string(), "0.1.0");
}

#[test]
fn overrides_replace_derived_metadata() {
    let mut overrides = Map::new();
    overrides.insert("name".to_string(), json!("polusai/theia"));
    overrides.insert("citation".to_string(), json!("10.1038/s41592-019-0686-2"));
    let conversion = from_legacy(&wipp_manifest(), &overrides).expect("must convert");

    assert_eq!(conversion.specification.metadata().name.as_str(), "polusai/theia");
    assert!(conversion.warnings.is_empty());
}

#[test]
fn fieldsets_abort_the_conversion() {
    let mut document = wipp_manifest_document();
    document["ui"]
        .as_array_mut()
        .expect("ui list")
        .push(json!({"key": "fieldsets", "fieldsets": []}));
    let manifest = parse_manifest(document).expect("manifest must parse");

    let err = from_legacy(&manifest, &Map::new()).expect_err("must reject");
    assert!(matches!(err, IctError::UnsupportedUiConstruct { ref key } if key == "fieldsets"));
}

#[test]
fn warnings_are_sorted() {
    let mut manifest = wipp_manifest();
    manifest.author = Some("Prince".to_string());
    let conversion = from_legacy(&manifest, &Map::new()).expect("must convert");

    let messages = conversion
        .warnings
        .iter()
        .map(|warning| (warning.field_path.to_string(), warning.message.clone()))
        .collect::<Vec<_>>();
    let mut sorted = messages.clone();
    sorted.sort();
    assert_eq!(conversion.warnings.len(), 3);
    assert_eq!(messages, sorted);
}

#[test]
fn malformed_manifest_is_a_parse_error() {
    let err = parse_manifest(json!({"version": "1.0.0"})).expect_err("must reject");
    assert!(matches!(err, IctError::Parse { .. }));
}
