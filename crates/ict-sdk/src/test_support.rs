use crate::legacy::WippManifest;
use serde_json::{json, Value};
use std::path::PathBuf;

pub(crate) fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Smallest document that passes validation, with one input and one output.
pub(crate) fn minimal_document() -> Value {
    json!({
        "specVersion": "0.1.0",
        "name": "wipp/threshold",
        "version": "1.1.1",
        "container": "wipp/wipp-thresh-plugin:1.1.1",
        "entrypoint": "python3 -m src.main",
        "author": ["Mohammed Ouladi"],
        "repository": "https://github.com/polusai/wipp-thresh-plugin",
        "inputs": [
            {
                "name": "inpDir",
                "type": "path",
                "required": true,
                "format": {"term": "Directory"}
            }
        ],
        "outputs": [
            {
                "name": "outDir",
                "type": "path",
                "required": true,
                "format": {"term": "Directory"}
            }
        ],
        "ui": [
            {
                "key": "inputs.inpDir",
                "title": "Input collection",
                "description": "Input collection",
                "type": "path"
            }
        ]
    })
}

pub(crate) fn set(document: &mut Value, key: &str, value: Value) {
    document
        .as_object_mut()
        .expect("document is a mapping")
        .insert(key.to_string(), value);
}

pub(crate) fn remove(document: &mut Value, key: &str) {
    document
        .as_object_mut()
        .expect("document is a mapping")
        .remove(key);
}

pub(crate) fn wipp_manifest_document() -> Value {
    serde_json::from_str(include_str!("../fixtures/wipp_plugin.json"))
        .expect("manifest fixture is valid json")
}

pub(crate) fn wipp_manifest() -> WippManifest {
    serde_json::from_value(wipp_manifest_document()).expect("manifest fixture matches the model")
}
