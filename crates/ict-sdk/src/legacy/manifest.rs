use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// WIPP plugin manifest, as published alongside legacy plugins.
///
/// Only the fields the converter reads are typed; everything else is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WippManifest {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub citation: Option<String>,
    #[serde(default)]
    pub container_id: Option<String>,
    #[serde(default)]
    pub base_command: Option<Vec<String>>,
    #[serde(default)]
    pub inputs: Vec<WippInput>,
    #[serde(default)]
    pub outputs: Vec<WippOutput>,
    #[serde(default)]
    pub ui: Vec<WippUi>,
    #[serde(default)]
    pub resource_requirements: Option<WippResourceRequirements>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WippInput {
    pub name: String,
    #[serde(rename = "type")]
    pub input_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Option<Map<String, Value>>,
    #[serde(default)]
    pub default: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WippOutput {
    pub name: String,
    #[serde(rename = "type")]
    pub output_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub options: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WippUi {
    pub key: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub default: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WippResourceRequirements {
    #[serde(default)]
    pub cores_min: Option<Value>,
    #[serde(default)]
    pub ram_min: Option<Number>,
    #[serde(default)]
    pub gpu: Option<bool>,
}

/// Reads the `format` option, if the legacy parameter declares one.
pub(crate) fn format_option(options: Option<&Map<String, Value>>) -> Option<String> {
    match options?.get("format")? {
        Value::String(format) => Some(format.clone()),
        _ => None,
    }
}
