use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

pub const CWL_VERSION: &str = "v1.2";
pub const EDAM_NAMESPACE: &str = "https://edamontology.org/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CwlType {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "double")]
    Double,
    #[serde(rename = "boolean")]
    Boolean,
    File,
    Directory,
}

impl CwlType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::File => "File",
            Self::Directory => "Directory",
        }
    }
}

impl Display for CwlType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputBinding {
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CwlInput {
    #[serde(rename = "inputBinding")]
    pub input_binding: InputBinding,
    /// CWL type with a trailing `?` when the parameter is optional.
    #[serde(rename = "type")]
    pub cwl_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputBinding {
    pub glob: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CwlOutput {
    #[serde(rename = "outputBinding")]
    pub output_binding: OutputBinding,
    #[serde(rename = "type")]
    pub cwl_type: CwlType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DockerRequirement {
    #[serde(rename = "dockerPull")]
    pub docker_pull: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkDirEntry {
    pub entry: String,
    pub writable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitialWorkDirRequirement {
    pub listing: Vec<WorkDirEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InlineJavascriptRequirement {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkAccess {
    #[serde(rename = "networkAccess")]
    pub network_access: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Requirements {
    #[serde(rename = "DockerRequirement")]
    pub docker: DockerRequirement,
    #[serde(
        rename = "InitialWorkDirRequirement",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_work_dir: Option<InitialWorkDirRequirement>,
    #[serde(
        rename = "InlineJavascriptRequirement",
        skip_serializing_if = "Option::is_none"
    )]
    pub inline_javascript: Option<InlineJavascriptRequirement>,
    #[serde(rename = "NetworkAccess", skip_serializing_if = "Option::is_none")]
    pub network_access: Option<NetworkAccess>,
}

impl Requirements {
    /// Requirement class names in emission order.
    pub fn class_names(&self) -> Vec<&'static str> {
        let mut names = vec!["DockerRequirement"];
        if self.initial_work_dir.is_some() {
            names.push("InitialWorkDirRequirement");
        }
        if self.inline_javascript.is_some() {
            names.push("InlineJavascriptRequirement");
        }
        if self.network_access.is_some() {
            names.push("NetworkAccess");
        }
        names
    }
}

/// A CWL v1.2 `CommandLineTool` in map form (inputs and outputs keyed by id).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandLineTool {
    pub class: &'static str,
    #[serde(rename = "cwlVersion")]
    pub cwl_version: &'static str,
    #[serde(rename = "$namespaces", skip_serializing_if = "BTreeMap::is_empty")]
    pub namespaces: BTreeMap<String, String>,
    #[serde(rename = "baseCommand")]
    pub base_command: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    pub inputs: BTreeMap<String, CwlInput>,
    pub outputs: BTreeMap<String, CwlOutput>,
    pub requirements: Requirements,
}

impl CommandLineTool {
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).expect("command line tool is serializable")
    }
}
