mod convert;
mod document;

use serde::{Deserialize, Serialize};

pub use convert::{cwl_type, edam_format, to_cwl, to_cwl_with_options, WORKDIR_OUTPUT};
pub use document::{
    CommandLineTool, CwlInput, CwlOutput, CwlType, DockerRequirement, InitialWorkDirRequirement,
    InlineJavascriptRequirement, InputBinding, NetworkAccess, OutputBinding, Requirements,
    WorkDirEntry, CWL_VERSION, EDAM_NAMESPACE,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CwlOptions {
    /// Emit a `NetworkAccess` requirement.
    #[serde(default)]
    pub network_access: bool,
}
