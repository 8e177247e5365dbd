use crate::cwl::to_cwl;
use crate::error::IctError;
use crate::model::Specification;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CANONICAL_EXTENSIONS: &[&str] = &["yaml", "yml"];
const CWL_EXTENSIONS: &[&str] = &["cwl"];

/// Canonical mapping form; `Specification::from_value` accepts it back.
pub fn to_document(spec: &Specification) -> Value {
    serde_json::to_value(spec).expect("specification is serializable")
}

pub fn to_yaml_string(spec: &Specification) -> Result<String, IctError> {
    yaml_string(&to_document(spec))
}

/// Writes the canonical YAML form. The path must end in `.yaml` or `.yml`.
pub fn save_yaml(spec: &Specification, path: &Path) -> Result<PathBuf, IctError> {
    ensure_extension(path, CANONICAL_EXTENSIONS)?;
    write(path, &to_yaml_string(spec)?)
}

/// Writes the CWL `CommandLineTool` as YAML. The path must end in `.cwl`.
pub fn save_cwl(
    spec: &Specification,
    path: &Path,
    network_access: bool,
) -> Result<PathBuf, IctError> {
    ensure_extension(path, CWL_EXTENSIONS)?;
    let tool = to_cwl(spec, network_access)?;
    write(path, &yaml_string(&tool)?)
}

fn ensure_extension(path: &Path, expected: &[&'static str]) -> Result<(), IctError> {
    let extension = path.extension().and_then(|ext| ext.to_str());
    if extension.is_some_and(|ext| expected.contains(&ext)) {
        return Ok(());
    }
    Err(IctError::BadExtension {
        path: path.display().to_string(),
        expected: expected.to_vec(),
    })
}

fn yaml_string<T: Serialize>(value: &T) -> Result<String, IctError> {
    serde_yaml::to_string(value).map_err(|err| IctError::Serialize {
        message: err.to_string(),
    })
}

fn write(path: &Path, contents: &str) -> Result<PathBuf, IctError> {
    fs::write(path, contents).map_err(|source| IctError::io(path, source))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote document");
    Ok(path.to_path_buf())
}

#[cfg(test)]
#[path = "serialize_test.rs"]
mod tests;
