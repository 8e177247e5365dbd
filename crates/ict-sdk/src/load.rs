use crate::error::IctError;
use crate::model::Specification;
use crate::parse::{parse_text, DocumentFormat};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a specification document comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// An already-parsed mapping.
    InlineDocument(Value),
    /// A `.yaml`, `.yml` or `.json` file.
    FilePath(PathBuf),
}

pub fn load(source: Source) -> Result<Specification, IctError> {
    match source {
        Source::InlineDocument(value) => load_document(&value),
        Source::FilePath(path) => load_path(&path),
    }
}

pub fn load_document(value: &Value) -> Result<Specification, IctError> {
    let specification = Specification::from_value(value)?;
    debug!(
        name = %specification.metadata().name,
        inputs = specification.inputs().len(),
        outputs = specification.outputs().len(),
        ui = specification.ui().len(),
        "validated specification"
    );
    Ok(specification)
}

pub fn load_path(path: &Path) -> Result<Specification, IctError> {
    let value = read_document(path)?;
    load_document(&value)
}

/// Reads and parses a structured file, picking the parser from its extension.
pub(crate) fn read_document(path: &Path) -> Result<Value, IctError> {
    let format =
        DocumentFormat::from_path(path).ok_or_else(|| IctError::UnsupportedFileExtension {
            path: path.display().to_string(),
        })?;
    let raw = fs::read_to_string(path).map_err(|source| IctError::io(path, source))?;
    debug!(path = %path.display(), %format, bytes = raw.len(), "read document");
    parse_text(&raw, format)
}

#[cfg(test)]
#[path = "load_test.rs"]
mod tests;
