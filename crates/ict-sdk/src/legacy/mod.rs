//! Conversion from WIPP plugin manifests.
//!
//! Metadata derivation is lenient: a name, author or contact that cannot be
//! derived is replaced with a placeholder and reported as a warning
//! diagnostic. Every other failure aborts the conversion.

mod hardware;
mod io;
mod manifest;
mod metadata;
mod ui;

use crate::error::IctError;
use crate::load::read_document;
use crate::model::Specification;
use crate::parse::DocumentFormat;
use ict_core::{Diagnostic, FieldPath};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::debug;

pub use io::{legacy_io_type, strip_underscores};
pub use manifest::{WippInput, WippManifest, WippOutput, WippResourceRequirements, WippUi};
pub use metadata::{METADATA_FIELDS, PLACEHOLDER_AUTHOR, PLACEHOLDER_CONTACT, PLACEHOLDER_NAME};
pub use ui::{legacy_ui_type, COLLECTION_TYPES};

pub const DEFAULT_SPEC_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyOptions {
    /// `specVersion` stamped on converted documents.
    #[serde(default = "default_spec_version")]
    pub spec_version: String,
    /// Metadata fields that supersede the derived values.
    #[serde(default)]
    pub overrides: Map<String, Value>,
}

impl Default for LegacyOptions {
    fn default() -> Self {
        Self {
            spec_version: default_spec_version(),
            overrides: Map::new(),
        }
    }
}

fn default_spec_version() -> String {
    DEFAULT_SPEC_VERSION.to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub enum LegacySource {
    InlineDocument(Value),
    /// A `.json` manifest on disk.
    FilePath(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegacyConversion {
    pub specification: Specification,
    pub warnings: Vec<Diagnostic>,
}

pub fn from_legacy(
    manifest: &WippManifest,
    overrides: &Map<String, Value>,
) -> Result<LegacyConversion, IctError> {
    let options = LegacyOptions {
        overrides: overrides.clone(),
        ..LegacyOptions::default()
    };
    from_legacy_with_options(manifest, &options)
}

pub fn from_legacy_with_options(
    manifest: &WippManifest,
    options: &LegacyOptions,
) -> Result<LegacyConversion, IctError> {
    let mut warnings = Vec::new();
    let metadata = metadata::convert_metadata(manifest, options, &mut warnings)?;

    let inputs = manifest.inputs.iter().map(io::convert_input).collect();
    let outputs = manifest.outputs.iter().map(io::convert_output).collect();

    let ui_path = FieldPath::keys(&["ui"]);
    let ui = manifest
        .ui
        .iter()
        .enumerate()
        .map(|(index, item)| ui::convert_ui(item, &manifest.inputs, ui_path.index(index)))
        .collect::<Result<Vec<_>, _>>()?;

    let hardware = manifest
        .resource_requirements
        .as_ref()
        .map(hardware::convert_hardware)
        .transpose()?;

    let specification = Specification::new(metadata, inputs, outputs, ui, hardware)?;
    Diagnostic::sort_stable(&mut warnings);
    debug!(
        legacy_name = %manifest.name,
        name = %specification.metadata().name,
        warnings = warnings.len(),
        "converted legacy manifest"
    );
    Ok(LegacyConversion {
        specification,
        warnings,
    })
}

pub fn load_legacy(
    source: LegacySource,
    options: &LegacyOptions,
) -> Result<LegacyConversion, IctError> {
    let value = match source {
        LegacySource::InlineDocument(value) => value,
        LegacySource::FilePath(path) => {
            if DocumentFormat::from_path(&path) != Some(DocumentFormat::Json) {
                return Err(IctError::UnsupportedFileExtension {
                    path: path.display().to_string(),
                });
            }
            read_document(&path)?
        }
    };
    let manifest = parse_manifest(value)?;
    from_legacy_with_options(&manifest, options)
}

pub fn parse_manifest(value: Value) -> Result<WippManifest, IctError> {
    serde_json::from_value(value).map_err(|err| IctError::Parse {
        format: DocumentFormat::Json,
        message: format!("legacy manifest: {err}"),
    })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
