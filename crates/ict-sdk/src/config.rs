use crate::cwl::CwlOptions;
use crate::legacy::{LegacyOptions, METADATA_FIELDS};
use ict_core::{Diagnostic, FieldPath, Version};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IctConfig {
    #[serde(default)]
    pub cwl: CwlOptions,
    #[serde(default)]
    pub legacy: LegacyOptions,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read config failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse failed: {0}")]
    Parse(String),
    #[error("config validation failed: {0:?}")]
    Validation(Vec<Diagnostic>),
}

pub fn load_config(path: &Path) -> Result<IctConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let config: IctConfig = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&raw)
            .map_err(|error| ConfigError::Parse(format!("json decode error: {error}")))?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&raw)
            .map_err(|error| ConfigError::Parse(format!("yaml decode error: {error}")))?,
        _ => serde_yaml::from_str(&raw)
            .or_else(|_| serde_json::from_str(&raw))
            .map_err(|error| ConfigError::Parse(error.to_string()))?,
    };

    let mut diagnostics = validate_config(&config);
    if !diagnostics.is_empty() {
        Diagnostic::sort_stable(&mut diagnostics);
        return Err(ConfigError::Validation(diagnostics));
    }
    Ok(config)
}

pub fn validate_config(config: &IctConfig) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if let Err(error) = Version::parse(&config.legacy.spec_version) {
        diagnostics.push(Diagnostic::error(
            "config",
            FieldPath::keys(&["legacy", "spec_version"]),
            error.to_string(),
            "config.legacy.spec_version",
        ));
    }

    for field in config.legacy.overrides.keys() {
        if !METADATA_FIELDS.contains(&field.as_str()) {
            diagnostics.push(Diagnostic::error(
                "config",
                FieldPath::keys(&["legacy", "overrides"]).key(field.as_str()),
                format!("`{field}` is not a metadata field"),
                "config.legacy.overrides.unknown_field",
            ));
        }
    }

    diagnostics
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
