use super::DocumentFormat;
use crate::error::IctError;
use serde_json::Value;

/// Parses YAML and re-expresses it as a JSON value so both formats share
/// one validation path. Duplicate keys are rejected by the YAML parser.
pub(crate) fn parse_yaml(input: &str) -> Result<Value, IctError> {
    let yaml_value: serde_yaml::Value =
        serde_yaml::from_str(input).map_err(|err| IctError::Parse {
            format: DocumentFormat::Yaml,
            message: err.to_string(),
        })?;

    serde_json::to_value(yaml_value).map_err(|err| IctError::Parse {
        format: DocumentFormat::Yaml,
        message: format!("yaml-to-json conversion failed: {err}"),
    })
}
