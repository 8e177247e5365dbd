use crate::error::IctError;
use crate::reader::{string_list, ObjectReader};
use ict_core::FieldPath;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IoSide {
    Inputs,
    Outputs,
}

impl IoSide {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inputs => "inputs",
            Self::Outputs => "outputs",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "inputs" => Some(Self::Inputs),
            "outputs" => Some(Self::Outputs),
            _ => None,
        }
    }
}

impl Display for IoSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IoType {
    String,
    Number,
    Array,
    Boolean,
    Path,
}

impl IoType {
    pub const ALL: [IoType; 5] = [
        IoType::String,
        IoType::Number,
        IoType::Array,
        IoType::Boolean,
        IoType::Path,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Array => "array",
            Self::Boolean => "boolean",
            Self::Path => "path",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|io_type| io_type.as_str() == value)
    }
}

impl Display for IoType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire `format`: either a list of format names or an ontology mapping
/// carrying a `term` and an optional `uri`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IoFormat {
    List(Vec<String>),
    Ontology(Map<String, Value>),
}

impl IoFormat {
    pub fn term(&self) -> Option<&str> {
        self.mapping_str("term")
    }

    pub fn uri(&self) -> Option<&str> {
        self.mapping_str("uri")
    }

    fn mapping_str(&self, key: &str) -> Option<&str> {
        match self {
            Self::List(_) => None,
            Self::Ontology(mapping) => mapping.get(key).and_then(Value::as_str),
        }
    }

    fn read(value: &Value, path: FieldPath) -> Result<Self, IctError> {
        match value {
            Value::Array(items) => string_list(items, &path).map(Self::List),
            Value::Object(mapping) => Ok(Self::Ontology(mapping.clone())),
            _ => Err(IctError::invalid_value(
                path,
                "format must be a list of strings or a mapping",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Io {
    /// Used verbatim as the CLI flag (`--<name>`) and the CWL parameter id.
    pub name: String,
    #[serde(rename = "type")]
    pub io_type: IoType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "defaultValue", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    pub required: bool,
    #[serde(rename = "format")]
    pub io_format: IoFormat,
}

impl Io {
    pub fn from_value(value: &Value, path: FieldPath) -> Result<Self, IctError> {
        let reader = ObjectReader::new(value, path)?;

        let name = reader.required_str("name")?;
        if name.is_empty() {
            return Err(IctError::invalid_value(reader.field_path("name"), "name must not be empty"));
        }

        let raw_type = reader.required_str("type")?;
        let io_type = IoType::parse(raw_type).ok_or_else(|| IctError::UnknownVariant {
            path: reader.field_path("type"),
            value: raw_type.to_string(),
            expected: "string, number, array, boolean, path".to_string(),
        })?;

        let default_value = match reader.get("defaultValue") {
            None => None,
            Some(value @ (Value::String(_) | Value::Number(_) | Value::Bool(_))) => Some(value.clone()),
            Some(_) => {
                return Err(IctError::invalid_value(
                    reader.field_path("defaultValue"),
                    "default value must be a scalar",
                ))
            }
        };

        let io_format = IoFormat::read(reader.required("format")?, reader.field_path("format"))?;

        Ok(Self {
            name: name.to_string(),
            io_type,
            description: reader.optional_str("description")?.map(str::to_string),
            default_value,
            required: reader.required_bool("required")?,
            io_format,
        })
    }

    /// CWL marks a parameter optional unless it is required and has no default.
    pub fn is_optional(&self) -> bool {
        self.default_value.is_some() || !self.required
    }
}

#[cfg(test)]
#[path = "io_test.rs"]
mod tests;
