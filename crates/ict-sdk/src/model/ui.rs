use crate::error::IctError;
use crate::model::io::IoSide;
use crate::reader::ObjectReader;
use ict_core::FieldPath;
use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt::{Display, Formatter};

const CONDITION_PATTERN: &str = r"^(inputs|outputs)\.\w+(==|!=|<|>|<=|>=|&&)\w+$";

const UI_TYPES: &str = "text, number, checkbox, select, multiselect, color, datetime, path, file";

/// `inputs.<name>` or `outputs.<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UiKey {
    side: IoSide,
    name: String,
}

impl UiKey {
    pub fn new(side: IoSide, name: impl Into<String>) -> Self {
        Self {
            side,
            name: name.into(),
        }
    }

    pub fn parse(value: &str) -> Result<Self, IctError> {
        Self::parse_at(value, FieldPath::keys(&["key"]))
    }

    pub(crate) fn parse_at(value: &str, path: FieldPath) -> Result<Self, IctError> {
        let parts = value.split('.').collect::<Vec<_>>();
        match parts.as_slice() {
            [side, name] if !name.is_empty() => match IoSide::parse(side) {
                Some(side) => Ok(Self::new(side, *name)),
                None => Err(key_format_error(value, path)),
            },
            _ => Err(key_format_error(value, path)),
        }
    }

    pub fn side(&self) -> IoSide {
        self.side
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn key_format_error(value: &str, path: FieldPath) -> IctError {
    IctError::invalid_format(path, value, "<inputs or outputs>.<parameter name>")
}

impl Display for UiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.side, self.name)
    }
}

impl Serialize for UiKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// `<inputs or outputs>.<name><operator><value>`, e.g. `inputs.method==otsu`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Condition(String);

impl Condition {
    pub fn parse(value: &str) -> Result<Self, IctError> {
        Self::parse_at(value, FieldPath::keys(&["condition"]))
    }

    pub(crate) fn parse_at(value: &str, path: FieldPath) -> Result<Self, IctError> {
        let pattern = Regex::new(CONDITION_PATTERN).expect("valid regex");
        if !pattern.is_match(value) {
            return Err(IctError::invalid_format(
                path,
                value,
                "<inputs or outputs>.<parameter name><operator><value>",
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// W3C date/time notes formats accepted by the datetime widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum W3Format {
    #[serde(rename = "YYYY")]
    Year,
    #[serde(rename = "YYYY-MM")]
    YearMonth,
    #[serde(rename = "YYYY-MM-DD")]
    CompleteDate,
    #[serde(rename = "YYYY-MM-DDThh:mmTZD")]
    CompleteDateTime,
    #[serde(rename = "YYYY-MM-DDThh:mm:ssTZD")]
    CompleteDateTimeSeconds,
    #[serde(rename = "YYYY-MM-DDThh:mm:ss.sTZD")]
    CompleteDateTimeFraction,
}

impl W3Format {
    const ALL: [W3Format; 6] = [
        W3Format::Year,
        W3Format::YearMonth,
        W3Format::CompleteDate,
        W3Format::CompleteDateTime,
        W3Format::CompleteDateTimeSeconds,
        W3Format::CompleteDateTimeFraction,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Year => "YYYY",
            Self::YearMonth => "YYYY-MM",
            Self::CompleteDate => "YYYY-MM-DD",
            Self::CompleteDateTime => "YYYY-MM-DDThh:mmTZD",
            Self::CompleteDateTimeSeconds => "YYYY-MM-DDThh:mm:ssTZD",
            Self::CompleteDateTimeFraction => "YYYY-MM-DDThh:mm:ss.sTZD",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum UiKind {
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        regex: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        toolbar: Option<bool>,
    },
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<Number>,
        #[serde(skip_serializing_if = "Option::is_none")]
        integer: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        range: Option<(Number, Number)>,
    },
    Checkbox {
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<bool>,
    },
    Select {
        fields: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        optional: Option<bool>,
    },
    Multiselect {
        fields: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        optional: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u64>,
    },
    /// RGB components.
    Color { fields: Vec<i64> },
    Datetime { format: W3Format },
    Path {
        #[serde(skip_serializing_if = "Option::is_none")]
        ext: Option<Vec<String>>,
    },
    File {
        #[serde(skip_serializing_if = "Option::is_none")]
        ext: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<u64>,
    },
}

impl UiKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Number { .. } => "number",
            Self::Checkbox { .. } => "checkbox",
            Self::Select { .. } => "select",
            Self::Multiselect { .. } => "multiselect",
            Self::Color { .. } => "color",
            Self::Datetime { .. } => "datetime",
            Self::Path { .. } => "path",
            Self::File { .. } => "file",
        }
    }

    fn read(reader: &ObjectReader<'_>, type_key: &str, ui_type: &str) -> Result<Self, IctError> {
        let kind = match ui_type {
            "text" => Self::Text {
                default: reader.optional_str("default")?.map(str::to_string),
                regex: reader.optional_str("regex")?.map(str::to_string),
                toolbar: reader.optional_bool("toolbar")?,
            },
            "number" => Self::Number {
                default: reader.optional_number("default")?,
                integer: reader.optional_bool("integer")?,
                range: read_range(reader)?,
            },
            "checkbox" => Self::Checkbox {
                default: reader.optional_bool("default")?,
            },
            "select" => Self::Select {
                fields: reader.required_string_list("fields")?,
                optional: reader.optional_bool("optional")?,
            },
            "multiselect" => Self::Multiselect {
                fields: reader.required_string_list("fields")?,
                optional: reader.optional_bool("optional")?,
                limit: reader.optional_u64("limit")?,
            },
            "color" => Self::Color {
                fields: read_color(reader)?,
            },
            "datetime" => {
                let raw = reader.required_str("format")?;
                let format = W3Format::parse(raw).ok_or_else(|| IctError::UnknownVariant {
                    path: reader.field_path("format"),
                    value: raw.to_string(),
                    expected: W3Format::ALL
                        .iter()
                        .map(|format| format.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                })?;
                Self::Datetime { format }
            }
            "path" => Self::Path {
                ext: reader.optional_string_list("ext")?,
            },
            "file" => Self::File {
                ext: reader.optional_string_list("ext")?,
                limit: reader.optional_u64("limit")?,
                size: reader.optional_u64("size")?,
            },
            other => {
                return Err(IctError::UnknownVariant {
                    path: reader.field_path(type_key),
                    value: other.to_string(),
                    expected: UI_TYPES.to_string(),
                })
            }
        };
        Ok(kind)
    }
}

fn read_range(reader: &ObjectReader<'_>) -> Result<Option<(Number, Number)>, IctError> {
    let Some(value) = reader.get("range") else {
        return Ok(None);
    };
    match value.as_array().map(Vec::as_slice) {
        Some([Value::Number(min), Value::Number(max)]) => Ok(Some((min.clone(), max.clone()))),
        _ => Err(IctError::invalid_value(
            reader.field_path("range"),
            "range must be a [min, max] pair of numbers",
        )),
    }
}

fn read_color(reader: &ObjectReader<'_>) -> Result<Vec<i64>, IctError> {
    let path = reader.field_path("fields");
    reader
        .required_array("fields")?
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_i64()
                .ok_or_else(|| IctError::invalid_value(path.index(index), "expected an integer"))
        })
        .collect()
}

/// One form widget bound to an input or output parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiItem {
    pub key: UiKey,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(flatten)]
    pub kind: UiKind,
}

impl UiItem {
    pub fn from_value(value: &Value, path: FieldPath) -> Result<Self, IctError> {
        let reader = ObjectReader::new(value, path)?;

        let type_key = match (reader.get("type"), reader.get("ui_type")) {
            (None, Some(_)) => "ui_type",
            _ => "type",
        };
        let ui_type = reader.required_str(type_key)?;

        let key = UiKey::parse_at(reader.required_str("key")?, reader.field_path("key"))?;
        let condition = reader
            .optional_str("condition")?
            .map(|condition| Condition::parse_at(condition, reader.field_path("condition")))
            .transpose()?;

        Ok(Self {
            key,
            title: reader.required_str("title")?.to_string(),
            description: reader.required_str("description")?.to_string(),
            custom_type: reader.optional_str("customType")?.map(str::to_string),
            condition,
            kind: UiKind::read(&reader, type_key, ui_type)?,
        })
    }
}

#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;
