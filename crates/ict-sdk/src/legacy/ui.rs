use super::io::strip_underscores;
use super::manifest::{WippInput, WippUi};
use crate::error::IctError;
use crate::model::{Condition, IoSide, UiItem, UiKey, UiKind};
use crate::reader::string_list;
use ict_core::FieldPath;
use serde_json::{Number, Value};

/// Legacy data types that live on disk and map to the `path` widget.
pub const COLLECTION_TYPES: &[&str] = &[
    "collection",
    "pyramid",
    "csvCollection",
    "genericData",
    "stitchingVector",
    "notebook",
    "tensorflowModel",
    "tensorboardLogs",
    "pyramidAnnotation",
];

const FIELDSETS_KEY: &str = "fieldsets";

/// Widget type for a legacy input type, or `None` when there is no mapping.
pub fn legacy_ui_type(input_type: &str) -> Option<&'static str> {
    if COLLECTION_TYPES.contains(&input_type) {
        return Some("path");
    }
    match input_type {
        "string" => Some("text"),
        "number" | "integer" => Some("number"),
        "boolean" => Some("checkbox"),
        "enum" => Some("select"),
        "array" => Some("multiselect"),
        _ => None,
    }
}

pub(crate) fn convert_ui(
    ui: &WippUi,
    inputs: &[WippInput],
    path: FieldPath,
) -> Result<UiItem, IctError> {
    if ui.key == FIELDSETS_KEY {
        return Err(IctError::UnsupportedUiConstruct {
            key: ui.key.clone(),
        });
    }

    let legacy_name = match ui.key.split_once('.') {
        Some(("inputs", name)) if !name.is_empty() => name,
        _ => {
            return Err(IctError::invalid_format(
                path.key("key"),
                ui.key.as_str(),
                "inputs.<parameter name>",
            ))
        }
    };

    let Some((input_index, input)) = inputs
        .iter()
        .enumerate()
        .find(|(_, input)| input.name == legacy_name)
    else {
        return Err(IctError::UiIoMismatch {
            inputs: vec![legacy_name.to_string()],
            outputs: Vec::new(),
        });
    };

    let Some(ui_type) = legacy_ui_type(&input.input_type) else {
        return Err(IctError::UnknownVariant {
            path: FieldPath::keys(&["inputs"]).index(input_index).key("type"),
            value: input.input_type.clone(),
            expected: "string, number, integer, boolean, enum, array or a collection type"
                .to_string(),
        });
    };

    let key = UiKey::new(IoSide::Inputs, strip_underscores(legacy_name));
    let key_text = key.to_string();
    let default = ui.default.as_ref().or(input.default.as_ref());

    let kind = match ui_type {
        "text" => UiKind::Text {
            default: None,
            regex: None,
            toolbar: None,
        },
        "number" => UiKind::Number {
            default: Some(number_default(default, &key_text, &path)?),
            integer: (input.input_type == "integer").then_some(true),
            range: None,
        },
        "checkbox" => UiKind::Checkbox {
            default: Some(checkbox_default(default, &key_text, &path)?),
        },
        "select" => UiKind::Select {
            fields: enum_values(input, &key_text, input_index)?,
            optional: None,
        },
        "multiselect" => UiKind::Multiselect {
            fields: enum_values(input, &key_text, input_index)?,
            optional: None,
            limit: None,
        },
        _ => UiKind::Path { ext: None },
    };

    let condition = ui
        .condition
        .as_deref()
        .map(|condition| Condition::parse_at(condition, path.key("condition")))
        .transpose()?;

    Ok(UiItem {
        title: ui.title.clone().unwrap_or_else(|| input.name.clone()),
        description: ui
            .description
            .clone()
            .or_else(|| input.description.clone())
            .unwrap_or_default(),
        key,
        custom_type: None,
        condition,
        kind,
    })
}

fn missing(key: &str, field: &str) -> IctError {
    IctError::MissingUiData {
        key: key.to_string(),
        field: field.to_string(),
    }
}

fn number_default(value: Option<&Value>, key: &str, path: &FieldPath) -> Result<Number, IctError> {
    match value {
        None => Err(missing(key, "default")),
        Some(Value::Number(number)) => Ok(number.clone()),
        Some(Value::String(text)) => parse_number(text).ok_or_else(|| {
            IctError::invalid_value(path.key("default"), format!("`{text}` is not a number"))
        }),
        Some(_) => Err(IctError::invalid_value(path.key("default"), "expected a number")),
    }
}

fn parse_number(text: &str) -> Option<Number> {
    let text = text.trim();
    if let Ok(integer) = text.parse::<i64>() {
        return Some(Number::from(integer));
    }
    text.parse::<f64>().ok().and_then(Number::from_f64)
}

fn checkbox_default(value: Option<&Value>, key: &str, path: &FieldPath) -> Result<bool, IctError> {
    match value {
        None => Err(missing(key, "default")),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(Value::String(text)) if text.eq_ignore_ascii_case("true") => Ok(true),
        Some(Value::String(text)) if text.eq_ignore_ascii_case("false") => Ok(false),
        Some(_) => Err(IctError::invalid_value(path.key("default"), "expected a boolean")),
    }
}

/// Choices of an enum-like legacy input, read from `options.values`.
fn enum_values(input: &WippInput, key: &str, input_index: usize) -> Result<Vec<String>, IctError> {
    let values = input
        .options
        .as_ref()
        .and_then(|options| options.get("values"))
        .and_then(Value::as_array)
        .ok_or_else(|| missing(key, "fields"))?;
    let path = FieldPath::keys(&["inputs"])
        .index(input_index)
        .key("options")
        .key("values");
    string_list(values, &path)
}

#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;
