use crate::error::IctError;
use ict_core::FieldPath;
use serde_json::{Map, Number, Value};

/// Typed, path-aware access to the fields of one JSON object.
///
/// `null` is treated the same as an absent key.
pub(crate) struct ObjectReader<'a> {
    object: &'a Map<String, Value>,
    path: FieldPath,
}

impl<'a> ObjectReader<'a> {
    pub(crate) fn new(value: &'a Value, path: FieldPath) -> Result<Self, IctError> {
        match value.as_object() {
            Some(object) => Ok(Self { object, path }),
            None => Err(IctError::invalid_value(path, "expected a mapping")),
        }
    }

    pub(crate) fn field_path(&self, key: &str) -> FieldPath {
        self.path.key(key)
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|value| !value.is_null())
    }

    pub(crate) fn required(&self, key: &str) -> Result<&'a Value, IctError> {
        self.get(key).ok_or_else(|| IctError::MissingField {
            path: self.field_path(key),
        })
    }

    pub(crate) fn required_str(&self, key: &str) -> Result<&'a str, IctError> {
        let value = self.required(key)?;
        value
            .as_str()
            .ok_or_else(|| IctError::invalid_value(self.field_path(key), "expected a string"))
    }

    pub(crate) fn optional_str(&self, key: &str) -> Result<Option<&'a str>, IctError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.as_str())),
            Some(_) => Err(IctError::invalid_value(
                self.field_path(key),
                "expected a string",
            )),
        }
    }

    pub(crate) fn required_bool(&self, key: &str) -> Result<bool, IctError> {
        self.optional_bool(key)?.ok_or_else(|| IctError::MissingField {
            path: self.field_path(key),
        })
    }

    pub(crate) fn optional_bool(&self, key: &str) -> Result<Option<bool>, IctError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Bool(flag)) => Ok(Some(*flag)),
            Some(_) => Err(IctError::invalid_value(
                self.field_path(key),
                "expected a boolean",
            )),
        }
    }

    pub(crate) fn optional_u64(&self, key: &str) -> Result<Option<u64>, IctError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value.as_u64().map(Some).ok_or_else(|| {
                IctError::invalid_value(self.field_path(key), "expected a non-negative integer")
            }),
        }
    }

    pub(crate) fn optional_number(&self, key: &str) -> Result<Option<Number>, IctError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Number(number)) => Ok(Some(number.clone())),
            Some(_) => Err(IctError::invalid_value(
                self.field_path(key),
                "expected a number",
            )),
        }
    }

    /// A string slot that also accepts numbers, stored as their decimal text.
    pub(crate) fn optional_coerced_str(&self, key: &str) -> Result<Option<String>, IctError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(Value::Number(number)) => Ok(Some(number.to_string())),
            Some(_) => Err(IctError::invalid_value(
                self.field_path(key),
                "expected a string or a number",
            )),
        }
    }

    pub(crate) fn required_array(&self, key: &str) -> Result<&'a Vec<Value>, IctError> {
        let value = self.required(key)?;
        value
            .as_array()
            .ok_or_else(|| IctError::invalid_value(self.field_path(key), "expected a list"))
    }

    pub(crate) fn required_string_list(&self, key: &str) -> Result<Vec<String>, IctError> {
        let items = self.required_array(key)?;
        string_list(items, &self.field_path(key))
    }

    pub(crate) fn optional_string_list(&self, key: &str) -> Result<Option<Vec<String>>, IctError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Array(items)) => string_list(items, &self.field_path(key)).map(Some),
            Some(_) => Err(IctError::invalid_value(
                self.field_path(key),
                "expected a list of strings",
            )),
        }
    }
}

pub(crate) fn string_list(items: &[Value], path: &FieldPath) -> Result<Vec<String>, IctError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| IctError::invalid_value(path.index(index), "expected a string"))
        })
        .collect()
}
