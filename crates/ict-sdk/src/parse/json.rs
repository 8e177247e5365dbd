use super::DocumentFormat;
use crate::error::IctError;
use serde_json::Value;

pub(crate) fn parse_json(input: &str) -> Result<Value, IctError> {
    serde_json::from_str::<Value>(input).map_err(|err| IctError::Parse {
        format: DocumentFormat::Json,
        message: err.to_string(),
    })
}
