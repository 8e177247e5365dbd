use crate::model::{IoSide, IoType};
use crate::parse::DocumentFormat;
use ict_core::FieldPath;

#[derive(Debug, thiserror::Error)]
pub enum IctError {
    #[error("invalid format at {path}: `{value}` must match {expected}")]
    InvalidFormat {
        path: FieldPath,
        value: String,
        expected: String,
    },
    #[error("missing required field {path}")]
    MissingField { path: FieldPath },
    #[error("invalid value at {path}: {message}")]
    InvalidValue { path: FieldPath, message: String },
    #[error("unknown variant `{value}` at {path} (expected one of: {expected})")]
    UnknownVariant {
        path: FieldPath,
        value: String,
        expected: String,
    },
    #[error(
        "ui keys must match the inputs and outputs keys; unmatched inputs: {inputs:?}, unmatched outputs: {outputs:?}"
    )]
    UiIoMismatch {
        inputs: Vec<String>,
        outputs: Vec<String>,
    },
    #[error("duplicate {side} name `{name}`")]
    DuplicateIoName { side: IoSide, name: String },
    #[error("output `{name}` not found in inputs")]
    OutputNotInInputs { name: String },
    #[error("output `{name}` has type `{io_type}`; only path outputs convert to CWL")]
    UnsupportedOutputType { name: String, io_type: IoType },
    #[error("unsupported ui construct `{key}`")]
    UnsupportedUiConstruct { key: String },
    #[error("ui item `{key}` requires `{field}` but the legacy manifest does not provide it")]
    MissingUiData { key: String, field: String },
    #[error("unsupported file extension for `{path}` (expected .yaml, .yml or .json)")]
    UnsupportedFileExtension { path: String },
    #[error("bad extension for `{path}`: expected one of {expected:?}")]
    BadExtension {
        path: String,
        expected: Vec<&'static str>,
    },
    #[error("{format} parse failed: {message}")]
    Parse {
        format: DocumentFormat,
        message: String,
    },
    #[error("file access failed `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("serialization failed: {message}")]
    Serialize { message: String },
}

impl IctError {
    pub(crate) fn invalid_format(
        path: FieldPath,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            path,
            value: value.into(),
            expected: expected.into(),
        }
    }

    pub(crate) fn invalid_value(path: FieldPath, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            path,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
