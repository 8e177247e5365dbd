//! Validation and conversion of ICT tool specifications.
//!
//! A specification is loaded from a mapping or a YAML/JSON file, validated
//! into a [`Specification`], and from there converted to a CWL
//! `CommandLineTool` or written back in canonical form. Legacy WIPP plugin
//! manifests convert into specifications through [`legacy`].

pub mod config;
pub mod cwl;
mod error;
pub mod legacy;
mod load;
pub mod model;
mod parse;
mod reader;
mod serialize;

#[cfg(test)]
mod test_support;

pub use config::{load_config, validate_config, ConfigError, IctConfig};
pub use cwl::{to_cwl, to_cwl_with_options, CommandLineTool, CwlOptions};
pub use error::IctError;
pub use legacy::{
    from_legacy, from_legacy_with_options, load_legacy, LegacyConversion, LegacyOptions,
    LegacySource, WippManifest,
};
pub use load::{load, load_document, load_path, Source};
pub use model::{
    HardwareRequirements, Io, IoFormat, IoSide, IoType, Metadata, Specification, UiItem, UiKey,
    UiKind,
};
pub use parse::{parse_text, DocumentFormat};
pub use serialize::{save_cwl, save_yaml, to_document, to_yaml_string};

pub use ict_core::{Diagnostic, DiagnosticSeverity, FieldPath, Version};
