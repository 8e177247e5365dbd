use super::manifest::{format_option, WippInput, WippOutput};
use crate::model::{Io, IoFormat, IoType};

/// Legacy primitive types with a direct counterpart. Everything else
/// (collections, pyramids, models, ...) is a path on disk.
pub fn legacy_io_type(legacy_type: &str) -> IoType {
    match legacy_type {
        "string" | "enum" => IoType::String,
        "boolean" => IoType::Boolean,
        "number" | "integer" => IoType::Number,
        "array" => IoType::Array,
        _ => IoType::Path,
    }
}

/// Legacy names may contain underscores; converted names drop them.
pub fn strip_underscores(name: &str) -> String {
    name.replace('_', "")
}

pub(crate) fn convert_input(input: &WippInput) -> Io {
    Io {
        name: strip_underscores(&input.name),
        io_type: legacy_io_type(&input.input_type),
        description: input.description.clone(),
        default_value: None,
        required: input.required,
        io_format: io_format(&input.name, format_option(input.options.as_ref())),
    }
}

/// Outputs are always required.
pub(crate) fn convert_output(output: &WippOutput) -> Io {
    Io {
        name: strip_underscores(&output.name),
        io_type: legacy_io_type(&output.output_type),
        description: output.description.clone(),
        default_value: None,
        required: true,
        io_format: io_format(&output.name, format_option(output.options.as_ref())),
    }
}

/// Without an explicit format option the legacy name stands in as the format.
fn io_format(legacy_name: &str, format: Option<String>) -> IoFormat {
    IoFormat::List(vec![format.unwrap_or_else(|| legacy_name.to_string())])
}

#[cfg(test)]
#[path = "io_test.rs"]
mod tests;
