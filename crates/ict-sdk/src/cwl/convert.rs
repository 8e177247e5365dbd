use super::document::{
    CommandLineTool, CwlInput, CwlOutput, CwlType, DockerRequirement, InitialWorkDirRequirement,
    InlineJavascriptRequirement, InputBinding, NetworkAccess, OutputBinding, Requirements,
    WorkDirEntry, CWL_VERSION, EDAM_NAMESPACE,
};
use super::CwlOptions;
use crate::error::IctError;
use crate::model::{Io, IoSide, IoType, Specification};
use ict_core::FieldPath;
use std::collections::BTreeMap;
use tracing::debug;

/// Output whose presence makes the working directory writable and turns on
/// inline JavaScript for the `$(...)` glob expressions.
pub const WORKDIR_OUTPUT: &str = "outDir";

pub fn to_cwl(spec: &Specification, network_access: bool) -> Result<CommandLineTool, IctError> {
    to_cwl_with_options(spec, &CwlOptions { network_access })
}

pub fn to_cwl_with_options(
    spec: &Specification,
    options: &CwlOptions,
) -> Result<CommandLineTool, IctError> {
    let metadata = spec.metadata();

    // Outputs are re-declared as inputs so CWL can template their paths.
    // An output sharing a name with an input replaces that input's entry.
    let inputs = spec
        .inputs()
        .iter()
        .chain(spec.outputs())
        .map(|io| (io.name.clone(), input_to_cwl(io)))
        .collect::<BTreeMap<_, _>>();

    let outputs_path = FieldPath::keys(&[IoSide::Outputs.as_str()]);
    let outputs = spec
        .outputs()
        .iter()
        .enumerate()
        .map(|(index, io)| {
            output_to_cwl(io, outputs_path.index(index), &inputs)
                .map(|output| (io.name.clone(), output))
        })
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    let uses_formats = inputs.values().any(|input| input.format.is_some())
        || outputs.values().any(|output| output.format.is_some());
    let mut namespaces = BTreeMap::new();
    if uses_formats {
        namespaces.insert("edam".to_string(), EDAM_NAMESPACE.to_string());
    }

    let requirements = requirements(spec, options);
    debug!(
        name = %metadata.name,
        inputs = inputs.len(),
        outputs = outputs.len(),
        requirements = ?requirements.class_names(),
        "converted specification to CWL"
    );

    Ok(CommandLineTool {
        class: "CommandLineTool",
        cwl_version: CWL_VERSION,
        namespaces,
        base_command: metadata.entrypoint.clone(),
        label: metadata.title.clone(),
        doc: metadata
            .description
            .clone()
            .or_else(|| metadata.documentation.as_ref().map(|url| url.as_str().to_string())),
        inputs,
        outputs,
        requirements,
    })
}

/// `path` always narrows to `Directory`; file-versus-directory is only
/// decided for outputs, from their format term.
pub fn cwl_type(io_type: IoType) -> CwlType {
    match io_type {
        IoType::String | IoType::Array => CwlType::String,
        IoType::Number => CwlType::Double,
        IoType::Boolean => CwlType::Boolean,
        IoType::Path => CwlType::Directory,
    }
}

/// `http://edamontology.org/format_1234` becomes `edam:format_1234`.
pub fn edam_format(uri: &str) -> String {
    let suffix = uri.rsplit('_').next().unwrap_or(uri);
    format!("edam:format_{suffix}")
}

pub(crate) fn input_to_cwl(io: &Io) -> CwlInput {
    let suffix = if io.is_optional() { "?" } else { "" };
    CwlInput {
        input_binding: InputBinding {
            prefix: format!("--{}", io.name),
        },
        cwl_type: format!("{}{suffix}", cwl_type(io.io_type)),
        format: io.io_format.uri().map(edam_format),
        default: io.default_value.clone(),
    }
}

/// `path` is the output's location in the specification, used for errors.
pub(crate) fn output_to_cwl(
    io: &Io,
    path: FieldPath,
    cwl_inputs: &BTreeMap<String, CwlInput>,
) -> Result<CwlOutput, IctError> {
    if io.io_type != IoType::Path {
        return Err(IctError::UnsupportedOutputType {
            name: io.name.clone(),
            io_type: io.io_type,
        });
    }
    if !cwl_inputs.contains_key(&io.name) {
        return Err(IctError::OutputNotInInputs {
            name: io.name.clone(),
        });
    }

    let cwl_type = match io.io_format.term() {
        None => CwlType::Directory,
        Some(term) => output_term_type(term, path)?,
    };

    Ok(CwlOutput {
        output_binding: OutputBinding {
            glob: format!("$(inputs.{}.basename)", io.name),
        },
        cwl_type,
        format: io.io_format.uri().map(edam_format),
    })
}

/// A present term must name `file` or `directory`; a format without a term
/// (the list form) is a directory.
fn output_term_type(term: &str, path: FieldPath) -> Result<CwlType, IctError> {
    match term.to_ascii_lowercase().as_str() {
        "file" => Ok(CwlType::File),
        "directory" => Ok(CwlType::Directory),
        _ => Err(IctError::UnknownVariant {
            path: path.key("format").key("term"),
            value: term.to_string(),
            expected: "file, directory".to_string(),
        }),
    }
}

fn requirements(spec: &Specification, options: &CwlOptions) -> Requirements {
    let has_workdir_output = spec.outputs().iter().any(|io| io.name == WORKDIR_OUTPUT);
    Requirements {
        docker: DockerRequirement {
            docker_pull: spec.metadata().container.as_str().to_string(),
        },
        initial_work_dir: has_workdir_output.then(|| InitialWorkDirRequirement {
            listing: vec![WorkDirEntry {
                entry: format!("$(inputs.{WORKDIR_OUTPUT})"),
                writable: true,
            }],
        }),
        inline_javascript: has_workdir_output.then(InlineJavascriptRequirement::default),
        network_access: options.network_access.then_some(NetworkAccess {
            network_access: true,
        }),
    }
}

#[cfg(test)]
#[path = "convert_test.rs"]
mod tests;
