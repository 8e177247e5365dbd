use crate::error::IctError;
use crate::model::hardware::HardwareRequirements;
use crate::model::io::{Io, IoSide};
use crate::model::metadata::Metadata;
use crate::model::ui::UiItem;
use crate::reader::ObjectReader;
use ict_core::FieldPath;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};

/// A validated tool description. Conversions read from it and produce new
/// documents; nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Specification {
    #[serde(flatten)]
    metadata: Metadata,
    inputs: Vec<Io>,
    outputs: Vec<Io>,
    ui: Vec<UiItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hardware: Option<HardwareRequirements>,
}

impl Specification {
    pub fn new(
        metadata: Metadata,
        inputs: Vec<Io>,
        outputs: Vec<Io>,
        ui: Vec<UiItem>,
        hardware: Option<HardwareRequirements>,
    ) -> Result<Self, IctError> {
        ensure_unique_names(IoSide::Inputs, &inputs)?;
        ensure_unique_names(IoSide::Outputs, &outputs)?;
        ensure_ui_matches_io(&ui, &inputs, &outputs)?;
        Ok(Self {
            metadata,
            inputs,
            outputs,
            ui,
            hardware,
        })
    }

    /// Builds a specification from its canonical mapping form.
    ///
    /// Metadata is checked first, then each input, output and UI item in
    /// order; the first field-level failure aborts the build. The cross-field
    /// checks run last.
    pub fn from_value(value: &Value) -> Result<Self, IctError> {
        let reader = ObjectReader::new(value, FieldPath::root())?;
        let metadata = Metadata::read(&reader)?;
        let inputs = read_io_list(&reader, IoSide::Inputs)?;
        let outputs = read_io_list(&reader, IoSide::Outputs)?;

        let ui_path = reader.field_path("ui");
        let ui = reader
            .required_array("ui")?
            .iter()
            .enumerate()
            .map(|(index, item)| UiItem::from_value(item, ui_path.index(index)))
            .collect::<Result<Vec<_>, _>>()?;

        let hardware = reader
            .get("hardware")
            .map(|value| HardwareRequirements::from_value(value, reader.field_path("hardware")))
            .transpose()?;

        Self::new(metadata, inputs, outputs, ui, hardware)
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn inputs(&self) -> &[Io] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Io] {
        &self.outputs
    }

    pub fn io(&self, side: IoSide) -> &[Io] {
        match side {
            IoSide::Inputs => &self.inputs,
            IoSide::Outputs => &self.outputs,
        }
    }

    pub fn ui(&self) -> &[UiItem] {
        &self.ui
    }

    pub fn hardware(&self) -> Option<&HardwareRequirements> {
        self.hardware.as_ref()
    }
}

fn read_io_list(reader: &ObjectReader<'_>, side: IoSide) -> Result<Vec<Io>, IctError> {
    let path = reader.field_path(side.as_str());
    reader
        .required_array(side.as_str())?
        .iter()
        .enumerate()
        .map(|(index, item)| Io::from_value(item, path.index(index)))
        .collect()
}

fn ensure_unique_names(side: IoSide, entries: &[Io]) -> Result<(), IctError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.name.as_str()) {
            return Err(IctError::DuplicateIoName {
                side,
                name: entry.name.clone(),
            });
        }
    }
    Ok(())
}

fn ensure_ui_matches_io(ui: &[UiItem], inputs: &[Io], outputs: &[Io]) -> Result<(), IctError> {
    let input_names = inputs.iter().map(|io| io.name.as_str()).collect::<HashSet<_>>();
    let output_names = outputs.iter().map(|io| io.name.as_str()).collect::<HashSet<_>>();

    let mut unmatched_inputs = BTreeSet::new();
    let mut unmatched_outputs = BTreeSet::new();
    for item in ui {
        let name = item.key.name();
        match item.key.side() {
            IoSide::Inputs if !input_names.contains(name) => {
                unmatched_inputs.insert(name.to_string());
            }
            IoSide::Outputs if !output_names.contains(name) => {
                unmatched_outputs.insert(name.to_string());
            }
            _ => {}
        }
    }

    if unmatched_inputs.is_empty() && unmatched_outputs.is_empty() {
        return Ok(());
    }
    Err(IctError::UiIoMismatch {
        inputs: unmatched_inputs.into_iter().collect(),
        outputs: unmatched_outputs.into_iter().collect(),
    })
}

#[cfg(test)]
#[path = "specification_test.rs"]
mod tests;
