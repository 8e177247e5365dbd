use super::manifest::WippResourceRequirements;
use crate::error::IctError;
use crate::model::{Cpu, Gpu, HardwareRequirements, Memory};
use ict_core::FieldPath;
use serde_json::Value;

/// `coresMin` → cpu min, `ramMin` (MiB) → memory min as `<n>Mi`, `gpu` → gpu
/// required. Nothing else in the legacy format has a counterpart.
pub(crate) fn convert_hardware(
    requirements: &WippResourceRequirements,
) -> Result<HardwareRequirements, IctError> {
    let cpu_min = match &requirements.cores_min {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(_) => {
            return Err(IctError::invalid_value(
                FieldPath::keys(&["resourceRequirements", "coresMin"]),
                "expected a string or a number",
            ))
        }
    };

    Ok(HardwareRequirements {
        cpu: Cpu {
            cpu_min,
            ..Cpu::default()
        },
        memory: Memory {
            memory_min: requirements.ram_min.as_ref().map(|ram| format!("{ram}Mi")),
            ..Memory::default()
        },
        gpu: Gpu {
            gpu_required: requirements.gpu,
            ..Gpu::default()
        },
    })
}

#[cfg(test)]
#[path = "hardware_test.rs"]
mod tests;
