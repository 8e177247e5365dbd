use crate::error::IctError;
use crate::reader::ObjectReader;
use ict_core::FieldPath;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cpu {
    /// Processor constraint, e.g. `arm64`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub cpu_type: Option<String>,
    /// Minimum allocation; `100m` is a tenth of a core.
    #[serde(rename = "min", skip_serializing_if = "Option::is_none")]
    pub cpu_min: Option<String>,
    #[serde(rename = "recommended", skip_serializing_if = "Option::is_none")]
    pub cpu_recommended: Option<String>,
}

impl Cpu {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Memory {
    /// Minimum allocation, e.g. `129Mi`.
    #[serde(rename = "min", skip_serializing_if = "Option::is_none")]
    pub memory_min: Option<String>,
    #[serde(rename = "recommended", skip_serializing_if = "Option::is_none")]
    pub memory_recommended: Option<String>,
}

impl Memory {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Gpu {
    #[serde(rename = "enabled", skip_serializing_if = "Option::is_none")]
    pub gpu_enabled: Option<bool>,
    #[serde(rename = "required", skip_serializing_if = "Option::is_none")]
    pub gpu_required: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub gpu_type: Option<String>,
}

impl Gpu {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HardwareRequirements {
    #[serde(skip_serializing_if = "Cpu::is_empty")]
    pub cpu: Cpu,
    #[serde(skip_serializing_if = "Memory::is_empty")]
    pub memory: Memory,
    #[serde(skip_serializing_if = "Gpu::is_empty")]
    pub gpu: Gpu,
}

impl HardwareRequirements {
    /// Accepts the nested form (`cpu: {min: ..}`) and the flat dotted form
    /// (`cpu.min: ..`). A dotted key wins over its nested counterpart.
    pub fn from_value(value: &Value, path: FieldPath) -> Result<Self, IctError> {
        let reader = ObjectReader::new(value, path)?;
        let cpu = Group::open(&reader, "cpu")?;
        let memory = Group::open(&reader, "memory")?;
        let gpu = Group::open(&reader, "gpu")?;

        Ok(Self {
            cpu: Cpu {
                cpu_type: cpu.coerced_str("type")?,
                cpu_min: cpu.coerced_str("min")?,
                cpu_recommended: cpu.coerced_str("recommended")?,
            },
            memory: Memory {
                memory_min: memory.coerced_str("min")?,
                memory_recommended: memory.coerced_str("recommended")?,
            },
            gpu: Gpu {
                gpu_enabled: gpu.bool("enabled")?,
                gpu_required: gpu.bool("required")?,
                gpu_type: gpu.coerced_str("type")?,
            },
        })
    }

    pub fn is_empty(&self) -> bool {
        self.cpu.is_empty() && self.memory.is_empty() && self.gpu.is_empty()
    }
}

struct Group<'r, 'a> {
    parent: &'r ObjectReader<'a>,
    prefix: &'static str,
    nested: Option<ObjectReader<'a>>,
}

impl<'r, 'a> Group<'r, 'a> {
    fn open(parent: &'r ObjectReader<'a>, prefix: &'static str) -> Result<Self, IctError> {
        let nested = parent
            .get(prefix)
            .map(|value| ObjectReader::new(value, parent.field_path(prefix)))
            .transpose()?;
        Ok(Self {
            parent,
            prefix,
            nested,
        })
    }

    fn flat_key(&self, field: &str) -> String {
        format!("{}.{field}", self.prefix)
    }

    fn coerced_str(&self, field: &str) -> Result<Option<String>, IctError> {
        let flat = self.flat_key(field);
        if self.parent.get(&flat).is_some() {
            return self.parent.optional_coerced_str(&flat);
        }
        match &self.nested {
            Some(nested) => nested.optional_coerced_str(field),
            None => Ok(None),
        }
    }

    fn bool(&self, field: &str) -> Result<Option<bool>, IctError> {
        let flat = self.flat_key(field);
        if self.parent.get(&flat).is_some() {
            return self.parent.optional_bool(&flat);
        }
        match &self.nested {
            Some(nested) => nested.optional_bool(field),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
#[path = "hardware_test.rs"]
mod tests;
