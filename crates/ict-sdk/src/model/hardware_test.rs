use super::{Cpu, Gpu, HardwareRequirements, Memory};
use crate::error::IctError;
use ict_core::FieldPath;
use serde_json::json;

fn hardware_path() -> FieldPath {
    FieldPath::keys(&["hardware"])
}

#[test]
fn nested_and_flat_forms_read_the_same() {
    let nested = HardwareRequirements::from_value(
        &json!({
            "cpu": {"type": "any", "min": "100", "recommended": "200m"},
            "memory": {"min": "129Mi"},
            "gpu": {"enabled": true, "type": "cuda"}
        }),
        hardware_path(),
    )
    .expect("nested form must parse");
    let flat = HardwareRequirements::from_value(
        &json!({
            "cpu.type": "any",
            "cpu.min": 100,
            "cpu.recommended": "200m",
            "memory.min": "129Mi",
            "gpu.enabled": true,
            "gpu.type": "cuda"
        }),
        hardware_path(),
    )
    .expect("flat form must parse");

    assert_eq!(nested, flat);
    assert_eq!(nested.cpu.cpu_min.as_deref(), Some("100"));
    assert_eq!(nested.gpu.gpu_required, None);
}

#[test]
fn flat_key_wins_over_nested() {
    let hardware = HardwareRequirements::from_value(
        &json!({"cpu": {"min": "1"}, "cpu.min": "2"}),
        hardware_path(),
    )
    .expect("must parse");
    assert_eq!(hardware.cpu.cpu_min.as_deref(), Some("2"));
}

#[test]
fn wrong_value_types_report_their_path() {
    let err = HardwareRequirements::from_value(&json!({"gpu": {"enabled": "yes"}}), hardware_path())
        .expect_err("must reject");
    assert!(matches!(
        err,
        IctError::InvalidValue { ref path, .. } if path.to_string() == "$.hardware.gpu.enabled"
    ));

    let err = HardwareRequirements::from_value(&json!({"cpu.min": true}), hardware_path())
        .expect_err("must reject");
    assert!(matches!(
        err,
        IctError::InvalidValue { ref path, .. } if path.to_string() == r#"$.hardware["cpu.min"]"#
    ));
}

#[test]
fn serialization_is_nested_and_skips_empty_groups() {
    let hardware = HardwareRequirements {
        cpu: Cpu {
            cpu_min: Some("100".to_string()),
            ..Cpu::default()
        },
        memory: Memory::default(),
        gpu: Gpu {
            gpu_required: Some(false),
            ..Gpu::default()
        },
    };
    assert_eq!(
        serde_json::to_value(&hardware).expect("must serialize"),
        json!({"cpu": {"min": "100"}, "gpu": {"required": false}})
    );
    assert!(!hardware.is_empty());
    assert!(HardwareRequirements::default().is_empty());
}
