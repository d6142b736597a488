//! Validate the WGSL shaders with naga.
//!
//! The GPU path never runs in CI, but the shaders can still be parsed and
//! validated on the host, which catches syntax errors, type mismatches,
//! and binding problems long before a device sees them.

use naga::valid::{Capabilities, ValidationFlags, Validator};

fn validate(source: &str, name: &str) {
    let module = naga::front::wgsl::parse_str(source)
        .unwrap_or_else(|e| panic!("{name} failed to parse: {e}"));

    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .unwrap_or_else(|e| panic!("{name} failed validation: {e:?}"));
}

#[test]
fn test_simulate_shader_is_valid() {
    validate(morphfield::gpu::simulate::SHADER_SOURCE, "simulate.wgsl");
}

#[test]
fn test_pointcloud_shader_is_valid() {
    validate(morphfield::gpu::pointcloud::SHADER_SOURCE, "pointcloud.wgsl");
}

#[test]
fn test_simulate_shader_declares_all_uniforms() {
    // The WGSL uniform block must carry every field the host packs.
    let src = morphfield::gpu::simulate::SHADER_SOURCE;
    for field in [
        "pointer",
        "time",
        "delta_time",
        "progress",
        "max_speed",
        "repel_radius",
        "repel_pow",
        "repel_strength",
        "noise_amplitude",
        "noise_frequency",
        "noise_speed",
    ] {
        assert!(src.contains(field), "simulate.wgsl is missing `{field}`");
    }
}
