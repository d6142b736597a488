//! Uniform blocks shared with the WGSL shaders.
//!
//! Layouts are `#[repr(C)]` with explicit padding and must stay in sync
//! with the struct declarations in `simulate.wgsl` and `pointcloud.wgsl`.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::params::SimulationParams;

/// Per-pass inputs of the simulation shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SimUniforms {
    /// Pointer intersection on the reference plane; w unused.
    pub pointer: [f32; 4],
    pub time: f32,
    pub delta_time: f32,
    pub progress: f32,
    pub max_speed: f32,
    pub repel_radius: f32,
    pub repel_pow: f32,
    pub repel_strength: f32,
    pub noise_amplitude: f32,
    pub noise_frequency: f32,
    pub noise_speed: f32,
    pub _pad: [f32; 2],
}

impl SimUniforms {
    /// Pack the frame's parameters for upload.
    pub fn new(params: &SimulationParams, pointer: Vec3, time: f32, delta_time: f32) -> Self {
        Self {
            pointer: [pointer.x, pointer.y, pointer.z, 0.0],
            time,
            delta_time,
            progress: params.progress,
            max_speed: params.max_speed,
            repel_radius: params.repel_radius,
            repel_pow: params.repel_pow,
            repel_strength: params.repel_strength,
            noise_amplitude: params.noise.amplitude,
            noise_frequency: params.noise.frequency,
            noise_speed: params.noise.speed,
            _pad: [0.0; 2],
        }
    }
}

/// Per-frame inputs of the point-cloud render shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct RenderUniforms {
    pub view_proj: [[f32; 4]; 4],
}

impl RenderUniforms {
    pub fn new(view_proj: Mat4) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}
