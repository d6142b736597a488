//! GPU resources for the simulation pass.
//!
//! A full-screen pipeline that advances the whole particle grid in one
//! draw: reads the current state texture plus the two target shapes, writes
//! next positions into the ping-pong target. Bind groups for both buffer
//! orientations are built up front; each pass picks the one matching the
//! current read buffer.

use bytemuck::Zeroable;
use wgpu::util::DeviceExt;

use super::pingpong::{PingPong, StateTarget, STATE_FORMAT};
use super::uniforms::SimUniforms;

pub const SHADER_SOURCE: &str = include_str!("simulate.wgsl");

/// Pipeline and bindings of the simulation stage.
pub struct SimulationPass {
    pipeline: wgpu::RenderPipeline,
    /// One bind group per read-buffer orientation.
    bind_groups: [wgpu::BindGroup; 2],
    uniform_buffer: wgpu::Buffer,
}

impl SimulationPass {
    pub fn new(
        device: &wgpu::Device,
        buffers: &PingPong<StateTarget>,
        shape1: &StateTarget,
        shape2: &StateTarget,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Simulation Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Simulation Uniform Buffer"),
            contents: bytemuck::bytes_of(&SimUniforms::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        // Float state texels are fetched exactly, never filtered.
        let state_texture_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: false },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        };

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Simulation Bind Group Layout"),
            entries: &[
                state_texture_entry(0),
                state_texture_entry(1),
                state_texture_entry(2),
                wgpu::BindGroupLayoutEntry {
                    binding: 3,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let bind_groups = [0usize, 1].map(|slot| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Simulation Bind Group"),
                layout: &bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&buffers.slot(slot).view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(&shape1.view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::TextureView(&shape2.view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 3,
                        resource: uniform_buffer.as_entire_binding(),
                    },
                ],
            })
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Simulation Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Simulation Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: STATE_FORMAT,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            bind_groups,
            uniform_buffer,
        }
    }

    /// Upload this pass's uniforms.
    pub fn update(&self, queue: &wgpu::Queue, uniforms: SimUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Record the simulation pass: read `buffers.current()`, write
    /// `buffers.target()`. The caller swaps the buffers afterwards.
    pub fn encode(&self, encoder: &mut wgpu::CommandEncoder, buffers: &PingPong<StateTarget>) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Simulation Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &buffers.target().view,
                resolve_target: None,
                ops: wgpu::Operations {
                    // Every texel is overwritten by the full-screen triangle.
                    load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_groups[buffers.current_index()], &[]);
        pass.draw(0..3, 0..1);
    }
}
