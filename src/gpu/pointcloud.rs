//! GPU resources for the particle render pass.
//!
//! One instance per grid cell, expanded to a small billboard. The vertex
//! buffer holds nothing but each cell's UV — positions come out of the
//! state texture every frame, so the buffer is written once and never
//! touched again. Blending is additive-free alpha over the clear color;
//! depth testing is off, and the pass runs after the simulation pass of
//! the same frame so it draws the freshly produced state.

use wgpu::util::DeviceExt;

use super::pingpong::{PingPong, StateTarget};
use super::uniforms::RenderUniforms;
use crate::grid::ParticleGrid;

pub const SHADER_SOURCE: &str = include_str!("pointcloud.wgsl");

/// Background clear color (dark grey, linear values for an sRGB surface).
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.016,
    g: 0.016,
    b: 0.016,
    a: 1.0,
};

/// Pipeline and bindings of the particle render stage.
pub struct PointCloudPass {
    pipeline: wgpu::RenderPipeline,
    /// One bind group per state-buffer orientation.
    bind_groups: [wgpu::BindGroup; 2],
    uniform_buffer: wgpu::Buffer,
    uv_buffer: wgpu::Buffer,
    instance_count: u32,
}

impl PointCloudPass {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        grid: &ParticleGrid,
        buffers: &PingPong<StateTarget>,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Point Cloud Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let uvs = grid.uvs();
        let uv_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Cloud UV Buffer"),
            contents: bytemuck::cast_slice(&uvs),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Cloud Uniform Buffer"),
            contents: bytemuck::bytes_of(&RenderUniforms::new(glam::Mat4::IDENTITY)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Point Cloud Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: false },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX,
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
                label: Some("Point Cloud Bind Group"),
                layout: &bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&buffers.slot(slot).view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: uniform_buffer.as_entire_binding(),
                    },
                ],
            })
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Point Cloud Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Point Cloud Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &[wgpu::VertexAttribute {
                        offset: 0,
                        shader_location: 0,
                        format: wgpu::VertexFormat::Float32x2,
                    }],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
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
            uv_buffer,
            instance_count: grid.cell_count(),
        }
    }

    /// Upload this pass's uniforms.
    pub fn update(&self, queue: &wgpu::Queue, uniforms: RenderUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Record the render pass against the visible surface, sampling
    /// `buffers.current()` — call after the simulation pass has run and the
    /// buffers have swapped.
    pub fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        surface_view: &wgpu::TextureView,
        buffers: &PingPong<StateTarget>,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Point Cloud Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: surface_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_groups[buffers.current_index()], &[]);
        pass.set_vertex_buffer(0, self.uv_buffer.slice(..));
        pass.draw(0..6, 0..self.instance_count);
    }
}
