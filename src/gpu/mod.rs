//! GPU context and frame orchestration.
//!
//! [`GpuState`] owns the surface, device, and the resources of both passes.
//! A frame is: upload uniforms → simulation pass into the ping-pong target
//! → swap roles → point-cloud pass over the freshly produced state →
//! present. All of it is recorded into one command encoder and submitted
//! once.

pub mod pingpong;
pub mod pointcloud;
pub mod simulate;
pub mod uniforms;

use std::sync::Arc;

use winit::window::Window;

use crate::error::GpuError;
use crate::grid::ParticleGrid;
use crate::seed::SeedTexture;

use pingpong::{create_simulation_buffers, upload_state_texture, PingPong, StateTarget, STATE_FORMAT};
use pointcloud::PointCloudPass;
use simulate::SimulationPass;
use uniforms::{RenderUniforms, SimUniforms};

/// Hook for drawing UI on top of the finished frame.
///
/// The frame loop hands the encoder and surface view to the overlay after
/// the point-cloud pass; the overlay records its own passes. Keeps the GPU
/// core free of any UI toolkit types.
pub trait Overlay {
    fn draw(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        size: [u32; 2],
    );
}

/// Everything GPU-resident: context, state textures, and both passes.
pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    buffers: PingPong<StateTarget>,
    /// The two immutable target-shape textures. Held so their lifetime is
    /// explicit; the simulation bind groups read them every pass.
    #[allow(dead_code)]
    shapes: [StateTarget; 2],
    simulation: SimulationPass,
    pointcloud: PointCloudPass,
}

impl GpuState {
    /// Bring up the GPU and upload the two seed textures.
    ///
    /// Fails if no adapter is found, the device cannot be created, or the
    /// adapter cannot render into float textures — all fatal to startup.
    pub async fn new(
        window: Arc<Window>,
        grid: &ParticleGrid,
        seed1: &SeedTexture,
        seed2: &SeedTexture,
    ) -> Result<Self, GpuError> {
        debug_assert_eq!((seed1.width, seed1.height), (grid.width(), grid.height()));
        debug_assert_eq!((seed2.width, seed2.height), (grid.width(), grid.height()));

        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuError::NoAdapter)?;

        log::info!("using adapter: {}", adapter.get_info().name);

        // The whole simulation lives in Rgba32Float render targets; refuse
        // adapters that cannot attach and sample them.
        let state_features = adapter.get_texture_format_features(STATE_FORMAT);
        let needed = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        if !state_features.allowed_usages.contains(needed) {
            return Err(GpuError::FloatTargetUnsupported);
        }

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Simulation buffers start from the first silhouette; the shapes
        // stay immutable for the lifetime of the sketch.
        let buffers = create_simulation_buffers(&device, &queue, seed1);
        let shapes = [
            upload_state_texture(&device, &queue, seed1, "Shape Texture 1", false),
            upload_state_texture(&device, &queue, seed2, "Shape Texture 2", false),
        ];

        let simulation = SimulationPass::new(&device, &buffers, &shapes[0], &shapes[1]);
        let pointcloud = PointCloudPass::new(&device, config.format, grid, &buffers);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            buffers,
            shapes,
            simulation,
            pointcloud,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Current surface aspect ratio.
    pub fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    /// Run one frame: simulate, swap, draw, present.
    pub fn render(
        &mut self,
        sim_uniforms: SimUniforms,
        render_uniforms: RenderUniforms,
        overlay: Option<&mut dyn Overlay>,
    ) -> Result<(), wgpu::SurfaceError> {
        self.simulation.update(&self.queue, sim_uniforms);
        self.pointcloud.update(&self.queue, render_uniforms);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        // Advance the state into the write target...
        self.simulation.encode(&mut encoder, &self.buffers);

        // ...then make it current. The swap is host-side role bookkeeping;
        // the passes execute in recorded order on the queue.
        self.buffers.swap();

        // Draw the freshly produced state.
        self.pointcloud.encode(&mut encoder, &view, &self.buffers);

        if let Some(overlay) = overlay {
            overlay.draw(
                &self.device,
                &self.queue,
                &mut encoder,
                &view,
                [self.config.width, self.config.height],
            );
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Device handle for overlay construction.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }
}
