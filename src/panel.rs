//! Live parameter-tuning panel, available with the `egui` feature.
//!
//! The panel edits [`SimulationParams`] through the `&mut` the frame loop
//! hands it once per tick — parameters are never shared memory. Rendering
//! goes through the [`Overlay`] hook so the GPU core stays free of egui
//! types.

use std::sync::Arc;

use winit::window::Window;

use crate::gpu::Overlay;
use crate::params::SimulationParams;

/// Egui context, winit glue, and wgpu renderer for the tuning panel.
pub struct TuningPanel {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    /// Output of the last UI pass, consumed by the next `draw`.
    pending: Option<FrameOutput>,
}

struct FrameOutput {
    paint_jobs: Vec<egui::ClippedPrimitive>,
    textures_delta: egui::TexturesDelta,
    pixels_per_point: f32,
}

impl TuningPanel {
    pub fn new(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        window: &Arc<Window>,
    ) -> Self {
        let ctx = egui::Context::default();

        let mut style = egui::Style::default();
        style.visuals = egui::Visuals::dark();
        style.visuals.window_shadow = egui::Shadow::NONE;
        ctx.set_style(style);

        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window.as_ref(),
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let renderer = egui_wgpu::Renderer::new(device, output_format, None, 1, false);

        Self {
            ctx,
            state,
            renderer,
            pending: None,
        }
    }

    /// Process a winit event.
    ///
    /// Returns true if the panel consumed it (don't feed it to camera
    /// controls or the pointer probe).
    pub fn on_window_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Run the UI for this frame, editing the parameters in place.
    pub fn run(&mut self, window: &Window, params: &mut SimulationParams, fps: f32) {
        let raw_input = self.state.take_egui_input(window);
        self.ctx.begin_frame(raw_input);

        egui::Window::new("Simulation")
            .default_width(240.0)
            .show(&self.ctx, |ui| {
                ui.add(egui::Slider::new(&mut params.progress, 0.0..=1.0).text("Progress"));

                ui.separator();
                ui.label("Return");
                ui.add(egui::Slider::new(&mut params.max_speed, 0.0..=1.0).text("Max speed"));

                ui.separator();
                ui.label("Pointer");
                ui.add(egui::Slider::new(&mut params.repel_radius, 0.0..=1.0).text("Radius"));
                ui.add(egui::Slider::new(&mut params.repel_pow, 0.0..=10.0).text("Smooth"));
                ui.add(egui::Slider::new(&mut params.repel_strength, 0.0..=1.0).text("Strength"));

                ui.separator();
                ui.label("Noise");
                ui.add(egui::Slider::new(&mut params.noise.amplitude, 0.0..=0.001).text("Amplitude"));
                ui.add(egui::Slider::new(&mut params.noise.frequency, 0.0..=1.0).text("Frequency"));
                ui.add(egui::Slider::new(&mut params.noise.speed, 0.0..=1.0).text("Speed"));

                ui.separator();
                ui.label(format!("{fps:.0} fps"));
            });

        let full_output = self.ctx.end_frame();
        self.state
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        self.pending = Some(FrameOutput {
            paint_jobs,
            textures_delta: full_output.textures_delta,
            pixels_per_point: full_output.pixels_per_point,
        });
    }
}

impl Overlay for TuningPanel {
    fn draw(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        size: [u32; 2],
    ) {
        let Some(frame) = self.pending.take() else {
            return;
        };

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: size,
            pixels_per_point: frame.pixels_per_point,
        };

        for (id, image_delta) in &frame.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }
        self.renderer
            .update_buffers(device, queue, encoder, &frame.paint_jobs, &screen_descriptor);

        {
            let pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Panel Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let mut pass = pass.forget_lifetime();
            self.renderer
                .render(&mut pass, &frame.paint_jobs, &screen_descriptor);
        }

        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}
