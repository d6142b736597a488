//! Sketch builder and window application.
//!
//! [`Sketch`] is the entry point: configure the two source images, grid,
//! and parameters, then call `.run()`. Sampling and seed encoding happen
//! before the window opens, so a broken or blank image fails synchronously
//! instead of mid-frame. The window application then drives the per-frame
//! loop: clock tick → probe update → simulation + render → next redraw.

use std::path::PathBuf;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::camera::Camera;
use crate::error::SketchError;
use crate::gpu::uniforms::{RenderUniforms, SimUniforms};
use crate::gpu::{GpuState, Overlay};
use crate::grid::ParticleGrid;
#[cfg(feature = "egui")]
use crate::panel::TuningPanel;
use crate::params::SimulationParams;
use crate::probe::PointerProbe;
use crate::sampler;
use crate::seed::{self, SeedTexture};
use crate::time::FrameClock;

/// An interactive particle-morph sketch.
///
/// Use method chaining to configure, then call `.run()` to open the window.
///
/// # Example
///
/// ```ignore
/// use morphfield::Sketch;
///
/// Sketch::new("img/logo.png", "img/portrait.png")
///     .with_grid(256, 256)
///     .run()?;
/// ```
pub struct Sketch {
    image1: PathBuf,
    image2: PathBuf,
    resolution: f32,
    grid: ParticleGrid,
    params: SimulationParams,
}

impl Sketch {
    /// Create a sketch morphing between two images.
    ///
    /// The field starts on `image1`'s silhouette; raising the progress
    /// parameter morphs it toward `image2`'s.
    pub fn new(image1: impl Into<PathBuf>, image2: impl Into<PathBuf>) -> Self {
        Self {
            image1: image1.into(),
            image2: image2.into(),
            resolution: 1.0,
            grid: ParticleGrid::default(),
            params: SimulationParams::default(),
        }
    }

    /// Set the particle grid dimensions (default 256×256).
    pub fn with_grid(mut self, width: u32, height: u32) -> Self {
        self.grid = ParticleGrid::new(width, height);
        self
    }

    /// Scale images by this factor before sampling (default 1.0).
    pub fn with_resolution(mut self, resolution: f32) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the initial simulation parameters.
    pub fn with_params(mut self, params: SimulationParams) -> Self {
        self.params = params;
        self
    }

    /// Run the sketch. Blocks until the window is closed.
    pub fn run(self) -> Result<(), SketchError> {
        let mut rng = rand::thread_rng();

        let samples1 = sampler::load_samples(&self.image1, self.resolution)?;
        let samples2 = sampler::load_samples(&self.image2, self.resolution)?;
        let seed1 = seed::encode(&samples1, &self.grid, &mut rng);
        let seed2 = seed::encode(&samples2, &self.grid, &mut rng);

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.grid, self.params, seed1, seed2);
        event_loop.run_app(&mut app)?;

        match app.init_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    /// Seed textures waiting for GPU init; consumed on first resume.
    seeds: Option<(SeedTexture, SeedTexture)>,
    grid: ParticleGrid,
    params: SimulationParams,
    camera: Camera,
    probe: PointerProbe,
    clock: FrameClock,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
    #[cfg(feature = "egui")]
    panel: Option<TuningPanel>,
    /// Initialization failure carried out of the event loop.
    init_error: Option<SketchError>,
}

impl App {
    fn new(grid: ParticleGrid, params: SimulationParams, seed1: SeedTexture, seed2: SeedTexture) -> Self {
        Self {
            window: None,
            gpu: None,
            seeds: Some((seed1, seed2)),
            grid,
            params,
            camera: Camera::new(),
            probe: PointerProbe::new(),
            clock: FrameClock::new(),
            mouse_pressed: false,
            last_mouse_pos: None,
            #[cfg(feature = "egui")]
            panel: None,
            init_error: None,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let (elapsed, delta) = self.clock.tick();
        if self.clock.frame() % 600 == 0 {
            log::debug!("{:.0} fps, {} particles", self.clock.fps(), self.grid.cell_count());
        }

        let aspect = gpu.aspect();
        self.probe.update(&self.camera, aspect);

        #[cfg(feature = "egui")]
        if let (Some(panel), Some(window)) = (&mut self.panel, &self.window) {
            panel.run(window, &mut self.params, self.clock.fps());
        }

        let sim_uniforms =
            SimUniforms::new(&self.params, self.probe.intersection(), elapsed, delta);
        let render_uniforms = RenderUniforms::new(self.camera.view_proj(aspect));

        #[cfg(feature = "egui")]
        let overlay = self.panel.as_mut().map(|p| p as &mut dyn Overlay);
        #[cfg(not(feature = "egui"))]
        let overlay: Option<&mut dyn Overlay> = None;

        match gpu.render(sim_uniforms, render_uniforms, overlay) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                width: gpu.config.width,
                height: gpu.config.height,
            }),
            Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
            Err(e) => log::error!("render error: {:?}", e),
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("morphfield")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.init_error = Some(SketchError::Window(e));
                event_loop.exit();
                return;
            }
        };

        let Some((seed1, seed2)) = self.seeds.take() else {
            return;
        };

        match pollster::block_on(GpuState::new(window.clone(), &self.grid, &seed1, &seed2)) {
            Ok(gpu) => {
                #[cfg(feature = "egui")]
                {
                    self.panel = Some(TuningPanel::new(gpu.device(), gpu.config.format, &window));
                }
                self.gpu = Some(gpu);
                self.window = Some(window);
            }
            Err(e) => {
                self.init_error = Some(SketchError::Gpu(e));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        #[cfg(feature = "egui")]
        let consumed = match (&mut self.panel, &self.window) {
            (Some(panel), Some(window)) => panel.on_window_event(window, &event),
            _ => false,
        };
        #[cfg(not(feature = "egui"))]
        let consumed = false;

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ if consumed => {}
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = state == ElementState::Pressed;
                    if !self.mouse_pressed {
                        self.last_mouse_pos = None;
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                // Mailbox write for the probe; the frame loop samples it
                // once per tick.
                if let Some(gpu) = &self.gpu {
                    self.probe.set_ndc(PointerProbe::ndc_from_pixels(
                        position.x,
                        position.y,
                        gpu.config.width,
                        gpu.config.height,
                    ));
                }

                if self.mouse_pressed {
                    if let Some((last_x, last_y)) = self.last_mouse_pos {
                        let dx = position.x - last_x;
                        let dy = position.y - last_y;
                        self.camera.yaw -= dx as f32 * 0.005;
                        self.camera.pitch += dy as f32 * 0.005;
                        self.camera.pitch = self.camera.pitch.clamp(-1.5, 1.5);
                    }
                    self.last_mouse_pos = Some((position.x, position.y));
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                self.camera.distance -= scroll * 0.1;
                self.camera.distance = self.camera.distance.clamp(0.2, 20.0);
            }
            _ => {}
        }
    }
}
