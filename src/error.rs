//! Error types for morphfield.
//!
//! All failures are initialization failures: once the window is up and the
//! first frame has rendered, the per-frame path has no recoverable error
//! conditions (a lost surface is reconfigured, anything else is fatal).

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
    /// The adapter cannot render into floating-point textures.
    ///
    /// The simulation state lives in `Rgba32Float` render targets; an adapter
    /// that cannot attach and sample that format cannot run the simulation.
    FloatTargetUnsupported,
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
            GpuError::FloatTargetUnsupported => write!(f, "The GPU adapter does not support rendering into Rgba32Float textures, which the particle state buffers require."),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur while turning a source image into a pixel sample pool.
#[derive(Debug)]
pub enum SampleError {
    /// Failed to decode the image.
    ImageLoad(image::ImageError),
    /// Failed to read the file from disk.
    Io(std::io::Error),
    /// The image contains no pixels below the darkness threshold.
    ///
    /// An empty pool cannot seed the particle grid, so this is fatal for the
    /// silhouette built from that image.
    NoDarkPixels {
        /// The greyscale threshold the scan used.
        threshold: f32,
    },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::ImageLoad(e) => write!(f, "Failed to load image: {}", e),
            SampleError::Io(e) => write!(f, "Failed to read image file: {}", e),
            SampleError::NoDarkPixels { threshold } => write!(
                f,
                "No pixels darker than greyscale {} found; the image cannot seed a silhouette",
                threshold
            ),
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SampleError::ImageLoad(e) => Some(e),
            SampleError::Io(e) => Some(e),
            SampleError::NoDarkPixels { .. } => None,
        }
    }
}

impl From<image::ImageError> for SampleError {
    fn from(e: image::ImageError) -> Self {
        SampleError::ImageLoad(e)
    }
}

impl From<std::io::Error> for SampleError {
    fn from(e: std::io::Error) -> Self {
        SampleError::Io(e)
    }
}

/// Errors that can occur when running a sketch.
#[derive(Debug)]
pub enum SketchError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// Building a pixel sample pool failed.
    Sample(SampleError),
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SketchError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            SketchError::Window(e) => write!(f, "Failed to create window: {}", e),
            SketchError::Gpu(e) => write!(f, "GPU error: {}", e),
            SketchError::Sample(e) => write!(f, "Sampling error: {}", e),
        }
    }
}

impl std::error::Error for SketchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SketchError::EventLoop(e) => Some(e),
            SketchError::Window(e) => Some(e),
            SketchError::Gpu(e) => Some(e),
            SketchError::Sample(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for SketchError {
    fn from(e: winit::error::EventLoopError) -> Self {
        SketchError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for SketchError {
    fn from(e: winit::error::OsError) -> Self {
        SketchError::Window(e)
    }
}

impl From<GpuError> for SketchError {
    fn from(e: GpuError) -> Self {
        SketchError::Gpu(e)
    }
}

impl From<SampleError> for SketchError {
    fn from(e: SampleError) -> Self {
        SketchError::Sample(e)
    }
}
