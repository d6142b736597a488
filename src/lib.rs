//! # morphfield
//!
//! An interactive GPU particle field that morphs between two image-derived
//! silhouettes.
//!
//! Dark pixels of two source images seed a fixed grid of particles whose
//! positions live entirely on the GPU, in floating-point textures. Every
//! frame a full-screen simulation pass advances the state — pulling each
//! particle toward a blend of the two silhouettes, pushing it away from the
//! pointer, optionally jittering it with coherent noise — into one of two
//! ping-ponged render targets, and a point-cloud pass draws the freshly
//! produced state. State is never read back to the host.
//!
//! ## Quick Start
//!
//! ```ignore
//! use morphfield::Sketch;
//!
//! fn main() -> Result<(), morphfield::SketchError> {
//!     Sketch::new("img/logo.png", "img/portrait.png").run()
//! }
//! ```
//!
//! Drag to orbit, scroll to zoom, move the pointer to stir the particles.
//! With the `egui` feature a tuning panel exposes the simulation
//! parameters live.
//!
//! ## Pipeline
//!
//! | Stage | Module | When |
//! |-------|--------|------|
//! | Pixel sampling | [`sampler`] | once per image, at startup |
//! | Seed encoding | [`seed`] | once per image, at startup |
//! | Pointer probing | [`probe`] | once per frame |
//! | Simulation pass | [`gpu::simulate`] (reference: [`step`]) | once per frame |
//! | Buffer swap | [`gpu::pingpong`] | after every simulation pass |
//! | Point-cloud pass | [`gpu::pointcloud`] | once per frame, after the swap |
//!
//! The simulation kernel is mirrored as pure host functions in [`step`], so
//! its behavior is unit-testable without a GPU.

pub mod camera;
pub mod error;
pub mod gpu;
pub mod grid;
#[cfg(feature = "egui")]
pub mod panel;
pub mod params;
pub mod probe;
pub mod sampler;
pub mod seed;
pub mod sketch;
pub mod step;
pub mod time;

pub use camera::Camera;
pub use error::{GpuError, SampleError, SketchError};
pub use glam::{Vec2, Vec3};
pub use grid::ParticleGrid;
pub use params::{NoiseParams, SimulationParams};
pub use probe::PointerProbe;
pub use seed::SeedTexture;
pub use sketch::Sketch;
pub use time::FrameClock;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use morphfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::camera::Camera;
    pub use crate::error::{GpuError, SampleError, SketchError};
    pub use crate::grid::ParticleGrid;
    pub use crate::params::{NoiseParams, SimulationParams};
    pub use crate::probe::PointerProbe;
    pub use crate::sketch::Sketch;
    pub use crate::{Vec2, Vec3};
}
