//! Double-buffered particle state.
//!
//! The simulation reads last frame's state while writing this frame's, so
//! the state lives in two equally-sized float render targets whose roles
//! swap after every pass. A swap exchanges roles only; the texel contents
//! are untouched. Nothing outside this module holds onto a role across a
//! swap — consumers re-query `current()`/`target()` (in practice, bind
//! groups for both orientations are prebuilt and selected by
//! [`PingPong::current_index`]).

use crate::seed::SeedTexture;

/// Texture format of all particle state: one (x, y, vx, vy) texel per cell.
///
/// Float texels are positions, not colors, so they are only ever fetched
/// exactly — no filtering is involved anywhere.
pub const STATE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba32Float;

/// A pair of buffers with swappable current/target roles.
///
/// `current` is the read source; `target` is where the next pass writes.
/// The role flag is plain data, so the swap logic is testable without a
/// GPU device.
#[derive(Debug)]
pub struct PingPong<T> {
    pair: [T; 2],
    current: usize,
}

impl<T> PingPong<T> {
    /// Create a pair with `a` as the initial current buffer.
    pub fn new(a: T, b: T) -> Self {
        Self {
            pair: [a, b],
            current: 0,
        }
    }

    /// The buffer holding the latest completed state.
    #[inline]
    pub fn current(&self) -> &T {
        &self.pair[self.current]
    }

    /// The buffer the next simulation pass writes into.
    #[inline]
    pub fn target(&self) -> &T {
        &self.pair[1 - self.current]
    }

    /// Index (0 or 1) of the current buffer, for selecting prebuilt
    /// per-orientation resources.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Access a buffer by slot index, independent of its current role.
    ///
    /// Only for building per-orientation resources (bind groups) up front;
    /// per-frame access goes through `current()`/`target()`.
    #[inline]
    pub fn slot(&self, index: usize) -> &T {
        &self.pair[index]
    }

    /// Exchange the current/target roles.
    pub fn swap(&mut self) {
        self.current = 1 - self.current;
    }
}

/// One GPU-resident state buffer: texture plus its render/bind view.
pub struct StateTarget {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

/// Create a state texture and upload the given seed into it.
///
/// Used for the two immutable target shapes (`render_attachment` false) and
/// for the two simulation buffers (`render_attachment` true).
pub fn upload_state_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    seed: &SeedTexture,
    label: &str,
    render_attachment: bool,
) -> StateTarget {
    let mut usage = wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST;
    if render_attachment {
        usage |= wgpu::TextureUsages::RENDER_ATTACHMENT;
    }

    let size = wgpu::Extent3d {
        width: seed.width,
        height: seed.height,
        depth_or_array_layers: 1,
    };

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: STATE_FORMAT,
        usage,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        seed.as_bytes(),
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(seed.width * 16),
            rows_per_image: Some(seed.height),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    StateTarget { texture, view }
}

/// Create the two simulation buffers, both seeded with the same initial
/// state so the very first pass reads valid positions whichever buffer is
/// current.
pub fn create_simulation_buffers(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    seed: &SeedTexture,
) -> PingPong<StateTarget> {
    PingPong::new(
        upload_state_texture(device, queue, seed, "State Buffer A", true),
        upload_state_texture(device, queue, seed, "State Buffer B", true),
    )
}
