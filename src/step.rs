//! Host-side reference implementation of the simulation kernel.
//!
//! The GPU advances particle state in `src/gpu/simulate.wgsl`; this module
//! is the same computation as pure functions over (state, parameters), with
//! no rendering types anywhere in sight. It exists so the kernel can be unit
//! tested on the host, and it doubles as the specification the WGSL is kept
//! in sync with — including the integer-hash value noise, which uses the
//! same hash on both sides.
//!
//! Each cell is advanced independently from last frame's state; nothing here
//! reads another cell's current-frame output.

use glam::{Vec2, Vec3};

use crate::params::{NoiseParams, SimulationParams};

/// Offset decorrelating the two noise axes.
const NOISE_AXIS_OFFSET: Vec2 = Vec2::new(37.79, 17.23);

/// Blend the two target silhouettes.
///
/// `progress` 0 returns `shape1` exactly, 1 returns `shape2` exactly.
#[inline]
pub fn blend_target(shape1: Vec2, shape2: Vec2, progress: f32) -> Vec2 {
    shape1.lerp(shape2, progress)
}

/// The per-pass movement toward `target`, length-limited by `max_speed`.
#[inline]
pub fn return_step(current: Vec2, target: Vec2, max_speed: f32) -> Vec2 {
    (target - current).clamp_length_max(max_speed)
}

/// Displacement pushing a particle away from the pointer.
///
/// Magnitude is `(1 - d/radius)^pow * strength` inside the radius and
/// exactly zero at or beyond it. A particle sitting on the pointer has no
/// defined direction and is left alone.
pub fn repel(position: Vec2, pointer: Vec2, params: &SimulationParams) -> Vec2 {
    let delta = position - pointer;
    let distance = delta.length();
    if distance >= params.repel_radius || distance <= f32::EPSILON {
        return Vec2::ZERO;
    }
    let falloff = (1.0 - distance / params.repel_radius).powf(params.repel_pow);
    delta / distance * falloff * params.repel_strength
}

/// Coherent positional noise displacement.
pub fn noise_displacement(position: Vec2, time: f32, noise: &NoiseParams) -> Vec2 {
    if noise.amplitude == 0.0 {
        return Vec2::ZERO;
    }
    let p = position * noise.frequency + Vec2::splat(time * noise.speed);
    noise.amplitude * Vec2::new(value_noise(p), value_noise(p + NOISE_AXIS_OFFSET))
}

/// Advance one particle by one simulation pass.
///
/// `shape1`/`shape2` are this cell's texels from the two target-shape
/// textures; `pointer` is the probe's plane intersection. Velocity channels
/// are reserved and not part of the computation.
pub fn step(
    current: Vec2,
    shape1: Vec2,
    shape2: Vec2,
    pointer: Vec3,
    time: f32,
    params: &SimulationParams,
) -> Vec2 {
    let target = blend_target(shape1, shape2, params.progress);
    current
        + return_step(current, target, params.max_speed)
        + repel(current, pointer.truncate(), params)
        + noise_displacement(current, time, &params.noise)
}

/// 2D value noise in [-1, 1], built on the integer hash below.
///
/// Lattice values are hashed per corner and blended with a smoothstep
/// weight. Coarse but coherent, and cheap enough to mirror texel-for-texel
/// in WGSL.
pub fn value_noise(p: Vec2) -> f32 {
    let i = p.floor();
    let f = p - i;
    let u = f * f * (Vec2::splat(3.0) - 2.0 * f);

    let ix = i.x as i32 as u32;
    let iy = i.y as i32 as u32;

    let c00 = corner(ix, iy);
    let c10 = corner(ix.wrapping_add(1), iy);
    let c01 = corner(ix, iy.wrapping_add(1));
    let c11 = corner(ix.wrapping_add(1), iy.wrapping_add(1));

    let x0 = c00 + (c10 - c00) * u.x;
    let x1 = c01 + (c11 - c01) * u.x;
    x0 + (x1 - x0) * u.y
}

/// Lattice corner value in [-1, 1].
fn corner(x: u32, y: u32) -> f32 {
    rand01(x.wrapping_add(hash(y))) * 2.0 - 1.0
}

/// Hash a u32 to a pseudo-random u32. Mirrored verbatim in the WGSL.
fn hash(n: u32) -> u32 {
    let mut x = n;
    x ^= x >> 17;
    x = x.wrapping_mul(0xed5ad4bb);
    x ^= x >> 11;
    x = x.wrapping_mul(0xac4c1b51);
    x ^= x >> 15;
    x = x.wrapping_mul(0x31848bab);
    x ^= x >> 14;
    x
}

/// Hash to a float in [0, 1].
fn rand01(seed: u32) -> f32 {
    hash(seed) as f32 / 4294967295.0
}
