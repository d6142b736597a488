//! Seed state textures: pixel sample pool → initial particle state.
//!
//! Each grid cell draws one sample from the pool uniformly at random *with
//! replacement* — cells can and do share a source pixel whenever the grid
//! holds more cells than the pool holds samples. Coincident particles are an
//! intentional, documented property of the reference behavior, not something
//! to deduplicate away.
//!
//! A small random jitter keeps the seeded cloud from reading as a pixel
//! grid. Encoding runs once per source image at startup; the result is
//! uploaded as an immutable `Rgba32Float` texture.

use glam::Vec2;
use rand::Rng;

use crate::grid::ParticleGrid;

/// Uniform jitter applied independently to both position channels.
pub const JITTER_SPREAD: f32 = 0.005;

/// CPU-side contents of a particle state texture.
///
/// Four `f32` channels per cell: x, y position in the two leading channels,
/// velocity reserved (and zero) in the trailing two.
#[derive(Debug, Clone)]
pub struct SeedTexture {
    /// Texel data in flat-index order, 4 floats per cell.
    pub data: Vec<f32>,
    /// Texture width in texels (= grid width).
    pub width: u32,
    /// Texture height in texels (= grid height).
    pub height: u32,
}

impl SeedTexture {
    /// The (x, y, vx, vy) texel for the cell at `(x, y)`.
    pub fn texel(&self, x: u32, y: u32) -> [f32; 4] {
        let i = 4 * (x + self.width * y) as usize;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Raw bytes for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}

/// Fill a grid-sized state texture from a sample pool.
///
/// # Panics
///
/// Panics if `samples` is empty; the sampler guarantees a non-empty pool
/// before encoding runs.
pub fn encode<R: Rng>(samples: &[Vec2], grid: &ParticleGrid, rng: &mut R) -> SeedTexture {
    assert!(!samples.is_empty(), "cannot seed a grid from an empty sample pool");

    let mut data = Vec::with_capacity(grid.cell_count() as usize * 4);

    for _ in 0..grid.cell_count() {
        let sample = samples[rng.gen_range(0..samples.len())];
        data.push(sample.x + rng.gen_range(-JITTER_SPREAD..=JITTER_SPREAD));
        data.push(sample.y + rng.gen_range(-JITTER_SPREAD..=JITTER_SPREAD));
        data.push(0.0);
        data.push(0.0);
    }

    SeedTexture {
        data,
        width: grid.width(),
        height: grid.height(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn pool() -> Vec<Vec2> {
        vec![
            Vec2::new(-0.4, 0.1),
            Vec2::new(0.3, -0.2),
            Vec2::new(0.0, 0.45),
        ]
    }

    /// Jitter bound plus float slack.
    const BOUND: f32 = JITTER_SPREAD + 1e-6;

    #[test]
    fn test_texel_count_matches_grid() {
        for (w, h) in [(1, 1), (1, 5), (4, 3), (16, 16)] {
            let grid = ParticleGrid::new(w, h);
            let seed = encode(&pool(), &grid, &mut rng());
            assert_eq!(seed.data.len(), (w * h * 4) as usize);
            assert_eq!(seed.width, w);
            assert_eq!(seed.height, h);
        }
    }

    #[test]
    fn test_every_texel_derives_from_some_sample() {
        let samples = pool();
        let grid = ParticleGrid::new(8, 8);
        let seed = encode(&samples, &grid, &mut rng());

        for y in 0..8 {
            for x in 0..8 {
                let [px, py, _, _] = seed.texel(x, y);
                let close = samples
                    .iter()
                    .any(|s| (px - s.x).abs() <= BOUND && (py - s.y).abs() <= BOUND);
                assert!(close, "texel ({x},{y}) = ({px},{py}) matches no sample");
            }
        }
    }

    #[test]
    fn test_velocity_channels_are_zero() {
        let seed = encode(&pool(), &ParticleGrid::new(4, 4), &mut rng());
        for y in 0..4 {
            for x in 0..4 {
                let [_, _, vx, vy] = seed.texel(x, y);
                assert_eq!(vx, 0.0);
                assert_eq!(vy, 0.0);
            }
        }
    }

    #[test]
    fn test_single_sample_fills_whole_grid_with_replacement() {
        // More cells than samples: the one sample must be reused.
        let samples = vec![Vec2::new(0.25, -0.25)];
        let seed = encode(&samples, &ParticleGrid::new(8, 8), &mut rng());
        for y in 0..8 {
            for x in 0..8 {
                let [px, py, _, _] = seed.texel(x, y);
                assert!((px - 0.25).abs() <= BOUND);
                assert!((py + 0.25).abs() <= BOUND);
            }
        }
    }

    #[test]
    fn test_jitter_breaks_exact_duplicates() {
        // With one source sample, texels should still not all be identical.
        let samples = vec![Vec2::ZERO];
        let seed = encode(&samples, &ParticleGrid::new(16, 16), &mut rng());
        let first = seed.texel(0, 0);
        let all_same = (0..16).all(|y| (0..16).all(|x| seed.texel(x, y) == first));
        assert!(!all_same);
    }

    #[test]
    #[should_panic]
    fn test_empty_pool_panics() {
        encode(&[], &ParticleGrid::new(2, 2), &mut rng());
    }
}
