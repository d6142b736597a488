//! Benchmarks for the host-side simulation kernel.
//!
//! Run with: `cargo bench`
//!
//! The production path runs on the GPU; this tracks the cost of the
//! reference implementation over a full reference-sized grid, mostly so
//! noise-related regressions show up.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Vec2, Vec3};
use morphfield::params::{NoiseParams, SimulationParams};
use morphfield::step::{step, value_noise};

const GRID: u32 = 256;

fn grid_state() -> Vec<(Vec2, Vec2, Vec2)> {
    (0..GRID * GRID)
        .map(|i| {
            let x = (i % GRID) as f32 / GRID as f32 - 0.5;
            let y = (i / GRID) as f32 / GRID as f32 - 0.5;
            (
                Vec2::new(x, y),
                Vec2::new(-x, y),
                Vec2::new(x, -y),
            )
        })
        .collect()
}

fn bench_step_full_grid(c: &mut Criterion) {
    let cells = grid_state();
    let pointer = Vec3::new(0.1, 0.05, 0.0);

    let quiet = SimulationParams {
        progress: 0.5,
        ..SimulationParams::default()
    };
    c.bench_function("step_256x256_quiet", |b| {
        b.iter(|| {
            for (current, shape1, shape2) in &cells {
                black_box(step(*current, *shape1, *shape2, pointer, 1.0, &quiet));
            }
        })
    });

    let noisy = SimulationParams {
        progress: 0.5,
        repel_strength: 0.01,
        noise: NoiseParams {
            amplitude: 0.001,
            frequency: 0.5,
            speed: 0.5,
        },
        ..SimulationParams::default()
    };
    c.bench_function("step_256x256_noisy", |b| {
        b.iter(|| {
            for (current, shape1, shape2) in &cells {
                black_box(step(*current, *shape1, *shape2, pointer, 1.0, &noisy));
            }
        })
    });
}

fn bench_value_noise(c: &mut Criterion) {
    c.bench_function("value_noise", |b| {
        let p = Vec2::new(3.7, -1.9);
        b.iter(|| black_box(value_noise(black_box(p))))
    });
}

criterion_group!(benches, bench_step_full_grid, bench_value_noise);
criterion_main!(benches);
