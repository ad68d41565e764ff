/*
 * Simulation Benchmark
 *
 * Measures the per-frame cost of the simulation core: a full physics step
 * and the collision check on its own.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use spalla_bird::input::apply_jump;
use spalla_bird::physics;
use spalla_bird::{GameParams, SpriteSizes, World};

const SIZES: SpriteSizes = SpriteSizes {
    bird: [34.0, 24.0],
    pipe: [52.0, 320.0],
    base: [336.0, 112.0],
};

fn new_world() -> World {
    World::new(&GameParams::default(), SIZES, StdRng::seed_from_u64(42))
}

// Benchmark runs of consecutive frames, restarting whenever the bird crashes
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for frames in [60u32, 600, 6000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(frames), frames, |b, &n| {
            let mut world = new_world();
            b.iter(|| {
                for _ in 0..n {
                    if !world.is_alive() {
                        apply_jump(&mut world);
                    }
                    black_box(physics::step(&mut world));
                }
            });
        });
    }

    group.finish();
}

// Benchmark the collision check alone
fn bench_collision(c: &mut Criterion) {
    let world = new_world();
    c.bench_function("detect_collision", |b| {
        b.iter(|| black_box(physics::detect_collision(black_box(&world))));
    });
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_step, bench_collision
}

criterion_main!(benches);
