//! Benchmark for noise and heightmap sampling.
//!
//! Run with: cargo bench --package voxcraft_procedural --bench noise_benchmark

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use voxcraft_procedural::{Heightmap, NoiseField, SimplexNoise, VoxelGrid, WorldSeed};

fn benchmark_single_sample(c: &mut Criterion) {
    let noise = SimplexNoise::new(WorldSeed::new(42));

    c.bench_function("single_noise_sample", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(noise.sample(black_box(x), black_box(x * 0.7)))
        });
    });
}

fn benchmark_heightmap(c: &mut Criterion) {
    let field = NoiseField::new(WorldSeed::new(42));

    let mut group = c.benchmark_group("heightmap");
    group.throughput(Throughput::Elements(16 * 16));
    group.bench_function("16x16_heightmap", |b| {
        b.iter(|| black_box(Heightmap::sample(&field, 16)));
    });
    group.finish();
}

fn benchmark_classification(c: &mut Criterion) {
    let map = Heightmap::sample(&NoiseField::new(WorldSeed::new(42)), 16);

    let mut group = c.benchmark_group("classification");
    group.throughput(Throughput::Elements(16 * 32 * 16));
    group.bench_function("16x32x16_grid", |b| {
        b.iter(|| black_box(VoxelGrid::classify(&map, 32, 10.0)));
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_sample,
    benchmark_heightmap,
    benchmark_classification
);
criterion_main!(benches);
