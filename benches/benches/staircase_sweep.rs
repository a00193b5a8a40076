// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use understory_staircase::{Container, Point, Sweep, find_maximal_rectangles};

fn gen_uniform_points(count: usize, width: i64, height: i64, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out: Vec<Point> = (0..count)
        .map(|_| Point::new(rng.random_range(1..width), rng.random_range(1..height)))
        .collect();
    out.sort();
    out
}

/// Points packed onto a few rows, many per row.
fn gen_banded_points(bands: i64, per_band: usize, width: i64, height: i64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(0xBADC_F00D_1234_5678);
    let step = (height / (bands + 1)).max(1);
    let mut out = Vec::with_capacity(bands as usize * per_band);
    for b in 1..=bands {
        for _ in 0..per_band {
            out.push(Point::new(rng.random_range(1..width), b * step));
        }
    }
    out.sort();
    out
}

fn gen_clustered_points(clusters: usize, per_cluster: usize, spread: i64, size: i64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(clusters * per_cluster);
    for _ in 0..clusters {
        let cx = rng.random_range(spread..size - spread);
        let cy = rng.random_range(spread..size - spread);
        for _ in 0..per_cluster {
            let x = cx + rng.random_range(-spread..=spread);
            let y = cy + rng.random_range(-spread..=spread);
            out.push(Point::new(x, y));
        }
    }
    out.sort();
    out
}

fn bench_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_uniform");
    for &(n, size) in &[(64usize, 128i64), (256, 256), (1024, 512)] {
        let points = gen_uniform_points(n, size, size, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("fresh_n{}_m{}", n, size), |b| {
            b.iter(|| black_box(find_maximal_rectangles(black_box(&points), size, size)).len());
        });
        group.bench_function(format!("reused_n{}_m{}", n, size), |b| {
            let mut sweep = Sweep::new(Container::new(size, size));
            let mut out = Vec::new();
            b.iter(|| {
                out.clear();
                sweep.run_into(black_box(&points), &mut out);
                black_box(out.len())
            });
        });
    }
    group.finish();
}

fn bench_width_scaling(c: &mut Criterion) {
    // Fixed point count; cost should grow linearly with the container width.
    let mut group = c.benchmark_group("sweep_width_scaling");
    for &width in &[128i64, 512, 2048] {
        let points = gen_uniform_points(256, width, 256, 0xFACE_FEED_CAFE_BABE);
        group.throughput(Throughput::Elements(width as u64));
        group.bench_function(format!("n256_m{}", width), |b| {
            b.iter(|| black_box(find_maximal_rectangles(&points, width, 256)).len());
        });
    }
    group.finish();
}

fn bench_banded(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_banded");
    let points = gen_banded_points(16, 64, 512, 512);
    group.bench_function("bands16_per64", |b| {
        b.iter(|| black_box(find_maximal_rectangles(&points, 512, 512)).len());
    });
    group.finish();
}

fn bench_clustered_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_clustered");
    let points = gen_clustered_points(16, 64, 12, 1024);
    group.bench_function("sorted_output", |b| {
        b.iter_batched(
            || Sweep::new(Container::new(1024, 1024)).with_sorted_output(true),
            |mut sweep| black_box(sweep.run(&points)).len(),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_uniform,
    bench_width_scaling,
    bench_banded,
    bench_clustered_sorted,
);
criterion_main!(benches);
