//! Benchmarks for transform composition and application.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use homog2d::Transform;

/// Generates pseudo-random points for benchmarking.
fn generate_points(count: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    for _ in 0..count {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let x = (state as f64 / u64::MAX as f64) * 100.0;

        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let y = (state as f64 / u64::MAX as f64) * 100.0;

        points.push((x, y));
    }

    points
}

fn sample_transform() -> Transform<f64> {
    Transform::rotate(0.3)
        .then_translate(10.0, -4.0)
        .then_scale(2.0, 0.5)
        .then_rotate_about(1.2, 5.0, 5.0)
}

fn bench_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("algebra");

    let a = sample_transform();
    let b = Transform::rotate_clockwise(0.8).then_translate(1.0, 2.0);

    group.bench_function("multiply", |bench| {
        bench.iter(|| black_box(a).multiply(&black_box(b)))
    });
    group.bench_function("determinant", |bench| {
        bench.iter(|| black_box(a).determinant())
    });
    group.bench_function("inverse", |bench| bench.iter(|| black_box(a).inverse()));
    group.bench_function("rotate_about", |bench| {
        bench.iter(|| Transform::rotate_about(black_box(0.7), black_box(3.0), black_box(4.0)))
    });
    group.bench_function("fix", |bench| {
        bench.iter(|| {
            let mut t = black_box(a);
            t.fix();
            t
        })
    });

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_points");

    let t = sample_transform();

    for count in [100, 1000, 10000, 100000] {
        let points = generate_points(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("scalar", count), &points, |b, pts| {
            b.iter(|| t.apply_points(black_box(pts)))
        });

        #[cfg(feature = "simd")]
        group.bench_with_input(BenchmarkId::new("simd", count), &points, |b, pts| {
            b.iter(|| homog2d::simd::apply_points_x4(&t, black_box(pts)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_algebra, bench_apply);
criterion_main!(benches);
