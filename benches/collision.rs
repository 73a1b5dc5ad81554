use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use terra_scene::motion::player;
use terra_scene::{Aabb, Matrix4, Transform, Vector3};

/// Deterministic pseudo-random obstacle field around the origin.
fn obstacle_field(count: usize) -> Vec<Aabb> {
    (0..count)
        .map(|i| {
            let f = i as f32;
            let center = Vector3::new(
                (f * 0.731).sin() * 20.0,
                (f * 0.377).cos() * 5.0,
                (f * 1.093).sin() * 20.0,
            );
            Aabb::from_center_half_extents(center, Vector3::splat(0.5))
        })
        .collect()
}

/// Benchmark: single box-box intersection (hit case)
fn bench_intersects_hit(c: &mut Criterion) {
    let a = Aabb::from_center_half_extents(Vector3::ZERO, Vector3::splat(0.5));
    let b = Aabb::from_center_half_extents(Vector3::splat(0.4), Vector3::splat(0.5));

    c.bench_function("aabb_intersects_hit", |bench| {
        bench.iter(|| black_box(black_box(&a).intersects(black_box(&b))))
    });
}

/// Benchmark: single box-box intersection (miss case)
fn bench_intersects_miss(c: &mut Criterion) {
    let a = Aabb::from_center_half_extents(Vector3::ZERO, Vector3::splat(0.5));
    let b = Aabb::from_center_half_extents(Vector3::new(10.0, 0.0, 0.0), Vector3::splat(0.5));

    c.bench_function("aabb_intersects_miss", |bench| {
        bench.iter(|| black_box(black_box(&a).intersects(black_box(&b))))
    });
}

/// Benchmark: per-axis displacement resolution against growing obstacle sets
fn bench_resolve_collisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_collisions");
    let entity = Transform::IDENTITY;
    let delta = Vector3::new(0.1, -0.05, -0.1);

    for count in [8, 64, 512] {
        let obstacles = obstacle_field(count);
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &obstacles,
            |bench, obstacles| {
                bench.iter(|| {
                    black_box(player::resolve_collisions(
                        black_box(&entity),
                        black_box(delta),
                        obstacles,
                    ))
                })
            },
        );
    }
    group.finish();
}

/// Benchmark: full model-matrix composition (translate, three rotations, scale)
fn bench_model_matrix(c: &mut Criterion) {
    let transform = Transform::new(
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(30.0, 45.0, 60.0),
        Vector3::new(1.0, 2.0, 0.5),
    );

    c.bench_function("model_matrix", |bench| {
        bench.iter(|| black_box(black_box(&transform).model_matrix()))
    });
}

/// Benchmark: raw 4x4 multiply
fn bench_matrix_multiply(c: &mut Criterion) {
    let a = Matrix4::rotate(30.0, Vector3::Y);
    let b = Matrix4::translate(Vector3::new(1.0, 2.0, 3.0));

    c.bench_function("matrix_multiply", |bench| {
        bench.iter(|| black_box(Matrix4::multiply(black_box(a), black_box(b))))
    });
}

criterion_group!(
    benches,
    bench_intersects_hit,
    bench_intersects_miss,
    bench_resolve_collisions,
    bench_model_matrix,
    bench_matrix_multiply,
);

criterion_main!(benches);
