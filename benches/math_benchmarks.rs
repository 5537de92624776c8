//! 数学运算性能基准测试
//!
//! 测试向量、行列、四元数与数值核心的性能，并与glam对照。

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use engine_math::{
    make_rotate_axis, HandSide, NumericKernel, Quat, Rotation, Summation, Vec3, Vec4, VectorOps,
};

fn bench_vec3_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec3_operations");

    let v1 = Vec3::new(1.0, 2.0, 3.0);
    let v2 = Vec3::new(4.0, 5.0, 6.0);
    let g1 = glam::Vec3::new(1.0, 2.0, 3.0);
    let g2 = glam::Vec3::new(4.0, 5.0, 6.0);

    group.bench_function("add", |b| {
        b.iter(|| black_box(v1 + v2));
    });

    group.bench_function("dot", |b| {
        b.iter(|| black_box(v1.dot(&v2)));
    });

    group.bench_function("cross", |b| {
        b.iter(|| black_box(v1.cross(&v2)));
    });

    group.bench_function("normalize", |b| {
        b.iter(|| black_box(v1.normalize()));
    });

    // glam对照
    group.bench_function("glam_dot", |b| {
        b.iter(|| black_box(g1.dot(g2)));
    });

    group.bench_function("glam_cross", |b| {
        b.iter(|| black_box(g1.cross(g2)));
    });

    group.finish();
}

fn bench_matrix_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_operations");

    let m1 = make_rotate_axis(
        HandSide::RHS,
        Vec3::new(0.0, 0.0, 1.0),
        Rotation::from_degree(30.0),
    );
    let m2 = make_rotate_axis(
        HandSide::RHS,
        Vec3::new(0.0, 1.0, 0.0),
        Rotation::from_degree(45.0),
    );
    let v = Vec4::new(1.0, 2.0, 3.0, 1.0);

    group.bench_function("mat4_mul", |b| {
        b.iter(|| black_box(m1 * m2));
    });

    group.bench_function("mat4_transform_vec4", |b| {
        b.iter(|| black_box(m1 * v));
    });

    group.bench_function("mat4_determinant", |b| {
        b.iter(|| black_box(m1.determinant()));
    });

    group.bench_function("mat4_inverse", |b| {
        b.iter(|| black_box(m1.inverse()));
    });

    group.bench_function("mat4_transpose", |b| {
        b.iter(|| black_box(m1.transpose()));
    });

    // glam对照
    let gm1 = glam::Mat4::from_rotation_z(0.5);
    let gm2 = glam::Mat4::from_rotation_y(0.8);
    group.bench_function("glam_mat4_mul", |b| {
        b.iter(|| black_box(gm1 * gm2));
    });

    group.bench_function("glam_mat4_inverse", |b| {
        b.iter(|| black_box(gm1.inverse()));
    });

    group.finish();
}

fn bench_quat_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat_operations");

    let q1 = Quat::new(1.0, 2.0, 3.0, 4.0).normalize();
    let q2 = Quat::new(-0.5, 0.1, 0.7, 0.2).normalize();

    group.bench_function("mul", |b| {
        b.iter(|| black_box(q1 * q2));
    });

    group.bench_function("normalize", |b| {
        b.iter(|| black_box(q1.normalize()));
    });

    group.bench_function("to_mtx", |b| {
        b.iter(|| black_box(q1.to_mtx()));
    });

    group.bench_function("mtx_to_qt", |b| {
        let m = q1.to_mtx();
        b.iter(|| black_box(m.to_qt()));
    });

    group.finish();
}

fn bench_kernel(c: &mut Criterion) {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut group = c.benchmark_group("kernel");

    let mut rng = StdRng::seed_from_u64(42);
    let values: Vec<f32> = (0..1024).map(|_| rng.gen_range(-100.0..100.0)).collect();

    group.bench_function("sum_kahan", |b| {
        b.iter(|| black_box(f32::sum(black_box(&values), false)));
    });

    group.bench_function("sum_speedy", |b| {
        b.iter(|| black_box(f32::sum(black_box(&values), true)));
    });

    group.bench_function("sqrt_newton", |b| {
        b.iter(|| black_box(<f32 as NumericKernel>::sqrt(black_box(1234.5), false)));
    });

    group.bench_function("sqrt_fast_inverse", |b| {
        b.iter(|| black_box(<f32 as NumericKernel>::sqrt(black_box(1234.5), true)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_vec3_operations,
    bench_matrix_operations,
    bench_quat_operations,
    bench_kernel
);
criterion_main!(benches);
