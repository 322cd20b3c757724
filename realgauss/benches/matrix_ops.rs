use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::SmallRng, SeedableRng};
use realgauss::{matrix, Matrix};
use std::hint::black_box;

fn bench_multiply(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);
    let a = Matrix::random(&mut rng, 200, 300);
    let b = Matrix::random(&mut rng, 300, 200);
    c.bench_function("multiply 200x300 * 300x200", |bench| {
        bench.iter(|| matrix::multiply(black_box(&a), black_box(&b)))
    });
}

fn bench_rref(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);
    let square = Matrix::random(&mut rng, 100, 100);
    let wide = Matrix::random(&mut rng, 50, 200);
    c.bench_function("rref 100x100", |bench| bench.iter(|| black_box(&square).rref()));
    c.bench_function("rref 50x200", |bench| bench.iter(|| black_box(&wide).rref()));
}

fn bench_rank(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);
    let a = Matrix::random(&mut rng, 100, 20);
    let b = Matrix::random(&mut rng, 20, 100);
    let low_rank = &a * &b;
    c.bench_function("rank 100x100 of rank 20", |bench| {
        bench.iter(|| black_box(&low_rank).rank())
    });
}

criterion_group!(benches, bench_multiply, bench_rref, bench_rank);
criterion_main!(benches);
