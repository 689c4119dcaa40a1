use chiolab::{persistent::List, LinkedList, Matrix};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::SmallRng, SeedableRng};
use std::hint::black_box;

fn determinant(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);
    let m = Matrix::random(&mut rng, 8, 8).unwrap();
    c.bench_function("chio 8x8", |b| b.iter(|| black_box(&m).determinant()));
    c.bench_function("cofactor 8x8", |b| {
        b.iter(|| black_box(&m).cofactor_determinant())
    });

    let m = Matrix::random(&mut rng, 64, 64).unwrap();
    c.bench_function("chio 64x64", |b| b.iter(|| black_box(&m).determinant()));
}

fn multiply(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);
    let m1 = Matrix::random(&mut rng, 100, 80).unwrap();
    let m2 = Matrix::random(&mut rng, 80, 120).unwrap();
    c.bench_function("multiply 100x80 80x120", |b| {
        b.iter(|| black_box(&m1).multiply(black_box(&m2)))
    });
    c.bench_function("transpose 100x80", |b| b.iter(|| black_box(&m1).transposed()));
}

fn lists(c: &mut Criterion) {
    let persistent: List<usize> = (0..10_000).collect();
    let mutable: LinkedList<usize> = (0..10_000).collect();
    c.bench_function("persistent drop 5000", |b| {
        b.iter(|| black_box(&persistent).drop(5000))
    });
    c.bench_function("persistent take 5000", |b| {
        b.iter(|| black_box(&persistent).take(5000))
    });
    c.bench_function("mutable drop 5000", |b| b.iter(|| black_box(&mutable).drop(5000)));
    c.bench_function("mutable take 5000", |b| b.iter(|| black_box(&mutable).take(5000)));
}

criterion_group!(benches, determinant, multiply, lists);
criterion_main!(benches);
