use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use inverse_cache::handle::MatrixHandle;
use inverse_cache::solve::solve_cached;
use inverse_cache::solver::{InverseSolver, LuSolver};
use nalgebra::DMatrix;

fn diag_dominant(n: usize, seed: u64) -> DMatrix<f64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut m = DMatrix::from_fn(n, n, |_, _| rng.gen_range(-1.0..1.0));
    for i in 0..n {
        let off_row: f64 = (0..n).filter(|&j| j != i).map(|j| m[(i, j)].abs()).sum();
        m[(i, i)] = off_row + 1.0;
    }
    m
}

fn bench_solve_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_cache");

    for &n in &[16usize, 64usize] {
        let matrix = diag_dominant(n, 42);

        group.bench_with_input(BenchmarkId::new("invert_no_cache", n), &n, |b, _| {
            b.iter(|| {
                let out = LuSolver.invert(&matrix).unwrap();
                black_box(out);
            });
        });

        group.bench_with_input(BenchmarkId::new("solve_cached", n), &n, |b, _| {
            let mut handle = MatrixHandle::new(matrix.clone());
            b.iter(|| {
                let out = solve_cached(&mut handle, &LuSolver).unwrap();
                black_box(out);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solve_cache);
criterion_main!(benches);
