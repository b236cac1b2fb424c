//! Benchmarks for CESE marching.
//!
//! Run with: `cargo bench --bench march_bench`
//!
//! Compares full steps of the linear and Burgers solvers, with and without
//! the flux-corrected limiter, across grid sizes.

use std::f64::consts::TAU;
use std::sync::Arc;

use cese::solver::{Limiter, MarchConfig};
use cese::{Grid, InviscidBurgersSolver, LinearScalarSolver, Plane};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Sine wave on `[0, 2π]` at CFL 0.8.
fn setup_grid(ncelm: usize) -> (Arc<Grid>, f64, Vec<f64>, Vec<f64>) {
    let grid = Arc::new(Grid::new(0.0, TAU, ncelm).expect("valid grid"));
    let dt = 0.8 * TAU / ncelm as f64;
    let x: Vec<f64> = grid.nodes().collect();
    let u = x.iter().map(|x| x.sin()).collect();
    let ux = x.iter().map(|x| x.cos()).collect();
    (grid, dt, u, ux)
}

fn linear_solver(ncelm: usize) -> LinearScalarSolver {
    let (grid, dt, u, ux) = setup_grid(ncelm);
    let mut solver = LinearScalarSolver::new(grid, 1, dt).expect("valid solver");
    solver.set_so0(0, &u, Plane::Even).expect("span");
    solver.set_so1(0, &ux, Plane::Even).expect("span");
    solver.setup_march();
    solver
}

fn burgers_solver(ncelm: usize, limiter: Limiter) -> InviscidBurgersSolver {
    let (grid, dt, u, ux) = setup_grid(ncelm);
    let mut solver = InviscidBurgersSolver::new(grid, 1, dt)
        .expect("valid solver")
        .with_config(MarchConfig::default().with_limiter(limiter));
    solver.set_so0(0, &u, Plane::Even).expect("span");
    solver.set_so1(0, &ux, Plane::Even).expect("span");
    solver.setup_march();
    solver
}

/// Benchmark one full step of linear advection.
fn bench_linear_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_step");

    for ncelm in [64, 256, 1024, 4096] {
        let mut solver = linear_solver(ncelm);
        group.bench_with_input(BenchmarkId::new("alpha2", ncelm), &ncelm, |b, _| {
            b.iter(|| solver.march_alpha2(black_box(1)).expect("prepared"));
        });
    }

    group.finish();
}

/// Benchmark one full Burgers step with each limiter.
fn bench_burgers_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("burgers_step");

    for ncelm in [64, 256, 1024] {
        for limiter in [Limiter::None, Limiter::FluxCorrected] {
            let mut solver = burgers_solver(ncelm, limiter);
            group.bench_with_input(BenchmarkId::new(limiter.name(), ncelm), &ncelm, |b, _| {
                b.iter(|| solver.march_alpha2(black_box(1)).expect("prepared"));
            });
        }
    }

    group.finish();
}

/// Benchmark the slope weighting exponents on a single half step.
fn bench_slope_alpha(c: &mut Criterion) {
    let mut group = c.benchmark_group("slope_alpha");
    let mut solver = linear_solver(1024);

    group.bench_function("alpha0", |b| {
        b.iter(|| solver.march_half_so1_alpha::<0>(black_box(Plane::Even)));
    });
    group.bench_function("alpha1", |b| {
        b.iter(|| solver.march_half_so1_alpha::<1>(black_box(Plane::Even)));
    });
    group.bench_function("alpha2", |b| {
        b.iter(|| solver.march_half_so1_alpha2(black_box(Plane::Even)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_linear_step,
    bench_burgers_step,
    bench_slope_alpha
);
criterion_main!(benches);
