//! Advect a sine wave once around a periodic domain and report the error.
//!
//! Run with: `RUST_LOG=debug cargo run --example advection_1d`

use std::f64::consts::TAU;
use std::sync::Arc;

use cese::{Grid, LinearScalarSolver, Plane};
use tracing::info;

fn main() -> cese::Result<()> {
    tracing_subscriber::fmt::init();

    let resolution = 64;
    let cfl = 0.8;

    info!("setting up grid");
    let xloc: Vec<f64> = (0..=resolution)
        .map(|i| i as f64 / resolution as f64 * TAU)
        .collect();
    let grid = Arc::new(Grid::from_xloc(&xloc)?);
    let dx = (grid.xmax() - grid.xmin()) / grid.ncelm() as f64;
    let nstep = (TAU / (dx * cfl)).ceil() as usize;
    let dt = TAU / nstep as f64;

    info!("building solver");
    let mut solver = LinearScalarSolver::new(grid, 1, dt)?;
    let u0: Vec<f64> = xloc.iter().map(|x| x.sin()).collect();
    let ux0: Vec<f64> = xloc.iter().map(|x| x.cos()).collect();
    solver.set_so0(0, &u0, Plane::Even)?;
    solver.set_so1(0, &ux0, Plane::Even)?;
    solver.setup_march();
    info!("problem summary: {solver}, nstep={nstep}, dt={dt:.6}");

    info!("marching one period");
    solver.march_alpha2(nstep)?;

    let u = solver.get_so0(0, Plane::Even)?;
    let max_error = u
        .iter()
        .zip(&u0)
        .map(|(u, u0)| (u - u0).abs())
        .fold(0.0, f64::max);
    info!(
        max_error,
        max_cfl = solver.max_cfl(Plane::Even),
        "done"
    );

    Ok(())
}
