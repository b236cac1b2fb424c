//! Steepen a sine wave into a shock with the inviscid Burgers solver.
//!
//! Run with: `RUST_LOG=info cargo run --example burgers_1d`
//!
//! Prints the solution profile as CSV on stdout at a few snapshot times.

use std::f64::consts::TAU;
use std::sync::Arc;

use cese::solver::Limiter;
use cese::{Grid, InviscidBurgersSolver, Plane};
use tracing::info;

fn main() -> cese::Result<()> {
    tracing_subscriber::fmt::init();

    let ncelm = 100;
    let grid = Arc::new(Grid::new(0.0, TAU, ncelm)?);
    let dx = (grid.xmax() - grid.xmin()) / ncelm as f64;
    let dt = 0.9 * dx;

    let mut solver = InviscidBurgersSolver::new(grid, 1, dt)?;
    let x = solver.x(Plane::Even);
    let u0: Vec<f64> = x.iter().map(|x| x.sin()).collect();
    let ux0: Vec<f64> = x.iter().map(|x| x.cos()).collect();
    solver.set_so0(0, &u0, Plane::Even)?;
    solver.set_so1(0, &ux0, Plane::Even)?;
    solver.setup_march();
    assert_eq!(solver.limiter(), Limiter::FluxCorrected);

    println!("time,x,u");
    let snapshots = 4;
    let steps_per_snapshot = ncelm / 2;
    for snapshot in 0..=snapshots {
        if snapshot > 0 {
            solver.march_alpha2(steps_per_snapshot)?;
        }
        let time = (snapshot * steps_per_snapshot) as f64 * dt;
        let u = solver.get_so0(0, Plane::Even)?;
        for (x, u) in x.iter().zip(&u) {
            println!("{time:.4},{x:.6},{u:.6}");
        }
        let (min, max) = u
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        info!(time, min, max, max_cfl = solver.max_cfl(Plane::Even), "snapshot");
    }

    Ok(())
}
