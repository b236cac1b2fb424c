//! # cese-rs
//!
//! A one-dimensional space-time conservation element / solution element
//! (CESE) library for hyperbolic conservation laws.
//!
//! This crate provides the building blocks of the CESE method:
//! - Staggered space-time grid with ghost padding
//! - Conservation element (`Celm`) and solution element (`Selm`) cursors
//! - Value/slope storage on alternating time planes
//! - Two-half-step marching with the alpha-weighted slope scheme
//! - Periodic and extrapolating boundary treatment
//! - Flux-corrected limiting for steepening solutions
//! - Conservation law models (linear advection, inviscid Burgers)
//!
//! # Example
//!
//! ```
//! use std::f64::consts::TAU;
//! use std::sync::Arc;
//! use cese::{Grid, LinearScalarSolver, Plane};
//!
//! let ncelm = 16;
//! let grid = Arc::new(Grid::new(0.0, TAU, ncelm).unwrap());
//! let dx = TAU / ncelm as f64;
//! let mut solver = LinearScalarSolver::new(grid, 1, dx / 2.0).unwrap();
//!
//! let x = solver.x(Plane::Even);
//! let u: Vec<f64> = x.iter().map(|x| x.sin()).collect();
//! let ux: Vec<f64> = x.iter().map(|x| x.cos()).collect();
//! solver.set_so0(0, &u, Plane::Even).unwrap();
//! solver.set_so1(0, &ux, Plane::Even).unwrap();
//!
//! solver.setup_march();
//! solver.march_alpha2(ncelm).unwrap();
//! assert!(solver.max_cfl(Plane::Even) <= 1.0);
//! ```

pub mod element;
pub mod equations;
pub mod error;
pub mod mesh;
pub mod solver;
pub mod types;

// Re-export main types for convenience
pub use element::{Celm, Element, ElementKind, Selm};
pub use equations::{InviscidBurgers, LinearScalar, NoFlux, PhysicsModel};
pub use error::{Error, IndexError, Result};
pub use mesh::{BOUND_COUNT, Grid};
pub use solver::{
    BoundaryTreatment, Field, InviscidBurgersSolver, Limiter, LinearScalarSolver, MarchConfig,
    Solver,
};
pub use types::{Plane, Real};
