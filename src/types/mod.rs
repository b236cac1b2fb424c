//! Small strongly-typed helpers shared by the mesh, elements and solver.
//!
//! # Example
//!
//! ```
//! use cese::types::{Plane, Real};
//!
//! assert_eq!(Plane::Even.flip(), Plane::Odd);
//! assert_eq!(Real(0.125).to_string(), "0.125");
//! assert_eq!(Real(std::f64::consts::PI).to_string(), "3.14159");
//! ```

mod plane;
mod real;

pub use plane::Plane;
pub use real::Real;
