//! CESE solver components.
//!
//! # Submodules
//!
//! - [`core`]: value, slope and CFL storage ([`Field`])
//! - `limiters`: bounded value updates
//!
//! The [`Solver`] itself is split over the files of this module by concern:
//! construction and bulk access, element iteration, marching and boundary
//! treatment.

mod boundary;
mod cese;
mod config;
pub mod core;
mod iter;
mod limiters;
mod march;

pub use self::cese::{InviscidBurgersSolver, LinearScalarSolver, Solver};
pub use self::config::{BoundaryTreatment, Limiter, MarchConfig};
pub use self::core::Field;
pub use self::iter::{CelmIter, ElementIter, SelmIter};
