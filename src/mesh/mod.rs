//! Mesh representation.
//!
//! Provides the staggered 1D grid of the space-time CESE scheme: nodes,
//! cell centers and mirrored ghost coordinates in one padded array.

mod grid;

pub use grid::{BOUND_COUNT, Grid};
