//! Linear scalar advection.
//!
//! ∂u/∂t + a ∂u/∂x = 0
//!
//! where a is the constant advection velocity.

use super::PhysicsModel;

/// Linear advection with constant velocity, f(u) = a·u.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearScalar {
    /// Advection velocity (positive = rightward)
    pub velocity: f64,
}

impl LinearScalar {
    /// Create a new advection law with given velocity.
    pub fn new(velocity: f64) -> Self {
        Self { velocity }
    }
}

impl Default for LinearScalar {
    /// Unit velocity.
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl PhysicsModel for LinearScalar {
    const SOLVER_NAME: &'static str = "LinearScalarSolver";
    const ELEMENT_PREFIX: &'static str = "LinearScalar";

    #[inline]
    fn flux(&self, u: f64) -> f64 {
        self.velocity * u
    }

    #[inline]
    fn flux_derivative(&self, _u: f64) -> f64 {
        self.velocity
    }
}
