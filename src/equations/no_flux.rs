//! Zero-flux law: values stay put, only slopes are re-evaluated.

use super::PhysicsModel;

/// Law with identically zero flux, the model of the base `Solver`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoFlux;

impl PhysicsModel for NoFlux {
    const SOLVER_NAME: &'static str = "Solver";
    const ELEMENT_PREFIX: &'static str = "";

    #[inline]
    fn flux(&self, _u: f64) -> f64 {
        0.0
    }

    #[inline]
    fn flux_derivative(&self, _u: f64) -> f64 {
        0.0
    }
}
