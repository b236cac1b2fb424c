//! Inviscid Burgers equation.
//!
//! ∂u/∂t + ∂(u²/2)/∂x = 0
//!
//! Smooth data steepens into shocks in finite time, so the solver runs it
//! with the flux-corrected limiter by default.

use super::PhysicsModel;
use crate::solver::Limiter;

/// Inviscid Burgers law, f(u) = u²/2.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InviscidBurgers;

impl PhysicsModel for InviscidBurgers {
    const SOLVER_NAME: &'static str = "InviscidBurgersSolver";
    const ELEMENT_PREFIX: &'static str = "InviscidBurgers";

    #[inline]
    fn flux(&self, u: f64) -> f64 {
        0.5 * u * u
    }

    #[inline]
    fn flux_derivative(&self, u: f64) -> f64 {
        u
    }

    fn default_limiter(&self) -> Limiter {
        Limiter::FluxCorrected
    }
}
