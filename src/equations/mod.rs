//! Scalar conservation laws marched by the CESE solver.
//!
//! Each model supplies the flux of
//!
//! ∂u/∂t + ∂f(u)/∂x = 0
//!
//! and its derivative f'(u), the characteristic speed. A solver with
//! `nvar > 1` marches every channel as an independent copy of the same law.

mod burgers;
mod linear_scalar;
mod no_flux;

pub use burgers::InviscidBurgers;
pub use linear_scalar::LinearScalar;
pub use no_flux::NoFlux;

use std::fmt::Debug;

use crate::solver::Limiter;

/// A scalar hyperbolic conservation law.
///
/// # Example
///
/// ```
/// use cese::equations::{InviscidBurgers, LinearScalar, PhysicsModel};
///
/// let adv = LinearScalar::new(2.0);
/// assert_eq!(adv.flux(1.5), 3.0);
///
/// let burgers = InviscidBurgers;
/// assert_eq!(burgers.flux(2.0), 2.0);
/// assert_eq!(burgers.flux_derivative(-0.5), -0.5);
/// ```
pub trait PhysicsModel: Clone + Debug + Send + Sync {
    /// Name of the solver specialised on this model, used in renderings.
    const SOLVER_NAME: &'static str;

    /// Prefix of element renderings, e.g. `LinearScalar` for `LinearScalarCelm(...)`.
    const ELEMENT_PREFIX: &'static str;

    /// Physical flux f(u).
    fn flux(&self, u: f64) -> f64;

    /// Flux derivative f'(u).
    fn flux_derivative(&self, u: f64) -> f64;

    /// Absolute characteristic speed for CFL computation.
    #[inline]
    fn wave_speed(&self, u: f64) -> f64 {
        self.flux_derivative(u).abs()
    }

    /// Limiter applied to the value update unless configured otherwise.
    fn default_limiter(&self) -> Limiter {
        Limiter::None
    }
}
