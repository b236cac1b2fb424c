//! Conservation element cursor.

use super::{ElementKind, Selm, define_cursor};
use crate::equations::PhysicsModel;
use crate::solver::Solver;

/// Cursor over a conservation element.
///
/// A conservation element spans the two solution elements `selm_xn` and
/// `selm_xp` of its own plane and is capped by `selm_tp` on the next plane.
/// In one dimension the top and bottom elements coincide (`selm_tn`).
pub struct Celm<'a, M: PhysicsModel> {
    solver: &'a Solver<M>,
    xindex: usize,
}

define_cursor!(Celm, ElementKind::Celm);

impl<'a, M: PhysicsModel> Celm<'a, M> {
    /// Solution element on the left, same plane.
    #[inline]
    pub fn selm_xn(&self) -> Selm<'a, M> {
        Selm::from_xindex(self.solver, self.xindex - 1)
    }

    /// Solution element on the right, same plane.
    #[inline]
    pub fn selm_xp(&self) -> Selm<'a, M> {
        Selm::from_xindex(self.solver, self.xindex + 1)
    }

    /// Solution element capping the element on the next plane.
    #[inline]
    pub fn selm_tp(&self) -> Selm<'a, M> {
        Selm::from_xindex(self.solver, self.xindex)
    }

    /// Solution element at the bottom; coincides with [`selm_tp`](Self::selm_tp).
    #[inline]
    pub fn selm_tn(&self) -> Selm<'a, M> {
        Selm::from_xindex(self.solver, self.xindex)
    }

    /// New value of channel `iv` at `selm_tp` from space-time flux balance.
    pub fn calc_so0(&self, iv: usize) -> f64 {
        let se_xn = self.selm_xn();
        let se_xp = self.selm_xp();
        let left = se_xn.xp(iv) + se_xn.tp(iv);
        let right = se_xp.xn(iv) - se_xp.tp(iv);
        (left + right) / self.selm_tp().dx()
    }

    /// New slope of channel `iv` at `selm_tp`, weighted-averaging the two
    /// one-sided differences with weights `|d|^ALPHA`.
    ///
    /// `ALPHA = 0` is the plain average; larger values favour the smaller
    /// difference. The new value at `selm_tp` must already be in place.
    pub fn calc_so1_alpha<const ALPHA: i32>(&self, iv: usize) -> f64 {
        let se_xn = self.selm_xn();
        let se_xp = self.selm_xp();
        let upn = se_xn.so0p(iv);
        let upp = se_xp.so0p(iv);
        let utp = self.selm_tp().so0(iv);
        let duxn = (utp - upn) / se_xn.dxpos();
        let duxp = (upp - utp) / se_xp.dxneg();
        let fan = duxn.abs().powi(ALPHA);
        let fap = duxp.abs().powi(ALPHA);
        (fap * duxn + fan * duxp) / (fap + fan + f64::MIN_POSITIVE)
    }

    /// [`calc_so1_alpha`](Self::calc_so1_alpha) with `ALPHA = 0`.
    pub fn calc_so1_alpha0(&self, iv: usize) -> f64 {
        self.calc_so1_alpha::<0>(iv)
    }

    /// [`calc_so1_alpha`](Self::calc_so1_alpha) with `ALPHA = 1`.
    pub fn calc_so1_alpha1(&self, iv: usize) -> f64 {
        self.calc_so1_alpha::<1>(iv)
    }

    /// [`calc_so1_alpha`](Self::calc_so1_alpha) with `ALPHA = 2`.
    pub fn calc_so1_alpha2(&self, iv: usize) -> f64 {
        self.calc_so1_alpha::<2>(iv)
    }
}
