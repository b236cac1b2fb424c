//! Solution element cursor.

use super::{ElementKind, define_cursor};
use crate::equations::PhysicsModel;
use crate::error::Result;
use crate::solver::Solver;

/// Cursor over a solution element.
///
/// A solution element carries the value `so0` and slope `so1` of every
/// channel at its slot. The flux pieces `xn`, `xp`, `tn`, `tp` integrate
/// the linear space-time reconstruction over the element's four faces
/// and are the building blocks of the value update.
pub struct Selm<'a, M: PhysicsModel> {
    solver: &'a Solver<M>,
    xindex: usize,
}

define_cursor!(Selm, ElementKind::Selm);

impl<M: PhysicsModel> Selm<'_, M> {
    /// Distance to the left neighbouring slot.
    #[inline]
    pub fn dxneg(&self) -> f64 {
        self.x() - self.xneg()
    }

    /// Distance to the right neighbouring slot.
    #[inline]
    pub fn dxpos(&self) -> f64 {
        self.xpos() - self.x()
    }

    #[inline]
    pub fn dt(&self) -> f64 {
        self.solver.field().time_increment()
    }

    #[inline]
    pub fn hdt(&self) -> f64 {
        self.solver.field().hdt()
    }

    #[inline]
    pub fn qdt(&self) -> f64 {
        self.solver.field().qdt()
    }

    /// Value of channel `iv`.
    ///
    /// # Panics
    ///
    /// Panics if `iv >= nvar`.
    #[inline]
    pub fn so0(&self, iv: usize) -> f64 {
        assert!(iv < self.solver.nvar(), "so0(): out of nvar range");
        self.solver.field().so0(self.xindex, iv)
    }

    /// Slope of channel `iv`.
    ///
    /// # Panics
    ///
    /// Panics if `iv >= nvar`.
    #[inline]
    pub fn so1(&self, iv: usize) -> f64 {
        assert!(iv < self.solver.nvar(), "so1(): out of nvar range");
        self.solver.field().so1(self.xindex, iv)
    }

    /// Value of channel `iv`, or [`IndexError::Variable`](crate::error::IndexError::Variable).
    pub fn try_so0(&self, iv: usize) -> Result<f64> {
        self.solver.check_variable("so0", iv)?;
        Ok(self.solver.field().so0(self.xindex, iv))
    }

    /// Slope of channel `iv`, or [`IndexError::Variable`](crate::error::IndexError::Variable).
    pub fn try_so1(&self, iv: usize) -> Result<f64> {
        self.solver.check_variable("so1", iv)?;
        Ok(self.solver.field().so1(self.xindex, iv))
    }

    /// CFL number stored at the element.
    #[inline]
    pub fn cfl(&self) -> f64 {
        self.solver.field().cfl(self.xindex)
    }

    /// Flux through the left half of the spatial face.
    ///
    /// `dxneg · (u + (½(x + xneg) - xctr) · ux)`
    pub fn xn(&self, iv: usize) -> f64 {
        let displacement = 0.5 * (self.x() + self.xneg()) - self.xctr();
        self.dxneg() * (self.so0(iv) + displacement * self.so1(iv))
    }

    /// Flux through the right half of the spatial face.
    ///
    /// `dxpos · (u + (½(x + xpos) - xctr) · ux)`
    pub fn xp(&self, iv: usize) -> f64 {
        let displacement = 0.5 * (self.x() + self.xpos()) - self.xctr();
        self.dxpos() * (self.so0(iv) + displacement * self.so1(iv))
    }

    /// Flux through the temporal face toward the previous plane.
    pub fn tn(&self, iv: usize) -> f64 {
        let (u, ux) = (self.so0(iv), self.so1(iv));
        let model = self.solver.model();
        let w = model.flux_derivative(u);
        let displacement = self.x() - self.xctr();
        let mut ret = model.flux(u);
        ret += displacement * w * ux;
        ret += self.qdt() * w * w * ux;
        self.hdt() * ret
    }

    /// Flux through the temporal face toward the next plane.
    pub fn tp(&self, iv: usize) -> f64 {
        let (u, ux) = (self.so0(iv), self.so1(iv));
        let model = self.solver.model();
        let w = model.flux_derivative(u);
        let displacement = self.x() - self.xctr();
        let mut ret = model.flux(u);
        ret += displacement * w * ux;
        ret -= self.qdt() * w * w * ux;
        self.hdt() * ret
    }

    /// Value extrapolated to the element center half a step later.
    ///
    /// `u + (x - xctr) · ux - hdt · f'(u) · ux`
    ///
    /// The time derivative is `-f'(u) · ux` for every model, Burgers
    /// included, rather than the bare `-ux` of a unit-speed wave.
    pub fn so0p(&self, iv: usize) -> f64 {
        let (u, ux) = (self.so0(iv), self.so1(iv));
        let w = self.solver.model().flux_derivative(u);
        let mut ret = u;
        ret += (self.x() - self.xctr()) * ux;
        ret -= self.hdt() * w * ux;
        ret
    }

    /// CFL number from the current values: `max |f'(u)| · hdt / min(dxneg, dxpos)`.
    pub fn calc_cfl(&self) -> f64 {
        let hdx = self.dxneg().min(self.dxpos());
        let model = self.solver.model();
        (0..self.solver.nvar())
            .map(|iv| model.wave_speed(self.so0(iv)) * self.hdt() / hdx)
            .fold(0.0, f64::max)
    }
}
