//! The CESE solver: grid, field and physics model under one owner.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::core::Field;
use super::iter::{CelmIter, ElementIter, SelmIter};
use super::limiters::FluxCorrectedScratch;
use super::{Limiter, MarchConfig};
use crate::element::{Celm, ElementKind, Selm};
use crate::equations::{InviscidBurgers, LinearScalar, NoFlux, PhysicsModel};
use crate::error::{Error, IndexError, Result};
use crate::mesh::Grid;
use crate::types::{Plane, Real};

/// Space-time CESE solver for a scalar conservation law.
///
/// Owns a shared [`Grid`], the [`Field`] of values and slopes on both
/// time planes and the physics model `M`. Element cursors borrow the
/// solver; marching needs it mutably, so no cursor can outlive a step.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use cese::mesh::Grid;
/// use cese::solver::LinearScalarSolver;
/// use cese::types::Plane;
///
/// let grid = Arc::new(Grid::new(0.0, 4.0, 4).unwrap());
/// let mut solver = LinearScalarSolver::new(grid, 1, 0.5).unwrap();
/// solver.set_so0(0, &[1.0; 5], Plane::Even).unwrap();
/// solver.setup_march();
/// solver.march_alpha2(2).unwrap();
///
/// for value in solver.get_so0(0, Plane::Even).unwrap() {
///     assert!((value - 1.0).abs() < 1e-14);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Solver<M: PhysicsModel = NoFlux> {
    grid: Arc<Grid>,
    field: Field,
    model: M,
    config: MarchConfig,
    /// Plane holding the latest solution
    plane: Plane,
    prepared: bool,
    /// Reused buffer for destination-plane updates
    pub(super) scratch: Vec<f64>,
    pub(super) limiter_scratch: FluxCorrectedScratch,
}

/// Solver for linear scalar advection.
pub type LinearScalarSolver = Solver<LinearScalar>;

/// Solver for the inviscid Burgers equation.
pub type InviscidBurgersSolver = Solver<InviscidBurgers>;

fn check_time_increment<M: PhysicsModel>(method: &str, time_increment: f64) -> Result<()> {
    if time_increment.is_finite() {
        return Ok(());
    }
    Err(Error::invalid_argument(format!(
        "{}::{}(time_increment={}) invalid argument: time_increment not finite",
        M::SOLVER_NAME,
        method,
        Real(time_increment)
    )))
}

impl<M: PhysicsModel + Default> Solver<M> {
    /// Create a solver with the model's default parameters.
    pub fn new(grid: Arc<Grid>, nvar: usize, time_increment: f64) -> Result<Self> {
        Self::with_model(grid, nvar, time_increment, M::default())
    }
}

impl<M: PhysicsModel> Solver<M> {
    /// Create a solver with `nvar` independent channels of `model`.
    ///
    /// Values and slopes start at zero. Boundaries default to periodic and
    /// the limiter to the model's choice.
    pub fn with_model(
        grid: Arc<Grid>,
        nvar: usize,
        time_increment: f64,
        model: M,
    ) -> Result<Self> {
        if nvar < 1 {
            return Err(Error::invalid_argument(format!(
                "{}::{}(nvar={}) invalid argument: nvar smaller than 1",
                M::SOLVER_NAME,
                M::SOLVER_NAME,
                nvar
            )));
        }
        check_time_increment::<M>(M::SOLVER_NAME, time_increment)?;

        let field = Field::new(grid.xsize(), nvar, time_increment);
        let config = MarchConfig::for_model(&model);
        debug!(
            solver = M::SOLVER_NAME,
            ncelm = grid.ncelm(),
            nvar,
            time_increment,
            limiter = config.limiter.name(),
            "created solver"
        );

        Ok(Self {
            grid,
            field,
            model,
            config,
            plane: Plane::Even,
            prepared: false,
            scratch: Vec::new(),
            limiter_scratch: FluxCorrectedScratch::default(),
        })
    }

    /// Replace the marching configuration.
    pub fn with_config(mut self, config: MarchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_config(&mut self, config: MarchConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &MarchConfig {
        &self.config
    }

    /// Limiter in effect for the value update.
    pub fn limiter(&self) -> Limiter {
        self.config.limiter
    }

    /// Copy with its own, equal-valued grid instead of the shared one.
    pub fn clone_with_grid(&self) -> Self {
        let mut copy = self.clone();
        copy.grid = Arc::new(Grid::clone(&self.grid));
        copy
    }

    /// True when both solvers hold the same grid instance.
    pub fn shares_grid<N: PhysicsModel>(&self, other: &Solver<N>) -> bool {
        Arc::ptr_eq(&self.grid, &other.grid)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Shared handle to the grid.
    pub fn grid_arc(&self) -> &Arc<Grid> {
        &self.grid
    }

    #[inline]
    pub fn field(&self) -> &Field {
        &self.field
    }

    #[inline]
    pub(crate) fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    #[inline]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Number of independent channels.
    #[inline]
    pub fn nvar(&self) -> usize {
        self.field.nvar()
    }

    pub fn time_increment(&self) -> f64 {
        self.field.time_increment()
    }

    /// Change the time increment. Non-finite values are rejected and leave
    /// the solver unchanged.
    pub fn set_time_increment(&mut self, time_increment: f64) -> Result<()> {
        check_time_increment::<M>("set_time_increment", time_increment)?;
        self.field.set_time_increment(time_increment);
        Ok(())
    }

    pub fn dt(&self) -> f64 {
        self.field.time_increment()
    }

    pub fn hdt(&self) -> f64 {
        self.field.hdt()
    }

    pub fn qdt(&self) -> f64 {
        self.field.qdt()
    }

    /// Plane holding the latest solution.
    pub fn plane(&self) -> Plane {
        self.plane
    }

    pub(super) fn set_plane(&mut self, plane: Plane) {
        self.plane = plane;
    }

    /// True once [`setup_march`](Self::setup_march) has run.
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    pub(super) fn set_prepared(&mut self) {
        self.prepared = true;
    }

    /// Conservation element `ielm` on `plane`.
    pub fn celm(&self, ielm: isize, plane: Plane) -> Result<Celm<'_, M>> {
        let xindex = ElementKind::Celm.locate(self.grid.xsize(), ielm, plane)?;
        Ok(Celm::from_xindex(self, xindex))
    }

    /// Solution element `ielm` on `plane`.
    pub fn selm(&self, ielm: isize, plane: Plane) -> Result<Selm<'_, M>> {
        let xindex = ElementKind::Selm.locate(self.grid.xsize(), ielm, plane)?;
        Ok(Selm::from_xindex(self, xindex))
    }

    /// Interior conservation elements of `plane`.
    pub fn celms(&self, plane: Plane) -> CelmIter<'_, M> {
        let nelem = self.grid.ncelm() - plane.offset() as usize;
        ElementIter::new(self, plane, nelem, Celm::from_xindex)
    }

    /// Interior solution elements of `plane`.
    pub fn selms(&self, plane: Plane) -> SelmIter<'_, M> {
        let nelem = self.grid.nselm() - plane.offset() as usize;
        ElementIter::new(self, plane, nelem, Selm::from_xindex)
    }

    /// Number of interior solution elements on `plane`.
    #[inline]
    pub fn span(&self, plane: Plane) -> usize {
        self.grid.nselm() - plane.offset() as usize
    }

    pub(crate) fn check_variable(&self, op: &'static str, iv: usize) -> Result<()> {
        if iv >= self.nvar() {
            return Err(IndexError::Variable {
                op,
                iv,
                nvar: self.nvar(),
            }
            .into());
        }
        Ok(())
    }

    fn check_length(&self, op: &'static str, plane: Plane, actual: usize) -> Result<()> {
        let expected = self.span(plane);
        if actual != expected {
            return Err(IndexError::Length {
                op,
                expected,
                actual,
            }
            .into());
        }
        Ok(())
    }

    /// Values of channel `iv` on the interior of `plane`.
    pub fn get_so0(&self, iv: usize, plane: Plane) -> Result<Vec<f64>> {
        self.check_variable("get_so0", iv)?;
        Ok(span_slots(self.span(plane), plane)
            .map(|xindex| self.field.so0(xindex, iv))
            .collect())
    }

    /// Slopes of channel `iv` on the interior of `plane`.
    pub fn get_so1(&self, iv: usize, plane: Plane) -> Result<Vec<f64>> {
        self.check_variable("get_so1", iv)?;
        Ok(span_slots(self.span(plane), plane)
            .map(|xindex| self.field.so1(xindex, iv))
            .collect())
    }

    /// Overwrite the values of channel `iv` on the interior of `plane`.
    pub fn set_so0(&mut self, iv: usize, values: &[f64], plane: Plane) -> Result<()> {
        self.check_variable("set_so0", iv)?;
        self.check_length("set_so0", plane, values.len())?;
        for (xindex, &value) in span_slots(self.span(plane), plane).zip(values) {
            self.field.set_so0(xindex, iv, value);
        }
        Ok(())
    }

    /// Overwrite the slopes of channel `iv` on the interior of `plane`.
    pub fn set_so1(&mut self, iv: usize, values: &[f64], plane: Plane) -> Result<()> {
        self.check_variable("set_so1", iv)?;
        self.check_length("set_so1", plane, values.len())?;
        for (xindex, &value) in span_slots(self.span(plane), plane).zip(values) {
            self.field.set_so1(xindex, iv, value);
        }
        Ok(())
    }

    /// CFL numbers on the interior of `plane`.
    pub fn get_cfl(&self, plane: Plane) -> Vec<f64> {
        span_slots(self.span(plane), plane)
            .map(|xindex| self.field.cfl(xindex))
            .collect()
    }

    /// Overwrite the CFL numbers on the interior of `plane`.
    pub fn set_cfl(&mut self, values: &[f64], plane: Plane) -> Result<()> {
        self.check_length("set_cfl", plane, values.len())?;
        for (xindex, &value) in span_slots(self.span(plane), plane).zip(values) {
            self.field.set_cfl(xindex, value);
        }
        Ok(())
    }

    /// Largest CFL number on the interior of `plane`.
    pub fn max_cfl(&self, plane: Plane) -> f64 {
        span_slots(self.span(plane), plane)
            .map(|xindex| self.field.cfl(xindex))
            .fold(0.0, f64::max)
    }

    /// Half-step predicted values of channel `iv` on the interior of `plane`.
    pub fn get_so0p(&self, iv: usize, plane: Plane) -> Result<Vec<f64>> {
        self.check_variable("get_so0p", iv)?;
        Ok(self.selms(plane).map(|se| se.so0p(iv)).collect())
    }

    /// Coordinates of the interior solution elements of `plane`.
    pub fn x(&self, plane: Plane) -> Vec<f64> {
        self.selms(plane).map(|se| se.x()).collect()
    }

    /// Centers of the interior solution elements of `plane`.
    pub fn xctr(&self, plane: Plane) -> Vec<f64> {
        self.selms(plane).map(|se| se.xctr()).collect()
    }

    /// Raw value array, layout `[xsize, nvar]`.
    pub fn so0(&self) -> &[f64] {
        self.field.so0_data()
    }

    pub fn so0_mut(&mut self) -> &mut [f64] {
        self.field.so0_data_mut()
    }

    /// Raw slope array, layout `[xsize, nvar]`.
    pub fn so1(&self) -> &[f64] {
        self.field.so1_data()
    }

    pub fn so1_mut(&mut self) -> &mut [f64] {
        self.field.so1_data_mut()
    }

    /// Raw CFL array, layout `[xsize]`.
    pub fn cfl(&self) -> &[f64] {
        self.field.cfl_data()
    }
}

/// Slots of the first `span` solution elements on `plane`.
fn span_slots(span: usize, plane: Plane) -> impl Iterator<Item = usize> {
    (0..span as isize).map(move |i| ElementKind::Selm.xindex(i, plane) as usize)
}

impl<M: PhysicsModel> fmt::Display for Solver<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(grid={})", M::SOLVER_NAME, self.grid)
    }
}
