//! Comparison across element kinds.

use std::fmt;

use super::{Celm, ElementKind, Selm};
use crate::equations::PhysicsModel;
use crate::error::{Error, Result};

/// Either kind of element cursor.
///
/// Elements of different kinds are never equal and cannot be ordered:
/// the `try_*` comparisons fail with [`Error::Incomparable`] for them.
/// Elements of the same kind compare as their cursors do, so elements of
/// different solvers are unequal and unordered.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use cese::element::Element;
/// use cese::mesh::Grid;
/// use cese::solver::Solver;
/// use cese::types::Plane;
///
/// let grid = Arc::new(Grid::new(0.0, 10.0, 10).unwrap());
/// let solver: Solver = Solver::new(grid, 1, 0.2).unwrap();
/// let ce = Element::from(solver.celm(0, Plane::Even).unwrap());
/// let se = Element::from(solver.selm(0, Plane::Even).unwrap());
///
/// assert!(ce != se);
/// assert!(ce.try_lt(&se).unwrap_err().is_type_error());
/// ```
pub enum Element<'a, M: PhysicsModel> {
    Celm(Celm<'a, M>),
    Selm(Selm<'a, M>),
}

impl<M: PhysicsModel> Element<'_, M> {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Celm(_) => ElementKind::Celm,
            Self::Selm(_) => ElementKind::Selm,
        }
    }

    /// Apply `cmp` when both sides have the same kind.
    fn compare(
        &self,
        other: &Self,
        op: &'static str,
        cmp: fn(Option<std::cmp::Ordering>) -> bool,
    ) -> Result<bool> {
        match (self, other) {
            (Self::Celm(a), Self::Celm(b)) => Ok(cmp(a.partial_cmp(b))),
            (Self::Selm(a), Self::Selm(b)) => Ok(cmp(a.partial_cmp(b))),
            _ => Err(Error::incomparable(
                op,
                self.kind().name(),
                other.kind().name(),
            )),
        }
    }

    pub fn try_lt(&self, other: &Self) -> Result<bool> {
        self.compare(other, "<", |o| o.is_some_and(|o| o.is_lt()))
    }

    pub fn try_le(&self, other: &Self) -> Result<bool> {
        self.compare(other, "<=", |o| o.is_some_and(|o| o.is_le()))
    }

    pub fn try_gt(&self, other: &Self) -> Result<bool> {
        self.compare(other, ">", |o| o.is_some_and(|o| o.is_gt()))
    }

    pub fn try_ge(&self, other: &Self) -> Result<bool> {
        self.compare(other, ">=", |o| o.is_some_and(|o| o.is_ge()))
    }
}

impl<'a, M: PhysicsModel> From<Celm<'a, M>> for Element<'a, M> {
    fn from(ce: Celm<'a, M>) -> Self {
        Self::Celm(ce)
    }
}

impl<'a, M: PhysicsModel> From<Selm<'a, M>> for Element<'a, M> {
    fn from(se: Selm<'a, M>) -> Self {
        Self::Selm(se)
    }
}

impl<M: PhysicsModel> Clone for Element<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: PhysicsModel> Copy for Element<'_, M> {}

impl<M: PhysicsModel> PartialEq for Element<'_, M> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Celm(a), Self::Celm(b)) => a == b,
            (Self::Selm(a), Self::Selm(b)) => a == b,
            _ => false,
        }
    }
}

impl<M: PhysicsModel> fmt::Display for Element<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celm(ce) => fmt::Display::fmt(ce, f),
            Self::Selm(se) => fmt::Display::fmt(se, f),
        }
    }
}

impl<M: PhysicsModel> fmt::Debug for Element<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celm(ce) => f.debug_tuple("Celm").field(ce).finish(),
            Self::Selm(se) => f.debug_tuple("Selm").field(se).finish(),
        }
    }
}
