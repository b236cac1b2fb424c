//! Lazy iteration over the interior elements of one time plane.

use std::fmt;
use std::iter::FusedIterator;

use super::Solver;
use crate::element::{Celm, Cursor, Selm};
use crate::equations::PhysicsModel;
use crate::types::Plane;

/// Iterator over the interior elements of one plane, in index order.
///
/// Restartable by cloning. Renders its progress as
/// `SolverElementIterator(celm, on_even_plane, current=0, nelem=10)`.
pub struct ElementIter<'a, M: PhysicsModel, E> {
    solver: &'a Solver<M>,
    plane: Plane,
    current: usize,
    nelem: usize,
    /// Unchecked placement, fed only in-window slots
    place: fn(&'a Solver<M>, usize) -> E,
}

/// Iterator over conservation elements.
pub type CelmIter<'a, M> = ElementIter<'a, M, Celm<'a, M>>;

/// Iterator over solution elements.
pub type SelmIter<'a, M> = ElementIter<'a, M, Selm<'a, M>>;

impl<'a, M: PhysicsModel, E: Cursor<'a, M>> ElementIter<'a, M, E> {
    pub(crate) fn new(
        solver: &'a Solver<M>,
        plane: Plane,
        nelem: usize,
        place: fn(&'a Solver<M>, usize) -> E,
    ) -> Self {
        Self {
            solver,
            plane,
            current: 0,
            nelem,
            place,
        }
    }

    pub fn plane(&self) -> Plane {
        self.plane
    }

    /// Index of the next element to yield.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Total number of elements on the plane.
    pub fn nelem(&self) -> usize {
        self.nelem
    }
}

impl<'a, M: PhysicsModel, E: Cursor<'a, M>> Iterator for ElementIter<'a, M, E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        if self.current >= self.nelem {
            return None;
        }
        let xindex = E::KIND.xindex(self.current as isize, self.plane) as usize;
        self.current += 1;
        Some((self.place)(self.solver, xindex))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.nelem - self.current;
        (remaining, Some(remaining))
    }
}

impl<'a, M: PhysicsModel, E: Cursor<'a, M>> ExactSizeIterator for ElementIter<'a, M, E> {}

impl<'a, M: PhysicsModel, E: Cursor<'a, M>> FusedIterator for ElementIter<'a, M, E> {}

impl<M: PhysicsModel, E> Clone for ElementIter<'_, M, E> {
    fn clone(&self) -> Self {
        Self {
            solver: self.solver,
            plane: self.plane,
            current: self.current,
            nelem: self.nelem,
            place: self.place,
        }
    }
}

impl<'a, M: PhysicsModel, E: Cursor<'a, M>> fmt::Display for ElementIter<'a, M, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SolverElementIterator({}, on_{}_plane, current={}, nelem={})",
            E::KIND,
            self.plane,
            self.current,
            self.nelem
        )
    }
}

impl<'a, M: PhysicsModel, E: Cursor<'a, M>> fmt::Debug for ElementIter<'a, M, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementIter")
            .field("kind", &E::KIND)
            .field("plane", &self.plane)
            .field("current", &self.current)
            .field("nelem", &self.nelem)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::mesh::Grid;
    use crate::solver::Solver;
    use crate::types::Plane;

    fn solver() -> Solver {
        Solver::new(Arc::new(Grid::new(0.0, 10.0, 10).unwrap()), 1, 0.2).unwrap()
    }

    #[test]
    fn test_counts() {
        let solver = solver();
        assert_eq!(solver.celms(Plane::Even).count(), 10);
        assert_eq!(solver.celms(Plane::Odd).count(), 9);
        assert_eq!(solver.selms(Plane::Even).count(), 11);
        assert_eq!(solver.selms(Plane::Odd).count(), 10);
        assert_eq!(solver.selms(Plane::Odd).len(), 10);
    }

    #[test]
    fn test_display_progress() {
        let solver = solver();
        let mut it = solver.celms(Plane::Even);
        assert_eq!(
            it.to_string(),
            "SolverElementIterator(celm, on_even_plane, current=0, nelem=10)"
        );
        it.next();
        it.next();
        assert_eq!(
            it.to_string(),
            "SolverElementIterator(celm, on_even_plane, current=2, nelem=10)"
        );
        let it = solver.selms(Plane::Odd);
        assert_eq!(
            it.to_string(),
            "SolverElementIterator(selm, on_odd_plane, current=0, nelem=10)"
        );
    }

    #[test]
    fn test_restartable() {
        let solver = solver();
        let it = solver.selms(Plane::Even);
        let first: Vec<isize> = it.clone().map(|se| se.index()).collect();
        let second: Vec<isize> = it.map(|se| se.index()).collect();
        assert_eq!(first, second);
        assert_eq!(first, (0..11).collect::<Vec<_>>());
    }

    #[test]
    fn test_yields_factory_elements() {
        let solver = solver();
        for (i, ce) in solver.celms(Plane::Odd).enumerate() {
            assert_eq!(ce, solver.celm(i as isize, Plane::Odd).unwrap());
        }
    }
}
