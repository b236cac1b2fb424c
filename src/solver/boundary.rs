//! Ghost solution elements at both ends of the grid.
//!
//! The odd plane has one ghost element on each side, at indices -1 and
//! `ncelm`; conservation elements of the odd plane read them in the next
//! half step. The even plane's ghosts sit at indices -1 and `ncelm + 1`.

use super::{BoundaryTreatment, Solver};
use crate::element::ElementKind;
use crate::equations::PhysicsModel;
use crate::types::Plane;

/// Slot of solution element `ielm` on `plane`.
#[inline]
fn slot(ielm: isize, plane: Plane) -> usize {
    ElementKind::Selm.xindex(ielm, plane) as usize
}

/// `(source, ghost)` slot pairs filling the two ghosts of `plane`.
fn ghost_pairs(treatment: BoundaryTreatment, ncelm: usize, plane: Plane) -> [(usize, usize); 2] {
    let n = ncelm as isize;
    match (treatment, plane) {
        (BoundaryTreatment::Periodic, Plane::Odd) => [
            (slot(n - 1, plane), slot(-1, plane)),
            (slot(0, plane), slot(n, plane)),
        ],
        // Nodes 0 and ncelm coincide under periodicity
        (BoundaryTreatment::Periodic, Plane::Even) => [
            (slot(n - 1, plane), slot(-1, plane)),
            (slot(1, plane), slot(n + 1, plane)),
        ],
        (BoundaryTreatment::Extrapolate, Plane::Odd) => [
            (slot(0, plane), slot(-1, plane)),
            (slot(n - 1, plane), slot(n, plane)),
        ],
        (BoundaryTreatment::Extrapolate, Plane::Even) => [
            (slot(0, plane), slot(-1, plane)),
            (slot(n, plane), slot(n + 1, plane)),
        ],
    }
}

impl<M: PhysicsModel> Solver<M> {
    /// Fill the ghost values of `plane` from the interior.
    pub fn treat_boundary_so0(&mut self, plane: Plane) {
        let pairs = ghost_pairs(self.config().boundary, self.grid().ncelm(), plane);
        let field = self.field_mut();
        for (from, to) in pairs {
            field.copy_so0_slot(from, to);
        }
    }

    /// Fill the ghost slopes of `plane` from the interior.
    pub fn treat_boundary_so1(&mut self, plane: Plane) {
        let pairs = ghost_pairs(self.config().boundary, self.grid().ncelm(), plane);
        let field = self.field_mut();
        for (from, to) in pairs {
            field.copy_so1_slot(from, to);
        }
    }
}
