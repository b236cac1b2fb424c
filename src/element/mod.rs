//! Cursors over the elements of the staggered space-time mesh.
//!
//! - [`Celm`]: conservation element, the control volume of one update
//! - [`Selm`]: solution element, carrier of a value/slope pair
//! - [`Element`]: either kind, for mixed-kind comparison
//!
//! Cursors borrow their [`Solver`](crate::solver::Solver), are `Copy`, and
//! move in place by half spacings. Moving by one half spacing flips the
//! time plane.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use cese::mesh::Grid;
//! use cese::solver::Solver;
//! use cese::types::Plane;
//!
//! let grid = Arc::new(Grid::new(0.0, 10.0, 10).unwrap());
//! let solver: Solver = Solver::new(grid, 1, 0.2).unwrap();
//!
//! let mut ce = solver.celm(0, Plane::Even).unwrap();
//! assert_eq!(ce.to_string(), "Celm(even, index=0, x=0.5, xneg=0, xpos=1)");
//! ce.move_pos().unwrap();
//! assert_eq!(ce.to_string(), "Celm(odd, index=0, x=1, xneg=0.5, xpos=1.5)");
//! ```

mod addressing;
mod celm;
mod compare;
mod selm;

pub use addressing::ElementKind;
pub use celm::Celm;
pub use compare::Element;
pub use selm::Selm;

mod sealed {
    pub trait Sealed {}
}

/// Element cursor kind, implemented by [`Celm`] and [`Selm`] only.
///
/// Cursors come from the checked factories
/// ([`Solver::celm`](crate::solver::Solver::celm),
/// [`Solver::selm`](crate::solver::Solver::selm)), from moves and from the
/// element iterators. There is no public way to place one at a raw slot:
///
/// ```compile_fail
/// use std::sync::Arc;
/// use cese::element::{Celm, Cursor};
/// use cese::{Grid, NoFlux, Solver};
///
/// let solver: Solver = Solver::new(Arc::new(Grid::new(0.0, 2.0, 2).unwrap()), 1, 0.1).unwrap();
/// let ce: Celm<'_, NoFlux> = Cursor::at(&solver, 500);
/// ```
pub trait Cursor<'a, M: crate::equations::PhysicsModel>: Copy + sealed::Sealed {
    /// Kind of element addressed.
    const KIND: ElementKind;
}

/// Generate the cursor API shared by [`Celm`] and [`Selm`].
macro_rules! define_cursor {
    ($name:ident, $kind:expr) => {
        impl<'a, M: $crate::equations::PhysicsModel> $name<'a, M> {
            /// Kind of element this cursor addresses.
            pub const KIND: $crate::element::ElementKind = $kind;

            #[inline]
            pub(crate) fn from_xindex(solver: &'a $crate::solver::Solver<M>, xindex: usize) -> Self {
                Self { solver, xindex }
            }

            /// Solver the cursor reads from.
            #[inline]
            pub fn solver(&self) -> &'a $crate::solver::Solver<M> {
                self.solver
            }

            /// Grid of the solver.
            #[inline]
            pub fn grid(&self) -> &'a $crate::mesh::Grid {
                self.solver.grid()
            }

            /// Storage slot.
            #[inline]
            pub fn xindex(&self) -> usize {
                self.xindex
            }

            /// Logical index on the element's plane.
            #[inline]
            pub fn index(&self) -> isize {
                Self::KIND.index(self.xindex)
            }

            #[inline]
            pub fn plane(&self) -> $crate::types::Plane {
                Self::KIND.plane(self.xindex)
            }

            #[inline]
            pub fn on_even_plane(&self) -> bool {
                self.plane().is_even()
            }

            #[inline]
            pub fn on_odd_plane(&self) -> bool {
                self.plane().is_odd()
            }

            /// Independent copy of the cursor.
            #[inline]
            pub fn duplicate(&self) -> Self {
                *self
            }

            /// Shorthand for [`duplicate`](Self::duplicate).
            #[inline]
            pub fn dup(&self) -> Self {
                *self
            }

            /// Move by `offset` half spacings in place.
            ///
            /// An odd offset flips the plane. A move leaving the valid window
            /// fails and leaves the cursor where it was.
            pub fn move_at(&mut self, offset: isize) -> $crate::error::Result<&mut Self> {
                self.xindex = Self::KIND.shift(self.solver.grid().xsize(), self.xindex, offset)?;
                Ok(self)
            }

            /// Move one full spacing left, staying on the plane.
            pub fn move_left(&mut self) -> $crate::error::Result<&mut Self> {
                self.move_at(-2)
            }

            /// Move one full spacing right, staying on the plane.
            pub fn move_right(&mut self) -> $crate::error::Result<&mut Self> {
                self.move_at(2)
            }

            /// Move one half spacing left onto the other plane.
            pub fn move_neg(&mut self) -> $crate::error::Result<&mut Self> {
                self.move_at(-1)
            }

            /// Move one half spacing right onto the other plane.
            pub fn move_pos(&mut self) -> $crate::error::Result<&mut Self> {
                self.move_at(1)
            }

            /// Coordinate of the element's slot.
            #[inline]
            pub fn x(&self) -> f64 {
                self.grid().x_at(self.xindex)
            }

            /// Coordinate of the left neighbouring slot.
            #[inline]
            pub fn xneg(&self) -> f64 {
                self.grid().x_at(self.xindex - 1)
            }

            /// Coordinate of the right neighbouring slot.
            #[inline]
            pub fn xpos(&self) -> f64 {
                self.grid().x_at(self.xindex + 1)
            }

            #[inline]
            pub fn dx(&self) -> f64 {
                self.xpos() - self.xneg()
            }

            /// Midpoint of the element's extent.
            #[inline]
            pub fn xctr(&self) -> f64 {
                (self.xneg() + self.xpos()) / 2.0
            }
        }

        impl<'a, M: $crate::equations::PhysicsModel> $crate::element::Cursor<'a, M> for $name<'a, M> {
            const KIND: $crate::element::ElementKind = $kind;
        }

        impl<M: $crate::equations::PhysicsModel> $crate::element::sealed::Sealed for $name<'_, M> {}

        impl<M: $crate::equations::PhysicsModel> Clone for $name<'_, M> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<M: $crate::equations::PhysicsModel> Copy for $name<'_, M> {}

        impl<M: $crate::equations::PhysicsModel> PartialEq for $name<'_, M> {
            fn eq(&self, other: &Self) -> bool {
                std::ptr::eq(self.solver, other.solver) && self.xindex == other.xindex
            }
        }

        impl<M: $crate::equations::PhysicsModel> PartialOrd for $name<'_, M> {
            /// Slot order; `None` across solvers.
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                if std::ptr::eq(self.solver, other.solver) {
                    Some(self.xindex.cmp(&other.xindex))
                } else {
                    None
                }
            }
        }

        impl<M: $crate::equations::PhysicsModel> std::fmt::Display for $name<'_, M> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                use $crate::types::Real;
                write!(
                    f,
                    "{}{}({}, index={}, x={}, xneg={}, xpos={})",
                    M::ELEMENT_PREFIX,
                    Self::KIND.name(),
                    self.plane(),
                    self.index(),
                    Real(self.x()),
                    Real(self.xneg()),
                    Real(self.xpos())
                )
            }
        }

        impl<M: $crate::equations::PhysicsModel> std::fmt::Debug for $name<'_, M> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("xindex", &self.xindex)
                    .field("plane", &self.plane())
                    .field("index", &self.index())
                    .finish()
            }
        }
    };
}

pub(crate) use define_cursor;
