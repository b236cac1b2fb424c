//! Logical-index to storage-slot arithmetic on the staggered mesh.
//!
//! Solution element `ielm` on plane `p` lives at slot
//! `BOUND_COUNT + 2·ielm + p`; conservation element `ielm` at
//! `1 + BOUND_COUNT + 2·ielm + p`. Index 0 is the first interior element of
//! the even plane and negative indices address the front ghosts.

use std::fmt;

use crate::error::IndexError;
use crate::mesh::BOUND_COUNT;
use crate::types::Plane;

const BOUND: isize = BOUND_COUNT as isize;

/// Kind of element addressed on the staggered mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Conservation element
    Celm,
    /// Solution element
    Selm,
}

impl ElementKind {
    /// Type name used in renderings and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Celm => "Celm",
            Self::Selm => "Selm",
        }
    }

    /// Lower-case name used by the solver factories' error messages.
    pub const fn factory_name(self) -> &'static str {
        match self {
            Self::Celm => "celm",
            Self::Selm => "selm",
        }
    }

    /// Slot of element 0 on the even plane.
    #[inline]
    pub const fn base(self) -> isize {
        match self {
            Self::Celm => 1 + BOUND,
            Self::Selm => BOUND,
        }
    }

    /// Storage slot of `(ielm, plane)`, unchecked.
    #[inline]
    pub const fn xindex(self, ielm: isize, plane: Plane) -> isize {
        self.base() + 2 * ielm + plane.offset()
    }

    /// Logical index of a storage slot.
    #[inline]
    pub const fn index(self, xindex: usize) -> isize {
        (xindex as isize - self.base()).div_euclid(2)
    }

    /// Plane of a storage slot.
    #[inline]
    pub const fn plane(self, xindex: usize) -> Plane {
        Plane::from_offset(xindex as isize - self.base())
    }

    /// Half-open window `[lower, upper)` of valid slots for a grid of
    /// `xsize` coordinates.
    ///
    /// Conservation elements need both neighbouring solution elements,
    /// solution elements need both neighbouring coordinates.
    #[inline]
    pub const fn bounds(self, xsize: usize) -> (isize, isize) {
        let xsize = xsize as isize;
        match self {
            Self::Celm => (BOUND, xsize - BOUND),
            Self::Selm => (BOUND - 1, xsize - BOUND + 1),
        }
    }

    /// Resolve `(ielm, plane)` to a checked slot.
    pub fn locate(self, xsize: usize, ielm: isize, plane: Plane) -> Result<usize, IndexError> {
        let xindex = self.xindex(ielm, plane);
        let (lower, upper) = self.bounds(xsize);
        if xindex < lower || xindex >= upper {
            return Err(IndexError::Element {
                kind: self.factory_name(),
                ielm,
                odd: plane.offset() as u8,
                xindex,
                lower,
                upper,
            });
        }
        Ok(xindex as usize)
    }

    /// Shift a slot by `offset` half spacings, checked.
    pub fn shift(self, xsize: usize, xindex: usize, offset: isize) -> Result<usize, IndexError> {
        let from = xindex as isize;
        let target = from + offset;
        let (lower, upper) = self.bounds(xsize);
        if target < lower || target >= upper {
            return Err(IndexError::Move {
                kind: self.name(),
                from,
                offset,
                xindex: target,
                lower,
                upper,
            });
        }
        Ok(target as usize)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.factory_name())
    }
}
