//! Time-plane parity of the staggered space-time mesh.

use std::fmt;

/// Parity of a time plane.
///
/// Even-plane solution elements sit on grid nodes, odd-plane ones on cell
/// centers. One half step marches from one plane to the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Plane {
    #[default]
    Even,
    Odd,
}

impl Plane {
    /// Plane from an "odd" flag.
    #[inline]
    pub const fn from_odd(odd: bool) -> Self {
        if odd { Self::Odd } else { Self::Even }
    }

    /// Plane of a storage slot relative to `base` (`slot - base` even means even plane).
    #[inline]
    pub const fn from_offset(offset: isize) -> Self {
        Self::from_odd(offset.rem_euclid(2) == 1)
    }

    #[inline]
    pub const fn is_odd(self) -> bool {
        matches!(self, Self::Odd)
    }

    #[inline]
    pub const fn is_even(self) -> bool {
        matches!(self, Self::Even)
    }

    /// Storage offset of the plane: 0 for even, 1 for odd.
    #[inline]
    pub const fn offset(self) -> isize {
        match self {
            Self::Even => 0,
            Self::Odd => 1,
        }
    }

    /// The other plane.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Self::Even => Self::Odd,
            Self::Odd => Self::Even,
        }
    }

    /// Name used in element and iterator renderings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<bool> for Plane {
    fn from(odd: bool) -> Self {
        Self::from_odd(odd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip() {
        assert_eq!(Plane::Even.flip(), Plane::Odd);
        assert_eq!(Plane::Odd.flip(), Plane::Even);
        assert_eq!(Plane::Odd.flip().flip(), Plane::Odd);
    }

    #[test]
    fn test_from_offset() {
        assert_eq!(Plane::from_offset(0), Plane::Even);
        assert_eq!(Plane::from_offset(3), Plane::Odd);
        assert_eq!(Plane::from_offset(-1), Plane::Odd);
        assert_eq!(Plane::from_offset(-2), Plane::Even);
    }

    #[test]
    fn test_offset_and_display() {
        assert_eq!(Plane::Even.offset(), 0);
        assert_eq!(Plane::Odd.offset(), 1);
        assert_eq!(Plane::Even.to_string(), "even");
        assert_eq!(Plane::from(true), Plane::Odd);
    }
}
