//! Error types for grid construction, element addressing and marching.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the marching engine and its data structures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid construction or configuration argument.
    #[error("{0}")]
    InvalidArgument(String),

    /// Element, variable or array index out of range.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// Ordering requested between elements of different kinds.
    #[error("'{op}' not supported between instances of '{lhs}' and '{rhs}'")]
    Incomparable {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    /// Marching requested before `setup_march`.
    #[error("{0}(): solver not prepared, call setup_march() first")]
    NotPrepared(&'static str),
}

/// Out-of-range access on the staggered storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Element requested from the solver falls outside the valid window.
    #[error(
        "Field::{kind}_at(ielm={ielm}, odd_plane={odd}): xindex = {xindex} outside the interval [{lower}, {upper})"
    )]
    Element {
        kind: &'static str,
        ielm: isize,
        odd: u8,
        xindex: isize,
        lower: isize,
        upper: isize,
    },

    /// Cursor move would leave the valid window.
    #[error(
        "{kind}(xindex={from})::move_at(offset={offset}): xindex = {xindex} outside the interval [{lower}, {upper})"
    )]
    Move {
        kind: &'static str,
        from: isize,
        offset: isize,
        xindex: isize,
        lower: isize,
        upper: isize,
    },

    /// Variable index not below `nvar`.
    #[error("{op}(): out of nvar range")]
    Variable { op: &'static str, iv: usize, nvar: usize },

    /// Input array length does not match the addressed span.
    #[error("{op}(): input wrong size (expected {expected}, got {actual})")]
    Length {
        op: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl Error {
    /// Create an invalid-argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an incomparable-kinds error.
    pub fn incomparable(op: &'static str, lhs: &'static str, rhs: &'static str) -> Self {
        Self::Incomparable { op, lhs, rhs }
    }

    /// True for any [`IndexError`].
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    /// True for [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// True for [`Error::Incomparable`].
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::Incomparable { .. })
    }
}
