//! Staggered 1D space-time grid.
//!
//! A grid partitions `[xmin, xmax]` into `ncelm` cells. Its coordinate array
//! interleaves nodes and cell centers and carries `BOUND_COUNT` ghost
//! half-spacings at each end:
//!
//! ```text
//! slot:   0    1    2    3    4    5   ...  xsize-3  xsize-2  xsize-1
//!         g    g    x0   c0   x1   c1  ...  x_n      g        g
//! ```
//!
//! Node `i` lives at slot `BOUND_COUNT + 2i`, the center of cell `i` at
//! `BOUND_COUNT + 2i + 1`. Ghost coordinates mirror the interior about the
//! first and last node.

use std::fmt;

use crate::error::{Error, Result};
use crate::types::Real;

/// Number of ghost half-spacings padded at each end of the coordinate array.
pub const BOUND_COUNT: usize = 2;

/// Immutable 1D grid of conservation-element cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    xmin: f64,
    xmax: f64,
    ncelm: usize,
    /// Interleaved node / center coordinates, including ghosts
    xcoord: Vec<f64>,
}

impl Grid {
    /// Number of ghost half-spacings at each end.
    pub const BOUND_COUNT: usize = BOUND_COUNT;

    /// Create a uniform grid of `[xmin, xmax]` with `ncelm` cells.
    ///
    /// Nodes are accumulated from `xmin` in steps of `(xmax - xmin) / ncelm`;
    /// the last node is pinned to `xmax`.
    pub fn new(xmin: f64, xmax: f64, ncelm: usize) -> Result<Self> {
        if ncelm < 1 {
            return Err(Error::invalid_argument(format!(
                "Grid::Grid(xmin={}, xmax={}, ncelm={}) invalid argument: ncelm smaller than 1",
                Real(xmin),
                Real(xmax),
                ncelm
            )));
        }
        if !(xmin < xmax) {
            return Err(Error::invalid_argument(format!(
                "Grid::Grid(xmin={}, xmax={}, ncelm={}) invalid arguments: xmin >= xmax",
                Real(xmin),
                Real(xmax),
                ncelm
            )));
        }

        let dx = (xmax - xmin) / ncelm as f64;
        let mut xloc = Vec::with_capacity(ncelm + 1);
        xloc.push(xmin);
        for i in 1..ncelm {
            xloc.push(xloc[i - 1] + dx);
        }
        xloc.push(xmax);

        Ok(Self::from_nodes(&xloc))
    }

    /// Create a grid from strictly increasing node coordinates.
    pub fn from_xloc(xloc: &[f64]) -> Result<Self> {
        if xloc.len() < 2 {
            return Err(Error::invalid_argument(format!(
                "Grid::init_from_array(xloc) invalid arguments: xloc.size()={} smaller than 2",
                xloc.len()
            )));
        }
        for (i, pair) in xloc.windows(2).enumerate() {
            if !(pair[0] < pair[1]) {
                return Err(Error::invalid_argument(format!(
                    "Grid::init_from_array(xloc) invalid arguments: xloc[{}]={} >= xloc[{}]={}",
                    i,
                    Real(pair[0]),
                    i + 1,
                    Real(pair[1])
                )));
            }
        }
        Ok(Self::from_nodes(xloc))
    }

    /// Build from validated nodes.
    fn from_nodes(xloc: &[f64]) -> Self {
        let ncelm = xloc.len() - 1;
        let xsize = 2 * (ncelm + BOUND_COUNT) + 1;
        let mut xcoord = vec![0.0; xsize];

        for (i, &x) in xloc.iter().enumerate() {
            xcoord[BOUND_COUNT + 2 * i] = x;
        }
        for (i, pair) in xloc.windows(2).enumerate() {
            xcoord[BOUND_COUNT + 2 * i + 1] = (pair[0] + pair[1]) / 2.0;
        }

        // Mirror ghosts about the first and last node
        let front = BOUND_COUNT;
        let back = xsize - 1 - BOUND_COUNT;
        for it in 1..=BOUND_COUNT {
            xcoord[front - it] = xcoord[front] + xcoord[front] - xcoord[front + it];
            xcoord[back + it] = xcoord[back] + xcoord[back] - xcoord[back - it];
        }

        Self {
            xmin: xloc[0],
            xmax: xloc[ncelm],
            ncelm,
            xcoord,
        }
    }

    /// Number of conservation-element cells.
    #[inline]
    pub fn ncelm(&self) -> usize {
        self.ncelm
    }

    /// Number of solution elements (nodes) on the even plane.
    #[inline]
    pub fn nselm(&self) -> usize {
        self.ncelm + 1
    }

    #[inline]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[inline]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Length of the padded coordinate array, `2 * (ncelm + BOUND_COUNT) + 1`.
    #[inline]
    pub fn xsize(&self) -> usize {
        self.xcoord.len()
    }

    /// Padded coordinate array.
    #[inline]
    pub fn xcoord(&self) -> &[f64] {
        &self.xcoord
    }

    /// Coordinate at a storage slot.
    #[inline]
    pub(crate) fn x_at(&self, xindex: usize) -> f64 {
        self.xcoord[xindex]
    }

    /// Overwrite every coordinate, ghosts included.
    ///
    /// Leaves the grid geometrically meaningless; intended for diagnostics.
    pub fn fill_xcoord(&mut self, value: f64) {
        self.xcoord.fill(value);
    }

    /// Node coordinates `xloc[0..=ncelm]`.
    pub fn nodes(&self) -> impl Iterator<Item = f64> + '_ {
        self.xcoord[BOUND_COUNT..self.xsize() - BOUND_COUNT]
            .iter()
            .step_by(2)
            .copied()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grid(xmin={}, xmax={}, ncelm={})",
            Real(self.xmin),
            Real(self.xmax),
            self.ncelm
        )
    }
}
