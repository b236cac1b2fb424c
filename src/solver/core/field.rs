//! Value, slope and CFL storage on the staggered mesh.

/// Solution storage for the CESE marching engine.
///
/// `so0` (values) and `so1` (slopes) are stored row-major with layout
/// `[xsize, nvar]`: channel `iv` of storage slot `xindex` lives at
/// `xindex * nvar + iv`. Both time planes share the arrays; even-plane
/// elements occupy even offsets from `BOUND_COUNT`, odd-plane elements the
/// odd ones. `cfl` has one entry per slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    so0: Vec<f64>,
    so1: Vec<f64>,
    cfl: Vec<f64>,
    xsize: usize,
    nvar: usize,
    time_increment: f64,
    hdt: f64,
    qdt: f64,
}

impl Field {
    /// Create zero-initialised storage for `xsize` slots of `nvar` channels.
    pub fn new(xsize: usize, nvar: usize, time_increment: f64) -> Self {
        let mut field = Self {
            so0: vec![0.0; xsize * nvar],
            so1: vec![0.0; xsize * nvar],
            cfl: vec![0.0; xsize],
            xsize,
            nvar,
            time_increment: 0.0,
            hdt: 0.0,
            qdt: 0.0,
        };
        field.set_time_increment(time_increment);
        field
    }

    #[inline]
    pub fn xsize(&self) -> usize {
        self.xsize
    }

    /// Number of independent channels.
    #[inline]
    pub fn nvar(&self) -> usize {
        self.nvar
    }

    /// Full time step Δt.
    #[inline]
    pub fn time_increment(&self) -> f64 {
        self.time_increment
    }

    /// Half time step Δt/2.
    #[inline]
    pub fn hdt(&self) -> f64 {
        self.hdt
    }

    /// Quarter time step Δt/4.
    #[inline]
    pub fn qdt(&self) -> f64 {
        self.qdt
    }

    /// Set Δt and refresh the cached half and quarter steps.
    pub fn set_time_increment(&mut self, time_increment: f64) {
        self.time_increment = time_increment;
        self.hdt = time_increment / 2.0;
        self.qdt = time_increment / 4.0;
    }

    #[inline]
    pub fn so0(&self, xindex: usize, iv: usize) -> f64 {
        self.so0[xindex * self.nvar + iv]
    }

    #[inline]
    pub fn so1(&self, xindex: usize, iv: usize) -> f64 {
        self.so1[xindex * self.nvar + iv]
    }

    #[inline]
    pub fn cfl(&self, xindex: usize) -> f64 {
        self.cfl[xindex]
    }

    #[inline]
    pub fn set_so0(&mut self, xindex: usize, iv: usize, value: f64) {
        self.so0[xindex * self.nvar + iv] = value;
    }

    #[inline]
    pub fn set_so1(&mut self, xindex: usize, iv: usize, value: f64) {
        self.so1[xindex * self.nvar + iv] = value;
    }

    #[inline]
    pub fn set_cfl(&mut self, xindex: usize, value: f64) {
        self.cfl[xindex] = value;
    }

    /// Copy every channel of `from` into `to` for values only.
    pub fn copy_so0_slot(&mut self, from: usize, to: usize) {
        let n = self.nvar;
        self.so0.copy_within(from * n..(from + 1) * n, to * n);
    }

    /// Copy every channel of `from` into `to` for slopes only.
    pub fn copy_so1_slot(&mut self, from: usize, to: usize) {
        let n = self.nvar;
        self.so1.copy_within(from * n..(from + 1) * n, to * n);
    }

    /// Raw value array, layout `[xsize, nvar]`.
    pub fn so0_data(&self) -> &[f64] {
        &self.so0
    }

    pub fn so0_data_mut(&mut self) -> &mut [f64] {
        &mut self.so0
    }

    /// Raw slope array, layout `[xsize, nvar]`.
    pub fn so1_data(&self) -> &[f64] {
        &self.so1
    }

    pub fn so1_data_mut(&mut self) -> &mut [f64] {
        &mut self.so1
    }

    /// Raw CFL array, layout `[xsize]`.
    pub fn cfl_data(&self) -> &[f64] {
        &self.cfl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let mut field = Field::new(5, 2, 0.4);
        field.set_so0(3, 1, 7.0);
        assert_eq!(field.so0_data()[7], 7.0);
        assert_eq!(field.so0(3, 1), 7.0);
        assert_eq!(field.so0(3, 0), 0.0);
        assert_eq!(field.so1_data().len(), 10);
        assert_eq!(field.cfl_data().len(), 5);
    }

    #[test]
    fn test_time_increment_cache() {
        let mut field = Field::new(5, 1, 0.4);
        assert!((field.hdt() - 0.2).abs() < 1e-14);
        assert!((field.qdt() - 0.1).abs() < 1e-14);

        field.set_time_increment(2.0);
        assert_eq!(field.time_increment(), 2.0);
        assert_eq!(field.hdt(), 1.0);
        assert_eq!(field.qdt(), 0.5);
    }

    #[test]
    fn test_copy_slots() {
        let mut field = Field::new(4, 2, 1.0);
        field.set_so0(1, 0, 1.0);
        field.set_so0(1, 1, 2.0);
        field.set_so1(1, 1, 3.0);
        field.copy_so0_slot(1, 3);
        assert_eq!(field.so0(3, 0), 1.0);
        assert_eq!(field.so0(3, 1), 2.0);
        assert_eq!(field.so1(3, 1), 0.0);

        field.copy_so1_slot(1, 3);
        assert_eq!(field.so1(3, 1), 3.0);
        field.copy_so1_slot(0, 3);
        assert_eq!(field.so1(3, 1), 0.0);
        assert_eq!(field.so0(3, 1), 2.0);
    }
}
