//! Two-half-step marching of the CESE scheme.
//!
//! One half step advances the solution from a source plane to the other
//! (destination) plane:
//!
//! 1. value update `so0` of every conservation element's top element
//! 2. boundary treatment of the destination values
//! 3. CFL numbers on the destination plane
//! 4. slope update `so1` with the alpha-weighted average
//! 5. boundary treatment of the destination slopes
//!
//! A full step is two half steps, even to odd and back.

use tracing::{debug, trace, warn};

use super::Solver;
use super::limiters::flux_corrected_so0;
use crate::element::{Celm, ElementKind, Selm};
use crate::equations::PhysicsModel;
use crate::error::{Error, Result};
use crate::solver::Limiter;
use crate::types::Plane;

/// Slots of the conservation elements marched from `src`.
///
/// The odd plane starts at index -1 so its first element caps the first
/// node of the even plane.
fn celm_slots(ncelm: usize, src: Plane) -> Vec<usize> {
    (-src.offset()..ncelm as isize)
        .map(|ic| ElementKind::Celm.xindex(ic, src) as usize)
        .collect()
}

/// Slots of the solution elements whose CFL is refreshed on `dest`,
/// including the ghost elements of the odd plane.
fn cfl_slots(nselm: usize, dest: Plane) -> Vec<usize> {
    (-dest.offset()..nselm as isize)
        .map(|is| ElementKind::Selm.xindex(is, dest) as usize)
        .collect()
}

impl<M: PhysicsModel> Solver<M> {
    /// Compute the CFL numbers of the even plane and enable marching.
    pub fn setup_march(&mut self) {
        self.update_cfl(Plane::Even);
        self.set_plane(Plane::Even);
        self.set_prepared();
    }

    fn ensure_prepared(&self, op: &'static str) -> Result<()> {
        if self.is_prepared() {
            Ok(())
        } else {
            Err(Error::NotPrepared(op))
        }
    }

    /// Values on the plane after `src` from the conservation elements of `src`.
    ///
    /// Uses the configured limiter.
    pub fn march_half_so0(&mut self, src: Plane) {
        let slots = celm_slots(self.grid().ncelm(), src);
        let nvar = self.nvar();
        let mut values = std::mem::take(&mut self.scratch);

        match self.limiter() {
            Limiter::None => {
                values.clear();
                for &xindex in &slots {
                    let ce = Celm::from_xindex(self, xindex);
                    values.extend((0..nvar).map(|iv| ce.calc_so0(iv)));
                }
            }
            Limiter::FluxCorrected => {
                let mut limiter_scratch = std::mem::take(&mut self.limiter_scratch);
                flux_corrected_so0(self, &slots, &mut values, &mut limiter_scratch);
                self.limiter_scratch = limiter_scratch;
            }
        }

        // The top element of a conservation element shares its slot
        let field = self.field_mut();
        for (k, &xindex) in slots.iter().enumerate() {
            for iv in 0..nvar {
                field.set_so0(xindex, iv, values[k * nvar + iv]);
            }
        }
        self.scratch = values;
    }

    /// Slopes on the plane after `src`, weighting one-sided differences by
    /// `|d|^ALPHA`. Needs the destination values in place.
    pub fn march_half_so1_alpha<const ALPHA: i32>(&mut self, src: Plane) {
        let slots = celm_slots(self.grid().ncelm(), src);
        let nvar = self.nvar();
        let mut values = std::mem::take(&mut self.scratch);

        values.clear();
        for &xindex in &slots {
            let ce = Celm::from_xindex(self, xindex);
            values.extend((0..nvar).map(|iv| ce.calc_so1_alpha::<ALPHA>(iv)));
        }

        let field = self.field_mut();
        for (k, &xindex) in slots.iter().enumerate() {
            for iv in 0..nvar {
                field.set_so1(xindex, iv, values[k * nvar + iv]);
            }
        }
        self.scratch = values;
    }

    /// [`march_half_so1_alpha`](Self::march_half_so1_alpha) with `ALPHA = 2`.
    pub fn march_half_so1_alpha2(&mut self, src: Plane) {
        self.march_half_so1_alpha::<2>(src);
    }

    /// Refresh the CFL numbers of `dest` from its current values.
    pub fn update_cfl(&mut self, dest: Plane) {
        let slots = cfl_slots(self.grid().nselm(), dest);
        let mut values = std::mem::take(&mut self.scratch);

        values.clear();
        values.extend(slots.iter().map(|&xindex| Selm::from_xindex(self, xindex).calc_cfl()));

        let field = self.field_mut();
        for (&xindex, &cfl) in slots.iter().zip(&values) {
            field.set_cfl(xindex, cfl);
        }
        self.scratch = values;

        let max_cfl = self.max_cfl(dest);
        if max_cfl > 1.0 {
            warn!(plane = %dest, max_cfl, "CFL number exceeds 1, marching is unstable");
        }
    }

    /// One half step from `src` to the other plane.
    pub fn march_half_alpha<const ALPHA: i32>(&mut self, src: Plane) -> Result<()> {
        self.ensure_prepared("march_half_alpha")?;
        let dest = src.flip();

        self.march_half_so0(src);
        self.treat_boundary_so0(dest);
        self.update_cfl(dest);
        self.march_half_so1_alpha::<ALPHA>(src);
        self.treat_boundary_so1(dest);

        self.set_plane(dest);
        trace!(src = %src, dest = %dest, alpha = ALPHA, "half step");
        Ok(())
    }

    /// March `steps` full time steps with the `ALPHA` slope weighting.
    ///
    /// Each step starts from the plane holding the latest solution, which is
    /// the even plane unless a single half step was taken by hand.
    #[tracing::instrument(level = "debug", skip(self), fields(solver = M::SOLVER_NAME))]
    pub fn march_alpha<const ALPHA: i32>(&mut self, steps: usize) -> Result<()> {
        self.ensure_prepared("march_alpha")?;
        for _ in 0..steps {
            let src = self.plane();
            self.march_half_alpha::<ALPHA>(src)?;
            self.march_half_alpha::<ALPHA>(src.flip())?;
        }
        debug!(
            steps,
            alpha = ALPHA,
            max_cfl = self.max_cfl(self.plane()),
            "marched"
        );
        Ok(())
    }

    /// [`march_alpha`](Self::march_alpha) with `ALPHA = 2`.
    pub fn march_alpha2(&mut self, steps: usize) -> Result<()> {
        self.march_alpha::<2>(steps)
    }
}
