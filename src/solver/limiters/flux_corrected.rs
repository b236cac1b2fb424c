//! Flux-corrected transport for the CESE value update.
//!
//! The value update of a conservation element gathers one contribution from
//! each of its two source solution elements. Each contribution is split into
//! a low-order part built from the piecewise-constant state and an
//! antidiffusive remainder carrying the slope terms:
//!
//! ```text
//! low_l = dxpos_l · u_l + hdt · f(u_l)      anti_l = xp_l + tp_l - low_l
//! low_r = dxneg_r · u_r - hdt · f(u_r)      anti_r = xn_r - tp_r - low_r
//! ```
//!
//! Zalesak's limiter bounds every new value by the two source values. Each
//! source element gets a single factor θ, the tightest over the two
//! conservation elements it feeds, so the amount it gives away to its left
//! and right neighbours stays balanced and the update stays conservative.

use crate::element::Celm;
use crate::equations::PhysicsModel;
use crate::solver::Solver;

/// Bounds and antidiffusive contributions of one conservation element.
#[derive(Clone, Copy, Debug)]
struct Correction {
    /// Source slot on the left
    left: usize,
    /// Source slot on the right
    right: usize,
    dx: f64,
    /// Low-order value
    low: f64,
    anti_left: f64,
    anti_right: f64,
    /// Allowed fraction of positive antidiffusion
    r_plus: f64,
    /// Allowed fraction of negative antidiffusion
    r_minus: f64,
    min: f64,
    max: f64,
    /// Value without limiting
    unlimited: f64,
}

impl Correction {
    fn new<M: PhysicsModel>(ce: &Celm<'_, M>, iv: usize) -> Self {
        let model = ce.solver().model();
        let hdt = ce.solver().hdt();
        let se_l = ce.selm_xn();
        let se_r = ce.selm_xp();
        let dx = ce.selm_tp().dx();

        let u_l = se_l.so0(iv);
        let u_r = se_r.so0(iv);
        let low_l = se_l.dxpos() * u_l + hdt * model.flux(u_l);
        let low_r = se_r.dxneg() * u_r - hdt * model.flux(u_r);
        let anti_left = se_l.xp(iv) + se_l.tp(iv) - low_l;
        let anti_right = se_r.xn(iv) - se_r.tp(iv) - low_r;
        let low = (low_l + low_r) / dx;

        let max = u_l.max(u_r);
        let min = u_l.min(u_r);
        let p_plus = anti_left.max(0.0) + anti_right.max(0.0);
        let p_minus = anti_left.min(0.0) + anti_right.min(0.0);
        let q_plus = (max - low) * dx;
        let q_minus = (min - low) * dx;

        let r_plus = if p_plus > 0.0 {
            (q_plus.max(0.0) / p_plus).min(1.0)
        } else {
            1.0
        };
        let r_minus = if p_minus < 0.0 {
            (q_minus / p_minus).clamp(0.0, 1.0)
        } else {
            1.0
        };

        Self {
            left: se_l.xindex(),
            right: se_r.xindex(),
            dx,
            low,
            anti_left,
            anti_right,
            r_plus,
            r_minus,
            min,
            max,
            unlimited: ce.calc_so0(iv),
        }
    }

    /// Factor allowed for a contribution of the given sign.
    #[inline]
    fn allowed(&self, anti: f64) -> f64 {
        if anti >= 0.0 { self.r_plus } else { self.r_minus }
    }
}

/// Working storage of the limiter, kept by the solver between half steps.
#[derive(Clone, Debug, Default)]
pub(crate) struct FluxCorrectedScratch {
    corrections: Vec<Correction>,
    /// One factor per storage slot
    theta: Vec<f64>,
}

/// Limited value update for the conservation elements at `slots`.
///
/// Writes `out[k * nvar + iv]` for the `k`-th slot and channel `iv`.
pub(crate) fn flux_corrected_so0<M: PhysicsModel>(
    solver: &Solver<M>,
    slots: &[usize],
    out: &mut Vec<f64>,
    scratch: &mut FluxCorrectedScratch,
) {
    let nvar = solver.nvar();
    out.clear();
    out.resize(slots.len() * nvar, 0.0);

    let FluxCorrectedScratch { corrections, theta } = scratch;
    theta.resize(solver.grid().xsize(), 1.0);

    for iv in 0..nvar {
        corrections.clear();
        corrections.extend(
            slots
                .iter()
                .map(|&xindex| Correction::new(&Celm::from_xindex(solver, xindex), iv)),
        );

        // One factor per source element, the tightest of its two elements
        theta.fill(1.0);
        for c in corrections.iter() {
            theta[c.left] = theta[c.left].min(c.allowed(c.anti_left));
            theta[c.right] = theta[c.right].min(c.allowed(c.anti_right));
        }

        for (k, c) in corrections.iter().enumerate() {
            let (theta_l, theta_r) = (theta[c.left], theta[c.right]);
            let value = if theta_l == 1.0 && theta_r == 1.0 {
                c.unlimited
            } else {
                c.low + (theta_l * c.anti_left + theta_r * c.anti_right) / c.dx
            };
            out[k * nvar + iv] = value.max(c.min).min(c.max);
        }
    }
}
