//! Limiters for the value update.
//!
//! The plain CESE update is second order but not bounded: steepening
//! solutions (Burgers) develop over- and undershoots next to shocks.
//! [`Limiter::FluxCorrected`](crate::solver::Limiter::FluxCorrected)
//! bounds each new value by its two upstream values without losing
//! conservation.

mod flux_corrected;

pub(crate) use flux_corrected::{FluxCorrectedScratch, flux_corrected_so0};
