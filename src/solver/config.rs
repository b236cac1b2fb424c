//! Marching configuration.

use crate::equations::PhysicsModel;

/// How ghost solution elements are filled after each half step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryTreatment {
    /// Wrap around: ghosts take the values of the opposite interior end.
    #[default]
    Periodic,
    /// Zero-gradient: ghosts copy the nearest interior element.
    Extrapolate,
}

/// Limiter applied to the value (`so0`) update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Limiter {
    /// Plain CESE update.
    #[default]
    None,
    /// Conservative flux-corrected transport bounding each new value by
    /// its two upstream values.
    FluxCorrected,
}

impl Limiter {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::FluxCorrected => "fct",
        }
    }
}

/// Configuration of the marching engine.
///
/// # Example
///
/// ```
/// use cese::solver::{BoundaryTreatment, Limiter, MarchConfig};
///
/// let config = MarchConfig::default()
///     .with_boundary(BoundaryTreatment::Extrapolate)
///     .with_limiter(Limiter::FluxCorrected);
/// assert_eq!(config.boundary, BoundaryTreatment::Extrapolate);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarchConfig {
    /// Ghost element treatment
    pub boundary: BoundaryTreatment,
    /// Value update limiter
    pub limiter: Limiter,
}

impl MarchConfig {
    /// Create a new configuration.
    pub fn new(boundary: BoundaryTreatment, limiter: Limiter) -> Self {
        Self { boundary, limiter }
    }

    /// Periodic boundaries and the model's default limiter.
    pub fn for_model<M: PhysicsModel>(model: &M) -> Self {
        Self::new(BoundaryTreatment::Periodic, model.default_limiter())
    }

    /// Set the boundary treatment.
    pub fn with_boundary(mut self, boundary: BoundaryTreatment) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set the limiter.
    pub fn with_limiter(mut self, limiter: Limiter) -> Self {
        self.limiter = limiter;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::{InviscidBurgers, LinearScalar, NoFlux};

    #[test]
    fn test_model_defaults() {
        assert_eq!(
            MarchConfig::for_model(&LinearScalar::default()).limiter,
            Limiter::None
        );
        assert_eq!(MarchConfig::for_model(&NoFlux).limiter, Limiter::None);
        let burgers = MarchConfig::for_model(&InviscidBurgers);
        assert_eq!(burgers.limiter, Limiter::FluxCorrected);
        assert_eq!(burgers.boundary, BoundaryTreatment::Periodic);
    }

    #[test]
    fn test_builder() {
        let config = MarchConfig::default().with_limiter(Limiter::FluxCorrected);
        assert_eq!(config.limiter.name(), "fct");
        assert_eq!(config.boundary, BoundaryTreatment::Periodic);
    }
}
