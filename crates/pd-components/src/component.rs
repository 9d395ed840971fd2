//! Discrete fittings and valves with an explicit loss coefficient.

use crate::common::{bulk_flow, check_finite, check_geometry};
use crate::correlations;
use crate::error::{ElementError, ElementResult};
use crate::traits::{ElementDrop, PressureLoss};
use pd_core::units::{Length, m, mps, pa};
use pd_fluids::FluidState;
use tracing::trace;

/// How a component's loss was specified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LossCoefficient {
    /// Dimensionless loss coefficient
    K(f64),
    /// Valve flow coefficient (US gpm at 1 psi)
    Cv(f64),
}

/// Valve, fitting or other lumped loss.
///
/// Carries no friction; `length` only advances the path's running length.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteComponent {
    name: String,
    length: Length,
    diameter: Length,
    coefficient: LossCoefficient,
    /// K resolved at construction
    k: f64,
}

impl DiscreteComponent {
    /// Component with a known loss coefficient.
    pub fn from_k(name: impl Into<String>, diameter: Length, k: f64) -> ElementResult<Self> {
        Self::new(name, diameter, LossCoefficient::K(k))
    }

    /// Component rated by flow coefficient, converted to K at `diameter`.
    pub fn from_cv(name: impl Into<String>, diameter: Length, cv: f64) -> ElementResult<Self> {
        Self::new(name, diameter, LossCoefficient::Cv(cv))
    }

    pub fn new(
        name: impl Into<String>,
        diameter: Length,
        coefficient: LossCoefficient,
    ) -> ElementResult<Self> {
        let d = check_geometry(diameter.value, "component diameter must be positive")?;
        let k = match coefficient {
            LossCoefficient::K(k) if k.is_finite() && k >= 0.0 => k,
            LossCoefficient::K(_) => {
                return Err(ElementError::NonPhysical {
                    what: "loss coefficient must be non-negative",
                });
            }
            LossCoefficient::Cv(cv) if cv.is_finite() && cv > 0.0 => {
                check_finite(correlations::cv_to_k(cv, d), "Cv-derived loss coefficient")?
            }
            LossCoefficient::Cv(_) => {
                return Err(ElementError::NonPhysical {
                    what: "flow coefficient must be positive",
                });
            }
        };

        Ok(Self {
            name: name.into(),
            length: m(0.0),
            diameter,
            coefficient,
            k,
        })
    }

    /// Set the length the component occupies in the path.
    pub fn with_length(mut self, length: Length) -> ElementResult<Self> {
        if !length.value.is_finite() || length.value < 0.0 {
            return Err(ElementError::InvalidGeometry {
                what: "component length must be non-negative",
            });
        }
        self.length = length;
        Ok(self)
    }

    pub fn diameter(&self) -> Length {
        self.diameter
    }

    pub fn coefficient(&self) -> LossCoefficient {
        self.coefficient
    }

    /// Effective loss coefficient K.
    pub fn k(&self) -> f64 {
        self.k
    }
}

impl PressureLoss for DiscreteComponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn length(&self) -> Length {
        self.length
    }

    fn compute_drop(&self, fluid: &FluidState) -> ElementResult<ElementDrop> {
        let (rho, v) = bulk_flow(fluid, self.diameter.value)?;
        let dp = check_finite(correlations::dp_from_k(self.k, rho, v), "pressure drop")?;

        trace!(component = %self.name, k = self.k, dp_pa = dp, "component evaluated");

        Ok(ElementDrop {
            velocity: mps(v),
            reynolds: None,
            friction_factor: None,
            k_total: self.k,
            delta_p: pa(dp),
        })
    }
}
