//! Thermophysical property provider trait and validation helpers.

use crate::error::{FluidError, FluidResult};
use crate::species::Species;
use pd_core::units::{Density, DynVisc, Pressure, Temperature};

/// Properties of a fluid at a saturation state (pressure, quality).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SaturationProperties {
    /// Saturation temperature [K]
    pub temperature: Temperature,
    /// Density at the given quality [kg/m³]
    pub density: Density,
}

/// Source of thermophysical properties at saturation.
///
/// Implementations must be thread-safe (Send + Sync) so one provider can be
/// shared by several callers. Calls are blocking and side-effect free.
pub trait PropertyProvider: Send + Sync {
    /// Get the provider name (for debugging/logging).
    fn name(&self) -> &str;

    /// Check if this provider can evaluate the given species.
    fn supports(&self, species: Species) -> bool;

    /// Temperature and density at saturation pressure `p` and vapour mass
    /// fraction `quality` (0 = saturated liquid, 1 = saturated vapour).
    fn saturation(
        &self,
        species: Species,
        p: Pressure,
        quality: f64,
    ) -> FluidResult<SaturationProperties>;

    /// Dynamic viscosity at the same saturation state.
    ///
    /// Default implementation returns NotSupported.
    fn saturated_viscosity(
        &self,
        _species: Species,
        _p: Pressure,
        _quality: f64,
    ) -> FluidResult<DynVisc> {
        Err(FluidError::NotSupported {
            what: "viscosity not available from this provider",
        })
    }
}

/// Provider returning the same frozen properties for every query.
///
/// Stands in for a real-fluid backend where the operating point is already
/// known (hand calculations, tests, simplified fluids).
#[derive(Debug, Clone)]
pub struct FixedProvider {
    temperature: Temperature,
    density: Density,
    viscosity: Option<DynVisc>,
    species: Vec<Species>,
}

impl FixedProvider {
    /// Provider answering for every species with the given temperature and density.
    pub fn new(temperature: Temperature, density: Density) -> Self {
        Self {
            temperature,
            density,
            viscosity: None,
            species: Vec::new(),
        }
    }

    /// Also report a saturated viscosity.
    pub fn with_viscosity(mut self, viscosity: DynVisc) -> Self {
        self.viscosity = Some(viscosity);
        self
    }

    /// Restrict the provider to the listed species; others fail the lookup.
    pub fn for_species(mut self, species: &[Species]) -> Self {
        self.species = species.to_vec();
        self
    }

    fn check(&self, species: Species, p: Pressure, quality: f64) -> FluidResult<()> {
        validation::validate_pressure(p)?;
        validation::validate_quality(quality)?;
        if !self.supports(species) {
            return Err(FluidError::PropertyLookup {
                message: format!("fixed provider has no data for {species}"),
            });
        }
        Ok(())
    }
}

impl PropertyProvider for FixedProvider {
    fn name(&self) -> &str {
        "Fixed"
    }

    fn supports(&self, species: Species) -> bool {
        self.species.is_empty() || self.species.contains(&species)
    }

    fn saturation(
        &self,
        species: Species,
        p: Pressure,
        quality: f64,
    ) -> FluidResult<SaturationProperties> {
        self.check(species, p, quality)?;
        Ok(SaturationProperties {
            temperature: self.temperature,
            density: self.density,
        })
    }

    fn saturated_viscosity(
        &self,
        species: Species,
        p: Pressure,
        quality: f64,
    ) -> FluidResult<DynVisc> {
        self.check(species, p, quality)?;
        self.viscosity.ok_or(FluidError::NotSupported {
            what: "fixed provider has no viscosity",
        })
    }
}

/// Validation helpers for fluid properties.
pub(crate) mod validation {
    use super::*;

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: Pressure) -> FluidResult<()> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure quality lies in [0, 1].
    pub fn validate_quality(quality: f64) -> FluidResult<()> {
        if !(0.0..=1.0).contains(&quality) {
            return Err(FluidError::InvalidArg {
                what: "quality must lie in [0, 1]",
            });
        }
        Ok(())
    }

    /// Ensure temperature is positive and finite.
    pub fn validate_temperature(t: Temperature) -> FluidResult<()> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure density is positive and finite.
    pub fn validate_density(rho: Density) -> FluidResult<()> {
        if !rho.value.is_finite() || rho.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure a viscosity is finite and not negative (zero means "not given").
    pub fn validate_viscosity(v: f64) -> FluidResult<()> {
        if !v.is_finite() || v < 0.0 {
            return Err(FluidError::NonPhysical {
                what: "viscosity must be non-negative and finite",
            });
        }
        Ok(())
    }
}
