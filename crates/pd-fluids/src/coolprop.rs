//! CoolProp-based property provider.

use crate::error::{FluidError, FluidResult};
use crate::provider::{PropertyProvider, SaturationProperties, validation};
use crate::species::Species;
use pd_core::units::{DynVisc, Pressure, k, kg_per_m3, pa_s};
use rfluids::prelude::*;

/// CoolProp backend for saturation properties.
///
/// Thread-safe: rfluids Fluid instances are created per query and never shared.
pub struct CoolPropProvider {}

impl CoolPropProvider {
    /// Create a new CoolProp provider.
    pub fn new() -> Self {
        Self {}
    }

    /// Create a Fluid instance at the given saturation state.
    fn fluid_at_pq(&self, species: Species, p_pa: f64, quality: f64) -> FluidResult<Fluid> {
        Fluid::from(species.rfluids_pure())
            .in_state(FluidInput::pressure(p_pa), FluidInput::quality(quality))
            .map_err(|e| FluidError::PropertyLookup {
                message: format!(
                    "rfluids error for {} at P={} Pa, Q={}: {}",
                    species.coolprop_name(),
                    p_pa,
                    quality,
                    e
                ),
            })
    }
}

impl Default for CoolPropProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyProvider for CoolPropProvider {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn supports(&self, _species: Species) -> bool {
        true
    }

    fn saturation(
        &self,
        species: Species,
        p: Pressure,
        quality: f64,
    ) -> FluidResult<SaturationProperties> {
        validation::validate_pressure(p)?;
        validation::validate_quality(quality)?;

        let mut fluid = self.fluid_at_pq(species, p.value, quality)?;
        let t_k = fluid.temperature().map_err(|e| FluidError::PropertyLookup {
            message: format!("rfluids error getting temperature: {}", e),
        })?;
        let rho_val = fluid.density().map_err(|e| FluidError::PropertyLookup {
            message: format!("rfluids error getting density: {}", e),
        })?;

        let temperature = k(t_k);
        let density = kg_per_m3(rho_val);
        validation::validate_temperature(temperature)?;
        validation::validate_density(density)?;

        Ok(SaturationProperties {
            temperature,
            density,
        })
    }

    fn saturated_viscosity(
        &self,
        species: Species,
        p: Pressure,
        quality: f64,
    ) -> FluidResult<DynVisc> {
        validation::validate_pressure(p)?;
        validation::validate_quality(quality)?;

        let mut fluid = self.fluid_at_pq(species, p.value, quality)?;
        let mu = fluid
            .dynamic_viscosity()
            .map_err(|e| FluidError::PropertyLookup {
                message: format!("rfluids error getting viscosity: {}", e),
            })?;
        validation::validate_viscosity(mu)?;
        Ok(pa_s(mu))
    }
}
