//! Fluid state at one operating point.

use crate::error::{FluidError, FluidResult};
use crate::provider::{PropertyProvider, validation};
use crate::species::Species;
use pd_core::units::{Density, DynVisc, KinVisc, MassRate, Pressure, Temperature, m2ps, pa_s};
use tracing::debug;

/// Viscosity given by the caller.
///
/// `Unspecified` lets a saturated state derive viscosity itself; a directly
/// built state keeps both viscosities at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ViscositySpec {
    #[default]
    Unspecified,
    /// Dynamic viscosity μ [Pa·s]
    Dynamic(DynVisc),
    /// Kinematic viscosity ν [m²/s]
    Kinematic(KinVisc),
}

impl ViscositySpec {
    /// Build from the raw pair used in tabular inputs, where 0 means "not given".
    ///
    /// Dynamic viscosity wins when both are nonzero.
    pub fn from_raw(dynamic_pa_s: f64, kinematic_m2_s: f64) -> FluidResult<Self> {
        validation::validate_viscosity(dynamic_pa_s)?;
        validation::validate_viscosity(kinematic_m2_s)?;
        Ok(if dynamic_pa_s != 0.0 {
            ViscositySpec::Dynamic(pa_s(dynamic_pa_s))
        } else if kinematic_m2_s != 0.0 {
            ViscositySpec::Kinematic(m2ps(kinematic_m2_s))
        } else {
            ViscositySpec::Unspecified
        })
    }
}

/// Saturation point a state was looked up at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saturation {
    pub species: Species,
    pub pressure: Pressure,
    /// Vapour mass fraction, 0 = liquid, 1 = vapour.
    pub quality: f64,
}

/// Immutable snapshot of the fluid flowing through a path.
///
/// Holds the mass flow rate together with the properties the loss
/// correlations need. A zero viscosity means "not available".
#[derive(Debug, Clone, PartialEq)]
pub struct FluidState {
    mdot: MassRate,
    temperature: Temperature,
    density: Density,
    dynamic_viscosity: DynVisc,
    kinematic_viscosity: KinVisc,
    saturation: Option<Saturation>,
}

impl FluidState {
    /// Create a state from known properties.
    ///
    /// Validates that mass flow and density are positive and finite.
    pub fn new(
        mdot: MassRate,
        temperature: Temperature,
        density: Density,
        viscosity: ViscositySpec,
    ) -> FluidResult<Self> {
        validate_mdot(mdot)?;
        validation::validate_temperature(temperature)?;
        validation::validate_density(density)?;

        let (dynamic_viscosity, kinematic_viscosity) = match viscosity {
            ViscositySpec::Unspecified => (pa_s(0.0), m2ps(0.0)),
            ViscositySpec::Dynamic(mu) => {
                validation::validate_viscosity(mu.value)?;
                (mu, m2ps(0.0))
            }
            ViscositySpec::Kinematic(nu) => {
                validation::validate_viscosity(nu.value)?;
                (pa_s(0.0), nu)
            }
        };

        Ok(Self {
            mdot,
            temperature,
            density,
            dynamic_viscosity,
            kinematic_viscosity,
            saturation: None,
        })
    }

    /// Look up a saturated state through `provider`.
    ///
    /// Temperature and density come from the provider. When `viscosity` is
    /// `Unspecified` it is derived: N₂O uses its saturation correlations,
    /// other species ask the provider. Either way only quality 0 or 1 is
    /// supported; anything between fails with `UnsupportedState`.
    pub fn saturated(
        provider: &dyn PropertyProvider,
        species: Species,
        pressure: Pressure,
        quality: f64,
        mdot: MassRate,
        viscosity: ViscositySpec,
    ) -> FluidResult<Self> {
        validate_mdot(mdot)?;
        validation::validate_pressure(pressure)?;
        validation::validate_quality(quality)?;

        let sat = provider.saturation(species, pressure, quality)?;

        let viscosity = match viscosity {
            ViscositySpec::Unspecified => {
                if quality != 0.0 && quality != 1.0 {
                    return Err(FluidError::UnsupportedState { quality });
                }
                let mu = if species.has_viscosity_correlation() {
                    crate::viscosity::saturated(sat.temperature, quality)?
                } else {
                    provider.saturated_viscosity(species, pressure, quality)?
                };
                ViscositySpec::Dynamic(mu)
            }
            given => given,
        };

        let mut state = Self::new(mdot, sat.temperature, sat.density, viscosity)?;
        state.saturation = Some(Saturation {
            species,
            pressure,
            quality,
        });

        debug!(
            provider = provider.name(),
            species = species.key(),
            pressure_pa = pressure.value,
            quality,
            temperature_k = state.temperature.value,
            density = state.density.value,
            mu = state.dynamic_viscosity.value,
            "saturated fluid state"
        );

        Ok(state)
    }

    /// Mass flow rate.
    pub fn mdot(&self) -> MassRate {
        self.mdot
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn density(&self) -> Density {
        self.density
    }

    /// Dynamic viscosity, zero when not available.
    pub fn dynamic_viscosity(&self) -> DynVisc {
        self.dynamic_viscosity
    }

    /// Kinematic viscosity, zero when not available.
    pub fn kinematic_viscosity(&self) -> KinVisc {
        self.kinematic_viscosity
    }

    /// Saturation point, if the state came from a property lookup.
    pub fn saturation(&self) -> Option<&Saturation> {
        self.saturation.as_ref()
    }

    /// Same fluid at a different mass flow rate.
    pub fn with_mdot(&self, mdot: MassRate) -> FluidResult<Self> {
        validate_mdot(mdot)?;
        Ok(Self {
            mdot,
            ..self.clone()
        })
    }
}

/// Incremental construction of a directly specified [`FluidState`].
///
/// ```
/// use pd_core::units::{k, kg_per_m3, kgps, pa_s};
/// use pd_fluids::FluidStateBuilder;
///
/// let fluid = FluidStateBuilder::new(kgps(0.054))
///     .temperature(k(90.0))
///     .density(kg_per_m3(800.0))
///     .dynamic_viscosity(pa_s(1e-4))
///     .build()
///     .unwrap();
/// assert_eq!(fluid.density().value, 800.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FluidStateBuilder {
    mdot: Option<MassRate>,
    temperature: Option<Temperature>,
    density: Option<Density>,
    viscosity: ViscositySpec,
}

impl FluidStateBuilder {
    pub fn new(mdot: MassRate) -> Self {
        Self {
            mdot: Some(mdot),
            ..Self::default()
        }
    }

    pub fn temperature(mut self, temperature: Temperature) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn density(mut self, density: Density) -> Self {
        self.density = Some(density);
        self
    }

    pub fn dynamic_viscosity(mut self, mu: DynVisc) -> Self {
        self.viscosity = ViscositySpec::Dynamic(mu);
        self
    }

    pub fn kinematic_viscosity(mut self, nu: KinVisc) -> Self {
        self.viscosity = ViscositySpec::Kinematic(nu);
        self
    }

    /// Validate and build. Temperature and density are required.
    pub fn build(self) -> FluidResult<FluidState> {
        let mdot = self.mdot.ok_or(FluidError::InvalidArg {
            what: "mass flow rate is required",
        })?;
        let temperature = self.temperature.ok_or(FluidError::InvalidArg {
            what: "temperature is required",
        })?;
        let density = self.density.ok_or(FluidError::InvalidArg {
            what: "density is required",
        })?;
        FluidState::new(mdot, temperature, density, self.viscosity)
    }
}

fn validate_mdot(mdot: MassRate) -> FluidResult<()> {
    if !mdot.value.is_finite() || mdot.value <= 0.0 {
        return Err(FluidError::NonPhysical {
            what: "mass flow rate must be positive and finite",
        });
    }
    Ok(())
}
