//! Turn a validated project into a fluid state and a flow path.

use crate::ProjectResult;
use crate::schema::{FluidDef, Project, SettingsDef};
use crate::validate::ValidationError;
use pd_components::{FlowElement, FrictionModel};
use pd_core::units::{k, kg_per_m3, kgps, pa};
use pd_fluids::{FluidState, PropertyProvider, Species, ViscositySpec};
use pd_path::{FlowPath, elements_from_rows};
use tracing::debug;

/// Fluid state described by `def`, looking saturated properties up in `provider`.
pub fn fluid_state(def: &FluidDef, provider: &dyn PropertyProvider) -> ProjectResult<FluidState> {
    let state = match def {
        FluidDef::Saturated {
            species,
            pressure_pa,
            quality,
            mdot_kg_s,
            dynamic_viscosity_pa_s,
            kinematic_viscosity_m2_s,
        } => {
            let species: Species =
                species
                    .parse()
                    .map_err(|_| ValidationError::UnknownSpecies {
                        species: species.clone(),
                    })?;
            FluidState::saturated(
                provider,
                species,
                pa(*pressure_pa),
                *quality,
                kgps(*mdot_kg_s),
                ViscositySpec::from_raw(*dynamic_viscosity_pa_s, *kinematic_viscosity_m2_s)?,
            )?
        }
        FluidDef::Direct {
            mdot_kg_s,
            temperature_k,
            density_kg_m3,
            dynamic_viscosity_pa_s,
            kinematic_viscosity_m2_s,
        } => FluidState::new(
            kgps(*mdot_kg_s),
            k(*temperature_k),
            kg_per_m3(*density_kg_m3),
            ViscositySpec::from_raw(*dynamic_viscosity_pa_s, *kinematic_viscosity_m2_s)?,
        )?,
    };
    Ok(state)
}

/// Elements of the project geometry with the project settings applied.
pub fn elements(project: &Project) -> ProjectResult<Vec<FlowElement>> {
    let elements = elements_from_rows(&project.geometry)?;
    Ok(elements
        .into_iter()
        .map(|e| apply_settings(e, &project.settings))
        .collect())
}

fn apply_settings(element: FlowElement, settings: &SettingsDef) -> FlowElement {
    match element {
        FlowElement::Duct(duct) => {
            let duct = duct.with_bend_radius(settings.bend_radius_diameters);
            FlowElement::Duct(match settings.friction_factor {
                Some(f) => duct.with_friction(FrictionModel::Fixed(f)),
                None => duct,
            })
        }
        other => other,
    }
}

/// Evaluated flow path and the fluid state it was evaluated at.
pub fn flow_path(
    project: &Project,
    provider: &dyn PropertyProvider,
) -> ProjectResult<(FluidState, FlowPath)> {
    let fluid = fluid_state(&project.fluid, provider)?;
    debug!(
        project = %project.name,
        rows = project.geometry.len(),
        "assembling flow path"
    );
    let path = FlowPath::new(&fluid, elements(project)?)?;
    Ok((fluid, path))
}
