//! Project validation logic.

use crate::schema::{FluidDef, Project, SettingsDef};
use pd_fluids::Species;
use pd_path::{GeometryRow, LossDef};

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown species: {species}")]
    UnknownSpecies { species: String },

    #[error("Geometry row {row}: {reason}")]
    InvalidGeometry { row: usize, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    if project.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: format!("{:?}", project.name),
            reason: "must not be empty".to_string(),
        });
    }

    validate_fluid(&project.fluid)?;
    validate_settings(&project.settings)?;

    for (row, def) in project.geometry.iter().enumerate() {
        validate_row(row, def)?;
    }

    Ok(())
}

fn validate_fluid(fluid: &FluidDef) -> Result<(), ValidationError> {
    match fluid {
        FluidDef::Saturated {
            species,
            pressure_pa,
            quality,
            mdot_kg_s,
            dynamic_viscosity_pa_s,
            kinematic_viscosity_m2_s,
        } => {
            if species.parse::<Species>().is_err() {
                return Err(ValidationError::UnknownSpecies {
                    species: species.clone(),
                });
            }
            positive("fluid.pressure_pa", *pressure_pa)?;
            if !quality.is_finite() || !(0.0..=1.0).contains(quality) {
                return Err(invalid("fluid.quality", *quality, "must be within [0, 1]"));
            }
            positive("fluid.mdot_kg_s", *mdot_kg_s)?;
            non_negative("fluid.dynamic_viscosity_pa_s", *dynamic_viscosity_pa_s)?;
            non_negative("fluid.kinematic_viscosity_m2_s", *kinematic_viscosity_m2_s)?;
        }
        FluidDef::Direct {
            mdot_kg_s,
            temperature_k,
            density_kg_m3,
            dynamic_viscosity_pa_s,
            kinematic_viscosity_m2_s,
        } => {
            positive("fluid.mdot_kg_s", *mdot_kg_s)?;
            positive("fluid.temperature_k", *temperature_k)?;
            positive("fluid.density_kg_m3", *density_kg_m3)?;
            non_negative("fluid.dynamic_viscosity_pa_s", *dynamic_viscosity_pa_s)?;
            non_negative("fluid.kinematic_viscosity_m2_s", *kinematic_viscosity_m2_s)?;
        }
    }
    Ok(())
}

fn validate_settings(settings: &SettingsDef) -> Result<(), ValidationError> {
    positive(
        "settings.bend_radius_diameters",
        settings.bend_radius_diameters,
    )?;
    if let Some(f) = settings.friction_factor {
        non_negative("settings.friction_factor", f)?;
    }
    Ok(())
}

fn validate_row(row: usize, def: &GeometryRow) -> Result<(), ValidationError> {
    let geometry = |reason: String| ValidationError::InvalidGeometry { row, reason };

    match def {
        GeometryRow::Pipe(_, _, _, _, bends) => {
            if let Some(angle) = bends.iter().find(|a| !a.is_finite() || **a < 0.0) {
                return Err(geometry(format!(
                    "bend angle {angle} must be non-negative"
                )));
            }
        }
        GeometryRow::StraightPipe(..) => {}
        GeometryRow::Component(name, length, _, loss) => {
            if !length.is_finite() || *length < 0.0 {
                return Err(geometry(format!(
                    "component length {length} must be non-negative"
                )));
            }
            match loss {
                LossDef::K(k) if !k.is_finite() || *k < 0.0 => {
                    return Err(geometry(format!("{name}: K = {k} must be non-negative")));
                }
                LossDef::Cv { cv } if !cv.is_finite() || *cv <= 0.0 => {
                    return Err(geometry(format!("{name}: Cv = {cv} must be positive")));
                }
                _ => {}
            }
        }
    }

    // Remaining checks (names, materials, dimensions) match element construction
    def.to_element(row)
        .map(|_| ())
        .map_err(|e| geometry(e.to_string()))
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive"))
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be non-negative"))
    }
}
