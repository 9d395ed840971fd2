//! Project schema definitions.

use pd_path::GeometryRow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    pub fluid: FluidDef,
    #[serde(default)]
    pub geometry: Vec<GeometryRow>,
    #[serde(default, skip_serializing_if = "SettingsDef::is_default")]
    pub settings: SettingsDef,
}

/// Fluid flowing through the path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum FluidDef {
    /// Properties looked up at a saturation point.
    Saturated {
        species: String,
        pressure_pa: f64,
        /// 0 = saturated liquid, 1 = saturated vapour
        quality: f64,
        mdot_kg_s: f64,
        #[serde(default, skip_serializing_if = "is_zero")]
        dynamic_viscosity_pa_s: f64,
        #[serde(default, skip_serializing_if = "is_zero")]
        kinematic_viscosity_m2_s: f64,
    },
    /// Properties given explicitly.
    Direct {
        mdot_kg_s: f64,
        temperature_k: f64,
        density_kg_m3: f64,
        #[serde(default, skip_serializing_if = "is_zero")]
        dynamic_viscosity_pa_s: f64,
        #[serde(default, skip_serializing_if = "is_zero")]
        kinematic_viscosity_m2_s: f64,
    },
}

impl FluidDef {
    pub fn mdot_kg_s(&self) -> f64 {
        match self {
            FluidDef::Saturated { mdot_kg_s, .. } | FluidDef::Direct { mdot_kg_s, .. } => {
                *mdot_kg_s
            }
        }
    }
}

/// Analysis options applied to every duct in the geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsDef {
    #[serde(default = "default_bend_radius")]
    pub bend_radius_diameters: f64,
    /// Overrides the Colebrook-White friction factor when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friction_factor: Option<f64>,
}

impl Default for SettingsDef {
    fn default() -> Self {
        Self {
            bend_radius_diameters: default_bend_radius(),
            friction_factor: None,
        }
    }
}

impl SettingsDef {
    fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

fn default_bend_radius() -> f64 {
    pd_components::correlations::DEFAULT_BEND_DIAMETERS
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}
