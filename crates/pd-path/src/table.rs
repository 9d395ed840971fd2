//! Tabular geometry rows.
//!
//! A path can be described as a list of rows, one per element:
//!
//! ```text
//! [pipe, length, diameter, material, [bend angles...]]
//! [pipe, length, {inlet: d1, outlet: d2}, material, [bend angles...]]
//! [name, length, diameter, K]
//! [name, length, diameter, {cv: Cv}]
//! ```
//!
//! Lengths and diameters are in metres, angles in degrees. The bend list of
//! a pipe row may be omitted.

use crate::error::{PathError, PathResult};
use crate::path::FlowPath;
use pd_components::{
    DiscreteComponent, DuctSegment, ElementError, FlowElement, LossCoefficient, Material,
};
use pd_core::units::m;
use pd_fluids::FluidState;
use serde::{Deserialize, Serialize};

/// Leading keyword of a duct row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipeKeyword {
    #[serde(rename = "pipe")]
    Pipe,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiameterDef {
    Uniform(f64),
    Taper { inlet: f64, outlet: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LossDef {
    K(f64),
    Cv { cv: f64 },
}

impl From<LossDef> for LossCoefficient {
    fn from(def: LossDef) -> Self {
        match def {
            LossDef::K(k) => LossCoefficient::K(k),
            LossDef::Cv { cv } => LossCoefficient::Cv(cv),
        }
    }
}

/// One row of a geometry table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeometryRow {
    Pipe(PipeKeyword, f64, DiameterDef, String, Vec<f64>),
    StraightPipe(PipeKeyword, f64, DiameterDef, String),
    Component(String, f64, f64, LossDef),
}

impl GeometryRow {
    pub fn pipe(length: f64, diameter: f64, material: Material, bends: Vec<f64>) -> Self {
        GeometryRow::Pipe(
            PipeKeyword::Pipe,
            length,
            DiameterDef::Uniform(diameter),
            material.key().to_string(),
            bends,
        )
    }

    pub fn component(name: impl Into<String>, length: f64, diameter: f64, loss: LossDef) -> Self {
        GeometryRow::Component(name.into(), length, diameter, loss)
    }

    /// Build the element this row describes. `index` is used for naming
    /// pipes and for error reporting.
    pub fn to_element(&self, index: usize) -> PathResult<FlowElement> {
        match self {
            GeometryRow::Pipe(_, length, diameter, material, bends) => {
                duct_from_row(index, *length, *diameter, material, bends)
            }
            GeometryRow::StraightPipe(_, length, diameter, material) => {
                duct_from_row(index, *length, *diameter, material, &[])
            }
            GeometryRow::Component(name, length, diameter, loss) => {
                if name.trim().is_empty() {
                    return Err(PathError::InvalidRow {
                        index,
                        what: "component name is empty".to_string(),
                    });
                }
                if name == "pipe" {
                    return Err(PathError::InvalidRow {
                        index,
                        what: "pipe rows need a material".to_string(),
                    });
                }
                DiscreteComponent::new(name.as_str(), m(*diameter), (*loss).into())
                    .and_then(|c| c.with_length(m(*length)))
                    .map(FlowElement::Component)
                    .map_err(|source| element_error(index, name.clone(), source))
            }
        }
    }
}

fn element_error(index: usize, name: String, source: ElementError) -> PathError {
    PathError::Element {
        index,
        name,
        source,
    }
}

fn duct_from_row(
    index: usize,
    length: f64,
    diameter: DiameterDef,
    material: &str,
    bends: &[f64],
) -> PathResult<FlowElement> {
    let material: Material = material.parse().map_err(|_| PathError::InvalidRow {
        index,
        what: format!("unknown pipe material '{material}'"),
    })?;
    let name = format!("pipe {index}");
    let duct = match diameter {
        DiameterDef::Uniform(d) => DuctSegment::new(name.as_str(), m(length), m(d), material),
        DiameterDef::Taper { inlet, outlet } => {
            DuctSegment::tapered(name.as_str(), m(length), m(inlet), m(outlet), material)
        }
    }
    .map_err(|source| element_error(index, name, source))?;
    Ok(FlowElement::Duct(duct.with_bends(bends.iter().copied())))
}

/// Build the elements described by `rows`, without evaluating them.
pub fn elements_from_rows(rows: &[GeometryRow]) -> PathResult<Vec<FlowElement>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| row.to_element(index))
        .collect()
}

impl FlowPath {
    /// Build and evaluate a path from geometry rows.
    pub fn from_rows(fluid: &FluidState, rows: &[GeometryRow]) -> PathResult<Self> {
        FlowPath::new(fluid, elements_from_rows(rows)?)
    }
}
