//! Straight duct segment with friction and rounded bends.

use crate::common::{bulk_flow, check_finite, check_geometry};
use crate::correlations;
use crate::error::{ElementError, ElementResult};
use crate::traits::{ElementDrop, PressureLoss};
use pd_core::numeric::linspace;
use pd_core::units::{Length, m, mps, pa};
use pd_fluids::FluidState;
use tracing::trace;

/// Number of diameter stations in a default sweep.
pub const DEFAULT_STATIONS: usize = 500;

/// Absolute roughness of drawn tubing [m].
pub const SMOOTH_ABSOLUTE_ROUGHNESS: f64 = 0.03e-3;

/// Relative roughness of flexible hose (ε = ID/250).
pub const FLEX_RELATIVE_ROUGHNESS: f64 = 1.0 / 250.0;

/// Wall surface class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Material {
    /// Drawn metal tube, fixed absolute roughness.
    Smooth,
    /// Flexible hose, roughness proportional to bore.
    Flex,
}

impl Material {
    /// Relative roughness ε/D at bore `diameter` [m].
    pub fn relative_roughness(&self, diameter: f64) -> f64 {
        match self {
            Material::Smooth => SMOOTH_ABSOLUTE_ROUGHNESS / diameter,
            Material::Flex => FLEX_RELATIVE_ROUGHNESS,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Material::Smooth => "smooth",
            Material::Flex => "flex",
        }
    }
}

impl std::str::FromStr for Material {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smooth" => Ok(Material::Smooth),
            "flex" | "flexible" => Ok(Material::Flex),
            _ => Err("unknown material"),
        }
    }
}

/// How the Darcy friction factor is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FrictionModel {
    /// Laminar 64/Re, Colebrook-White when turbulent.
    #[default]
    ColebrookWhite,
    /// Fixed friction factor regardless of Reynolds number.
    Fixed(f64),
}

impl FrictionModel {
    fn evaluate(&self, reynolds: f64, relative_roughness: f64) -> ElementResult<f64> {
        match *self {
            FrictionModel::ColebrookWhite => {
                correlations::friction_factor(reynolds, relative_roughness)
            }
            FrictionModel::Fixed(f) if f.is_finite() && f >= 0.0 => Ok(f),
            FrictionModel::Fixed(_) => Err(ElementError::NonPhysical {
                what: "fixed friction factor must be non-negative",
            }),
        }
    }
}

/// Bore of a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diameter {
    Uniform(Length),
    /// Linear taper from inlet to outlet.
    Taper { inlet: Length, outlet: Length },
}

impl Diameter {
    /// Diameter used for the segment's own pressure drop.
    ///
    /// The mean of the end diameters for a taper.
    pub fn representative(&self) -> Length {
        match *self {
            Diameter::Uniform(d) => d,
            Diameter::Taper { inlet, outlet } => (inlet + outlet) / 2.0,
        }
    }

    fn ends(&self) -> (f64, f64) {
        match *self {
            Diameter::Uniform(d) => (d.value, d.value),
            Diameter::Taper { inlet, outlet } => (inlet.value, outlet.value),
        }
    }
}

/// One independent diameter station of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    pub diameter: Length,
    pub drop: ElementDrop,
}

/// Straight pipe or tube run, with optional rounded bends.
///
/// Loss coefficient is `f·L/D` plus one Rennels bend term per bend angle,
/// all evaluated at the representative diameter.
#[derive(Debug, Clone, PartialEq)]
pub struct DuctSegment {
    name: String,
    length: Length,
    diameter: Diameter,
    material: Material,
    /// Bend angles in degrees, in flow order
    bends: Vec<f64>,
    friction: FrictionModel,
    /// Bend radius in diameters
    bend_diameters: f64,
}

impl DuctSegment {
    /// Create a uniform-bore segment.
    pub fn new(
        name: impl Into<String>,
        length: Length,
        diameter: Length,
        material: Material,
    ) -> ElementResult<Self> {
        Self::with_diameter(name, length, Diameter::Uniform(diameter), material)
    }

    /// Create a segment tapering linearly from `inlet` to `outlet` diameter.
    pub fn tapered(
        name: impl Into<String>,
        length: Length,
        inlet: Length,
        outlet: Length,
        material: Material,
    ) -> ElementResult<Self> {
        Self::with_diameter(name, length, Diameter::Taper { inlet, outlet }, material)
    }

    fn with_diameter(
        name: impl Into<String>,
        length: Length,
        diameter: Diameter,
        material: Material,
    ) -> ElementResult<Self> {
        check_geometry(length.value, "duct length must be positive")?;
        let (a, b) = diameter.ends();
        check_geometry(a, "duct diameter must be positive")?;
        check_geometry(b, "duct diameter must be positive")?;
        Ok(Self {
            name: name.into(),
            length,
            diameter,
            material,
            bends: Vec::new(),
            friction: FrictionModel::default(),
            bend_diameters: correlations::DEFAULT_BEND_DIAMETERS,
        })
    }

    /// Add bends (degrees) in flow order.
    pub fn with_bends(mut self, angles: impl IntoIterator<Item = f64>) -> Self {
        self.bends.extend(angles);
        self
    }

    /// Replace the friction factor correlation.
    pub fn with_friction(mut self, friction: FrictionModel) -> Self {
        self.friction = friction;
        self
    }

    /// Set the bend radius in pipe diameters.
    pub fn with_bend_radius(mut self, diameters: f64) -> Self {
        self.bend_diameters = diameters;
        self
    }

    pub fn diameter(&self) -> Diameter {
        self.diameter
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn bends(&self) -> &[f64] {
        &self.bends
    }

    pub fn friction(&self) -> FrictionModel {
        self.friction
    }

    /// Diameters of `n` independent stations from inlet to outlet.
    pub fn stations(&self, n: usize) -> Vec<Length> {
        let (a, b) = self.diameter.ends();
        linspace(a, b, n).into_iter().map(m).collect()
    }

    /// Evaluate the full segment at each of `n` diameter stations.
    ///
    /// Each station is an independent segment of the full length at that
    /// diameter, with its own velocity, Reynolds number and friction factor.
    pub fn sweep(&self, fluid: &FluidState, n: usize) -> ElementResult<Vec<Station>> {
        self.stations(n)
            .into_iter()
            .map(|diameter| {
                let drop = self.evaluate_at(fluid, diameter.value)?;
                Ok(Station { diameter, drop })
            })
            .collect()
    }

    fn reynolds(&self, fluid: &FluidState, rho: f64, v: f64, d: f64) -> ElementResult<f64> {
        let mu = fluid.dynamic_viscosity().value;
        let nu = fluid.kinematic_viscosity().value;
        let re = if mu != 0.0 {
            correlations::reynolds_dynamic(v, d, rho, mu)
        } else if nu != 0.0 {
            correlations::reynolds_kinematic(v, d, nu)
        } else {
            return Err(ElementError::MissingViscosity);
        };
        check_finite(re, "Reynolds number")
    }

    fn evaluate_at(&self, fluid: &FluidState, d: f64) -> ElementResult<ElementDrop> {
        let length = check_geometry(self.length.value, "duct length must be positive")?;
        let (rho, v) = bulk_flow(fluid, d)?;

        if !self.bend_diameters.is_finite() || self.bend_diameters <= 0.0 {
            return Err(ElementError::InvalidGeometry {
                what: "bend radius must be positive",
            });
        }
        if self.bends.iter().any(|a| !a.is_finite() || *a < 0.0) {
            return Err(ElementError::InvalidGeometry {
                what: "bend angles must be non-negative",
            });
        }

        let re = self.reynolds(fluid, rho, v, d)?;
        let f = self
            .friction
            .evaluate(re, self.material.relative_roughness(d))?;

        let k_bends: f64 = self
            .bends
            .iter()
            .map(|&angle| correlations::bend_rounded(d, angle, f, self.bend_diameters))
            .sum();
        let k_total = correlations::k_from_f(f, length, d) + k_bends;
        let dp = check_finite(correlations::dp_from_k(k_total, rho, v), "pressure drop")?;

        trace!(
            duct = %self.name,
            diameter_m = d,
            reynolds = re,
            friction_factor = f,
            k_total,
            dp_pa = dp,
            "duct evaluated"
        );

        Ok(ElementDrop {
            velocity: mps(v),
            reynolds: Some(re),
            friction_factor: Some(f),
            k_total,
            delta_p: pa(dp),
        })
    }
}

impl PressureLoss for DuctSegment {
    fn name(&self) -> &str {
        &self.name
    }

    fn length(&self) -> Length {
        self.length
    }

    fn compute_drop(&self, fluid: &FluidState) -> ElementResult<ElementDrop> {
        self.evaluate_at(fluid, self.diameter.representative().value)
    }
}
