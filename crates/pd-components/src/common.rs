//! Common utilities for element calculations.

use crate::correlations;
use crate::error::{ElementError, ElementResult};
use pd_core::numeric::{ensure_finite, ensure_positive};
use pd_fluids::FluidState;

/// Ensure a value is finite, returning ElementError if not.
pub fn check_finite(value: f64, what: &'static str) -> ElementResult<f64> {
    ensure_finite(value, what).map_err(|_| ElementError::NonPhysical { what })
}

/// Ensure a geometric or bulk quantity is finite and strictly positive.
pub fn check_geometry(value: f64, what: &'static str) -> ElementResult<f64> {
    ensure_positive(value, what).map_err(|_| ElementError::InvalidGeometry { what })
}

/// Density and mean velocity of `fluid` through a circular bore of diameter `d_m`.
pub fn bulk_flow(fluid: &FluidState, d_m: f64) -> ElementResult<(f64, f64)> {
    let d = check_geometry(d_m, "diameter must be positive")?;
    let rho = check_geometry(fluid.density().value, "density must be positive")?;
    let area = correlations::flow_area(d);
    let v = check_finite(
        correlations::velocity(fluid.mdot().value, rho, area),
        "velocity",
    )?;
    Ok((rho, v))
}
