//! Nitrous oxide viscosity correlations.
//!
//! Saturated liquid, saturated vapour and dilute gas fits for N₂O dynamic
//! viscosity (ESDU 91022 as reproduced in the P07106 nitrous oxide property
//! notes, pp. 17-19). Inputs are in kelvin, outputs in Pa·s.
//!
//! The saturated forms are fitted over −90 °C to 30 °C and the dilute-gas
//! form over −90 °C to 727 °C. Temperatures outside those bands are still
//! evaluated where the formula is defined, with a `warn!` for extrapolation.
//! Where the formula is undefined (at or above the critical point for the
//! saturated forms) an `OutOfRange` error is returned instead of NaN.

use crate::error::{FluidError, FluidResult};
use pd_core::units::{DynVisc, Temperature, pa_s};
use tracing::warn;

/// Critical temperature of nitrous oxide [K].
pub const N2O_CRITICAL_TEMPERATURE_K: f64 = 309.57;

const SATURATED_RANGE_K: (f64, f64) = (183.15, 303.15);
const DILUTE_GAS_RANGE_K: (f64, f64) = (183.15, 1000.15);

fn check_fit_range(t_k: f64, range: (f64, f64), which: &'static str) {
    if t_k < range.0 || t_k > range.1 {
        warn!(
            temperature_k = t_k,
            min_k = range.0,
            max_k = range.1,
            "N2O {which} viscosity extrapolated outside its fitted range"
        );
    }
}

fn kelvin(t: Temperature) -> FluidResult<f64> {
    let t_k = t.value;
    if !t_k.is_finite() || t_k <= 0.0 {
        return Err(FluidError::NonPhysical {
            what: "temperature must be positive and finite",
        });
    }
    Ok(t_k)
}

/// Dynamic viscosity of saturated liquid N₂O.
///
/// ```text
/// θ   = (Tc − b3) / (T − b3)
/// η_l = b4 · exp(b1·(θ−1)^(1/3) + b2·(θ−1)^(4/3))   [mPa·s]
/// ```
pub fn saturated_liquid(t: Temperature) -> FluidResult<DynVisc> {
    const B1: f64 = 1.6089;
    const B2: f64 = 2.0439;
    const B3: f64 = 5.24;
    const B4: f64 = 0.0293423;

    let t_k = kelvin(t)?;
    if t_k >= N2O_CRITICAL_TEMPERATURE_K {
        return Err(FluidError::OutOfRange {
            what: "saturated liquid N2O viscosity needs T below the critical temperature",
        });
    }
    if t_k <= B3 {
        return Err(FluidError::OutOfRange {
            what: "saturated liquid N2O viscosity needs T above 5.24 K",
        });
    }
    check_fit_range(t_k, SATURATED_RANGE_K, "saturated liquid");

    let theta_m1 = (N2O_CRITICAL_TEMPERATURE_K - B3) / (t_k - B3) - 1.0;
    let cbrt = theta_m1.cbrt();
    let eta_mpa_s = B4 * (B1 * cbrt + B2 * theta_m1 * cbrt).exp();
    Ok(pa_s(eta_mpa_s / 1e3))
}

/// Dynamic viscosity of saturated vapour N₂O.
///
/// ```text
/// Tr  = T / Tc
/// η_g = exp(b1 + b2·(1/Tr − 1)^(1/3) + b3·(1/Tr − 1)^(4/3))   [µPa·s]
/// ```
pub fn saturated_vapour(t: Temperature) -> FluidResult<DynVisc> {
    const B1: f64 = 3.3281;
    const B2: f64 = -1.18237;
    const B3: f64 = -0.055155;

    let t_k = kelvin(t)?;
    if t_k >= N2O_CRITICAL_TEMPERATURE_K {
        return Err(FluidError::OutOfRange {
            what: "saturated vapour N2O viscosity needs T below the critical temperature",
        });
    }
    check_fit_range(t_k, SATURATED_RANGE_K, "saturated vapour");

    let x = N2O_CRITICAL_TEMPERATURE_K / t_k - 1.0;
    let cbrt = x.cbrt();
    let eta_upa_s = (B1 + B2 * cbrt + B3 * x * cbrt).exp();
    Ok(pa_s(eta_upa_s / 1e6))
}

/// Dynamic viscosity of dilute-gas N₂O.
///
/// Not used when building a fluid state; call it directly for low-pressure gas.
///
/// ```text
/// η_og = b1 + b2·Tr + b3·Tr² + b4·Tr³   [µPa·s]
/// ```
pub fn dilute_gas(t: Temperature) -> FluidResult<DynVisc> {
    const B1: f64 = -0.955565;
    const B2: f64 = 18.8315;
    const B3: f64 = -2.34589;
    const B4: f64 = 0.164927;

    let t_k = kelvin(t)?;
    check_fit_range(t_k, DILUTE_GAS_RANGE_K, "dilute gas");

    let tr = t_k / N2O_CRITICAL_TEMPERATURE_K;
    let eta_upa_s = B1 + tr * (B2 + tr * (B3 + tr * B4));
    if eta_upa_s <= 0.0 {
        return Err(FluidError::OutOfRange {
            what: "dilute gas N2O viscosity is non-positive at this temperature",
        });
    }
    Ok(pa_s(eta_upa_s / 1e6))
}

/// Pick the saturation correlation for a vapour quality.
///
/// Only the pure phases are covered: 0 selects the liquid fit, 1 the vapour
/// fit, anything between is `UnsupportedState`.
pub fn saturated(t: Temperature, quality: f64) -> FluidResult<DynVisc> {
    if quality == 0.0 {
        saturated_liquid(t)
    } else if quality == 1.0 {
        saturated_vapour(t)
    } else {
        Err(FluidError::UnsupportedState { quality })
    }
}
