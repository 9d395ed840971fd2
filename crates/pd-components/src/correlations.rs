//! Standard single-phase pipe-flow correlations.
//!
//! Plain `f64` functions in SI units. Domains are stated per function;
//! callers validate inputs, except `friction_factor` which checks its own.

use crate::error::{ElementError, ElementResult};
use std::f64::consts::PI;

/// Reynolds number below which flow is treated as laminar.
pub const LAMINAR_TRANSITION_RE: f64 = 2300.0;

/// Largest relative roughness on the Moody chart. Colebrook-White has no
/// meaningful solution much beyond it.
pub const MAX_RELATIVE_ROUGHNESS: f64 = 0.05;

/// Default bend radius, in pipe diameters, for rounded bends.
pub const DEFAULT_BEND_DIAMETERS: f64 = 5.0;

/// Cv to Kv factor (Kv = 0.865·Cv).
const CV_TO_KV: f64 = 0.865_048_813_040_824_5;

/// Cross-sectional area of a circular bore [m²].
pub fn flow_area(diameter: f64) -> f64 {
    PI * (diameter / 2.0).powi(2)
}

/// Mean velocity [m/s] for mass flow `mdot` at density `rho` through `area`.
pub fn velocity(mdot: f64, rho: f64, area: f64) -> f64 {
    mdot / (rho * area)
}

/// Re = ρVD/μ
pub fn reynolds_dynamic(v: f64, d: f64, rho: f64, mu: f64) -> f64 {
    rho * v * d / mu
}

/// Re = VD/ν
pub fn reynolds_kinematic(v: f64, d: f64, nu: f64) -> f64 {
    v * d / nu
}

/// Swamee-Jain explicit approximation of Colebrook-White.
pub fn swamee_jain(reynolds: f64, relative_roughness: f64) -> f64 {
    let a = relative_roughness / 3.7;
    let b = 5.74 / reynolds.powf(0.9);
    0.25 / (a + b).log10().powi(2)
}

/// Colebrook-White Darcy friction factor.
///
/// Solves `1/√f = −2·log10(ε/3.7D + 2.51/(Re·√f))` by fixed-point iteration
/// on `1/√f`, seeded with Swamee-Jain. Converges in a handful of steps for
/// any turbulent Reynolds number.
pub fn colebrook_white(reynolds: f64, relative_roughness: f64) -> f64 {
    const MAX_ITER: usize = 50;
    const TOL: f64 = 1e-12;

    let mut x = 1.0 / swamee_jain(reynolds, relative_roughness).sqrt();
    for _ in 0..MAX_ITER {
        let next = -2.0 * (relative_roughness / 3.7 + 2.51 * x / reynolds).log10();
        if (next - x).abs() < TOL {
            x = next;
            break;
        }
        x = next;
    }
    1.0 / (x * x)
}

/// Darcy friction factor: `64/Re` below the laminar transition,
/// Colebrook-White above it.
///
/// Requires `Re > 0` and non-negative relative roughness. Turbulent flow
/// additionally requires `ε/D <= MAX_RELATIVE_ROUGHNESS`.
pub fn friction_factor(reynolds: f64, relative_roughness: f64) -> ElementResult<f64> {
    if !reynolds.is_finite() || reynolds <= 0.0 {
        return Err(ElementError::NonPhysical {
            what: "Reynolds number must be positive and finite",
        });
    }
    if !relative_roughness.is_finite() || relative_roughness < 0.0 {
        return Err(ElementError::NonPhysical {
            what: "relative roughness must be non-negative",
        });
    }

    if reynolds < LAMINAR_TRANSITION_RE {
        Ok(64.0 / reynolds)
    } else if relative_roughness > MAX_RELATIVE_ROUGHNESS {
        Err(ElementError::NonPhysical {
            what: "relative roughness beyond the Moody chart",
        })
    } else {
        Ok(colebrook_white(reynolds, relative_roughness))
    }
}

/// Straight-pipe loss coefficient K = f·L/D.
pub fn k_from_f(fd: f64, length: f64, diameter: f64) -> f64 {
    fd * length / diameter
}

/// Loss coefficient of a rounded bend (Rennels).
///
/// `angle_deg` is the turning angle, `bend_diameters` the bend radius in
/// pipe diameters. Includes the friction of the bend's own arc length.
pub fn bend_rounded(diameter: f64, angle_deg: f64, fd: f64, bend_diameters: f64) -> f64 {
    let angle = angle_deg.to_radians();
    let rc = diameter * bend_diameters;
    let s = (0.5 * angle).sin();
    fd * angle * rc / diameter
        + (0.10 + 2.4 * fd) * s
        + 6.6 * fd * (s.sqrt() + s) / (rc / diameter).powf(4.0 * angle / PI)
}

/// Convert a valve flow coefficient Cv to a loss coefficient K for bore `diameter` [m].
pub fn cv_to_k(cv: f64, diameter: f64) -> f64 {
    let kv = CV_TO_KV * cv;
    1.6e9 * diameter.powi(4) / (kv * kv)
}

/// ΔP = K·ρ·V²/2
pub fn dp_from_k(k: f64, rho: f64, v: f64) -> f64 {
    k * 0.5 * rho * v * v
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rel_err(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn laminar_friction_factor() {
        assert_eq!(friction_factor(1000.0, 0.0).unwrap(), 0.064);
        assert_eq!(friction_factor(64.0, 0.01).unwrap(), 1.0);
    }

    #[test]
    fn turbulent_friction_factor_matches_reference() {
        let f = friction_factor(107_429.586_587_029_36, 0.03e-3 / 0.0064).unwrap();
        assert!(rel_err(f, 0.030_696_874_346_585_443) < 1e-9, "f = {f}");
    }

    #[test]
    fn colebrook_smooth_pipe() {
        // Moody chart: smooth pipe at Re = 1e5 gives f ≈ 0.018
        let f = colebrook_white(1e5, 0.0);
        assert!(f > 0.0175 && f < 0.0185, "f = {f}");
    }

    #[test]
    fn friction_factor_rejects_bad_domain() {
        assert!(friction_factor(0.0, 0.001).is_err());
        assert!(friction_factor(-5.0, 0.001).is_err());
        assert!(friction_factor(f64::NAN, 0.001).is_err());
        assert!(friction_factor(1e5, -0.1).is_err());
    }

    #[test]
    fn very_rough_turbulent_flow_rejected() {
        assert!(friction_factor(1e5, MAX_RELATIVE_ROUGHNESS).is_ok());
        assert_eq!(
            friction_factor(1e5, 5.0),
            Err(ElementError::NonPhysical {
                what: "relative roughness beyond the Moody chart",
            })
        );
        assert!(friction_factor(1e5, 30.0).is_err());
        // laminar friction does not depend on roughness
        assert_eq!(friction_factor(1000.0, 5.0).unwrap(), 0.064);
    }

    #[test]
    fn ninety_degree_bend() {
        let k = bend_rounded(0.0064, 90.0, 0.030_696_874_346_585_443, DEFAULT_BEND_DIAMETERS);
        assert!(rel_err(k, 0.376_442_667_622_083_1) < 1e-9, "K = {k}");
    }

    #[test]
    fn zero_angle_bend_has_no_loss() {
        assert_eq!(bend_rounded(0.01, 0.0, 0.02, DEFAULT_BEND_DIAMETERS), 0.0);
    }

    #[test]
    fn cv_conversion() {
        let k = cv_to_k(1.4, 0.00475);
        assert!(rel_err(k, 0.555_337_653_229_034_7) < 1e-12, "K = {k}");
    }

    #[test]
    fn darcy_weisbach() {
        assert_eq!(k_from_f(0.02, 1.0, 0.01), 2.0);
        assert_eq!(dp_from_k(2.0, 1000.0, 3.0), 9000.0);
        assert!((flow_area(2.0) - PI).abs() < 1e-15);
        assert_eq!(reynolds_dynamic(2.0, 0.01, 1000.0, 1e-3), 20_000.0);
        assert_eq!(reynolds_kinematic(2.0, 0.01, 1e-6), 20_000.0);
    }

    proptest! {
        #[test]
        fn colebrook_close_to_swamee_jain(re in 5e3f64..1e8, ed in 1e-6f64..0.01) {
            let f = colebrook_white(re, ed);
            let sj = swamee_jain(re, ed);
            prop_assert!(f > 0.0);
            prop_assert!(rel_err(sj, f) < 0.03, "f = {}, sj = {}", f, sj);
        }

        #[test]
        fn friction_factor_grows_with_roughness(re in 5e3f64..1e7, ed in 1e-5f64..0.025) {
            let smooth = friction_factor(re, ed).unwrap();
            let rough = friction_factor(re, ed * 2.0).unwrap();
            prop_assert!(rough > smooth);
        }
    }
}
