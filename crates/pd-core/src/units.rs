// pd-core/src/units.rs

use uom::si::f64::{
    DiffusionCoefficient as UomDiffusionCoefficient, DynamicViscosity as UomDynamicViscosity,
    Length as UomLength, MassDensity as UomMassDensity, MassRate as UomMassRate,
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
    Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type DynVisc = UomDynamicViscosity;
/// Kinematic viscosity. uom has no dedicated quantity; diffusion
/// coefficient shares the m²/s dimension.
pub type KinVisc = UomDiffusionCoefficient;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type MassRate = UomMassRate;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn m2ps(v: f64) -> KinVisc {
    use uom::si::diffusion_coefficient::square_meter_per_second;
    KinVisc::new::<square_meter_per_second>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

/// Conversion factors to SI base units.
pub mod constants {
    /// One pound-force per square inch, in pascal.
    pub const PSI: f64 = 6_894.757_293_168_361;
    /// One inch, in metres.
    pub const INCH: f64 = 0.0254;
    /// One foot, in metres.
    pub const FOOT: f64 = 0.3048;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let _mdot = kgps(0.054);
        let _l = m(0.3);
        let _rho = kg_per_m3(800.0);
        let _mu = pa_s(1e-4);
        let _nu = m2ps(1.25e-7);
        assert_eq!(m2ps(1.25e-7).value, 1.25e-7);
    }

    #[test]
    fn conversion_constants_match_uom() {
        use uom::si::length::{foot, inch};
        use uom::si::pressure::pound_force_per_square_inch;

        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-6,
        };
        assert!(nearly_equal(
            Pressure::new::<pound_force_per_square_inch>(1.0).value,
            constants::PSI,
            tol
        ));
        assert!(nearly_equal(
            Length::new::<inch>(1.0).value,
            constants::INCH,
            tol
        ));
        assert!(nearly_equal(
            Length::new::<foot>(1.0).value,
            constants::FOOT,
            tol
        ));
    }
}
