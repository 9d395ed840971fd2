//! CoolProp integration tests.
//!
//! These tests verify that the CoolProp backend works correctly with realistic scenarios.
//! We use broad tolerances to avoid backend version issues, but enforce physical plausibility.

use pd_core::units::{kgps, pa};
use pd_fluids::{
    CoolPropProvider, FluidError, FluidState, PropertyProvider, Species, ViscositySpec,
};

#[test]
fn nitrogen_saturated_liquid_at_4_bar() {
    let provider = CoolPropProvider::new();
    let sat = provider.saturation(Species::Nitrogen, pa(4.0e5), 0.0).unwrap();

    // Saturation temperature ~91 K, liquid density ~750 kg/m³
    assert!(
        sat.temperature.value > 85.0 && sat.temperature.value < 97.0,
        "T = {} K",
        sat.temperature.value
    );
    assert!(
        sat.density.value > 700.0 && sat.density.value < 800.0,
        "rho = {} kg/m³",
        sat.density.value
    );
}

#[test]
fn nitrous_liquid_denser_than_vapour() {
    let provider = CoolPropProvider::new();
    let p = pa(3.1e6);

    let liquid = provider.saturation(Species::NitrousOxide, p, 0.0).unwrap();
    let vapour = provider.saturation(Species::NitrousOxide, p, 1.0).unwrap();

    assert!(
        liquid.density.value > 850.0 && liquid.density.value < 960.0,
        "rho_l = {}",
        liquid.density.value
    );
    assert!(liquid.density.value > 5.0 * vapour.density.value);
    assert!((liquid.temperature.value - vapour.temperature.value).abs() < 0.1);
}

#[test]
fn nitrous_state_uses_builtin_liquid_viscosity() {
    let provider = CoolPropProvider::new();
    let fluid = FluidState::saturated(
        &provider,
        Species::NitrousOxide,
        pa(3.1e6),
        0.0,
        kgps(0.054),
        ViscositySpec::Unspecified,
    )
    .unwrap();

    let expected = pd_fluids::viscosity::saturated_liquid(fluid.temperature()).unwrap();
    assert_eq!(fluid.dynamic_viscosity(), expected);
    // ~75 µPa·s near 0 °C
    assert!(fluid.dynamic_viscosity().value > 5e-5 && fluid.dynamic_viscosity().value < 1.2e-4);
}

#[test]
fn nitrogen_state_uses_backend_viscosity() {
    let provider = CoolPropProvider::new();
    let fluid = FluidState::saturated(
        &provider,
        Species::Nitrogen,
        pa(4.0e5),
        0.0,
        kgps(0.054),
        ViscositySpec::Unspecified,
    )
    .unwrap();
    assert!(fluid.dynamic_viscosity().value > 0.0);
}

#[test]
fn supercritical_pressure_fails_lookup() {
    let provider = CoolPropProvider::new();
    let err = provider
        .saturation(Species::NitrousOxide, pa(1.0e8), 0.0)
        .unwrap_err();
    assert!(matches!(err, FluidError::PropertyLookup { .. }), "{err:?}");
}
