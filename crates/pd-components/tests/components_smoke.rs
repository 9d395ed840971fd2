//! Integration tests for pd-components with real fluid states.

use pd_components::{
    DiscreteComponent, DuctSegment, ElementError, FlowElement, FrictionModel, Material,
    PressureLoss,
};
use pd_core::units::{constants::INCH, k, kg_per_m3, kgps, m, m2ps, pa, pa_s};
use pd_fluids::{CoolPropProvider, FixedProvider, FluidState, Species, ViscositySpec};

fn reference_liquid() -> FluidState {
    FluidState::new(
        kgps(0.054),
        k(90.0),
        kg_per_m3(800.0),
        ViscositySpec::Dynamic(pa_s(1e-4)),
    )
    .unwrap()
}

#[test]
fn quarter_inch_line_end_to_end() {
    let duct = DuctSegment::new("feed", m(0.3), m(0.0064), Material::Smooth).unwrap();
    let drop = duct.compute_drop(&reference_liquid()).unwrap();

    // Colebrook-White, Re ≈ 1.07e5, f ≈ 0.0307
    let expected = 2533.98;
    assert!(
        ((drop.delta_p.value - expected) / expected).abs() < 0.01,
        "dP = {} Pa",
        drop.delta_p.value
    );
    let f = drop.friction_factor.unwrap();
    assert!(f > 0.029 && f < 0.032, "f = {f}");
}

#[test]
fn isolation_valve_pressure_drop() {
    let valve = DiscreteComponent::from_cv("IS_1", m(0.00475), 1.4).unwrap();
    let drop = valve.compute_drop(&reference_liquid()).unwrap();
    assert!(
        (drop.delta_p.value - 3223.08).abs() < 0.1,
        "dP = {} Pa",
        drop.delta_p.value
    );
}

#[test]
fn simplified_fluid_with_kinematic_viscosity() {
    let fluid = FluidState::new(
        kgps(0.054),
        k(90.0),
        kg_per_m3(800.0),
        ViscositySpec::Kinematic(m2ps(1.25e-7)),
    )
    .unwrap();
    let duct = DuctSegment::new("feed", m(0.3), m(0.0064), Material::Smooth).unwrap();
    let by_nu = duct.compute_drop(&fluid).unwrap();
    let by_mu = duct.compute_drop(&reference_liquid()).unwrap();
    assert!(((by_nu.delta_p.value - by_mu.delta_p.value) / by_mu.delta_p.value).abs() < 1e-9);
}

#[test]
fn direct_state_without_viscosity_fails_only_for_ducts() {
    let fluid = FluidState::new(
        kgps(0.054),
        k(90.0),
        kg_per_m3(800.0),
        ViscositySpec::Unspecified,
    )
    .unwrap();

    let duct: FlowElement = DuctSegment::new("feed", m(0.3), m(0.0064), Material::Smooth)
        .unwrap()
        .into();
    let valve: FlowElement = DiscreteComponent::from_k("elbow", m(0.0064), 0.3)
        .unwrap()
        .into();

    assert_eq!(
        duct.compute_drop(&fluid).unwrap_err(),
        ElementError::MissingViscosity
    );
    assert!(valve.compute_drop(&fluid).is_ok());
}

#[test]
fn saturated_nitrous_through_fixed_provider() {
    let provider = FixedProvider::new(k(273.15), kg_per_m3(907.0));
    let fluid = FluidState::saturated(
        &provider,
        Species::NitrousOxide,
        pa(3.1e6),
        0.0,
        kgps(0.054),
        ViscositySpec::Unspecified,
    )
    .unwrap();

    let duct = DuctSegment::new("feed", m(0.3), m(0.0064), Material::Smooth)
        .unwrap()
        .with_bends([90.0; 4]);
    let drop = duct.compute_drop(&fluid).unwrap();
    assert!(drop.reynolds.unwrap() > 1e5);
    assert!(drop.delta_p.value > 0.0);
}

#[test]
fn liquid_nitrogen_feed_line() {
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

    let duct = DuctSegment::new("feed", m(0.3), m(0.25 * INCH), Material::Flex)
        .unwrap()
        .with_bends([90.0; 4]);
    let drop = duct.compute_drop(&fluid).unwrap();

    // Turbulent, a few kPa to tens of kPa for a short hose
    assert!(drop.reynolds.unwrap() > 1e4);
    assert!(
        drop.delta_p.value > 1e3 && drop.delta_p.value < 1e5,
        "dP = {} Pa",
        drop.delta_p.value
    );
}

#[test]
fn fixed_friction_matches_darcy_weisbach() {
    let fluid = reference_liquid();
    let duct = DuctSegment::new("feed", m(1.0), m(0.01), Material::Smooth)
        .unwrap()
        .with_friction(FrictionModel::Fixed(0.02));
    let drop = duct.compute_drop(&fluid).unwrap();

    let v = drop.velocity.value;
    let expected = 0.02 * (1.0 / 0.01) * 0.5 * 800.0 * v * v;
    assert!((drop.delta_p.value - expected).abs() < 1e-9 * expected);
}
