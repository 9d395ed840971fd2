//! Evaluated linear flow path.

use crate::error::{PathError, PathResult};
use pd_components::{ElementDrop, FlowElement, PressureLoss};
use pd_core::units::{Length, MassRate, Pressure, m, pa};
use pd_fluids::FluidState;
use tracing::{debug, info};

/// Pressure drop at a running length along the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Running length at the element's outlet
    pub length: Length,
    pub pressure_drop: Pressure,
}

/// Ordered elements together with their evaluated pressure drops.
///
/// All drops are computed when the path is built; a path that exists has a
/// complete, consistent profile.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowPath {
    elements: Vec<FlowElement>,
    drops: Vec<ElementDrop>,
    element_profile: Vec<ProfilePoint>,
    cumulative_profile: Vec<ProfilePoint>,
    mdot: MassRate,
}

impl FlowPath {
    /// Evaluate `elements` in order against `fluid`.
    ///
    /// Fails on the first element that cannot be evaluated.
    pub fn new(fluid: &FluidState, elements: Vec<FlowElement>) -> PathResult<Self> {
        let mut drops = Vec::with_capacity(elements.len());
        let mut element_profile = Vec::with_capacity(elements.len());
        let mut cumulative_profile = Vec::with_capacity(elements.len());
        let mut length = 0.0;
        let mut total = 0.0;

        for (index, element) in elements.iter().enumerate() {
            let drop = element
                .compute_drop(fluid)
                .map_err(|source| PathError::Element {
                    index,
                    name: element.name().to_string(),
                    source,
                })?;

            length += element.length().value;
            total += drop.delta_p.value;

            debug!(
                index,
                element = element.name(),
                kind = element.kind(),
                k_total = drop.k_total,
                dp_pa = drop.delta_p.value,
                "element pressure drop"
            );

            element_profile.push(ProfilePoint {
                length: m(length),
                pressure_drop: drop.delta_p,
            });
            cumulative_profile.push(ProfilePoint {
                length: m(length),
                pressure_drop: pa(total),
            });
            drops.push(drop);
        }

        info!(
            elements = elements.len(),
            length_m = length,
            dp_pa = total,
            "flow path evaluated"
        );

        Ok(Self {
            elements,
            drops,
            element_profile,
            cumulative_profile,
            mdot: fluid.mdot(),
        })
    }

    pub fn elements(&self) -> &[FlowElement] {
        &self.elements
    }

    /// Evaluation record of each element, in path order.
    pub fn drops(&self) -> &[ElementDrop] {
        &self.drops
    }

    /// Each element's own pressure drop at its outlet's running length.
    pub fn element_profile(&self) -> &[ProfilePoint] {
        &self.element_profile
    }

    /// Accumulated pressure drop at each element outlet.
    pub fn cumulative_profile(&self) -> &[ProfilePoint] {
        &self.cumulative_profile
    }

    /// Mass flow the path was evaluated at.
    pub fn mdot(&self) -> MassRate {
        self.mdot
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Inlet-to-outlet pressure drop, zero for an empty path.
    pub fn total_drop(&self) -> Pressure {
        self.cumulative_profile
            .last()
            .map(|p| p.pressure_drop)
            .unwrap_or_else(|| pa(0.0))
    }

    pub fn total_length(&self) -> Length {
        self.cumulative_profile
            .last()
            .map(|p| p.length)
            .unwrap_or_else(|| m(0.0))
    }

    /// Element names paired with their pressure drop in Pa.
    pub fn breakdown(&self) -> Vec<(String, f64)> {
        self.elements
            .iter()
            .zip(&self.drops)
            .map(|(e, d)| (e.name().to_string(), d.delta_p.value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pd_components::{DiscreteComponent, DuctSegment, ElementError, Material};
    use pd_core::units::{k, kg_per_m3, kgps, pa_s};
    use pd_fluids::ViscositySpec;

    fn liquid(viscosity: ViscositySpec) -> FluidState {
        FluidState::new(kgps(0.054), k(90.0), kg_per_m3(800.0), viscosity).unwrap()
    }

    fn sample_elements() -> Vec<FlowElement> {
        vec![
            DuctSegment::new("line", m(0.3), m(0.0064), Material::Smooth)
                .unwrap()
                .with_bends([90.0; 4])
                .into(),
            DiscreteComponent::from_cv("IS_1", m(0.00475), 1.4)
                .unwrap()
                .with_length(m(0.0607))
                .unwrap()
                .into(),
            DiscreteComponent::from_cv("CV_1", m(0.00475), 0.67)
                .unwrap()
                .with_length(m(0.0617))
                .unwrap()
                .into(),
        ]
    }

    #[test]
    fn empty_path() {
        let path = FlowPath::new(&liquid(ViscositySpec::Unspecified), Vec::new()).unwrap();
        assert!(path.is_empty());
        assert!(path.element_profile().is_empty());
        assert!(path.cumulative_profile().is_empty());
        assert_eq!(path.total_drop().value, 0.0);
        assert_eq!(path.total_length().value, 0.0);
    }

    #[test]
    fn profiles_accumulate() {
        let fluid = liquid(ViscositySpec::Dynamic(pa_s(1e-4)));
        let path = FlowPath::new(&fluid, sample_elements()).unwrap();

        assert_eq!(path.len(), 3);
        assert_eq!(path.mdot(), fluid.mdot());

        let own: Vec<f64> = path.drops().iter().map(|d| d.delta_p.value).collect();
        let cumulative = path.cumulative_profile();
        assert_eq!(cumulative[0].pressure_drop.value, own[0]);
        assert_eq!(cumulative[1].pressure_drop.value, own[0] + own[1]);
        assert_eq!(cumulative[2].pressure_drop.value, own[0] + own[1] + own[2]);
        assert_eq!(path.total_drop(), cumulative[2].pressure_drop);

        let lengths: Vec<f64> = path.element_profile().iter().map(|p| p.length.value).collect();
        assert_eq!(lengths, vec![0.3, 0.3 + 0.0607, 0.3 + 0.0607 + 0.0617]);
        assert_eq!(path.total_length().value, lengths[2]);
    }

    #[test]
    fn breakdown_follows_path_order() {
        let fluid = liquid(ViscositySpec::Dynamic(pa_s(1e-4)));
        let path = FlowPath::new(&fluid, sample_elements()).unwrap();
        let breakdown = path.breakdown();
        let names: Vec<&str> = breakdown.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["line", "IS_1", "CV_1"]);
        let sum: f64 = breakdown.iter().map(|(_, dp)| dp).sum();
        assert!((sum - path.total_drop().value).abs() < 1e-9);
    }

    #[test]
    fn failing_element_aborts_construction() {
        let fluid = liquid(ViscositySpec::Unspecified);
        let mut elements = sample_elements();
        elements.rotate_left(1);
        let err = FlowPath::new(&fluid, elements).unwrap_err();
        assert_eq!(
            err,
            PathError::Element {
                index: 2,
                name: "line".into(),
                source: ElementError::MissingViscosity,
            }
        );
    }
}
