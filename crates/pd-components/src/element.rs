//! Closed set of element kinds a flow path is built from.

use crate::component::DiscreteComponent;
use crate::duct::DuctSegment;
use crate::error::ElementResult;
use crate::traits::{ElementDrop, PressureLoss};
use pd_core::units::Length;
use pd_fluids::FluidState;

#[derive(Debug, Clone, PartialEq)]
pub enum FlowElement {
    Duct(DuctSegment),
    Component(DiscreteComponent),
}

impl FlowElement {
    /// Short label for the element kind.
    pub fn kind(&self) -> &'static str {
        match self {
            FlowElement::Duct(_) => "duct",
            FlowElement::Component(_) => "component",
        }
    }

    pub fn as_duct(&self) -> Option<&DuctSegment> {
        match self {
            FlowElement::Duct(d) => Some(d),
            FlowElement::Component(_) => None,
        }
    }
}

impl PressureLoss for FlowElement {
    fn name(&self) -> &str {
        match self {
            FlowElement::Duct(d) => d.name(),
            FlowElement::Component(c) => c.name(),
        }
    }

    fn length(&self) -> Length {
        match self {
            FlowElement::Duct(d) => d.length(),
            FlowElement::Component(c) => c.length(),
        }
    }

    fn compute_drop(&self, fluid: &FluidState) -> ElementResult<ElementDrop> {
        match self {
            FlowElement::Duct(d) => d.compute_drop(fluid),
            FlowElement::Component(c) => c.compute_drop(fluid),
        }
    }
}

impl From<DuctSegment> for FlowElement {
    fn from(duct: DuctSegment) -> Self {
        FlowElement::Duct(duct)
    }
}

impl From<DiscreteComponent> for FlowElement {
    fn from(component: DiscreteComponent) -> Self {
        FlowElement::Component(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duct::Material;
    use pd_core::units::{k, kg_per_m3, kgps, m, pa_s};
    use pd_fluids::ViscositySpec;

    #[test]
    fn dispatches_to_variant() {
        let fluid = FluidState::new(
            kgps(0.054),
            k(90.0),
            kg_per_m3(800.0),
            ViscositySpec::Dynamic(pa_s(1e-4)),
        )
        .unwrap();
        let duct = DuctSegment::new("line", m(0.3), m(0.0064), Material::Smooth).unwrap();
        let valve = DiscreteComponent::from_cv("IS_1", m(0.00475), 1.4).unwrap();

        let a: FlowElement = duct.clone().into();
        let b: FlowElement = valve.clone().into();

        assert_eq!(a.kind(), "duct");
        assert_eq!(b.kind(), "component");
        assert_eq!(a.name(), "line");
        assert_eq!(b.length().value, 0.0);
        assert!(a.as_duct().is_some());
        assert!(b.as_duct().is_none());
        assert_eq!(
            a.compute_drop(&fluid).unwrap(),
            duct.compute_drop(&fluid).unwrap()
        );
        assert_eq!(
            b.compute_drop(&fluid).unwrap(),
            valve.compute_drop(&fluid).unwrap()
        );
    }
}
