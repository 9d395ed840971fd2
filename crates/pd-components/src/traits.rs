//! Core trait for flow-path elements.

use crate::error::ElementResult;
use pd_core::units::{Length, Pressure, Velocity};
use pd_fluids::FluidState;

/// Outcome of evaluating one element against one fluid state.
///
/// Diagnostics that do not apply to an element kind (Reynolds number and
/// friction factor for discrete components) are `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementDrop {
    /// Mean velocity through the element
    pub velocity: Velocity,
    /// Reynolds number, when the element needs one
    pub reynolds: Option<f64>,
    /// Darcy friction factor, when the element needs one
    pub friction_factor: Option<f64>,
    /// Total dimensionless loss coefficient
    pub k_total: f64,
    /// Resulting pressure drop (non-negative)
    pub delta_p: Pressure,
}

/// Element of a linear flow path that loses pressure.
///
/// Implementations are pure: evaluating never mutates the element, so the
/// same element can be evaluated against any number of fluid states.
pub trait PressureLoss {
    /// Element name for reports and error messages.
    fn name(&self) -> &str;

    /// Length this element adds to the path.
    fn length(&self) -> Length;

    /// Pressure drop of `fluid` flowing through this element.
    fn compute_drop(&self, fluid: &FluidState) -> ElementResult<ElementDrop>;
}
