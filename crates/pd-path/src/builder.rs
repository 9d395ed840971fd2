//! Incremental flow path builder.

use crate::error::{PathError, PathResult};
use crate::path::FlowPath;
use pd_components::{
    DiscreteComponent, DuctSegment, ElementError, FlowElement, LossCoefficient, Material,
};
use pd_core::units::Length;
use pd_fluids::FluidState;

/// Builder for assembling a path element by element.
///
/// Element construction errors are held until `build()`, which reports the
/// first one with its position in the path.
#[derive(Debug, Default)]
pub struct FlowPathBuilder {
    entries: Vec<Result<FlowElement, (String, ElementError)>>,
}

impl FlowPathBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already constructed element.
    pub fn push(mut self, element: impl Into<FlowElement>) -> Self {
        self.entries.push(Ok(element.into()));
        self
    }

    /// Append a uniform-bore duct with the given bends.
    pub fn pipe(
        mut self,
        name: impl Into<String>,
        length: Length,
        diameter: Length,
        material: Material,
        bends: impl IntoIterator<Item = f64>,
    ) -> Self {
        let name = name.into();
        let entry = DuctSegment::new(name.clone(), length, diameter, material)
            .map(|d| FlowElement::Duct(d.with_bends(bends)))
            .map_err(|e| (name, e));
        self.entries.push(entry);
        self
    }

    /// Append a valve or fitting occupying `length` of the path.
    pub fn component(
        mut self,
        name: impl Into<String>,
        length: Length,
        diameter: Length,
        coefficient: LossCoefficient,
    ) -> Self {
        let name = name.into();
        let entry = DiscreteComponent::new(name.clone(), diameter, coefficient)
            .and_then(|c| c.with_length(length))
            .map(FlowElement::Component)
            .map_err(|e| (name, e));
        self.entries.push(entry);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Collect the elements without evaluating them.
    pub fn into_elements(self) -> PathResult<Vec<FlowElement>> {
        self.entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                entry.map_err(|(name, source)| PathError::Element {
                    index,
                    name,
                    source,
                })
            })
            .collect()
    }

    /// Build and evaluate the path against `fluid`.
    pub fn build(self, fluid: &FluidState) -> PathResult<FlowPath> {
        FlowPath::new(fluid, self.into_elements()?)
    }
}
