//! pd-components: flow elements for pressure-drop analysis.
//!
//! Provides:
//! - Single-phase pipe-flow correlations (friction factor, bends, Cv)
//! - `DuctSegment`: straight runs with friction and rounded bends
//! - `DiscreteComponent`: valves and fittings given by K or Cv
//! - `FlowElement`, the closed set of element kinds a path holds
//!
//! Every element implements `PressureLoss` and is a pure function of its
//! parameters and the fluid state.
//!
//! # Example
//!
//! ```
//! use pd_components::{DiscreteComponent, DuctSegment, Material, PressureLoss};
//! use pd_core::units::{k, kg_per_m3, kgps, m, pa_s};
//! use pd_fluids::{FluidState, ViscositySpec};
//!
//! let fluid = FluidState::new(
//!     kgps(0.054),
//!     k(90.0),
//!     kg_per_m3(800.0),
//!     ViscositySpec::Dynamic(pa_s(1e-4)),
//! )
//! .unwrap();
//!
//! let line = DuctSegment::new("line", m(0.3), m(0.0064), Material::Smooth)
//!     .unwrap()
//!     .with_bends([90.0; 4]);
//! let valve = DiscreteComponent::from_cv("IS_1", m(0.00475), 1.4).unwrap();
//!
//! let total = line.compute_drop(&fluid).unwrap().delta_p
//!     + valve.compute_drop(&fluid).unwrap().delta_p;
//! println!("Pressure drop: {} Pa", total.value);
//! ```

pub mod common;
pub mod component;
pub mod correlations;
pub mod duct;
pub mod element;
pub mod error;
pub mod traits;

// Re-exports
pub use component::{DiscreteComponent, LossCoefficient};
pub use duct::{DEFAULT_STATIONS, Diameter, DuctSegment, FrictionModel, Material, Station};
pub use element::FlowElement;
pub use error::{ElementError, ElementResult};
pub use traits::{ElementDrop, PressureLoss};
