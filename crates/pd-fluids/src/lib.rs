//! pd-fluids: fluid states for pipedrop.
//!
//! Provides:
//! - Species definitions for propellants and pressurants
//! - `PropertyProvider` trait for saturation property lookups
//! - CoolProp backend (via `rfluids`) and a frozen-property provider
//! - N₂O viscosity correlations
//! - `FluidState`, the immutable operating point shared by a flow path
//!
//! # Example
//!
//! ```no_run
//! use pd_fluids::{CoolPropProvider, FluidState, Species, ViscositySpec};
//! use pd_core::units::{kgps, pa};
//!
//! let provider = CoolPropProvider::new();
//! let fluid = FluidState::saturated(
//!     &provider,
//!     Species::NitrousOxide,
//!     pa(4.0e6),
//!     0.0,
//!     kgps(0.054),
//!     ViscositySpec::Unspecified,
//! )
//! .unwrap();
//! println!("Density: {} kg/m³", fluid.density().value);
//! ```

pub mod coolprop;
pub mod error;
pub mod provider;
pub mod species;
pub mod state;
pub mod viscosity;

// Re-exports for ergonomics
pub use coolprop::CoolPropProvider;
pub use error::{FluidError, FluidResult};
pub use provider::{FixedProvider, PropertyProvider, SaturationProperties};
pub use species::Species;
pub use state::{FluidState, FluidStateBuilder, Saturation, ViscositySpec};
