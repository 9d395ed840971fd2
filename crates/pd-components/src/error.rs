//! Error types for flow element evaluation.

use pd_core::PdError;
use thiserror::Error;

/// Errors that can occur while computing an element's pressure drop.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElementError {
    #[error("Missing viscosity: neither dynamic nor kinematic viscosity is set")]
    MissingViscosity,

    #[error("Invalid geometry: {what}")]
    InvalidGeometry { what: &'static str },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },
}

pub type ElementResult<T> = Result<T, ElementError>;

impl From<ElementError> for PdError {
    fn from(e: ElementError) -> Self {
        match e {
            ElementError::MissingViscosity => PdError::InvalidArg {
                what: "missing viscosity",
            },
            ElementError::InvalidGeometry { what } => PdError::InvalidArg { what },
            ElementError::NonPhysical { what } => PdError::Invariant {
                what: what.to_string(),
            },
        }
    }
}
