//! Fluid property errors.

use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while building a fluid state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Property backend failed (unknown fluid, pressure outside its range, ...).
    #[error("Property lookup failed: {message}")]
    PropertyLookup { message: String },

    /// Two-phase quality with no viscosity supplied and no correlation for it.
    #[error("Unsupported fluid state: no viscosity correlation for quality {quality}")]
    UnsupportedState { quality: f64 },

    /// Non-physical values (negative density, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Value outside the domain where a correlation is defined.
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Operation not supported for this species or backend.
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },
}
