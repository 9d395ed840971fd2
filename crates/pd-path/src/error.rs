//! Path construction errors.

use pd_components::ElementError;
use pd_fluids::FluidError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// An element could not be built or evaluated.
    #[error("Element {index} ('{name}'): {source}")]
    Element {
        index: usize,
        name: String,
        #[source]
        source: ElementError,
    },

    /// A geometry row could not be interpreted.
    #[error("Geometry row {index}: {what}")]
    InvalidRow { index: usize, what: String },

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),
}

pub type PathResult<T> = Result<T, PathError>;
