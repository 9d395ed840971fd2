//! pd-path: linear flow paths and their pressure profiles.
//!
//! A `FlowPath` is an ordered list of `FlowElement`s evaluated eagerly
//! against one `FluidState`. Paths can be built from a vector of elements,
//! incrementally with `FlowPathBuilder`, or from tabular `GeometryRow`s.

pub mod builder;
pub mod error;
pub mod path;
pub mod table;

pub use builder::FlowPathBuilder;
pub use error::{PathError, PathResult};
pub use path::{FlowPath, ProfilePoint};
pub use table::{DiameterDef, GeometryRow, LossDef, PipeKeyword, elements_from_rows};
