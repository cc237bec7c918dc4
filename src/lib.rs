pub mod construction;
pub mod error;
pub mod geometry;
pub mod math;

pub use construction::{ConstructionState, GeometryEngine};
pub use error::{Result, SketchError};
