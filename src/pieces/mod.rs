//! Piece geometry: the shape catalog, orientation transforms, and concrete
//! placements.
//!
//! The catalog is read-only process-wide data; instances are independent
//! values that can be created freely during move enumeration.

pub mod catalog;
pub mod instance;
pub mod transform;

pub use catalog::{ShapeDef, ShapeId, SymmetryClass, UnknownShape, CATALOG, TOTAL_CELLS_PER_PLAYER};
pub use instance::{CellSet, CornerSet, ShapeInstance};
pub use transform::{Mirror, Rotation, TransformError};
