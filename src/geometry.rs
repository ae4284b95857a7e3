mod bounds;
mod error;
mod selection;

#[cfg(test)]
mod tests;

pub use bounds::{BoundingBox, LatLngBounds, LngLat};
pub use error::{GeometryError, Result};
pub use selection::{DrawnRectangle, Overlay, Selection};
