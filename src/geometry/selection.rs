use tracing::{debug, info};

use super::{BoundingBox, LatLngBounds, LngLat};

/// A user drawn shape owned by the map widget.
pub trait Overlay {
    fn bounds(&self) -> LatLngBounds;

    /// Removes the overlay's visual representation from the map.
    fn detach(&mut self);
}

/// Rectangle described by the two corners of the drag gesture. It has no
/// rendering of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnRectangle {
    start: LngLat,
    end: LngLat,
}

impl DrawnRectangle {
    pub fn new(start: LngLat, end: LngLat) -> Self {
        Self { start, end }
    }
}

impl From<LatLngBounds> for DrawnRectangle {
    fn from(bounds: LatLngBounds) -> Self {
        Self::new(bounds.south_west(), bounds.north_east())
    }
}

impl Overlay for DrawnRectangle {
    fn bounds(&self) -> LatLngBounds {
        LatLngBounds::from_corners(self.start, self.end)
    }

    fn detach(&mut self) {
        debug!(start = ?self.start, end = ?self.end, "rectangle replaced");
    }
}

/// Holds the most recent rectangle and the bounding box captured from it.
#[derive(Default)]
pub struct Selection {
    overlay: Option<Box<dyn Overlay>>,
    bounding_box: Option<BoundingBox>,
}

impl std::fmt::Debug for Selection {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Selection")
            .field("has_overlay", &self.overlay.is_some())
            .field("bounding_box", &self.bounding_box)
            .finish()
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a finished rectangle: the previous overlay is detached and the
    /// stored bounding box is replaced, never accumulated.
    pub fn on_overlay_complete(&mut self, overlay: Box<dyn Overlay>) -> BoundingBox {
        if let Some(mut previous) = self.overlay.take() {
            previous.detach();
        }

        let bounding_box = overlay.bounds().to_bounding_box();
        self.overlay = Some(overlay);
        self.bounding_box = Some(bounding_box);
        info!(coordinates = ?bounding_box.to_pairs(), "rectangle captured");
        bounding_box
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounding_box
    }
}
