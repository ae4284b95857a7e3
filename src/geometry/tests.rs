use std::cell::Cell;
use std::rc::Rc;

use super::{
    BoundingBox, DrawnRectangle, GeometryError, LatLngBounds, LngLat, Overlay, Selection,
};

struct TrackedOverlay {
    bounds: LatLngBounds,
    detached: Rc<Cell<bool>>,
}

impl Overlay for TrackedOverlay {
    fn bounds(&self) -> LatLngBounds {
        self.bounds
    }

    fn detach(&mut self) {
        self.detached.set(true);
    }
}

fn tracked(a: LngLat, b: LngLat) -> (Box<dyn Overlay>, Rc<Cell<bool>>) {
    let detached = Rc::new(Cell::new(false));
    let overlay = TrackedOverlay {
        bounds: LatLngBounds::from_corners(a, b),
        detached: Rc::clone(&detached),
    };
    (Box::new(overlay), detached)
}

#[test]
fn bounding_box_is_normalized_for_every_drag_direction() {
    let expected = BoundingBox(LngLat::new(12.0, 41.0), LngLat::new(13.0, 42.0));
    let corners = [
        (LngLat::new(12.0, 41.0), LngLat::new(13.0, 42.0)),
        (LngLat::new(13.0, 42.0), LngLat::new(12.0, 41.0)),
        (LngLat::new(12.0, 42.0), LngLat::new(13.0, 41.0)),
        (LngLat::new(13.0, 41.0), LngLat::new(12.0, 42.0)),
    ];
    for (start, end) in corners {
        let mut selection = Selection::new();
        let captured = selection.on_overlay_complete(Box::new(DrawnRectangle::new(start, end)));
        assert_eq!(captured, expected);
        assert_eq!(captured.to_pairs(), [[12.0, 41.0], [13.0, 42.0]]);
    }
}

#[test]
fn second_rectangle_replaces_and_detaches_the_first() {
    let mut selection = Selection::new();
    let (first, first_detached) = tracked(LngLat::new(0.0, 0.0), LngLat::new(1.0, 1.0));
    let (second, second_detached) = tracked(LngLat::new(5.0, 5.0), LngLat::new(6.0, 7.0));

    selection.on_overlay_complete(first);
    assert!(!first_detached.get());

    selection.on_overlay_complete(second);
    assert!(first_detached.get());
    assert!(!second_detached.get());
    assert_eq!(
        selection.bounding_box().map(|bbox| bbox.to_pairs()),
        Some([[5.0, 5.0], [6.0, 7.0]])
    );
}

#[test]
fn degenerate_rectangle_is_accepted() {
    let mut selection = Selection::new();
    let point = LngLat::new(3.0, 4.0);
    let captured = selection.on_overlay_complete(Box::new(DrawnRectangle::new(point, point)));
    assert_eq!(captured.flatten(), [3.0, 4.0, 3.0, 4.0]);
}

#[test]
fn bounding_box_serializes_longitude_first() {
    let bbox = BoundingBox(LngLat::new(12.5, 41.25), LngLat::new(13.5, 42.75));
    let value = serde_json::to_value(bbox).expect("serialize bbox");
    assert_eq!(value, serde_json::json!([[12.5, 41.25], [13.5, 42.75]]));
    assert_eq!(bbox.flatten(), [12.5, 41.25, 13.5, 42.75]);
}

#[test]
fn bounds_parse_from_cli_string() {
    let bounds: LatLngBounds = "13, 42, 12, 41".parse().expect("parse bounds");
    assert_eq!(bounds.south_west(), LngLat::new(12.0, 41.0));
    assert_eq!(bounds.north_east(), LngLat::new(13.0, 42.0));
}

#[test]
fn malformed_bounds_are_rejected() {
    assert_eq!(
        "1,2,3".parse::<LatLngBounds>(),
        Err(GeometryError::WrongArity(3))
    );
    assert!(matches!(
        "1,2,x,4".parse::<LatLngBounds>(),
        Err(GeometryError::InvalidCoordinate { .. })
    ));
    assert_eq!(
        "0,95,1,1".parse::<LatLngBounds>(),
        Err(GeometryError::LatitudeOutOfRange(95.0))
    );
}
