//! Unit tests for hit testing through the spatial index.

use crate::helpers::id;
use gridboard::spatial_index::SpatialIndex;
use gridboard::{PixelPoint, PixelRect};

#[test]
fn test_later_item_is_on_top() {
    let index = SpatialIndex::from_frames([
        (id("under"), PixelRect::new(0.0, 0.0, 200.0, 200.0)),
        (id("over"), PixelRect::new(100.0, 100.0, 200.0, 200.0)),
    ]);
    assert_eq!(index.topmost_at(PixelPoint::new(150.0, 150.0)), Some(id("over")));
    assert_eq!(index.topmost_at(PixelPoint::new(50.0, 50.0)), Some(id("under")));
    assert_eq!(index.query_point(PixelPoint::new(150.0, 150.0)), vec![id("under"), id("over")]);
}

#[test]
fn test_edges_are_inclusive() {
    let index = SpatialIndex::from_frames([(id("a"), PixelRect::new(0.0, 0.0, 100.0, 100.0))]);
    assert_eq!(index.topmost_at(PixelPoint::new(100.0, 100.0)), Some(id("a")));
    assert_eq!(index.topmost_at(PixelPoint::new(100.5, 100.0)), None);
}

#[test]
fn test_rebuild_replaces_contents() {
    let mut index = SpatialIndex::from_frames([(id("a"), PixelRect::new(0.0, 0.0, 10.0, 10.0))]);
    index.rebuild([(id("b"), PixelRect::new(50.0, 50.0, 10.0, 10.0))]);
    assert_eq!(index.len(), 1);
    assert_eq!(index.topmost_at(PixelPoint::new(5.0, 5.0)), None);
    assert_eq!(index.topmost_at(PixelPoint::new(55.0, 55.0)), Some(id("b")));

    index.clear();
    assert!(index.is_empty());
}
