//! Event Flow Integration Tests
//!
//! Scripts of serialized events, as consumed by the replay binary.

use crate::helpers::{TestGridBuilder, id, rect_of};
use gridboard::input::GridEvent;
use gridboard::{GridOptions, InteractiveGrid, ItemRect, PixelPoint};

fn replay(grid: &mut InteractiveGrid, script: &str) -> usize {
    let events: Vec<GridEvent> = serde_json::from_str(script).unwrap();
    events.into_iter().map(|e| grid.handle_event(e)).filter(|fired| *fired).count()
}

#[test]
fn test_full_script() {
    let mut grid = InteractiveGrid::new(GridOptions::default());
    let fired = replay(
        &mut grid,
        r#"[
            {"type": "container", "size": {"width": 400, "height": 400}},
            {"type": "replace_items", "items": [
                {"id": "a", "layout": {"x": 0, "y": 0, "w": 1, "h": 1}},
                {"id": 7, "layout": {"x": 0, "y": 0, "w": 1, "h": 1}}
            ]},
            {"type": "drag_end", "id": 7, "delta": {"x": 0, "y": 100}},
            {"type": "resize_start", "id": "a", "pointer": {"x": 100, "y": 100}, "size": {"width": 100, "height": 100}},
            {"type": "resize_move", "pointer": {"x": 300, "y": 100}},
            {"type": "resize_end"}
        ]"#,
    );

    assert_eq!(fired, 2);
    assert_eq!(grid.notification_count(), 2);
    assert_eq!(rect_of(grid.items(), "a"), ItemRect::new(0, 0, 3, 1));
    let seven = grid.item(&gridboard::ItemId::Int(7)).map(|i| i.layout);
    assert_eq!(seven, Some(ItemRect::new(1, 1, 1, 1)));
}

#[test]
fn test_drag_during_resize_is_ignored() {
    let mut grid = TestGridBuilder::new().with_item("a", 0, 0, 1, 1).build();
    let fired = replay(
        &mut grid,
        r#"[
            {"type": "resize_start", "id": "a", "pointer": {"x": 100, "y": 100}, "size": {"width": 100, "height": 100}},
            {"type": "drag_end", "id": "a", "delta": {"x": 200, "y": 0}},
            {"type": "resize_cancel"},
            {"type": "resize_end"}
        ]"#,
    );
    assert_eq!(fired, 0);
    assert_eq!(rect_of(grid.items(), "a"), ItemRect::new(0, 0, 1, 1));
}

#[test]
fn test_pointer_down_on_handle_starts_resize() {
    let mut grid = TestGridBuilder::new().with_item("a", 1, 1, 1, 1).build();

    assert_eq!(grid.begin_resize_at(PixelPoint::new(150.0, 150.0)), None);
    assert_eq!(grid.begin_resize_at(PixelPoint::new(198.0, 198.0)), Some(id("a")));
    grid.resize_move(PixelPoint::new(298.0, 198.0));

    let frames = grid.item_frames();
    assert!(frames[0].resizing);
    assert_eq!(frames[0].frame.width, 200.0);

    assert!(grid.resize_end());
    assert_eq!(rect_of(grid.items(), "a"), ItemRect::new(1, 1, 2, 1));
}

#[test]
fn test_unknown_ids_are_silent() {
    let (mut grid, recorder) = TestGridBuilder::new().with_item("a", 0, 0, 1, 1).build_recording();
    assert!(!grid.drag_end(id("ghost"), PixelPoint::new(100.0, 0.0)));
    assert!(!grid.resize_start(id("ghost"), PixelPoint::default(), Default::default()));
    assert!(!grid.resize_end());
    assert_eq!(recorder.count(), 0);
}

#[test]
fn test_options_reload_changes_capacity() {
    let mut grid = TestGridBuilder::new().with_item("a", 3, 0, 1, 1).build();
    grid.apply_options(GridOptions::new(8, 8)).unwrap();

    assert_eq!(grid.geometry().cell_width, 50.0);
    // Geometry changes never repack; the next move does.
    assert_eq!(rect_of(grid.items(), "a"), ItemRect::new(3, 0, 1, 1));
    grid.drag_end(id("a"), PixelPoint::new(100.0, 0.0));
    assert_eq!(rect_of(grid.items(), "a"), ItemRect::new(5, 0, 1, 1));
}
