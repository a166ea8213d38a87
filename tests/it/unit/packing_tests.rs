//! Unit tests for the packing engine.

use crate::helpers::{assert_in_bounds, assert_no_overlap, geometry, id, ids, item, rect_of};
use gridboard::packing::{DropReason, DroppedItem};
use gridboard::{ItemRect, PackPolicy, RowCeiling, pack, pack_with};

#[test]
fn test_initial_collision_scenario() {
    let items = vec![item("A", 0, 0, 1, 1), item("B", 0, 0, 1, 1)];
    let packed = pack(&items, &geometry(4, 4, 50.0));
    assert_eq!(rect_of(&packed, "A"), ItemRect::new(0, 0, 1, 1));
    assert_eq!(rect_of(&packed, "B"), ItemRect::new(1, 0, 1, 1));
}

#[test]
fn test_priority_follows_reading_order_not_input_order() {
    // "late" is listed first but requests a later cell in reading order.
    let items = vec![item("late", 1, 0, 2, 1), item("early", 0, 0, 2, 1)];
    let packed = pack(&items, &geometry(4, 4, 50.0));
    assert_eq!(rect_of(&packed, "early"), ItemRect::new(0, 0, 2, 1));
    assert_eq!(rect_of(&packed, "late"), ItemRect::new(2, 0, 2, 1));
}

#[test]
fn test_tall_item_blocks_lower_rows() {
    let items = vec![item("tall", 0, 0, 1, 3), item("x", 0, 1, 1, 1), item("y", 0, 2, 1, 1)];
    let packed = pack(&items, &geometry(2, 4, 50.0));
    assert_eq!(rect_of(&packed, "x"), ItemRect::new(1, 1, 1, 1));
    assert_eq!(rect_of(&packed, "y"), ItemRect::new(1, 2, 1, 1));
    assert_no_overlap(&packed);
}

#[test]
fn test_full_grid_pushes_to_boundary_row() {
    let items: Vec<_> = ["a", "b", "c", "d", "e"].iter().map(|n| item(n, 0, 0, 1, 1)).collect();
    let g = geometry(2, 2, 50.0);
    let packed = pack(&items, &g);
    // Row 2 equals `rows` and is still reported.
    assert_eq!(rect_of(&packed, "e"), ItemRect::new(0, 2, 1, 1));
    assert_in_bounds(&packed, &g);
}

#[test]
fn test_drop_on_overflow() {
    let items: Vec<_> = (0..103).map(|n| item(&format!("i{n}"), 0, 0, 1, 1)).collect();
    let outcome = pack_with(&items, &geometry(1, 200, 50.0), &PackPolicy::default());
    assert_eq!(outcome.items.len(), 101);
    assert_eq!(
        outcome.dropped,
        vec![
            DroppedItem {
                id: id("i101"),
                reason: DropReason::NoPlacement
            },
            DroppedItem {
                id: id("i102"),
                reason: DropReason::NoPlacement
            },
        ]
    );
}

#[test]
fn test_per_item_ceiling_keeps_large_stacks() {
    let items: Vec<_> = (0..150).map(|n| item(&format!("i{n}"), 0, 0, 1, 1)).collect();
    let policy = PackPolicy::with_row_ceiling(RowCeiling::PerItem { base: 100, per_item: 2 });
    let outcome = pack_with(&items, &geometry(1, 200, 50.0), &policy);
    assert_eq!(outcome.items.len(), 150);
    assert!(outcome.dropped.is_empty());
}

#[test]
fn test_output_is_in_final_reading_order() {
    let items = vec![item("b", 1, 1, 1, 1), item("a", 3, 0, 1, 1)];
    let packed = pack(&items, &geometry(4, 4, 50.0));
    assert_eq!(ids(&packed), vec!["a", "b"]);
}
