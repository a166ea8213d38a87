//! Property tests for packing and the move/resize flow.

use crate::helpers::{assert_in_bounds, assert_no_overlap, geometry};
use gridboard::{GridItem, ItemId, ItemRect, PixelPoint, pack};
use proptest::prelude::*;

fn arb_items(max_len: usize) -> impl Strategy<Value = Vec<GridItem>> {
    prop::collection::vec((-2i32..10, -2i32..10, 1u32..4, 1u32..4), 0..max_len).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(n, (x, y, w, h))| GridItem::new(ItemId::Int(n as i64), ItemRect::new(x, y, w, h)))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn packed_items_never_overlap(items in arb_items(24), columns in 1u32..8, rows in 1u32..8) {
        let g = geometry(columns, rows, 50.0);
        assert_no_overlap(&pack(&items, &g));
    }

    #[test]
    fn packed_items_stay_in_bounds(items in arb_items(24), columns in 1u32..8, rows in 1u32..8) {
        let g = geometry(columns, rows, 50.0);
        assert_in_bounds(&pack(&items, &g), &g);
    }

    #[test]
    fn packing_is_idempotent(items in arb_items(24), columns in 1u32..8, rows in 1u32..8) {
        let g = geometry(columns, rows, 50.0);
        let once = pack(&items, &g);
        let twice = pack(&once, &g);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn whole_cell_moves_shift_exactly(x in 0i32..3, y in 0i32..3, dx in -2i32..3, dy in -2i32..3) {
        let g = geometry(8, 8, 50.0);
        let rect = ItemRect::new(x + 2, y + 2, 1, 1);
        let delta = PixelPoint::new(f64::from(dx) * 50.0, f64::from(dy) * 50.0);
        let moved = gridboard::input::CoordinateConverter::translate(&rect, delta, &g);
        prop_assert_eq!(moved, (rect.x + dx, rect.y + dy));
    }
}
