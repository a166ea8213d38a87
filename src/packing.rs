//! Packing engine - resolves overlapping items into a conflict-free layout.
//!
//! Items are visited in row-major reading order of their requested position
//! (stable on ties, so input order breaks them). An item whose footprint is
//! free keeps its cell; otherwise the engine scans rightward from the
//! requested cell, wrapping to column 0 of the next row whenever the
//! footprint would cross the last column, and takes the first free placement.
//!
//! The scan is bounded by a [`RowCeiling`]. Items that cannot be placed before
//! the ceiling, or that end up outside `[0, columns] × [0, rows]`, are dropped
//! from the result and reported in [`PackOutcome::dropped`]. One bad item
//! never prevents the rest of the grid from rendering.
//!
//! The result is returned in reading order of the final positions, which makes
//! packing idempotent: `pack(pack(items)) == pack(items)`.

use crate::constants::PLACEMENT_ROW_CEILING;
use crate::perf::Operation;
use crate::profile_scope;
use crate::types::{GridGeometry, GridItem, ItemId, ItemRect};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

// ============================================================================
// Policy
// ============================================================================

/// Upper bound for the placement scan, as a row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowCeiling {
    /// Stop scanning past this row.
    Fixed(u32),
    /// `max(base, per_item × item_count)`, for grids that legitimately hold
    /// many tall stacks of items.
    PerItem { base: u32, per_item: u32 },
}

impl Default for RowCeiling {
    fn default() -> Self {
        Self::Fixed(PLACEMENT_ROW_CEILING)
    }
}

impl RowCeiling {
    /// Resolve the ceiling for a pack over `item_count` items.
    pub fn resolve(&self, item_count: usize) -> i64 {
        match *self {
            RowCeiling::Fixed(row) => i64::from(row),
            RowCeiling::PerItem { base, per_item } => {
                let scaled = i64::from(per_item).saturating_mul(item_count as i64);
                scaled.max(i64::from(base))
            }
        }
    }
}

/// Tunables for [`pack_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackPolicy {
    #[serde(default)]
    pub row_ceiling: RowCeiling,
}

impl PackPolicy {
    pub fn with_row_ceiling(row_ceiling: RowCeiling) -> Self {
        Self { row_ceiling }
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Why an item was removed from the packed layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// No free placement before the row ceiling.
    NoPlacement,
    /// The final position lies outside `[0, columns] × [0, rows]`.
    OutOfBounds,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DroppedItem {
    pub id: ItemId,
    pub reason: DropReason,
}

/// Result of a pack: surviving items plus what was dropped and why.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PackOutcome {
    pub items: Vec<GridItem>,
    pub dropped: Vec<DroppedItem>,
}

// ============================================================================
// Occupancy
// ============================================================================

/// Set of occupied cells, filled as items are placed.
#[derive(Debug, Default)]
struct Occupancy {
    cells: HashSet<(i64, i64)>,
}

impl Occupancy {
    fn is_free(&self, x: i64, y: i64, w: u32, h: u32) -> bool {
        (y..y + i64::from(h)).all(|cy| (x..x + i64::from(w)).all(|cx| !self.cells.contains(&(cx, cy))))
    }

    fn occupy(&mut self, x: i64, y: i64, w: u32, h: u32) {
        for cy in y..y + i64::from(h) {
            for cx in x..x + i64::from(w) {
                self.cells.insert((cx, cy));
            }
        }
    }
}

// ============================================================================
// Packing
// ============================================================================

/// Pack `items` with the default policy, returning only the surviving items.
pub fn pack(items: &[GridItem], geometry: &GridGeometry) -> Vec<GridItem> {
    pack_with(items, geometry, &PackPolicy::default()).items
}

/// Pack `items` onto `geometry`'s grid.
///
/// Deterministic and total: the same input always produces the same outcome
/// and nothing here can fail.
pub fn pack_with(items: &[GridItem], geometry: &GridGeometry, policy: &PackPolicy) -> PackOutcome {
    profile_scope!(Operation::Pack);

    let columns = i64::from(geometry.columns.max(1));
    let rows = i64::from(geometry.rows.max(1));
    let ceiling = policy.row_ceiling.resolve(items.len());

    let mut ordered: Vec<GridItem> = items.to_vec();
    ordered.sort_by_key(|item| (item.layout.y, item.layout.x));

    let mut occupancy = Occupancy::default();
    let mut outcome = PackOutcome::default();

    for mut item in ordered {
        let ItemRect { w, h, .. } = item.layout;

        let Some((x, y)) = find_placement(&occupancy, &item.layout, columns, ceiling) else {
            warn!(
                item = %item.id,
                ceiling,
                "Item could not be placed within the grid and will be removed"
            );
            outcome.dropped.push(DroppedItem {
                id: item.id,
                reason: DropReason::NoPlacement,
            });
            continue;
        };

        if x >= 0 && y >= 0 {
            occupancy.occupy(x, y, w, h);
        }

        if x < 0 || y < 0 || x > columns || y > rows {
            warn!(item = %item.id, x, y, columns, rows, "Item lies outside the grid and will be removed");
            outcome.dropped.push(DroppedItem {
                id: item.id,
                reason: DropReason::OutOfBounds,
            });
            continue;
        }

        // Both coordinates are within [0, columns] / [0, rows], which fit in i32.
        item.layout.x = x as i32;
        item.layout.y = y as i32;
        outcome.items.push(item);
    }

    outcome.items.sort_by_key(|item| (item.layout.y, item.layout.x));
    outcome
}

/// Find where `rect` lands given the current occupancy.
///
/// Returns the requested cell when free. Otherwise scans row-major from it.
/// The wrap test runs before the ceiling test, so a free placement on a row
/// past the ceiling is still rejected.
fn find_placement(occupancy: &Occupancy, rect: &ItemRect, columns: i64, ceiling: i64) -> Option<(i64, i64)> {
    let (x, y) = (i64::from(rect.x), i64::from(rect.y));
    if occupancy.is_free(x, y, rect.w, rect.h) {
        return Some((x, y));
    }

    let (mut scan_x, mut scan_y) = (x, y);
    loop {
        if scan_x + i64::from(rect.w) > columns {
            scan_x = 0;
            scan_y += 1;
        }

        if scan_y > ceiling {
            return None;
        }

        if occupancy.is_free(scan_x, scan_y, rect.w, rect.h) {
            return Some((scan_x, scan_y));
        }

        scan_x += 1;
    }
}
