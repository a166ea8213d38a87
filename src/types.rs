//! Core types for the gridboard layout engine.
//!
//! This module defines the item model (identifiers and cell rectangles), the
//! grid geometry shared by the mapper and packer, and the pixel-space
//! primitives exchanged with the rendering and pointer layers.

use crate::constants::{DEFAULT_COLUMNS, DEFAULT_ROWS, MIN_CELL_SPAN};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Item Model
// ============================================================================

/// Identifier of a grid item, unique among the items of one grid.
///
/// Serialized untagged so layouts can use either `"id": "chart"` or `"id": 3`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Str(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(n) => write!(f, "{}", n),
            ItemId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Int(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Str(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Str(s)
    }
}

/// Position and size of an item in grid-cell units.
///
/// The item occupies cells `[x, x + w) × [y, y + h)`. `x`/`y` are signed
/// because a drag can carry an item past the top or left edge; such items are
/// removed on the next pack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl ItemRect {
    /// Create a rect, raising `w`/`h` to the minimum span.
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            x,
            y,
            w: w.max(MIN_CELL_SPAN),
            h: h.max(MIN_CELL_SPAN),
        }
    }

    /// Exclusive right edge in cells
    #[inline]
    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.w)
    }

    /// Exclusive bottom edge in cells
    #[inline]
    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.h)
    }

    /// Iterate over every cell of the footprint, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i64, i64)> + use<> {
        let (x0, y0) = (i64::from(self.x), i64::from(self.y));
        let (x1, y1) = (self.right(), self.bottom());
        (y0..y1).flat_map(move |cy| (x0..x1).map(move |cx| (cx, cy)))
    }

    /// Returns true if the two footprints share at least one cell.
    pub fn overlaps(&self, other: &ItemRect) -> bool {
        i64::from(self.x) < other.right()
            && i64::from(other.x) < self.right()
            && i64::from(self.y) < other.bottom()
            && i64::from(other.y) < self.bottom()
    }
}

/// An item placed on the grid.
///
/// `id` is fixed for the item's lifetime; `layout` changes only through the
/// layout state machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridItem {
    pub id: ItemId,
    pub layout: ItemRect,
}

impl GridItem {
    pub fn new(id: impl Into<ItemId>, layout: ItemRect) -> Self {
        Self {
            id: id.into(),
            layout,
        }
    }
}

// ============================================================================
// Grid Geometry
// ============================================================================

/// Current grid capacity and the derived pixel size of one cell.
///
/// `cell_width`/`cell_height` are `0.0` until the container has been measured.
/// That state is legitimate and every conversion guards against it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    pub columns: u32,
    pub rows: u32,
    #[serde(default)]
    pub cell_width: f64,
    #[serde(default)]
    pub cell_height: f64,
    #[serde(default)]
    pub margin_x: f64,
    #[serde(default)]
    pub margin_y: f64,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            cell_width: 0.0,
            cell_height: 0.0,
            margin_x: 0.0,
            margin_y: 0.0,
        }
    }
}

impl GridGeometry {
    /// Geometry with explicit cell dimensions and no margins.
    pub fn with_cells(columns: u32, rows: u32, cell_width: f64, cell_height: f64) -> Self {
        Self {
            columns,
            rows,
            cell_width,
            cell_height,
            margin_x: 0.0,
            margin_y: 0.0,
        }
    }

    /// Returns true if either cell dimension is exactly zero (unmeasured).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.cell_width == 0.0 || self.cell_height == 0.0
    }
}

// ============================================================================
// Pixel Space
// ============================================================================

/// A point or delta in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

impl PixelSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Measured size of the grid container. Zero before the first measurement.
pub type ContainerSize = PixelSize;

/// An axis-aligned rectangle in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> PixelSize {
        PixelSize::new(self.width, self.height)
    }

    /// Edge-inclusive containment test.
    #[inline]
    pub fn contains(&self, point: PixelPoint) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}
