//! Coordinate conversion between pixel space and grid cells.
//!
//! All conversions are pure. Rounding is half-away-from-zero (`f64::round`),
//! so `2.5 → 3`, `1.5 → 2` and `-0.5 → -1`.
//!
//! Degenerate geometry (a cell dimension of exactly zero, i.e. the container
//! was never measured) maps pixel positions to `(0, 0)` and pixel sizes to the
//! minimum `1 × 1` instead of dividing by zero.

use crate::constants::MIN_CELL_SPAN;
use crate::types::{ContainerSize, GridGeometry, ItemRect, PixelPoint, PixelRect, PixelSize};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Pixel size of one cell for a container split into `columns × rows`.
    ///
    /// `columns`/`rows` must be at least 1. The result is not clamped: margins
    /// larger than the available space yield a negative cell size.
    #[inline]
    pub fn cell_size(container: ContainerSize, columns: u32, rows: u32, margin: [f64; 2]) -> PixelSize {
        PixelSize::new(
            container.width / f64::from(columns) - 2.0 * margin[0],
            container.height / f64::from(rows) - 2.0 * margin[1],
        )
    }

    /// Full geometry for a measured container.
    pub fn geometry_for(container: ContainerSize, columns: u32, rows: u32, margin: [f64; 2]) -> GridGeometry {
        let cell = Self::cell_size(container, columns, rows, margin);
        GridGeometry {
            columns,
            rows,
            cell_width: cell.width,
            cell_height: cell.height,
            margin_x: margin[0],
            margin_y: margin[1],
        }
    }

    /// Pixel origin of an item. Margins are not applied; items sit flush on
    /// grid lines.
    #[inline]
    pub fn pixel_origin(rect: &ItemRect, geometry: &GridGeometry) -> PixelPoint {
        PixelPoint::new(
            f64::from(rect.x) * geometry.cell_width,
            f64::from(rect.y) * geometry.cell_height,
        )
    }

    /// Convert a pixel position to the nearest cell coordinate.
    #[inline]
    pub fn pixel_to_cell(pixels: PixelPoint, geometry: &GridGeometry) -> (i32, i32) {
        if geometry.is_degenerate() {
            return (0, 0);
        }
        (
            round_to_cells(pixels.x / geometry.cell_width),
            round_to_cells(pixels.y / geometry.cell_height),
        )
    }

    /// Cell position of `rect` after moving its pixel origin by `delta`.
    ///
    /// With degenerate geometry the delta maps to zero cells and the position
    /// is returned unchanged.
    pub fn translate(rect: &ItemRect, delta: PixelPoint, geometry: &GridGeometry) -> (i32, i32) {
        if geometry.is_degenerate() {
            return (rect.x, rect.y);
        }
        let origin = Self::pixel_origin(rect, geometry);
        Self::pixel_to_cell(PixelPoint::new(origin.x + delta.x, origin.y + delta.y), geometry)
    }

    /// Convert a pixel size to a cell span, never smaller than `1 × 1`.
    #[inline]
    pub fn pixel_size_to_cell_size(size: PixelSize, geometry: &GridGeometry) -> (u32, u32) {
        if geometry.is_degenerate() {
            return (MIN_CELL_SPAN, MIN_CELL_SPAN);
        }
        (
            round_to_span(size.width / geometry.cell_width),
            round_to_span(size.height / geometry.cell_height),
        )
    }

    /// Pixel frame of an item: origin per [`Self::pixel_origin`], size
    /// `w·cell_width × h·cell_height`.
    pub fn item_frame(rect: &ItemRect, geometry: &GridGeometry) -> PixelRect {
        let origin = Self::pixel_origin(rect, geometry);
        PixelRect::new(
            origin.x,
            origin.y,
            f64::from(rect.w) * geometry.cell_width,
            f64::from(rect.h) * geometry.cell_height,
        )
    }

    /// Pixel frame of the empty cell at `(column, row)`, inset by margins.
    pub fn cell_frame(column: u32, row: u32, geometry: &GridGeometry) -> PixelRect {
        let (col, row) = (f64::from(column), f64::from(row));
        PixelRect::new(
            col * geometry.cell_width + (col + 1.0) * 2.0 * geometry.margin_x,
            row * geometry.cell_height + (row + 1.0) * 2.0 * geometry.margin_y,
            geometry.cell_width,
            geometry.cell_height,
        )
    }
}

/// Round half away from zero; `as` saturates out-of-range values and maps NaN to 0.
#[inline]
fn round_to_cells(value: f64) -> i32 {
    value.round() as i32
}

#[inline]
fn round_to_span(value: f64) -> u32 {
    let rounded = value.round();
    if rounded < f64::from(MIN_CELL_SPAN) || rounded.is_nan() {
        MIN_CELL_SPAN
    } else {
        rounded as u32
    }
}
