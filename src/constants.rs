//! Grid-wide constants.
//!
//! Centralizes defaults and limits so the mapper, packer and interaction
//! layer agree on the same numbers.

// ============================================================================
// Grid Defaults
// ============================================================================

/// Default number of grid columns
pub const DEFAULT_COLUMNS: u32 = 4;

/// Default number of grid rows
pub const DEFAULT_ROWS: u32 = 4;

/// Default cell margin `[x, y]` in pixels
pub const DEFAULT_MARGIN: [f64; 2] = [0.0, 0.0];

/// Smallest span an item may occupy along either axis, in cells
pub const MIN_CELL_SPAN: u32 = 1;

// ============================================================================
// Packing
// ============================================================================

/// Row index past which the placement scan gives up and drops the item.
///
/// Guards against pathological inputs (more items than any plausible grid
/// can hold). It is not a grid capacity.
pub const PLACEMENT_ROW_CEILING: u32 = 100;

// ============================================================================
// Interaction
// ============================================================================

/// Edge length of the square resize handle in an item's bottom-right corner
pub const RESIZE_HANDLE_SIZE: f64 = 16.0;

// ============================================================================
// Timing
// ============================================================================

/// Packing or intent application slower than this is logged (milliseconds)
pub const SLOW_OPERATION_MS: f64 = 4.0;

/// Budget for replaying a whole event script (milliseconds)
pub const REPLAY_BUDGET_MS: f64 = 250.0;

