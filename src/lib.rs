//! Gridboard - grid layout engine for editable tile dashboards.
//!
//! Items occupy integer cell rectangles on a fixed `columns × rows` grid.
//! Users drag and resize them in pixels; the engine maps pixels to cells,
//! resolves collisions by repacking in reading order, and reports every
//! user-driven change through a single notification.

pub mod constants;
pub mod error;
pub mod grid;
pub mod input;
pub mod layout;
pub mod options;
pub mod options_watcher;
pub mod packing;
pub mod perf;
pub mod spatial_index;
pub mod types;

pub use error::{GridError, GridResult};
pub use grid::{InteractiveGrid, ItemFrame};
pub use layout::{LayoutIntent, LayoutState, Transition, apply_intent};
pub use options::GridOptions;
pub use packing::{PackOutcome, PackPolicy, RowCeiling, pack, pack_with};
pub use types::{ContainerSize, GridGeometry, GridItem, ItemId, ItemRect, PixelPoint, PixelRect, PixelSize};
