//! External signals consumed by the grid.
//!
//! Every signal carries raw pixel values only; grid units never originate
//! outside the engine. Scripts of these events drive the replay binary.

use crate::types::{ContainerSize, GridItem, ItemId, PixelPoint, PixelSize};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GridEvent {
    /// The container was measured (or re-measured).
    Container { size: ContainerSize },
    /// A new item list from the application.
    ReplaceItems { items: Vec<GridItem> },
    /// A drag finished with the given pixel delta.
    DragEnd { id: ItemId, delta: PixelPoint },
    /// Pointer down on an item's resize handle.
    ResizeStart {
        id: ItemId,
        pointer: PixelPoint,
        size: PixelSize,
    },
    /// Pointer moved while resizing.
    ResizeMove { pointer: PixelPoint },
    /// Pointer released.
    ResizeEnd,
    /// Gesture abandoned (escape, focus loss).
    ResizeCancel,
}

impl GridEvent {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GridEvent::Container { .. } => "container",
            GridEvent::ReplaceItems { .. } => "replace_items",
            GridEvent::DragEnd { .. } => "drag_end",
            GridEvent::ResizeStart { .. } => "resize_start",
            GridEvent::ResizeMove { .. } => "resize_move",
            GridEvent::ResizeEnd => "resize_end",
            GridEvent::ResizeCancel => "resize_cancel",
        }
    }
}
