//! Resize gesture tracker - live pixel size of the item being resized.
//!
//! ## State Transitions
//!
//! ```text
//! Idle   -> Active   (resize start: item id, pointer position, current pixel size)
//! Active -> Active   (pointer move: size += pointer - anchor, anchor = pointer)
//! Active -> Idle     (end: commit if the recorded size is valid)
//! Active -> Idle     (cancel: never commits)
//! ```
//!
//! Both axes follow the same rule: moving the pointer right or down grows
//! the rectangle, moving it left or up shrinks it. The anchor advances on
//! every move, so reversing direction mid-gesture does not drift.
//!
//! The gesture is independent of the layout. Nothing reaches the layout
//! state machine until [`ResizeGesture::end`] hands back a [`ResizeCommit`].

use crate::types::{ItemId, PixelPoint, PixelSize};
use tracing::trace;

/// Resize gesture state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResizeGesture {
    /// No resize in progress
    #[default]
    Idle,

    /// One item is being resized
    Active {
        /// Item being resized
        item_id: ItemId,
        /// Pointer position at the previous step
        anchor: PixelPoint,
        /// Live pixel size
        size: PixelSize,
    },
}

/// A finished gesture, ready for the layout's resize intent.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeCommit {
    pub item_id: ItemId,
    pub size: PixelSize,
}

impl ResizeGesture {
    /// Returns true if a resize is in progress
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Returns true if `id` is the item being resized
    pub fn is_resizing(&self, id: &ItemId) -> bool {
        self.item_id() == Some(id)
    }

    /// Get the item ID being resized, if any
    pub fn item_id(&self) -> Option<&ItemId> {
        match self {
            Self::Active { item_id, .. } => Some(item_id),
            Self::Idle => None,
        }
    }

    /// Get the live pixel size, if resizing
    pub fn live_size(&self) -> Option<PixelSize> {
        match self {
            Self::Active { size, .. } => Some(*size),
            Self::Idle => None,
        }
    }

    /// Begin resizing `item_id`. Replaces any gesture already in progress.
    pub fn start(&mut self, item_id: ItemId, pointer: PixelPoint, size: PixelSize) {
        trace!(item = %item_id, ?pointer, ?size, "Resize started");
        *self = Self::Active {
            item_id,
            anchor: pointer,
            size,
        };
    }

    /// Track a pointer move. Returns the new live size, or `None` when idle.
    pub fn pointer_moved(&mut self, pointer: PixelPoint) -> Option<PixelSize> {
        let Self::Active { anchor, size, .. } = self else {
            return None;
        };
        size.width += pointer.x - anchor.x;
        size.height += pointer.y - anchor.y;
        *anchor = pointer;
        trace!(width = size.width, height = size.height, "Resize moved");
        Some(*size)
    }

    /// Finish the gesture. Always returns to idle; yields a commit only when
    /// the recorded size is finite and positive on both axes.
    pub fn end(&mut self) -> Option<ResizeCommit> {
        match std::mem::take(self) {
            Self::Active { item_id, size, .. } if is_committable(size) => Some(ResizeCommit { item_id, size }),
            Self::Active { item_id, size, .. } => {
                trace!(item = %item_id, ?size, "Resize ended without a valid size");
                None
            }
            Self::Idle => None,
        }
    }

    /// Abandon the gesture without committing.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}

fn is_committable(size: PixelSize) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
