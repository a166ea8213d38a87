//! Layout state machine - the authoritative item list and grid geometry.
//!
//! ## Intents
//!
//! ```text
//! ReplaceItems  (empty state)      -> pack incoming items, dirty = false
//! ReplaceItems  (non-empty state)  -> take items verbatim,  dirty = false
//! SetGeometry                      -> replace geometry; items and dirty untouched
//! MoveItem      (known id)         -> new (x, y) from pixel delta, dirty = true, repack
//! ResizeItem    (known id)         -> new (w, h) from pixel size,  dirty = true, repack
//! MoveItem / ResizeItem (unknown)  -> no-op
//! ```
//!
//! [`apply_intent`] is pure. It reports whether the caller must fire the
//! "items changed" notification; dispatching it is the caller's job.

use crate::input::coords::CoordinateConverter;
use crate::packing::{PackPolicy, pack_with};
use crate::perf::Operation;
use crate::profile_scope;
use crate::types::{GridGeometry, GridItem, ItemId, PixelPoint, PixelSize};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A mutation request for the layout state machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutIntent {
    /// Replace the item list from an external, authoritative source.
    ReplaceItems { items: Vec<GridItem> },
    /// Replace the grid geometry.
    SetGeometry { geometry: GridGeometry },
    /// Move an item by a pixel delta (end of a drag).
    MoveItem { id: ItemId, delta: PixelPoint },
    /// Resize an item to a pixel size (end of a resize gesture).
    ResizeItem { id: ItemId, size: PixelSize },
}

impl LayoutIntent {
    /// Returns true for user-driven position/size changes.
    pub fn is_positional(&self) -> bool {
        matches!(self, Self::MoveItem { .. } | Self::ResizeItem { .. })
    }
}

/// The authoritative layout. Only [`apply_intent`] writes to it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    items: Vec<GridItem>,
    geometry: GridGeometry,
    dirty: bool,
    #[serde(default)]
    policy: PackPolicy,
}

impl LayoutState {
    /// Empty layout on the default geometry using `policy` for every repack.
    pub fn new(policy: PackPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// True when the last applied mutation was a user-driven move or resize.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn policy(&self) -> &PackPolicy {
        &self.policy
    }

    pub fn item(&self, id: &ItemId) -> Option<&GridItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Replace the pack policy used by subsequent positional intents.
    pub fn set_policy(&mut self, policy: PackPolicy) {
        self.policy = policy;
    }

    /// Apply `intent` in place. Returns true if the change notification must fire.
    pub fn apply(&mut self, intent: LayoutIntent) -> bool {
        let transition = apply_intent(std::mem::take(self), intent);
        *self = transition.state;
        transition.notify
    }

    fn repack(&mut self) {
        self.items = pack_with(&self.items, &self.geometry, &self.policy).items;
    }
}

/// Result of applying one intent.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: LayoutState,
    /// Fire the "items changed" notification with `state.items()` exactly once.
    pub notify: bool,
}

impl Transition {
    fn unchanged(state: LayoutState) -> Self {
        Self { state, notify: false }
    }
}

/// Apply one intent to `state`, producing the next state.
pub fn apply_intent(mut state: LayoutState, intent: LayoutIntent) -> Transition {
    profile_scope!(Operation::ApplyIntent);

    match intent {
        LayoutIntent::ReplaceItems { items } => {
            if state.items.is_empty() {
                let outcome = pack_with(&items, &state.geometry, &state.policy);
                debug!(
                    items = outcome.items.len(),
                    dropped = outcome.dropped.len(),
                    "Initial item list packed"
                );
                state.items = outcome.items;
            } else {
                debug!(items = items.len(), "Item list replaced");
                state.items = items;
            }
            state.dirty = false;
            Transition::unchanged(state)
        }
        LayoutIntent::SetGeometry { geometry } => {
            state.geometry = geometry;
            Transition::unchanged(state)
        }
        LayoutIntent::MoveItem { id, delta } => {
            let geometry = state.geometry;
            let Some(item) = state.items.iter_mut().find(|item| item.id == id) else {
                debug!(item = %id, "Move ignored for unknown item");
                return Transition::unchanged(state);
            };
            let (x, y) = CoordinateConverter::translate(&item.layout, delta, &geometry);
            debug!(item = %id, from = ?(item.layout.x, item.layout.y), to = ?(x, y), "Item moved");
            item.layout.x = x;
            item.layout.y = y;
            state.dirty = true;
            state.repack();
            Transition { state, notify: true }
        }
        LayoutIntent::ResizeItem { id, size } => {
            let geometry = state.geometry;
            let Some(item) = state.items.iter_mut().find(|item| item.id == id) else {
                debug!(item = %id, "Resize ignored for unknown item");
                return Transition::unchanged(state);
            };
            let (w, h) = CoordinateConverter::pixel_size_to_cell_size(size, &geometry);
            debug!(item = %id, from = ?(item.layout.w, item.layout.h), to = ?(w, h), "Item resized");
            item.layout.w = w;
            item.layout.h = h;
            state.dirty = true;
            state.repack();
            Transition { state, notify: true }
        }
    }
}
