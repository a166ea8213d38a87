//! Interactive grid - owns the layout, the resize gesture and the options.
//!
//! This is the single place where pointer-level signals meet the layout
//! state machine:
//!
//! - drag ends become `MoveItem` intents, except for the item being resized
//! - resize gestures are tracked in pixels and committed as `ResizeItem`
//! - container measurements become `SetGeometry`
//! - every applied positional intent fires the change listener exactly once

use crate::constants::RESIZE_HANDLE_SIZE;
use crate::error::GridResult;
use crate::input::coords::CoordinateConverter;
use crate::input::events::GridEvent;
use crate::input::resize::ResizeGesture;
use crate::layout::{LayoutIntent, LayoutState};
use crate::options::GridOptions;
use crate::spatial_index::SpatialIndex;
use crate::types::{ContainerSize, GridGeometry, GridItem, ItemId, PixelPoint, PixelRect, PixelSize};
use serde::Serialize;
use tracing::{debug, info};

/// Callback receiving the item list after every user-driven change.
pub type ChangeListener = Box<dyn FnMut(&[GridItem])>;

/// Render frame of one item.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemFrame {
    pub id: ItemId,
    pub frame: PixelRect,
    /// True while this item is being resized; `frame` then carries the live size.
    pub resizing: bool,
}

pub struct InteractiveGrid {
    layout: LayoutState,
    resize: ResizeGesture,
    options: GridOptions,
    /// Last measured container, `None` before the first measurement
    container: Option<ContainerSize>,
    hit_index: SpatialIndex,
    listener: Option<ChangeListener>,
    notifications: usize,
}

impl InteractiveGrid {
    pub fn new(options: GridOptions) -> Self {
        let mut layout = LayoutState::new(options.packing);
        layout.apply(LayoutIntent::SetGeometry {
            geometry: options.unmeasured_geometry(),
        });
        Self {
            layout,
            resize: ResizeGesture::default(),
            options,
            container: None,
            hit_index: SpatialIndex::new(),
            listener: None,
            notifications: 0,
        }
    }

    pub fn with_listener(mut self, listener: impl FnMut(&[GridItem]) + 'static) -> Self {
        self.set_listener(listener);
        self
    }

    pub fn set_listener(&mut self, listener: impl FnMut(&[GridItem]) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn items(&self) -> &[GridItem] {
        self.layout.items()
    }

    pub fn item(&self, id: &ItemId) -> Option<&GridItem> {
        self.layout.item(id)
    }

    pub fn geometry(&self) -> &GridGeometry {
        self.layout.geometry()
    }

    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn resize_gesture(&self) -> &ResizeGesture {
        &self.resize
    }

    pub fn container(&self) -> Option<ContainerSize> {
        self.container
    }

    pub fn is_dirty(&self) -> bool {
        self.layout.is_dirty()
    }

    /// Number of change notifications fired so far.
    pub fn notification_count(&self) -> usize {
        self.notifications
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    /// Record a container measurement and derive the cell size from it.
    pub fn set_container(&mut self, size: ContainerSize) {
        self.container = Some(size);
        let geometry = self.options.geometry_for(size);
        debug!(
            width = size.width,
            height = size.height,
            cell_width = geometry.cell_width,
            cell_height = geometry.cell_height,
            "Container measured"
        );
        self.dispatch(LayoutIntent::SetGeometry { geometry });
    }

    /// Apply new options, keeping the current items and container.
    pub fn apply_options(&mut self, options: GridOptions) -> GridResult<()> {
        options.validate()?;
        info!(columns = options.columns, rows = options.rows, "Applying grid options");

        let geometry = match self.container {
            Some(size) => options.geometry_for(size),
            None => options.unmeasured_geometry(),
        };
        self.layout.set_policy(options.packing);
        self.options = options;
        self.dispatch(LayoutIntent::SetGeometry { geometry });
        Ok(())
    }

    pub fn replace_items(&mut self, items: Vec<GridItem>) {
        self.dispatch(LayoutIntent::ReplaceItems { items });
    }

    /// A drag finished. Returns true if the layout changed.
    pub fn drag_end(&mut self, id: ItemId, delta: PixelPoint) -> bool {
        if self.resize.is_resizing(&id) {
            debug!(item = %id, "Drag suppressed while resizing");
            return false;
        }
        self.dispatch(LayoutIntent::MoveItem { id, delta })
    }

    /// Begin resizing `id` from its current pixel `size`. Returns false for
    /// unknown items.
    pub fn resize_start(&mut self, id: ItemId, pointer: PixelPoint, size: PixelSize) -> bool {
        if self.layout.item(&id).is_none() {
            debug!(item = %id, "Resize start ignored for unknown item");
            return false;
        }
        self.resize.start(id, pointer, size);
        true
    }

    /// Begin a resize if `pointer` is on an item's resize handle, starting
    /// from the item's current frame.
    pub fn begin_resize_at(&mut self, pointer: PixelPoint) -> Option<ItemId> {
        let id = self.resize_handle_at(pointer)?;
        let item = self.layout.item(&id)?;
        let frame = CoordinateConverter::item_frame(&item.layout, self.layout.geometry());
        self.resize.start(id.clone(), pointer, frame.size());
        Some(id)
    }

    /// Track the pointer during a resize. Returns the live size.
    pub fn resize_move(&mut self, pointer: PixelPoint) -> Option<PixelSize> {
        self.resize.pointer_moved(pointer)
    }

    /// Finish the resize. Returns true if a resize was committed to the layout.
    pub fn resize_end(&mut self) -> bool {
        match self.resize.end() {
            Some(commit) => self.dispatch(LayoutIntent::ResizeItem {
                id: commit.item_id,
                size: commit.size,
            }),
            None => false,
        }
    }

    pub fn resize_cancel(&mut self) {
        self.resize.cancel();
    }

    /// Route one external signal. Returns true if the change listener fired.
    pub fn handle_event(&mut self, event: GridEvent) -> bool {
        debug!(event = event.kind(), "Grid event");
        match event {
            GridEvent::Container { size } => {
                self.set_container(size);
                false
            }
            GridEvent::ReplaceItems { items } => {
                self.replace_items(items);
                false
            }
            GridEvent::DragEnd { id, delta } => self.drag_end(id, delta),
            GridEvent::ResizeStart { id, pointer, size } => {
                self.resize_start(id, pointer, size);
                false
            }
            GridEvent::ResizeMove { pointer } => {
                self.resize_move(pointer);
                false
            }
            GridEvent::ResizeEnd => self.resize_end(),
            GridEvent::ResizeCancel => {
                self.resize_cancel();
                false
            }
        }
    }

    // ========================================================================
    // Render model
    // ========================================================================

    /// Frames for every item in list order, using the live size for the
    /// item being resized.
    pub fn item_frames(&self) -> Vec<ItemFrame> {
        let geometry = self.layout.geometry();
        self.layout
            .items()
            .iter()
            .map(|item| {
                let mut frame = CoordinateConverter::item_frame(&item.layout, geometry);
                let resizing = self.resize.is_resizing(&item.id);
                if let Some(size) = self.resize.live_size().filter(|_| resizing) {
                    frame.width = size.width;
                    frame.height = size.height;
                }
                ItemFrame {
                    id: item.id.clone(),
                    frame,
                    resizing,
                }
            })
            .collect()
    }

    /// Frames of the empty background cells, row by row.
    pub fn cell_frames(&self) -> Vec<PixelRect> {
        let geometry = *self.layout.geometry();
        (0..geometry.rows)
            .flat_map(|row| (0..geometry.columns).map(move |column| CoordinateConverter::cell_frame(column, row, &geometry)))
            .collect()
    }

    // ========================================================================
    // Hit testing
    // ========================================================================

    /// Top-most item under `point`.
    pub fn item_at(&self, point: PixelPoint) -> Option<ItemId> {
        self.hit_index.topmost_at(point)
    }

    /// Item whose bottom-right resize handle is under `point`.
    pub fn resize_handle_at(&self, point: PixelPoint) -> Option<ItemId> {
        let id = self.item_at(point)?;
        let item = self.layout.item(&id)?;
        let frame = CoordinateConverter::item_frame(&item.layout, self.layout.geometry());
        let handle = PixelRect::new(
            frame.x + frame.width - RESIZE_HANDLE_SIZE,
            frame.y + frame.height - RESIZE_HANDLE_SIZE,
            RESIZE_HANDLE_SIZE,
            RESIZE_HANDLE_SIZE,
        );
        handle.contains(point).then_some(id)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn dispatch(&mut self, intent: LayoutIntent) -> bool {
        let notify = self.layout.apply(intent);
        self.refresh_hit_index();
        if notify {
            self.notify();
        }
        notify
    }

    fn refresh_hit_index(&mut self) {
        let geometry = self.layout.geometry();
        let frames: Vec<(ItemId, PixelRect)> = self
            .layout
            .items()
            .iter()
            .map(|item| (item.id.clone(), CoordinateConverter::item_frame(&item.layout, geometry)))
            .collect();
        self.hit_index.rebuild(frames);
    }

    fn notify(&mut self) {
        self.notifications += 1;
        if let Some(listener) = self.listener.as_mut() {
            listener(self.layout.items());
        }
    }
}

impl Default for InteractiveGrid {
    fn default() -> Self {
        Self::new(GridOptions::default())
    }
}
